pub mod catalog;
pub mod teacher;

pub use catalog::{Grade, Language, Subject};
pub use teacher::{Feedback, TaughtSubject, Teacher};
