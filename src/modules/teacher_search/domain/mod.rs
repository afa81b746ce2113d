pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Feedback, Grade, Language, Subject, TaughtSubject, Teacher};
pub use repositories::TeacherRepository;
pub use services::{CandidateResolver, CandidateSet, RefinementPipeline};
pub use value_objects::{MinRating, RankedTeacher, SearchCriteria};
