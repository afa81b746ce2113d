pub mod dto;
pub mod use_cases;

pub use dto::{SearchTeachersRequest, TeacherListing};
pub use use_cases::{SearchTeachersHandler, SearchTeachersQuery, SearchTeachersResult};
