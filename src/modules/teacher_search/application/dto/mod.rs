pub mod search_request;
pub mod teacher_listing;

pub use search_request::SearchTeachersRequest;
pub use teacher_listing::{SubjectListing, TeacherListing};
