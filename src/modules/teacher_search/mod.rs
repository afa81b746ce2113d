pub mod application;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{SearchTeachersHandler, SearchTeachersRequest, SearchTeachersResult};
pub use domain::{SearchCriteria, Teacher, TeacherRepository};
pub use infrastructure::TeacherRepositoryImpl;
