pub mod search_teachers;

pub use search_teachers::{SearchTeachersHandler, SearchTeachersQuery, SearchTeachersResult};
