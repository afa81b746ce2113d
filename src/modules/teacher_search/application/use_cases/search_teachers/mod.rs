mod handler;
mod query;
mod result;

pub use handler::SearchTeachersHandler;
pub use query::SearchTeachersQuery;
pub use result::SearchTeachersResult;
