pub mod ranked_teacher;
pub mod search_criteria;

pub use ranked_teacher::RankedTeacher;
pub use search_criteria::{MinRating, SearchCriteria};
