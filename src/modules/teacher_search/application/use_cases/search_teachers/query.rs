use crate::modules::teacher_search::domain::SearchCriteria;
use crate::shared::application::pagination::PaginationParams;

/// Query for searching teachers within a subject and grade
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTeachersQuery {
    pub criteria: SearchCriteria,
    pub pagination: PaginationParams,
}

impl SearchTeachersQuery {
    pub fn new(criteria: SearchCriteria, pagination: PaginationParams) -> Self {
        Self {
            criteria,
            pagination,
        }
    }
}
