use serde::Serialize;

use crate::modules::teacher_search::application::dto::TeacherListing;
use crate::shared::application::pagination::PaginatedResult;

/// Result of a teacher search.
///
/// A `teacher_id` lookup returns a bare one-element list while every other
/// search returns the paginated envelope; clients rely on both shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchTeachersResult {
    Single(Vec<TeacherListing>),
    Listing(PaginatedResult<TeacherListing>),
}

impl SearchTeachersResult {
    /// Number of teachers carried by this result (current page only)
    pub fn len(&self) -> usize {
        match self {
            SearchTeachersResult::Single(items) => items.len(),
            SearchTeachersResult::Listing(page) => page.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
