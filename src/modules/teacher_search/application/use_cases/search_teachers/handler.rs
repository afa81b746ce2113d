use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::teacher_search::application::dto::TeacherListing;
use crate::modules::teacher_search::domain::{
    CandidateResolver, CandidateSet, RefinementPipeline, TeacherRepository,
};
use crate::shared::{
    application::{pagination::PaginatedResult, use_case::Query},
    errors::AppResult,
    utils::logger::{LogContext, TimedOperation},
};

use super::{query::SearchTeachersQuery, result::SearchTeachersResult};

/// Query handler for searching teachers
pub struct SearchTeachersHandler {
    resolver: CandidateResolver,
}

impl SearchTeachersHandler {
    pub fn new(teacher_repository: Arc<dyn TeacherRepository>) -> Self {
        Self {
            resolver: CandidateResolver::new(teacher_repository),
        }
    }
}

#[async_trait]
impl Query<SearchTeachersQuery, SearchTeachersResult> for SearchTeachersHandler {
    async fn execute(&self, query: SearchTeachersQuery) -> AppResult<SearchTeachersResult> {
        let criteria = &query.criteria;
        let scope = format!("subject {} grade {}", criteria.subject_id, criteria.grade_id);
        let filters = criteria.describe_filters();
        LogContext::search_operation(&scope, &filters, None);

        let timer = TimedOperation::new("search_teachers");

        let result = match self.resolver.resolve(criteria).await? {
            CandidateSet::Single(teacher) => {
                SearchTeachersResult::Single(vec![TeacherListing::from(teacher)])
            }
            CandidateSet::Many(candidates) => {
                let refined = RefinementPipeline::for_criteria(criteria).run(candidates);
                let listings: Vec<TeacherListing> =
                    refined.iter().map(TeacherListing::from).collect();
                SearchTeachersResult::Listing(PaginatedResult::paginate(
                    listings,
                    &query.pagination,
                ))
            }
        };

        LogContext::search_operation(&scope, &filters, Some(result.len()));
        timer.finish_with_info(&scope);

        Ok(result)
    }
}
