use serde::Deserialize;
use uuid::Uuid;

use crate::modules::teacher_search::application::use_cases::SearchTeachersQuery;
use crate::modules::teacher_search::domain::{MinRating, SearchCriteria};
use crate::shared::application::pagination::PaginationParams;
use crate::shared::config::PaginationConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Raw query-string parameters of the search endpoint.
///
/// Field names are the wire contract and must not be renamed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchTeachersRequest {
    pub subject: Option<String>,
    pub grade: Option<String>,
    pub teacher: Option<String>,
    pub teacher_id: Option<String>,
    pub language_id: Option<String>,
    pub rating: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl SearchTeachersRequest {
    /// Validate and normalize into a query. Empty values count as absent.
    pub fn into_query(self, pagination: &PaginationConfig) -> AppResult<SearchTeachersQuery> {
        let subject = present(self.subject);
        let grade = present(self.grade);

        let (subject, grade) = match (subject, grade) {
            (Some(subject), Some(grade)) => (subject, grade),
            (None, _) => return Err(AppError::MissingParameter("subject".to_string())),
            (_, None) => return Err(AppError::MissingParameter("grade".to_string())),
        };

        let criteria = SearchCriteria::new(parse_id("subject", &subject)?, parse_id("grade", &grade)?);

        // Single-teacher lookups ignore refinements and are never paginated
        if let Some(raw) = present(self.teacher_id) {
            let criteria = criteria.with_teacher_id(parse_id("teacher_id", &raw)?);
            let pagination = PaginationParams::new(1, pagination.default_page_size);
            return Ok(SearchTeachersQuery::new(criteria, pagination));
        }

        let mut criteria = criteria;

        if let Some(fragment) = present(self.teacher) {
            Validator::validate_name_fragment(&fragment)?;
            criteria = criteria.with_name_fragment(fragment);
        }

        if let Some(raw) = present(self.language_id) {
            criteria = criteria.with_language(parse_id("language_id", &raw)?);
        }

        if let Some(raw) = present(self.rating) {
            criteria = criteria.with_min_rating(parse_rating(&raw)?);
        }

        let page = parse_u32("page", self.page)?.unwrap_or(1);
        let page_size =
            parse_u32("page_size", self.page_size)?.unwrap_or(pagination.default_page_size);
        Validator::validate_pagination(page, page_size, pagination.max_page_size)?;
        let pagination = PaginationParams::new(page, page_size);

        Ok(SearchTeachersQuery::new(criteria, pagination))
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_id(field: &str, raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::invalid_parameter(field, format!("'{}' is not a valid identifier", raw)))
}

fn parse_rating(raw: &str) -> AppResult<MinRating> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::invalid_parameter("rating", "Invalid rating value"))?;

    MinRating::from_decimal(value)
        .ok_or_else(|| AppError::invalid_parameter("rating", "Invalid rating value"))
}

fn parse_u32(field: &str, raw: Option<String>) -> AppResult<Option<u32>> {
    match present(raw) {
        Some(value) => value
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| AppError::invalid_parameter(field, format!("'{}' is not a positive integer", value))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    const SUBJECT: &str = "6f1c1f8e-4a39-4a8e-9a54-0d2a5b0f1c01";
    const GRADE: &str = "0b9e7d1a-3c55-4f0e-8f5e-2b7e4c1d9a02";

    fn base() -> SearchTeachersRequest {
        SearchTeachersRequest {
            subject: Some(SUBJECT.to_string()),
            grade: Some(GRADE.to_string()),
            ..Default::default()
        }
    }

    fn normalize(request: SearchTeachersRequest) -> AppResult<SearchTeachersQuery> {
        request.into_query(&PaginationConfig::default())
    }

    #[test]
    fn test_minimal_request() {
        let query = assert_ok!(normalize(base()));

        assert_eq!(query.criteria.subject_id.to_string(), SUBJECT);
        assert_eq!(query.criteria.grade_id.to_string(), GRADE);
        assert!(query.criteria.teacher_id.is_none());
        assert!(query.criteria.min_rating.is_none());
        assert_eq!(query.pagination, PaginationParams::new(1, 10));
    }

    #[test]
    fn test_missing_subject_or_grade() {
        let mut no_subject = base();
        no_subject.subject = None;
        match normalize(no_subject) {
            Err(AppError::MissingParameter(field)) => assert_eq!(field, "subject"),
            other => panic!("unexpected: {:?}", other),
        }

        let mut empty_grade = base();
        empty_grade.grade = Some(String::new());
        match normalize(empty_grade) {
            Err(AppError::MissingParameter(field)) => assert_eq!(field, "grade"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_rating_is_rounded() {
        let mut request = base();
        request.rating = Some("3.6".to_string());
        let query = assert_ok!(normalize(request));
        assert_eq!(query.criteria.min_rating, Some(MinRating::new(4)));
    }

    #[test]
    fn test_invalid_rating_names_field() {
        for raw in ["abc", "NaN", "inf"] {
            let mut request = base();
            request.rating = Some(raw.to_string());
            match normalize(request) {
                Err(AppError::InvalidParameter { field, .. }) => assert_eq!(field, "rating"),
                other => panic!("unexpected for {}: {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_invalid_identifier_names_field() {
        let mut request = base();
        request.language_id = Some("english".to_string());
        match normalize(request) {
            Err(AppError::InvalidParameter { field, .. }) => assert_eq!(field, "language_id"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_empty_optionals_are_not_applied() {
        let mut request = base();
        request.teacher = Some(String::new());
        request.teacher_id = Some(String::new());
        request.language_id = Some(String::new());
        request.rating = Some(String::new());

        let query = assert_ok!(normalize(request));
        assert_eq!(query.criteria, SearchCriteria::new(query.criteria.subject_id, query.criteria.grade_id));
    }

    #[test]
    fn test_pagination_params() {
        let mut request = base();
        request.page = Some("3".to_string());
        request.page_size = Some("25".to_string());
        let query = assert_ok!(normalize(request));
        assert_eq!(query.pagination, PaginationParams::new(3, 25));

        let mut too_big = base();
        too_big.page_size = Some("500".to_string());
        assert_err!(normalize(too_big));

        let mut zero_page = base();
        zero_page.page = Some("0".to_string());
        assert_err!(normalize(zero_page));
    }

    #[test]
    fn test_teacher_id_skips_pagination_parsing() {
        let mut request = base();
        request.teacher_id = Some("a3c1e6f4-8a3b-4c47-9d2e-7f0b1d2c3e04".to_string());
        request.page = Some("not-a-page".to_string());

        let query = assert_ok!(normalize(request));
        assert!(query.criteria.teacher_id.is_some());
        assert_eq!(query.pagination.page, 1);
    }

    #[test]
    fn test_teacher_id_ignores_malformed_refinements() {
        let mut request = base();
        request.teacher_id = Some("a3c1e6f4-8a3b-4c47-9d2e-7f0b1d2c3e04".to_string());
        request.teacher = Some("x".repeat(200));
        request.language_id = Some("english".to_string());
        request.rating = Some("abc".to_string());

        let query = assert_ok!(normalize(request));
        assert!(query.criteria.teacher_id.is_some());
        assert!(query.criteria.name_fragment.is_none());
        assert!(query.criteria.language_id.is_none());
        assert!(query.criteria.min_rating.is_none());
    }

    #[test]
    fn test_malformed_teacher_id_is_still_rejected() {
        let mut request = base();
        request.teacher_id = Some("42".to_string());
        request.rating = Some("abc".to_string());

        match normalize(request) {
            Err(AppError::InvalidParameter { field, .. }) => assert_eq!(field, "teacher_id"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
