use std::fmt;
use uuid::Uuid;

/// Minimum average rating, held at integer granularity.
///
/// Submitted decimals are rounded half-to-even: 3.6 → 4, 3.5 → 4, 2.5 → 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinRating(i32);

impl MinRating {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    /// `None` for NaN and infinities
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Some(Self(value.round_ties_even() as i32))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Teachers without any feedback never pass
    pub fn admits(&self, average: Option<f64>) -> bool {
        average.is_some_and(|avg| avg >= f64::from(self.0))
    }
}

impl fmt::Display for MinRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized search request. Built once per request by the query normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCriteria {
    pub subject_id: Uuid,
    pub grade_id: Uuid,
    pub teacher_id: Option<Uuid>,
    pub name_fragment: Option<String>,
    pub language_id: Option<Uuid>,
    pub min_rating: Option<MinRating>,
}

impl SearchCriteria {
    pub fn new(subject_id: Uuid, grade_id: Uuid) -> Self {
        Self {
            subject_id,
            grade_id,
            teacher_id: None,
            name_fragment: None,
            language_id: None,
            min_rating: None,
        }
    }

    pub fn with_teacher_id(mut self, teacher_id: Uuid) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub fn with_name_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.name_fragment = Some(fragment.into());
        self
    }

    pub fn with_language(mut self, language_id: Uuid) -> Self {
        self.language_id = Some(language_id);
        self
    }

    pub fn with_min_rating(mut self, min_rating: MinRating) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Compact description of the optional refinements, for logs
    pub fn describe_filters(&self) -> String {
        let mut parts = Vec::new();
        if let Some(id) = self.teacher_id {
            parts.push(format!("teacher_id={}", id));
        }
        if let Some(fragment) = &self.name_fragment {
            parts.push(format!("teacher='{}'", fragment));
        }
        if let Some(id) = self.language_id {
            parts.push(format!("language_id={}", id));
        }
        if let Some(rating) = self.min_rating {
            parts.push(format!("rating>={}", rating));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}
