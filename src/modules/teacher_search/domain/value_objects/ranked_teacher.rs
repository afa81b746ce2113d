use std::cmp::Ordering;

use crate::modules::teacher_search::domain::entities::Teacher;

/// A candidate with its ranking keys precomputed. Lives for one request only.
#[derive(Debug, Clone)]
pub struct RankedTeacher {
    pub teacher: Teacher,
    pub display_name: String,
    pub has_preferred_language: bool,
}

impl RankedTeacher {
    pub fn new(teacher: Teacher) -> Self {
        let display_name = teacher.full_name();
        Self {
            teacher,
            display_name,
            has_preferred_language: false,
        }
    }

    /// Language speakers first, then full name ascending, then id so the
    /// order is total.
    pub fn rank_order(&self, other: &Self) -> Ordering {
        other
            .has_preferred_language
            .cmp(&self.has_preferred_language)
            .then_with(|| self.display_name.cmp(&other.display_name))
            .then_with(|| self.teacher.id.cmp(&other.teacher.id))
    }

    pub fn into_teacher(self) -> Teacher {
        self.teacher
    }
}
