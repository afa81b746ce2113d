use uuid::Uuid;

use crate::modules::teacher_search::domain::{
    entities::Teacher,
    value_objects::{MinRating, RankedTeacher, SearchCriteria},
};
use crate::shared::utils::LogContext;

/// One step of the refinement pipeline.
///
/// Stages only drop or reorder entries; none may add a teacher.
pub trait RefinementStage: Send + Sync {
    fn apply(&self, candidates: Vec<RankedTeacher>) -> Vec<RankedTeacher>;
    fn name(&self) -> &'static str;
}

/// Keeps teachers whose full, first or last name contains the fragment
#[derive(Debug, Clone)]
pub struct NameFilterStage {
    fragment: String,
}

impl NameFilterStage {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
        }
    }
}

impl RefinementStage for NameFilterStage {
    fn apply(&self, mut candidates: Vec<RankedTeacher>) -> Vec<RankedTeacher> {
        candidates.retain(|c| c.teacher.matches_name(&self.fragment));
        candidates
    }

    fn name(&self) -> &'static str {
        "NameFilter"
    }
}

/// Fixes the result order: speakers of the preferred language first (when one
/// is given), then full name ascending.
#[derive(Debug, Clone, Default)]
pub struct LanguagePriorityStage {
    language_id: Option<Uuid>,
}

impl LanguagePriorityStage {
    pub fn new(language_id: Option<Uuid>) -> Self {
        Self { language_id }
    }
}

impl RefinementStage for LanguagePriorityStage {
    fn apply(&self, mut candidates: Vec<RankedTeacher>) -> Vec<RankedTeacher> {
        for candidate in candidates.iter_mut() {
            candidate.has_preferred_language = self
                .language_id
                .is_some_and(|language_id| candidate.teacher.speaks(language_id));
        }
        candidates.sort_by(|a, b| a.rank_order(b));
        candidates
    }

    fn name(&self) -> &'static str {
        "LanguagePriority"
    }
}

/// Drops teachers whose average rating is below the threshold.
/// Survivors keep their relative order.
#[derive(Debug, Clone)]
pub struct RatingThresholdStage {
    min_rating: MinRating,
}

impl RatingThresholdStage {
    pub fn new(min_rating: MinRating) -> Self {
        Self { min_rating }
    }
}

impl RefinementStage for RatingThresholdStage {
    fn apply(&self, mut candidates: Vec<RankedTeacher>) -> Vec<RankedTeacher> {
        candidates.retain(|c| self.min_rating.admits(c.teacher.average_rating()));
        candidates
    }

    fn name(&self) -> &'static str {
        "RatingThreshold"
    }
}

/// Name filter → ordering → rating filter, in that fixed order
pub struct RefinementPipeline {
    stages: Vec<Box<dyn RefinementStage>>,
}

impl RefinementPipeline {
    pub fn for_criteria(criteria: &SearchCriteria) -> Self {
        let mut stages: Vec<Box<dyn RefinementStage>> = Vec::with_capacity(3);

        if let Some(fragment) = &criteria.name_fragment {
            stages.push(Box::new(NameFilterStage::new(fragment.clone())));
        }
        stages.push(Box::new(LanguagePriorityStage::new(criteria.language_id)));
        if let Some(min_rating) = criteria.min_rating {
            stages.push(Box::new(RatingThresholdStage::new(min_rating)));
        }

        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn run(&self, candidates: Vec<Teacher>) -> Vec<Teacher> {
        let mut ranked: Vec<RankedTeacher> = candidates.into_iter().map(RankedTeacher::new).collect();

        for stage in &self.stages {
            let before = ranked.len();
            ranked = stage.apply(ranked);
            LogContext::refinement_stage(stage.name(), before, ranked.len());
        }

        ranked.into_iter().map(RankedTeacher::into_teacher).collect()
    }
}
