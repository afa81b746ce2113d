pub mod candidate_resolver;
pub mod refinement_pipeline;

pub use candidate_resolver::{CandidateResolver, CandidateSet};
pub use refinement_pipeline::{
    LanguagePriorityStage, NameFilterStage, RatingThresholdStage, RefinementPipeline,
    RefinementStage,
};
