use thiserror::Error;

use crate::llm_client::LlmError;
use crate::pipeline::steps::Step;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required input was empty or whitespace-only. No model call is made.
    #[error("{field} is required")]
    MissingInput { field: &'static str },

    #[error("{step} step failed: {source}")]
    Model {
        step: Step,
        #[source]
        source: LlmError,
    },

    #[error("{0} has already been recorded for this run")]
    AlreadyRecorded(&'static str),

    #[error("pipeline finished without producing {0}")]
    Incomplete(&'static str),
}
