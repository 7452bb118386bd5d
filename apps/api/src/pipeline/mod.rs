// Resume fit pipeline: Analysis → Letter → Done.
// Two model calls per run, strictly in sequence, over one per-request state value.
// Steps only see the `TextModel` trait, never a concrete client.

pub mod error;
pub mod prompts;
pub mod runner;
pub mod state;
pub mod steps;

pub use error::PipelineError;
pub use runner::run_pipeline;
pub use state::PipelineOutput;
