//! Pipeline Runner: executes every step once, in order, against one state.
//!
//! No branching, no retries: the first failure aborts the run and whatever
//! earlier steps produced is dropped with the state.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::llm_client::TextModel;
use crate::pipeline::error::PipelineError;
use crate::pipeline::state::{PipelineOutput, PipelineState};
use crate::pipeline::steps::{analyze_resume, write_cover_letter};

/// Start → Analyzed → Lettered. Both transitions are unconditional.
pub async fn run(
    model: &dyn TextModel,
    state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    let state = analyze_resume(model, state).await?;
    write_cover_letter(model, state).await
}

/// Validates the inputs, runs the pipeline and returns both outputs.
pub async fn run_pipeline(
    model: &dyn TextModel,
    resume: impl Into<String>,
    job_desc: impl Into<String>,
) -> Result<PipelineOutput, PipelineError> {
    let state = PipelineState::new(resume, job_desc)?;

    let run_id = Uuid::new_v4();
    let span = info_span!("pipeline", %run_id, model = model.model_name());

    async move {
        info!(
            "Starting pipeline: resume={} chars, job_desc={} chars",
            state.resume().len(),
            state.job_desc().len()
        );
        let state = run(model, state).await?;
        info!(
            "Pipeline complete: analysis={} chars, letter={} chars",
            state.analysis().map_or(0, str::len),
            state.letter().map_or(0, str::len)
        );
        state.into_output()
    }
    .instrument(span)
    .await
}
