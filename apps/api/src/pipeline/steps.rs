//! The two pipeline steps. Each renders its own prompt from the inputs,
//! makes exactly one model call and records the raw reply. The reply is
//! treated as opaque text; nothing about its structure is checked.

use std::fmt;

use tracing::{debug, info};

use crate::llm_client::TextModel;
use crate::pipeline::error::PipelineError;
use crate::pipeline::prompts::{render_analysis_prompt, render_letter_prompt};
use crate::pipeline::state::PipelineState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ResumeAnalysis,
    CoverLetter,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::ResumeAnalysis => "resume_analysis",
            Step::CoverLetter => "cover_letter",
        }
    }

    /// Reads only `resume` and `job_desc`; the letter never sees the analysis.
    pub fn render_prompt(self, state: &PipelineState) -> String {
        match self {
            Step::ResumeAnalysis => render_analysis_prompt(state.resume(), state.job_desc()),
            Step::CoverLetter => render_letter_prompt(state.resume(), state.job_desc()),
        }
    }

    pub async fn run(
        self,
        model: &dyn TextModel,
        mut state: PipelineState,
    ) -> Result<PipelineState, PipelineError> {
        let prompt = self.render_prompt(&state);
        info!("Running {} step ({} prompt chars)", self, prompt.len());

        let text = model
            .generate(&prompt)
            .await
            .map_err(|source| PipelineError::Model { step: self, source })?;

        info!("{} step produced {} chars", self, text.len());

        match self {
            Step::ResumeAnalysis => state.record_analysis(text)?,
            Step::CoverLetter => state.record_letter(text)?,
        }
        debug!("State advanced to {:?}", state.stage());
        Ok(state)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Analysis Step: strengths / improvements / role-fit report into `analysis`.
pub async fn analyze_resume(
    model: &dyn TextModel,
    state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    Step::ResumeAnalysis.run(model, state).await
}

/// Letter Step: short cover letter into `letter`.
pub async fn write_cover_letter(
    model: &dyn TextModel,
    state: PipelineState,
) -> Result<PipelineState, PipelineError> {
    Step::CoverLetter.run(model, state).await
}
