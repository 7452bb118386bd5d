//! Per-request pipeline state.
//!
//! Created with both inputs populated, threaded by value through each step,
//! dropped once the output is handed back. Outputs are write-once.


use crate::pipeline::error::PipelineError;

/// Position in the `Start → Analyzed → Lettered` state machine,
/// derived from which outputs are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Analyzed,
    Lettered,
}

#[derive(Debug, Clone)]
pub struct PipelineState {
    resume: String,
    job_desc: String,
    analysis: Option<String>,
    letter: Option<String>,
}

/// Final result of a run. Only obtainable from a state holding both outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub analysis: String,
    pub letter: String,
}

impl PipelineState {
    /// Rejects empty or whitespace-only inputs.
    pub fn new(
        resume: impl Into<String>,
        job_desc: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        let resume = resume.into();
        let job_desc = job_desc.into();

        if resume.trim().is_empty() {
            return Err(PipelineError::MissingInput { field: "resume" });
        }
        if job_desc.trim().is_empty() {
            return Err(PipelineError::MissingInput { field: "job_desc" });
        }

        Ok(Self {
            resume,
            job_desc,
            analysis: None,
            letter: None,
        })
    }

    pub fn resume(&self) -> &str {
        &self.resume
    }

    pub fn job_desc(&self) -> &str {
        &self.job_desc
    }

    pub fn analysis(&self) -> Option<&str> {
        self.analysis.as_deref()
    }

    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }

    pub fn stage(&self) -> Stage {
        match (&self.analysis, &self.letter) {
            (_, Some(_)) => Stage::Lettered,
            (Some(_), None) => Stage::Analyzed,
            (None, None) => Stage::Start,
        }
    }

    pub fn record_analysis(&mut self, text: String) -> Result<(), PipelineError> {
        if self.analysis.is_some() {
            return Err(PipelineError::AlreadyRecorded("analysis"));
        }
        self.analysis = Some(text);
        Ok(())
    }

    pub fn record_letter(&mut self, text: String) -> Result<(), PipelineError> {
        if self.letter.is_some() {
            return Err(PipelineError::AlreadyRecorded("letter"));
        }
        self.letter = Some(text);
        Ok(())
    }

    pub fn into_output(self) -> Result<PipelineOutput, PipelineError> {
        let analysis = self.analysis.ok_or(PipelineError::Incomplete("analysis"))?;
        let letter = self.letter.ok_or(PipelineError::Incomplete("letter"))?;
        Ok(PipelineOutput { analysis, letter })
    }
}
