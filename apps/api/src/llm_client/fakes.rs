//! Scripted `TextModel` used by unit tests across the crate.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{LlmError, TextModel};

/// A canned reply for one `generate` call.
pub enum Reply {
    Text(String),
    Fail { status: u16, message: String },
}

impl Reply {
    pub fn text(s: &str) -> Self {
        Reply::Text(s.to_string())
    }

    pub fn quota_exceeded() -> Self {
        Reply::Fail {
            status: 429,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        }
    }
}

/// Replays replies in order and records every prompt it receives.
/// Once the script runs out, further calls fail with `EmptyContent`.
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A model that answers one full pipeline run successfully.
    pub fn happy_path() -> Self {
        Self::new(vec![Reply::text(SAMPLE_ANALYSIS), Reply::text(SAMPLE_LETTER)])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextModel for ScriptedModel {
    fn model_name(&self) -> &str {
        "scripted-test-model"
    }

    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail { status, message }) => Err(LlmError::Api { status, message }),
            None => Err(LlmError::EmptyContent),
        }
    }
}

pub const SAMPLE_ANALYSIS: &str = "\
## Candidate Strengths
- Six years of backend Rust in production
- Led migration of payment services to async runtimes

## Areas for Improvement
- Quantify the impact of the observability work

## Role Fit Recommendation
- Senior Backend Engineer
- Platform Engineer";

pub const SAMPLE_LETTER: &str = "\
Dear Hiring Manager,

I am excited to apply for the Senior Engineer role. Over six years I have built \
and operated high-throughput Rust services.

Sincerely,
Jane Doe";
