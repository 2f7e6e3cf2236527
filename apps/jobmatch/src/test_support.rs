//! Shared fakes for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::llm_client::{LlmError, Oracle};
use crate::models::job::{Job, RawRecord};

/// Oracle whose JSON answers are chosen by the first needle found in the prompt.
pub struct ScriptedOracle {
    json_rules: Vec<(String, Option<Value>)>,
    delays: Vec<(String, Duration)>,
    text: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedOracle {
    pub fn new() -> Self {
        Self {
            json_rules: Vec::new(),
            delays: Vec::new(),
            text: Some("Strong overlap on core skills. Worth applying.".to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn on_json(mut self, needle: &str, response: Value) -> Self {
        self.json_rules.push((needle.to_string(), Some(response)));
        self
    }

    pub fn failing_json(mut self, needle: &str) -> Self {
        self.json_rules.push((needle.to_string(), None));
        self
    }

    /// Holds back JSON answers for prompts containing `needle`.
    pub fn delay_json(mut self, needle: &str, delay: Duration) -> Self {
        self.delays.push((needle.to_string(), delay));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn failing_text(mut self) -> Self {
        self.text = None;
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn record(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }
}

fn scripted_failure(what: &str) -> LlmError {
    LlmError::Api {
        status: 500,
        message: format!("scripted failure: {what}"),
    }
}

#[async_trait]
impl Oracle for ScriptedOracle {
    async fn complete_json(&self, prompt: &str, _system: &str) -> Result<Value, LlmError> {
        self.record(prompt);
        // Yield so concurrent callers interleave.
        tokio::task::yield_now().await;
        if let Some((_, delay)) = self
            .delays
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
        {
            tokio::time::sleep(*delay).await;
        }
        match self
            .json_rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
        {
            Some((_, Some(value))) => Ok(value.clone()),
            Some((needle, None)) => Err(scripted_failure(needle)),
            None => Err(scripted_failure("no rule matched")),
        }
    }

    async fn complete_text(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.record(prompt);
        self.text
            .clone()
            .ok_or_else(|| scripted_failure("rationale"))
    }
}

pub fn sample_job(link: &str, title: &str) -> Job {
    Job {
        id: link.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: Some("Remote".to_string()),
        description: format!("Build data products as our {title}."),
        posted_at: None,
        link: link.to_string(),
        source_raw: RawRecord::new(),
    }
}
