//! Scripted backend for unit tests

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use super::interface::{
    InferenceBackend, InferenceRequest, LoadedModel, ModelHandle, TokenizerHandle,
    TranslationCandidate,
};

pub enum Reply {
    Candidates(Vec<&'static str>),
    Fail(&'static str),
}

#[derive(Default)]
pub struct ScriptedBackend {
    pub loads: AtomicUsize,
    pub generations: AtomicUsize,
    pub requests: Mutex<Vec<InferenceRequest>>,
    replies: Mutex<VecDeque<Reply>>,
    load_failures: AtomicUsize,
    load_delay: Option<Duration>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_load_delay(delay: Duration) -> Self {
        Self {
            load_delay: Some(delay),
            ..Self::default()
        }
    }

    /// The next `n` loads fail
    pub fn fail_next_loads(&self, n: usize) {
        self.load_failures.store(n, Ordering::SeqCst);
    }

    pub fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn recorded(&self) -> Vec<InferenceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn load_model(&self, model_id: &str) -> Result<LoadedModel, anyhow::Error> {
        if let Some(delay) = self.load_delay {
            tokio::time::sleep(delay).await;
        }
        let n = self.loads.fetch_add(1, Ordering::SeqCst);
        let pending = self.load_failures.load(Ordering::SeqCst);
        if pending > 0 {
            self.load_failures.store(pending - 1, Ordering::SeqCst);
            anyhow::bail!("weights for {} not found", model_id);
        }
        Ok(LoadedModel {
            model_id: model_id.to_string(),
            model: ModelHandle(format!("model-{}", n)),
            tokenizer: TokenizerHandle(format!("tokenizer-{}", n)),
        })
    }

    async fn generate(
        &self,
        _model: &LoadedModel,
        request: &InferenceRequest,
    ) -> Result<Vec<TranslationCandidate>, anyhow::Error> {
        self.generations.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Candidates(vec!["translated"]));
        match reply {
            Reply::Candidates(texts) => Ok(texts
                .into_iter()
                .map(|t| TranslationCandidate {
                    translation_text: t.to_string(),
                })
                .collect()),
            Reply::Fail(msg) => Err(anyhow::anyhow!(msg)),
        }
    }

    async fn health_check(&self) -> Result<bool, anyhow::Error> {
        Ok(true)
    }
}
