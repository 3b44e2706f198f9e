/// Translate interface - actual inference runs in the sidecar service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::language::LanguageCode;

/// Opaque reference to a loaded model, issued by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelHandle(pub String);

/// Opaque reference to the tokenizer paired with a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerHandle(pub String);

/// A model/tokenizer pair ready for inference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedModel {
    pub model_id: String,
    pub model: ModelHandle,
    pub tokenizer: TokenizerHandle,
}

/// Input of a single inference call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceRequest {
    pub text: String,
    pub src_lang: LanguageCode,
    pub tgt_lang: LanguageCode,
    pub num_beams: u32,
}

/// One decoded candidate. Candidates come back best-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCandidate {
    pub translation_text: String,
}

/// Backend that owns the pretrained model and runs inference
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Load (or locate) the model and tokenizer for `model_id`
    async fn load_model(&self, model_id: &str) -> Result<LoadedModel, anyhow::Error>;

    /// Run generation and return the candidates, best first
    async fn generate(
        &self,
        model: &LoadedModel,
        request: &InferenceRequest,
    ) -> Result<Vec<TranslationCandidate>, anyhow::Error>;

    /// Whether the backend is reachable
    async fn health_check(&self) -> Result<bool, anyhow::Error>;
}
