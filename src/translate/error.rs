use thiserror::Error;

/// The model/tokenizer pair for an identifier could not be produced
#[derive(Debug, Error)]
#[error("model `{model_id}` could not be loaded: {source}")]
pub struct ModelLoadError {
    pub model_id: String,
    #[source]
    pub source: anyhow::Error,
}

/// A single inference call failed
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("{0}")]
    Backend(#[source] anyhow::Error),

    #[error("the model returned no translation candidates")]
    NoCandidates,

    #[error("beam count must be at least 1, got {0}")]
    InvalidBeamCount(u32),
}
