pub mod interface;
pub mod client;
pub mod error;
pub mod invoker;
pub mod language;
pub mod provider;

#[cfg(test)]
pub(crate) mod testing;

pub use interface::{InferenceBackend, InferenceRequest, LoadedModel, TranslationCandidate};
pub use client::TranslationClient;
pub use error::{ModelLoadError, TranslationError};
pub use invoker::translate;
pub use language::{resolve, LanguageCode, LanguagePreference, LanguageRoute};
pub use provider::ModelProvider;
