use serde::{Deserialize, Serialize};

use crate::translate::language::LanguagePreference;

pub const DEFAULT_MULTILINGUAL_MODEL: &str = "facebook/nllb-200-distilled-600M";

/// Which pretrained model(s) serve the two directions.
///
/// A multilingual model takes the language codes as arguments, while the
/// directional setup uses one bilingual model per direction (the codes are
/// still passed along).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum ModelSelection {
    Multilingual {
        model_id: String,
    },
    Directional {
        to_english: String,
        to_hindi: String,
    },
}

impl ModelSelection {
    pub fn model_for(&self, preference: LanguagePreference) -> &str {
        match self {
            ModelSelection::Multilingual { model_id } => model_id,
            ModelSelection::Directional { to_english, to_hindi } => match preference {
                LanguagePreference::ToEnglish => to_english,
                LanguagePreference::ToHindi => to_hindi,
            },
        }
    }

    /// Distinct model ids, in preload order
    pub fn all_models(&self) -> Vec<&str> {
        match self {
            ModelSelection::Multilingual { model_id } => vec![model_id.as_str()],
            ModelSelection::Directional { to_english, to_hindi } => {
                if to_english == to_hindi {
                    vec![to_english.as_str()]
                } else {
                    vec![to_english.as_str(), to_hindi.as_str()]
                }
            }
        }
    }
}

impl Default for ModelSelection {
    fn default() -> Self {
        ModelSelection::Multilingual {
            model_id: DEFAULT_MULTILINGUAL_MODEL.to_string(),
        }
    }
}

/// Translation parameters passed into every inference call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(rename = "beam_count")]
    #[serde(default = "default_beam_count")]
    pub beam_count: u32,

    #[serde(rename = "preload_models")]
    #[serde(default = "default_preload_models")]
    pub preload_models: bool,

    #[serde(default)]
    pub models: ModelSelection,
}

fn default_beam_count() -> u32 {
    5
}

fn default_preload_models() -> bool {
    true
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            beam_count: default_beam_count(),
            preload_models: default_preload_models(),
            models: ModelSelection::default(),
        }
    }
}

/// Connection settings for the inference sidecar
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "request_timeout_secs")]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    std::env::var("INFERENCE_SERVICE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}
