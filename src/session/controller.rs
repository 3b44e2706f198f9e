use thiserror::Error;
use tracing::{debug, info};

use crate::config_manager::TranslatorConfig;
use crate::translate::{self, resolve, LanguagePreference, ModelLoadError, ModelProvider, TranslationError};
use super::state::SessionState;

pub const EMPTY_INPUT_WARNING: &str = "Please enter some text to translate.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session now shows this translation
    Translated(String),
    /// Nothing to translate; nothing was invoked or changed
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Error loading the model: {0}")]
    ModelLoad(#[from] ModelLoadError),

    #[error("An error occurred during translation: {0}")]
    Translation(#[from] TranslationError),
}

/// Handle the Translate action for one session.
///
/// On success both text fields are replaced. On any failure `state` is left
/// exactly as it was.
pub async fn submit(
    provider: &ModelProvider,
    config: &TranslatorConfig,
    state: &mut SessionState,
    preference: LanguagePreference,
    text: &str,
) -> Result<SubmitOutcome, SubmitError> {
    if text.trim().is_empty() {
        debug!("Submit with empty source text ignored");
        return Ok(SubmitOutcome::EmptyInput);
    }

    let route = resolve(preference);
    let model_id = config.models.model_for(preference);
    let model = provider.get_model(model_id).await?;

    let translated = translate::translate(
        &**provider.backend(),
        &model,
        text,
        route.source_code,
        route.target_code,
        config.beam_count,
    )
    .await?;

    info!(
        "Translated {} -> {} using {}",
        route.source_code, route.target_code, model_id
    );

    state.set_source(text);
    state.set_translated(translated.clone());
    Ok(SubmitOutcome::Translated(translated))
}

/// Handle the Clear action
pub fn clear(state: &mut SessionState) {
    state.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_manager::ModelSelection;
    use crate::translate::testing::{Reply, ScriptedBackend};
    use crate::translate::LanguageCode;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn setup() -> (Arc<ScriptedBackend>, ModelProvider, TranslatorConfig) {
        let backend = Arc::new(ScriptedBackend::new());
        let provider = ModelProvider::new(backend.clone());
        (backend, provider, TranslatorConfig::default())
    }

    #[tokio::test]
    async fn blank_input_never_invokes_or_mutates() {
        let (backend, provider, config) = setup();
        let mut state = SessionState::new();
        state.set_translated("previous");
        let before = state.clone();

        for text in ["", "   ", "\n\t "] {
            let outcome = submit(&provider, &config, &mut state, LanguagePreference::ToHindi, text)
                .await
                .unwrap();
            assert_eq!(outcome, SubmitOutcome::EmptyInput);
        }

        assert_eq!(state, before);
        assert_eq!(backend.generations.load(Ordering::SeqCst), 0);
        assert_eq!(backend.loads.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn toward_english_failure_leaves_state_untouched() {
        let (backend, provider, config) = setup();
        backend.reply(Reply::Fail("malformed language code"));
        let mut state = SessionState::new();

        let err = submit(&provider, &config, &mut state, LanguagePreference::ToEnglish, "नमस्ते")
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::Translation(_)));
        assert_eq!(
            err.to_string(),
            "An error occurred during translation: malformed language code"
        );
        assert_eq!(state.translated_text, "");

        let requests = backend.recorded();
        assert_eq!(requests[0].src_lang, LanguageCode::HinDeva);
        assert_eq!(requests[0].tgt_lang, LanguageCode::EngLatn);
        assert_eq!(requests[0].num_beams, 5);
    }

    #[tokio::test]
    async fn toward_hindi_success_sets_translation() {
        let (backend, provider, config) = setup();
        backend.reply(Reply::Candidates(vec!["नमस्ते"]));
        let mut state = SessionState::new();

        let outcome = submit(&provider, &config, &mut state, LanguagePreference::ToHindi, "Hello")
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Translated("नमस्ते".to_string()));
        assert_eq!(state.get().translated_text, "नमस्ते");
        assert_eq!(state.get().source_text, "Hello");
        let requests = backend.recorded();
        assert_eq!(requests[0].src_lang, LanguageCode::EngLatn);
        assert_eq!(requests[0].tgt_lang, LanguageCode::HinDeva);
    }

    #[tokio::test]
    async fn second_submit_overwrites_first() {
        let (backend, provider, config) = setup();
        backend.reply(Reply::Candidates(vec!["Hello"]));
        backend.reply(Reply::Candidates(vec!["Good morning"]));
        let mut state = SessionState::new();

        submit(&provider, &config, &mut state, LanguagePreference::ToEnglish, "नमस्ते")
            .await
            .unwrap();
        submit(&provider, &config, &mut state, LanguagePreference::ToEnglish, "सुप्रभात")
            .await
            .unwrap();

        assert_eq!(state.translated_text, "Good morning");
        assert_eq!(state.source_text, "सुप्रभात");
        assert_eq!(backend.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn model_load_failure_is_reported_separately() {
        let (backend, provider, config) = setup();
        backend.fail_next_loads(1);
        let mut state = SessionState::new();

        let err = submit(&provider, &config, &mut state, LanguagePreference::ToHindi, "Hello")
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitError::ModelLoad(_)));
        assert!(err.to_string().starts_with("Error loading the model:"));
        assert_eq!(state, SessionState::default());
        assert_eq!(backend.generations.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn directional_config_picks_model_per_preference() {
        let (backend, provider, mut config) = setup();
        config.models = ModelSelection::Directional {
            to_english: "Helsinki-NLP/opus-mt-hi-en".to_string(),
            to_hindi: "Helsinki-NLP/opus-mt-en-hi".to_string(),
        };
        let mut state = SessionState::new();

        submit(&provider, &config, &mut state, LanguagePreference::ToEnglish, "नमस्ते")
            .await
            .unwrap();
        assert!(provider.is_loaded("Helsinki-NLP/opus-mt-hi-en"));
        assert!(!provider.is_loaded("Helsinki-NLP/opus-mt-en-hi"));

        submit(&provider, &config, &mut state, LanguagePreference::ToHindi, "Hello")
            .await
            .unwrap();
        assert_eq!(backend.loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn clear_always_empties() {
        let mut state = SessionState {
            source_text: "Hello".to_string(),
            translated_text: "नमस्ते".to_string(),
        };
        clear(&mut state);
        assert_eq!(state, SessionState::default());
    }
}
