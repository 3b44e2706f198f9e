use tracing::{debug, error};

use super::error::TranslationError;
use super::interface::{InferenceBackend, InferenceRequest, LoadedModel};
use super::language::LanguageCode;

/// Run one translation and return the best candidate's text.
///
/// The inference request is built fresh from the arguments on every call.
/// Callers reject empty input before getting here.
pub async fn translate(
    backend: &dyn InferenceBackend,
    model: &LoadedModel,
    text: &str,
    source_code: LanguageCode,
    target_code: LanguageCode,
    beam_count: u32,
) -> Result<String, TranslationError> {
    if beam_count == 0 {
        return Err(TranslationError::InvalidBeamCount(beam_count));
    }

    let request = InferenceRequest {
        text: text.to_string(),
        src_lang: source_code,
        tgt_lang: target_code,
        num_beams: beam_count,
    };

    debug!(
        "Translating {} chars {} -> {} with {} beams",
        text.chars().count(),
        source_code,
        target_code,
        beam_count
    );

    let candidates = backend.generate(model, &request).await.map_err(|e| {
        error!("Translation failed ({} -> {}): {:#}", source_code, target_code, e);
        TranslationError::Backend(e)
    })?;

    candidates
        .into_iter()
        .next()
        .map(|c| c.translation_text)
        .ok_or(TranslationError::NoCandidates)
}
