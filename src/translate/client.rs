use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::inference_service::{GenerateRequest, InferenceServiceClient, LoadModelRequest};
use super::interface::{
    InferenceBackend, InferenceRequest, LoadedModel, ModelHandle, TokenizerHandle,
    TranslationCandidate,
};

/// Translation backend that forwards to the inference sidecar over HTTP
pub struct TranslationClient {
    inference_service: Arc<InferenceServiceClient>,
}

impl TranslationClient {
    pub fn new(inference_service: Arc<InferenceServiceClient>) -> Self {
        Self { inference_service }
    }
}

#[async_trait]
impl InferenceBackend for TranslationClient {
    async fn load_model(&self, model_id: &str) -> Result<LoadedModel, anyhow::Error> {
        debug!("Requesting model load: {}", model_id);

        let response = self
            .inference_service
            .load_model(LoadModelRequest {
                model_id: model_id.to_string(),
            })
            .await?;

        if !response.success {
            let error_msg = response.error.unwrap_or_else(|| "Unknown error".to_string());
            error!("Model load failed for {}: {}", model_id, error_msg);
            return Err(anyhow::anyhow!(error_msg));
        }

        match (response.model_handle, response.tokenizer_handle) {
            (Some(model), Some(tokenizer)) => Ok(LoadedModel {
                model_id: model_id.to_string(),
                model: ModelHandle(model),
                tokenizer: TokenizerHandle(tokenizer),
            }),
            _ => Err(anyhow::anyhow!(
                "inference service reported success without model/tokenizer handles"
            )),
        }
    }

    async fn generate(
        &self,
        model: &LoadedModel,
        request: &InferenceRequest,
    ) -> Result<Vec<TranslationCandidate>, anyhow::Error> {
        debug!(
            "Sending translation request: model={}, {} -> {}, beams={}, chars={}",
            model.model_id,
            request.src_lang,
            request.tgt_lang,
            request.num_beams,
            request.text.chars().count()
        );

        let response = self
            .inference_service
            .generate(GenerateRequest {
                model_handle: model.model.0.clone(),
                tokenizer_handle: model.tokenizer.0.clone(),
                text: request.text.clone(),
                src_lang: request.src_lang,
                tgt_lang: request.tgt_lang,
                num_beams: request.num_beams,
            })
            .await?;

        if response.success {
            Ok(response
                .results
                .into_iter()
                .map(|r| TranslationCandidate {
                    translation_text: r.translation_text,
                })
                .collect())
        } else {
            let error_msg = response.error.unwrap_or_else(|| "Unknown error".to_string());
            error!("Translation generation failed: {}", error_msg);
            Err(anyhow::anyhow!(error_msg))
        }
    }

    async fn health_check(&self) -> Result<bool, anyhow::Error> {
        self.inference_service.health_check().await
    }
}
