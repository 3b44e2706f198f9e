use std::time::Duration;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use anyhow::Result;
use reqwest::Client;

use crate::translate::language::LanguageCode;

/// HTTP client for the sidecar that hosts the pretrained model
#[derive(Debug, Clone)]
pub struct InferenceServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadModelRequest {
    pub model_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadModelResponse {
    pub success: bool,
    #[serde(default)]
    pub model_handle: Option<String>,
    #[serde(default)]
    pub tokenizer_handle: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model_handle: String,
    pub tokenizer_handle: String,
    pub text: String,
    pub src_lang: LanguageCode,
    pub tgt_lang: LanguageCode,
    pub num_beams: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResult {
    pub translation_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub results: Vec<GenerateResult>,
    #[serde(default)]
    pub error: Option<String>,
}

impl InferenceServiceClient {
    pub fn new(base_url: String, request_timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn load_model(&self, request: LoadModelRequest) -> Result<LoadModelResponse> {
        let url = format!("{}/translation/load", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        read_body(response).await
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let url = format!("{}/translation/generate", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;
        read_body(response).await
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }
}

/// Parse the service's JSON reply whatever the status, so its `error` field
/// reaches the caller. The bare status is reported only for unparseable bodies.
async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let url = response.url().clone();
    let bytes = response.bytes().await?;

    match serde_json::from_slice::<T>(&bytes) {
        Ok(body) => Ok(body),
        Err(e) if status.is_success() => Err(e.into()),
        Err(_) => anyhow::bail!("inference service returned {} for {}", status, url),
    }
}
