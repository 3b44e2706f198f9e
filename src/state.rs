use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::config_manager::Config;
use crate::inference_service::InferenceServiceClient;
use crate::session::SessionStore;
use crate::translate::{InferenceBackend, ModelProvider, TranslationClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub models: Arc<ModelProvider>,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    /// Build state backed by the HTTP inference sidecar
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let inference_service = Arc::new(InferenceServiceClient::new(
            config.inference.base_url.clone(),
            Duration::from_secs(config.inference.request_timeout_secs),
        )?);
        info!("Using inference service at {}", inference_service.base_url());

        let backend = Arc::new(TranslationClient::new(inference_service));
        Ok(Self::with_backend(config, backend))
    }

    pub fn with_backend(config: Config, backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            config: Arc::new(config),
            models: Arc::new(ModelProvider::new(backend)),
            sessions: Arc::new(SessionStore::new()),
        }
    }

    /// Load every configured model up front so the first submit is fast
    pub async fn preload_models(&self) {
        let model_ids = self.config.translator.models.all_models();
        let loaded = self.models.preload(&model_ids).await;
        if loaded < model_ids.len() {
            warn!(
                "Preloaded {}/{} models; the rest will be retried on first use",
                loaded,
                model_ids.len()
            );
        } else {
            info!("Preloaded {} model(s)", loaded);
        }
    }

    /// Periodically drop idle sessions
    pub fn spawn_session_sweeper(&self) -> tokio::task::JoinHandle<()> {
        let sessions = self.sessions.clone();
        let ttl = self.config.session.idle_ttl();
        let period = self.config.session.sweep_interval();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                sessions.sweep_idle(ttl);
            }
        })
    }
}
