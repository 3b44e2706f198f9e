use std::sync::Arc;
use dashmap::DashMap;
use tokio::sync::OnceCell;
use tracing::{debug, error, info};

use super::error::ModelLoadError;
use super::interface::{InferenceBackend, LoadedModel};

/// Process-wide cache of loaded models.
///
/// The first `get_model` for an identifier performs the load, every later call
/// returns the same `Arc`. Concurrent first calls share one load. A failed load
/// leaves the slot empty so the next call tries again. Entries are never evicted.
pub struct ModelProvider {
    backend: Arc<dyn InferenceBackend>,
    cache: DashMap<String, Arc<OnceCell<Arc<LoadedModel>>>>,
}

impl ModelProvider {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self {
            backend,
            cache: DashMap::new(),
        }
    }

    pub fn backend(&self) -> &Arc<dyn InferenceBackend> {
        &self.backend
    }

    pub async fn get_model(&self, model_id: &str) -> Result<Arc<LoadedModel>, ModelLoadError> {
        let cell = self
            .cache
            .entry(model_id.to_string())
            .or_default()
            .value()
            .clone();

        if let Some(model) = cell.get() {
            debug!("Model cache hit: {}", model_id);
            return Ok(model.clone());
        }

        cell.get_or_try_init(|| async {
            info!("Loading translation model: {}", model_id);
            match self.backend.load_model(model_id).await {
                Ok(model) => {
                    info!("Loaded translation model: {}", model_id);
                    Ok(Arc::new(model))
                }
                Err(source) => {
                    error!("Failed to load model {}: {:#}", model_id, source);
                    Err(ModelLoadError {
                        model_id: model_id.to_string(),
                        source,
                    })
                }
            }
        })
        .await
        .cloned()
    }

    /// Warm the cache. Failures are logged and skipped.
    pub async fn preload(&self, model_ids: &[&str]) -> usize {
        let mut loaded = 0;
        for model_id in model_ids {
            if self.get_model(model_id).await.is_ok() {
                loaded += 1;
            }
        }
        loaded
    }

    pub fn is_loaded(&self, model_id: &str) -> bool {
        self.cache
            .get(model_id)
            .map(|cell| cell.initialized())
            .unwrap_or(false)
    }
}
