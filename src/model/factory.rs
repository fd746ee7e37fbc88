use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::cell::ModelLoader;
use super::interface::Seq2SeqModel;
use super::remote::RemoteM2M100;
use crate::config_manager::ModelConfig;
use crate::error::{Result, TranslateError};
use crate::model_service::ModelServiceClient;

/// Factory for creating translation model instances
pub struct ModelFactory {
    config: ModelConfig,
    model_service: Arc<ModelServiceClient>,
}

impl ModelFactory {
    pub fn new(config: ModelConfig, model_service: Arc<ModelServiceClient>) -> Self {
        Self {
            config,
            model_service,
        }
    }

    /// Create a model based on the configured backend.
    ///
    /// Any failure while loading is reported as `ModelLoad`.
    pub async fn create_model(&self) -> Result<Arc<dyn Seq2SeqModel>> {
        info!(
            "Initializing model: backend={}, model={}",
            self.config.backend, self.config.model_name
        );

        match self.config.backend.as_str() {
            "m2m100_service" | "m2m100" => {
                let model = RemoteM2M100::load(&self.config, self.model_service.clone())
                    .await
                    .map_err(|e| match e {
                        TranslateError::ModelLoad(_) => e,
                        other => TranslateError::ModelLoad(other.to_string()),
                    })?;
                Ok(Arc::new(model))
            }
            other => Err(TranslateError::ModelLoad(format!(
                "Unsupported model backend: {}",
                other
            ))),
        }
    }
}

#[async_trait]
impl ModelLoader for ModelFactory {
    async fn load(&self) -> Result<Arc<dyn Seq2SeqModel>> {
        self.create_model().await
    }
}
