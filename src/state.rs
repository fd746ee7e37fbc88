use std::sync::Arc;

use crate::config_manager::Config;
use crate::model::{ModelCell, ModelFactory, ModelLoader};
use crate::model_service::ModelServiceClient;
use crate::translate::Translator;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub model_service: Arc<ModelServiceClient>,
    pub model: Arc<ModelCell>,
    pub translator: Translator,
}

impl AppState {
    pub fn new(mut config: Config) -> Self {
        if let Ok(url) = std::env::var("MODEL_SERVICE_URL") {
            config.model_config.service_url = url;
        }

        let model_service = Arc::new(ModelServiceClient::new(
            config.model_config.service_url.clone(),
        ));
        let factory = Arc::new(ModelFactory::new(
            config.model_config.clone(),
            model_service.clone(),
        ));

        Self::with_loader(config, model_service, factory)
    }

    pub fn with_loader(
        config: Config,
        model_service: Arc<ModelServiceClient>,
        loader: Arc<dyn ModelLoader>,
    ) -> Self {
        let model = Arc::new(ModelCell::new(loader));
        Self {
            config,
            model_service,
            translator: Translator::new(model.clone()),
            model,
        }
    }
}
