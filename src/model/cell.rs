use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{info, warn};

use super::interface::Seq2SeqModel;
use crate::error::Result;

/// Something that can produce the (expensive) model handle
#[async_trait]
pub trait ModelLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn Seq2SeqModel>>;
}

/// Model handle plus the moment it became available
#[derive(Clone)]
pub struct LoadedModel {
    pub model: Arc<dyn Seq2SeqModel>,
    pub loaded_at: DateTime<Utc>,
}

/// Process-wide model handle, loaded on first access and kept for the
/// lifetime of the process. Concurrent first accesses share one load;
/// a failed load leaves the cell empty so the next access retries.
pub struct ModelCell {
    cell: OnceCell<LoadedModel>,
    loader: Arc<dyn ModelLoader>,
}

impl ModelCell {
    pub fn new(loader: Arc<dyn ModelLoader>) -> Self {
        Self {
            cell: OnceCell::new(),
            loader,
        }
    }

    pub async fn get(&self) -> Result<Arc<dyn Seq2SeqModel>> {
        let loaded = self
            .cell
            .get_or_try_init(|| async {
                let started = std::time::Instant::now();
                match self.loader.load().await {
                    Ok(model) => {
                        info!("Model {} ready in {:?}", model.model_name(), started.elapsed());
                        Ok(LoadedModel {
                            model,
                            loaded_at: Utc::now(),
                        })
                    }
                    Err(e) => {
                        warn!("Model load failed: {}", e);
                        Err(e)
                    }
                }
            })
            .await?;
        Ok(loaded.model.clone())
    }

    /// Loaded model, without triggering a load
    pub fn peek(&self) -> Option<&LoadedModel> {
        self.cell.get()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }
}
