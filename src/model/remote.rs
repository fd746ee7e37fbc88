use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

use super::interface::{EncodedInput, Seq2SeqModel};
use crate::config_manager::ModelConfig;
use crate::error::Result;
use crate::model_service::{
    DecodeRequest, EncodeRequest, GenerateRequest, LoadRequest, ModelServiceClient,
};

/// M2M100 model hosted by the external inference service
pub struct RemoteM2M100 {
    model_name: String,
    lang_code_to_id: HashMap<String, i64>,
    max_length: usize,
    num_beams: usize,
    model_service: Arc<ModelServiceClient>,
}

impl RemoteM2M100 {
    /// Ask the service to load the model and keep its language-id table.
    pub async fn load(config: &ModelConfig, model_service: Arc<ModelServiceClient>) -> Result<Self> {
        let response = model_service
            .load_model(LoadRequest {
                model_name: config.model_name.clone(),
            })
            .await?;

        info!(
            "Loaded RemoteM2M100: model={}, languages={}, service={}",
            response.model_name,
            response.lang_code_to_id.len(),
            model_service.base_url()
        );

        Ok(Self {
            model_name: response.model_name,
            lang_code_to_id: response.lang_code_to_id,
            max_length: config.max_length,
            num_beams: config.num_beams,
            model_service,
        })
    }
}

#[async_trait]
impl Seq2SeqModel for RemoteM2M100 {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    fn lang_id(&self, code: &str) -> Option<i64> {
        self.lang_code_to_id.get(code).copied()
    }

    async fn encode(&self, text: &str, src_lang: &str) -> Result<EncodedInput> {
        let response = self
            .model_service
            .encode(EncodeRequest {
                model_name: self.model_name.clone(),
                text: text.to_string(),
                src_lang: src_lang.to_string(),
            })
            .await?;

        Ok(EncodedInput {
            input_ids: response.input_ids,
            attention_mask: response.attention_mask,
        })
    }

    async fn generate(&self, input: &EncodedInput, forced_bos_token_id: i64) -> Result<Vec<Vec<i64>>> {
        let response = self
            .model_service
            .generate(GenerateRequest {
                model_name: self.model_name.clone(),
                input_ids: input.input_ids.clone(),
                attention_mask: input.attention_mask.clone(),
                forced_bos_token_id,
                max_length: self.max_length,
                num_beams: self.num_beams,
            })
            .await?;
        Ok(response.sequences)
    }

    async fn decode(&self, sequences: &[Vec<i64>]) -> Result<Vec<String>> {
        let response = self
            .model_service
            .decode(DecodeRequest {
                model_name: self.model_name.clone(),
                sequences: sequences.to_vec(),
                skip_special_tokens: true,
            })
            .await?;
        Ok(response.texts)
    }
}
