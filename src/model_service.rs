use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use reqwest::Client;
use tracing::debug;

use crate::error::{Result, TranslateError};

/// HTTP client for the inference service hosting the pretrained model
#[derive(Debug, Clone)]
pub struct ModelServiceClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadRequest {
    pub model_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoadResponse {
    pub model_name: String,
    pub lang_code_to_id: HashMap<String, i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EncodeRequest {
    pub model_name: String,
    pub text: String,
    pub src_lang: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeResponse {
    pub input_ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model_name: String,
    pub input_ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
    pub forced_bos_token_id: i64,
    pub max_length: usize,
    pub num_beams: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub sequences: Vec<Vec<i64>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeRequest {
    pub model_name: String,
    pub sequences: Vec<Vec<i64>>,
    pub skip_special_tokens: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeResponse {
    pub texts: Vec<String>,
}

impl ModelServiceClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn load_model(&self, request: LoadRequest) -> Result<LoadResponse> {
        self.post("/model/load", &request).await
    }

    pub async fn encode(&self, request: EncodeRequest) -> Result<EncodeResponse> {
        self.post("/tokenizer/encode", &request).await
    }

    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        self.post("/model/generate", &request).await
    }

    pub async fn decode(&self, request: DecodeRequest) -> Result<DecodeResponse> {
        self.post("/tokenizer/decode", &request).await
    }

    pub async fn health_check(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;
        Ok(response.status().is_success())
    }

    async fn post<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::ModelInvocation(format!(
                "{} returned {}: {}",
                path, status, body
            )));
        }

        let result: Resp = response.json().await?;
        Ok(result)
    }
}
