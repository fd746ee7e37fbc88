use serde::{Deserialize, Serialize};

/// Configuration for the translation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Which model backend the factory builds
    #[serde(default = "default_backend")]
    pub backend: String,

    #[serde(default = "default_service_url")]
    pub service_url: String,

    #[serde(default = "default_model_name")]
    pub model_name: String,

    #[serde(default = "default_max_length")]
    pub max_length: usize,

    #[serde(default = "default_num_beams")]
    pub num_beams: usize,

    /// Load the model at startup instead of on the first translation
    #[serde(default = "default_true")]
    pub preload: bool,
}

fn default_backend() -> String {
    "m2m100_service".to_string()
}

fn default_service_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_model_name() -> String {
    "facebook/m2m100_418M".to_string()
}

fn default_max_length() -> usize {
    200
}

fn default_num_beams() -> usize {
    5
}

fn default_true() -> bool {
    true
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            service_url: default_service_url(),
            model_name: default_model_name(),
            max_length: default_max_length(),
            num_beams: default_num_beams(),
            preload: default_true(),
        }
    }
}
