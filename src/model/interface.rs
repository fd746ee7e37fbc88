use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tokenizer output for one piece of source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodedInput {
    pub input_ids: Vec<i64>,
    pub attention_mask: Vec<i64>,
}

/// Interface for a pretrained multilingual sequence-to-sequence model
/// and its tokenizer. The model internals are opaque; only the
/// encode / generate / decode contract is relied upon.
#[async_trait]
pub trait Seq2SeqModel: Send + Sync {
    /// Name the model was loaded under
    fn model_name(&self) -> &str;

    /// Token id of the language tag for `code`, if the tokenizer knows it
    fn lang_id(&self, code: &str) -> Option<i64>;

    /// Encode `text` with the tokenizer's source language set to `src_lang`
    async fn encode(&self, text: &str, src_lang: &str) -> Result<EncodedInput>;

    /// Run generation, forcing the first generated token to `forced_bos_token_id`
    async fn generate(&self, input: &EncodedInput, forced_bos_token_id: i64) -> Result<Vec<Vec<i64>>>;

    /// Decode generated sequences with special tokens stripped
    async fn decode(&self, sequences: &[Vec<i64>]) -> Result<Vec<String>>;
}
