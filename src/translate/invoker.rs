use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, info_span, Instrument};
use uuid::Uuid;

use super::interface::{TranslateRequest, TranslateResponse};
use super::languages;
use crate::error::{Result, TranslateError};
use crate::model::ModelCell;

/// Runs single translations against the shared model handle
#[derive(Clone)]
pub struct Translator {
    model: Arc<ModelCell>,
}

impl Translator {
    pub fn new(model: Arc<ModelCell>) -> Self {
        Self { model }
    }

    /// Translate `text` from `source_lang` to `target_lang` (ISO codes).
    ///
    /// Blank input returns an empty string without touching the model.
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        if text.trim().is_empty() {
            debug!("Skipping translation of blank input");
            return Ok(String::new());
        }

        let request_id = Uuid::new_v4();
        let span = info_span!("translate", %request_id, source_lang, target_lang);
        self.run(text, source_lang, target_lang).instrument(span).await
    }

    pub async fn handle(&self, request: TranslateRequest) -> Result<TranslateResponse> {
        let translated_text = self
            .translate(&request.text, &request.source_lang, &request.target_lang)
            .await?;
        Ok(TranslateResponse { translated_text })
    }

    async fn run(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let started = Instant::now();
        let model = self.model.get().await?;

        if model.lang_id(source_lang).is_none() {
            return Err(TranslateError::UnsupportedLanguage(source_lang.to_string()));
        }
        let forced_bos_token_id = model
            .lang_id(target_lang)
            .ok_or_else(|| TranslateError::UnsupportedLanguage(target_lang.to_string()))?;

        let encoded = model.encode(text, source_lang).await?;
        let sequences = model.generate(&encoded, forced_bos_token_id).await?;
        let translated = model
            .decode(&sequences)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| TranslateError::ModelInvocation("model returned no sequences".to_string()))?;

        info!(
            "Translated {} chars {} -> {} in {:?}",
            text.chars().count(),
            languages::name_for(source_lang).unwrap_or(source_lang),
            languages::name_for(target_lang).unwrap_or(target_lang),
            started.elapsed()
        );
        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cell::tests::{CountingLoader, MockModel};

    fn translator(output: Option<&str>) -> (Translator, Arc<MockModel>, Arc<CountingLoader>) {
        let model = Arc::new(MockModel::new(output));
        let loader = Arc::new(CountingLoader::new(model.clone()));
        let cell = Arc::new(ModelCell::new(loader.clone()));
        (Translator::new(cell), model, loader)
    }

    #[tokio::test]
    async fn test_blank_input_skips_model() {
        let (translator, model, loader) = translator(Some("Hola"));
        for text in ["", " ", "\n\t  ", "\u{3000}"] {
            assert_eq!(translator.translate(text, "en", "es").await.unwrap(), "");
        }
        assert_eq!(model.calls(), 0);
        assert_eq!(loader.loads(), 0);
    }

    #[tokio::test]
    async fn test_hello_english_to_spanish() {
        let (translator, model, loader) = translator(Some("Hola"));
        let out = translator.translate("Hello", "en", "es").await.unwrap();

        assert!(!out.is_empty());
        assert_eq!(out, "Hola");
        assert_eq!(model.last_src_lang.lock().unwrap().as_deref(), Some("en"));
        assert_eq!(*model.last_forced_bos.lock().unwrap(), Some(128025));
        assert_eq!(model.calls(), 3);
        assert_eq!(loader.loads(), 1);

        translator.translate("Goodbye", "en", "fr").await.unwrap();
        assert_eq!(loader.loads(), 1);
    }

    #[tokio::test]
    async fn test_handle_request() {
        let (translator, _, _) = translator(Some("Bonjour"));
        let response = translator
            .handle(TranslateRequest {
                text: "Hello".to_string(),
                source_lang: "en".to_string(),
                target_lang: "fr".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.translated_text, "Bonjour");
    }

    #[tokio::test]
    async fn test_unsupported_languages() {
        let (translator, model, _) = translator(Some("Hola"));
        match translator.translate("Hello", "en", "tlh").await {
            Err(TranslateError::UnsupportedLanguage(code)) => assert_eq!(code, "tlh"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
        match translator.translate("Hello", "xx", "es").await {
            Err(TranslateError::UnsupportedLanguage(code)) => assert_eq!(code, "xx"),
            other => panic!("expected UnsupportedLanguage, got {:?}", other),
        }
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_propagates() {
        let (translator, _, _) = translator(None);
        match translator.translate("Hello", "en", "es").await {
            Err(TranslateError::ModelInvocation(msg)) => assert!(msg.contains("out of memory")),
            other => panic!("expected ModelInvocation, got {:?}", other),
        }
    }
}
