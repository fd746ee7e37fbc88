//! Page state and the pure handlers behind the Translate and Swap buttons.
//!
//! The page holds a [`ViewState`] and sends it along with every action;
//! each handler returns the next state instead of mutating shared state.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config_manager::UiConfig;
use crate::error::Result;
use crate::translate::{languages, Translator};

pub const EMPTY_INPUT_WARNING: &str = "Please enter text to translate";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub selected_source: String,
    pub selected_target: String,
    #[serde(default)]
    pub last_result: String,
    #[serde(default)]
    pub warning: Option<String>,
}

impl ViewState {
    /// Every field set before the page first renders.
    pub fn initial(ui: &UiConfig) -> Self {
        Self {
            selected_source: ui.default_source.clone(),
            selected_target: ui.default_target.clone(),
            last_result: String::new(),
            warning: None,
        }
    }

    /// Exchange source and target selections. A warning only lasts for
    /// the render that produced it.
    pub fn swap(self) -> Self {
        Self {
            selected_source: self.selected_target,
            selected_target: self.selected_source,
            last_result: self.last_result,
            warning: None,
        }
    }

    fn with_warning(self, warning: &str) -> Self {
        Self {
            warning: Some(warning.to_string()),
            ..self
        }
    }

    fn with_result(self, last_result: String) -> Self {
        Self {
            last_result,
            warning: None,
            ..self
        }
    }
}

/// Translate button: blank input only sets the warning, otherwise the
/// selections are resolved to ISO codes and the result replaces `last_result`.
pub async fn on_translate(view: ViewState, input_text: &str, translator: &Translator) -> Result<ViewState> {
    if input_text.trim().is_empty() {
        warn!("Translate requested with empty input");
        return Ok(view.with_warning(EMPTY_INPUT_WARNING));
    }

    let source = languages::code_for(&view.selected_source)?;
    let target = languages::code_for(&view.selected_target)?;
    let translation = translator.translate(input_text, source, target).await?;
    Ok(view.with_result(translation))
}

/// Swap button
pub fn on_swap(view: ViewState) -> ViewState {
    view.swap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslateError;
    use crate::model::cell::tests::{CountingLoader, MockModel};
    use crate::model::ModelCell;
    use std::sync::Arc;

    fn translator(model: Arc<MockModel>) -> Translator {
        let loader = Arc::new(CountingLoader::new(model));
        Translator::new(Arc::new(ModelCell::new(loader)))
    }

    fn view(source: &str, target: &str) -> ViewState {
        ViewState {
            selected_source: source.to_string(),
            selected_target: target.to_string(),
            last_result: String::new(),
            warning: None,
        }
    }

    #[test]
    fn test_initial_state_is_complete() {
        let state = ViewState::initial(&UiConfig::default());
        assert_eq!(state.selected_source, "English");
        assert_eq!(state.selected_target, "Spanish");
        assert_eq!(state.last_result, "");
        assert_eq!(state.warning, None);
    }

    #[test]
    fn test_swap_is_involution() {
        for (src, tgt) in [("English", "Spanish"), ("Urdu", "Polish"), ("French", "French")] {
            let original = ViewState {
                last_result: "kept".to_string(),
                ..view(src, tgt)
            };
            let once = on_swap(original.clone());
            assert_eq!(once.selected_source, tgt);
            assert_eq!(once.selected_target, src);
            assert_eq!(once.last_result, "kept");
            assert_eq!(on_swap(once), original);
        }
    }

    #[tokio::test]
    async fn test_swap_clears_warning_from_empty_translate() {
        let translator = translator(Arc::new(MockModel::new(Some("Hola"))));
        let warned = on_translate(view("English", "Spanish"), "", &translator).await.unwrap();
        assert_eq!(warned.warning.as_deref(), Some(EMPTY_INPUT_WARNING));

        let swapped = on_swap(warned);
        assert_eq!(swapped.warning, None);
        assert_eq!(swapped.selected_source, "Spanish");
        assert_eq!(swapped.selected_target, "English");
    }

    #[tokio::test]
    async fn test_empty_input_warns_without_model_call() {
        let model = Arc::new(MockModel::new(Some("Hola")));
        let translator = translator(model.clone());
        let before = ViewState {
            last_result: "previous".to_string(),
            ..view("English", "Spanish")
        };

        let after = on_translate(before, "   ", &translator).await.unwrap();
        assert_eq!(after.warning.as_deref(), Some(EMPTY_INPUT_WARNING));
        assert_eq!(after.last_result, "previous");
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_translate_sets_result_and_clears_warning() {
        let model = Arc::new(MockModel::new(Some("Hola")));
        let translator = translator(model.clone());
        let before = view("English", "Spanish").with_warning(EMPTY_INPUT_WARNING);

        let after = on_translate(before, "Hello", &translator).await.unwrap();
        assert_eq!(after.last_result, "Hola");
        assert_eq!(after.warning, None);
        assert_eq!(after.selected_source, "English");
        assert_eq!(*model.last_forced_bos.lock().unwrap(), Some(128025));
    }

    #[tokio::test]
    async fn test_unknown_selection() {
        let translator = translator(Arc::new(MockModel::new(Some("Hola"))));
        let result = on_translate(view("Klingon", "Spanish"), "Hello", &translator).await;
        assert!(matches!(result, Err(TranslateError::UnknownLanguage(name)) if name == "Klingon"));
    }
}
