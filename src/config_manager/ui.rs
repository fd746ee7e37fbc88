use serde::{Deserialize, Serialize};

use crate::translate::languages;

/// Texts and default selections for the translator page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_page_title")]
    pub page_title: String,

    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    #[serde(default = "default_caption")]
    pub caption: String,

    #[serde(default = "default_source")]
    pub default_source: String,

    #[serde(default = "default_target")]
    pub default_target: String,
}

fn default_page_title() -> String {
    "🌐 Cross-Lingual Translator".to_string()
}

fn default_subtitle() -> String {
    "Translate text between 100+ languages using AI".to_string()
}

fn default_caption() -> String {
    "Powered by M2M100 model from Meta AI".to_string()
}

fn default_source() -> String {
    "English".to_string()
}

fn default_target() -> String {
    "Spanish".to_string()
}

impl UiConfig {
    /// Default selections must name registry entries
    pub fn validate(&self) -> anyhow::Result<()> {
        for name in [&self.default_source, &self.default_target] {
            languages::code_for(name)
                .map_err(|e| anyhow::anyhow!("Invalid ui_config default language: {}", e))?;
        }
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_title: default_page_title(),
            subtitle: default_subtitle(),
            caption: default_caption(),
            default_source: default_source(),
            default_target: default_target(),
        }
    }
}
