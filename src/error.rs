use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Language not supported by the model: {0}")]
    UnsupportedLanguage(String),

    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Model could not be loaded: {0}")]
    ModelLoad(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::ModelInvocation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TranslateError>;
