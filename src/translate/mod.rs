pub mod interface;
pub mod languages;
pub mod invoker;

pub use interface::{TranslateRequest, TranslateResponse};
pub use invoker::Translator;
