pub mod main;
pub mod system;
pub mod model;
pub mod ui;
pub mod utils;

pub use main::Config;
pub use model::ModelConfig;
pub use ui::UiConfig;
