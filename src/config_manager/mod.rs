pub mod main;
pub mod system;
pub mod translator;
pub mod utils;

pub use main::Config;
pub use system::{ServerConfig, SessionConfig};
pub use translator::{InferenceConfig, ModelSelection, TranslatorConfig};
