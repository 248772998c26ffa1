mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{AudioSettings, LimitSettings, ModelSettings, ServerSettings, Settings};
