mod health;
mod models;
mod transcribe;

pub use health::health_handler;
pub use models::models_handler;
pub use transcribe::transcribe_handler;
