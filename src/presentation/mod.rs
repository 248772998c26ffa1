pub mod config;
pub mod format;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{Environment, Settings};
pub use format::ResponseFormat;
pub use router::create_router;
pub use state::AppState;
