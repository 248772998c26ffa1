pub mod audio;
pub mod engine;
pub mod models;
pub mod observability;
