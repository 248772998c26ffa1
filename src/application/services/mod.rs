mod concurrency_gate;
mod rate_limiter;
mod transcription_service;

pub use concurrency_gate::{ConcurrencyGate, GateError, GatePermit};
pub use rate_limiter::{AdmissionSlip, RateLimiter};
pub use transcription_service::{TranscriptionRequest, TranscriptionService};
