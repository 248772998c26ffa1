mod response_format;
mod srt;

pub use response_format::ResponseFormat;
pub use srt::to_srt;
