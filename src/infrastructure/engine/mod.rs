mod whisper_cli_engine;

pub use whisper_cli_engine::{check_whisper_binary, parse_segment_line, WhisperCliEngine};
