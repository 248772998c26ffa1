mod ffmpeg_converter;

pub use ffmpeg_converter::{check_ffmpeg_binary, FfmpegConverter};
