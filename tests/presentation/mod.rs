mod response_format_test;
mod srt_test;
