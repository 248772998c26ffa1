mod engine_parsing_test;
