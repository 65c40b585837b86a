mod lexer_tests;
mod run_online_parser_tests;
mod utils;
