mod cli_tests;
mod graphql_files_tests;
mod output_utils_tests;
mod utils;
