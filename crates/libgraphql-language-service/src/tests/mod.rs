mod autocomplete_tests;
mod diagnostics_tests;
mod document_mode_tests;
mod json_parse_tests;
mod schema_builder_tests;
mod shared_schema_tests;
mod type_info_tests;
mod utils;
mod validation_tests;
