//! Editor services for GraphQL documents: diagnostics, completion, hover,
//! go-to-definition and outlines, plus lint and completion for the JSON
//! variables panel.
//!
//! Batch services ([`get_diagnostics`]) run `graphql-parser` and the bundled
//! [`validation`] rules over a whole document. Cursor services
//! ([`get_autocomplete_suggestions`], [`get_hover_information`],
//! [`get_definition`]) run the error-tolerant
//! [`libgraphql_online_parser`] up to the cursor, so they keep working while
//! the document is incomplete.
//!
//! ```rust
//! use libgraphql_language_service::Position;
//! use libgraphql_language_service::Schema;
//! use libgraphql_language_service::get_autocomplete_suggestions;
//!
//! let schema: Schema = "type Query { hero: String, human: String }".parse().unwrap();
//! let labels: Vec<String> = get_autocomplete_suggestions(&schema, "{ h", Position::new(0, 3))
//!     .into_iter()
//!     .map(|item| item.label)
//!     .collect();
//! assert_eq!(labels, vec!["hero", "human", "__schema"]);
//! ```

pub mod ast;
mod autocomplete;
mod completion_item;
mod context_at_position;
mod definition;
mod diagnostic;
pub mod diagnostics;
mod document_mode;
pub mod hint_list;
mod hover;
pub mod json_parse;
pub mod outline;
pub mod schema;
mod source_text;
mod top_level_definitions;
mod type_info;
pub mod types;
pub mod validation;
mod variable_collector;
mod variables;

pub use autocomplete::get_autocomplete_suggestions;
pub use autocomplete::get_autocomplete_suggestions_with_mode;
pub use completion_item::CompletionItem;
pub use completion_item::CompletionItemKind;
pub use context_at_position::ContextAtPosition;
pub use context_at_position::get_context_at_position;
pub use definition::DefinitionQueryResult;
pub use definition::NamedTypeDefinition;
pub use definition::get_definition;
pub use definition::get_named_type_definition;
pub use diagnostic::Diagnostic;
pub use diagnostic::Severity;
pub use diagnostics::get_diagnostics;
pub use diagnostics::get_diagnostics_with_validators;
pub use document_mode::DocumentMode;
pub use document_mode::get_document_mode;
pub use hover::HoverConfig;
pub use hover::get_hover_information;
pub use libgraphql_online_parser::Position;
pub use outline::get_outline;
pub use libgraphql_online_parser::Range;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use type_info::TypeInfo;
pub use type_info::get_definition_state;
pub use type_info::get_type_info;
pub use variable_collector::collect_variable_definitions;
pub use variable_collector::collect_variable_types;
pub use variables::get_variables_diagnostics;
pub use variables::get_variables_suggestions;

#[cfg(test)]
mod tests;
