//! Adapts batch parse and validation results into [`Diagnostic`]s.

use crate::ast;
use crate::top_level_definitions::DefinitionKind;
use crate::top_level_definitions::TopLevelDefinition;
use crate::top_level_definitions::retain_definitions;
use crate::top_level_definitions::top_level_definitions;
use crate::validation;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::Diagnostic;
use crate::Position;
use crate::Range;
use crate::Schema;
use crate::Severity;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::Style;
use libgraphql_online_parser::TokenKind;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

pub const SYNTAX_SOURCE: &str = "Syntax";
pub const VALIDATION_SOURCE: &str = "Validation";
pub const DEPRECATION_SOURCE: &str = "Deprecation";

/// A batch parse failure, located at a zero-based position.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub position: Position,
    pub message: String,
}
impl SyntaxError {
    /// Extracts the position and description from a `graphql-parser` error
    /// message, which reads `... at LINE:COLUMN` followed by one line per
    /// detail.
    pub fn from_parse_error(error_text: &str) -> Self {
        let mut lines = error_text.lines();
        let head = lines.next().unwrap_or_default();
        let position = head.rsplit_once(" at ")
            .and_then(|(_, location)| {
                let (line, column) = location.trim().split_once(':')?;
                Some(Position::new(
                    line.trim().parse::<usize>().ok()?.saturating_sub(1),
                    column.trim().parse::<usize>().ok()?.saturating_sub(1),
                ))
            })
            .unwrap_or_default();
        let details: Vec<String> = lines
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(tidy_detail)
            .collect();
        let message =
            if details.is_empty() {
                "Syntax Error: Unexpected input.".to_string()
            } else {
                format!("Syntax Error: {}.", details.join(", "))
            };
        Self { position, message }
    }
}

/// Folds the tokenizer's own "unexpected ..." wording into the parser's
/// `Unexpected` prefix so it is not said twice.
fn tidy_detail(detail: &str) -> String {
    let Some(rest) = detail.strip_prefix("Unexpected ") else {
        return detail.to_string();
    };
    let inner = rest.trim_matches('`');
    match inner.strip_prefix("unexpected ").or_else(|| inner.strip_prefix("Unexpected ")) {
        Some(what) => format!("Unexpected {what}"),
        None => detail.to_string(),
    }
}

/// Lints `text` with the bundled validation rules.
///
/// Executable documents are validated against `schema` (when given); SDL
/// documents produce no diagnostics; documents mixing both have their type
/// system definitions reported as not executable; anything else produces a
/// single syntax error.
pub fn get_diagnostics(text: &str, schema: Option<&Schema>) -> Vec<Diagnostic> {
    get_diagnostics_with_validators(text, schema, &validation::default_validators())
}

pub fn get_diagnostics_with_validators(
    text: &str,
    schema: Option<&Schema>,
    validators: &[Box<dyn DocumentValidator>],
) -> Vec<Diagnostic> {
    let query_error = match ast::query::parse(text) {
        Ok(document) => return match schema {
            Some(schema) => validate_document(text, schema, &document, validators),
            None => vec![],
        },
        Err(err) => SyntaxError::from_parse_error(&err.to_string()),
    };

    let schema_error = match ast::schema::parse(text) {
        Ok(_) => {
            log::debug!("document parsed as SDL; skipping validation");
            return vec![];
        },
        Err(err) => SyntaxError::from_parse_error(&err.to_string()),
    };

    let definitions = top_level_definitions(text);
    let has = |kind: DefinitionKind| definitions.iter().any(|definition| definition.kind == kind);
    if has(DefinitionKind::Executable) && has(DefinitionKind::TypeSystem) {
        return get_mixed_diagnostics(text, &definitions, schema, validators);
    }

    let error =
        if schema_error.position > query_error.position {
            schema_error
        } else {
            query_error
        };
    vec![syntax_diagnostic(text, error)]
}

fn syntax_diagnostic(text: &str, error: SyntaxError) -> Diagnostic {
    let range = get_range(text, error.position);
    Diagnostic::new(Severity::Error, error.message, range, SYNTAX_SOURCE)
}

/// Checks each half of a document that mixes operations with type system
/// definitions on its own, with the other half blanked out. Against a
/// schema, every type system definition is reported as not executable and
/// the operations are validated as usual.
fn get_mixed_diagnostics(
    text: &str,
    definitions: &[TopLevelDefinition],
    schema: Option<&Schema>,
    validators: &[Box<dyn DocumentValidator>],
) -> Vec<Diagnostic> {
    let type_system_text = retain_definitions(text, definitions, DefinitionKind::TypeSystem);
    if let Err(err) = ast::schema::parse(&type_system_text) {
        return vec![syntax_diagnostic(text, SyntaxError::from_parse_error(&err.to_string()))];
    }
    let executable_text = retain_definitions(text, definitions, DefinitionKind::Executable);
    let document = match ast::query::parse(&executable_text) {
        Ok(document) => document,
        Err(err) => return vec![
            syntax_diagnostic(text, SyntaxError::from_parse_error(&err.to_string())),
        ],
    };
    let Some(schema) = schema else {
        return vec![];
    };

    log::debug!("validating the executable definitions of a mixed document");
    let mut diagnostics: Vec<Diagnostic> = definitions.iter()
        .filter(|definition| definition.kind == DefinitionKind::TypeSystem)
        .map(|definition| {
            let def_name = match &definition.name {
                Some(name) if definition.keyword != "schema" => format!("\"{name}\""),
                _ => "schema".to_string(),
            };
            Diagnostic::new(
                Severity::Error,
                format!("The {def_name} definition is not executable."),
                definition.name_range.unwrap_or(definition.range),
                VALIDATION_SOURCE,
            )
        })
        .collect();
    diagnostics.extend(validate_document(&executable_text, schema, &document, validators));
    diagnostics
}

/// Runs `validators` and the deprecation finder over an executable
/// document.
pub fn validate_document(
    text: &str,
    schema: &Schema,
    document: &ast::query::Document,
    validators: &[Box<dyn DocumentValidator>],
) -> Vec<Diagnostic> {
    let ctx = ValidationContext::new(schema, document, text);
    let errors = validation::validate(&ctx, validators);
    let warnings = validation::find_deprecated_usages(&ctx);
    let mut diagnostics = annotations(errors, Severity::Error, VALIDATION_SOURCE);
    diagnostics.extend(annotations(warnings, Severity::Warning, DEPRECATION_SOURCE));
    diagnostics
}

fn annotations(
    errors: Vec<ValidationError>,
    severity: Severity,
    source: &str,
) -> Vec<Diagnostic> {
    errors.into_iter()
        .flat_map(|error| {
            let ValidationError { message, ranges } = error;
            ranges.into_iter()
                .map(move |range| Diagnostic::new(severity, message.clone(), range, source))
        })
        .collect()
}

/// The range to underline for an error reported at `position`: the token
/// containing it, else the first invalid token of its line, else the last
/// token of its line.
pub fn get_range(text: &str, position: Position) -> Range {
    let mut line_tokens: Vec<(usize, usize, Style)> = vec![];
    run_online_parser(&OnlineParser::graphql(), text, |cursor, _, token, line_idx| {
        if line_idx > position.line {
            return ControlFlow::Break(());
        }
        if line_idx == position.line
            && token.kind != TokenKind::Eof
            && token.style != Style::Ws
        {
            line_tokens.push((
                cursor.column_of(token.start),
                cursor.column_of(token.end),
                token.style,
            ));
        }
        ControlFlow::Continue(())
    });

    let column = position.character;
    let containing = line_tokens.iter()
        .find(|(start, end, _)| *start <= column && column < *end);
    let invalid = || line_tokens.iter().find(|(_, _, style)| *style == Style::InvalidChar);
    match containing.or_else(invalid).or(line_tokens.last()) {
        Some(&(start, end, _)) => Range::on_line(position.line, start, end),
        None => Range::new(position, position),
    }
}
