//! Tests for [`crate::output_utils`].

use crate::output_utils;
use libgraphql_language_service::Diagnostic;
use libgraphql_language_service::Range;
use libgraphql_language_service::Severity;
use std::path::Path;

/// Verifies that positions are printed one-based, with a marker per
/// severity.
#[test]
fn test_format_diagnostic() {
    let diagnostic = Diagnostic::new(
        Severity::Error,
        "Cannot query field \"nope\" on type \"Query\".",
        Range::on_line(2, 4, 8),
        "Validation",
    );
    assert_eq!(
        output_utils::format_diagnostic(Path::new("q.graphql"), &diagnostic),
        format!(
            "{} q.graphql:3:5: error: Cannot query field \"nope\" on type \
            \"Query\". [Validation]",
            output_utils::RED_X,
        ),
    );

    let warning = Diagnostic::new(Severity::Warning, "old", Range::on_line(0, 0, 1), "Deprecation");
    assert!(
        output_utils::format_diagnostic(Path::new("q.graphql"), &warning)
            .starts_with(output_utils::YELLOW_WARNING),
    );
}

/// Verifies that JSON output is pretty-printed.
#[test]
fn test_to_json() {
    assert_eq!(
        output_utils::to_json(&vec![1, 2]).unwrap(),
        "[\n  1,\n  2\n]",
    );
}
