//! Tests for [`crate::get_document_mode`].

use crate::DocumentMode;
use crate::get_document_mode;

/// Verifies that operations and fragments are executable.
#[test]
fn test_executable_document() {
    assert_eq!(get_document_mode("{ hero { name } }", None), DocumentMode::Executable);
    assert_eq!(
        get_document_mode("fragment F on Human { name }", None),
        DocumentMode::Executable,
    );
}

/// Verifies that type system definitions are SDL.
#[test]
fn test_type_system_document() {
    assert_eq!(
        get_document_mode("type Query { hero: String }", None),
        DocumentMode::TypeSystem,
    );
}

/// Verifies that a `.graphqls` uri forces SDL.
#[test]
fn test_graphqls_uri() {
    assert_eq!(
        get_document_mode("{ hero }", Some("file:///schema.graphqls")),
        DocumentMode::TypeSystem,
    );
    assert_eq!(
        get_document_mode("{ hero }", Some("file:///query.graphql")),
        DocumentMode::Executable,
    );
}

/// Verifies that incomplete documents cannot be classified.
#[test]
fn test_unknown_document() {
    assert_eq!(get_document_mode("{ hero(", None), DocumentMode::Unknown);
}

/// Verifies that operations next to type system definitions are mixed.
#[test]
fn test_mixed_document() {
    assert_eq!(
        get_document_mode("{ hero { name } }\ntype X { a: Int }", None),
        DocumentMode::Mixed,
    );
    assert_eq!(
        get_document_mode("\"\"\"An X.\"\"\"\ntype X { a: Int }\nquery Q { x }", None),
        DocumentMode::Mixed,
    );
}

/// Verifies the display names of the modes.
#[test]
fn test_display() {
    assert_eq!(DocumentMode::TypeSystem.to_string(), "type-system");
    assert_eq!(DocumentMode::Executable.to_string(), "executable");
    assert_eq!(DocumentMode::Mixed.to_string(), "mixed");
    assert_eq!(DocumentMode::Unknown.to_string(), "unknown");
}
