use libgraphql_language_service::Diagnostic;
use libgraphql_language_service::Severity;
use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";
pub(crate) const YELLOW_WARNING: &str = "\u{26A0}\u{FE0F}";

/// One diagnostic in the `file:line:column: severity: message` form most
/// editors and terminals can jump to. Lines and columns are one-based.
pub(crate) fn format_diagnostic(file_path: &Path, diagnostic: &Diagnostic) -> String {
    let marker = match diagnostic.severity {
        Severity::Error => RED_X,
        Severity::Warning => YELLOW_WARNING,
        Severity::Information | Severity::Hint => " ",
    };
    format!(
        "{marker} {}:{}:{}: {}: {} [{}]",
        file_path.display(),
        diagnostic.range.start.line + 1,
        diagnostic.range.start.character + 1,
        diagnostic.severity,
        diagnostic.message,
        diagnostic.source,
    )
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
