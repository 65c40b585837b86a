use crate::Range;

/// How serious a [`Diagnostic`] is. Serializes as the integers `1..=4`
/// editors expect.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Severity {
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}
impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Information => "information",
            Self::Hint => "hint",
        }
    }
}
impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
impl serde::Serialize for Severity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// A positioned problem report for an editor.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub range: Range,

    /// What produced the diagnostic: `Syntax`, `Validation` or
    /// `Deprecation`.
    pub source: String,
}
impl Diagnostic {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        range: Range,
        source: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            message: message.into(),
            range,
            source: source.into(),
        }
    }
}
