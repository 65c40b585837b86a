/// The LSP `CompletionItemKind`s completion produces. Serializes as the LSP
/// integer code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum CompletionItemKind {
    Function = 3,
    Constructor = 4,
    Field = 5,
    Variable = 6,
    Interface = 8,
    Value = 12,
    EnumMember = 20,
}
impl CompletionItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Constructor => "constructor",
            Self::Field => "field",
            Self::Variable => "variable",
            Self::Interface => "interface",
            Self::Value => "value",
            Self::EnumMember => "enum-member",
        }
    }
}
impl serde::Serialize for CompletionItemKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// One completion suggestion.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    pub label: String,
    pub kind: CompletionItemKind,

    /// The suggestion's type, rendered as GraphQL (e.g. `[Episode]!`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    pub is_deprecated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecation_reason: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,

    /// The text to insert when it differs from `label`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,
}
impl CompletionItem {
    pub fn new(label: impl Into<String>, kind: CompletionItemKind) -> Self {
        Self {
            label: label.into(),
            kind,
            detail: None,
            documentation: None,
            is_deprecated: false,
            deprecation_reason: None,
            sort_text: None,
            insert_text: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_documentation(mut self, documentation: Option<&str>) -> Self {
        self.documentation = documentation.map(str::to_string);
        self
    }

    pub fn with_deprecation(mut self, deprecation_reason: Option<&str>) -> Self {
        self.is_deprecated = deprecation_reason.is_some();
        self.deprecation_reason = deprecation_reason.map(str::to_string);
        self
    }

    pub fn with_sort_text(mut self, sort_text: impl Into<String>) -> Self {
        self.sort_text = Some(sort_text.into());
        self
    }

    pub fn with_insert_text(mut self, insert_text: impl Into<String>) -> Self {
        self.insert_text = Some(insert_text.into());
        self
    }
}
