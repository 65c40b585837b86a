//! Splits a document into its top-level definitions without parsing it in
//! full, so documents mixing operations and type system definitions can be
//! told apart.

use crate::Position;
use crate::Range;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::RuleKind;
use libgraphql_online_parser::Style;
use libgraphql_online_parser::TokenKind;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

const EXECUTABLE_KEYWORDS: &[&str] = &["query", "mutation", "subscription", "fragment"];
const TYPE_SYSTEM_KEYWORDS: &[&str] = &[
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefinitionKind {
    Executable,
    TypeSystem,
}

/// One top-level definition: from its description (or first keyword) up to
/// where the next definition starts.
#[derive(Clone, Debug, PartialEq)]
pub struct TopLevelDefinition {
    pub kind: DefinitionKind,

    /// The defining keyword, e.g. `type` for `extend type Foo`, or `{` for a
    /// shorthand query.
    pub keyword: String,

    pub name: Option<String>,
    pub name_range: Option<Range>,
    pub range: Range,
}

fn definition_kind(keyword: &str) -> Option<DefinitionKind> {
    if EXECUTABLE_KEYWORDS.contains(&keyword) {
        Some(DefinitionKind::Executable)
    } else if TYPE_SYSTEM_KEYWORDS.contains(&keyword) {
        Some(DefinitionKind::TypeSystem)
    } else {
        None
    }
}

/// What the scan expects from the next significant top-level token.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Expecting {
    /// Anything; a definition keyword starts a new definition.
    Definition,

    /// The keyword of a definition already opened by a description or by
    /// `extend`.
    Keyword,

    /// The name following a definition keyword.
    Name,
}

/// Finds the top-level definitions of `text` in order. Tokens that belong
/// to no definition (e.g. stray punctuation) are folded into the preceding
/// one.
pub fn top_level_definitions(text: &str) -> Vec<TopLevelDefinition> {
    let mut definitions: Vec<TopLevelDefinition> = vec![];
    let mut depth = 0usize;
    let mut expecting = Expecting::Definition;

    run_online_parser(&OnlineParser::graphql(), text, |cursor, state, token, line_idx| {
        if matches!(token.kind, TokenKind::Eof | TokenKind::Whitespace | TokenKind::Comment) {
            return ControlFlow::Continue(());
        }
        let start = Position::new(line_idx, cursor.column_of(token.start));
        let token_end = Position::new(line_idx, cursor.column_of(token.end));
        let open = |
            kind: DefinitionKind,
            keyword: &str,
            definitions: &mut Vec<TopLevelDefinition>,
        | {
            definitions.push(TopLevelDefinition {
                kind,
                keyword: keyword.to_string(),
                name: None,
                name_range: None,
                range: Range::new(start, token_end),
            });
        };

        if depth == 0 {
            match token.kind {
                TokenKind::String | TokenKind::BlockString
                    if expecting == Expecting::Definition =>
                {
                    open(DefinitionKind::TypeSystem, "", &mut definitions);
                    expecting = Expecting::Keyword;
                },
                TokenKind::Name if token.style == Style::Keyword => {
                    let keyword = token.value;
                    if keyword == "extend" && expecting == Expecting::Definition {
                        open(DefinitionKind::TypeSystem, "extend", &mut definitions);
                        expecting = Expecting::Keyword;
                    } else if let Some(kind) = definition_kind(keyword) {
                        if expecting == Expecting::Keyword
                            && let Some(current) = definitions.last_mut()
                        {
                            current.kind = kind;
                            current.keyword = keyword.to_string();
                        } else {
                            open(kind, keyword, &mut definitions);
                        }
                        expecting =
                            if keyword == "schema" {
                                Expecting::Definition
                            } else {
                                Expecting::Name
                            };
                    }
                },
                TokenKind::Name if expecting == Expecting::Name => {
                    if let Some(current) = definitions.last_mut() {
                        current.name = Some(token.value.to_string());
                        current.name_range = Some(Range::new(start, token_end));
                    }
                    expecting = Expecting::Definition;
                },
                TokenKind::Punctuation if token.value == "{"
                    && state.find(RuleKind::ShortQuery).is_some()
                    && expecting == Expecting::Definition =>
                {
                    open(DefinitionKind::Executable, "{", &mut definitions);
                },
                TokenKind::Punctuation if token.value == "@" => (),
                _ => {
                    if expecting == Expecting::Name {
                        expecting = Expecting::Definition;
                    }
                },
            }
        }

        if token.kind == TokenKind::Punctuation {
            match token.value {
                "{" | "(" | "[" => depth += 1,
                "}" | ")" | "]" => depth = depth.saturating_sub(1),
                _ => (),
            }
        }
        if let Some(current) = definitions.last_mut() {
            current.range.end = token_end;
        }
        ControlFlow::Continue(())
    });

    log::trace!("split document into {} definition(s)", definitions.len());
    definitions
}

/// Blanks out (with spaces) every definition of `text` that is not of
/// `keep` kind, leaving line and column positions of the rest unchanged.
pub fn retain_definitions(
    text: &str,
    definitions: &[TopLevelDefinition],
    keep: DefinitionKind,
) -> String {
    let blanked: Vec<&Range> = definitions.iter()
        .filter(|definition| definition.kind != keep)
        .map(|definition| &definition.range)
        .collect();
    text.split('\n')
        .enumerate()
        .map(|(line_idx, line)| {
            line.chars()
                .enumerate()
                .map(|(column, ch)| {
                    let position = Position::new(line_idx, column);
                    let hidden = blanked.iter()
                        .any(|range| range.start <= position && position < range.end);
                    if hidden && !ch.is_whitespace() { ' ' } else { ch }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
