//! A tree of the definitions, fields and fragment spreads of a document, for
//! an editor's outline view.

use crate::ast;
use crate::source_text;
use crate::top_level_definitions::DefinitionKind;
use crate::top_level_definitions::retain_definitions;
use crate::top_level_definitions::top_level_definitions;
use crate::Position;
use graphql_parser::query::OperationDefinition;
use graphql_parser::query::Selection;
use graphql_parser::schema::TypeDefinition;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::TokenKind;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    pub outline_trees: Vec<OutlineTree>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
pub enum OutlineKind {
    OperationDefinition,
    FragmentDefinition,
    Field,
    FragmentSpread,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    InputObjectTypeDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    FieldDefinition,
    InputValueDefinition,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextTokenKind {
    Keyword,
    ClassName,
    Plain,
    Whitespace,
}

/// One styled piece of an outline entry's label.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
pub struct TextToken {
    pub kind: TextTokenKind,
    pub value: String,
}
impl TextToken {
    fn new(kind: TextTokenKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineTree {
    pub tokenized_text: Vec<TextToken>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative_name: Option<String>,

    pub kind: OutlineKind,
    pub start_position: Position,

    /// Just past the closing brace of the entry's body, or past its name when
    /// it has none.
    pub end_position: Position,

    pub children: Vec<OutlineTree>,
}

/// Outlines `text`, or returns `None` when it does not parse. A document
/// mixing executable and type system definitions is outlined half by half.
///
/// Inline fragments contribute their fields to the enclosing entry.
/// Scalars, unions, directives, schema definitions and extensions are left
/// out.
pub fn get_outline(text: &str) -> Option<Outline> {
    let builder = OutlineBuilder::new(text);
    let outline_trees =
        if let Ok(document) = ast::query::parse(text) {
            builder.executable(&document)
        } else if let Ok(document) = ast::schema::parse(text) {
            builder.type_system(&document)
        } else {
            let definitions = top_level_definitions(text);
            let executable = retain_definitions(text, &definitions, DefinitionKind::Executable);
            let type_system = retain_definitions(text, &definitions, DefinitionKind::TypeSystem);
            let executable = ast::query::parse(&executable).ok()?;
            let type_system = ast::schema::parse(&type_system).ok()?;
            let mut trees = builder.executable(&executable);
            trees.extend(builder.type_system(&type_system));
            trees.sort_by_key(|tree| tree.start_position);
            trees
        };
    log::debug!("outlined {} top-level entries", outline_trees.len());
    Some(Outline { outline_trees })
}

struct OutlineBuilder<'a> {
    lines: Vec<&'a str>,

    /// Every bracket of the document, in order.
    brackets: Vec<(Position, char)>,
}
impl<'a> OutlineBuilder<'a> {
    fn new(text: &'a str) -> Self {
        let mut brackets = vec![];
        run_online_parser(&OnlineParser::graphql(), text, |cursor, _, token, line_idx| {
            if token.kind == TokenKind::Punctuation
                && let Some(ch @ ('{' | '}' | '(' | ')' | '[' | ']')) = token.value.chars().next()
            {
                brackets.push((Position::new(line_idx, cursor.column_of(token.start)), ch));
            }
            ControlFlow::Continue(())
        });
        Self {
            lines: text.split('\n').collect(),
            brackets,
        }
    }

    /// Where the node at `pos` ends: past the brace closing its body when
    /// `has_body`, otherwise past its name.
    fn end_of(&self, pos: graphql_parser::Pos, name: &str, has_body: bool) -> Position {
        let name_end = source_text::name_range(&self.lines, pos, name).end;
        if !has_body {
            return name_end;
        }
        self.closing_brace(name_end).unwrap_or(name_end)
    }

    /// The position just past the `}` matching the first `{` at or after
    /// `from` that is not inside parentheses or brackets.
    fn closing_brace(&self, from: Position) -> Option<Position> {
        let mut nesting = 0usize;
        let mut depth = 0usize;
        for (position, ch) in self.brackets.iter().filter(|(position, _)| *position >= from) {
            match ch {
                '(' | '[' if depth == 0 => nesting += 1,
                ')' | ']' if depth == 0 => nesting = nesting.saturating_sub(1),
                '{' if nesting == 0 => depth += 1,
                '}' if depth > 0 => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Position::new(position.line, position.character + 1));
                    }
                },
                '}' if nesting == 0 => return None,
                _ => (),
            }
        }
        None
    }

    fn executable(&self, document: &ast::query::Document) -> Vec<OutlineTree> {
        document.definitions.iter()
            .map(|definition| match definition {
                ast::query::Definition::Operation(operation) => self.operation(operation),
                ast::query::Definition::Fragment(fragment) => self.fragment(fragment),
            })
            .collect()
    }

    fn operation(&self, operation: &ast::query::OperationDefinition) -> OutlineTree {
        let (keyword, position, name, selection_set) = match operation {
            OperationDefinition::SelectionSet(selection_set) => {
                ("query", selection_set.span.0, None, selection_set)
            },
            OperationDefinition::Query(query) => {
                ("query", query.position, query.name.as_ref(), &query.selection_set)
            },
            OperationDefinition::Mutation(mutation) => {
                ("mutation", mutation.position, mutation.name.as_ref(), &mutation.selection_set)
            },
            OperationDefinition::Subscription(subscription) => (
                "subscription",
                subscription.position,
                subscription.name.as_ref(),
                &subscription.selection_set,
            ),
        };

        let mut tokenized_text = vec![TextToken::new(TextTokenKind::Keyword, keyword)];
        if let Some(name) = name {
            tokenized_text.push(TextToken::new(TextTokenKind::Whitespace, " "));
            tokenized_text.push(TextToken::new(TextTokenKind::ClassName, name));
        }
        let start_position = source_text::position_from_pos(position);
        let end_position = match name {
            Some(name) => self.end_of(position, name, true),
            None => self.closing_brace(start_position).unwrap_or(start_position),
        };
        OutlineTree {
            tokenized_text,
            representative_name: name.cloned(),
            kind: OutlineKind::OperationDefinition,
            start_position,
            end_position,
            children: self.selections(selection_set),
        }
    }

    fn fragment(&self, fragment: &ast::query::FragmentDefinition) -> OutlineTree {
        OutlineTree {
            tokenized_text: definition_tokens("fragment", &fragment.name),
            representative_name: Some(fragment.name.clone()),
            kind: OutlineKind::FragmentDefinition,
            start_position: source_text::position_from_pos(fragment.position),
            end_position: self.end_of(fragment.position, &fragment.name, true),
            children: self.selections(&fragment.selection_set),
        }
    }

    fn selections(&self, selection_set: &ast::query::SelectionSet) -> Vec<OutlineTree> {
        let mut trees = vec![];
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => trees.push(self.field(field)),
                Selection::FragmentSpread(spread) => trees.push(OutlineTree {
                    tokenized_text: vec![
                        TextToken::new(TextTokenKind::Plain, "..."),
                        TextToken::new(TextTokenKind::ClassName, &spread.fragment_name),
                    ],
                    representative_name: Some(spread.fragment_name.clone()),
                    kind: OutlineKind::FragmentSpread,
                    start_position: source_text::position_from_pos(spread.position),
                    end_position: self.end_of(spread.position, &spread.fragment_name, false),
                    children: vec![],
                }),
                Selection::InlineFragment(inline) => {
                    trees.extend(self.selections(&inline.selection_set));
                },
            }
        }
        trees
    }

    fn field(&self, field: &ast::query::Field) -> OutlineTree {
        let mut tokenized_text = vec![];
        if let Some(alias) = &field.alias {
            tokenized_text.push(TextToken::new(TextTokenKind::Plain, alias));
            tokenized_text.push(TextToken::new(TextTokenKind::Plain, ": "));
        }
        tokenized_text.push(TextToken::new(TextTokenKind::Plain, &field.name));
        let has_body = !field.selection_set.items.is_empty();
        OutlineTree {
            tokenized_text,
            representative_name: Some(field.name.clone()),
            kind: OutlineKind::Field,
            start_position: source_text::position_from_pos(field.position),
            end_position: self.end_of(field.position, &field.name, has_body),
            children: self.selections(&field.selection_set),
        }
    }

    fn type_system(
        &self,
        document: &graphql_parser::schema::Document<'static, String>,
    ) -> Vec<OutlineTree> {
        document.definitions.iter()
            .filter_map(|definition| match definition {
                ast::schema::Definition::TypeDefinition(type_def) => self.type_definition(type_def),
                _ => None,
            })
            .collect()
    }

    fn type_definition(&self, type_def: &ast::schema::TypeDefinition) -> Option<OutlineTree> {
        let (keyword, kind, position, name, children): (_, _, _, _, Vec<OutlineTree>) =
            match type_def {
                TypeDefinition::Object(object) => (
                    "type",
                    OutlineKind::ObjectTypeDefinition,
                    object.position,
                    &object.name,
                    object.fields.iter().map(|field| self.field_definition(field)).collect(),
                ),
                TypeDefinition::Interface(interface) => (
                    "interface",
                    OutlineKind::InterfaceTypeDefinition,
                    interface.position,
                    &interface.name,
                    interface.fields.iter().map(|field| self.field_definition(field)).collect(),
                ),
                TypeDefinition::InputObject(input) => (
                    "input",
                    OutlineKind::InputObjectTypeDefinition,
                    input.position,
                    &input.name,
                    input.fields.iter().map(|field| self.input_value(field)).collect(),
                ),
                TypeDefinition::Enum(enum_type) => (
                    "enum",
                    OutlineKind::EnumTypeDefinition,
                    enum_type.position,
                    &enum_type.name,
                    enum_type.values.iter().map(|value| self.enum_value(value)).collect(),
                ),
                TypeDefinition::Scalar(_) | TypeDefinition::Union(_) => return None,
            };
        Some(OutlineTree {
            tokenized_text: definition_tokens(keyword, name),
            representative_name: Some(name.clone()),
            kind,
            start_position: source_text::position_from_pos(position),
            end_position: self.end_of(position, name, !children.is_empty()),
            children,
        })
    }

    fn field_definition(&self, field: &ast::schema::Field) -> OutlineTree {
        OutlineTree {
            children: field.arguments.iter().map(|argument| self.input_value(argument)).collect(),
            kind: OutlineKind::FieldDefinition,
            ..self.leaf(field.position, &field.name)
        }
    }

    fn input_value(&self, input_value: &ast::schema::InputValue) -> OutlineTree {
        OutlineTree {
            kind: OutlineKind::InputValueDefinition,
            ..self.leaf(input_value.position, &input_value.name)
        }
    }

    fn enum_value(&self, enum_value: &ast::schema::EnumValue) -> OutlineTree {
        OutlineTree {
            kind: OutlineKind::EnumValueDefinition,
            ..self.leaf(enum_value.position, &enum_value.name)
        }
    }

    /// An entry labelled with just its name, spanning to the end of that
    /// name.
    fn leaf(&self, position: graphql_parser::Pos, name: &str) -> OutlineTree {
        OutlineTree {
            tokenized_text: vec![TextToken::new(TextTokenKind::Plain, name)],
            representative_name: Some(name.to_string()),
            kind: OutlineKind::Field,
            start_position: source_text::position_from_pos(position),
            end_position: self.end_of(position, name, false),
            children: vec![],
        }
    }
}

fn definition_tokens(keyword: &str, name: &str) -> Vec<TextToken> {
    vec![
        TextToken::new(TextTokenKind::Keyword, keyword),
        TextToken::new(TextTokenKind::Whitespace, " "),
        TextToken::new(TextTokenKind::ClassName, name),
    ]
}
