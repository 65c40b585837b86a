//! Lint and completion for the JSON variables panel that accompanies an
//! operation.
//!
//! Both services take the declared type of every variable, usually from
//! [`collect_variable_definitions`](crate::collect_variable_definitions).

use crate::hint_list::hint_list;
use crate::json_parse::JsonNode;
use crate::json_parse::JsonNodeKind;
use crate::json_parse::parse_json_object;
use crate::types::InputValueDef;
use crate::types::SchemaTypeKind;
use crate::types::TypeRef;
use crate::CompletionItem;
use crate::CompletionItemKind;
use crate::Diagnostic;
use crate::Position;
use crate::Range;
use crate::Schema;
use crate::Severity;
use indexmap::IndexMap;
use libgraphql_online_parser::ContextToken;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::RuleKind;
use libgraphql_online_parser::State;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

/// Checks the variables panel `text` against `variable_types`.
///
/// A syntax error is reported on its own. Otherwise every entry naming an
/// undeclared variable is flagged, and every value is checked against its
/// variable's type. Empty text has nothing to report.
pub fn get_variables_diagnostics(
    schema: &Schema,
    variable_types: &IndexMap<String, TypeRef>,
    text: &str,
) -> Vec<Diagnostic> {
    if text.is_empty() {
        return vec![];
    }
    let root = match parse_json_object(text) {
        Ok(root) => root,
        Err(err) => {
            return vec![Diagnostic::new(Severity::Error, err.message, err.range, "Syntax")];
        },
    };
    let JsonNodeKind::Object(members) = &root.kind else {
        return vec![];
    };

    let mut errors = vec![];
    for member in members {
        match variable_types.get(&member.key) {
            Some(type_ref) => check_value(schema, type_ref, &member.value, &mut errors),
            None => errors.push((
                member.key_range,
                format!("Variable \"${}\" does not appear in any GraphQL query.", member.key),
            )),
        }
    }
    log::debug!("variables lint found {} problem(s)", errors.len());
    errors.into_iter()
        .map(|(range, message)| Diagnostic::new(Severity::Error, message, range, "Validation"))
        .collect()
}

fn check_value(
    schema: &Schema,
    type_ref: &TypeRef,
    node: &JsonNode,
    errors: &mut Vec<(Range, String)>,
) {
    let is_null = node.kind == JsonNodeKind::Null;
    if type_ref.is_non_null() && is_null {
        errors.push((node.range, format!("Type \"{type_ref}\" is non-nullable and cannot be null.")));
        return;
    }
    if is_null {
        return;
    }

    // A non-list value is accepted as a list of one.
    if let Some(item_type) = type_ref.list_item() {
        match &node.kind {
            JsonNodeKind::Array(items) => {
                for item in items {
                    check_value(schema, item_type, item, errors);
                }
            },
            _ => check_value(schema, item_type, node, errors),
        }
        return;
    }

    let type_ref = type_ref.nullable();
    let name = type_ref.named_type();
    let Some(schema_type) = schema.get_type(name) else {
        return;
    };
    let expected = || (node.range, format!("Expected value of type \"{type_ref}\"."));
    match &schema_type.kind {
        SchemaTypeKind::InputObject { fields } => {
            check_input_object(type_ref, fields, node, schema, errors);
        },
        SchemaTypeKind::Enum { values } => {
            if !matches!(&node.kind, JsonNodeKind::String(value) if values.contains_key(value)) {
                errors.push(expected());
            }
        },
        SchemaTypeKind::Scalar => {
            let matches_scalar = match (name, &node.kind) {
                ("Boolean", kind) => matches!(kind, JsonNodeKind::Boolean(_)),
                ("String", kind) => matches!(kind, JsonNodeKind::String(_)),
                ("ID", kind) => matches!(kind, JsonNodeKind::String(_) | JsonNodeKind::Number(..)),
                ("Float", kind) => matches!(kind, JsonNodeKind::Number(..)),
                ("Int", JsonNodeKind::Number(_, value)) => is_int(*value),
                ("Int", _) => false,
                (_, kind) => matches!(
                    kind,
                    JsonNodeKind::String(_) | JsonNodeKind::Number(..) | JsonNodeKind::Boolean(_),
                ),
            };
            if !matches_scalar {
                errors.push(expected());
            }
        },
        _ => (),
    }
}

fn check_input_object(
    type_ref: &TypeRef,
    fields: &IndexMap<String, InputValueDef>,
    node: &JsonNode,
    schema: &Schema,
    errors: &mut Vec<(Range, String)>,
) {
    let JsonNodeKind::Object(members) = &node.kind else {
        errors.push((node.range, format!("Type \"{type_ref}\" must be an Object.")));
        return;
    };
    for member in members {
        match fields.get(&member.key) {
            Some(field) => check_value(schema, &field.type_ref, &member.value, errors),
            None => errors.push((
                member.key_range,
                format!("Type \"{type_ref}\" does not have a field \"{}\".", member.key),
            )),
        }
    }
    for (field_name, field) in fields {
        let provided = members.iter().any(|member| &member.key == field_name);
        if !provided && field.type_ref.is_non_null() {
            errors.push((
                node.range,
                format!("Object of type \"{type_ref}\" is missing required field \"{field_name}\"."),
            ));
        }
    }
}

/// Whether `value` is a whole number that fits a signed 32-bit integer.
fn is_int(value: f64) -> bool {
    value.fract() == 0.0 && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX)
}

/// Suggests what may be typed at `position` in the variables panel `text`:
/// the opening brace, variable names, input object fields, enum values and
/// booleans, depending on where the cursor is.
pub fn get_variables_suggestions(
    schema: &Schema,
    variable_types: &IndexMap<String, TypeRef>,
    text: &str,
    position: Position,
) -> Vec<CompletionItem> {
    let token = token_at_position(text, position);
    let state = token.state.without_invalid();
    let Some(frame) = state.top() else {
        return vec![];
    };
    let kind = frame.kind;
    let step = frame.step;
    let typed = token.string.as_str();

    if kind == RuleKind::Document && step == 0 {
        return hint_list(typed, vec![CompletionItem::new("{", CompletionItemKind::Constructor)]);
    }

    let info = VariableTypeInfo::from_state(schema, variable_types, &state);

    if kind == RuleKind::Document || (kind == RuleKind::Variable && step == 0) {
        let items = variable_types.iter()
            .map(|(name, type_ref)| {
                CompletionItem::new(name, CompletionItemKind::Variable)
                    .with_detail(type_ref.to_string())
                    .with_insert_text(format!("\"{name}\": "))
            })
            .collect();
        return hint_list(typed, items);
    }

    if kind == RuleKind::ObjectValue || (kind == RuleKind::ObjectField && step == 0) {
        let Some(fields) = info.fields else {
            return vec![];
        };
        let items = fields.values()
            .map(|field| {
                CompletionItem::new(&field.name, CompletionItemKind::Field)
                    .with_detail(field.type_ref.to_string())
                    .with_documentation(field.description.as_deref())
                    .with_insert_text(format!("\"{}\": ", field.name))
            })
            .collect();
        return hint_list(typed, items);
    }

    let in_value_position = matches!(
        kind,
        RuleKind::StringValue
            | RuleKind::NumberValue
            | RuleKind::BooleanValue
            | RuleKind::NullValue
    ) || (kind == RuleKind::ListValue && step == 1)
        || (kind == RuleKind::ObjectField && step == 2)
        || (kind == RuleKind::Variable && step == 2);
    if !in_value_position {
        return vec![];
    }
    let Some(type_ref) = info.type_ref else {
        return vec![];
    };
    let Some(schema_type) = schema.get_type(type_ref.named_type()) else {
        return vec![];
    };
    let items = match &schema_type.kind {
        SchemaTypeKind::InputObject { .. } => {
            vec![CompletionItem::new("{", CompletionItemKind::Constructor)]
        },
        SchemaTypeKind::Enum { values } => values.values()
            .map(|value| {
                CompletionItem::new(&value.name, CompletionItemKind::EnumMember)
                    .with_detail(&schema_type.name)
                    .with_documentation(value.description.as_deref())
                    .with_deprecation(value.deprecation_reason.as_deref())
                    .with_insert_text(format!("\"{}\"", value.name))
            })
            .collect(),
        SchemaTypeKind::Scalar if schema_type.name == "Boolean" => vec![
            CompletionItem::new("true", CompletionItemKind::Value)
                .with_detail("Boolean")
                .with_documentation(Some("Not false.")),
            CompletionItem::new("false", CompletionItemKind::Value)
                .with_detail("Boolean")
                .with_documentation(Some("Not true.")),
        ],
        _ => vec![],
    };
    hint_list(typed, items)
}

/// The token of the variables panel that ends at or after `position`.
fn token_at_position(text: &str, position: Position) -> ContextToken {
    run_online_parser(&OnlineParser::variables(), text, |cursor, _, _, line_idx| {
        if line_idx == position.line && cursor.current_column() + 1 > position.character {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// The expected type at a point of the variables panel, and the fields on
/// offer when that point is inside an input object.
#[derive(Default)]
struct VariableTypeInfo<'s> {
    type_ref: Option<TypeRef>,
    fields: Option<&'s IndexMap<String, InputValueDef>>,
}
impl<'s> VariableTypeInfo<'s> {
    fn from_state(
        schema: &'s Schema,
        variable_types: &IndexMap<String, TypeRef>,
        state: &State,
    ) -> Self {
        let mut info = Self::default();
        for frame in state.stack() {
            match frame.kind {
                RuleKind::Variable => {
                    info.type_ref = frame.name.as_ref()
                        .and_then(|name| variable_types.get(name))
                        .cloned();
                },
                RuleKind::ListValue => {
                    info.type_ref = info.type_ref
                        .as_ref()
                        .and_then(TypeRef::list_item)
                        .cloned();
                },
                RuleKind::ObjectValue => {
                    info.fields = info.type_ref
                        .as_ref()
                        .and_then(|type_ref| schema.get_type(type_ref.named_type()))
                        .and_then(|schema_type| schema_type.input_fields());
                },
                RuleKind::ObjectField => {
                    info.type_ref = frame.name.as_ref()
                        .zip(info.fields)
                        .and_then(|(name, fields)| fields.get(name))
                        .map(|field| field.type_ref.clone());
                },
                _ => (),
            }
        }
        info
    }
}
