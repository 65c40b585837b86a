//! Completion suggestions at a cursor position.

use crate::context_at_position::ContextAtPosition;
use crate::context_at_position::get_context_at_position;
use crate::hint_list::hint_list;
use crate::type_info::get_definition_state;
use crate::types::DirectiveLocation;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::SchemaType;
use crate::types::SchemaTypeKind;
use crate::CompletionItem;
use crate::CompletionItemKind;
use crate::DocumentMode;
use crate::Position;
use crate::Schema;
use indexmap::IndexMap;
use indexmap::IndexSet;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::RuleKind;
use libgraphql_online_parser::State;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

const EXECUTABLE_KEYWORDS: &[(&str, CompletionItemKind)] = &[
    ("query", CompletionItemKind::Function),
    ("mutation", CompletionItemKind::Function),
    ("subscription", CompletionItemKind::Function),
    ("fragment", CompletionItemKind::Function),
    ("{", CompletionItemKind::Constructor),
];

const TYPE_SYSTEM_KEYWORDS: &[(&str, CompletionItemKind)] = &[
    ("type", CompletionItemKind::Function),
    ("interface", CompletionItemKind::Function),
    ("union", CompletionItemKind::Function),
    ("enum", CompletionItemKind::Function),
    ("input", CompletionItemKind::Function),
    ("scalar", CompletionItemKind::Function),
    ("schema", CompletionItemKind::Function),
    ("directive", CompletionItemKind::Function),
];

/// Suggests what may be typed at `position` in `text`, ranked against the
/// word under the cursor. The document mode is inferred from `text`.
pub fn get_autocomplete_suggestions(
    schema: &Schema,
    text: &str,
    position: Position,
) -> Vec<CompletionItem> {
    get_autocomplete_suggestions_with_mode(schema, text, position, None)
}

/// Like [`get_autocomplete_suggestions`], but with the document mode given
/// by the caller (e.g. from the file extension) when `mode` is set.
pub fn get_autocomplete_suggestions_with_mode(
    schema: &Schema,
    text: &str,
    position: Position,
    mode: Option<DocumentMode>,
) -> Vec<CompletionItem> {
    let ctx = get_context_at_position(schema, text, position, mode);
    let Some(frame) = ctx.state.top() else {
        return vec![];
    };
    let kind = frame.kind;
    let step = frame.step;
    let parent_kind = ctx.state.parent().map(|parent| parent.kind);
    let typed = ctx.token.string.as_str();

    // Definitions
    if kind == RuleKind::Document {
        let mut keywords = vec![];
        if ctx.mode != DocumentMode::Executable {
            keywords.push(keyword("extend", CompletionItemKind::Function));
        }
        if ctx.mode != DocumentMode::TypeSystem {
            keywords.extend(EXECUTABLE_KEYWORDS.iter().map(|(label, kind)| keyword(label, *kind)));
        }
        if ctx.mode != DocumentMode::Executable {
            keywords.extend(TYPE_SYSTEM_KEYWORDS.iter().map(|(label, kind)| keyword(label, *kind)));
        }
        return hint_list(typed, keywords);
    }
    if kind == RuleKind::ExtendDef {
        let keywords = TYPE_SYSTEM_KEYWORDS.iter()
            .filter(|(label, _)| *label != "directive")
            .map(|(label, kind)| keyword(label, *kind))
            .collect();
        return hint_list(typed, keywords);
    }
    if parent_kind == Some(RuleKind::ExtensionDefinition) {
        if step > 1 {
            return vec![];
        }
        return hint_list(typed, suggestions_for_extension(schema, kind));
    }

    if kind == RuleKind::Implements
        || (kind == RuleKind::NamedType && parent_kind == Some(RuleKind::Implements))
    {
        return suggestions_for_implements(schema, text, &ctx);
    }

    if matches!(kind, RuleKind::SelectionSet | RuleKind::Field | RuleKind::AliasedField) {
        return suggestions_for_field_names(schema, &ctx);
    }

    if (kind == RuleKind::Arguments || (kind == RuleKind::Argument && step == 0))
        && let Some(arg_defs) = ctx.type_info.arg_defs
    {
        let items = arg_defs.iter().map(argument_item).collect();
        return hint_list(typed, items);
    }

    if (kind == RuleKind::ObjectValue || (kind == RuleKind::ObjectField && step == 0))
        && let Some(field_defs) = ctx.type_info.object_field_defs
    {
        let item_kind =
            if kind == RuleKind::ObjectValue {
                CompletionItemKind::Value
            } else {
                CompletionItemKind::Field
            };
        let items = field_defs.values()
            .map(|field_def| CompletionItem {
                kind: item_kind,
                ..argument_item(field_def)
            })
            .collect();
        return hint_list(typed, items);
    }

    if kind == RuleKind::EnumValue
        || (kind == RuleKind::ListValue && step == 1)
        || (kind == RuleKind::ObjectField && step == 2)
        || (kind == RuleKind::Argument && step == 2)
    {
        return suggestions_for_input_values(schema, &ctx);
    }

    if kind == RuleKind::Variable && step == 1 {
        let input_type_name = ctx.type_info
            .named_input_type(schema)
            .map(|input_type| input_type.name.as_str());
        let variables = variable_items(schema, &ctx)
            .into_iter()
            .filter(|item| item.detail.as_deref() == input_type_name)
            .collect();
        return hint_list(typed, variables);
    }

    if (kind == RuleKind::TypeCondition && step == 1)
        || (kind == RuleKind::NamedType && parent_kind == Some(RuleKind::TypeCondition))
    {
        return hint_list(typed, suggestions_for_type_conditions(schema, &ctx));
    }

    if kind == RuleKind::FragmentSpread && step == 1 {
        return hint_list(typed, suggestions_for_fragment_spread(schema, text, &ctx));
    }

    if let Some(definition) = unwrap_type(&ctx.state) {
        if definition.kind == RuleKind::FieldDef && definition.step == 4 {
            let items = named_types(schema, |schema_type| schema_type.is_output());
            return hint_list(typed, items);
        }
        if definition.kind == RuleKind::InputValueDef && definition.step == 3 {
            let items = named_types(schema, SchemaType::is_input);
            return hint_list(typed, items);
        }
    }

    if (kind == RuleKind::VariableDefinition && step == 2)
        || (kind == RuleKind::ListType && step == 1)
        || (kind == RuleKind::NamedType
            && matches!(
                parent_kind,
                Some(RuleKind::VariableDefinition | RuleKind::ListType | RuleKind::NonNullType),
            ))
    {
        let items = schema.all_types()
            .values()
            .filter(|schema_type| schema_type.is_input())
            .map(|schema_type| {
                CompletionItem::new(&schema_type.name, CompletionItemKind::Variable)
                    .with_documentation(schema_type.description.as_deref())
            })
            .collect();
        return hint_list(typed, items);
    }

    if kind == RuleKind::Directive {
        let Some(location) = directive_location(&ctx.state) else {
            return vec![];
        };
        let items = schema.all_directives()
            .values()
            .filter(|directive| directive.is_valid_at(location))
            .map(|directive| {
                CompletionItem::new(&directive.name, CompletionItemKind::Function)
                    .with_documentation(directive.description.as_deref())
            })
            .collect();
        return hint_list(typed, items);
    }

    if kind == RuleKind::DirectiveDef {
        let items = ctx.state.name()
            .and_then(|name| schema.get_directive(name))
            .map(|directive| {
                directive.arguments
                    .iter()
                    .map(|arg| {
                        CompletionItem::new(&arg.name, CompletionItemKind::Field)
                            .with_documentation(arg.description.as_deref())
                    })
                    .collect()
            })
            .unwrap_or_default();
        return hint_list(typed, items);
    }

    vec![]
}

fn keyword(label: &str, kind: CompletionItemKind) -> CompletionItem {
    CompletionItem::new(label, kind)
}

/// Named types that are not introspection types and satisfy `predicate`.
fn named_types(
    schema: &Schema,
    predicate: impl Fn(&SchemaType) -> bool,
) -> Vec<CompletionItem> {
    schema.all_types()
        .values()
        .filter(|schema_type| !schema_type.name.starts_with("__") && predicate(schema_type))
        .map(|schema_type| CompletionItem::new(&schema_type.name, CompletionItemKind::Function))
        .collect()
}

fn suggestions_for_extension(schema: &Schema, kind: RuleKind) -> Vec<CompletionItem> {
    let extends = |schema_type: &SchemaType| match (kind, &schema_type.kind) {
        (RuleKind::ScalarDef, SchemaTypeKind::Scalar)
        | (RuleKind::ObjectTypeDef, SchemaTypeKind::Object { .. })
        | (RuleKind::InterfaceDef, SchemaTypeKind::Interface { .. })
        | (RuleKind::UnionDef, SchemaTypeKind::Union { .. })
        | (RuleKind::EnumDef, SchemaTypeKind::Enum { .. })
        | (RuleKind::InputDef, SchemaTypeKind::InputObject { .. }) => true,
        _ => false,
    };
    named_types(schema, extends)
}

fn suggestions_for_implements(
    schema: &Schema,
    text: &str,
    ctx: &ContextAtPosition<'_>,
) -> Vec<CompletionItem> {
    if ctx.token.state.top().is_some_and(|frame| frame.needs_separator) {
        return vec![];
    }
    let current_type = ctx.type_info.interface_def
        .as_deref()
        .or(ctx.type_info.object_type_def.as_deref());

    let schema_interfaces: Vec<&SchemaType> = schema.all_types()
        .values()
        .filter(|schema_type| matches!(schema_type.kind, SchemaTypeKind::Interface { .. }))
        .collect();
    let mut inline_interfaces: IndexSet<String> = IndexSet::new();
    let mut siblings: IndexSet<String> = IndexSet::new();
    let cursor = (ctx.token.line, ctx.token.start);
    run_online_parser(&OnlineParser::graphql(), text, |cursor_at, state, token, line_idx| {
        let Some(name) = state.name() else {
            return ControlFlow::Continue(());
        };
        match state.kind() {
            Some(RuleKind::InterfaceDef)
                if !schema_interfaces.iter().any(|iface| iface.name == name) =>
            {
                inline_interfaces.insert(name.to_string());
            },
            Some(RuleKind::NamedType)
                if state.parent().map(|frame| frame.kind) == Some(RuleKind::Implements)
                    && (line_idx, cursor_at.column_of(token.end)) <= cursor =>
            {
                let owner = state.stack()
                    .iter()
                    .rev()
                    .find(|frame| matches!(
                        frame.kind,
                        RuleKind::ObjectTypeDef | RuleKind::InterfaceDef,
                    ))
                    .and_then(|frame| frame.name.as_deref());
                if owner.is_some() && owner == current_type {
                    siblings.insert(name.to_string());
                }
            },
            _ => (),
        }
        ControlFlow::Continue(())
    });

    let candidates = schema_interfaces.iter()
        .map(|iface| (iface.name.as_str(), iface.description.as_deref()))
        .chain(inline_interfaces.iter().map(|name| (name.as_str(), None)));
    let items = candidates
        .filter(|(name, _)| Some(*name) != current_type && !siblings.contains(*name))
        .map(|(name, description)| {
            CompletionItem::new(name, CompletionItemKind::Interface)
                .with_documentation(description)
        })
        .collect();
    hint_list(&ctx.token.string, items)
}

fn suggestions_for_field_names(
    schema: &Schema,
    ctx: &ContextAtPosition<'_>,
) -> Vec<CompletionItem> {
    let Some(parent_type) = ctx.type_info.parent_type else {
        return vec![];
    };
    let fields: Vec<&FieldDef> = parent_type.fields()
        .into_iter()
        .flat_map(|fields| fields.values())
        .chain(schema.meta_fields(&parent_type.name))
        .collect();
    let items = fields.into_iter()
        .enumerate()
        .map(|(idx, field_def)| {
            CompletionItem::new(&field_def.name, CompletionItemKind::Field)
                .with_sort_text(format!("{idx}{}", field_def.name))
                .with_detail(field_def.type_ref.to_string())
                .with_documentation(field_def.description.as_deref())
                .with_deprecation(field_def.deprecation_reason.as_deref())
        })
        .collect();
    hint_list(&ctx.token.string, items)
}

/// An argument or input object field, inserted with its trailing colon.
fn argument_item(input_value: &InputValueDef) -> CompletionItem {
    CompletionItem::new(&input_value.name, CompletionItemKind::Variable)
        .with_detail(input_value.type_ref.to_string())
        .with_documentation(input_value.description.as_deref())
        .with_deprecation(input_value.deprecation_reason.as_deref())
        .with_insert_text(format!("{}: ", input_value.name))
}

fn suggestions_for_input_values(
    schema: &Schema,
    ctx: &ContextAtPosition<'_>,
) -> Vec<CompletionItem> {
    let Some(input_type) = ctx.type_info.named_input_type(schema) else {
        return vec![];
    };
    let variables: Vec<CompletionItem> = variable_items(schema, ctx)
        .into_iter()
        .filter(|item| item.detail.as_deref() == Some(input_type.name.as_str()))
        .collect();

    let items = if let Some(values) = input_type.enum_values() {
        values.values()
            .map(|value| {
                CompletionItem::new(&value.name, CompletionItemKind::EnumMember)
                    .with_detail(&input_type.name)
                    .with_documentation(value.description.as_deref())
                    .with_deprecation(value.deprecation_reason.as_deref())
            })
            .chain(variables)
            .collect()
    } else if input_type.name == "Boolean" {
        let booleans = [("true", "Not false."), ("false", "Not true.")]
            .into_iter()
            .map(|(label, documentation)| {
                CompletionItem::new(label, CompletionItemKind::Variable)
                    .with_detail("Boolean")
                    .with_documentation(Some(documentation))
            });
        variables.into_iter().chain(booleans).collect()
    } else {
        variables
    };
    hint_list(&ctx.token.string, items)
}

/// The document's declared variables whose type the schema knows. Each is
/// detailed with its named type.
fn variable_items(schema: &Schema, ctx: &ContextAtPosition<'_>) -> Vec<CompletionItem> {
    let Some(variable_types) = ctx.token.state.variable_to_type.as_ref() else {
        return vec![];
    };
    let bare_name =
        ctx.token.string == "$" || ctx.token.state.kind() == Some(RuleKind::Variable);
    variable_types.iter()
        .filter(|(_, type_name)| schema.get_type(type_name).is_some())
        .map(|(name, type_name)| {
            let insert_text = if bare_name { name.clone() } else { format!("${name}") };
            CompletionItem::new(format!("${name}"), CompletionItemKind::Variable)
                .with_detail(type_name)
                .with_insert_text(insert_text)
        })
        .collect()
}

fn suggestions_for_type_conditions(
    schema: &Schema,
    ctx: &ContextAtPosition<'_>,
) -> Vec<CompletionItem> {
    let possible_types: Vec<&SchemaType> = match ctx.type_info.parent_type {
        Some(parent_type) if parent_type.is_abstract() => {
            let objects = schema.possible_types(&parent_type.name);
            let interfaces: IndexMap<&str, &SchemaType> = objects.iter()
                .flat_map(|object| object.interfaces())
                .filter_map(|iface| schema.get_type(iface))
                .map(|iface| (iface.name.as_str(), iface))
                .collect();
            objects.into_iter().chain(interfaces.into_values()).collect()
        },
        Some(parent_type) => vec![parent_type],
        None => schema.all_types()
            .values()
            .filter(|schema_type| {
                schema_type.is_composite() && !schema_type.name.starts_with("__")
            })
            .collect(),
    };
    possible_types.into_iter()
        .map(|schema_type| {
            CompletionItem::new(&schema_type.name, CompletionItemKind::Field)
                .with_documentation(schema_type.description.as_deref())
        })
        .collect()
}

fn suggestions_for_fragment_spread(
    schema: &Schema,
    text: &str,
    ctx: &ContextAtPosition<'_>,
) -> Vec<CompletionItem> {
    let Some(parent_type) = ctx.type_info.parent_type.filter(|parent| parent.is_composite()) else {
        return vec![];
    };
    let current_fragment = get_definition_state(&ctx.token.state)
        .filter(|frame| frame.kind == RuleKind::FragmentDefinition)
        .and_then(|frame| frame.name.as_deref());

    collect_fragment_definitions(text)
        .into_iter()
        .filter(|(name, type_name)| {
            Some(name.as_str()) != current_fragment
                && schema.get_type(type_name).is_some_and(SchemaType::is_composite)
                && schema.do_types_overlap(&parent_type.name, type_name)
        })
        .map(|(name, type_name)| {
            let documentation = format!("fragment {name} on {type_name}");
            CompletionItem::new(name, CompletionItemKind::Field)
                .with_detail(type_name)
                .with_documentation(Some(documentation.as_str()))
        })
        .collect()
}

/// Fragment names mapped to their type conditions, in document order.
fn collect_fragment_definitions(text: &str) -> IndexMap<String, String> {
    let mut fragments = IndexMap::new();
    run_online_parser(&OnlineParser::graphql(), text, |_, state, _, _| {
        if let Some(frame) = state.find(RuleKind::FragmentDefinition)
            && let (Some(name), Some(type_name)) = (&frame.name, &frame.type_name)
            && !fragments.contains_key(name)
        {
            fragments.insert(name.clone(), type_name.clone());
        }
        ControlFlow::Continue(())
    });
    fragments
}

/// The frame a type reference belongs to, skipping the type's own frames.
fn unwrap_type(state: &State) -> Option<&libgraphql_online_parser::RuleFrame> {
    state.stack()
        .iter()
        .rev()
        .find(|frame| !matches!(
            frame.kind,
            RuleKind::NamedType | RuleKind::ListType | RuleKind::Type | RuleKind::NonNullType,
        ))
}

/// Where a directive being typed would be applied, judged by the frame that
/// encloses it.
fn directive_location(state: &State) -> Option<DirectiveLocation> {
    let owner = state.parent()?;
    Some(match owner.kind {
        RuleKind::Query => DirectiveLocation::Query,
        RuleKind::Mutation => DirectiveLocation::Mutation,
        RuleKind::Subscription => DirectiveLocation::Subscription,
        RuleKind::Field | RuleKind::AliasedField => DirectiveLocation::Field,
        RuleKind::FragmentDefinition => DirectiveLocation::FragmentDefinition,
        RuleKind::FragmentSpread => DirectiveLocation::FragmentSpread,
        RuleKind::InlineFragment => DirectiveLocation::InlineFragment,
        RuleKind::VariableDefinition => DirectiveLocation::VariableDefinition,
        RuleKind::SchemaDef => DirectiveLocation::Schema,
        RuleKind::ScalarDef => DirectiveLocation::Scalar,
        RuleKind::ObjectTypeDef => DirectiveLocation::Object,
        RuleKind::FieldDef => DirectiveLocation::FieldDefinition,
        RuleKind::InterfaceDef => DirectiveLocation::Interface,
        RuleKind::UnionDef => DirectiveLocation::Union,
        RuleKind::EnumDef => DirectiveLocation::Enum,
        RuleKind::EnumValueDef => DirectiveLocation::EnumValue,
        RuleKind::InputDef => DirectiveLocation::InputObject,
        RuleKind::InputValueDef => match state.ancestor(2)?.kind {
            RuleKind::ArgumentsDef => DirectiveLocation::ArgumentDefinition,
            RuleKind::InputDef => DirectiveLocation::InputFieldDefinition,
            _ => return None,
        },
        _ => return None,
    })
}
