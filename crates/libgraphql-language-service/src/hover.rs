//! Hover text for the token at a cursor position.

use crate::context_at_position::get_context_at_position;
use crate::types::FieldDef;
use crate::types::TypeRef;
use crate::Position;
use crate::Schema;
use crate::TypeInfo;
use libgraphql_online_parser::RuleKind;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HoverConfig {
    /// Wraps the signature line in a ```` ```graphql ```` fence.
    pub use_markdown: bool,
}

/// Describes the field, directive, argument, enum value, variable or type
/// named at `position`: its signature, then its description and deprecation
/// reason (if any). Returns an empty string when there is nothing to
/// describe.
pub fn get_hover_information(
    schema: &Schema,
    text: &str,
    position: Position,
    config: &HoverConfig,
) -> String {
    let ctx = get_context_at_position(schema, text, position, None);
    let info = &ctx.type_info;
    let state = &ctx.token.state;
    let Some(kind) = state.kind() else {
        return String::new();
    };
    let step = state.step();

    match kind {
        RuleKind::Field | RuleKind::AliasedField
            if (kind == RuleKind::Field && step == 0)
                || (kind == RuleKind::AliasedField && step == 2) =>
        {
            let Some(field_def) = info.field_def else {
                return String::new();
            };
            let signature = format!(
                "{}: {}",
                qualified_field(info, field_def),
                field_def.type_ref,
            );
            render(
                config,
                &signature,
                field_def.description.as_deref(),
                field_def.deprecation_reason.as_deref(),
            )
        },

        RuleKind::ObjectField if step == 0 => {
            let (Some(field_def), Some(input_object)) =
                (info.object_field_def, info.input_object)
            else {
                return String::new();
            };
            let signature = format!(
                "{}.{}: {}",
                input_object.name,
                field_def.name,
                field_def.type_ref,
            );
            render(
                config,
                &signature,
                field_def.description.as_deref(),
                field_def.deprecation_reason.as_deref(),
            )
        },

        RuleKind::Directive if step == 1 => {
            let Some(directive_def) = info.directive_def else {
                return String::new();
            };
            render(
                config,
                &format!("@{}", directive_def.name),
                directive_def.description.as_deref(),
                None,
            )
        },

        RuleKind::Variable => {
            let Some(type_ref) = info.type_ref.as_ref() else {
                return String::new();
            };
            render(config, &type_ref.to_string(), type_description(schema, type_ref), None)
        },

        RuleKind::Argument if step == 0 => {
            let (Some(arg_def), Some(input_type)) = (info.arg_def, info.input_type.as_ref()) else {
                return String::new();
            };
            let owner = match (info.directive_def, info.field_def) {
                (Some(directive_def), _) => format!("@{}", directive_def.name),
                (None, Some(field_def)) => qualified_field(info, field_def),
                (None, None) => String::new(),
            };
            let signature = format!("{owner}({}: {input_type})", arg_def.name);
            render(
                config,
                &signature,
                arg_def.description.as_deref(),
                arg_def.deprecation_reason.as_deref(),
            )
        },

        RuleKind::EnumValue => {
            let (Some(enum_value), Some(enum_type)) =
                (info.enum_value, info.named_input_type(schema))
            else {
                return String::new();
            };
            render(
                config,
                &format!("{}.{}", enum_type.name, enum_value.name),
                enum_value.description.as_deref(),
                enum_value.deprecation_reason.as_deref(),
            )
        },

        RuleKind::NamedType => {
            let Some(type_ref) = info.type_ref.as_ref() else {
                return String::new();
            };
            render(config, &type_ref.to_string(), type_description(schema, type_ref), None)
        },

        _ => String::new(),
    }
}

/// `Parent.field`, or just the name for meta fields.
fn qualified_field(info: &TypeInfo<'_>, field_def: &FieldDef) -> String {
    match info.parent_type {
        Some(parent_type) if !field_def.name.starts_with("__") =>
            format!("{}.{}", parent_type.name, field_def.name),
        _ => field_def.name.clone(),
    }
}

fn type_description<'s>(schema: &'s Schema, type_ref: &TypeRef) -> Option<&'s str> {
    match type_ref {
        TypeRef::Named(name) => schema.get_type(name)?.description.as_deref(),
        _ => None,
    }
}

fn render(
    config: &HoverConfig,
    signature: &str,
    description: Option<&str>,
    deprecation_reason: Option<&str>,
) -> String {
    let mut out = String::new();
    if config.use_markdown {
        out.push_str("```graphql\n");
    }
    out.push_str(signature);
    if config.use_markdown {
        out.push_str("\n```");
    }
    if let Some(description) = description.filter(|description| !description.is_empty()) {
        out.push_str("\n\n");
        out.push_str(description);
    }
    if let Some(reason) = deprecation_reason.filter(|reason| !reason.is_empty()) {
        out.push_str("\n\nDeprecated: ");
        out.push_str(reason);
    }
    out.trim().to_string()
}
