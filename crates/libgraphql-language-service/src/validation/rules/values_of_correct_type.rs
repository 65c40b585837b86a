use crate::ast;
use crate::types::InputValueDef;
use crate::types::SchemaTypeKind;
use crate::types::TypeRef;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::Schema;

/// Literal argument values and variable defaults must be coercible to the
/// input type they are given for.
pub struct ValuesOfCorrectType;
impl DocumentValidator for ValuesOfCorrectType {
    fn name(&self) -> &'static str {
        "ValuesOfCorrectType"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, parent_type| {
            let (ast::query::Selection::Field(field), Some(parent_type)) =
                (selection, parent_type) else {
                return;
            };
            if let Some(field_def) = ctx.schema.field_def(&parent_type.name, &field.name) {
                check_arguments(ctx, &field.arguments, &field_def.arguments, field.position, &mut errors);
            }
        });
        ctx.for_each_directive(&mut |directive, _| {
            if let Some(directive_def) = ctx.schema.get_directive(&directive.name) {
                check_arguments(
                    ctx,
                    &directive.arguments,
                    &directive_def.arguments,
                    directive.position,
                    &mut errors,
                );
            }
        });

        for operation in ctx.operations() {
            for var_def in operation.variable_definitions {
                let Some(default_value) = &var_def.default_value else {
                    continue;
                };
                let type_ref = TypeRef::from_ast(&var_def.var_type);
                let mut messages = vec![];
                check_value(ctx.schema, default_value, &type_ref, &mut messages);
                let range = ctx.name_range(var_def.position, &format!("${}", var_def.name));
                errors.extend(messages.into_iter().map(|message| ValidationError::at(message, range)));
            }
        }
        errors
    }
}

fn check_arguments(
    ctx: &ValidationContext<'_>,
    arguments: &[(String, ast::query::Value)],
    arg_defs: &[InputValueDef],
    position: graphql_parser::Pos,
    errors: &mut Vec<ValidationError>,
) {
    for (arg_name, value) in arguments {
        let Some(arg_def) = arg_defs.iter().find(|arg_def| arg_def.name == *arg_name) else {
            continue;
        };
        let mut messages = vec![];
        check_value(ctx.schema, value, &arg_def.type_ref, &mut messages);
        let range = ctx.name_range(position, arg_name);
        errors.extend(messages.into_iter().map(|message| ValidationError::at(message, range)));
    }
}

/// Appends a message to `messages` for every part of `value` that cannot be
/// coerced to `type_ref`. Variables are left to
/// [`VariablesInAllowedPosition`](crate::validation::rules::VariablesInAllowedPosition).
fn check_value(
    schema: &Schema,
    value: &ast::query::Value,
    type_ref: &TypeRef,
    messages: &mut Vec<String>,
) {
    use ast::query::Value;
    match value {
        Value::Variable(_) => return,
        Value::Null => {
            if type_ref.is_non_null() {
                messages.push(format!("Expected value of type \"{type_ref}\", found null."));
            }
            return;
        },
        _ => (),
    }

    if let Some(item_type) = type_ref.list_item() {
        match value {
            Value::List(items) => {
                for item in items {
                    check_value(schema, item, item_type, messages);
                }
            },
            _ => check_value(schema, value, item_type, messages),
        }
        return;
    }

    let type_name = type_ref.named_type();
    let Some(schema_type) = schema.get_type(type_name) else {
        return;
    };
    match &schema_type.kind {
        SchemaTypeKind::InputObject { fields } => {
            let Value::Object(object) = value else {
                messages.push(format!("Expected value of type \"{type_ref}\", found {value}."));
                return;
            };
            for (field_name, field_value) in object {
                match fields.get(field_name) {
                    Some(field_def) =>
                        check_value(schema, field_value, &field_def.type_ref, messages),
                    None => messages.push(format!(
                        "Field \"{field_name}\" is not defined by type \"{type_name}\".",
                    )),
                }
            }
            for field_def in fields.values() {
                if field_def.is_required() && !object.contains_key(&field_def.name) {
                    messages.push(format!(
                        "Field \"{type_name}.{}\" of required type \"{}\" was not provided.",
                        field_def.name,
                        field_def.type_ref,
                    ));
                }
            }
        },
        SchemaTypeKind::Enum { values } => match value {
            Value::Enum(enum_value) if !values.contains_key(enum_value) =>
                messages.push(format!(
                    "Value \"{enum_value}\" does not exist in \"{type_name}\" enum.",
                )),
            Value::Enum(_) => (),
            _ => messages.push(format!(
                "Enum \"{type_name}\" cannot represent non-enum value: {value}.",
            )),
        },
        SchemaTypeKind::Scalar => {
            if let Some(message) = check_builtin_scalar(type_name, value) {
                messages.push(message);
            }
        },
        _ => (),
    }
}

/// Built-in scalars accept only their own literal kinds; custom scalars
/// accept anything.
fn check_builtin_scalar(type_name: &str, value: &ast::query::Value) -> Option<String> {
    use ast::query::Value;
    match (type_name, value) {
        ("Int", Value::Int(number)) => {
            let fits = number.as_i64().is_some_and(|n| i32::try_from(n).is_ok());
            (!fits).then(|| format!(
                "Int cannot represent non 32-bit signed integer value: {value}",
            ))
        },
        ("Int", _) => Some(format!("Int cannot represent non-integer value: {value}")),
        ("Float", Value::Int(_) | Value::Float(_)) => None,
        ("Float", _) => Some(format!("Float cannot represent non numeric value: {value}")),
        ("String", Value::String(_)) => None,
        ("String", _) => Some(format!("String cannot represent a non string value: {value}")),
        ("Boolean", Value::Boolean(_)) => None,
        ("Boolean", _) =>
            Some(format!("Boolean cannot represent a non boolean value: {value}")),
        ("ID", Value::String(_) | Value::Int(_)) => None,
        ("ID", _) => Some(format!(
            "ID cannot represent a non-string and non-integer value: {value}",
        )),
        _ => None,
    }
}
