use crate::ast;
use crate::types::InputValueDef;
use crate::types::TypeRef;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Finds every use of a deprecated field, argument, input field or enum
/// value in the document.
pub fn find_deprecated_usages(ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
    let mut warnings = vec![];
    ctx.for_each_selection(&mut |selection, parent_type| {
        let (ast::query::Selection::Field(field), Some(parent_type)) =
            (selection, parent_type) else {
            return;
        };
        let Some(field_def) = ctx.schema.field_def(&parent_type.name, &field.name) else {
            return;
        };
        if let Some(reason) = &field_def.deprecation_reason {
            warnings.push(ValidationError::at(
                format!(
                    "The field {}.{} is deprecated. {reason}",
                    parent_type.name,
                    field.name,
                ),
                ctx.name_range(field.position, &field.name),
            ));
        }
        check_arguments(
            ctx,
            &field.arguments,
            &field_def.arguments,
            field.position,
            &format!("Field \"{}.{}\"", parent_type.name, field.name),
            &mut warnings,
        );
    });

    ctx.for_each_directive(&mut |directive, _| {
        if let Some(directive_def) = ctx.schema.get_directive(&directive.name) {
            check_arguments(
                ctx,
                &directive.arguments,
                &directive_def.arguments,
                directive.position,
                &format!("Directive \"@{}\"", directive.name),
                &mut warnings,
            );
        }
    });
    warnings
}

fn check_arguments(
    ctx: &ValidationContext<'_>,
    arguments: &[(String, ast::query::Value)],
    arg_defs: &[InputValueDef],
    position: graphql_parser::Pos,
    owner: &str,
    warnings: &mut Vec<ValidationError>,
) {
    for (arg_name, value) in arguments {
        let Some(arg_def) = arg_defs.iter().find(|arg_def| arg_def.name == *arg_name) else {
            continue;
        };
        if let Some(reason) = &arg_def.deprecation_reason {
            warnings.push(ValidationError::at(
                format!("{owner} argument \"{arg_name}\" is deprecated. {reason}"),
                ctx.name_range(position, arg_name),
            ));
        }
        check_value(ctx, value, &arg_def.type_ref, position, warnings);
    }
}

fn check_value(
    ctx: &ValidationContext<'_>,
    value: &ast::query::Value,
    type_ref: &TypeRef,
    position: graphql_parser::Pos,
    warnings: &mut Vec<ValidationError>,
) {
    use ast::query::Value;
    let Some(named_type) = ctx.schema.get_type(type_ref.named_type()) else {
        return;
    };
    match value {
        Value::Enum(value_name) => {
            let deprecated = named_type.enum_values()
                .and_then(|values| values.get(value_name.as_str()))
                .and_then(|value_def| value_def.deprecation_reason.as_ref());
            if let Some(reason) = deprecated {
                warnings.push(ValidationError::at(
                    format!(
                        "The enum value \"{}.{value_name}\" is deprecated. {reason}",
                        named_type.name,
                    ),
                    ctx.name_range(position, value_name),
                ));
            }
        },
        Value::List(items) => {
            let item_type = type_ref.list_item().unwrap_or(type_ref);
            for item in items {
                check_value(ctx, item, item_type, position, warnings);
            }
        },
        Value::Object(fields) => {
            let Some(input_fields) = named_type.input_fields() else {
                return;
            };
            for (field_name, field_value) in fields {
                let Some(input_field) = input_fields.get(field_name.as_str()) else {
                    continue;
                };
                if let Some(reason) = &input_field.deprecation_reason {
                    warnings.push(ValidationError::at(
                        format!(
                            "The input field {}.{field_name} is deprecated. {reason}",
                            named_type.name,
                        ),
                        ctx.name_range(position, field_name),
                    ));
                }
                check_value(ctx, field_value, &input_field.type_ref, position, warnings);
            }
        },
        _ => (),
    }
}
