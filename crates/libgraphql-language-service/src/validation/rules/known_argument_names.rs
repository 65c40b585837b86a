use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Every argument passed to a field or directive must be declared by it.
pub struct KnownArgumentNames;
impl DocumentValidator for KnownArgumentNames {
    fn name(&self) -> &'static str {
        "KnownArgumentNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, parent_type| {
            let (ast::query::Selection::Field(field), Some(parent_type)) =
                (selection, parent_type) else {
                return;
            };
            let Some(field_def) = ctx.schema.field_def(&parent_type.name, &field.name) else {
                return;
            };
            for (arg_name, _) in &field.arguments {
                if field_def.argument(arg_name).is_none() {
                    errors.push(ValidationError::at(
                        format!(
                            "Unknown argument \"{arg_name}\" on field \"{}.{}\".",
                            parent_type.name,
                            field.name,
                        ),
                        ctx.name_range(field.position, arg_name),
                    ));
                }
            }
        });

        ctx.for_each_directive(&mut |directive, _| {
            let Some(directive_def) = ctx.schema.get_directive(&directive.name) else {
                return;
            };
            for (arg_name, _) in &directive.arguments {
                if directive_def.argument(arg_name).is_none() {
                    errors.push(ValidationError::at(
                        format!(
                            "Unknown argument \"{arg_name}\" on directive \"@{}\".",
                            directive.name,
                        ),
                        ctx.name_range(directive.position, arg_name),
                    ));
                }
            }
        });
        errors
    }
}
