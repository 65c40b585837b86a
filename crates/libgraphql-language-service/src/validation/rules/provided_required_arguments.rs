use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Non-null arguments without a default value must be provided.
pub struct ProvidedRequiredArguments;
impl DocumentValidator for ProvidedRequiredArguments {
    fn name(&self) -> &'static str {
        "ProvidedRequiredArguments"
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
            let missing = field_def.arguments
                .iter()
                .filter(|arg| arg.is_required())
                .filter(|arg| !field.arguments.iter().any(|(name, _)| *name == arg.name));
            for arg in missing {
                errors.push(ValidationError::at(
                    format!(
                        "Field \"{}.{}\" argument \"{}\" of type \"{}\" is \
                        required, but it was not provided.",
                        parent_type.name,
                        field.name,
                        arg.name,
                        arg.type_ref,
                    ),
                    ctx.name_range(field.position, &field.name),
                ));
            }
        });

        ctx.for_each_directive(&mut |directive, _| {
            let Some(directive_def) = ctx.schema.get_directive(&directive.name) else {
                return;
            };
            let missing = directive_def.arguments
                .iter()
                .filter(|arg| arg.is_required())
                .filter(|arg| !directive.arguments.iter().any(|(name, _)| *name == arg.name));
            for arg in missing {
                errors.push(ValidationError::at(
                    format!(
                        "Directive \"@{}\" argument \"{}\" of type \"{}\" is \
                        required, but it was not provided.",
                        directive.name,
                        arg.name,
                        arg.type_ref,
                    ),
                    ctx.name_range(directive.position, &directive.name),
                ));
            }
        });
        errors
    }
}
