use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Every selected field must be defined on the type it is selected from.
pub struct FieldsOnCorrectType;
impl DocumentValidator for FieldsOnCorrectType {
    fn name(&self) -> &'static str {
        "FieldsOnCorrectType"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, parent_type| {
            let (ast::query::Selection::Field(field), Some(parent_type)) =
                (selection, parent_type) else {
                return;
            };
            if !parent_type.is_composite()
                || ctx.schema.field_def(&parent_type.name, &field.name).is_some()
            {
                return;
            }
            errors.push(ValidationError::at(
                format!(
                    "Cannot query field \"{}\" on type \"{}\".",
                    field.name,
                    parent_type.name,
                ),
                ctx.name_range(field.position, &field.name),
            ));
        });
        errors
    }
}
