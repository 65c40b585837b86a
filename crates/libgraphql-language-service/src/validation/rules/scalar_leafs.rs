use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Leaf-typed fields must not have a selection set and composite-typed
/// fields must have one.
pub struct ScalarLeafs;
impl DocumentValidator for ScalarLeafs {
    fn name(&self) -> &'static str {
        "ScalarLeafs"
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
            let Some(field_type) = ctx.schema.get_type(field_def.type_ref.named_type()) else {
                return;
            };
            let has_selection = !field.selection_set.items.is_empty();
            let message =
                if field_type.is_leaf() && has_selection {
                    format!(
                        "Field \"{}\" must not have a selection since type \"{}\" \
                        has no subfields.",
                        field.name,
                        field_def.type_ref,
                    )
                } else if field_type.is_composite() && !has_selection {
                    format!(
                        "Field \"{}\" of type \"{}\" must have a selection of \
                        subfields. Did you mean \"{} {{ ... }}\"?",
                        field.name,
                        field_def.type_ref,
                        field.name,
                    )
                } else {
                    return;
                };
            errors.push(ValidationError::at(
                message,
                ctx.name_range(field.position, &field.name),
            ));
        });
        errors
    }
}
