use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Fragments may only condition on objects, interfaces and unions.
pub struct FragmentsOnCompositeTypes;
impl DocumentValidator for FragmentsOnCompositeTypes {
    fn name(&self) -> &'static str {
        "FragmentsOnCompositeTypes"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, _| {
            let ast::query::Selection::InlineFragment(inline) = selection else {
                return;
            };
            let Some(type_condition) = &inline.type_condition else {
                return;
            };
            let ast::query::TypeCondition::On(type_name) = type_condition;
            if ctx.type_condition_type(type_condition).is_some_and(|t| !t.is_composite()) {
                errors.push(ValidationError::at(
                    format!("Fragment cannot condition on non composite type \"{type_name}\"."),
                    ctx.type_condition_range(inline.position, type_name),
                ));
            }
        });

        for fragment in ctx.fragments() {
            let ast::query::TypeCondition::On(type_name) = &fragment.type_condition;
            if ctx.type_condition_type(&fragment.type_condition).is_some_and(|t| !t.is_composite()) {
                errors.push(ValidationError::at(
                    format!(
                        "Fragment \"{}\" cannot condition on non composite type \"{type_name}\".",
                        fragment.name,
                    ),
                    ctx.type_condition_range(fragment.position, type_name),
                ));
            }
        }
        errors
    }
}
