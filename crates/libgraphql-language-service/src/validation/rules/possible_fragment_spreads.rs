use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// A fragment may only be spread where some object could match both its
/// type condition and the surrounding type.
pub struct PossibleFragmentSpreads;
impl DocumentValidator for PossibleFragmentSpreads {
    fn name(&self) -> &'static str {
        "PossibleFragmentSpreads"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        use ast::query::Selection;
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, parent_type| {
            let Some(parent_type) = parent_type.filter(|t| t.is_composite()) else {
                return;
            };
            match selection {
                Selection::InlineFragment(inline) => {
                    let Some(fragment_type) = inline.type_condition
                        .as_ref()
                        .and_then(|type_condition| ctx.type_condition_type(type_condition))
                        .filter(|t| t.is_composite()) else {
                        return;
                    };
                    if !ctx.schema.do_types_overlap(&parent_type.name, &fragment_type.name) {
                        errors.push(ValidationError::at(
                            format!(
                                "Fragment cannot be spread here as objects of type \"{}\" \
                                can never be of type \"{}\".",
                                parent_type.name,
                                fragment_type.name,
                            ),
                            ctx.type_condition_range(inline.position, &fragment_type.name),
                        ));
                    }
                },
                Selection::FragmentSpread(spread) => {
                    let Some(fragment_type) = ctx.fragment(&spread.fragment_name)
                        .and_then(|fragment| ctx.type_condition_type(&fragment.type_condition))
                        .filter(|t| t.is_composite()) else {
                        return;
                    };
                    if !ctx.schema.do_types_overlap(&parent_type.name, &fragment_type.name) {
                        errors.push(ValidationError::at(
                            format!(
                                "Fragment \"{}\" cannot be spread here as objects of type \
                                \"{}\" can never be of type \"{}\".",
                                spread.fragment_name,
                                parent_type.name,
                                fragment_type.name,
                            ),
                            ctx.name_range(spread.position, &spread.fragment_name),
                        ));
                    }
                },
                Selection::Field(_) => (),
            }
        });
        errors
    }
}
