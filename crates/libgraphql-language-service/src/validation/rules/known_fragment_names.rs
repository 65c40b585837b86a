use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Every fragment spread must name a fragment defined in the document.
pub struct KnownFragmentNames;
impl DocumentValidator for KnownFragmentNames {
    fn name(&self) -> &'static str {
        "KnownFragmentNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, _| {
            let ast::query::Selection::FragmentSpread(spread) = selection else {
                return;
            };
            if ctx.fragment(&spread.fragment_name).is_none() {
                errors.push(ValidationError::at(
                    format!("Unknown fragment \"{}\".", spread.fragment_name),
                    ctx.name_range(spread.position, &spread.fragment_name),
                ));
            }
        });
        errors
    }
}
