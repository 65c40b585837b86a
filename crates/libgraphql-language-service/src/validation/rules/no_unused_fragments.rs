use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use std::collections::HashSet;

/// Every fragment definition must be spread somewhere.
pub struct NoUnusedFragments;
impl DocumentValidator for NoUnusedFragments {
    fn name(&self) -> &'static str {
        "NoUnusedFragments"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut spread_names = HashSet::new();
        ctx.for_each_selection(&mut |selection, _| {
            if let ast::query::Selection::FragmentSpread(spread) = selection {
                spread_names.insert(spread.fragment_name.as_str());
            }
        });
        ctx.fragments()
            .filter(|fragment| !spread_names.contains(fragment.name.as_str()))
            .map(|fragment| ValidationError::at(
                format!("Fragment \"{}\" is never used.", fragment.name),
                ctx.name_range(fragment.position, &fragment.name),
            ))
            .collect()
    }
}
