use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use indexmap::IndexMap;

/// Fragment names must be unique within a document.
pub struct UniqueFragmentNames;
impl DocumentValidator for UniqueFragmentNames {
    fn name(&self) -> &'static str {
        "UniqueFragmentNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut by_name: IndexMap<&str, Vec<graphql_parser::Pos>> = IndexMap::new();
        for fragment in ctx.fragments() {
            by_name.entry(fragment.name.as_str()).or_default().push(fragment.position);
        }
        by_name.into_iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(name, positions)| ValidationError::new(
                format!("There can be only one fragment named \"{name}\"."),
                positions.into_iter().map(|pos| ctx.name_range(pos, name)).collect(),
            ))
            .collect()
    }
}
