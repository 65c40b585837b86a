use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use indexmap::IndexMap;

/// Operation names must be unique within a document.
pub struct UniqueOperationNames;
impl DocumentValidator for UniqueOperationNames {
    fn name(&self) -> &'static str {
        "UniqueOperationNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut by_name: IndexMap<&str, Vec<graphql_parser::Pos>> = IndexMap::new();
        for operation in ctx.operations() {
            if let Some(name) = operation.name {
                by_name.entry(name).or_default().push(operation.position);
            }
        }
        by_name.into_iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(name, positions)| ValidationError::new(
                format!("There can be only one operation named \"{name}\"."),
                positions.into_iter().map(|pos| ctx.name_range(pos, name)).collect(),
            ))
            .collect()
    }
}
