use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use indexmap::IndexMap;

/// An operation may declare each variable only once.
pub struct UniqueVariableNames;
impl DocumentValidator for UniqueVariableNames {
    fn name(&self) -> &'static str {
        "UniqueVariableNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        for operation in ctx.operations() {
            let mut by_name: IndexMap<&str, Vec<graphql_parser::Pos>> = IndexMap::new();
            for var_def in operation.variable_definitions {
                by_name.entry(var_def.name.as_str())
                    .or_default()
                    .push(var_def.position);
            }
            for (name, positions) in by_name {
                if positions.len() < 2 {
                    continue;
                }
                let variable = format!("${name}");
                let ranges = positions.into_iter()
                    .map(|pos| ctx.name_range(pos, &variable))
                    .collect();
                errors.push(ValidationError::new(
                    format!("There can be only one variable named \"{variable}\"."),
                    ranges,
                ));
            }
        }
        errors
    }
}
