use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use std::collections::HashSet;

/// Every variable an operation declares must be used by it (directly or
/// through fragments).
pub struct NoUnusedVariables;
impl DocumentValidator for NoUnusedVariables {
    fn name(&self) -> &'static str {
        "NoUnusedVariables"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        for operation in ctx.operations() {
            let used: HashSet<&str> = ctx.variable_usages(&operation)
                .into_iter()
                .map(|usage| usage.name)
                .collect();
            for var_def in operation.variable_definitions {
                if used.contains(var_def.name.as_str()) {
                    continue;
                }
                let message = match operation.name {
                    Some(op_name) => format!(
                        "Variable \"${}\" is never used in operation \"{op_name}\".",
                        var_def.name,
                    ),
                    None => format!("Variable \"${}\" is never used.", var_def.name),
                };
                errors.push(ValidationError::at(
                    message,
                    ctx.name_range(var_def.position, &format!("${}", var_def.name)),
                ));
            }
        }
        errors
    }
}
