use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use std::collections::HashSet;

/// Every variable an operation uses (directly or through fragments) must be
/// declared by that operation.
pub struct NoUndefinedVariables;
impl DocumentValidator for NoUndefinedVariables {
    fn name(&self) -> &'static str {
        "NoUndefinedVariables"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        for operation in ctx.operations() {
            let defined: HashSet<&str> = operation.variable_definitions
                .iter()
                .map(|var_def| var_def.name.as_str())
                .collect();
            let mut reported = HashSet::new();
            for usage in ctx.variable_usages(&operation) {
                if defined.contains(usage.name) || !reported.insert(usage.name) {
                    continue;
                }
                let message = match operation.name {
                    Some(op_name) => format!(
                        "Variable \"${}\" is not defined by operation \"{op_name}\".",
                        usage.name,
                    ),
                    None => format!("Variable \"${}\" is not defined.", usage.name),
                };
                errors.push(ValidationError::at(
                    message,
                    ctx.name_range(usage.position, &format!("${}", usage.name)),
                ));
            }
        }
        errors
    }
}
