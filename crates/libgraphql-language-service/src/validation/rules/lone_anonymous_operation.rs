use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::Range;

/// An anonymous operation must be the only operation in its document.
pub struct LoneAnonymousOperation;
impl DocumentValidator for LoneAnonymousOperation {
    fn name(&self) -> &'static str {
        "LoneAnonymousOperation"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let operations: Vec<_> = ctx.operations().collect();
        if operations.len() < 2 {
            return vec![];
        }
        operations.iter()
            .filter(|operation| operation.name.is_none())
            .map(|operation| {
                let start = crate::source_text::position_from_pos(operation.position);
                ValidationError::at(
                    "This anonymous operation must be the only defined operation.",
                    Range::on_line(start.line, start.character, start.character + 1),
                )
            })
            .collect()
    }
}
