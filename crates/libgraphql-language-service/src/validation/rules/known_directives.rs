use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Every applied directive must be defined by the schema and valid at the
/// location it is applied at.
pub struct KnownDirectives;
impl DocumentValidator for KnownDirectives {
    fn name(&self) -> &'static str {
        "KnownDirectives"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_directive(&mut |directive, location| {
            let range = ctx.name_range(directive.position, &directive.name);
            match ctx.schema.get_directive(&directive.name) {
                None => errors.push(ValidationError::at(
                    format!("Unknown directive \"@{}\".", directive.name),
                    range,
                )),
                Some(directive_def) if !directive_def.is_valid_at(location) =>
                    errors.push(ValidationError::at(
                        format!(
                            "Directive \"@{}\" may not be used on {location}.",
                            directive.name,
                        ),
                        range,
                    )),
                Some(_) => (),
            }
        });
        errors
    }
}
