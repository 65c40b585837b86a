use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use indexmap::IndexMap;

/// A field or directive may be passed each argument only once.
pub struct UniqueArgumentNames;
impl DocumentValidator for UniqueArgumentNames {
    fn name(&self) -> &'static str {
        "UniqueArgumentNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        ctx.for_each_selection(&mut |selection, _| {
            if let ast::query::Selection::Field(field) = selection {
                check_arguments(ctx, &field.arguments, field.position, &mut errors);
            }
        });
        ctx.for_each_directive(&mut |directive, _| {
            check_arguments(ctx, &directive.arguments, directive.position, &mut errors);
        });
        errors
    }
}

fn check_arguments(
    ctx: &ValidationContext<'_>,
    arguments: &[(String, ast::query::Value)],
    position: graphql_parser::Pos,
    errors: &mut Vec<ValidationError>,
) {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for (arg_name, _) in arguments {
        *counts.entry(arg_name.as_str()).or_default() += 1;
    }
    for (arg_name, count) in counts {
        if count > 1 {
            errors.push(ValidationError::new(
                format!("There can be only one argument named \"{arg_name}\"."),
                ctx.name_ranges(position, arg_name, count),
            ));
        }
    }
}
