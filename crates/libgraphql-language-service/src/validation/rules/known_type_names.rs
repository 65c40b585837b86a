use crate::ast;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;

/// Type conditions and variable types must name types the schema defines.
pub struct KnownTypeNames;
impl DocumentValidator for KnownTypeNames {
    fn name(&self) -> &'static str {
        "KnownTypeNames"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        let mut check = |type_name: &str, pos: graphql_parser::Pos| {
            if ctx.schema.get_type(type_name).is_none() {
                errors.push(ValidationError::at(
                    format!("Unknown type \"{type_name}\"."),
                    ctx.name_range(pos, type_name),
                ));
            }
        };

        for operation in ctx.operations() {
            for var_def in operation.variable_definitions {
                check(named_type(&var_def.var_type), var_def.position);
            }
        }
        for fragment in ctx.fragments() {
            let ast::query::TypeCondition::On(type_name) = &fragment.type_condition;
            check(type_name, fragment.position);
        }
        let mut inline_conditions = vec![];
        ctx.for_each_selection(&mut |selection, _| {
            if let ast::query::Selection::InlineFragment(inline) = selection
                && let Some(ast::query::TypeCondition::On(type_name)) = &inline.type_condition
            {
                inline_conditions.push((type_name.as_str(), inline.position));
            }
        });
        for (type_name, pos) in inline_conditions {
            check(type_name, pos);
        }
        errors
    }
}

fn named_type(ast_type: &ast::query::Type) -> &str {
    match ast_type {
        ast::query::Type::NamedType(name) => name.as_str(),
        ast::query::Type::ListType(inner)
        | ast::query::Type::NonNullType(inner) => named_type(inner),
    }
}
