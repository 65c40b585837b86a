use crate::ast;
use crate::types::InputValueDef;
use crate::types::SchemaType;
use crate::types::TypeRef;
use crate::validation::DocumentValidator;
use crate::validation::OperationInfo;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use std::collections::HashSet;

/// A variable's declared type must be usable wherever the operation (or a
/// fragment it spreads) passes the variable.
pub struct VariablesInAllowedPosition;
impl DocumentValidator for VariablesInAllowedPosition {
    fn name(&self) -> &'static str {
        "VariablesInAllowedPosition"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        for operation in ctx.operations() {
            for usage in typed_usages(ctx, &operation) {
                let Some(var_def) = operation.variable_definitions
                    .iter()
                    .find(|var_def| var_def.name == usage.name) else {
                    continue;
                };
                let var_type = TypeRef::from_ast(&var_def.var_type);
                if ctx.schema.get_type(var_type.named_type()).is_none() {
                    continue;
                }
                let has_default = var_def.default_value
                    .as_ref()
                    .is_some_and(|value| !matches!(value, ast::query::Value::Null));
                if is_allowed(&var_type, has_default, &usage.expected, usage.location_has_default) {
                    continue;
                }
                let variable = format!("${}", usage.name);
                errors.push(ValidationError::new(
                    format!(
                        "Variable \"{variable}\" of type \"{var_type}\" used in position \
                        expecting type \"{}\".",
                        usage.expected,
                    ),
                    vec![
                        ctx.name_range(var_def.position, &variable),
                        ctx.name_range(usage.position, &variable),
                    ],
                ));
            }
        }
        errors
    }
}

/// A nullable variable may fill a non-null position only when it or the
/// position has a default to fall back on.
fn is_allowed(
    var_type: &TypeRef,
    var_has_default: bool,
    expected: &TypeRef,
    location_has_default: bool,
) -> bool {
    if expected.is_non_null() && !var_type.is_non_null() {
        if !var_has_default && !location_has_default {
            return false;
        }
        return var_type.is_compatible_with(expected.nullable());
    }
    var_type.is_compatible_with(expected)
}

struct TypedUsage<'a> {
    name: &'a str,
    position: graphql_parser::Pos,
    expected: TypeRef,
    location_has_default: bool,
}

/// Every variable `operation` passes to a typed argument or input field,
/// following the fragments it spreads.
fn typed_usages<'a>(
    ctx: &ValidationContext<'a>,
    operation: &OperationInfo<'a>,
) -> Vec<TypedUsage<'a>> {
    let mut walk = UsageWalk {
        ctx,
        visited_fragments: HashSet::new(),
        usages: vec![],
    };
    walk.directives(operation.directives);
    walk.selection_set(operation.selection_set, ctx.root_type(operation));
    walk.usages
}

struct UsageWalk<'c, 'a> {
    ctx: &'c ValidationContext<'a>,
    visited_fragments: HashSet<&'a str>,
    usages: Vec<TypedUsage<'a>>,
}
impl<'a> UsageWalk<'_, 'a> {
    fn selection_set(
        &mut self,
        selection_set: &'a ast::query::SelectionSet,
        parent_type: Option<&'a SchemaType>,
    ) {
        use ast::query::Selection;
        let schema = self.ctx.schema;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    let field_def = parent_type
                        .and_then(|parent| schema.field_def(&parent.name, &field.name));
                    if let Some(field_def) = field_def {
                        self.arguments(&field.arguments, &field_def.arguments, field.position);
                    }
                    self.directives(&field.directives);
                    let field_type = field_def
                        .and_then(|field_def| schema.get_type(field_def.type_ref.named_type()));
                    self.selection_set(&field.selection_set, field_type);
                },
                Selection::InlineFragment(inline) => {
                    self.directives(&inline.directives);
                    let fragment_type = match &inline.type_condition {
                        Some(type_condition) => self.ctx.type_condition_type(type_condition),
                        None => parent_type,
                    };
                    self.selection_set(&inline.selection_set, fragment_type);
                },
                Selection::FragmentSpread(spread) => {
                    self.directives(&spread.directives);
                    if !self.visited_fragments.insert(spread.fragment_name.as_str()) {
                        continue;
                    }
                    if let Some(fragment) = self.ctx.fragment(&spread.fragment_name) {
                        self.directives(&fragment.directives);
                        let fragment_type = self.ctx.type_condition_type(&fragment.type_condition);
                        self.selection_set(&fragment.selection_set, fragment_type);
                    }
                },
            }
        }
    }

    fn directives(&mut self, directives: &'a [ast::query::Directive]) {
        for directive in directives {
            if let Some(directive_def) = self.ctx.schema.get_directive(&directive.name) {
                self.arguments(&directive.arguments, &directive_def.arguments, directive.position);
            }
        }
    }

    fn arguments(
        &mut self,
        arguments: &'a [(String, ast::query::Value)],
        arg_defs: &[InputValueDef],
        position: graphql_parser::Pos,
    ) {
        for (arg_name, value) in arguments {
            if let Some(arg_def) = arg_defs.iter().find(|arg_def| arg_def.name == *arg_name) {
                self.value(value, &arg_def.type_ref, arg_def.default_value.is_some(), position);
            }
        }
    }

    fn value(
        &mut self,
        value: &'a ast::query::Value,
        expected: &TypeRef,
        location_has_default: bool,
        position: graphql_parser::Pos,
    ) {
        use ast::query::Value;
        match value {
            Value::Variable(name) => self.usages.push(TypedUsage {
                name,
                position,
                expected: expected.clone(),
                location_has_default,
            }),
            Value::List(items) => {
                if let Some(item_type) = expected.list_item() {
                    for item in items {
                        self.value(item, item_type, false, position);
                    }
                }
            },
            Value::Object(fields) => {
                let Some(input_fields) = self.ctx.schema
                    .get_type(expected.named_type())
                    .and_then(|schema_type| schema_type.input_fields()) else {
                    return;
                };
                for (field_name, field_value) in fields {
                    if let Some(field_def) = input_fields.get(field_name) {
                        self.value(
                            field_value,
                            &field_def.type_ref,
                            field_def.default_value.is_some(),
                            position,
                        );
                    }
                }
            },
            _ => (),
        }
    }
}
