use crate::ast;
use crate::types::TypeRef;
use graphql_parser::query::OperationDefinition;
use indexmap::IndexMap;
use libgraphql_online_parser::OnlineParser;
use libgraphql_online_parser::RuleKind;
use libgraphql_online_parser::run_online_parser;
use std::ops::ControlFlow;

/// Maps every variable declared in `text` to the named type it is declared
/// with (list and non-null wrappers stripped), in declaration order.
///
/// The online parser is used rather than the batch parser so that
/// declarations are found in documents that are still being typed. When a
/// variable is declared more than once the first declaration wins.
pub fn collect_variable_types(text: &str) -> IndexMap<String, String> {
    let mut variable_types = IndexMap::new();
    let mut pending_variable: Option<String> = None;

    run_online_parser(&OnlineParser::graphql(), text, |_, state, _, _| {
        let in_definition = state.find(RuleKind::VariableDefinition).is_some();
        match state.kind() {
            Some(RuleKind::Variable)
                if in_definition
                    && state.parent().map(|frame| frame.kind)
                        == Some(RuleKind::VariableDefinition) =>
            {
                if let Some(name) = state.name() {
                    pending_variable = Some(name.to_string());
                }
            },
            Some(RuleKind::NamedType) if in_definition => {
                if let Some(type_name) = state.name()
                    && let Some(variable) = pending_variable.take()
                {
                    variable_types.entry(variable).or_insert_with(|| type_name.to_string());
                }
            },
            _ => (),
        }
        ControlFlow::Continue(())
    });

    variable_types
}

/// Maps every variable declared by the operations of `text` to its full
/// declared type, in declaration order. Returns an empty map when `text`
/// does not parse.
pub fn collect_variable_definitions(text: &str) -> IndexMap<String, TypeRef> {
    let Ok(document) = ast::query::parse(text) else {
        log::debug!("variable definitions skipped: document does not parse");
        return IndexMap::new();
    };
    let mut variable_types = IndexMap::new();
    for definition in &document.definitions {
        let ast::query::Definition::Operation(operation) = definition else {
            continue;
        };
        let variable_definitions = match operation {
            OperationDefinition::Query(query) => &query.variable_definitions,
            OperationDefinition::Mutation(mutation) => &mutation.variable_definitions,
            OperationDefinition::Subscription(subscription) => &subscription.variable_definitions,
            OperationDefinition::SelectionSet(_) => continue,
        };
        for variable in variable_definitions {
            variable_types.entry(variable.name.clone())
                .or_insert_with(|| TypeRef::from_ast(&variable.var_type));
        }
    }
    variable_types
}
