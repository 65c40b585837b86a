use crate::ast;
use crate::schema::GraphQLOperationType;
use crate::source_text;
use crate::types::DirectiveLocation;
use crate::types::SchemaType;
use crate::Range;
use crate::Schema;
use std::collections::HashSet;

/// The parts every kind of operation definition shares. A `{ ... }`
/// shorthand query has no name, variables or directives, and starts at its
/// opening brace.
#[derive(Clone, Copy, Debug)]
pub struct OperationInfo<'a> {
    pub kind: GraphQLOperationType,
    pub position: graphql_parser::Pos,
    pub name: Option<&'a str>,
    pub variable_definitions: &'a [ast::query::VariableDefinition],
    pub directives: &'a [ast::query::Directive],
    pub selection_set: &'a ast::query::SelectionSet,
}
impl<'a> OperationInfo<'a> {
    pub fn from_ast(op: &'a ast::query::OperationDefinition) -> Self {
        use ast::query::OperationDefinition;
        match op {
            OperationDefinition::SelectionSet(selection_set) => Self {
                kind: GraphQLOperationType::Query,
                position: selection_set.span.0,
                name: None,
                variable_definitions: &[],
                directives: &[],
                selection_set,
            },
            OperationDefinition::Query(query) => Self {
                kind: GraphQLOperationType::Query,
                position: query.position,
                name: query.name.as_deref(),
                variable_definitions: &query.variable_definitions,
                directives: &query.directives,
                selection_set: &query.selection_set,
            },
            OperationDefinition::Mutation(mutation) => Self {
                kind: GraphQLOperationType::Mutation,
                position: mutation.position,
                name: mutation.name.as_deref(),
                variable_definitions: &mutation.variable_definitions,
                directives: &mutation.directives,
                selection_set: &mutation.selection_set,
            },
            OperationDefinition::Subscription(subscription) => Self {
                kind: GraphQLOperationType::Subscription,
                position: subscription.position,
                name: subscription.name.as_deref(),
                variable_definitions: &subscription.variable_definitions,
                directives: &subscription.directives,
                selection_set: &subscription.selection_set,
            },
        }
    }

    pub fn directive_location(&self) -> DirectiveLocation {
        match self.kind {
            GraphQLOperationType::Query => DirectiveLocation::Query,
            GraphQLOperationType::Mutation => DirectiveLocation::Mutation,
            GraphQLOperationType::Subscription => DirectiveLocation::Subscription,
        }
    }
}

/// A `$variable` referenced from an argument value. `position` is the start
/// of the field or directive whose arguments contain it.
#[derive(Clone, Copy, Debug)]
pub struct VariableUsage<'a> {
    pub name: &'a str,
    pub position: graphql_parser::Pos,
}

/// Everything a [`DocumentValidator`](crate::validation::DocumentValidator)
/// sees: the schema, the parsed document and its text.
pub struct ValidationContext<'a> {
    pub schema: &'a Schema,
    pub document: &'a ast::query::Document,
    lines: Vec<&'a str>,
}
impl<'a> ValidationContext<'a> {
    pub fn new(
        schema: &'a Schema,
        document: &'a ast::query::Document,
        source: &'a str,
    ) -> Self {
        Self {
            schema,
            document,
            lines: source.split('\n').collect(),
        }
    }

    pub fn operations(&self) -> impl Iterator<Item = OperationInfo<'a>> + 'a {
        let document = self.document;
        document.definitions.iter().filter_map(|def| match def {
            ast::query::Definition::Operation(op) => Some(OperationInfo::from_ast(op)),
            ast::query::Definition::Fragment(_) => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &'a ast::query::FragmentDefinition> + 'a {
        let document = self.document;
        document.definitions.iter().filter_map(|def| match def {
            ast::query::Definition::Fragment(fragment) => Some(fragment),
            ast::query::Definition::Operation(_) => None,
        })
    }

    pub fn fragment(&self, name: &str) -> Option<&'a ast::query::FragmentDefinition> {
        self.fragments().find(|fragment| fragment.name == name)
    }

    pub fn root_type(&self, operation: &OperationInfo<'_>) -> Option<&'a SchemaType> {
        let schema = self.schema;
        match operation.kind {
            GraphQLOperationType::Query => schema.query_type(),
            GraphQLOperationType::Mutation => schema.mutation_type(),
            GraphQLOperationType::Subscription => schema.subscription_type(),
        }
    }

    pub fn type_condition_type(
        &self,
        type_condition: &ast::query::TypeCondition,
    ) -> Option<&'a SchemaType> {
        let ast::query::TypeCondition::On(type_name) = type_condition;
        self.schema.get_type(type_name)
    }

    /// The range of `name` in the node starting at `pos`.
    pub fn name_range(&self, pos: graphql_parser::Pos, name: &str) -> Range {
        source_text::name_range(&self.lines, pos, name)
    }

    /// The ranges of the first `count` occurrences of `name` in the node
    /// starting at `pos`, for nodes that repeat a name (e.g. a duplicated
    /// argument).
    pub fn name_ranges(&self, pos: graphql_parser::Pos, name: &str, count: usize) -> Vec<Range> {
        let first = self.name_range(pos, name);
        let mut ranges = vec![first];
        while ranges.len() < count {
            let Some(previous) = ranges.last() else {
                break;
            };
            match source_text::find_word(&self.lines, previous.end, name) {
                Some(next) => ranges.push(next),
                None => break,
            }
        }
        ranges
    }

    /// The range of the type named by an `on Type` condition in the node
    /// starting at `pos`.
    pub fn type_condition_range(&self, pos: graphql_parser::Pos, type_name: &str) -> Range {
        let on = self.name_range(pos, "on");
        source_text::find_word(&self.lines, on.end, type_name)
            .unwrap_or_else(|| self.name_range(pos, type_name))
    }

    /// The fragment spreads written directly in `selection_set` (or in its
    /// nested fields and inline fragments) as `(fragment name, position)`.
    /// Spread fragments are not entered.
    pub fn fragment_spreads(
        &self,
        selection_set: &'a ast::query::SelectionSet,
    ) -> Vec<(&'a str, graphql_parser::Pos)> {
        use ast::query::Selection;
        let mut spreads = vec![];
        let mut pending = vec![selection_set];
        while let Some(set) = pending.pop() {
            for selection in &set.items {
                match selection {
                    Selection::Field(field) => pending.push(&field.selection_set),
                    Selection::InlineFragment(inline) => pending.push(&inline.selection_set),
                    Selection::FragmentSpread(spread) =>
                        spreads.push((spread.fragment_name.as_str(), spread.position)),
                }
            }
        }
        spreads.sort_by_key(|(_, pos)| (pos.line, pos.column));
        spreads
    }

    /// Calls `visit` for every selection in the document (operations and
    /// fragment definitions alike) together with the type it selects from,
    /// when that type is known. Fragment spreads are not followed.
    pub fn for_each_selection(
        &self,
        visit: &mut dyn FnMut(&'a ast::query::Selection, Option<&'a SchemaType>),
    ) {
        for operation in self.operations() {
            let root_type = self.root_type(&operation);
            self.walk_selection_set(operation.selection_set, root_type, visit);
        }
        for fragment in self.fragments() {
            let fragment_type = self.type_condition_type(&fragment.type_condition);
            self.walk_selection_set(&fragment.selection_set, fragment_type, visit);
        }
    }

    fn walk_selection_set(
        &self,
        selection_set: &'a ast::query::SelectionSet,
        parent_type: Option<&'a SchemaType>,
        visit: &mut dyn FnMut(&'a ast::query::Selection, Option<&'a SchemaType>),
    ) {
        use ast::query::Selection;
        let schema = self.schema;
        for selection in &selection_set.items {
            visit(selection, parent_type);
            match selection {
                Selection::Field(field) => {
                    let field_type = parent_type
                        .and_then(|parent| schema.field_def(&parent.name, &field.name))
                        .and_then(|field_def| schema.get_type(field_def.type_ref.named_type()));
                    self.walk_selection_set(&field.selection_set, field_type, visit);
                },
                Selection::InlineFragment(inline) => {
                    let fragment_type = match &inline.type_condition {
                        Some(type_condition) => self.type_condition_type(type_condition),
                        None => parent_type,
                    };
                    self.walk_selection_set(&inline.selection_set, fragment_type, visit);
                },
                Selection::FragmentSpread(_) => (),
            }
        }
    }

    /// Calls `visit` for every directive applied in the document with the
    /// location it is applied at.
    pub fn for_each_directive(
        &self,
        visit: &mut dyn FnMut(&'a ast::query::Directive, DirectiveLocation),
    ) {
        use ast::query::Selection;
        for operation in self.operations() {
            for directive in operation.directives {
                visit(directive, operation.directive_location());
            }
        }
        for fragment in self.fragments() {
            for directive in &fragment.directives {
                visit(directive, DirectiveLocation::FragmentDefinition);
            }
        }
        self.for_each_selection(&mut |selection, _| {
            let (directives, location) = match selection {
                Selection::Field(field) => (&field.directives, DirectiveLocation::Field),
                Selection::FragmentSpread(spread) =>
                    (&spread.directives, DirectiveLocation::FragmentSpread),
                Selection::InlineFragment(inline) =>
                    (&inline.directives, DirectiveLocation::InlineFragment),
            };
            for directive in directives {
                visit(directive, location);
            }
        });
    }

    /// Every variable referenced by `operation`, including references made
    /// from fragments it spreads (transitively).
    pub fn variable_usages(&self, operation: &OperationInfo<'a>) -> Vec<VariableUsage<'a>> {
        let mut usages = vec![];
        for directive in operation.directives {
            collect_directive_variables(directive, &mut usages);
        }
        let mut visited_fragments = HashSet::new();
        self.collect_selection_set_variables(
            operation.selection_set,
            &mut visited_fragments,
            &mut usages,
        );
        usages
    }

    fn collect_selection_set_variables(
        &self,
        selection_set: &'a ast::query::SelectionSet,
        visited_fragments: &mut HashSet<&'a str>,
        usages: &mut Vec<VariableUsage<'a>>,
    ) {
        use ast::query::Selection;
        for selection in &selection_set.items {
            match selection {
                Selection::Field(field) => {
                    for (_, value) in &field.arguments {
                        collect_value_variables(value, field.position, usages);
                    }
                    for directive in &field.directives {
                        collect_directive_variables(directive, usages);
                    }
                    self.collect_selection_set_variables(
                        &field.selection_set,
                        visited_fragments,
                        usages,
                    );
                },
                Selection::InlineFragment(inline) => {
                    for directive in &inline.directives {
                        collect_directive_variables(directive, usages);
                    }
                    self.collect_selection_set_variables(
                        &inline.selection_set,
                        visited_fragments,
                        usages,
                    );
                },
                Selection::FragmentSpread(spread) => {
                    for directive in &spread.directives {
                        collect_directive_variables(directive, usages);
                    }
                    if !visited_fragments.insert(spread.fragment_name.as_str()) {
                        continue;
                    }
                    if let Some(fragment) = self.fragment(&spread.fragment_name) {
                        for directive in &fragment.directives {
                            collect_directive_variables(directive, usages);
                        }
                        self.collect_selection_set_variables(
                            &fragment.selection_set,
                            visited_fragments,
                            usages,
                        );
                    }
                },
            }
        }
    }
}

fn collect_directive_variables<'a>(
    directive: &'a ast::query::Directive,
    usages: &mut Vec<VariableUsage<'a>>,
) {
    for (_, value) in &directive.arguments {
        collect_value_variables(value, directive.position, usages);
    }
}

fn collect_value_variables<'a>(
    value: &'a ast::query::Value,
    position: graphql_parser::Pos,
    usages: &mut Vec<VariableUsage<'a>>,
) {
    use ast::query::Value;
    match value {
        Value::Variable(name) => usages.push(VariableUsage { name, position }),
        Value::List(items) => {
            for item in items {
                collect_value_variables(item, position, usages);
            }
        },
        Value::Object(fields) => {
            for field_value in fields.values() {
                collect_value_variables(field_value, position, usages);
            }
        },
        _ => (),
    }
}
