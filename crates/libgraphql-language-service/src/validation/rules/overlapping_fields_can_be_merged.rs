use crate::ast;
use crate::types::FieldDef;
use crate::types::SchemaType;
use crate::types::SchemaTypeKind;
use crate::types::TypeRef;
use crate::validation::DocumentValidator;
use crate::validation::ValidationContext;
use crate::validation::ValidationError;
use crate::Schema;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Fields selected under the same response name must resolve to the same
/// field with the same arguments, unless they can never apply to the same
/// object, and must return shapes that can be merged.
pub struct OverlappingFieldsCanBeMerged;
impl DocumentValidator for OverlappingFieldsCanBeMerged {
    fn name(&self) -> &'static str {
        "OverlappingFieldsCanBeMerged"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationError> {
        let mut errors = vec![];
        for operation in ctx.operations() {
            check_selection_sets(ctx, operation.selection_set, ctx.root_type(&operation), &mut errors);
        }
        for fragment in ctx.fragments() {
            let fragment_type = ctx.type_condition_type(&fragment.type_condition);
            check_selection_sets(ctx, &fragment.selection_set, fragment_type, &mut errors);
        }
        errors
    }
}

#[derive(Clone, Copy)]
struct FieldEntry<'a> {
    parent_type: Option<&'a SchemaType>,
    field: &'a ast::query::Field,
    def: Option<&'a FieldDef>,
}

enum ConflictReason {
    Message(String),
    Subfields(Vec<(String, ConflictReason)>),
}
impl std::fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Subfields(conflicts) => {
                for (idx, (response_name, reason)) in conflicts.iter().enumerate() {
                    if idx > 0 {
                        write!(f, " and ")?;
                    }
                    write!(f, "subfields \"{response_name}\" conflict because {reason}")?;
                }
                Ok(())
            },
        }
    }
}

/// Checks `selection_set` and every selection set nested in it, skipping
/// errors already reported from another selection set.
fn check_selection_sets<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::query::SelectionSet,
    parent_type: Option<&'a SchemaType>,
    errors: &mut Vec<ValidationError>,
) {
    use ast::query::Selection;
    for error in conflicts_within(ctx, selection_set, parent_type) {
        if !errors.contains(&error) {
            errors.push(error);
        }
    }
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) if !field.selection_set.items.is_empty() => {
                let field_type = parent_type
                    .and_then(|parent| ctx.schema.field_def(&parent.name, &field.name))
                    .and_then(|field_def| ctx.schema.get_type(field_def.type_ref.named_type()));
                check_selection_sets(ctx, &field.selection_set, field_type, errors);
            },
            Selection::InlineFragment(inline) => {
                let fragment_type = match &inline.type_condition {
                    Some(type_condition) => ctx.type_condition_type(type_condition),
                    None => parent_type,
                };
                check_selection_sets(ctx, &inline.selection_set, fragment_type, errors);
            },
            _ => (),
        }
    }
}

fn conflicts_within<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::query::SelectionSet,
    parent_type: Option<&'a SchemaType>,
) -> Vec<ValidationError> {
    let fields = collect_fields(ctx, selection_set, parent_type);
    let mut errors = vec![];
    for (response_name, entries) in &fields {
        for (idx, a) in entries.iter().enumerate() {
            for b in &entries[idx + 1..] {
                if let Some(reason) = find_conflict(ctx, a, b, false) {
                    errors.push(ValidationError::new(
                        format!(
                            "Fields \"{response_name}\" conflict because {reason}. Use \
                            different aliases on the fields to fetch both if this was \
                            intentional.",
                        ),
                        vec![
                            ctx.name_range(a.field.position, response_name),
                            ctx.name_range(b.field.position, response_name),
                        ],
                    ));
                }
            }
        }
    }
    errors
}

fn response_name(field: &ast::query::Field) -> &str {
    field.alias.as_deref().unwrap_or(&field.name)
}

/// Groups the fields `selection_set` selects by response name, looking
/// through inline fragments and (once each) spread fragments.
fn collect_fields<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::query::SelectionSet,
    parent_type: Option<&'a SchemaType>,
) -> IndexMap<&'a str, Vec<FieldEntry<'a>>> {
    let mut fields = IndexMap::new();
    let mut visited_fragments = HashSet::new();
    collect_fields_into(ctx, selection_set, parent_type, &mut visited_fragments, &mut fields);
    fields
}

fn collect_fields_into<'a>(
    ctx: &ValidationContext<'a>,
    selection_set: &'a ast::query::SelectionSet,
    parent_type: Option<&'a SchemaType>,
    visited_fragments: &mut HashSet<&'a str>,
    fields: &mut IndexMap<&'a str, Vec<FieldEntry<'a>>>,
) {
    use ast::query::Selection;
    for selection in &selection_set.items {
        match selection {
            Selection::Field(field) => {
                let def = parent_type
                    .and_then(|parent| ctx.schema.field_def(&parent.name, &field.name));
                fields.entry(response_name(field))
                    .or_default()
                    .push(FieldEntry { parent_type, field, def });
            },
            Selection::InlineFragment(inline) => {
                let fragment_type = match &inline.type_condition {
                    Some(type_condition) => ctx.type_condition_type(type_condition),
                    None => parent_type,
                };
                collect_fields_into(ctx, &inline.selection_set, fragment_type, visited_fragments, fields);
            },
            Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.fragment_name.as_str()) {
                    continue;
                }
                if let Some(fragment) = ctx.fragment(&spread.fragment_name) {
                    let fragment_type = ctx.type_condition_type(&fragment.type_condition);
                    collect_fields_into(ctx, &fragment.selection_set, fragment_type, visited_fragments, fields);
                }
            },
        }
    }
}

fn is_object(schema_type: Option<&SchemaType>) -> bool {
    schema_type.is_some_and(|t| matches!(t.kind, SchemaTypeKind::Object { .. }))
}

/// Why `a` and `b` cannot be merged, if they cannot. Fields of two different
/// object types never apply to the same value, so only their shapes have to
/// agree.
fn find_conflict<'a>(
    ctx: &ValidationContext<'a>,
    a: &FieldEntry<'a>,
    b: &FieldEntry<'a>,
    parents_mutually_exclusive: bool,
) -> Option<ConflictReason> {
    let mutually_exclusive = parents_mutually_exclusive
        || (is_object(a.parent_type)
            && is_object(b.parent_type)
            && a.parent_type.map(|t| &t.name) != b.parent_type.map(|t| &t.name));

    if !mutually_exclusive {
        if a.field.name != b.field.name {
            return Some(ConflictReason::Message(format!(
                "\"{}\" and \"{}\" are different fields",
                a.field.name,
                b.field.name,
            )));
        }
        if !same_arguments(&a.field.arguments, &b.field.arguments) {
            return Some(ConflictReason::Message("they have differing arguments".to_string()));
        }
    }

    let type_a = a.def.map(|def| &def.type_ref);
    let type_b = b.def.map(|def| &def.type_ref);
    if let (Some(type_a), Some(type_b)) = (type_a, type_b)
        && do_types_conflict(ctx.schema, type_a, type_b)
    {
        return Some(ConflictReason::Message(format!(
            "they return conflicting types \"{type_a}\" and \"{type_b}\"",
        )));
    }

    if a.field.selection_set.items.is_empty() || b.field.selection_set.items.is_empty() {
        return None;
    }
    let named_type = |type_ref: Option<&TypeRef>| {
        type_ref.and_then(|type_ref| ctx.schema.get_type(type_ref.named_type()))
    };
    let fields_a = collect_fields(ctx, &a.field.selection_set, named_type(type_a));
    let fields_b = collect_fields(ctx, &b.field.selection_set, named_type(type_b));
    let mut subfield_conflicts = vec![];
    for (response_name, entries_a) in &fields_a {
        let Some(entries_b) = fields_b.get(response_name) else {
            continue;
        };
        for entry_a in entries_a {
            for entry_b in entries_b {
                if let Some(reason) = find_conflict(ctx, entry_a, entry_b, mutually_exclusive) {
                    subfield_conflicts.push((response_name.to_string(), reason));
                }
            }
        }
    }
    if subfield_conflicts.is_empty() {
        None
    } else {
        Some(ConflictReason::Subfields(subfield_conflicts))
    }
}

fn same_arguments(
    a: &[(String, ast::query::Value)],
    b: &[(String, ast::query::Value)],
) -> bool {
    a.len() == b.len()
        && a.iter().all(|(name, value)| {
            b.iter().any(|(other_name, other_value)| name == other_name && value == other_value)
        })
}

/// Two types conflict when their list and non-null wrappers differ, or when
/// either is a leaf and they are not the same type.
fn do_types_conflict(schema: &Schema, a: &TypeRef, b: &TypeRef) -> bool {
    match (a, b) {
        (TypeRef::List(a), TypeRef::List(b)) => do_types_conflict(schema, a, b),
        (TypeRef::List(_), _) | (_, TypeRef::List(_)) => true,
        (TypeRef::NonNull(a), TypeRef::NonNull(b)) => do_types_conflict(schema, a, b),
        (TypeRef::NonNull(_), _) | (_, TypeRef::NonNull(_)) => true,
        (TypeRef::Named(a), TypeRef::Named(b)) => {
            let is_leaf = |name: &str| schema.get_type(name).is_some_and(SchemaType::is_leaf);
            (is_leaf(a.as_str()) || is_leaf(b.as_str())) && a != b
        },
    }
}
