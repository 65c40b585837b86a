use crate::types::DirectiveDef;
use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::SchemaType;
use crate::types::TypeRef;
use crate::Schema;
use indexmap::IndexMap;
use libgraphql_online_parser::RuleFrame;
use libgraphql_online_parser::RuleKind;
use libgraphql_online_parser::State;

/// What the schema knows about the grammatical position described by a
/// parser [`State`].
///
/// Every member is optional: a partially typed document, or one that refers
/// to names the schema does not define, simply leaves members unset.
#[derive(Clone, Debug, Default)]
pub struct TypeInfo<'s> {
    /// The output (or, inside variables and input values, input) type at
    /// the position.
    pub type_ref: Option<TypeRef>,

    /// The type whose fields the innermost selection set selects.
    pub parent_type: Option<&'s SchemaType>,

    pub field_def: Option<&'s FieldDef>,
    pub arg_defs: Option<&'s [InputValueDef]>,
    pub arg_def: Option<&'s InputValueDef>,

    /// The type expected by the innermost argument, list item or input
    /// object field.
    pub input_type: Option<TypeRef>,

    pub enum_value: Option<&'s EnumValueDef>,

    /// The input object type of the innermost object literal.
    pub input_object: Option<&'s SchemaType>,
    pub object_field_defs: Option<&'s IndexMap<String, InputValueDef>>,
    pub object_field_def: Option<&'s InputValueDef>,

    pub directive_def: Option<&'s DirectiveDef>,

    /// The name of the interface or object type being defined, in SDL.
    pub interface_def: Option<String>,
    pub object_type_def: Option<String>,
}
impl<'s> TypeInfo<'s> {
    /// The schema type named by [`TypeInfo::type_ref`].
    pub fn named_type(&self, schema: &'s Schema) -> Option<&'s SchemaType> {
        self.type_ref.as_ref().and_then(|type_ref| schema.get_type(type_ref.named_type()))
    }

    /// The schema type named by [`TypeInfo::input_type`].
    pub fn named_input_type(&self, schema: &'s Schema) -> Option<&'s SchemaType> {
        self.input_type.as_ref().and_then(|type_ref| schema.get_type(type_ref.named_type()))
    }
}

/// Walks the rule stack of `state` from the root outwards, resolving each
/// frame against `schema`.
pub fn get_type_info<'s>(schema: &'s Schema, state: &State) -> TypeInfo<'s> {
    let mut info = TypeInfo::default();
    let stack = state.stack();

    for (idx, frame) in stack.iter().enumerate() {
        let previous = idx.checked_sub(1).and_then(|prev| stack.get(prev));
        let name = frame.name.as_deref();
        match frame.kind {
            RuleKind::Query | RuleKind::ShortQuery =>
                info.type_ref = root_type_ref(schema.query_type()),
            RuleKind::Mutation =>
                info.type_ref = root_type_ref(schema.mutation_type()),
            RuleKind::Subscription =>
                info.type_ref = root_type_ref(schema.subscription_type()),

            RuleKind::InlineFragment | RuleKind::FragmentDefinition => {
                if let Some(type_name) = frame.type_name.as_deref() {
                    info.type_ref = schema.get_type(type_name)
                        .map(|schema_type| TypeRef::named(&schema_type.name));
                }
            },

            RuleKind::Field | RuleKind::AliasedField => {
                if info.type_ref.is_some()
                    && let Some(field_name) = name
                {
                    info.field_def = info.parent_type
                        .and_then(|parent| schema.field_def(&parent.name, field_name));
                    info.type_ref = info.field_def
                        .map(|field_def| field_def.type_ref.clone());
                } else {
                    info.field_def = None;
                }
            },

            RuleKind::SelectionSet =>
                info.parent_type = info.named_type(schema),

            RuleKind::Directive =>
                info.directive_def = name.and_then(|name| schema.get_directive(name)),

            RuleKind::InterfaceDef => {
                if let Some(name) = name {
                    info.object_type_def = None;
                    info.interface_def = Some(name.to_string());
                }
            },
            RuleKind::ObjectTypeDef => {
                if let Some(name) = name {
                    info.interface_def = None;
                    info.object_type_def = Some(name.to_string());
                }
            },

            RuleKind::Arguments => {
                info.arg_defs = previous.and_then(|previous| {
                    arguments_of(schema, &info, previous)
                });
            },
            RuleKind::Argument => {
                info.arg_def = info.arg_defs.and_then(|arg_defs| {
                    arg_defs.iter().find(|arg_def| Some(arg_def.name.as_str()) == name)
                });
                info.input_type = info.arg_def.map(|arg_def| arg_def.type_ref.clone());
            },

            RuleKind::VariableDefinition => info.type_ref = info.input_type.clone(),
            RuleKind::Variable => {
                info.type_ref = info.input_type.clone().or_else(|| {
                    let variable_types = state.variable_to_type.as_ref()?;
                    variable_types.get(name?).map(TypeRef::named)
                });
            },

            RuleKind::EnumValue => {
                info.enum_value = info.named_input_type(schema)
                    .and_then(SchemaType::enum_values)
                    .and_then(|values| values.get(name?));
            },
            RuleKind::ListValue => {
                info.input_type = info.input_type
                    .as_ref()
                    .and_then(TypeRef::list_item)
                    .cloned();
            },
            RuleKind::ObjectValue => {
                info.input_object = info.named_input_type(schema)
                    .filter(|input_type| input_type.input_fields().is_some());
                info.object_field_defs =
                    info.input_object.and_then(SchemaType::input_fields);
            },
            RuleKind::ObjectField => {
                info.object_field_def = info.object_field_defs
                    .zip(name)
                    .and_then(|(field_defs, name)| field_defs.get(name));
                info.input_type = info.object_field_def
                    .map(|field_def| field_def.type_ref.clone());
                info.type_ref = info.input_type.clone();
            },

            RuleKind::NamedType => {
                if let Some(schema_type) = name.and_then(|name| schema.get_type(name)) {
                    info.type_ref = Some(TypeRef::named(&schema_type.name));
                }
            },

            _ => (),
        }
    }

    info
}

fn root_type_ref(root: Option<&SchemaType>) -> Option<TypeRef> {
    root.map(|root| TypeRef::named(&root.name))
}

fn arguments_of<'s>(
    schema: &'s Schema,
    info: &TypeInfo<'s>,
    previous: &RuleFrame,
) -> Option<&'s [InputValueDef]> {
    match previous.kind {
        RuleKind::Field => info.field_def.map(|field_def| field_def.arguments.as_slice()),
        RuleKind::Directive =>
            info.directive_def.map(|directive_def| directive_def.arguments.as_slice()),
        RuleKind::AliasedField => {
            let parent = info.parent_type?;
            let field_def = schema.field_def(&parent.name, previous.name.as_deref()?)?;
            Some(field_def.arguments.as_slice())
        },
        _ => None,
    }
}

/// The innermost operation or fragment definition frame of `state`.
pub fn get_definition_state(state: &State) -> Option<&RuleFrame> {
    state.stack()
        .iter()
        .rev()
        .find(|frame| matches!(
            frame.kind,
            RuleKind::Query
                | RuleKind::ShortQuery
                | RuleKind::Mutation
                | RuleKind::Subscription
                | RuleKind::FragmentDefinition,
        ))
}
