use crate::ast;
use crate::schema::DefLocation;
use crate::schema::GraphQLOperationType;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveDef;
use crate::types::EnumValueDef;
use crate::types::FieldDef;
use crate::types::InputValueDef;
use crate::types::SchemaType;
use crate::types::SchemaTypeKind;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = [
    "skip",
    "include",
    "deprecated",
    "specifiedBy",
];

const BUILTIN_SCALARS: [(&str, &str); 5] = [
    ("Int", "The `Int` scalar type represents non-fractional signed whole numeric values."),
    ("Float", "The `Float` scalar type represents signed double-precision fractional values."),
    ("String", "The `String` scalar type represents textual data, represented as UTF-8 character sequences."),
    ("Boolean", "The `Boolean` scalar type represents `true` or `false`."),
    ("ID", "The `ID` scalar type represents a unique identifier."),
];

/// Utility for building a [Schema] from one or more SDL sources.
///
/// Type extensions are collected while loading and merged by
/// [`SchemaBuilder::build()`], so an extension may appear before (or in a
/// different source than) the type it extends.
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_locations: HashMap<String, DefLocation>,
    directives: IndexMap<String, DirectiveDef>,
    extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    mutation_type: Option<(String, DefLocation)>,
    query_type: Option<(String, DefLocation)>,
    str_load_counter: u16,
    subscription_type: Option<(String, DefLocation)>,
    type_locations: HashMap<String, DefLocation>,
    types: IndexMap<String, SchemaType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.inject_missing_builtin_directives();
        self.inject_missing_builtin_scalars();

        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(file_path.as_path(), ext)?;
        }

        let query_type = self.root_type(GraphQLOperationType::Query)?;
        let mutation_type = self.root_type(GraphQLOperationType::Mutation)?;
        let subscription_type = self.root_type(GraphQLOperationType::Subscription)?;
        if query_type.is_none() {
            log::debug!("building a schema without a query root type");
        }

        Ok(Schema {
            directives: self.directives,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_locations: HashMap::new(),
            directives: IndexMap::new(),
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            str_load_counter: 0,
            subscription_type: None,
            type_locations: HashMap::new(),
            types: IndexMap::new(),
        }
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_path_buf(),
                err: err.to_string(),
            })?;
        self.load_str(Some(file_path.to_path_buf()), content.as_str())
    }

    /// Loads SDL from `content`. Sources without a path are named
    /// `str://0`, `str://1`, ... in error messages.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn inject_missing_builtin_directives(&mut self) {
        let builtins = [
            DirectiveDef::skip(),
            DirectiveDef::include(),
            DirectiveDef::deprecated(),
            DirectiveDef::specified_by(),
        ];
        for directive in builtins {
            if !self.directives.contains_key(directive.name.as_str()) {
                self.directives.insert(directive.name.to_string(), directive);
            }
        }
    }

    fn inject_missing_builtin_scalars(&mut self) {
        for (name, description) in BUILTIN_SCALARS {
            if !self.types.contains_key(name) {
                self.types.insert(
                    name.to_string(),
                    SchemaType::builtin_scalar(name, description),
                );
            }
        }
    }

    /// Resolves a root operation type, falling back to the conventional type
    /// name when no `schema` definition declared one.
    fn root_type(&self, operation: GraphQLOperationType) -> Result<Option<String>> {
        let (declared, default_name) = match operation {
            GraphQLOperationType::Query => (&self.query_type, "Query"),
            GraphQLOperationType::Mutation => (&self.mutation_type, "Mutation"),
            GraphQLOperationType::Subscription =>
                (&self.subscription_type, "Subscription"),
        };

        let is_object = |name: &str| matches!(
            self.types.get(name).map(|t| &t.kind),
            Some(SchemaTypeKind::Object { .. }),
        );

        match declared {
            Some((type_name, _)) if is_object(type_name) => Ok(Some(type_name.to_string())),
            Some((type_name, _)) => Err(SchemaBuildError::UndefinedRootOperationType {
                operation,
                type_name: type_name.to_string(),
            }),
            None => Ok(is_object(default_name).then(|| default_name.to_string())),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let location = DefLocation::from_pos(file_path, def.position);

        if BUILTIN_DIRECTIVE_NAMES.contains(&def.name.as_str()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: def.name,
                location,
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: location,
                directive_name: def.name,
            });
        }

        if let Some(existing) = self.directive_locations.get(def.name.as_str()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: def.name,
                location1: existing.clone(),
                location2: location,
            });
        }

        self.directive_locations.insert(def.name.to_string(), location);
        self.directives.insert(def.name.to_string(), DirectiveDef::from_ast(&def));
        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let location = DefLocation::from_pos(file_path, schema_def.position);
        let roots = [
            (GraphQLOperationType::Query, schema_def.query),
            (GraphQLOperationType::Mutation, schema_def.mutation),
            (GraphQLOperationType::Subscription, schema_def.subscription),
        ];
        for (operation, type_name) in roots {
            let Some(type_name) = type_name else {
                continue;
            };
            let slot = match operation {
                GraphQLOperationType::Query => &mut self.query_type,
                GraphQLOperationType::Mutation => &mut self.mutation_type,
                GraphQLOperationType::Subscription => &mut self.subscription_type,
            };
            if let Some((_, existing)) = slot {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing.clone(),
                    location2: location,
                });
            }
            *slot = Some((type_name, location.clone()));
        }
        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: &Path,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        let (position, name, description, kind) = match type_def {
            TypeDefinition::Scalar(def) =>
                (def.position, def.name, def.description, SchemaTypeKind::Scalar),
            TypeDefinition::Object(def) => (
                def.position,
                def.name,
                def.description,
                SchemaTypeKind::Object {
                    fields: field_defs_from_ast(&def.fields),
                    interfaces: def.implements_interfaces,
                },
            ),
            TypeDefinition::Interface(def) => (
                def.position,
                def.name,
                def.description,
                SchemaTypeKind::Interface {
                    fields: field_defs_from_ast(&def.fields),
                    interfaces: def.implements_interfaces,
                },
            ),
            TypeDefinition::Union(def) => (
                def.position,
                def.name,
                def.description,
                SchemaTypeKind::Union { members: def.types },
            ),
            TypeDefinition::Enum(def) => (
                def.position,
                def.name,
                def.description,
                SchemaTypeKind::Enum {
                    values: def.values
                        .iter()
                        .map(|value| (value.name.to_string(), EnumValueDef::from_ast(value)))
                        .collect(),
                },
            ),
            TypeDefinition::InputObject(def) => (
                def.position,
                def.name,
                def.description,
                SchemaTypeKind::InputObject {
                    fields: def.fields
                        .iter()
                        .map(|field| (field.name.to_string(), InputValueDef::from_ast(field)))
                        .collect(),
                },
            ),
        };

        let def_location = DefLocation::from_pos(file_path, position);
        if name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location,
                type_name: name,
            });
        }

        if let Some(existing) = self.type_locations.get(name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: name,
                def1: existing.clone(),
                def2: def_location,
            });
        }

        self.type_locations.insert(name.to_string(), def_location.clone());
        self.types.insert(name.to_string(), SchemaType {
            name,
            description,
            kind,
            location: Some(def_location),
        });
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
        };
        let extension_loc = DefLocation::from_pos(file_path, position);

        let Some(schema_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                type_name,
                extension_loc,
            });
        };

        match (ext, &mut schema_type.kind) {
            (TypeExtension::Scalar(_), SchemaTypeKind::Scalar) => (),

            (
                TypeExtension::Object(ext),
                SchemaTypeKind::Object { fields, interfaces },
            ) => {
                merge_fields(&type_name, &extension_loc, fields, &ext.fields)?;
                interfaces.extend(ext.implements_interfaces);
            },

            (
                TypeExtension::Interface(ext),
                SchemaTypeKind::Interface { fields, .. },
            ) => merge_fields(&type_name, &extension_loc, fields, &ext.fields)?,

            (TypeExtension::Union(ext), SchemaTypeKind::Union { members }) => {
                for member in ext.types {
                    if !members.contains(&member) {
                        members.push(member);
                    }
                }
            },

            (TypeExtension::Enum(ext), SchemaTypeKind::Enum { values }) => {
                for value in ext.values.iter() {
                    values.insert(value.name.to_string(), EnumValueDef::from_ast(value));
                }
            },

            (
                TypeExtension::InputObject(ext),
                SchemaTypeKind::InputObject { fields },
            ) => {
                for field in ext.fields.iter() {
                    if fields.contains_key(field.name.as_str()) {
                        return Err(SchemaBuildError::DuplicateFieldDefinition {
                            type_name,
                            field_name: field.name.to_string(),
                            location: extension_loc,
                        });
                    }
                    fields.insert(field.name.to_string(), InputValueDef::from_ast(field));
                }
            },

            (_, kind) => return Err(SchemaBuildError::InvalidExtensionType {
                type_name,
                type_kind: kind.as_str(),
                extension_loc,
            }),
        }
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn field_defs_from_ast(fields: &[ast::schema::Field]) -> IndexMap<String, FieldDef> {
    fields.iter()
        .map(|field| (field.name.to_string(), FieldDef::from_ast(field)))
        .collect()
}

fn merge_fields(
    type_name: &str,
    extension_loc: &DefLocation,
    fields: &mut IndexMap<String, FieldDef>,
    ext_fields: &[ast::schema::Field],
) -> Result<()> {
    for field in ext_fields {
        if fields.contains_key(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldDefinition {
                type_name: type_name.to_string(),
                field_name: field.name.to_string(),
                location: extension_loc.clone(),
            });
        }
        fields.insert(field.name.to_string(), FieldDef::from_ast(field));
    }
    Ok(())
}
