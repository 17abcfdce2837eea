use crate::ast;
use crate::file_reader;
use crate::generator::OperationKind;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::GraphQLType;
use crate::types::InterfaceTypeBuilder;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypeId;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Utility for building a [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    interface_builder: InterfaceTypeBuilder,
    mutation_type: Option<NamedTypeDefLocation>,
    object_builder: ObjectTypeBuilder,
    query_type: Option<NamedTypeDefLocation>,
    types_map_builder: TypesMapBuilder,
    union_builder: UnionTypeBuilder,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        self.interface_builder.finalize(&mut self.types_map_builder)?;
        self.object_builder.finalize(&mut self.types_map_builder)?;
        self.union_builder.finalize(&mut self.types_map_builder)?;

        let types = self.types_map_builder.into_types_map()?;

        let query_type =
            Self::resolve_root_type(&types, OperationKind::Query, self.query_type.take())?
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type = Self::resolve_root_type(
            &types,
            OperationKind::Mutation,
            self.mutation_type.take(),
        )?;

        let possible_types = Self::compute_possible_types(&types);

        tracing::debug!(
            "Built schema with {} types (query root `{}`)",
            types.len(),
            types.get_index(query_type.index())
                .map(|(name, _)| name.as_str())
                .unwrap_or_default(),
        );

        Ok(Schema {
            query_type,
            mutation_type,
            possible_types,
            types,
        })
    }

    pub fn new() -> Self {
        Self {
            interface_builder: InterfaceTypeBuilder::new(),
            mutation_type: None,
            object_builder: ObjectTypeBuilder::new(),
            query_type: None,
            types_map_builder: TypesMapBuilder::new(),
            union_builder: UnionTypeBuilder::new(),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc = ast::schema::parse(content)
            .map_err(|err| SchemaBuildError::ParseError {
                file: file_path.to_owned(),
                err: err.to_string(),
            })?;

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    fn compute_possible_types(
        types: &IndexMap<String, GraphQLType>,
    ) -> HashMap<TypeId, Vec<TypeId>> {
        let mut possible_types = HashMap::<TypeId, Vec<TypeId>>::new();
        for (idx, (_, type_)) in types.iter().enumerate() {
            match type_ {
                GraphQLType::Union(union_type) => {
                    let member_ids = union_type.member_type_names()
                        .into_iter()
                        .filter_map(|member_name| types.get_index_of(member_name))
                        .map(TypeId)
                        .collect();
                    possible_types.insert(TypeId(idx), member_ids);
                },

                GraphQLType::Object(obj_type) => {
                    // Follow interface inheritance so that an object reached
                    // through a sub-interface is also a possible type of the
                    // parent interface.
                    let mut seen = HashSet::new();
                    let mut pending = obj_type.interface_names();
                    while let Some(iface_name) = pending.pop() {
                        if !seen.insert(iface_name) {
                            continue;
                        }
                        if let Some((iface_idx, _, GraphQLType::Interface(iface))) =
                                types.get_full(iface_name) {
                            possible_types.entry(TypeId(iface_idx))
                                .or_default()
                                .push(TypeId(idx));
                            pending.extend(iface.interface_names());
                        }
                    }
                },

                _ => (),
            }
        }
        possible_types
    }

    fn resolve_root_type(
        types: &IndexMap<String, GraphQLType>,
        operation: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<TypeId>> {
        let (type_name, ref_location) = match explicit_def {
            Some(def) => (def.type_name, Some(def.def_location)),
            None => (operation.default_root_type_name().to_string(), None),
        };

        match types.get_full(type_name.as_str()) {
            Some((idx, _, GraphQLType::Object(_))) => Ok(Some(TypeId(idx))),

            Some((_, _, non_obj_type)) if ref_location.is_some() =>
                Err(SchemaBuildError::TypeValidationErrors {
                    errors: vec![TypeValidationError::InvalidRootOperationTypeKind {
                        operation_name: operation.as_str(),
                        type_kind: non_obj_type.kind(),
                        type_name,
                    }],
                }),

            None => match ref_location {
                Some(ref_location) => Err(SchemaBuildError::TypeValidationErrors {
                    errors: vec![TypeValidationError::UndefinedTypeName {
                        ref_location,
                        undefined_type_name: type_name,
                    }],
                }),
                None => Ok(None),
            },

            // A non-object type that merely happens to use the default root
            // type name is not a root operation type.
            _ => Ok(None),
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) =>
                self.visit_ast_type_extension(file_path, type_ext),
            Definition::DirectiveDefinition(directive_def) => {
                // Directive definitions never influence which fields get
                // selected.
                tracing::debug!("Ignoring definition of `@{}`", directive_def.name);
                Ok(())
            },
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_file_path(file_path)
            .with_ast_position(&schema_def.position);

        for (operation, type_name) in [
            (OperationKind::Query, &schema_def.query),
            (OperationKind::Mutation, &schema_def.mutation),
        ] {
            let Some(type_name) = type_name else { continue };
            let typedef_loc = NamedTypeDefLocation {
                def_location: def_location.to_owned(),
                type_name: type_name.to_string(),
            };
            let slot = match operation {
                OperationKind::Query => &mut self.query_type,
                OperationKind::Mutation => &mut self.mutation_type,
            };
            if let Some(existing_typedef_loc) = slot.as_ref() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.to_owned(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        if let Some(type_name) = &schema_def.subscription {
            tracing::debug!("Ignoring subscription root type `{type_name}`");
        }

        // As per the GraphQL spec:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        if let (Some(query_type), Some(mut_type)) = (&self.query_type, &self.mutation_type) {
            if query_type.type_name == mut_type.type_name {
                return Err(SchemaBuildError::NonUniqueOperationTypes {
                    reused_type_name: query_type.type_name.to_owned(),
                    operation1_loc: query_type.def_location.to_owned(),
                    operation2_loc: mut_type.def_location.to_owned(),
                });
            }
        }

        Ok(())
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(enum_def) => {
                let type_ = TypeBuilderHelpers::enum_type_from_ast(file_path, &enum_def)?;
                self.types_map_builder.add_new_type(
                    enum_def.name.as_str(),
                    &type_.def_location().to_owned(),
                    type_,
                )
            },

            TypeDefinition::InputObject(inputobj_def) => {
                let type_ = TypeBuilderHelpers::inputobject_type_from_ast(
                    file_path,
                    &inputobj_def,
                );
                self.types_map_builder.add_new_type(
                    inputobj_def.name.as_str(),
                    &type_.def_location().to_owned(),
                    type_,
                )
            },

            TypeDefinition::Interface(iface_def) =>
                self.interface_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &iface_def,
                ),

            TypeDefinition::Object(obj_def) =>
                self.object_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &obj_def,
                ),

            TypeDefinition::Scalar(scalar_def) => {
                let type_ = TypeBuilderHelpers::scalar_type_from_ast(
                    file_path,
                    &scalar_def,
                );
                self.types_map_builder.add_new_type(
                    scalar_def.name.as_str(),
                    &type_.def_location().to_owned(),
                    type_,
                )
            },

            TypeDefinition::Union(union_def) =>
                self.union_builder.visit_type_def(
                    &mut self.types_map_builder,
                    file_path,
                    &union_def,
                ),
        }
    }

    fn visit_ast_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        let (type_name, position) = match ext {
            TypeExtension::Interface(iface_ext) =>
                return self.interface_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    iface_ext,
                ),

            TypeExtension::Object(obj_ext) =>
                return self.object_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    obj_ext,
                ),

            TypeExtension::Union(union_ext) =>
                return self.union_builder.visit_type_extension(
                    &mut self.types_map_builder,
                    file_path,
                    union_ext,
                ),

            TypeExtension::Enum(ext) => (ext.name, ext.position),
            TypeExtension::InputObject(ext) => (ext.name, ext.position),
            TypeExtension::Scalar(ext) => (ext.name, ext.position),
        };

        Err(SchemaBuildError::UnsupportedTypeExtension {
            extension_location: loc::SourceLocation::from_file_path(file_path)
                .with_ast_position(&position),
            type_name,
        })
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum SchemaBuildError {
    #[error(
        "Multiple fields named `{field_name}` were defined on the \
        `{type_name}` type"
    )]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types named `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("A union type specifies `{type_name}` as a member multiple times")]
    DuplicatedUnionMember {
        type_name: String,
        member1: loc::SourceLocation,
        member2: loc::SourceLocation,
    },

    #[error("The `{type_name}` enum type must define one or more values")]
    EnumWithNoVariants {
        type_name: String,
        location: loc::SourceLocation,
    },

    #[error("Attempted to extend `{type_name}`, but that type is not defined anywhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error(
        "Attempted to extend `{type_name}` using an extension for a different \
        kind of type"
    )]
    InvalidExtensionType {
        type_name: String,
        extension_location: loc::SourceLocation,
    },

    #[error("Field names must not start with `__`: `{type_name}.{field_name}`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "Parameter names must not start with `__`: `{param_name}` on \
        `{type_name}.{field_name}`"
    )]
    InvalidDunderPrefixedParamName {
        def_location: loc::SourceLocation,
        field_name: String,
        param_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`: `{type_name}`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The query and mutation root operations are both defined with the \
        `{reused_type_name}` type, but all root operations must be defined \
        with different types"
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1_loc: loc::SourceLocation,
        operation2_loc: loc::SourceLocation,
    },

    #[error(
        "Error parsing schema{}: {err}",
        file.as_ref()
            .map(|file| format!(" file `{}`", file.display()))
            .unwrap_or_default(),
    )]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(Box<file_reader::ReadContentError>),

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error("Extensions of enum, input object, and scalar types are not supported: `{type_name}`")]
    UnsupportedTypeExtension {
        extension_location: loc::SourceLocation,
        type_name: String,
    },
}

/// Represents the location of a root operation type's declaration in the
/// schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
