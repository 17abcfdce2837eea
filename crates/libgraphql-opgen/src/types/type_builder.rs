use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::TypesMapBuilder;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Visits the AST definitions and extensions of one kind of type and folds
/// them into a [`TypesMapBuilder`].
///
/// Extensions may be visited before the definition they extend, so builders
/// hold on to such extensions until [`TypeBuilder::finalize()`] runs.
pub(crate) trait TypeBuilder: Sized {
    type AstTypeDef;
    type AstTypeExtension;

    fn finalize(self, types_map_builder: &mut TypesMapBuilder) -> Result<()>;

    fn visit_type_def(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &Self::AstTypeDef,
    ) -> Result<()>;

    fn visit_type_extension(
        &mut self,
        types_map_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: Self::AstTypeExtension,
    ) -> Result<()>;
}

pub(crate) struct TypeBuilderHelpers;
impl TypeBuilderHelpers {
    pub fn object_fielddefs_from_ast(
        type_srcloc: &loc::SourceLocation,
        type_name: &str,
        fields: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Field>> {
        let mut field_map = IndexMap::<String, Field>::new();
        for field in fields {
            let field_srcloc = type_srcloc.with_ast_position(&field.position);
            let field = Self::object_fielddef_from_ast(
                &field_srcloc,
                type_name,
                field,
            )?;
            if let Some(existing_field) = field_map.get(field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field.name.to_string(),
                    field_def1: existing_field.def_location.to_owned(),
                    field_def2: field_srcloc,
                });
            }
            field_map.insert(field.name.to_string(), field);
        }
        Ok(field_map)
    }

    pub fn object_fielddef_from_ast(
        field_srcloc: &loc::SourceLocation,
        type_name: &str,
        field: &ast::schema::Field,
    ) -> Result<Field> {
        if field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field_srcloc.to_owned(),
                field_name: field.name.to_string(),
                type_name: type_name.to_string(),
            });
        }

        let mut parameters = IndexMap::new();
        for input_val in &field.arguments {
            let param_srcloc = field_srcloc.with_ast_position(&input_val.position);
            if input_val.name.starts_with("__") {
                return Err(SchemaBuildError::InvalidDunderPrefixedParamName {
                    def_location: param_srcloc,
                    field_name: field.name.to_string(),
                    param_name: input_val.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
            parameters.insert(input_val.name.to_string(), Parameter {
                def_location: param_srcloc.to_owned(),
                default_value: input_val.default_value.to_owned(),
                description: input_val.description.to_owned(),
                name: input_val.name.to_string(),
                type_annotation: TypeAnnotation::from_ast_type(
                    &param_srcloc,
                    &input_val.value_type,
                ),
            });
        }

        Ok(Field {
            def_location: field_srcloc.to_owned(),
            description: field.description.to_owned(),
            directives: DirectiveAnnotation::from_ast(
                field_srcloc,
                &field.directives,
            ),
            name: field.name.to_string(),
            parameters,
            parent_type_name: type_name.to_string(),
            // graphql_parser doesn't give us a location for the field's type
            // itself, so the field's own position stands in for it.
            type_annotation: TypeAnnotation::from_ast_type(
                field_srcloc,
                &field.field_type,
            ),
        })
    }

    pub fn enum_type_from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::EnumType,
    ) -> Result<GraphQLType> {
        let def_location = loc::SourceLocation::from_file_path(file_path)
            .with_ast_position(&def.position);
        if def.values.is_empty() {
            return Err(SchemaBuildError::EnumWithNoVariants {
                type_name: def.name.to_string(),
                location: def_location,
            });
        }
        Ok(GraphQLType::Enum(EnumType {
            directives: DirectiveAnnotation::from_ast(
                &def_location,
                &def.directives,
            ),
            def_location,
            name: def.name.to_string(),
            values: def.values.iter()
                .map(|value| value.name.to_string())
                .collect(),
        }))
    }

    pub fn inputobject_type_from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::InputObjectType,
    ) -> GraphQLType {
        let def_location = loc::SourceLocation::from_file_path(file_path)
            .with_ast_position(&def.position);
        GraphQLType::InputObject(InputObjectType {
            directives: DirectiveAnnotation::from_ast(
                &def_location,
                &def.directives,
            ),
            fields: def.fields.iter().map(|input_field| (
                input_field.name.to_string(),
                TypeAnnotation::from_ast_type(
                    &def_location.with_ast_position(&input_field.position),
                    &input_field.value_type,
                ),
            )).collect(),
            def_location,
            name: def.name.to_string(),
        })
    }

    pub fn scalar_type_from_ast(
        file_path: Option<&Path>,
        def: &ast::schema::ScalarType,
    ) -> GraphQLType {
        let def_location = loc::SourceLocation::from_file_path(file_path)
            .with_ast_position(&def.position);
        GraphQLType::Scalar(ScalarType {
            directives: DirectiveAnnotation::from_ast(
                &def_location,
                &def.directives,
            ),
            def_location,
            name: def.name.to_string(),
        })
    }
}
