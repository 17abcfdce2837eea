use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::TypeBuilder;
use crate::types::TypeBuilderHelpers;
use crate::types::TypesMapBuilder;
use inherent::inherent;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct ObjectTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::ObjectTypeExtension)>,
}

impl ObjectTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        &mut self,
        type_: &mut ObjectType,
        ext_file_path: Option<&Path>,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        let ext_srcloc = loc::SourceLocation::from_file_path(ext_file_path)
            .with_ast_position(&ext.position);

        type_.0.directives.append(&mut DirectiveAnnotation::from_ast(
            &ext_srcloc,
            &ext.directives,
        ));

        for iface_name in ext.implements_interfaces {
            if type_.0.interfaces.contains(&iface_name) {
                return Err(
                    SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                        def_location: ext_srcloc,
                        duplicated_interface_name: iface_name,
                        type_name: ext.name.to_string(),
                    }
                );
            }
            type_.0.interfaces.push(iface_name);
        }

        for ext_field in ext.fields.iter() {
            let ext_field_srcloc = ext_srcloc.with_ast_position(&ext_field.position);

            // Error if this field is already defined.
            if let Some(existing_field) = type_.0.fields.get(ext_field.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: ext.name.to_string(),
                    field_name: ext_field.name.to_string(),
                    field_def1: existing_field.def_location().to_owned(),
                    field_def2: ext_field_srcloc,
                });
            }
            type_.0.fields.insert(
                ext_field.name.to_string(),
                TypeBuilderHelpers::object_fielddef_from_ast(
                    &ext_field_srcloc,
                    ext.name.as_str(),
                    ext_field,
                )?,
            );
        }

        Ok(())
    }
}

#[inherent]
impl TypeBuilder for ObjectTypeBuilder {
    type AstTypeDef = ast::schema::ObjectType;
    type AstTypeExtension = ast::schema::ObjectTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        // Drain in visit order so that fields from multiple extensions land
        // in the order they were written.
        for (ext_path, ext) in std::mem::take(&mut self.extensions) {
            let ext_srcloc = loc::SourceLocation::from_file_path(ext_path.as_deref())
                .with_ast_position(&ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Object(type_)) =>
                    self.merge_type_extension(type_, ext_path.as_deref(), ext)?,

                Some(other_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        type_name: other_type.name().to_string(),
                        extension_location: ext_srcloc,
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_location: ext_srcloc,
                    }),
            }
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let def_srcloc = loc::SourceLocation::from_file_path(file_path)
            .with_ast_position(&def.position);

        let fields = TypeBuilderHelpers::object_fielddefs_from_ast(
            &def_srcloc,
            def.name.as_str(),
            &def.fields,
        )?;

        let directives = DirectiveAnnotation::from_ast(
            &def_srcloc,
            &def.directives,
        );

        let interfaces = {
            let mut interface_names = HashSet::new();
            let mut interfaces = vec![];
            for iface_name in &def.implements_interfaces {
                if interface_names.insert(iface_name) {
                    interfaces.push(iface_name.to_string());
                } else {
                    // Types must declare a unique list of interfaces they
                    // implement.
                    //
                    // https://spec.graphql.org/October2021/#sel-HAHZhCFFABABsCqgY
                    return Err(
                        SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                            def_location: def_srcloc,
                            duplicated_interface_name: iface_name.to_string(),
                            type_name: def.name.to_string(),
                        }
                    );
                }
            }
            interfaces
        };

        types_builder.add_new_type(
            def.name.as_str(),
            &def_srcloc.to_owned(),
            GraphQLType::Object(ObjectType(ObjectOrInterfaceTypeData {
                def_location: def_srcloc,
                description: def.description.to_owned(),
                directives,
                fields,
                interfaces,
                name: def.name.to_string(),
            })),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: <Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Object(obj_type)) =>
                self.merge_type_extension(obj_type, file_path, ext),

            Some(non_obj_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: non_obj_type.name().to_string(),
                    extension_location: loc::SourceLocation::from_file_path(file_path)
                        .with_ast_position(&ext.position),
                }),

            None => {
                self.extensions.push((file_path.map(Path::to_path_buf), ext));
                Ok(())
            },
        }
    }
}
