use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;
use indexmap::IndexMap;
use inherent::inherent;
use std::path::Path;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Debug)]
pub(crate) struct UnionTypeBuilder {
    extensions: Vec<(Option<PathBuf>, ast::schema::UnionTypeExtension)>,
}

impl UnionTypeBuilder {
    pub fn new() -> Self {
        Self {
            extensions: vec![],
        }
    }

    fn merge_type_extension(
        &mut self,
        type_: &mut UnionType,
        ext_file_path: Option<&Path>,
        ext: &ast::schema::UnionTypeExtension,
    ) -> Result<()> {
        let ext_srcloc = loc::SourceLocation::from_file_path(ext_file_path)
            .with_ast_position(&ext.position);
        type_.directives.append(&mut DirectiveAnnotation::from_ast(
            &ext_srcloc,
            &ext.directives,
        ));

        for ext_member_name in ext.types.iter() {
            // Error if this type is already a member of the union.
            if let Some(existing_loc) = type_.members.get(ext_member_name.as_str()) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: ext_member_name.to_string(),
                    member1: existing_loc.to_owned(),
                    member2: ext_srcloc,
                });
            }
            type_.members.insert(ext_member_name.to_string(), ext_srcloc.to_owned());
        }

        Ok(())
    }
}

#[inherent]
impl TypeBuilder for UnionTypeBuilder {
    type AstTypeDef = ast::schema::UnionType;
    type AstTypeExtension = ast::schema::UnionTypeExtension;

    pub(crate) fn finalize(mut self, types_builder: &mut TypesMapBuilder) -> Result<()> {
        for (ext_path, ext) in std::mem::take(&mut self.extensions) {
            let ext_srcloc = loc::SourceLocation::from_file_path(ext_path.as_deref())
                .with_ast_position(&ext.position);
            match types_builder.get_type_mut(ext.name.as_str()) {
                Some(GraphQLType::Union(union_type)) =>
                    self.merge_type_extension(union_type, ext_path.as_deref(), &ext)?,

                Some(non_union_type) =>
                    return Err(SchemaBuildError::InvalidExtensionType {
                        type_name: non_union_type.name().to_string(),
                        extension_location: ext_srcloc,
                    }),

                None =>
                    return Err(SchemaBuildError::ExtensionOfUndefinedType {
                        type_name: ext.name.to_string(),
                        extension_location: ext_srcloc,
                    }),
            };
        }
        Ok(())
    }

    pub(crate) fn visit_type_def(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        def: &<Self as TypeBuilder>::AstTypeDef,
    ) -> Result<()> {
        let uniondef_srcloc = loc::SourceLocation::from_file_path(file_path)
            .with_ast_position(&def.position);

        let directives = DirectiveAnnotation::from_ast(
            &uniondef_srcloc,
            &def.directives,
        );

        let mut members = IndexMap::<String, loc::SourceLocation>::new();
        for member_type_name in &def.types {
            if let Some(existing_loc) = members.get(member_type_name.as_str()) {
                return Err(SchemaBuildError::DuplicatedUnionMember {
                    type_name: member_type_name.to_string(),
                    member1: existing_loc.to_owned(),
                    member2: uniondef_srcloc,
                });
            }
            members.insert(member_type_name.to_string(), uniondef_srcloc.to_owned());
        }

        types_builder.add_new_type(
            def.name.as_str(),
            &uniondef_srcloc.to_owned(),
            GraphQLType::Union(UnionType {
                def_location: uniondef_srcloc,
                description: def.description.to_owned(),
                directives,
                name: def.name.to_string(),
                members,
            }),
        )
    }

    pub(crate) fn visit_type_extension(
        &mut self,
        types_builder: &mut TypesMapBuilder,
        file_path: Option<&Path>,
        ext: <Self as TypeBuilder>::AstTypeExtension,
    ) -> Result<()> {
        match types_builder.get_type_mut(ext.name.as_str()) {
            Some(GraphQLType::Union(union_type)) =>
                self.merge_type_extension(union_type, file_path, &ext),

            Some(non_union_type) =>
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: non_union_type.name().to_string(),
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
