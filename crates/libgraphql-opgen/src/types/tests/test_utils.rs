use crate::ast;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypesMapBuilder;
use crate::types::UnionType;

pub(super) fn parse_object_type_def(
    type_name: &str,
    schema: &str,
) -> Result<Option<ast::schema::ObjectType>, ast::schema::ParseError> {
    let doc = ast::schema::parse(schema)?;
    for def in doc.definitions {
        match def {
            ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Object(obj_type)
            ) if obj_type.name == type_name => {
                return Ok(Some(obj_type));
            }

            _ => continue,
        }
    }
    Ok(None)
}

pub(super) fn parse_object_type_ext(
    type_name: &str,
    schema: &str,
) -> Result<Option<ast::schema::ObjectTypeExtension>, ast::schema::ParseError> {
    let doc = ast::schema::parse(schema)?;
    for def in doc.definitions {
        match def {
            ast::schema::Definition::TypeExtension(
                ast::schema::TypeExtension::Object(obj_ext)
            ) if obj_ext.name == type_name => {
                return Ok(Some(obj_ext));
            }

            _ => continue,
        }
    }
    Ok(None)
}

pub(super) fn parse_union_type_def(
    type_name: &str,
    schema: &str,
) -> Result<Option<ast::schema::UnionType>, ast::schema::ParseError> {
    let doc = ast::schema::parse(schema)?;
    for def in doc.definitions {
        match def {
            ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Union(union_type)
            ) if union_type.name == type_name => {
                return Ok(Some(union_type));
            }

            _ => continue,
        }
    }
    Ok(None)
}

pub(super) fn parse_union_type_ext(
    type_name: &str,
    schema: &str,
) -> Result<Option<ast::schema::UnionTypeExtension>, ast::schema::ParseError> {
    let doc = ast::schema::parse(schema)?;
    for def in doc.definitions {
        match def {
            ast::schema::Definition::TypeExtension(
                ast::schema::TypeExtension::Union(union_ext)
            ) if union_ext.name == type_name => {
                return Ok(Some(union_ext));
            }

            _ => continue,
        }
    }
    Ok(None)
}

pub(super) fn get_object_type<'a>(
    types_map_builder: &'a mut TypesMapBuilder,
    type_name: &str,
) -> &'a ObjectType {
    match types_map_builder.get_type_mut(type_name) {
        Some(GraphQLType::Object(obj_type)) => obj_type,
        other => panic!("`{type_name}` is not an object type: {other:?}"),
    }
}

pub(super) fn get_union_type<'a>(
    types_map_builder: &'a mut TypesMapBuilder,
    type_name: &str,
) -> &'a UnionType {
    match types_map_builder.get_type_mut(type_name) {
        Some(GraphQLType::Union(union_type)) => union_type,
        other => panic!("`{type_name}` is not a union type: {other:?}"),
    }
}
