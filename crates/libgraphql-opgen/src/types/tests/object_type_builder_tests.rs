use crate::schema::SchemaBuildError;
use crate::types::GraphQLType;
use crate::types::ObjectTypeBuilder;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::tests::test_utils;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn visit_object_keeps_field_declaration_order() -> Result<()> {
    let object_def = test_utils::parse_object_type_def(
        "Card",
        "type Card { number: String type: CardType owner: User }",
    ).expect("parse error").expect("no object type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut object_builder = ObjectTypeBuilder::new();
    object_builder.visit_type_def(
        &mut types_map_builder,
        Some(Path::new("card.graphql")),
        &object_def,
    )?;
    let object_type = test_utils::get_object_type(&mut types_map_builder, "Card");

    assert_eq!(
        object_type.fields().keys().collect::<Vec<_>>(),
        vec!["number", "type", "owner"],
    );
    assert_eq!(object_type.fields()["owner"].parent_type_name(), "Card");
    assert!(object_type.directives().is_empty());
    assert!(object_type.interface_names().is_empty());

    Ok(())
}

#[test]
fn visit_object_records_parameters_in_order() -> Result<()> {
    let object_def = test_utils::parse_object_type_def(
        "Mutation",
        "type Mutation { signin(email: String!, password: String!, remember: Boolean = false): String }",
    ).expect("parse error").expect("no object type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    ObjectTypeBuilder::new().visit_type_def(&mut types_map_builder, None, &object_def)?;
    let object_type = test_utils::get_object_type(&mut types_map_builder, "Mutation");

    let params = object_type.fields()["signin"].parameters();
    assert_eq!(
        params.keys().collect::<Vec<_>>(),
        vec!["email", "password", "remember"],
    );
    assert!(params["email"].is_required());
    assert!(!params["remember"].is_required());
    assert!(params["remember"].default_value().is_some());

    Ok(())
}

#[test]
fn visit_object_with_duplicate_field_fails() {
    let object_def = test_utils::parse_object_type_def(
        "User",
        "type User { id: Int id: String }",
    ).expect("parse error").expect("no object type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    let result = ObjectTypeBuilder::new().visit_type_def(
        &mut types_map_builder,
        None,
        &object_def,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicateFieldNameDefinition { ref field_name, .. })
            if field_name == "id",
    ));
}

#[test]
fn visit_object_with_dunder_field_fails() {
    let object_def = test_utils::parse_object_type_def(
        "User",
        "type User { __secret: Int }",
    ).expect("parse error").expect("no object type def found");

    let result = ObjectTypeBuilder::new().visit_type_def(
        &mut TypesMapBuilder::new(),
        None,
        &object_def,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidDunderPrefixedFieldName { .. }),
    ));
}

#[test]
fn extension_before_definition_is_merged_on_finalize() -> Result<()> {
    let schema_src = "
        extend type User { nickname: String }
        type User { id: Int }
    ";
    let object_ext = test_utils::parse_object_type_ext("User", schema_src)
        .expect("parse error")
        .expect("no object type extension found");
    let object_def = test_utils::parse_object_type_def("User", schema_src)
        .expect("parse error")
        .expect("no object type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut object_builder = ObjectTypeBuilder::new();
    object_builder.visit_type_extension(&mut types_map_builder, None, object_ext)?;
    object_builder.visit_type_def(&mut types_map_builder, None, &object_def)?;
    object_builder.finalize(&mut types_map_builder)?;

    let object_type = test_utils::get_object_type(&mut types_map_builder, "User");
    assert_eq!(
        object_type.fields().keys().collect::<Vec<_>>(),
        vec!["id", "nickname"],
    );

    Ok(())
}

#[test]
fn extension_adds_implemented_interfaces() -> Result<()> {
    let schema_src = "
        type User implements Node { id: ID }
        extend type User implements Named { name: String }
    ";
    let object_def = test_utils::parse_object_type_def("User", schema_src)
        .expect("parse error")
        .expect("no object type def found");
    let object_ext = test_utils::parse_object_type_ext("User", schema_src)
        .expect("parse error")
        .expect("no object type extension found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut object_builder = ObjectTypeBuilder::new();
    object_builder.visit_type_def(&mut types_map_builder, None, &object_def)?;
    object_builder.visit_type_extension(&mut types_map_builder, None, object_ext)?;
    object_builder.finalize(&mut types_map_builder)?;

    let object_type = test_utils::get_object_type(&mut types_map_builder, "User");
    assert_eq!(object_type.interface_names(), vec!["Node", "Named"]);
    assert!(object_type.implements_interface("Named"));
    assert!(!object_type.implements_interface("User"));

    Ok(())
}

#[test]
fn extension_of_undefined_type_fails_on_finalize() -> Result<()> {
    let object_ext = test_utils::parse_object_type_ext(
        "Ghost",
        "extend type Ghost { boo: String }",
    ).expect("parse error").expect("no object type extension found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut object_builder = ObjectTypeBuilder::new();
    object_builder.visit_type_extension(&mut types_map_builder, None, object_ext)?;

    assert!(matches!(
        object_builder.finalize(&mut types_map_builder),
        Err(SchemaBuildError::ExtensionOfUndefinedType { ref type_name, .. })
            if type_name == "Ghost",
    ));

    Ok(())
}

#[test]
fn extension_of_non_object_type_fails() {
    let object_ext = test_utils::parse_object_type_ext(
        "String",
        "extend type String { length: Int }",
    ).expect("parse error").expect("no object type extension found");

    let mut types_map_builder = TypesMapBuilder::new();
    let result = ObjectTypeBuilder::new().visit_type_extension(
        &mut types_map_builder,
        None,
        object_ext,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::InvalidExtensionType { .. }),
    ));
    assert!(matches!(types_map_builder.get_type("String"), Some(GraphQLType::String)));
}
