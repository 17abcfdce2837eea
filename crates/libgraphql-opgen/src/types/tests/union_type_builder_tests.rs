use crate::schema::SchemaBuildError;
use crate::types::TypeBuilder;
use crate::types::TypesMapBuilder;
use crate::types::UnionTypeBuilder;
use crate::types::tests::test_utils;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[test]
fn visit_union_keeps_member_order() -> Result<()> {
    let union_def = test_utils::parse_union_type_def(
        "Details",
        "union Details = Guest | Member | Premium",
    ).expect("parse error").expect("no union type def found");

    let mut types_map_builder = TypesMapBuilder::new();
    UnionTypeBuilder::new().visit_type_def(&mut types_map_builder, None, &union_def)?;
    let union_type = test_utils::get_union_type(&mut types_map_builder, "Details");

    assert_eq!(union_type.member_type_names(), vec!["Guest", "Member", "Premium"]);

    Ok(())
}

#[test]
fn visit_union_with_duplicate_member_fails() {
    let union_def = test_utils::parse_union_type_def(
        "Details",
        "union Details = Guest | Guest",
    ).expect("parse error").expect("no union type def found");

    let result = UnionTypeBuilder::new().visit_type_def(
        &mut TypesMapBuilder::new(),
        None,
        &union_def,
    );

    assert!(matches!(
        result,
        Err(SchemaBuildError::DuplicatedUnionMember { ref type_name, .. })
            if type_name == "Guest",
    ));
}

#[test]
fn extension_appends_members() -> Result<()> {
    let schema_src = "
        union Details = Guest
        extend union Details = Member | Premium
    ";
    let union_def = test_utils::parse_union_type_def("Details", schema_src)
        .expect("parse error")
        .expect("no union type def found");
    let union_ext = test_utils::parse_union_type_ext("Details", schema_src)
        .expect("parse error")
        .expect("no union type extension found");

    let mut types_map_builder = TypesMapBuilder::new();
    let mut union_builder = UnionTypeBuilder::new();
    union_builder.visit_type_def(&mut types_map_builder, None, &union_def)?;
    union_builder.visit_type_extension(&mut types_map_builder, None, union_ext)?;
    union_builder.finalize(&mut types_map_builder)?;

    let union_type = test_utils::get_union_type(&mut types_map_builder, "Details");
    assert_eq!(union_type.member_type_names(), vec!["Guest", "Member", "Premium"]);

    Ok(())
}
