use crate::loc;
use crate::types::GraphQLTypeKind;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type declares that it implements \
        `{non_interface_type_name}`, but that type is not an interface"
    )]
    ImplementsNonInterfaceType {
        type_name: String,
        non_interface_type_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{undefined_interface_name}` interface, but no such type is defined"
    )]
    ImplementsUndefinedInterface {
        type_name: String,
        undefined_interface_name: String,
        loc: loc::SourceLocation,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input-type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parameter_name}` parameter was declared with the \
        `{outputonly_type_name}` type, which is not an input-compatible type."
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        parameter_name: String,
        outputonly_type_name: String,
    },

    #[error(
        "The `{operation_name}` root operation type must be an object type, \
        but `{type_name}` is a {type_kind} type"
    )]
    InvalidRootOperationTypeKind {
        operation_name: &'static str,
        type_kind: GraphQLTypeKind,
        type_name: String,
    },

    #[error(
        "Invalid union member type: The `{union_type_name}` type defines one \
        of its members as `{invalid_member_type_name}`, but this type is a \
        {invalid_member_type_kind} type and union members can only be object \
        types."
    )]
    InvalidUnionMemberTypeKind {
        location: loc::SourceLocation,
        union_type_name: String,
        invalid_member_type_kind: GraphQLTypeKind,
        invalid_member_type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface, \
        but does not define a field named `{field_name}`"
    )]
    MissingInterfaceSpecifiedField {
        def_location: loc::SourceLocation,
        field_name: String,
        interface_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type implements the `{interface_name}` interface \
        which implements `{missing_recursive_interface_name}`, therefore \
        `{type_name}` must also implement `{missing_recursive_interface_name}`"
    )]
    MissingRecursiveInterfaceImplementation {
        def_location: loc::SourceLocation,
        interface_name: String,
        missing_recursive_interface_name: String,
        type_name: String,
    },

    #[error("There is no type defined with the name `{undefined_type_name}`")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        undefined_type_name: String,
    },
}
