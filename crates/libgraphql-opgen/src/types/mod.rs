mod deprecation_state;
mod enum_type;
mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
mod interface_type;
mod interface_type_builder;
mod list_type_annotation;
mod named_type_annotation;
mod object_or_interface_type_data;
mod object_or_interface_type_trait;
mod object_or_interface_type_validator;
mod object_type;
mod object_type_builder;
mod parameter;
mod scalar_type;
mod type_annotation;
mod type_builder;
mod type_id;
mod types_map_builder;
mod union_type;
mod union_type_builder;
mod union_type_validator;

pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub use enum_type::EnumType;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use interface_type::InterfaceType;
pub(crate) use interface_type_builder::InterfaceTypeBuilder;
pub use list_type_annotation::ListTypeAnnotation;
pub use named_type_annotation::NamedTypeAnnotation;
use object_or_interface_type_data::ObjectOrInterfaceTypeData;
pub use object_or_interface_type_trait::ObjectOrInterfaceTypeTrait;
use object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
pub use object_type::ObjectType;
pub(crate) use object_type_builder::ObjectTypeBuilder;
pub use parameter::Parameter;
pub use scalar_type::ScalarType;
pub use type_annotation::TypeAnnotation;
pub(crate) use type_builder::TypeBuilder;
pub(crate) use type_builder::TypeBuilderHelpers;
pub use type_id::TypeId;
pub(crate) use types_map_builder::TypesMapBuilder;
pub use union_type::UnionType;
pub(crate) use union_type_builder::UnionTypeBuilder;
use union_type_validator::UnionTypeValidator;

#[cfg(test)]
mod tests;
