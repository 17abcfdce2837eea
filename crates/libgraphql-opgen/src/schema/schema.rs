use crate::schema::SchemaBuilder;
use crate::types::GraphQLType;
use crate::types::TypeId;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Represents a fully validated and immutable GraphQL schema.
///
/// Every named type lives in a single declaration-ordered arena. Types refer
/// to one another by name, and a [`TypeId`] is the position of a type within
/// that arena, so recursive and mutually-recursive schemas need no shared
/// ownership.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) query_type: TypeId,
    pub(crate) mutation_type: Option<TypeId>,
    pub(crate) possible_types: HashMap<TypeId, Vec<TypeId>>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    /// Returns an [`IndexMap<String, GraphQLType>`] containing all types
    /// defined within this [`Schema`] in the order they were defined.
    ///
    /// [^note] This map includes both types defined while building this
    /// [`Schema`] as well as implicitly-defined, built-in types like
    /// [`GraphQLType::Bool`].
    pub fn all_types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }

    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn lookup_type(&self, type_name: &str) -> Option<(TypeId, &GraphQLType)> {
        self.types
            .get_full(type_name)
            .map(|(idx, _, type_)| (TypeId(idx), type_))
    }

    /// Returns this [`Schema`]'s Mutation root operation type (if one was
    /// defined).
    ///
    /// This factors in any `schema { mutation: ... }` override of the default
    /// `Mutation` type name.
    pub fn mutation_type(&self) -> Option<(TypeId, &GraphQLType)> {
        self.mutation_type.map(|type_id| (type_id, self.type_by_id(type_id)))
    }

    /// The concrete object types a value of the given type may resolve to.
    ///
    /// For a union these are its members in declaration order. For an
    /// interface these are the object types that implement it (directly or
    /// through another interface) in type-definition order. Every other kind
    /// of type has no possible types.
    pub fn possible_types(&self, type_id: TypeId) -> &[TypeId] {
        self.possible_types
            .get(&type_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns this [`Schema`]'s Query root operation type.
    ///
    /// This factors in any `schema { query: ... }` override of the default
    /// `Query` type name.
    pub fn query_type(&self) -> (TypeId, &GraphQLType) {
        (self.query_type, self.type_by_id(self.query_type))
    }

    /// Look up a type by its [`TypeId`].
    ///
    /// [`TypeId`]s are only meaningful for the [`Schema`] that produced them;
    /// passing an id obtained from a different schema panics.
    pub fn type_by_id(&self, type_id: TypeId) -> &GraphQLType {
        &self.types[type_id.index()]
    }

    pub fn type_id(&self, type_name: &str) -> Option<TypeId> {
        self.types.get_index_of(type_name).map(TypeId)
    }
}
