use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeId;

#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeAnnotation {
    pub(crate) nullable: bool,
    pub(crate) ref_location: loc::SourceLocation,
    pub(crate) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look up the [`GraphQLType`] this annotation names.
    ///
    /// Returns `None` when the schema never defined a type by that name.
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<(TypeId, &'schema GraphQLType)> {
        schema.lookup_type(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
