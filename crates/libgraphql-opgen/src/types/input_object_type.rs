use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// Represents an
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
///
/// Input objects never appear in a selection set; they are kept so that
/// parameter types resolve and so that misuse as an output type can be
/// reported.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fields: IndexMap<String, TypeAnnotation>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// A map from input field name to its declared type.
    pub fn fields(&self) -> &IndexMap<String, TypeAnnotation> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
