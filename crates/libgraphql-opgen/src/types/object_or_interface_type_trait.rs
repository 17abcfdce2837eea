use crate::DirectiveAnnotation;
use crate::loc;
use crate::types::Field;
use indexmap::IndexMap;

/// Accessors shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
pub trait ObjectOrInterfaceTypeTrait {
    fn def_location(&self) -> &loc::SourceLocation;
    fn description(&self) -> Option<&str>;
    fn directives(&self) -> &Vec<DirectiveAnnotation>;
    fn fields(&self) -> &IndexMap<String, Field>;
    fn implements_interface(&self, interface_name: &str) -> bool;
    fn interface_names(&self) -> Vec<&str>;
    fn name(&self) -> &str;
}
