use crate::ast;
use crate::loc;
use indexmap::IndexMap;

/// Represents a directive annotation (e.g. `@deprecated(reason: "...")`)
/// applied to some element of the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::schema::Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directive_name: String,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, ast::schema::Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directive_name(&self) -> &str {
        self.directive_name.as_str()
    }

    pub(crate) fn from_ast(
        annotated_item_srcloc: &loc::SourceLocation,
        directives: &[ast::schema::Directive],
    ) -> Vec<Self> {
        directives.iter().map(|ast_annot| {
            let mut arguments = IndexMap::new();
            for (arg_name, arg_value) in ast_annot.arguments.iter() {
                arguments.insert(arg_name.to_string(), arg_value.to_owned());
            }
            DirectiveAnnotation {
                arguments,
                def_location:
                    annotated_item_srcloc.with_ast_position(&ast_annot.position),
                directive_name: ast_annot.name.to_string(),
            }
        }).collect()
    }
}
