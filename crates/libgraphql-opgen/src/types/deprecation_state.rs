use crate::DirectiveAnnotation;
use crate::ast;

/// The reason reported for a `@deprecated` annotation that omits one.
///
/// https://spec.graphql.org/October2021/#sec--deprecated
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Debug, PartialEq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a Vec<DirectiveAnnotation>> for DeprecationState<'a> {
    fn from(value: &'a Vec<DirectiveAnnotation>) -> DeprecationState<'a> {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.directive_name() == "deprecated"
        });
        match directive_annot {
            Some(directive_annot) => {
                let reason = match directive_annot.arguments().get("reason") {
                    Some(ast::schema::Value::String(reason)) => reason.as_str(),
                    _ => DEFAULT_DEPRECATION_REASON,
                };
                DeprecationState::Deprecated(reason)
            },
            None => DeprecationState::NotDeprecated,
        }
    }
}
