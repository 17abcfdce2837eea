use crate::generator::OperationKind;
use thiserror::Error;

/// A [`GeneratorConfig`](crate::generator::GeneratorConfig) that cannot be
/// used to generate documents. Reported before any expansion starts.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigurationError {
    #[error(
        "Including cross references requires a depth limit; without one, \
        recursive types would expand forever"
    )]
    UnboundedCrossReferences,

    #[error("The depth limit must be at least 1 to select the root field's type")]
    ZeroDepthLimit,
}

/// A failure to generate the document for a single root field.
///
/// These never abort a whole generation run. Sibling root fields still
/// produce their documents.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    #[error(
        "The `{root_field}` {operation_kind} returns the `{type_name}` type, \
        but no fields of that type could be selected"
    )]
    EmptyRootSelection {
        operation_kind: OperationKind,
        root_field: String,
        type_name: String,
    },

    #[error(
        "The `{root_field}` {operation_kind} selects `{}`, whose type \
        `{type_name}` is an input type and cannot be selected",
        path.join(" -> "),
    )]
    InvalidFieldType {
        operation_kind: OperationKind,
        root_field: String,
        path: Vec<String>,
        type_name: String,
    },

    #[error(
        "The `{root_field}` {operation_kind} selects `{}`, whose type \
        `{type_name}` is not defined in the schema",
        path.join(" -> "),
    )]
    UnresolvableTypeReference {
        operation_kind: OperationKind,
        root_field: String,
        path: Vec<String>,
        type_name: String,
    },
}
impl GeneratorError {
    pub fn operation_kind(&self) -> OperationKind {
        match self {
            Self::EmptyRootSelection { operation_kind, .. }
            | Self::InvalidFieldType { operation_kind, .. }
            | Self::UnresolvableTypeReference { operation_kind, .. }
                => *operation_kind,
        }
    }

    /// Name of the root field whose document could not be generated.
    pub fn root_field(&self) -> &str {
        match self {
            Self::EmptyRootSelection { root_field, .. }
            | Self::InvalidFieldType { root_field, .. }
            | Self::UnresolvableTypeReference { root_field, .. }
                => root_field.as_str(),
        }
    }
}
