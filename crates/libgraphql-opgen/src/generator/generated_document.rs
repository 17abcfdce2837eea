use crate::generator::OperationKind;
use crate::generator::SelectionNode;
use crate::types::TypeAnnotation;

/// An operation-level variable declaration, rendered as `$name: Type`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl VariableDefinition {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The declared type of the argument this variable was hoisted from.
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
impl std::fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}: {}", self.name, self.type_annotation)
    }
}

/// The unformatted result of generating one root field's operation.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedDocument {
    pub(crate) operation_kind: OperationKind,
    pub(crate) operation_name: String,
    pub(crate) root: SelectionNode,
    pub(crate) variables: Vec<VariableDefinition>,
}
impl GeneratedDocument {
    pub fn operation_kind(&self) -> OperationKind {
        self.operation_kind
    }

    /// Operations are named after the root field they select.
    pub fn operation_name(&self) -> &str {
        self.operation_name.as_str()
    }

    pub fn root(&self) -> &SelectionNode {
        &self.root
    }

    /// Variable declarations in allocation order.
    pub fn variables(&self) -> &[VariableDefinition] {
        self.variables.as_slice()
    }
}
