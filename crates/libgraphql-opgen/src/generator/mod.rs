//! Synthesis of complete operation documents from a [`Schema`](crate::schema::Schema).
//!
//! [`DocumentAssembler`] drives one run per root Query/Mutation field. Each
//! run walks the type graph with a [`SelectionExpander`], which consults a
//! fresh [`TraversalContext`] to bound recursion and hoists field arguments
//! into operation variables through a [`VariableRegistry`]. The resulting
//! [`GeneratedDocument`] tree is rendered to text by the
//! [`OperationFormatter`].

mod document_assembler;
mod generated_document;
mod generator_config;
mod generator_error;
mod operation_formatter;
mod operation_kind;
mod selection_expander;
mod selection_node;
mod traversal_context;
mod variable_registry;

pub use document_assembler::DocumentAssembler;
pub use document_assembler::GeneratedDocuments;
pub use document_assembler::GeneratedOperations;
pub use generated_document::GeneratedDocument;
pub use generated_document::VariableDefinition;
pub use generator_config::GeneratorConfig;
pub use generator_error::ConfigurationError;
pub use generator_error::GeneratorError;
pub use operation_formatter::OperationFormatter;
pub use operation_kind::OperationKind;
pub use selection_expander::SelectionExpander;
pub use selection_node::ArgumentBinding;
pub use selection_node::SelectionNode;
pub use traversal_context::BoundaryKind;
pub use traversal_context::TraversalContext;
pub use variable_registry::VariableRegistry;

#[cfg(test)]
mod tests;
