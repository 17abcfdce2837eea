pub mod ast;
mod directive_annotation;
pub mod file_reader;
pub mod generator;
pub mod loc;
pub mod schema;
pub mod types;

pub use directive_annotation::DirectiveAnnotation;
