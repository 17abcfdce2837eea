use crate::generator::ArgumentBinding;
use crate::generator::GeneratedDocument;
use crate::generator::SelectionNode;

const INDENT: &str = "    ";

/// Renders a [`GeneratedDocument`] as GraphQL source text.
///
/// ```text
/// query user($language: String, $id: Int!){
///     user(id: $id){
///         details{
///             ... on Guest {
///                 region(language: $language)
///             }
///         }
///     }
/// }
/// ```
///
/// Each nesting level is indented by four spaces and the output has no
/// trailing newline.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperationFormatter;
impl OperationFormatter {
    pub fn format(&self, document: &GeneratedDocument) -> String {
        let mut lines = vec![format!(
            "{} {}{}{{",
            document.operation_kind(),
            document.operation_name(),
            Self::format_variable_definitions(document),
        )];
        Self::format_node(document.root(), 1, &mut lines);
        lines.push("}".to_string());
        lines.join("\n")
    }

    pub fn new() -> Self {
        Self
    }

    fn format_arguments(arguments: &[ArgumentBinding]) -> String {
        if arguments.is_empty() {
            return String::new();
        }
        let arguments = arguments.iter()
            .map(|arg| format!("{}: ${}", arg.argument_name, arg.variable_name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("({arguments})")
    }

    fn format_node(node: &SelectionNode, level: usize, lines: &mut Vec<String>) {
        let indent = INDENT.repeat(level);
        let (opener, children) = match node {
            SelectionNode::Scalar { name, arguments } => {
                lines.push(format!("{indent}{name}{}", Self::format_arguments(arguments)));
                return;
            },

            SelectionNode::Object { name, arguments, children } =>
                (format!("{name}{}{{", Self::format_arguments(arguments)), children),

            SelectionNode::InlineFragment { type_condition, children } =>
                (format!("... on {type_condition} {{"), children),
        };

        lines.push(format!("{indent}{opener}"));
        for child in children {
            Self::format_node(child, level + 1, lines);
        }
        lines.push(format!("{indent}}}"));
    }

    fn format_variable_definitions(document: &GeneratedDocument) -> String {
        if document.variables().is_empty() {
            return String::new();
        }
        let definitions = document.variables().iter()
            .map(|var_def| var_def.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("({definitions})")
    }
}
