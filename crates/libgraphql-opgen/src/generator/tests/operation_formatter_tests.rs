use crate::generator::ArgumentBinding;
use crate::generator::GeneratedDocument;
use crate::generator::OperationFormatter;
use crate::generator::OperationKind;
use crate::generator::SelectionNode;
use crate::generator::VariableDefinition;
use crate::generator::tests::test_utils;

fn scalar(name: &str) -> SelectionNode {
    SelectionNode::Scalar {
        name: name.to_string(),
        arguments: vec![],
    }
}

#[test]
fn document_without_variables_omits_parentheses() {
    let doc = GeneratedDocument {
        operation_kind: OperationKind::Query,
        operation_name: "ping".to_string(),
        root: scalar("ping"),
        variables: vec![],
    };
    assert_eq!(OperationFormatter::new().format(&doc), "query ping{\n    ping\n}");
}

#[test]
fn nested_objects_and_fragments_are_indented_per_level() {
    let doc = GeneratedDocument {
        operation_kind: OperationKind::Mutation,
        operation_name: "save".to_string(),
        root: SelectionNode::Object {
            name: "save".to_string(),
            arguments: vec![ArgumentBinding {
                argument_name: "input".to_string(),
                variable_name: "input".to_string(),
            }],
            children: vec![
                scalar("id"),
                SelectionNode::Object {
                    name: "result".to_string(),
                    arguments: vec![],
                    children: vec![SelectionNode::InlineFragment {
                        type_condition: "Saved".to_string(),
                        children: vec![scalar("at")],
                    }],
                },
            ],
        },
        variables: vec![VariableDefinition {
            name: "input".to_string(),
            type_annotation: test_utils::named_annotation("String", false),
        }],
    };

    assert_eq!(OperationFormatter::new().format(&doc), concat!(
        "mutation save($input: String!){\n",
        "    save(input: $input){\n",
        "        id\n",
        "        result{\n",
        "            ... on Saved {\n",
        "                at\n",
        "            }\n",
        "        }\n",
        "    }\n",
        "}",
    ));
}

#[test]
fn multiple_arguments_are_comma_separated() {
    let doc = GeneratedDocument {
        operation_kind: OperationKind::Query,
        operation_name: "page".to_string(),
        root: SelectionNode::Scalar {
            name: "page".to_string(),
            arguments: vec![
                ArgumentBinding {
                    argument_name: "first".to_string(),
                    variable_name: "first".to_string(),
                },
                ArgumentBinding {
                    argument_name: "after".to_string(),
                    variable_name: "after1".to_string(),
                },
            ],
        },
        variables: vec![],
    };

    assert_eq!(
        OperationFormatter::new().format(&doc),
        "query page{\n    page(first: $first, after: $after1)\n}",
    );
}
