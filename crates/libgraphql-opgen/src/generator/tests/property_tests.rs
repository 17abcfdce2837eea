use crate::generator::DocumentAssembler;
use crate::generator::GeneratedDocument;
use crate::generator::GeneratorConfig;
use crate::generator::OperationKind;
use crate::generator::SelectionNode;
use crate::generator::VariableRegistry;
use crate::generator::tests::test_utils;
use crate::schema::Schema;
use proptest::prelude::*;
use std::collections::HashSet;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (proptest::option::of(1usize..6), any::<bool>(), any::<bool>())
        .prop_map(|(depth_limit, include_cross_references, include_deprecated)| {
            // Cross references are only valid with a depth limit.
            let depth_limit = match (depth_limit, include_cross_references) {
                (None, true) => Some(3),
                (depth_limit, _) => depth_limit,
            };
            GeneratorConfig::new()
                .with_depth_limit(depth_limit)
                .with_include_cross_references(include_cross_references)
                .with_include_deprecated_fields(include_deprecated)
        })
}

/// One entered type along a selection path, charged the same way the
/// traversal charges it.
struct PathFrame {
    charged: bool,
    free_polymorphic: bool,
    type_name: String,
}

#[derive(Default)]
struct PathStats {
    bound_variables: Vec<String>,
    max_charged: usize,
    type_repeats_on_path: bool,
}

fn walk_paths(
    schema: &Schema,
    owner_type_name: &str,
    node: &SelectionNode,
    frames: &mut Vec<PathFrame>,
    stats: &mut PathStats,
) {
    stats.bound_variables.extend(
        node.arguments().iter().map(|arg| arg.variable_name.to_owned()),
    );

    let frame = match node {
        SelectionNode::Scalar { .. } => return,

        SelectionNode::Object { name, .. } => {
            let (_, owner_type) = schema.lookup_type(owner_type_name)
                .expect("owner type exists");
            let field = &owner_type.fields().expect("owner has fields")[name.as_str()];
            let type_name = field.type_annotation()
                .innermost_named_type_annotation()
                .graphql_type_name();
            let (_, field_type) = schema.lookup_type(type_name)
                .expect("field type exists");

            let (charged, free_polymorphic) =
                if frames.is_empty() {
                    (true, false)
                } else if field_type.kind().is_polymorphic() {
                    let free = !frames.iter().any(|frame| frame.free_polymorphic);
                    (!free, free)
                } else {
                    (true, false)
                };
            PathFrame { charged, free_polymorphic, type_name: type_name.to_string() }
        },

        SelectionNode::InlineFragment { type_condition, .. } => PathFrame {
            charged: false,
            free_polymorphic: false,
            type_name: type_condition.to_owned(),
        },
    };

    if frames.iter().any(|entered| entered.type_name == frame.type_name) {
        stats.type_repeats_on_path = true;
    }
    let child_owner = frame.type_name.to_owned();
    frames.push(frame);
    let charged = frames.iter().filter(|frame| frame.charged).count();
    stats.max_charged = stats.max_charged.max(charged);

    for child in node.children() {
        walk_paths(schema, &child_owner, child, frames, stats);
    }
    frames.pop();
}

fn path_stats(schema: &Schema, doc: &GeneratedDocument) -> PathStats {
    let root_type_name = match doc.operation_kind() {
        OperationKind::Query => schema.query_type().1.name(),
        OperationKind::Mutation => schema.mutation_type().expect("mutation type").1.name(),
    };
    let mut stats = PathStats::default();
    walk_paths(schema, root_type_name, doc.root(), &mut vec![], &mut stats);
    stats
}

fn has_empty_selection(node: &SelectionNode) -> bool {
    match node {
        SelectionNode::Scalar { .. } => false,
        SelectionNode::InlineFragment { children, .. }
        | SelectionNode::Object { children, .. } =>
            children.is_empty() || children.iter().any(has_empty_selection),
    }
}

#[test]
fn cross_references_repeat_types_only_when_enabled() {
    let schema = test_utils::sample_schema();
    for (depth_limit, include_cross_references) in [
        (None, false),
        (Some(2), false),
        (Some(4), false),
        (Some(4), true),
    ] {
        let config = GeneratorConfig::new()
            .with_depth_limit(depth_limit)
            .with_include_cross_references(include_cross_references);
        let documents = DocumentAssembler::new(&schema, config)
            .expect("valid config")
            .generate_documents();
        let user = documents.queries.get("user").expect("user query");

        assert_eq!(
            path_stats(&schema, user).type_repeats_on_path,
            include_cross_references,
            "depth_limit={depth_limit:?}",
        );
    }
}

proptest! {
    #[test]
    fn generation_is_deterministic(config in config_strategy()) {
        let schema = test_utils::sample_schema();
        let first = test_utils::generate(&schema, config.to_owned());
        let second = test_utils::generate(&schema, config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn documents_respect_structural_invariants(config in config_strategy()) {
        let schema = test_utils::sample_schema();
        let assembler = DocumentAssembler::new(&schema, config.to_owned())
            .expect("valid config");
        let documents = assembler.generate_documents();
        prop_assert!(documents.errors.is_empty());

        for doc in documents.queries.values().chain(documents.mutations.values()) {
            prop_assert!(!has_empty_selection(doc.root()));

            let names = doc.variables()
                .iter()
                .map(|var_def| var_def.name())
                .collect::<HashSet<_>>();
            prop_assert_eq!(names.len(), doc.variables().len());

            let stats = path_stats(&schema, doc);
            if let Some(depth_limit) = config.depth_limit() {
                prop_assert!(stats.max_charged <= depth_limit);
            }
            if stats.type_repeats_on_path {
                prop_assert!(config.include_cross_references());
                prop_assert!(config.depth_limit().is_some());
            }

            for variable_name in &stats.bound_variables {
                let declarations = doc.variables()
                    .iter()
                    .filter(|var_def| var_def.name() == variable_name)
                    .count();
                prop_assert_eq!(declarations, 1);
            }
            prop_assert_eq!(stats.bound_variables.len(), doc.variables().len());
        }

        prop_assert_eq!(
            documents.queries.contains_key("members"),
            config.include_deprecated_fields(),
        );
        prop_assert_eq!(
            documents.mutations.contains_key("sendMessage"),
            config.include_deprecated_fields(),
        );
    }

    #[test]
    fn variable_names_are_always_unique(
        argument_names in proptest::collection::vec("[ab][ab1]{0,2}", 1..40),
    ) {
        let mut registry = VariableRegistry::new();
        let string_type = test_utils::named_annotation("String", true);
        let mut seen_arguments = HashSet::new();
        let mut allocated = HashSet::new();

        for argument_name in &argument_names {
            let variable_name = registry.allocate(argument_name, &string_type);
            prop_assert!(variable_name.starts_with(argument_name.as_str()));
            if seen_arguments.insert(argument_name.to_owned())
                && !allocated.contains(argument_name) {
                prop_assert_eq!(&variable_name, argument_name);
            }
            prop_assert!(allocated.insert(variable_name));
        }
        prop_assert_eq!(registry.len(), argument_names.len());
    }
}
