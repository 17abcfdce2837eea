use crate::generator::ConfigurationError;
use crate::generator::DocumentAssembler;
use crate::generator::GeneratorConfig;
use crate::generator::GeneratorError;
use crate::generator::OperationKind;
use crate::generator::tests::test_utils;
use rayon::prelude::*;

mod golden_user_documents {
    use super::*;

    fn user_document(config: GeneratorConfig) -> String {
        let schema = test_utils::sample_schema();
        let operations = test_utils::generate(&schema, config);
        assert!(operations.errors.is_empty(), "{:?}", operations.errors);
        operations.queries.get("user")
            .expect("a `user` query is generated")
            .to_owned()
    }

    #[test]
    fn unbounded() {
        assert_eq!(
            user_document(GeneratorConfig::new()),
            include_str!("fixtures/user_unbounded.graphql"),
        );
    }

    #[test]
    fn depth_1() {
        assert_eq!(
            user_document(GeneratorConfig::new().with_depth_limit(Some(1))),
            include_str!("fixtures/user_depth_1.graphql"),
        );
    }

    #[test]
    fn depth_1_with_deprecated_fields() {
        assert_eq!(
            user_document(
                GeneratorConfig::new()
                    .with_depth_limit(Some(1))
                    .with_include_deprecated_fields(true),
            ),
            include_str!("fixtures/user_depth_1_with_deprecated.graphql"),
        );
    }

    #[test]
    fn depth_2() {
        assert_eq!(
            user_document(GeneratorConfig::new().with_depth_limit(Some(2))),
            include_str!("fixtures/user_depth_2.graphql"),
        );
    }

    #[test]
    fn depth_4_with_cross_references() {
        assert_eq!(
            user_document(
                GeneratorConfig::new()
                    .with_depth_limit(Some(4))
                    .with_include_cross_references(true),
            ),
            include_str!("fixtures/user_depth_4_with_cross_references.graphql"),
        );
    }
}

#[test]
fn root_field_returning_scalar_renders_bare_field() {
    let schema = test_utils::sample_schema();
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert_eq!(
        operations.mutations.get("signin").map(String::as_str),
        Some(concat!(
            "mutation signin($email: String!, $password: String!){\n",
            "    signin(email: $email, password: $password)\n",
            "}",
        )),
    );
}

#[test]
fn depth_limit_applies_to_mutations() {
    let schema = test_utils::sample_schema();
    let operations = test_utils::generate(
        &schema,
        GeneratorConfig::new().with_depth_limit(Some(1)),
    );

    let signup = operations.mutations.get("signup").expect("signup is generated");
    assert!(!signup.contains("createdAt"));
    assert_eq!(signup, concat!(
        "mutation signup($username: String!, $email: String!, $password: String!){\n",
        "    signup(username: $username, email: $email, password: $password){\n",
        "        token\n",
        "    }\n",
        "}",
    ));
}

#[test]
fn deprecated_root_fields_are_skipped_by_default() {
    let schema = test_utils::sample_schema();
    let operations = test_utils::generate(
        &schema,
        GeneratorConfig::new().with_depth_limit(Some(1)),
    );

    assert_eq!(operations.queries.keys().collect::<Vec<_>>(), vec!["user"]);
    assert_eq!(
        operations.mutations.keys().collect::<Vec<_>>(),
        vec!["signin", "signup"],
    );
}

#[test]
fn deprecated_root_fields_are_included_on_request() {
    let schema = test_utils::sample_schema();
    let operations = test_utils::generate(
        &schema,
        GeneratorConfig::new()
            .with_depth_limit(Some(1))
            .with_include_deprecated_fields(true),
    );

    assert_eq!(
        operations.queries.get("members").map(String::as_str),
        Some("query members{\n    members{\n        address\n    }\n}"),
    );
    assert_eq!(
        operations.mutations.get("sendMessage").map(String::as_str),
        Some(concat!(
            "mutation sendMessage($to: String!, $message: String!){\n",
            "    sendMessage(to: $to, message: $message)\n",
            "}",
        )),
    );
    assert_eq!(
        operations.mutations.keys().collect::<Vec<_>>(),
        vec!["signin", "signup", "sendMessage"],
    );
}

#[test]
fn cross_references_require_depth_limit() {
    let schema = test_utils::sample_schema();
    let result = DocumentAssembler::new(
        &schema,
        GeneratorConfig::new().with_include_cross_references(true),
    );
    assert_eq!(result.err(), Some(ConfigurationError::UnboundedCrossReferences));
}

#[test]
fn zero_depth_limit_is_rejected() {
    let schema = test_utils::sample_schema();
    let result = DocumentAssembler::new(
        &schema,
        GeneratorConfig::new().with_depth_limit(Some(0)),
    );
    assert_eq!(result.err(), Some(ConfigurationError::ZeroDepthLimit));
}

#[test]
fn schema_without_mutation_type_generates_no_mutations() {
    let schema = test_utils::build_schema("type Query { ping: String }");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert!(operations.mutations.is_empty());
    assert_eq!(
        operations.queries.get("ping").map(String::as_str),
        Some("query ping{\n    ping\n}"),
    );
}

#[test]
fn renamed_root_operation_types_are_used() {
    let schema = test_utils::build_schema("
        schema {
            query: RootQuery
            mutation: RootMutation
        }
        type RootQuery { now: String }
        type RootMutation { touch(id: ID!): Boolean }
        type Query { ignored: String }
    ");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert_eq!(operations.queries.keys().collect::<Vec<_>>(), vec!["now"]);
    assert_eq!(
        operations.mutations.get("touch").map(String::as_str),
        Some("mutation touch($id: ID!){\n    touch(id: $id)\n}"),
    );
}

#[test]
fn unresolvable_type_reference_only_fails_its_root_field() {
    let schema = test_utils::build_schema("
        type Query {
            broken: Wrapper
            fine: String
        }
        type Wrapper {
            ok: Int
            missing: Phantom
        }
    ");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert_eq!(operations.queries.keys().collect::<Vec<_>>(), vec!["fine"]);
    assert_eq!(operations.errors, vec![
        GeneratorError::UnresolvableTypeReference {
            operation_kind: OperationKind::Query,
            root_field: "broken".to_string(),
            path: vec!["Query.broken".to_string(), "Wrapper.missing".to_string()],
            type_name: "Phantom".to_string(),
        },
    ]);
}

#[test]
fn unresolvable_root_field_type() {
    let schema = test_utils::build_schema("type Query { ghost: [Ghost!] }");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert!(operations.queries.is_empty());
    assert_eq!(operations.errors, vec![
        GeneratorError::UnresolvableTypeReference {
            operation_kind: OperationKind::Query,
            root_field: "ghost".to_string(),
            path: vec!["Query.ghost".to_string()],
            type_name: "Ghost".to_string(),
        },
    ]);
}

#[test]
fn root_field_with_nothing_selectable_is_an_error() {
    let schema = test_utils::build_schema("
        type Query {
            loop: Loop
            other: String
        }
        type Loop {
            again: Loop
        }
    ");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert_eq!(operations.queries.keys().collect::<Vec<_>>(), vec!["other"]);
    assert_eq!(operations.errors, vec![
        GeneratorError::EmptyRootSelection {
            operation_kind: OperationKind::Query,
            root_field: "loop".to_string(),
            type_name: "Loop".to_string(),
        },
    ]);
}

#[test]
fn interfaces_expand_into_fragments_per_implementation() {
    let schema = test_utils::build_schema("
        type Query {
            node(id: ID!): Node
        }
        interface Node {
            id: ID!
        }
        type Photo implements Node {
            id: ID!
            url(size: Int): String
        }
        type Person implements Node {
            id: ID!
            name: String
        }
    ");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert_eq!(
        operations.queries.get("node").map(String::as_str),
        Some(concat!(
            "query node($size: Int, $id: ID!){\n",
            "    node(id: $id){\n",
            "        ... on Photo {\n",
            "            id\n",
            "            url(size: $size)\n",
            "        }\n",
            "        ... on Person {\n",
            "            id\n",
            "            name\n",
            "        }\n",
            "    }\n",
            "}",
        )),
    );
}

#[test]
fn variable_names_skip_literal_suffixed_arguments() {
    let schema = test_utils::build_schema("
        type Query {
            search(language: String): Result
        }
        type Result {
            title(language1: String): String
            body(language: String): String
        }
    ");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    assert_eq!(
        operations.queries.get("search").map(String::as_str),
        Some(concat!(
            "query search($language1: String, $language: String, $language2: String){\n",
            "    search(language: $language2){\n",
            "        title(language1: $language1)\n",
            "        body(language: $language)\n",
            "    }\n",
            "}",
        )),
    );
}

#[test]
fn variable_numbering_restarts_for_each_document() {
    let schema = test_utils::build_schema("
        type Query {
            first(language: String): String
            second(language: String): String
        }
    ");
    let operations = test_utils::generate(&schema, GeneratorConfig::new());

    for (name, doc) in &operations.queries {
        assert_eq!(
            doc,
            &format!("query {name}($language: String){{\n    {name}(language: $language)\n}}"),
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let schema = test_utils::sample_schema();
    let config = GeneratorConfig::new()
        .with_depth_limit(Some(3))
        .with_include_cross_references(true);

    let first = test_utils::generate(&schema, config.to_owned());
    let second = test_utils::generate(&schema, config);
    assert_eq!(first, second);
}

#[test]
fn parallel_generation_matches_sequential() {
    let schema = test_utils::sample_schema();
    let assembler = DocumentAssembler::new(
        &schema,
        GeneratorConfig::new()
            .with_depth_limit(Some(4))
            .with_include_cross_references(true)
            .with_include_deprecated_fields(true),
    ).expect("valid config");
    let sequential = assembler.generate();

    for operation_kind in [OperationKind::Query, OperationKind::Mutation] {
        let root_fields = assembler.root_fields(operation_kind);
        let parallel = root_fields
            .par_iter()
            .map(|field| {
                assembler.generate_document(operation_kind, field)
                    .map(|doc| (field.name().to_string(), doc))
            })
            .collect::<Result<Vec<_>, _>>()
            .expect("every root field generates");

        let formatter = crate::generator::OperationFormatter::new();
        let parallel = parallel.into_iter()
            .map(|(name, doc)| (name, formatter.format(&doc)))
            .collect::<indexmap::IndexMap<_, _>>();
        assert_eq!(&parallel, sequential.get(operation_kind));
    }
}
