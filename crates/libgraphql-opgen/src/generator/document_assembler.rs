use crate::generator::ConfigurationError;
use crate::generator::GeneratedDocument;
use crate::generator::GeneratorConfig;
use crate::generator::GeneratorError;
use crate::generator::OperationFormatter;
use crate::generator::OperationKind;
use crate::generator::SelectionExpander;
use crate::generator::TraversalContext;
use crate::schema::Schema;
use crate::types::Field;
use indexmap::IndexMap;

/// Formatted operation documents keyed by root field name, in the order the
/// root fields are declared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedOperations {
    pub errors: Vec<GeneratorError>,
    pub mutations: IndexMap<String, String>,
    pub queries: IndexMap<String, String>,
}
impl GeneratedOperations {
    pub fn get(&self, operation_kind: OperationKind) -> &IndexMap<String, String> {
        match operation_kind {
            OperationKind::Mutation => &self.mutations,
            OperationKind::Query => &self.queries,
        }
    }
}

/// Same as [`GeneratedOperations`], but holding the unformatted trees.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneratedDocuments {
    pub errors: Vec<GeneratorError>,
    pub mutations: IndexMap<String, GeneratedDocument>,
    pub queries: IndexMap<String, GeneratedDocument>,
}

/// Generates one operation document per root Query and Mutation field.
///
/// Every root field gets its own [`TraversalContext`], so nothing (variable
/// numbering included) carries over from one document to the next. A root
/// field that fails to generate is reported in the result's `errors` while
/// the rest still generate.
#[derive(Clone, Debug)]
pub struct DocumentAssembler<'schema> {
    config: GeneratorConfig,
    expander: SelectionExpander<'schema>,
    formatter: OperationFormatter,
    schema: &'schema Schema,
}
impl<'schema> DocumentAssembler<'schema> {
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self) -> GeneratedOperations {
        let documents = self.generate_documents();
        let format_all = |docs: IndexMap<String, GeneratedDocument>| -> IndexMap<String, String> {
            docs.into_iter()
                .map(|(name, doc)| (name, self.formatter.format(&doc)))
                .collect()
        };
        GeneratedOperations {
            errors: documents.errors,
            mutations: format_all(documents.mutations),
            queries: format_all(documents.queries),
        }
    }

    /// Generate the document for a single root field of the `operation_kind`
    /// root type.
    pub fn generate_document(
        &self,
        operation_kind: OperationKind,
        root_field: &Field,
    ) -> Result<GeneratedDocument, GeneratorError> {
        tracing::debug!("Generating {operation_kind} `{}`", root_field.name());

        let mut context = TraversalContext::new(&self.config);
        let root = self.expander.expand_root_field(
            operation_kind,
            root_field.parent_type_name(),
            root_field,
            &mut context,
        )?;

        Ok(GeneratedDocument {
            operation_kind,
            operation_name: root_field.name().to_string(),
            root,
            variables: context.into_variables().into_definitions(),
        })
    }

    pub fn generate_documents(&self) -> GeneratedDocuments {
        let mut documents = GeneratedDocuments::default();
        for operation_kind in [OperationKind::Query, OperationKind::Mutation] {
            for root_field in self.root_fields(operation_kind) {
                match self.generate_document(operation_kind, root_field) {
                    Ok(doc) => {
                        let docs = match operation_kind {
                            OperationKind::Mutation => &mut documents.mutations,
                            OperationKind::Query => &mut documents.queries,
                        };
                        docs.insert(root_field.name().to_string(), doc);
                    },

                    Err(err) => {
                        tracing::warn!("{err}");
                        documents.errors.push(err);
                    },
                }
            }
        }
        documents
    }

    pub fn new(
        schema: &'schema Schema,
        config: GeneratorConfig,
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self {
            expander: SelectionExpander::new(schema, &config),
            config,
            formatter: OperationFormatter::new(),
            schema,
        })
    }

    /// The root fields a document will be generated for, in declaration
    /// order. Deprecated root fields are left out unless deprecated fields
    /// are included.
    pub fn root_fields(&self, operation_kind: OperationKind) -> Vec<&'schema Field> {
        let root_type = match operation_kind {
            OperationKind::Mutation => self.schema.mutation_type(),
            OperationKind::Query => Some(self.schema.query_type()),
        };
        let Some(fields) = root_type.and_then(|(_, type_)| type_.fields()) else {
            return vec![];
        };

        fields.values()
            .filter(|field| {
                self.config.include_deprecated_fields()
                    || !field.deprecation_state().is_deprecated()
            })
            .collect()
    }
}
