use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use indexmap::IndexMap;
use libgraphql_opgen::generator::DocumentAssembler;
use libgraphql_opgen::generator::GeneratorConfig;
use libgraphql_opgen::generator::OperationKind;
use libgraphql_opgen::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        help="Maximum number of object levels to select below each \
             operation, counting the root field's own type.",
        long,
    )]
    depth_limit: Option<usize>,

    #[arg(
        help="Directory to write the `queries/` and `mutations/` documents \
             into.",
        long,
    )]
    dest_dir: PathBuf,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Allow a type to be selected again inside its own selection \
             (requires --depth-limit).",
        long,
    )]
    include_cross_references: bool,

    #[arg(
        help="Select fields marked with `@deprecated`.",
        long,
    )]
    include_deprecated_fields: bool,

    #[arg(
        default_value="gql",
        help="File extension of the written operation documents.",
        long,
    )]
    output_ext: String,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        name="SCHEMA_FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl GenerateCmd {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_depth_limit(self.depth_limit)
            .with_include_cross_references(self.include_cross_references)
            .with_include_deprecated_fields(self.include_deprecated_fields)
    }

    /// Find all GraphQL files recursively located at or under each path
    /// passed as an arg.
    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan for schema files at/under {}",
                    path.display(),
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let matches_ext = entry_path.extension()
                    .map(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()))
                    .unwrap_or(false);
                if matches_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single file named explicitly is loaded even if its extension
        // isn't one of `graphql_file_exts`.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Loading {only_path:#?} even though it doesn't match any of \
                the --graphql-file-exts ({}).",
                self.graphql_file_exts.join(", "),
            );
            file_paths.push(only_path.to_owned());
        }

        if file_paths.is_empty() {
            anyhow::bail!("No GraphQL schema files were found");
        }

        log::debug!("Found {} GraphQL schema files.", file_paths.len());
        Ok(file_paths)
    }

    async fn write_documents(
        &self,
        operation_kind: OperationKind,
        documents: &IndexMap<String, String>,
    ) -> anyhow::Result<usize> {
        if documents.is_empty() {
            return Ok(0);
        }

        let dir = self.dest_dir.join(output_subdir(operation_kind));
        tokio::fs::create_dir_all(&dir).await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        for (field_name, document) in documents {
            let file_path = output_file_path(&dir, field_name, &self.output_ext);
            tokio::fs::write(&file_path, document).await
                .with_context(|| format!("Failed to write {}", file_path.display()))?;
            log::debug!("Wrote {operation_kind} `{field_name}` to {file_path:#?}.");
        }

        Ok(documents.len())
    }

    async fn try_run(&self) -> anyhow::Result<CommandResult> {
        let file_paths = self.find_schema_files()?;
        let schema = SchemaBuilder::new()
            .load_files(file_paths)?
            .build()?;

        let assembler = DocumentAssembler::new(&schema, self.config())?;
        let operations = assembler.generate();

        let num_queries =
            self.write_documents(OperationKind::Query, &operations.queries).await?;
        let num_mutations =
            self.write_documents(OperationKind::Mutation, &operations.mutations).await?;

        let result = CommandResult::success(format_args!(
            "{} Wrote {num_queries} queries and {num_mutations} mutations to {}.",
            output_utils::GREEN_CHECK,
            self.dest_dir.display(),
        ));

        if operations.errors.is_empty() {
            Ok(result)
        } else {
            Ok(result.with_partial_failure(format_args!(
                "{} Failed to generate {} operations:\n{}",
                output_utils::RED_X,
                operations.errors.len(),
                operations.errors.iter()
                    .map(|err| format!("  * {err}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            )))
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.try_run().await {
            Ok(result) => result,
            Err(err) => CommandResult::failure(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

fn output_file_path(dir: &Path, field_name: &str, ext: &str) -> PathBuf {
    dir.join(format!("{field_name}.{}", ext.trim_start_matches('.')))
}

fn output_subdir(operation_kind: OperationKind) -> &'static str {
    match operation_kind {
        OperationKind::Mutation => "mutations",
        OperationKind::Query => "queries",
    }
}
