use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: Box<PathBuf>,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(
        file: impl AsRef<Path>,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            col: pos.column,
            file: Box::new(file.as_ref().to_path_buf()),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where some schema element was defined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceLocation {
    /// Built into GraphQL itself (e.g. the `Int` scalar).
    GraphQLBuiltIn,

    /// Loaded from a string that was not associated with any file.
    Schema,

    SchemaFile(FilePosition),
}
impl SourceLocation {
    pub(crate) fn from_file_path(file_path: Option<&Path>) -> Self {
        match file_path {
            Some(file_path) => Self::SchemaFile(FilePosition {
                col: 0,
                file: Box::new(file_path.to_path_buf()),
                line: 0,
            }),
            None => Self::Schema,
        }
    }

    /// Produce a new [`SourceLocation`] pointing at `pos` within the same
    /// source as `self`.
    pub(crate) fn with_ast_position(&self, pos: &graphql_parser::Pos) -> Self {
        match self {
            Self::GraphQLBuiltIn => Self::GraphQLBuiltIn,
            Self::Schema => Self::Schema,
            Self::SchemaFile(file_pos) =>
                Self::SchemaFile(FilePosition::from_pos(
                    file_pos.file.as_path(),
                    *pos,
                )),
        }
    }
}
impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql builtin>"),
            Self::Schema => write!(f, "<schema string>"),
            Self::SchemaFile(file_pos) => write!(f, "{file_pos}"),
        }
    }
}
