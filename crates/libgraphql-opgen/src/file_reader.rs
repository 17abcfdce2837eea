use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a schema file into memory as UTF-8 text.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::PathIsNotAFile(file_path.to_path_buf()));
    }

    std::fs::read_to_string(file_path).map_err(|err| {
        let file_path = file_path.to_path_buf();
        match err.kind() {
            std::io::ErrorKind::InvalidData =>
                ReadContentError::FileDecodeError { file_path },
            _ => ReadContentError::FileReadError { file_path, err },
        }
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Schema file {file_path:?} is not valid utf-8")]
    FileDecodeError {
        file_path: PathBuf,
    },

    #[error("Failed to read schema file {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
