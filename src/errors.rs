use std::io;

use thiserror::Error;

use crate::types::FieldName;

/// Error type for record parsing, field extraction, and sink IO failures.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("line {line} is not a valid record: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: required field '{field}' is missing")]
    FieldMissing { line: usize, field: FieldName },
    #[error("line {line}: field '{field}' has an unexpected type: {details}")]
    FieldType {
        line: usize,
        field: FieldName,
        details: String,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
