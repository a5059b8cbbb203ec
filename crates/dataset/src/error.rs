use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Reference data could not be loaded. Nothing is returned on error.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{table} is not valid JSON: {source}")]
    Json {
        table: &'static str,
        source: serde_json::Error,
    },

    #[error("{table} could not be parsed as CSV: {source}")]
    Csv {
        table: &'static str,
        source: csv::Error,
    },

    #[error("{table} has no header row")]
    MissingHeader { table: &'static str },

    #[error("{table} is missing required column `{column}`")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

/// A single CSV row whose field count does not match its header.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{table} line {line}: expected {expected} fields, found {found}")]
pub struct RowShapeError {
    pub table: &'static str,
    pub line: u64,
    pub expected: usize,
    pub found: usize,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoundingBoxError {
    #[error("bbox must be west,south,east,north (got {0} values)")]
    WrongArity(usize),

    #[error("bbox value `{0}` is not a number")]
    NotANumber(String),
}
