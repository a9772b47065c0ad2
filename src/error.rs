use std::path::PathBuf;

use thiserror::Error;

/// Failures of the host-facing parts of the crate: loading a catalog and
/// persisting the score. Matching, scoring and feedback never fail.
#[derive(Debug, Error)]
pub enum KitchenError {
    #[error("catalog file not found at: {0:?}")]
    CatalogNotFound(PathBuf),

    #[error("column '{0}' not found in catalog header")]
    MissingColumn(&'static str),

    #[error("failed to read catalog record at row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("unknown difficulty '{value}' for recipe '{recipe}'")]
    UnknownDifficulty { recipe: String, value: String },

    #[error("recipe '{0}' has no ingredients")]
    EmptyRecipe(String),

    #[error("recipe '{0}' is declared more than once")]
    DuplicateRecipe(String),

    #[error("no recipes loaded from {0:?}")]
    EmptyCatalog(PathBuf),

    #[error("score file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("score file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = KitchenError> = std::result::Result<T, E>;
