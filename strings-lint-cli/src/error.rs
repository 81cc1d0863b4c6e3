use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] strings_lint::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
