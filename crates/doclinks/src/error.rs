use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkTableError {
    #[error("Link table JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read link table '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
