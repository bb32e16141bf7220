//! Error type shared by the storage/cookie ports and the bootstrap reader.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the UI. The bootstrap boundary logs them and degrades
//! to "no session", which sends the user back through login.

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("persistent storage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed for `{key}`: {message}")]
    Storage { key: String, message: String },
    #[error("cookie access failed: {0}")]
    Cookie(String),
    #[error("malformed JSON under `{key}`: {source}")]
    MalformedJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed handoff payload: {0}")]
    MalformedHandoff(#[source] serde_json::Error),
    #[error("handoff payload carries no token")]
    MissingToken,
}
