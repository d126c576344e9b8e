//! Error taxonomy for a module run.

use thiserror::Error;

/// Errors that end a module run with a failed result.
#[derive(Error, Debug)]
pub enum ModuleError {
    /// The argument block did not match the parameter schema.
    #[error("{0}")]
    InvalidArguments(String),

    /// The args file handed over by Ansible could not be read.
    #[error("failed to read module arguments from {path}: {source}")]
    ArgsFile {
        path: String,
        source: std::io::Error,
    },

    /// The args file was not a JSON object.
    #[error("module arguments are not valid JSON: {0}")]
    ArgsJson(#[from] serde_json::Error),

    /// The Bodhi client could not be set up on this host.
    #[error("the bodhi client could not be initialized: {0}")]
    ClientUnavailable(String),

    /// Bodhi answered the request with an `errors` payload.
    #[error("bodhi rejected the request: {errors}")]
    RemoteRejected { errors: serde_json::Value },

    /// Transport, auth or decoding failure talking to Bodhi.
    #[error(transparent)]
    Remote(#[from] anyhow::Error),
}

impl ModuleError {
    /// Value reported as `msg` in the failed result.
    ///
    /// Rejections carry the server's `errors` verbatim; everything else is text.
    pub fn failure_message(&self) -> serde_json::Value {
        match self {
            ModuleError::RemoteRejected { errors } => errors.clone(),
            ModuleError::Remote(err) => serde_json::Value::String(format!("{:#}", err)),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}
