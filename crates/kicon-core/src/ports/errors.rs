use thiserror::Error;

/// Failures talking to the registration backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Failures of the registration submission specifically.
///
/// A rejection carries the backend's own message so the form can surface it
/// verbatim; everything else is a transport-level problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{message}")]
    Rejected { message: String },

    #[error(transparent)]
    Backend(#[from] BackendError),
}
