use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never completed.
    #[error("request failed: {0}")]
    Network(String),

    /// A body that should have been JSON did not parse.
    #[error("unexpected response body: {0}")]
    Malformed(String),

    /// The server answered with a non-2xx status.
    #[error("server answered with status {status}")]
    Server { status: u16, detail: Option<String> },
}

impl ClientError {
    /// Transport-class failures get a generic message and are logged.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Malformed(_))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
