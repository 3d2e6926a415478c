#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The remote system rejected the request and supplied a human-readable reason.
    #[error("{0}")]
    Application(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ReadError {
    /// The text to show the user, or `None` if only a generic message is appropriate.
    #[must_use]
    pub fn display_message(&self) -> Option<&str> {
        match self {
            ReadError::Application(message) => Some(message),
            ReadError::Storage(_) => None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DeleteError {
    #[error("{0}")]
    Application(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ReadError> for DeleteError {
    fn from(value: ReadError) -> Self {
        match value {
            ReadError::Application(message) => DeleteError::Application(message),
            ReadError::Storage(storage) => DeleteError::Storage(storage),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("no session")]
    NoSession,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}
