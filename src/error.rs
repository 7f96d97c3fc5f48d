#[derive(thiserror::Error, Debug)]
pub enum ToggleError {
    #[error("Toggle control #{id} not found in the document")]
    MissingControl { id: String },

    #[error("Document root element <{0}> not found")]
    MissingRoot(String),

    #[error("Window is not available")]
    NoWindow,

    #[error("Document is not available")]
    NoDocument,

    #[error("Invalid toggle configuration: {0}")]
    Conf(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Persisted store rejected the operation: {0}")]
    Rejected(String),
}

pub type ToggleResult<T> = Result<T, ToggleError>;
pub type StoreResult<T> = Result<T, StoreError>;
