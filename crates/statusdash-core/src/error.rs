//! Error taxonomy shared by the progress bar and the dashboard.

/// Error type for every statusdash operation.
#[derive(Debug, thiserror::Error)]
pub enum DashError {
    /// Bad width or maximum value at construction/registration time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An attribute with this name is already registered.
    #[error("attribute '{0}' already exists")]
    DuplicateAttribute(String),

    /// The textual kind tag is not one of the recognized kinds.
    #[error("'{0}' is not a valid kind of attribute")]
    InvalidKind(String),

    /// No attribute with this name is registered.
    #[error("'{0}' is not a registered attribute")]
    UnknownAttribute(String),

    /// A bounded kind received a payload that is not a number.
    #[error("attribute '{name}' needs a numeric value, got '{value}'")]
    NonNumericValue { name: String, value: String },

    /// The display was already closed.
    #[error("display is not open")]
    NotOpen,

    /// Log sink or terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the statusdash crates.
pub type Result<T> = std::result::Result<T, DashError>;
