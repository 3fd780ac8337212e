use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Contact name cannot be empty")]
    EmptyName,

    #[error("Phone number must be 10 digits long: {0}")]
    InvalidPhone(String),

    #[error("Birthday should be in the format 'YYYY-MM-DD': {0}")]
    InvalidBirthday(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Phone number {phone} not found for {name}")]
    PhoneNotFound { name: String, phone: String },

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Corrupt store: {0}")]
    CorruptStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification used at the command boundary to pick a user tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingArgument,
    Lookup,
    Validation,
    Store,
}

impl BookError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BookError::MissingArgument(_) => ErrorKind::MissingArgument,
            BookError::ContactNotFound(_) | BookError::PhoneNotFound { .. } => ErrorKind::Lookup,
            BookError::EmptyName | BookError::InvalidPhone(_) | BookError::InvalidBirthday(_) => {
                ErrorKind::Validation
            }
            BookError::CorruptStore(_) | BookError::Io(_) | BookError::Serialization(_) => {
                ErrorKind::Store
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
