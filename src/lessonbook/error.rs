use crate::model::RecordKind;
use thiserror::Error;

/// Errors raised while turning a line of text into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("Index is not a non-zero unsigned integer.\n{usage}")]
    InvalidIndex { usage: &'static str },
}

impl ParseError {
    /// The usage string of the command that failed to parse, if any.
    pub fn usage(&self) -> Option<&'static str> {
        match self {
            ParseError::UnknownCommand(_) => None,
            ParseError::InvalidFormat { usage } | ParseError::InvalidIndex { usage } => {
                Some(usage)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("{message}")]
    Validation { field: &'static str, message: String },

    #[error("The {0} index provided is invalid")]
    Index(RecordKind),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
