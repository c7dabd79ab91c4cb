use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Invalid input provided")]
    InvalidInput,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Tally store not configured")]
    StoreUnconfigured,
    #[error("Tally store operation failed")]
    StoreOperationFailed,
}

impl ErrorCode {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorCode::InvalidInput => 400,
            ErrorCode::MethodNotAllowed => 405,
            ErrorCode::StoreUnconfigured => 503,
            ErrorCode::StoreOperationFailed => 500,
        }
    }

    pub fn from_status_code(status: u16) -> Option<Self> {
        match status {
            400 => Some(ErrorCode::InvalidInput),
            405 => Some(ErrorCode::MethodNotAllowed),
            503 => Some(ErrorCode::StoreUnconfigured),
            500 => Some(ErrorCode::StoreOperationFailed),
            _ => None,
        }
    }
}

#[cfg(feature = "backend")]
impl From<ErrorCode> for rocket::http::Status {
    fn from(code: ErrorCode) -> Self {
        rocket::http::Status::new(code.status_code())
    }
}

/// JSON body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }
}
