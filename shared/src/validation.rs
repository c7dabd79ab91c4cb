use serde_json::Value;
use crate::kings::{King, find_king};

pub const MAX_NAME_LENGTH: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid king selection")]
    InvalidKing,
}

/// A vote that passed validation and may be applied to the tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBallot {
    pub name: String,
    pub king: &'static King,
}

/// Trims `raw` and caps it at [`MAX_NAME_LENGTH`] characters.
/// Returns `None` when nothing is left.
pub fn normalize_name(raw: &str) -> Option<String> {
    let name: String = raw.trim().chars().take(MAX_NAME_LENGTH).collect();
    (!name.is_empty()).then_some(name)
}

pub fn validate_vote(body: &Value) -> Result<ValidBallot, ValidationError> {
    let raw_name = match body.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name,
        _ => return Err(ValidationError::MissingName),
    };
    let name = normalize_name(raw_name).ok_or(ValidationError::EmptyName)?;

    let king = body.get("kingId")
        .and_then(Value::as_str)
        .and_then(find_king)
        .ok_or(ValidationError::InvalidKing)?;

    Ok(ValidBallot { name, king })
}

/// Validates a raw request body. Anything that is not a JSON object is read
/// as an empty one, so it is rejected for its missing name.
pub fn parse_vote_body(raw: &str) -> Result<ValidBallot, ValidationError> {
    let body = serde_json::from_str::<Value>(raw).unwrap_or(Value::Null);
    validate_vote(&body)
}
