use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::{ErrorCode, ErrorResponse, ValidationError};
use thiserror::Error;
use tracing::error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Database not configured. Set DATABASE_URL and redeploy.")]
    StoreUnconfigured,
    #[error("Failed to record vote")]
    StoreFailed,
}

impl ApiError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::Invalid(_) => ErrorCode::InvalidInput,
            ApiError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            ApiError::StoreUnconfigured => ErrorCode::StoreUnconfigured,
            ApiError::StoreFailed => ErrorCode::StoreOperationFailed,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unconfigured => ApiError::StoreUnconfigured,
            other => {
                error!("Vote not recorded: {}", other);
                ApiError::StoreFailed
            }
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = Status::from(self.code());

        rocket::Response::build_from(Json(ErrorResponse::new(self.to_string())).respond_to(req)?)
            .status(status)
            .ok()
    }
}
