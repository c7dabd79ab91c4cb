use rocket::{Request, catch, http::Status, response::status, serde::json::Json};
use shared::ErrorResponse;
use crate::error::ApiError;

const VOTE_ENDPOINTS: [&str; 2] = ["/api/vote", "/api/votes"];

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Invalid request parameters."))
}

/// Unrouted requests to a vote endpoint used the wrong method.
#[catch(404)]
pub fn not_found(req: &Request) -> status::Custom<Json<ErrorResponse>> {
    let path = req.uri().path().as_str();
    if VOTE_ENDPOINTS.iter().any(|endpoint| path == *endpoint) {
        let error = ApiError::MethodNotAllowed;
        return status::Custom(Status::from(error.code()), Json(ErrorResponse::new(error.to_string())));
    }

    status::Custom(Status::NotFound, Json(ErrorResponse::new("The requested resource was not found.")))
}

#[catch(413)]
pub fn payload_too_large(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Request body too large."))
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("An internal server error occurred."))
}
