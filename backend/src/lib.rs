pub mod config;
pub mod processor;
pub mod routes;
pub mod store;
pub mod postgres;
pub mod cors;
pub mod error;
pub mod catchers;
pub use shared::{models::*, ErrorCode, ErrorResponse};

use rocket::{Build, Rocket, routes, catchers};
use crate::{
    catchers::{bad_request, internal_error, not_found, payload_too_large},
    cors::CORS,
    routes::{cast_vote, get_votes, vote_preflight, AppState},
};

/// The API surface: vote endpoints under `/api`, JSON catchers and CORS.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(state)
        .mount("/api", routes![cast_vote, vote_preflight, get_votes])
        .register(
            "/",
            catchers![bad_request, not_found, payload_too_large, internal_error],
        )
}
