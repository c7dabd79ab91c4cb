pub mod error;
pub mod kings;
pub mod models;
pub mod validation;
pub mod leaderboard;
pub mod ballot_flow;

pub use error::{Error, ErrorCode, ErrorResponse};
pub use kings::{King, KINGS, find_king};
pub use models::*;
pub use validation::*;
pub use leaderboard::{Leaderboard, Standing};
pub use ballot_flow::{BallotFlow, Effect, Stage};

#[cfg(test)]
mod tests;
