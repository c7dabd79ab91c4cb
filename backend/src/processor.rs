use shared::{parse_vote_body, TallySnapshot, VoteResponse};
use tracing::{debug, info, warn};
use crate::error::ApiError;
use crate::routes::AppState;

pub struct VoteProcessor;

impl VoteProcessor {
    /// Validates a raw vote body and applies it to the tally.
    /// Nothing reaches the store unless the body is valid.
    pub async fn submit(state: &AppState, body: &str) -> Result<VoteResponse, ApiError> {
        let ballot = parse_vote_body(body).map_err(|e| {
            debug!("Rejected vote: {}", e);
            ApiError::from(e)
        })?;

        let store = state.store().await?;
        let counts = store.record_vote(&ballot.name, ballot.king.id).await?;
        info!(king = ballot.king.id, "Vote recorded");

        Ok(TallySnapshot::from_counts(counts).into())
    }

    /// Current totals. Store trouble is logged and served as an empty tally.
    pub async fn snapshot(state: &AppState) -> TallySnapshot {
        let counts = match state.store().await {
            Ok(store) => store.counts().await,
            Err(e) => Err(e),
        };

        match counts {
            Ok(counts) => TallySnapshot::from_counts(counts),
            Err(e) => {
                warn!("Serving empty tally: {}", e);
                TallySnapshot::zeroed()
            }
        }
    }
}
