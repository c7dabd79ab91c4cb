use rocket::{State, get, post, http::{Header, Status}, serde::json::Json, Responder};
use tokio::sync::OnceCell;
use tracing::{error, info, instrument, warn};
use std::sync::Arc;
use shared::{TallySnapshot, VoteResponse};
use crate::{
    config::StoreSettings,
    error::ApiError,
    postgres::PgTallyStore,
    processor::VoteProcessor,
    store::{MemoryStore, StoreError, TallyStore, SCHEMA_VERSION},
};

pub struct AppState {
    store: Option<Arc<dyn TallyStore>>,
    prepared: OnceCell<()>,
}

impl AppState {
    pub fn new(store: impl TallyStore + 'static) -> Self {
        Self {
            store: Some(Arc::new(store)),
            prepared: OnceCell::new(),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            store: None,
            prepared: OnceCell::new(),
        }
    }

    pub fn from_settings(settings: StoreSettings) -> Self {
        match settings {
            StoreSettings::Postgres(url) => match PgTallyStore::connect_lazy(&url) {
                Ok(store) => {
                    info!("Tally store: Postgres");
                    Self::new(store)
                }
                Err(e) => {
                    error!("Unusable database URL, vote submission disabled: {}", e);
                    Self::unconfigured()
                }
            },
            StoreSettings::Memory => {
                warn!("Tally store: in-process memory, votes are lost on restart");
                Self::new(MemoryStore::new())
            }
            StoreSettings::Unconfigured => {
                warn!("DATABASE_URL not found - vote submission will be rejected");
                Self::unconfigured()
            }
        }
    }

    /// The configured store, prepared for the current schema version.
    /// Preparation runs once per process and is retried until it succeeds.
    pub async fn store(&self) -> Result<&dyn TallyStore, StoreError> {
        let store = self.store.as_deref().ok_or(StoreError::Unconfigured)?;

        self.prepared
            .get_or_try_init(|| async {
                if store.prepare(SCHEMA_VERSION).await? {
                    info!("Tally cleared for schema version {}", SCHEMA_VERSION);
                }
                Ok::<(), StoreError>(())
            })
            .await?;

        Ok(store)
    }
}

#[derive(Responder)]
pub struct TallyResponse {
    inner: Json<TallySnapshot>,
    cache_control: Header<'static>,
}

impl From<TallySnapshot> for TallyResponse {
    fn from(snapshot: TallySnapshot) -> Self {
        Self {
            inner: Json(snapshot),
            cache_control: Header::new("Cache-Control", "no-store, max-age=0"),
        }
    }
}

#[instrument(skip(state, body))]
#[post("/vote", data = "<body>")]
pub async fn cast_vote(state: &State<AppState>, body: &str) -> Result<Json<VoteResponse>, ApiError> {
    VoteProcessor::submit(state, body).await.map(Json)
}

#[rocket::options("/vote")]
pub async fn vote_preflight() -> Status {
    Status::NoContent
}

#[get("/votes")]
pub async fn get_votes(state: &State<AppState>) -> TallyResponse {
    VoteProcessor::snapshot(state).await.into()
}
