use sqlx::{PgExecutor, PgPool, Postgres, Transaction, postgres::PgPoolOptions};
use tracing::{debug, info};
use crate::store::{Counts, StoreError, TallyStore};

const VERSION_KEY: &str = "schema_version";
const MAX_CONNECTIONS: u32 = 5;

/// Tally kept in Postgres under the `miradas` schema.
pub struct PgTallyStore {
    pool: PgPool,
}

impl PgTallyStore {
    /// Builds the pool without connecting; the first query opens the connection.
    pub fn connect_lazy(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy(url)?;
        Ok(Self { pool })
    }

    async fn fetch_counts<'e, E: PgExecutor<'e>>(executor: E) -> Result<Counts, StoreError> {
        let rows: Vec<(String, i64)> = sqlx::query_as("SELECT king_id, votes FROM miradas.counts")
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().collect())
    }

    /// Creates any missing count rows, then row-locks all of them in `king_id`
    /// order. Two voters moving between the same kings in opposite directions
    /// wait on each other instead of deadlocking.
    async fn lock_counts(tx: &mut Transaction<'_, Postgres>, king_ids: &[String]) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO miradas.counts (king_id, votes)
             SELECT id, 0 FROM UNNEST($1::text[]) AS id
             ON CONFLICT (king_id) DO NOTHING",
        )
        .bind(king_ids)
        .execute(&mut **tx)
        .await?;

        let locked: Vec<String> = sqlx::query_scalar(
            "SELECT king_id FROM miradas.counts WHERE king_id = ANY($1)
             ORDER BY king_id COLLATE \"C\" FOR UPDATE",
        )
        .bind(king_ids)
        .fetch_all(&mut **tx)
        .await?;
        debug!("Locked count rows {:?}", locked);
        Ok(())
    }
}

#[rocket::async_trait]
impl TallyStore for PgTallyStore {
    async fn prepare(&self, version: &str) -> Result<bool, StoreError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        debug!("Tally migrations applied");

        let mut tx = self.pool.begin().await?;
        sqlx::query("LOCK TABLE miradas.meta IN EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let current: Option<String> = sqlx::query_scalar("SELECT value FROM miradas.meta WHERE key = $1")
            .bind(VERSION_KEY)
            .fetch_optional(&mut *tx)
            .await?;

        if current.as_deref() == Some(version) {
            tx.commit().await?;
            return Ok(false);
        }

        sqlx::query("DELETE FROM miradas.counts").execute(&mut *tx).await?;
        sqlx::query("DELETE FROM miradas.voters").execute(&mut *tx).await?;
        sqlx::query(
            "INSERT INTO miradas.meta (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value",
        )
        .bind(VERSION_KEY)
        .bind(version)
        .execute(&mut *tx)
        .await?;
        tx.commit().await?;

        info!("Tally schema moved from {:?} to {}", current, version);
        Ok(true)
    }

    async fn counts(&self) -> Result<Counts, StoreError> {
        Self::fetch_counts(&self.pool).await
    }

    async fn record_vote(&self, name: &str, king_id: &str) -> Result<Counts, StoreError> {
        let mut tx = self.pool.begin().await?;

        // Serializes concurrent votes by the same name until commit.
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        let previous: Option<String> = sqlx::query_scalar("SELECT king_id FROM miradas.voters WHERE name = $1")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await?;

        if previous.as_deref() == Some(king_id) {
            let counts = Self::fetch_counts(&mut *tx).await?;
            tx.commit().await?;
            return Ok(counts);
        }

        let mut touched: Vec<String> = previous.iter().cloned().chain([king_id.to_string()]).collect();
        touched.sort_unstable();
        Self::lock_counts(&mut tx, &touched).await?;

        if let Some(previous) = &previous {
            sqlx::query("UPDATE miradas.counts SET votes = votes - 1 WHERE king_id = $1")
                .bind(previous)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query(
            "INSERT INTO miradas.voters (name, king_id) VALUES ($1, $2)
             ON CONFLICT (name) DO UPDATE SET king_id = EXCLUDED.king_id, updated_at = NOW()",
        )
        .bind(name)
        .bind(king_id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("UPDATE miradas.counts SET votes = votes + 1 WHERE king_id = $1")
            .bind(king_id)
            .execute(&mut *tx)
            .await?;

        let counts = Self::fetch_counts(&mut *tx).await?;
        tx.commit().await?;
        Ok(counts)
    }
}
