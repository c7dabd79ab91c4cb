use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use crate::kings::{King, KINGS, find_king};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub name: String,
    pub king_id: String,
}

/// Aggregate counts for every king, as served by `GET /api/votes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TallySnapshot {
    pub total: u64,
    pub counts: BTreeMap<String, u64>,
}

impl TallySnapshot {
    pub fn zeroed() -> Self {
        Self::from_counts(std::iter::empty::<(&str, i64)>())
    }

    /// Builds a snapshot holding exactly the eight known kings. Ids absent from
    /// `raw` count as zero, unknown ids are dropped and negative counts clamp to 0.
    pub fn from_counts<K, I>(raw: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, i64)>,
    {
        let mut counts: BTreeMap<String, u64> = KINGS.iter()
            .map(|king| (king.id.to_string(), 0))
            .collect();

        for (id, votes) in raw {
            if let Some(slot) = counts.get_mut(id.as_ref()) {
                *slot = u64::try_from(votes).unwrap_or(0);
            }
        }

        let total = counts.values().sum();
        Self { total, counts }
    }

    pub fn count(&self, id: &str) -> u64 {
        self.counts.get(id).copied().unwrap_or(0)
    }
}

impl Default for TallySnapshot {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub ok: bool,
    #[serde(flatten)]
    pub tally: TallySnapshot,
}

impl From<TallySnapshot> for VoteResponse {
    fn from(tally: TallySnapshot) -> Self {
        Self { ok: true, tally }
    }
}

/// The ballot a browser remembers between visits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredBallot {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "optionId")]
    pub king_id: Option<String>,
}

impl StoredBallot {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), king_id: None }
    }

    pub fn with_king(name: impl Into<String>, king: &King) -> Self {
        Self { name: name.into(), king_id: Some(king.id.to_string()) }
    }

    pub fn king(&self) -> Option<&'static King> {
        self.king_id.as_deref().and_then(find_king)
    }
}
