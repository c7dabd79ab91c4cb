//! Screen state of the voting page: name entry, king selection, confirmation.
//!
//! The flow never touches storage or the network itself. Transitions hand back
//! an [`Effect`] and the caller is expected to carry it out.

use crate::kings::{King, find_king};
use crate::models::{StoredBallot, VoteRequest};
use crate::validation::normalize_name;

/// Name submitted for a voter who resumed without a remembered name.
pub const GUEST_NAME: &str = "Guest";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    NameEntry,
    Selection,
    Submitting,
    Confirmation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Persist(StoredBallot),
    Submit(VoteRequest),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BallotFlow {
    stage: Stage,
    name: String,
    selected: Option<&'static King>,
    confirmed: Option<&'static King>,
    error: Option<String>,
}

impl BallotFlow {
    /// Picks the starting screen from whatever the browser remembered.
    pub fn resume(stored: Option<StoredBallot>) -> Self {
        let Some(stored) = stored else {
            return Self::default();
        };

        match stored.king() {
            Some(king) => Self {
                stage: Stage::Confirmation,
                name: stored.name,
                selected: Some(king),
                confirmed: Some(king),
                error: None,
            },
            None => Self {
                name: stored.name,
                ..Self::default()
            },
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn selected(&self) -> Option<&'static King> {
        self.selected
    }

    pub fn confirmed(&self) -> Option<&'static King> {
        self.confirmed
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.is_some_and(|king| king.id == id)
    }

    pub fn can_confirm(&self) -> bool {
        self.stage == Stage::Selection && self.selected.is_some()
    }

    pub fn submit_name(&mut self, raw: &str) -> Option<Effect> {
        if self.stage != Stage::NameEntry {
            return None;
        }
        let name = normalize_name(raw)?;

        self.name = name.clone();
        self.stage = Stage::Selection;
        self.selected = None;
        self.error = None;
        Some(Effect::Persist(StoredBallot::named(name)))
    }

    /// Selects `id`, or clears the selection when `id` is already selected.
    /// Returns whether anything changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.stage != Stage::Selection {
            return false;
        }
        let Some(king) = find_king(id) else {
            return false;
        };

        self.selected = if self.is_selected(king.id) { None } else { Some(king) };
        true
    }

    pub fn confirm(&mut self) -> Option<Effect> {
        if !self.can_confirm() {
            return None;
        }
        let king = self.selected?;
        if self.name.is_empty() {
            self.name = GUEST_NAME.to_string();
        }

        self.stage = Stage::Submitting;
        self.error = None;
        Some(Effect::Submit(VoteRequest {
            name: self.name.clone(),
            king_id: king.id.to_string(),
        }))
    }

    pub fn submission_succeeded(&mut self) -> Option<Effect> {
        if self.stage != Stage::Submitting {
            return None;
        }
        let king = self.selected?;

        self.confirmed = Some(king);
        self.stage = Stage::Confirmation;
        Some(Effect::Persist(StoredBallot::with_king(self.name.clone(), king)))
    }

    /// Returns to selection with the choice kept so the voter can retry.
    pub fn submission_failed(&mut self, message: impl Into<String>) {
        if self.stage != Stage::Submitting {
            return;
        }
        self.stage = Stage::Selection;
        self.error = Some(message.into());
    }

    pub fn change_prediction(&mut self) {
        if self.stage != Stage::Confirmation {
            return;
        }
        self.stage = Stage::Selection;
        self.selected = self.confirmed;
        self.error = None;
    }
}
