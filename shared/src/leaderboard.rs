use crate::kings::{King, KINGS, KING_COUNT};
use crate::models::TallySnapshot;

/// How many of the lowest-ranked kings are marked eliminated before ties are extended.
pub const ELIMINATION_CUTOFF: usize = 4;

/// Per-king view of a tally, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub king: &'static King,
    pub votes: u64,
    pub percent: u64,
    pub leading: bool,
    pub eliminated: bool,
}

impl Standing {
    pub fn votes_label(&self) -> String {
        format!("{} ({}%)", votes_label(self.votes), self.percent)
    }
}

pub fn votes_label(votes: u64) -> String {
    if votes == 1 {
        "1 vote".to_string()
    } else {
        format!("{} votes", votes)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Leaderboard {
    counts: [u64; KING_COUNT],
}

impl Leaderboard {
    pub fn from_snapshot(snapshot: &TallySnapshot) -> Self {
        let mut counts = [0; KING_COUNT];
        for (slot, king) in counts.iter_mut().zip(KINGS.iter()) {
            *slot = snapshot.count(king.id);
        }
        Self { counts }
    }

    pub fn count(&self, id: &str) -> u64 {
        KINGS.iter()
            .position(|king| king.id == id)
            .map_or(0, |idx| self.counts[idx])
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Rounded share of the total, treating an empty tally as a total of 1.
    pub fn percent(&self, id: &str) -> u64 {
        let total = self.total().max(1);
        (self.count(id) * 200 + total) / (2 * total)
    }

    /// Every king tied for the highest count. Empty while nobody has a vote.
    pub fn leading(&self) -> Vec<&'static str> {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        KINGS.iter()
            .zip(self.counts.iter())
            .filter(|(_, votes)| **votes == max)
            .map(|(king, _)| king.id)
            .collect()
    }

    /// The lowest [`ELIMINATION_CUTOFF`] kings plus anyone tied with the last of them.
    pub fn eliminated(&self) -> Vec<&'static str> {
        let mut ranked: Vec<(&'static str, u64)> = KINGS.iter()
            .zip(self.counts.iter())
            .map(|(king, &votes)| (king.id, votes))
            .collect();
        ranked.sort_by_key(|&(_, votes)| votes);

        let cutoff = ELIMINATION_CUTOFF.min(ranked.len());
        let mut end = cutoff;
        while end > 0 && end < ranked.len() && ranked[end].1 == ranked[end - 1].1 {
            end += 1;
        }

        ranked[..end].iter().map(|&(id, _)| id).collect()
    }

    pub fn standings(&self, show_eliminated: bool) -> Vec<Standing> {
        let leading = self.leading();
        let eliminated = if show_eliminated { self.eliminated() } else { Vec::new() };

        KINGS.iter()
            .zip(self.counts.iter())
            .map(|(king, &votes)| Standing {
                king,
                votes,
                percent: self.percent(king.id),
                leading: leading.contains(&king.id),
                eliminated: eliminated.contains(&king.id),
            })
            .collect()
    }
}
