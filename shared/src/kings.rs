use serde::Serialize;

pub const KING_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct King {
    pub id: &'static str,
    pub name: &'static str,
    pub suit: &'static str,
    pub is_red: bool,
}

impl King {
    pub const fn new(id: &'static str, name: &'static str, suit: &'static str, is_red: bool) -> Self {
        Self { id, name, suit, is_red }
    }

    /// Card label as printed on the confirmation screen, e.g. `King The Flame ♦`.
    pub fn label(&self) -> String {
        format!("King {} {}", self.name, self.suit)
    }
}

pub static KINGS: [King; KING_COUNT] = [
    King::new("golden-boy", "The Golden Boy", "♠", false),
    King::new("classic", "The Classic", "♠", false),
    King::new("maverick", "The Maverick", "♥", true),
    King::new("historian", "The Historian", "♥", true),
    King::new("flame", "The Flame", "♦", true),
    King::new("voice", "The Voice", "♦", true),
    King::new("mustang", "The Mustang", "♣", false),
    King::new("heartbreaker", "The Heartbreaker", "♣", false),
];

pub fn find_king(id: &str) -> Option<&'static King> {
    KINGS.iter().find(|king| king.id == id)
}
