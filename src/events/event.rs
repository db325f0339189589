//! Scoring events.
//!
//! An event is produced by placement (Lucky Color) or by resolution
//! (One Pair, Lucky Strike, Family Portrait, Clear The Board). It carries
//! the tokens it grants; its point value comes from the [`RewardTable`].
//!
//! Events are transient: built during one round, consumed by reward
//! accounting, then handed to the renderer.
//!
//! [`RewardTable`]: crate::core::RewardTable

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ColorId;

/// Kinds of scoring event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// The drawn color equals the player's lucky color.
    LuckyColor,
    /// Two cells of the same color.
    OnePair,
    /// A combination line of one color.
    LuckyStrike,
    /// A full board with no match ("Family Portrait").
    AllDifferent,
    /// Matches emptied the whole board.
    Clear,
}

impl EventKind {
    /// Number of event kinds.
    pub const COUNT: usize = 5;

    /// Every kind, in table order.
    pub const ALL: [EventKind; Self::COUNT] = [
        EventKind::LuckyColor,
        EventKind::OnePair,
        EventKind::LuckyStrike,
        EventKind::AllDifferent,
        EventKind::Clear,
    ];

    /// Position in reward tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            EventKind::LuckyColor => 0,
            EventKind::OnePair => 1,
            EventKind::LuckyStrike => 2,
            EventKind::AllDifferent => 3,
            EventKind::Clear => 4,
        }
    }

    /// Name shown to the player.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            EventKind::LuckyColor => "Lucky Color",
            EventKind::OnePair => "One Pair",
            EventKind::LuckyStrike => "Lucky Strike",
            EventKind::AllDifferent => "Family Portrait",
            EventKind::Clear => "Clear The Board",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tokens granted by one event, per color.
///
/// Most events grant a single color, so one entry is stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    entries: SmallVec<[(ColorId, u32); 1]>,
}

impl TokenGrant {
    /// A grant with no tokens.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// A grant of `count` tokens of one color.
    #[must_use]
    pub fn single(color: ColorId, count: u32) -> Self {
        let mut grant = Self::default();
        grant.add(color, count);
        grant
    }

    /// Add tokens, merging with an existing entry for the same color.
    pub fn add(&mut self, color: ColorId, count: u32) {
        match self.entries.iter().position(|(c, _)| *c == color) {
            Some(i) => self.entries[i].1 += count,
            None => self.entries.push((color, count)),
        }
    }

    /// Tokens granted for a color.
    #[must_use]
    pub fn get(&self, color: ColorId) -> u32 {
        self.entries
            .iter()
            .find(|(c, _)| *c == color)
            .map_or(0, |(_, n)| *n)
    }

    /// Iterate over (color, count) entries.
    pub fn iter(&self) -> impl Iterator<Item = (ColorId, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all granted tokens.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// True if the grant has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ColorId, u32)> for TokenGrant {
    fn from_iter<I: IntoIterator<Item = (ColorId, u32)>>(iter: I) -> Self {
        let mut grant = Self::default();
        for (color, count) in iter {
            grant.add(color, count);
        }
        grant
    }
}

/// A resolved event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Tokens granted.
    pub grant: TokenGrant,
}

impl Event {
    /// Create an event.
    #[must_use]
    pub fn new(kind: EventKind, grant: TokenGrant) -> Self {
        Self { kind, grant }
    }

    /// Single-color event granting `tokens` of `color`.
    #[must_use]
    pub fn for_color(kind: EventKind, color: ColorId, tokens: u32) -> Self {
        Self::new(kind, TokenGrant::single(color, tokens))
    }

    /// Family Portrait: one token for every color given.
    #[must_use]
    pub fn all_different(colors: impl IntoIterator<Item = ColorId>) -> Self {
        Self::new(
            EventKind::AllDifferent,
            colors.into_iter().map(|c| (c, 1)).collect(),
        )
    }

    /// Clear The Board, no tokens.
    #[must_use]
    pub fn clear() -> Self {
        Self::new(EventKind::Clear, TokenGrant::empty())
    }
}
