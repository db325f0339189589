//! Reward accounting.
//!
//! Events add their point value to the remaining budget and their token
//! grants to the player's acquired totals. Both are plain sums, so event
//! order does not matter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::Board;
use crate::core::{ColorId, RewardTable};

use super::Event;

/// Cumulative tokens acquired per color.
///
/// Totals only ever grow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquiredTotals {
    counts: Vec<u32>,
}

impl AcquiredTotals {
    /// All-zero totals for a palette of `color_count` colors.
    #[must_use]
    pub fn new(color_count: usize) -> Self {
        Self {
            counts: vec![0; color_count],
        }
    }

    /// Add tokens for a color.
    pub fn add(&mut self, color: ColorId, count: u32) {
        self.counts[color.index()] += count;
    }

    /// Tokens acquired for a color.
    #[must_use]
    pub fn get(&self, color: ColorId) -> u32 {
        self.counts.get(color.index()).copied().unwrap_or(0)
    }

    /// Grand total across colors.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Iterate over every color in palette order, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (ColorId, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &n)| (ColorId::from_index(i), n))
    }

    /// Count every token still on the board, one for one.
    ///
    /// Used at game end: unmatched tokens still belong to the player.
    pub fn fold_board(&mut self, board: &Board) {
        for (_, color) in board.occupied() {
            self.add(color, 1);
        }
    }
}

/// Apply events to the totals and return the new remaining budget.
///
/// ```
/// use lucky_board::core::{ColorId, RewardTable};
/// use lucky_board::events::{apply_events, AcquiredTotals, Event, EventKind};
///
/// let events = vec![
///     Event::for_color(EventKind::LuckyStrike, ColorId::new(1), 3),
///     Event::for_color(EventKind::OnePair, ColorId::new(2), 2),
/// ];
/// let mut totals = AcquiredTotals::new(10);
///
/// let remaining = apply_events(&RewardTable::STANDARD, &events, &mut totals, 0);
/// assert_eq!(remaining, 4);
/// assert_eq!(totals.total(), 5);
/// ```
pub fn apply_events(
    rewards: &RewardTable,
    events: &[Event],
    totals: &mut AcquiredTotals,
    remaining: u32,
) -> u32 {
    let mut points = 0;
    for event in events {
        points += rewards.points(event.kind);
        for (color, count) in event.grant.iter() {
            totals.add(color, count);
        }
    }
    debug!(events = events.len(), points, "applied rewards");
    remaining + points
}
