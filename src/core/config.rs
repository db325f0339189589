//! Game configuration.
//!
//! The engine is configured once, at construction, by a `GameConfig`:
//! - `Palette`: the drawable colors
//! - `packages`: the package sizes offered to the player
//! - `RewardTable`: point values and token grants per event kind
//! - `combinations`: the index triples checked for a Lucky Strike
//!
//! Configuration is read-only after construction. There are no
//! process-wide tables.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Combination, SlotIndex};
use crate::events::EventKind;

use super::Palette;

/// Environment variable holding an optional u64 seed for the binary.
pub const SEED_ENV_VAR: &str = "LUCKY_BOARD_SEED";

/// Package sizes offered at game start.
pub const STANDARD_PACKAGES: [u32; 3] = [9, 18, 30];

/// Lines checked for a Lucky Strike, in scan order.
///
/// Three columns, three rows, then two diagonals of the 3x3 grid. The last
/// entry is `{2, 3, 6}` rather than the geometric `{2, 4, 6}`; the game
/// data is kept as published.
pub const STANDARD_COMBINATIONS: [[u8; 3]; 8] = [
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [2, 3, 6],
];

/// Per-event reward values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Extra draws added to the remaining budget, indexed by `EventKind::index`.
    pub points: [u32; EventKind::COUNT],
    /// Tokens granted for the matched color, indexed by `EventKind::index`.
    ///
    /// Only consulted for events tied to a single color (Lucky Color,
    /// One Pair, Lucky Strike). Family Portrait always grants one token
    /// per color on the board and Clear grants nothing.
    pub tokens: [u32; EventKind::COUNT],
}

impl RewardTable {
    /// Lucky Color 1, One Pair 1, Lucky Strike 3, Family Portrait 5, Clear 5.
    pub const STANDARD: Self = Self {
        points: [1, 1, 3, 5, 5],
        tokens: [0, 2, 3, 0, 0],
    };

    /// Point value of an event kind.
    #[must_use]
    pub const fn points(&self, kind: EventKind) -> u32 {
        self.points[kind.index()]
    }

    /// Token grant for a single-color event kind.
    #[must_use]
    pub const fn tokens(&self, kind: EventKind) -> u32 {
        self.tokens[kind.index()]
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Drawable colors.
    pub palette: Palette,

    /// Package sizes, in menu order.
    pub packages: Vec<u32>,

    /// Reward values.
    pub rewards: RewardTable,

    /// Lucky Strike lines, in scan order.
    pub combinations: Vec<Combination>,
}

impl GameConfig {
    /// The published game: ten colors, packages of 9/18/30, standard rewards.
    pub fn standard() -> Self {
        Self {
            palette: Palette::standard(),
            packages: STANDARD_PACKAGES.to_vec(),
            rewards: RewardTable::STANDARD,
            combinations: STANDARD_COMBINATIONS
                .iter()
                .map(|&[a, b, c]| Combination::new(SlotIndex::new(a), SlotIndex::new(b), SlotIndex::new(c)))
                .collect(),
        }
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the package sizes.
    #[must_use]
    pub fn with_packages(mut self, packages: impl Into<Vec<u32>>) -> Self {
        let packages = packages.into();
        assert!(!packages.is_empty(), "Must offer at least 1 package");
        self.packages = packages;
        self
    }

    /// Replace the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    /// Number of drawable colors.
    #[must_use]
    pub fn color_count(&self) -> u8 {
        self.palette.len() as u8
    }

    /// Menu labels for the package choice ("9 toys", ...).
    #[must_use]
    pub fn package_labels(&self) -> Vec<String> {
        self.packages.iter().map(|n| format!("{} toys", n)).collect()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The seed variable was set but is not a u64.
    #[error("{var} must be an unsigned integer, got {value:?}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Parse an optional seed value as read from [`SEED_ENV_VAR`].
///
/// Blank values count as unset.
pub fn parse_seed(value: Option<&str>) -> Result<Option<u64>, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|_| ConfigError::InvalidSeed {
            var: SEED_ENV_VAR,
            value: raw.to_string(),
        }),
    }
}

/// Read the seed from the process environment.
pub fn seed_from_env() -> Result<Option<u64>, ConfigError> {
    parse_seed(std::env::var(SEED_ENV_VAR).ok().as_deref())
}
