//! # lucky-board
//!
//! A lucky-color token drawing game on a 3x3 board.
//!
//! The player picks a lucky color and a package of draws. Each round fills
//! the free slots with randomly drawn colors, then matching patterns are
//! scored and cleared:
//!
//! | Event | Trigger | Points |
//! |-------|---------|--------|
//! | Lucky Color | a draw equals the lucky color | 1 |
//! | One Pair | two cells share a color | 1 |
//! | Lucky Strike | a combination line of one color | 3 |
//! | Family Portrait | a full board with no match | 5 |
//! | Clear The Board | matches emptied the board | 5 |
//!
//! Points are extra draws. Matched tokens are credited to the player, and
//! whatever is left on the board when the draws run out counts too.
//!
//! ## Design Principles
//!
//! 1. **Injectable randomness**: placement draws from a [`ColorSource`], so
//!    tests replay exact sequences.
//! 2. **Read-only rules**: colors, rewards and combinations live in a
//!    [`GameConfig`] owned by the [`BoardEngine`].
//! 3. **I/O at the edge**: the [`Session`] talks to the player only through
//!    the [`Interaction`] and [`Renderer`] traits.
//!
//! ## Modules
//!
//! - `core`: colors, palette, configuration, RNG
//! - `board`: board state, placement and match resolution
//! - `events`: scoring events and reward accounting
//! - `session`: game loop, collaborator traits, console front end

pub mod board;
pub mod core;
pub mod events;
pub mod session;

// Re-export commonly used types
pub use crate::core::{ColorId, ColorSource, GameConfig, GameRng, Palette, RewardTable, ScriptedColors};

pub use crate::board::{Board, BoardEngine, Placement, SlotIndex};

pub use crate::events::{apply_events, AcquiredTotals, Event, EventKind, TokenGrant};

pub use crate::session::{
    run, Console, FinalTally, Interaction, InteractionError, Renderer, RoundReport, Session,
    SessionError,
};
