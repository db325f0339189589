//! Scoring events and reward accounting.
//!
//! ## Design Philosophy
//!
//! Detection and accounting are separate steps. The board engine only
//! emits [`Event`]s; [`apply_events`] turns them into extra draws and
//! acquired tokens. This keeps placement and resolution free of any
//! effect on the player's totals.

mod accounting;
mod event;

pub use accounting::{apply_events, AcquiredTotals};
pub use event::{Event, EventKind, TokenGrant};
