//! The game session and its collaborators.
//!
//! A session moves through these states:
//!
//! ```text
//! SelectLuckyColor -> SelectPackage -> { Place -> Resolve -> Account -> Display -> Continue? } -> FinalTally
//! ```
//!
//! The loop checks the budget only at the top of each round; rewards
//! accounted during a round can extend play.
//!
//! Player input and output go through two traits so the session can be
//! driven by a terminal or by a test script:
//!
//! - [`Interaction`]: choices and acknowledgements
//! - [`Renderer`]: board, events and totals
//!
//! [`Console`] implements both over any `BufRead`/`Write` pair.

mod console;
mod game;

pub use console::Console;
pub use game::{run, FinalTally, RoundReport, Session};

use thiserror::Error;

use crate::board::Board;
use crate::core::{Palette, RewardTable};
use crate::events::{AcquiredTotals, Event};

/// Prompt shown before the first selection.
pub const START_PROMPT: &str = "Please type enter to start game";
/// Prompt shown after every round.
pub const CONTINUE_PROMPT: &str = "Please type enter to continue game";
/// Label of the lucky color menu.
pub const LUCKY_COLOR_LABEL: &str = "Select your lucky color";
/// Label of the package menu.
pub const PACKAGE_LABEL: &str = "Select your toy package";

/// Input failures.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// Input ended before an answer was given.
    #[error("input closed")]
    Closed,

    /// The answer does not name a menu item.
    #[error("invalid choice {input:?}, expected 1-{count}")]
    InvalidChoice { input: String, count: usize },

    /// Reading input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Session failures. All of them end the program.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Lucky color selection failed.
    #[error("choose lucky color failed, {0}")]
    LuckyColor(#[source] InteractionError),

    /// Package selection failed.
    #[error("choose toy package failed, {0}")]
    Package(#[source] InteractionError),

    /// Writing game output failed.
    #[error("writing output failed, {0}")]
    Output(#[from] std::io::Error),
}

/// Source of player decisions.
pub trait Interaction {
    /// Pick one of `items`, returning its 0-based position.
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize, InteractionError>;

    /// Wait for the player to continue.
    fn acknowledge(&mut self, label: &str) -> Result<(), InteractionError>;
}

/// Sink for everything the player sees.
pub trait Renderer {
    /// Game introduction listing every event and its points.
    fn intro(&mut self, rewards: &RewardTable) -> std::io::Result<()>;

    /// Echo a menu choice.
    fn chosen(&mut self, item: &str) -> std::io::Result<()>;

    /// The board, three cells per row.
    fn board(&mut self, board: &Board, palette: &Palette) -> std::io::Result<()>;

    /// Events resolved this round with their point values.
    fn events(&mut self, events: &[Event], rewards: &RewardTable) -> std::io::Result<()>;

    /// Running totals and the draws left.
    fn totals(&mut self, totals: &AcquiredTotals, palette: &Palette, remaining: u32) -> std::io::Result<()>;

    /// Final totals with the grand total.
    fn final_tally(&mut self, tally: &FinalTally, palette: &Palette) -> std::io::Result<()>;
}
