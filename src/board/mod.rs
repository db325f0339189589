//! The 3x3 board and the rules that act on it.
//!
//! ## Board
//!
//! [`Board`] owns the nine cells and the ordered queue of empty slots.
//! Only the engine mutates it.
//!
//! ## BoardEngine
//!
//! [`BoardEngine`] places draws and resolves matches:
//!
//! ```
//! use lucky_board::board::{Board, BoardEngine};
//! use lucky_board::core::{ColorId, ScriptedColors};
//! use lucky_board::events::EventKind;
//!
//! let engine = BoardEngine::standard();
//! let mut board = Board::new();
//! let mut colors = ScriptedColors::new([2, 2]);
//!
//! let placement = engine.place(&mut board, 2, ColorId::new(1), &mut colors);
//! assert_eq!(placement.remaining, 0);
//!
//! let events = engine.resolve(&mut board);
//! assert_eq!(events[0].kind, EventKind::OnePair);
//! assert!(board.is_clear());
//! ```

mod engine;
mod slots;

pub use engine::{BoardEngine, Placement};
pub use slots::{Board, Combination, SlotIndex, BOARD_SIZE, ROW_WIDTH};
