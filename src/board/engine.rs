//! Placement and match resolution.
//!
//! A round is `place` followed by `resolve`:
//!
//! 1. **Place**: draw colors into the lowest free slots until the board is
//!    full or the budget runs out. Drawing the lucky color emits Lucky Color.
//! 2. **Resolve**, each check seeing the board as left by the previous one:
//!    - Lucky Strike: every combination line of one color, in list order
//!    - One Pair: left-to-right scan pairing repeated colors
//!    - Clear The Board: the matches above emptied the board
//!    - Family Portrait: the board is full with no match; it is reset
//!
//!    The empty-slot queue is then sorted so the next placement again fills
//!    the lowest index first.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::core::{ColorId, ColorSource, GameConfig};
use crate::events::{apply_events, AcquiredTotals, Event, EventKind};

use super::{Board, SlotIndex};

/// Outcome of one placement pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Budget left after the draws.
    pub remaining: u32,
    /// Slots filled, in fill order.
    pub filled: Vec<SlotIndex>,
    /// Lucky Color events, one per lucky draw.
    pub events: Vec<Event>,
}

/// Applies the game rules to a [`Board`].
///
/// Owns the read-only [`GameConfig`] the rules are looked up in.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    config: GameConfig,
}

impl BoardEngine {
    /// Create an engine for a configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Engine for the published game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GameConfig::standard())
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Draw colors into empty slots.
    ///
    /// Stops when the board is full or `remaining` reaches zero, so it never
    /// fills more slots than are empty and never overdraws the budget.
    pub fn place<S>(
        &self,
        board: &mut Board,
        mut remaining: u32,
        lucky: ColorId,
        source: &mut S,
    ) -> Placement
    where
        S: ColorSource + ?Sized,
    {
        let color_count = self.config.color_count();
        let lucky_tokens = self.config.rewards.tokens(EventKind::LuckyColor);
        let mut filled = Vec::new();
        let mut events = Vec::new();

        while !board.is_full() && remaining > 0 {
            remaining -= 1;
            let color = source.draw_color(color_count);
            if color == lucky {
                info!(%color, "lucky color drawn");
                events.push(Event::for_color(EventKind::LuckyColor, color, lucky_tokens));
            }
            if let Some(slot) = board.fill_next(color) {
                debug!(%slot, %color, remaining, "placed");
                filled.push(slot);
            }
        }

        Placement {
            remaining,
            filled,
            events,
        }
    }

    /// Detect and clear matches, returning the events they produce.
    ///
    /// Running it again without an intervening placement finds nothing.
    pub fn resolve(&self, board: &mut Board) -> Vec<Event> {
        let started_empty = board.is_clear();
        let mut events = Vec::new();

        self.resolve_strikes(board, &mut events);
        self.resolve_pairs(board, &mut events);

        if board.is_clear() && !started_empty {
            info!("board cleared");
            events.push(Event::clear());
        }

        if board.is_full() {
            let event = Event::all_different(board.occupied().map(|(_, color)| color));
            info!(colors = event.grant.total(), "family portrait");
            events.push(event);
            board.reset();
        }

        board.sort_empty();
        debug_assert!(board.is_consistent(), "board out of sync: {:?}", board);
        events
    }

    /// Apply events to the player's totals, returning the new budget.
    pub fn apply_events(&self, events: &[Event], totals: &mut AcquiredTotals, remaining: u32) -> u32 {
        apply_events(&self.config.rewards, events, totals, remaining)
    }

    fn resolve_strikes(&self, board: &mut Board, events: &mut Vec<Event>) {
        let tokens = self.config.rewards.tokens(EventKind::LuckyStrike);

        for combination in &self.config.combinations {
            let Some(color) = combination.matched_color(board) else {
                continue;
            };
            info!(%color, slots = ?combination.slots(), "lucky strike");
            events.push(Event::for_color(EventKind::LuckyStrike, color, tokens));
            for &slot in combination.slots() {
                board.clear_slot(slot);
            }
        }
    }

    fn resolve_pairs(&self, board: &mut Board, events: &mut Vec<Event>) {
        let tokens = self.config.rewards.tokens(EventKind::OnePair);
        let mut first_seen: FxHashMap<ColorId, SlotIndex> = FxHashMap::default();

        for slot in SlotIndex::all() {
            let Some(color) = board.get(slot) else {
                continue;
            };
            match first_seen.remove(&color) {
                Some(first) => {
                    info!(%color, %first, second = %slot, "one pair");
                    events.push(Event::for_color(EventKind::OnePair, color, tokens));
                    board.clear_slot(first);
                    board.clear_slot(slot);
                }
                None => {
                    first_seen.insert(color, slot);
                }
            }
        }
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedColors;

    fn kinds(events: &[Event]) -> Vec<EventKind> {
        events.iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_place_fills_lowest_first() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([0, 5, 0, 0, 0, 0, 0, 0, 0]);
        let mut colors = ScriptedColors::new([1, 2]);

        let placement = engine.place(&mut board, 2, ColorId::new(9), &mut colors);

        assert_eq!(placement.remaining, 0);
        assert_eq!(placement.filled, vec![SlotIndex::new(0), SlotIndex::new(2)]);
        assert!(placement.events.is_empty());
        assert_eq!(board.to_raw(), [1, 5, 2, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_place_stops_when_full() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([1, 2, 3, 4, 5, 6, 7, 8, 0]);
        let mut colors = ScriptedColors::new([9]);

        let placement = engine.place(&mut board, 10, ColorId::new(1), &mut colors);

        assert_eq!(placement.remaining, 9);
        assert_eq!(placement.filled.len(), 1);
        assert!(board.is_full());
    }

    #[test]
    fn test_place_zero_budget() {
        let engine = BoardEngine::standard();
        let mut board = Board::new();
        let mut colors = ScriptedColors::new([]);

        let placement = engine.place(&mut board, 0, ColorId::new(1), &mut colors);

        assert_eq!(placement.remaining, 0);
        assert!(placement.filled.is_empty());
        assert!(board.is_clear());
    }

    #[test]
    fn test_place_lucky_color() {
        let engine = BoardEngine::standard();
        let mut board = Board::new();
        let mut colors = ScriptedColors::new([3, 4, 3]);

        let placement = engine.place(&mut board, 3, ColorId::new(3), &mut colors);

        assert_eq!(kinds(&placement.events), vec![EventKind::LuckyColor; 2]);
        assert_eq!(placement.events[0].grant.get(ColorId::new(3)), 0);
    }

    #[test]
    fn test_resolve_column_strike() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([1, 0, 0, 1, 0, 0, 1, 0, 0]);

        let events = engine.resolve(&mut board);

        // Emptying the only occupied cells also clears the board.
        assert_eq!(kinds(&events), vec![EventKind::LuckyStrike, EventKind::Clear]);
        assert_eq!(events[0].grant.get(ColorId::new(1)), 3);
        assert!(board.is_clear());
    }

    #[test]
    fn test_resolve_pair() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([2, 2, 0, 0, 0, 0, 0, 0, 0]);

        let events = engine.resolve(&mut board);

        assert_eq!(kinds(&events), vec![EventKind::OnePair, EventKind::Clear]);
        assert_eq!(events[0].grant.get(ColorId::new(2)), 2);
        assert!(board.is_clear());
    }

    #[test]
    fn test_strike_takes_precedence_over_pairs() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([4, 4, 4, 5, 0, 0, 0, 0, 0]);

        let events = engine.resolve(&mut board);

        assert_eq!(kinds(&events), vec![EventKind::LuckyStrike]);
        assert_eq!(board.to_raw(), [0, 0, 0, 5, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_third_occurrence_starts_new_pair() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([4, 4, 0, 4, 0, 0, 0, 0, 7]);

        let events = engine.resolve(&mut board);
        assert_eq!(kinds(&events), vec![EventKind::OnePair]);
        assert_eq!(board.to_raw(), [0, 0, 0, 4, 0, 0, 0, 0, 7]);
    }

    #[test]
    fn test_all_different_resets_board() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let events = engine.resolve(&mut board);

        assert_eq!(kinds(&events), vec![EventKind::AllDifferent]);
        assert_eq!(events[0].grant.total(), 9);
        for id in 1..=9 {
            assert_eq!(events[0].grant.get(ColorId::new(id)), 1);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_resolve_sorts_queue() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([7, 5, 5, 7, 1, 2, 7, 3, 4]);

        // Strike frees 0,3,6 then the pair frees 1,2.
        let events = engine.resolve(&mut board);

        assert_eq!(kinds(&events), vec![EventKind::LuckyStrike, EventKind::OnePair]);
        let expected: Vec<_> = [0, 1, 2, 3, 6].into_iter().map(SlotIndex::new).collect();
        assert_eq!(board.empty_slots(), expected.as_slice());
    }

    #[test]
    fn test_resolve_empty_board_is_quiet() {
        let engine = BoardEngine::standard();
        let mut board = Board::new();
        assert!(engine.resolve(&mut board).is_empty());
    }

    #[test]
    fn test_irregular_diagonal() {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw([0, 0, 6, 6, 0, 0, 6, 0, 1]);

        let events = engine.resolve(&mut board);

        assert_eq!(kinds(&events), vec![EventKind::LuckyStrike]);
        assert_eq!(board.to_raw(), [0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }
}
