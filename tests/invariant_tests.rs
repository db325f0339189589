//! Property tests for board invariants.

use proptest::prelude::*;

use lucky_board::board::{Board, BoardEngine, BOARD_SIZE};
use lucky_board::core::{ColorId, GameRng};
use lucky_board::events::{AcquiredTotals, EventKind};

fn raw_board() -> impl Strategy<Value = [u8; BOARD_SIZE]> {
    prop::array::uniform9(0u8..=10)
}

fn assert_sorted_unique(board: &Board) {
    let slots = board.empty_slots();
    assert!(slots.windows(2).all(|w| w[0] < w[1]), "queue not strictly ascending: {:?}", slots);
}

proptest! {
    #[test]
    fn resolve_keeps_queue_consistent(raw in raw_board()) {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw(raw);

        engine.resolve(&mut board);

        prop_assert!(board.is_consistent());
        prop_assert_eq!(board.empty_slots().len() + board.occupied_count(), BOARD_SIZE);
        assert_sorted_unique(&board);
    }

    #[test]
    fn resolve_is_idempotent(raw in raw_board()) {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw(raw);

        engine.resolve(&mut board);
        let settled = board.clone();
        let events = engine.resolve(&mut board);

        prop_assert!(events.is_empty());
        prop_assert_eq!(board, settled);
    }

    #[test]
    fn resolve_conserves_tokens(raw in raw_board()) {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw(raw);
        let before = board.occupied_count() as u32;

        let events = engine.resolve(&mut board);
        let mut totals = AcquiredTotals::new(10);
        engine.apply_events(&events, &mut totals, 0);

        prop_assert_eq!(totals.total() + board.occupied_count() as u32, before);
    }

    #[test]
    fn resolve_leaves_no_pairs(raw in raw_board()) {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw(raw);

        engine.resolve(&mut board);

        let mut seen = [false; 11];
        for (_, color) in board.occupied() {
            prop_assert!(!seen[color.raw() as usize], "{} left twice", color);
            seen[color.raw() as usize] = true;
        }
    }

    #[test]
    fn at_most_one_board_milestone(raw in raw_board()) {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw(raw);

        let events = engine.resolve(&mut board);

        let milestones = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Clear | EventKind::AllDifferent))
            .count();
        prop_assert!(milestones <= 1);
    }

    #[test]
    fn place_respects_space_and_budget(raw in raw_board(), budget in 0u32..20, seed in any::<u64>()) {
        let engine = BoardEngine::standard();
        let mut board = Board::from_raw(raw);
        let empty_before = board.empty_slots().len();
        let mut rng = GameRng::new(seed);

        let placement = engine.place(&mut board, budget, ColorId::new(1), &mut rng);

        let expected = empty_before.min(budget as usize);
        prop_assert_eq!(placement.filled.len(), expected);
        prop_assert_eq!(placement.remaining, budget - expected as u32);
        prop_assert!(board.is_consistent());
        prop_assert!(placement.events.iter().all(|e| e.kind == EventKind::LuckyColor));
    }
}
