//! Injectable random color draws.
//!
//! ## Key Features
//!
//! - **Injectable**: Placement takes any [`ColorSource`], never an ambient generator
//! - **Deterministic**: Same seed produces identical draw sequence
//! - **Serializable**: O(1) state capture and restore via [`GameRngState`]
//! - **Scriptable**: [`ScriptedColors`] replays a fixed sequence for tests
//!
//! ```
//! use lucky_board::core::{ColorSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! for _ in 0..20 {
//!     assert_eq!(rng.draw_color(10), replay.draw_color(10));
//! }
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::ColorId;

/// Source of uniformly drawn token colors.
pub trait ColorSource {
    /// Draw a color id uniformly from `1..=color_count`.
    fn draw_color(&mut self, color_count: u8) -> ColorId;
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// The chosen seed is still recorded, so the session can be replayed
    /// from [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl ColorSource for GameRng {
    fn draw_color(&mut self, color_count: u8) -> ColorId {
        assert!(color_count > 0, "Must draw from at least 1 color");
        ColorId::new(self.inner.gen_range(1..=color_count))
    }
}

/// Serializable RNG state for reproducing a session.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many colors have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed color sequence.
///
/// Panics when drawn past the end of the script or when a scripted color
/// lies outside the requested range; both indicate a broken test setup.
#[derive(Clone, Debug, Default)]
pub struct ScriptedColors {
    script: VecDeque<ColorId>,
}

impl ScriptedColors {
    /// Create a script from raw 1-based ids.
    pub fn new(ids: impl IntoIterator<Item = u8>) -> Self {
        Self {
            script: ids.into_iter().map(ColorId::new).collect(),
        }
    }

    /// Append more draws to the end of the script.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = u8>) {
        self.script.extend(ids.into_iter().map(ColorId::new));
    }

    /// Number of draws left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ColorSource for ScriptedColors {
    fn draw_color(&mut self, color_count: u8) -> ColorId {
        let color = self
            .script
            .pop_front()
            .expect("Scripted color sequence exhausted");
        assert!(
            color.raw() <= color_count,
            "Scripted {} outside 1..={}",
            color,
            color_count
        );
        color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.draw_color(10), rng2.draw_color(10));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.draw_color(10)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.draw_color(10)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draw_covers_full_range() {
        let mut rng = GameRng::new(7);
        let mut seen = [false; 10];

        for _ in 0..1000 {
            let color = rng.draw_color(10);
            assert!((1..=10).contains(&color.raw()));
            seen[color.index()] = true;
        }

        assert!(seen.iter().all(|&s| s), "every color should appear");
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.draw_color(10);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.draw_color(10)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.draw_color(10)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_entropy_seed_is_recorded() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());

        for _ in 0..10 {
            assert_eq!(rng.draw_color(10), replay.draw_color(10));
        }
    }

    #[test]
    fn test_scripted_colors() {
        let mut script = ScriptedColors::new([3, 1]);
        script.extend([2]);
        assert_eq!(script.remaining(), 3);

        assert_eq!(script.draw_color(10), ColorId::new(3));
        assert_eq!(script.draw_color(10), ColorId::new(1));
        assert_eq!(script.draw_color(10), ColorId::new(2));
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "Scripted color sequence exhausted")]
    fn test_scripted_colors_exhausted() {
        let mut script = ScriptedColors::new([]);
        script.draw_color(10);
    }
}
