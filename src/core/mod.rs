//! Core types: colors, palette, configuration, randomness.
//!
//! This module holds the read-only building blocks the board engine is
//! constructed from. Nothing here mutates game state.

pub mod color;
pub mod config;
pub mod rng;

pub use color::{ColorId, Palette, STANDARD_COLORS};
pub use config::{
    parse_seed, seed_from_env, ConfigError, GameConfig, RewardTable, SEED_ENV_VAR,
    STANDARD_COMBINATIONS, STANDARD_PACKAGES,
};
pub use rng::{ColorSource, GameRng, GameRngState, ScriptedColors};
