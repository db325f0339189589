//! Session state machine and driver.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::board::{Board, BoardEngine};
use crate::core::{ColorId, ColorSource};
use crate::events::{AcquiredTotals, Event};

use super::{
    Interaction, InteractionError, Renderer, SessionError, CONTINUE_PROMPT, LUCKY_COLOR_LABEL,
    PACKAGE_LABEL, START_PROMPT,
};

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// 1-based round number.
    pub round: u32,
    /// Board after placement, before matches were cleared.
    pub placed: Board,
    /// Lucky Color events followed by resolution events.
    pub events: Vec<Event>,
    /// Budget after rewards.
    pub remaining: u32,
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTally {
    /// Acquired tokens, including those left on the board.
    pub totals: AcquiredTotals,
    /// Tokens that were still on the board at the end.
    pub residual: u32,
    /// Sum of all totals.
    pub grand_total: u32,
    /// Rounds played.
    pub rounds: u32,
}

/// A game in progress.
///
/// Owns the board, the totals and the color source for its whole lifetime.
#[derive(Debug)]
pub struct Session<S> {
    engine: BoardEngine,
    board: Board,
    totals: AcquiredTotals,
    remaining: u32,
    lucky: ColorId,
    source: S,
    round: u32,
}

impl<S: ColorSource> Session<S> {
    /// Start a game with an empty board and a budget of `package` draws.
    pub fn new(engine: BoardEngine, lucky: ColorId, package: u32, source: S) -> Self {
        assert!(
            engine.config().palette.contains(lucky),
            "Lucky color must be in the palette"
        );
        let totals = AcquiredTotals::new(engine.config().palette.len());
        Self {
            engine,
            board: Board::new(),
            totals,
            remaining: package,
            lucky,
            source,
            round: 0,
        }
    }

    /// The engine and its configuration.
    #[must_use]
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tokens acquired so far.
    #[must_use]
    pub fn totals(&self) -> &AcquiredTotals {
        &self.totals
    }

    /// Draws left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The player's lucky color.
    #[must_use]
    pub fn lucky(&self) -> ColorId {
        self.lucky
    }

    /// The color source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Rounds played so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.round
    }

    /// No draws left.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Place, resolve and account one round.
    pub fn play_round(&mut self) -> RoundReport {
        self.round += 1;

        let placement = self
            .engine
            .place(&mut self.board, self.remaining, self.lucky, &mut self.source);
        let placed = self.board.clone();

        let mut events = placement.events;
        events.extend(self.engine.resolve(&mut self.board));

        self.remaining = self
            .engine
            .apply_events(&events, &mut self.totals, placement.remaining);

        info!(
            round = self.round,
            drawn = placement.filled.len(),
            events = events.len(),
            remaining = self.remaining,
            "round complete"
        );

        RoundReport {
            round: self.round,
            placed,
            events,
            remaining: self.remaining,
        }
    }

    /// End the game, counting tokens left on the board.
    pub fn finish(mut self) -> FinalTally {
        let residual = self.board.occupied_count() as u32;
        self.totals.fold_board(&self.board);
        let grand_total = self.totals.total();
        info!(rounds = self.round, residual, grand_total, "game over");

        FinalTally {
            totals: self.totals,
            residual,
            grand_total,
            rounds: self.round,
        }
    }
}

/// Play a full game.
///
/// `ui` is both the input and the display surface. Selection failures are
/// returned as errors; the caller decides how to end the process. Failed
/// acknowledgements are logged and treated as accepted.
pub fn run<U, S>(engine: BoardEngine, ui: &mut U, source: S) -> Result<FinalTally, SessionError>
where
    U: Interaction + Renderer + ?Sized,
    S: ColorSource,
{
    let config = engine.config();
    ui.intro(&config.rewards)?;
    acknowledge(ui, START_PROMPT);

    let names = config.palette.names();
    let color_index = select(ui, LUCKY_COLOR_LABEL, names).map_err(SessionError::LuckyColor)?;
    ui.chosen(&names[color_index])?;
    let lucky = ColorId::from_index(color_index);

    let labels = config.package_labels();
    let package_index = select(ui, PACKAGE_LABEL, &labels).map_err(SessionError::Package)?;
    ui.chosen(&labels[package_index])?;
    let package = config.packages[package_index];

    info!(%lucky, package, "game started");
    let palette = config.palette.clone();
    let rewards = config.rewards;
    let mut session = Session::new(engine, lucky, package, source);

    while !session.is_finished() {
        let report = session.play_round();
        ui.board(&report.placed, &palette)?;
        ui.events(&report.events, &rewards)?;
        ui.totals(session.totals(), &palette, report.remaining)?;
        acknowledge(ui, CONTINUE_PROMPT);
    }

    let tally = session.finish();
    ui.final_tally(&tally, &palette)?;
    Ok(tally)
}

fn select<I>(interaction: &mut I, label: &str, items: &[String]) -> Result<usize, InteractionError>
where
    I: Interaction + ?Sized,
{
    let index = interaction.select(label, items)?;
    if index < items.len() {
        Ok(index)
    } else {
        Err(InteractionError::InvalidChoice {
            input: index.to_string(),
            count: items.len(),
        })
    }
}

fn acknowledge<I>(interaction: &mut I, label: &str)
where
    I: Interaction + ?Sized,
{
    if let Err(err) = interaction.acknowledge(label) {
        warn!(%err, "acknowledgement failed, continuing");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedColors;
    use crate::events::EventKind;

    #[test]
    fn test_new_session() {
        let session = Session::new(BoardEngine::standard(), ColorId::new(2), 18, ScriptedColors::new([]));
        assert_eq!(session.remaining(), 18);
        assert!(session.board().is_clear());
        assert_eq!(session.totals().total(), 0);
        assert_eq!(session.rounds(), 0);
        assert!(!session.is_finished());
    }

    #[test]
    #[should_panic(expected = "Lucky color must be in the palette")]
    fn test_lucky_color_outside_palette() {
        let _ = Session::new(BoardEngine::standard(), ColorId::new(11), 9, ScriptedColors::new([]));
    }

    #[test]
    fn test_round_with_pair() {
        let colors = ScriptedColors::new([3, 3, 1]);
        let mut session = Session::new(BoardEngine::standard(), ColorId::new(9), 3, colors);

        let report = session.play_round();

        assert_eq!(report.round, 1);
        assert_eq!(report.placed.to_raw(), [3, 3, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(report.events.len(), 1);
        assert_eq!(report.events[0].kind, EventKind::OnePair);
        // 3 draws spent, One Pair refunds 1.
        assert_eq!(report.remaining, 1);
        assert_eq!(session.totals().get(ColorId::new(3)), 2);
        assert_eq!(session.board().to_raw(), [0, 0, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_lucky_color_extends_play() {
        let colors = ScriptedColors::new([5]);
        let mut session = Session::new(BoardEngine::standard(), ColorId::new(5), 1, colors);

        let report = session.play_round();

        assert_eq!(report.events[0].kind, EventKind::LuckyColor);
        assert_eq!(report.remaining, 1);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_finish_folds_residual() {
        let colors = ScriptedColors::new([1, 2]);
        let mut session = Session::new(BoardEngine::standard(), ColorId::new(9), 2, colors);

        session.play_round();
        assert!(session.is_finished());

        let tally = session.finish();
        assert_eq!(tally.residual, 2);
        assert_eq!(tally.grand_total, 2);
        assert_eq!(tally.rounds, 1);
        assert_eq!(tally.totals.get(ColorId::new(1)), 1);
        assert_eq!(tally.totals.get(ColorId::new(2)), 1);
    }
}
