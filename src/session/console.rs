//! Line-oriented terminal front end.
//!
//! Menus are numbered from 1; the player types a number and Enter. Any
//! answer that is not a listed number is an error, not a re-prompt.

use std::io::{BufRead, Write};

use crate::board::{Board, ROW_WIDTH};
use crate::core::{Palette, RewardTable};
use crate::events::{AcquiredTotals, Event, EventKind};

use super::{FinalTally, Interaction, InteractionError, Renderer};

const EMPTY_CELL: &str = "Empty";

/// Terminal interaction and rendering over a reader/writer pair.
///
/// ```
/// use lucky_board::session::{Console, Interaction};
///
/// let mut console = Console::new(&b"2\n"[..], Vec::new());
/// let items = vec!["Red".to_string(), "Yellow".to_string()];
///
/// assert_eq!(console.select("Pick", &items).unwrap(), 1);
/// ```
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<String, InteractionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InteractionError::Closed);
        }
        Ok(line.trim().to_string())
    }

    fn write_header(&mut self, title: &str) -> std::io::Result<()> {
        writeln!(self.output, "========== {} ==========", title)
    }

    fn write_totals_line(&mut self, totals: &AcquiredTotals, palette: &Palette) -> std::io::Result<()> {
        self.write_header("acquired")?;
        for (color, count) in totals.iter() {
            let name = palette.name(color).unwrap_or("?");
            write!(self.output, "{}: {}; ", name, count)?;
        }
        writeln!(self.output)
    }
}

impl<R: BufRead, W: Write> Interaction for Console<R, W> {
    fn select(&mut self, label: &str, items: &[String]) -> Result<usize, InteractionError> {
        writeln!(self.output, "{}", label)?;
        for (i, item) in items.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, item)?;
        }
        write!(self.output, "> ")?;
        self.output.flush()?;

        let answer = self.read_answer()?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=items.len()).contains(&n) => Ok(n - 1),
            _ => Err(InteractionError::InvalidChoice {
                input: answer,
                count: items.len(),
            }),
        }
    }

    fn acknowledge(&mut self, label: &str) -> Result<(), InteractionError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;
        self.read_answer().map(|_| ())
    }
}

impl<R: BufRead, W: Write> Renderer for Console<R, W> {
    fn intro(&mut self, rewards: &RewardTable) -> std::io::Result<()> {
        writeln!(self.output, "Game Introduction")?;
        for (i, kind) in EventKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {} +{}", i + 1, kind, rewards.points(*kind))?;
        }
        Ok(())
    }

    fn chosen(&mut self, item: &str) -> std::io::Result<()> {
        writeln!(self.output, "You choose {}", item)
    }

    fn board(&mut self, board: &Board, palette: &Palette) -> std::io::Result<()> {
        self.write_header("board")?;
        for (i, cell) in board.cells().iter().enumerate() {
            let label = cell.and_then(|c| palette.name(c)).unwrap_or(EMPTY_CELL);
            write!(self.output, "{:<10} ", label)?;
            if i % ROW_WIDTH == ROW_WIDTH - 1 {
                writeln!(self.output)?;
            }
        }
        Ok(())
    }

    fn events(&mut self, events: &[Event], rewards: &RewardTable) -> std::io::Result<()> {
        if events.is_empty() {
            return Ok(());
        }
        self.write_header("events")?;
        for event in events {
            writeln!(
                self.output,
                "Event: {:<20} +{}",
                event.kind.display_name(),
                rewards.points(event.kind)
            )?;
        }
        Ok(())
    }

    fn totals(&mut self, totals: &AcquiredTotals, palette: &Palette, remaining: u32) -> std::io::Result<()> {
        self.write_totals_line(totals, palette)?;
        writeln!(self.output, "Remaining: {}", remaining)
    }

    fn final_tally(&mut self, tally: &FinalTally, palette: &Palette) -> std::io::Result<()> {
        self.write_totals_line(&tally.totals, palette)?;
        writeln!(self.output, "You have received {} toys", tally.grand_total)?;
        self.output.flush()
    }
}
