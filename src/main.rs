//! Play the lucky board game in a terminal.
//!
//! Set `LUCKY_BOARD_SEED` to replay a game; `RUST_LOG` controls logging
//! (written to stderr).

use std::io;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use lucky_board::core::seed_from_env;
use lucky_board::{run, BoardEngine, Console, GameRng};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let rng = match seed_from_env() {
        Ok(Some(seed)) => GameRng::new(seed),
        Ok(None) => GameRng::from_entropy(),
        Err(err) => {
            warn!(%err, "ignoring seed");
            GameRng::from_entropy()
        }
    };
    info!(seed = rng.seed(), "rng ready");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let engine = BoardEngine::standard();

    if let Err(err) = run(engine, &mut console, rng) {
        println!("{}", err);
        std::process::exit(1);
    }
}
