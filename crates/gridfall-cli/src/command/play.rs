use gridfall_engine::{GameSession, PieceSeed};
use term_runtime::Runtime;

use crate::app::PlayApp;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for deterministic piece generation (32 hexadecimal digits)
    #[clap(long)]
    seed: Option<PieceSeed>,
    /// Simulation rate in frames per second
    #[clap(long, default_value_t = 60)]
    fps: u64,
    /// Hide the drop position preview
    #[clap(long)]
    no_ghost: bool,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            seed: None,
            fps: 60,
            no_ghost: false,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let session = match arg.seed {
        Some(seed) => GameSession::with_seed(arg.fps, seed),
        None => GameSession::new(arg.fps),
    };

    let mut app = PlayApp::new(session, !arg.no_ghost);
    Runtime::new().run(&mut app)?;
    Ok(())
}
