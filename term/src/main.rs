use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::Context;
use checkers_core::Side;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

mod keymap;
mod logger;
mod render;
mod session;

use session::Session;

/// Two-player checkers on an 8x8 board, driven by cursor keys.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Read key presses from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Skip the greeting and key help
    #[arg(long)]
    no_banner: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.verbose.log_level_filter());
    log::debug!("args: {:?}", args);

    let mut session = Session::default();
    let stdout = io::stdout().lock();
    let banner = !args.no_banner;

    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open input file {}", path.display()))?;
            session.run(BufReader::new(file), stdout, banner)?;
        }
        None => session.run(io::stdin().lock(), stdout, banner)?,
    }

    let board = session.engine().board();
    log::info!(
        "session ended with {} to move, white {} black {}",
        session.engine().turn(),
        board.count(Side::White),
        board.count(Side::Black)
    );
    Ok(())
}
