use std::io::{BufRead, Write};

use anyhow::Context;
use checkers_core::{Command, GameEngine, Outcome};

use crate::keymap;
use crate::render::render;

pub const BANNER: &str = "Hi! This is Checkers\n\
    hjkl or arrows to move cursor,\n\
    space to select\n\
    q to exit\n\
    (finish each line with Enter)\n";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Unchanged,
    Updated,
    Quit,
}

/// Feeds decoded key presses into a [`GameEngine`] and renders the result.
#[derive(Debug, Default)]
pub struct Session {
    engine: GameEngine,
}

impl Session {
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Applies every mapped key on `line` in order, stopping at the first quit.
    pub fn feed(&mut self, line: &str) -> Flow {
        let mut flow = Flow::Unchanged;
        for key in keymap::decode(line) {
            let Some(command) = key.command() else {
                log::trace!("unmapped key {:?}", key);
                continue;
            };
            if command == Command::Quit {
                return Flow::Quit;
            }
            let outcome = self.engine.apply(command);
            if let Outcome::Confirm(confirm) = outcome {
                log::info!("{:?}: {}", confirm, self.engine.status());
            }
            if outcome.has_update() {
                flow = Flow::Updated;
            }
        }
        flow
    }

    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
        banner: bool,
    ) -> anyhow::Result<()> {
        if banner {
            writer.write_all(BANNER.as_bytes())?;
        }
        writer.write_all(render(&self.engine.snapshot()).as_bytes())?;
        writer.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = reader
                .read_line(&mut line)
                .context("Could not read input")?;
            if read == 0 {
                log::debug!("input closed");
                break;
            }
            match self.feed(&line) {
                Flow::Quit => {
                    log::debug!("quit requested");
                    break;
                }
                Flow::Unchanged => continue,
                Flow::Updated => {}
            }
            writer.write_all(render(&self.engine.snapshot()).as_bytes())?;
            writer.flush()?;
        }
        Ok(())
    }
}
