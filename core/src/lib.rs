//! Rules engine for two-player checkers played with a grid cursor.
//!
//! [`GameEngine`] consumes [`Command`]s from an input collaborator and hands
//! out [`Snapshot`]s for rendering. Move legality is delegated to a
//! [`MoveRules`] implementation, [`BasicRules`] by default.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use rules::*;
pub use status::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod rules;
mod status;
mod types;
