#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod classify;
mod common;
mod config;
mod deadlock;
mod engine;
mod event;
mod gravity;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod matcher;
pub mod prelude;
mod render;
mod shuffle;
mod token;

pub use classify::Classifier;
pub use common::*;
pub use config::*;
pub use deadlock::{board_has_move, has_adjacent_tokens};
pub use engine::{BoardEngine, Phase};
pub use event::{BoardEvent, Discard, EventSink};
pub use gravity::{random_color, GravityResolver};
pub use grid::{Cell, Coord, Grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, level_from_env, LOG_ENV};
pub use matcher::MatchFinder;
pub use shuffle::{partition_group_sizes, ReshuffleEngine, ReshuffleReport};
pub use token::*;
