#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod coord;
mod event;
pub mod fit;
mod game;
mod player;
mod player_ai;
mod rules;
pub mod targeting;
mod vessel;
#[cfg(feature = "std")]
mod action_log;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use event::*;
pub use fit::FitPolicy;
pub use game::*;
pub use player::*;
pub use player_ai::*;
pub use rules::*;
pub use targeting::{select_target, smallest_vessel_alive, WeightMap};
pub use vessel::*;
#[cfg(feature = "std")]
pub use action_log::{format_date, format_time, now_unix_s, ActionLog};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
