#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod counter;
mod engine;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod ocean;
mod player;
pub mod prelude;
mod probability;
mod ship;
mod targeting;
#[cfg(feature = "std")]
mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use counter::*;
pub use engine::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use ocean::*;
pub use player::*;
pub use probability::*;
pub use ship::*;
pub use targeting::*;
#[cfg(feature = "std")]
pub use ui::*;
