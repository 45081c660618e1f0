//! Commonly used types and utilities for ease of import.

pub use crate::{
    play_match, Answer, Coordinate, Dimensions, EngineConfig, Ocean, Player, SunkPolicy,
    TargetingEngine, World,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_player_view, print_probability_board};
