use crate::{
    common::{Answer, EngineError},
    grid::Coordinate,
};

/// Interface between a guessing player and the game loop driving it.
///
/// The loop calls [`make_guess`](Player::make_guess), resolves the guess
/// against the opponent and reports the outcome through
/// [`update`](Player::update). Calls are strictly alternating.
pub trait Player {
    /// Choose the next cell to attack.
    fn make_guess(&mut self) -> Coordinate;

    /// Inform the player of the result of its last guess.
    fn update(&mut self, guess: Coordinate, answer: Answer) -> Result<(), EngineError>;
}
