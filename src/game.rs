#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use log::{debug, info};

use crate::{
    common::{Answer, GuessResult},
    grid::Coordinate,
    ocean::Ocean,
    player::Player,
};

/// Summary of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchReport {
    pub guesses: usize,
    pub hits: usize,
    pub misses: usize,
    /// Names of sunk ships in sinking order.
    pub sunk: Vec<&'static str>,
    /// True if every ship was sunk before the guess budget ran out.
    pub won: bool,
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Drives one player against an ocean, one guess/answer exchange per turn.
pub struct Match<'a, P: Player> {
    player: &'a mut P,
    ocean: &'a mut Ocean,
    report: MatchReport,
    max_guesses: usize,
}

impl<'a, P: Player> Match<'a, P> {
    /// The guess budget defaults to the board area, enough for any player
    /// that never repeats a cell.
    pub fn new(player: &'a mut P, ocean: &'a mut Ocean) -> Self {
        let max_guesses = ocean.dimensions().area();
        Self {
            player,
            ocean,
            report: MatchReport {
                guesses: 0,
                hits: 0,
                misses: 0,
                sunk: Vec::new(),
                won: false,
            },
            max_guesses,
        }
    }

    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Evaluate the current match status.
    pub fn status(&self) -> GameStatus {
        if self.ocean.all_sunk() {
            GameStatus::Won
        } else if self.report.guesses >= self.max_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Play a single turn and return the guess with its result.
    ///
    /// A guess the ocean accepted is always counted, even if the player then
    /// fails to take in the answer.
    pub fn step(&mut self) -> anyhow::Result<(Coordinate, GuessResult)> {
        let guess = self.player.make_guess();
        let result = self.ocean.guess(guess).map_err(|e| anyhow::anyhow!(e))?;
        self.record(result);
        self.player
            .update(guess, Answer::from(result))
            .map_err(|e| anyhow::anyhow!(e))?;
        Ok((guess, result))
    }

    fn record(&mut self, result: GuessResult) {
        self.report.guesses += 1;
        match result {
            GuessResult::Miss => self.report.misses += 1,
            GuessResult::Hit => self.report.hits += 1,
            GuessResult::Sink(ship) => {
                self.report.hits += 1;
                self.report.sunk.push(ship.name());
                debug!("turn {}: sank {}", self.report.guesses, ship);
            }
        }
    }

    /// Play until the fleet is sunk or the guess budget is spent.
    pub fn run(mut self) -> anyhow::Result<MatchReport> {
        while self.status() == GameStatus::InProgress {
            self.step()?;
        }
        self.report.won = self.status() == GameStatus::Won;
        info!(
            "match finished after {} guesses ({} hits, {} misses), won: {}",
            self.report.guesses, self.report.hits, self.report.misses, self.report.won
        );
        Ok(self.report)
    }

    pub fn player(&self) -> &P {
        &*self.player
    }

    pub fn report(&self) -> &MatchReport {
        &self.report
    }
}

/// Convenience wrapper running a full match.
pub fn play_match<P: Player>(player: &mut P, ocean: &mut Ocean) -> anyhow::Result<MatchReport> {
    Match::new(player, ocean).run()
}
