//! Blocking driver that plays rounds against input and output collaborators.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::decision::parse_play_again;
use crate::error::{ActionError, SessionError};
use crate::game::{RoundEngine, RoundState, Snapshot};
use crate::result::RoundResult;

/// Prompt shown at the end of a round.
pub const PLAY_AGAIN_PROMPT: &str = "Play again? (y/n)";

/// Supplies the player's answers.
///
/// Every method returns `None` once input is closed; the session then stops.
pub trait Input {
    /// Free-text name, asked once per session.
    fn player_name(&mut self) -> Option<String>;

    /// Raw text for the next decision during the player's turn.
    fn decision(&mut self) -> Option<String>;

    /// Raw answer to the play-again prompt.
    fn play_again(&mut self) -> Option<String>;
}

/// Receives a table snapshot after every change.
pub trait Output {
    /// Draws the table.
    fn render(&mut self, snapshot: &Snapshot);
}

/// How a round driven by [`Session::play_round`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundReport {
    /// The round was played to the end.
    Finished(RoundResult),
    /// Input closed mid-round; the engine was reset.
    Aborted,
}

/// One player's session at the table.
#[derive(Debug)]
pub struct Session<I, O> {
    engine: RoundEngine,
    input: I,
    output: O,
}

impl<I: Input, O: Output> Session<I, O> {
    /// Creates a session around an engine and its collaborators.
    pub const fn new(engine: RoundEngine, input: I, output: O) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Returns the engine.
    pub const fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Splits the session back into its parts.
    pub fn into_parts(self) -> (RoundEngine, I, O) {
        (self.engine, self.input, self.output)
    }

    fn render(&mut self) {
        let snapshot = self.engine.snapshot();
        self.output.render(&snapshot);
    }

    /// Asks for a name, then plays rounds until the player declines another
    /// or input closes.
    ///
    /// Returns the number of rounds played to the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails mid-round.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        if let Some(name) = self.input.player_name() {
            self.engine.set_player_name(&name);
        }

        let mut rounds = 0;
        loop {
            match self.play_round()? {
                RoundReport::Finished(_) => rounds += 1,
                RoundReport::Aborted => break,
            }

            if !self.ask_play_again() {
                break;
            }
        }

        log::info!("session over after {rounds} round(s)");
        Ok(rounds)
    }

    /// Plays a single round from a fresh deal to resolution.
    ///
    /// The table is rendered after every opening card and every dealer draw.
    /// Invalid decisions are reported through the status line and asked
    /// again, with no limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine fails mid-round.
    pub fn play_round(&mut self) -> Result<RoundReport, SessionError> {
        if self.engine.state() != RoundState::Dealing {
            self.engine.reset();
        }

        while self.engine.state() == RoundState::Dealing {
            self.engine.deal_next()?;
            self.render();
        }

        while self.engine.state() == RoundState::PlayerTurn {
            let Some(line) = self.input.decision() else {
                self.engine.reset();
                return Ok(RoundReport::Aborted);
            };

            match self.engine.apply(&line) {
                Ok(_) | Err(ActionError::InvalidDecision(_)) => {}
                Err(err) => return Err(err.into()),
            }
            self.render();
        }

        if self.engine.state() == RoundState::RevealDealer {
            self.engine.reveal_dealer()?;
            self.render();
        }

        while self.engine.state() == RoundState::DealerTurn {
            self.engine.dealer_hit()?;
            self.render();
        }

        Ok(self
            .engine
            .result()
            .map_or(RoundReport::Aborted, RoundReport::Finished))
    }

    fn ask_play_again(&mut self) -> bool {
        let outcome = self.engine.messages().game_status.clone();
        loop {
            let Some(answer) = self.input.play_again() else {
                return false;
            };

            if let Some(again) = parse_play_again(&answer) {
                return again;
            }

            log::warn!("rejected play-again answer {answer:?}");
            self.engine.set_game_status(format!(
                "{outcome} Please answer y or n. {PLAY_AGAIN_PROMPT}"
            ));
            self.render();
        }
    }
}
