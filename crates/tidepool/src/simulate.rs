//! Headless games with a random player in the human seat.

use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::Serialize;
use tidepool_tictactoe::{
    Board, BoardView, GameController, GamePhase, GameTiming, ManualScheduler, Mark, MoveError,
    Outcome, Position, RandomSource, RngSource, Screen, UiEvent,
};
use tracing::{debug, info, instrument};

/// Why a simulated game could not be completed.
#[derive(Debug, Display, Error, From)]
pub enum SimulationError {
    /// The engine refused a command.
    #[display("Engine rejected a simulated command: {}", _0)]
    Move(MoveError),

    /// The game finished but the view never switched to the result screen.
    #[display("Game {} finished without showing a result", _0)]
    #[from(ignore)]
    ResultNotShown(#[error(not(source))] u32),
}

/// Results of a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct Tally {
    /// Games played.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Tally {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        self.games += 1;
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Drawn => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameRecord {
    /// 1-based game number.
    number: u32,
    /// Mark the random "human" played.
    human: Mark,
    /// Final board.
    board: Board,
    /// Result shown at the end.
    outcome: Outcome,
}

/// Drives the game engine with timers fired immediately.
pub struct Simulation {
    controller: GameController<BoardView, ManualScheduler, RngSource>,
    player: RngSource,
}

impl Simulation {
    /// Creates a simulation. The same seed replays the same games.
    pub fn new(seed: Option<u64>, timing: GameTiming) -> Self {
        let (opponent, player) = match seed {
            Some(seed) => (
                RngSource::from_seed(seed),
                RngSource::from_seed(seed.wrapping_add(1)),
            ),
            None => (RngSource::from_entropy(), RngSource::from_entropy()),
        };
        Self {
            controller: GameController::new(BoardView::new(), ManualScheduler::new(), opponent, timing),
            player,
        }
    }

    /// Plays one game to the result view, then resets for the next.
    #[instrument(skip(self))]
    pub fn play_one(&mut self, number: u32) -> Result<GameRecord, SimulationError> {
        let human = if self.player.pick(2) == 0 { Mark::X } else { Mark::O };
        self.controller.handle(UiEvent::MarkSelected(human))?;

        loop {
            self.controller.settle()?;
            match self.controller.phase() {
                GamePhase::InProgress { .. } => {
                    let open = Position::valid_moves(self.controller.board());
                    let position = open[self.player.pick(open.len())];
                    self.controller.play_human_move(position)?;
                }
                GamePhase::Won(_) | GamePhase::Drawn => break,
                GamePhase::AwaitingSelection => return Err(MoveError::NotStarted.into()),
            }
        }

        let Screen::Result(outcome) = self.controller.ui().screen() else {
            return Err(SimulationError::ResultNotShown(number));
        };
        let record = GameRecord {
            number,
            human,
            board: self.controller.board().clone(),
            outcome,
        };
        debug!(%outcome, "Game finished");

        self.controller.reset();
        self.controller.ui_mut().clear_effects();
        Ok(record)
    }

    /// Plays `games` games, handing each record to `on_game`.
    #[instrument(skip(self, on_game))]
    pub fn run(
        &mut self,
        games: u32,
        mut on_game: impl FnMut(&GameRecord),
    ) -> Result<Tally, SimulationError> {
        let mut tally = Tally::default();
        for number in 1..=games {
            let record = self.play_one(number)?;
            tally.record(record.outcome);
            on_game(&record);
        }
        info!(%tally, "Simulation complete");
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_each_outcome() {
        let mut tally = Tally::default();
        tally.record(Outcome::Won(Mark::X));
        tally.record(Outcome::Won(Mark::O));
        tally.record(Outcome::Drawn);
        tally.record(Outcome::Drawn);
        assert_eq!(
            (*tally.games(), *tally.x_wins(), *tally.o_wins(), *tally.draws()),
            (4, 1, 1, 2)
        );
        assert_eq!(tally.to_string(), "4 games: X won 1, O won 1, 2 drawn");
    }

    #[test]
    fn test_simulation_errors_keep_their_cause() {
        let err = SimulationError::from(MoveError::GameOver);
        assert!(matches!(err, SimulationError::Move(MoveError::GameOver)));
        assert_eq!(
            err.to_string(),
            "Engine rejected a simulated command: Game is already over"
        );
        assert!(std::error::Error::source(&err).is_some());

        let err = SimulationError::ResultNotShown(3);
        assert_eq!(err.to_string(), "Game 3 finished without showing a result");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_tally_serializes_flat() {
        let mut tally = Tally::default();
        tally.record(Outcome::Drawn);
        let json = serde_json::to_value(tally).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "games": 1, "x_wins": 0, "o_wins": 0, "draws": 1 })
        );
    }
}
