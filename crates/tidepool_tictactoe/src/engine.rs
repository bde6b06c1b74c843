//! Event-driven game controller.
//!
//! The controller owns the game and talks to the outside world only through
//! the ports: UI events come in through [`GameController::handle`], timers
//! come back through [`GameController::on_timer`], and every visible effect
//! goes out through the [`UiPort`].

use super::game::Game;
use super::phases::{GamePhase, Outcome, Seat};
use super::ports::{GameTimer, RandomSource, Scheduler, TimerId, TimerKind, UiEvent, UiPort};
use super::typestate::GameResult;
use super::{Board, Mark, Move, MoveError, Position, Square};
use derive_getters::Getters;
use std::time::Duration;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// Delays used by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct GameTiming {
    /// Shortest opponent "thinking" pause.
    thinking_min: Duration,
    /// Upper bound (exclusive) of the thinking pause.
    thinking_max: Duration,
    /// Pause between the final move and the result view.
    result_delay: Duration,
}

impl GameTiming {
    /// Creates a timing set.
    pub fn new(thinking_min: Duration, thinking_max: Duration, result_delay: Duration) -> Self {
        Self {
            thinking_min,
            thinking_max,
            result_delay,
        }
    }

    /// No waiting at all.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, Duration::ZERO)
    }
}

impl Default for GameTiming {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(200),
            Duration::from_millis(1200),
            Duration::from_millis(700),
        )
    }
}

/// Runs one human-versus-random game at a time.
#[derive(Debug)]
pub struct GameController<U, S, R> {
    game: Game,
    ui: U,
    scheduler: S,
    random: R,
    timing: GameTiming,
    epoch: u64,
    pending: Option<TimerId>,
    input_enabled: bool,
}

impl<U, S, R> GameController<U, S, R>
where
    U: UiPort,
    S: Scheduler,
    R: RandomSource,
{
    /// Creates a controller waiting for mark selection.
    #[instrument(skip_all)]
    pub fn new(mut ui: U, scheduler: S, random: R, timing: GameTiming) -> Self {
        ui.show_selection();
        ui.set_input_enabled(true);
        Self {
            game: Game::default(),
            ui,
            scheduler,
            random,
            timing,
            epoch: 0,
            pending: None,
            input_enabled: true,
        }
    }

    /// Dispatches a UI event.
    ///
    /// # Errors
    ///
    /// Forwards the rejection from the handler the event maps to.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: UiEvent) -> Result<(), MoveError> {
        match event {
            UiEvent::CellClicked(position) => self.play_human_move(position).map(|_| ()),
            UiEvent::MarkSelected(mark) => self.select_mark(mark),
            UiEvent::ReplayClicked => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Starts a game with the human holding `mark`.
    ///
    /// X moves first; if that is the opponent, its move is scheduled right
    /// away and input stays locked until it lands.
    ///
    /// # Errors
    ///
    /// [`MoveError::AlreadyStarted`] outside mark selection.
    #[instrument(skip(self))]
    pub fn select_mark(&mut self, mark: Mark) -> Result<(), MoveError> {
        let setup = match std::mem::take(&mut self.game) {
            Game::AwaitingSelection(setup) => setup,
            other => {
                self.game = other;
                warn!("Mark selected while a game is running");
                return Err(MoveError::AlreadyStarted);
            }
        };

        let game = setup.start(mark);
        info!(human = %mark, opponent = %game.automated(), "Game started");
        self.game = game.into();
        self.ui.show_board();
        self.ui.set_active(Mark::X);

        if mark == Mark::X {
            self.set_input_enabled(true);
        } else {
            self.set_input_enabled(false);
            self.schedule_opponent();
        }
        Ok(())
    }

    /// Plays the human's mark at `position`.
    ///
    /// Input is locked afterwards whatever the outcome. A non-terminal
    /// outcome schedules the opponent; a terminal one schedules the result
    /// view.
    ///
    /// # Errors
    ///
    /// `NotStarted`, `GameOver`, `NotYourTurn` or `SquareOccupied`. Nothing
    /// changes when a move is rejected.
    #[instrument(skip(self))]
    pub fn play_human_move(&mut self, position: Position) -> Result<Outcome, MoveError> {
        let human = match &self.game {
            Game::AwaitingSelection(_) => return Err(MoveError::NotStarted),
            Game::Finished(_) => return Err(MoveError::GameOver),
            Game::InProgress(game) => game.human(),
        };
        if !self.input_enabled {
            warn!(%position, "Human input while locked");
            return Err(MoveError::NotYourTurn(human));
        }

        let outcome = self.apply(Move::new(human, position))?;
        self.set_input_enabled(false);
        if outcome.is_terminal() {
            self.schedule_result(outcome);
        } else {
            self.schedule_opponent();
        }
        Ok(outcome)
    }

    /// Plays a uniformly random open square for the opponent.
    ///
    /// Returns the square played, or `None` without touching anything when
    /// the game is not in progress, it is not the opponent's turn, or no
    /// square is open.
    ///
    /// # Errors
    ///
    /// Only if the board cannot be scored.
    #[instrument(skip(self))]
    pub fn play_automated_move(&mut self) -> Result<Option<Position>, MoveError> {
        let Game::InProgress(game) = &self.game else {
            debug!("Opponent move skipped: no game in progress");
            return Ok(None);
        };
        let opponent = game.to_move();
        if game.seat_of(opponent) != Seat::Automated {
            debug!("Opponent move skipped: not its turn");
            return Ok(None);
        }
        let open = game.valid_moves();
        if open.is_empty() {
            return Ok(None);
        }

        let position = open[self.random.pick(open.len())];
        let outcome = self.apply(Move::new(opponent, position))?;
        if outcome.is_terminal() {
            self.schedule_result(outcome);
        } else {
            self.set_input_enabled(true);
        }
        Ok(Some(position))
    }

    /// Handles a fired timer. Timers from before the last reset are ignored.
    ///
    /// # Errors
    ///
    /// Forwards errors from the opponent move.
    #[instrument(skip(self))]
    pub fn on_timer(&mut self, timer: GameTimer) -> Result<(), MoveError> {
        if timer.epoch != self.epoch {
            debug!(current = self.epoch, "Dropping stale timer");
            return Ok(());
        }
        self.pending = None;

        match timer.kind {
            TimerKind::OpponentMove => self.play_automated_move().map(|_| ()),
            TimerKind::ShowResult(outcome) => {
                info!(%outcome, "Showing result");
                self.ui.show_result(outcome);
                Ok(())
            }
        }
    }

    /// Back to mark selection with an empty board, from any phase.
    ///
    /// Cancels the pending timer and moves to a new epoch so a timer that
    /// was already in flight cannot touch the new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        self.epoch += 1;
        self.game = Game::default();

        for position in Position::iter() {
            self.ui.render_cell(position, Square::Empty);
        }
        self.ui.show_selection();
        self.set_input_enabled(true);
        info!(epoch = self.epoch, "Game reset");
    }

    fn apply(&mut self, action: Move) -> Result<Outcome, MoveError> {
        let game = match std::mem::take(&mut self.game) {
            Game::InProgress(game) => game,
            other => {
                self.game = other;
                return Err(MoveError::NotStarted);
            }
        };

        let outcome = match game.make_move(action) {
            Ok(GameResult::InProgress(next)) => {
                self.game = next.into();
                Outcome::InProgress
            }
            Ok(GameResult::Finished(done)) => {
                let outcome = done.outcome();
                self.game = done.into();
                outcome
            }
            Err(rejected) => {
                let (game, error) = rejected.into_parts();
                warn!(%action, %error, "Move rejected");
                self.game = game.into();
                return Err(error);
            }
        };

        self.ui
            .render_cell(action.position, Square::Occupied(action.mark));
        self.ui.set_active(action.mark.opponent());
        info!(%action, ?outcome, "Move played");
        Ok(outcome)
    }

    fn schedule_opponent(&mut self) {
        let delay = self
            .random
            .delay_between(self.timing.thinking_min, self.timing.thinking_max);
        debug!(?delay, "Opponent thinking");
        self.schedule(delay, TimerKind::OpponentMove);
    }

    fn schedule_result(&mut self, outcome: Outcome) {
        self.schedule(self.timing.result_delay, TimerKind::ShowResult(outcome));
    }

    fn schedule(&mut self, delay: Duration, kind: TimerKind) {
        let timer = GameTimer {
            epoch: self.epoch,
            kind,
        };
        if let Some(stale) = self.pending.replace(self.scheduler.after(delay, timer)) {
            self.scheduler.cancel(stale);
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
        self.ui.set_input_enabled(enabled);
    }
}

impl<U, S, R> GameController<U, S, R> {
    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.game.phase()
    }

    /// The game in whatever phase it is in.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        self.game.board()
    }

    /// Whether the human may move.
    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Number of resets so far.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether a timer is outstanding.
    pub fn has_pending_timer(&self) -> bool {
        self.pending.is_some()
    }

    /// The view.
    pub fn ui(&self) -> &U {
        &self.ui
    }

    /// Mutable access to the view, e.g. to drain a recorded effect log.
    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler, for hosts that pump timers.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}
