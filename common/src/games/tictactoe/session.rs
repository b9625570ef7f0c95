use std::time::{Duration, Instant};

use crate::{log, log_warn};
use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::SessionError;
use super::types::{GameStatus, Mark, Position, WinningLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer { human: Mark },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Human,
    Computer,
}

impl GameMode {
    pub fn controller(self, mark: Mark) -> Controller {
        match self {
            GameMode::PlayerVsPlayer => Controller::Human,
            GameMode::PlayerVsComputer { human } if human == mark => Controller::Human,
            GameMode::PlayerVsComputer { .. } => Controller::Computer,
        }
    }

    pub fn computer_mark(self) -> Option<Mark> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer { human } => Some(human.opponent()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(Mark),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingMove(Mark),
    Terminal(Outcome),
}

/// One round of play as seen by the shell: the board, who controls each mark,
/// and whose turn it is. X always opens.
///
/// Computer turns are not played automatically. The shell checks
/// [`GameSession::is_computer_turn`] and calls [`GameSession::play_computer_turn`].
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    mode: GameMode,
    state: RoundState,
    last_move: Option<Position>,
    started_at: Instant,
    finished_after: Option<Duration>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        log!("Starting round in {:?} mode", mode);
        Self {
            board: Board::new(),
            mode,
            state: RoundState::AwaitingMove(Mark::X),
            last_move: None,
            started_at: Instant::now(),
            finished_after: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn status(&self) -> GameStatus {
        match self.state {
            RoundState::AwaitingMove(_) => GameStatus::InProgress,
            RoundState::Terminal(Outcome::Won(mark)) => GameStatus::Won(mark),
            RoundState::Terminal(Outcome::Draw) => GameStatus::Draw,
        }
    }

    pub fn current_mark(&self) -> Option<Mark> {
        match self.state {
            RoundState::AwaitingMove(mark) => Some(mark),
            RoundState::Terminal(_) => None,
        }
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_mark()
            .is_some_and(|mark| self.mode.controller(mark) == Controller::Human)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.current_mark()
            .is_some_and(|mark| self.mode.controller(mark) == Controller::Computer)
    }

    /// Time since the round started, frozen once it ends.
    pub fn elapsed(&self) -> Duration {
        self.finished_after
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    pub fn place_human_mark(&mut self, pos: Position) -> Result<(), SessionError> {
        let RoundState::AwaitingMove(mark) = self.state else {
            return Err(SessionError::GameOver);
        };
        if self.mode.controller(mark) != Controller::Human {
            return Err(SessionError::NotHumanTurn);
        }
        self.apply_move(pos, mark)?;
        Ok(())
    }

    pub fn play_computer_turn(&mut self) -> Option<Position> {
        if !self.is_computer_turn() {
            return None;
        }
        let mark = self.current_mark()?;
        let pos = calculate_move(&BotInput::new(&self.board, mark))?;

        match self.apply_move(pos, mark) {
            Ok(()) => Some(pos),
            Err(e) => {
                log_warn!("Computer move {} rejected: {}", pos, e);
                None
            }
        }
    }

    /// Starts a new round in the same mode.
    pub fn restart(&mut self) {
        log!("Restarting round in {:?} mode", self.mode);
        self.board.reset();
        self.state = RoundState::AwaitingMove(Mark::X);
        self.last_move = None;
        self.started_at = Instant::now();
        self.finished_after = None;
    }

    fn apply_move(&mut self, pos: Position, mark: Mark) -> Result<(), SessionError> {
        self.board.place(pos, mark)?;
        self.last_move = Some(pos);
        log!("{} played {}", mark, pos);

        self.state = match self.board.status() {
            GameStatus::InProgress => RoundState::AwaitingMove(mark.opponent()),
            GameStatus::Won(winner) => RoundState::Terminal(Outcome::Won(winner)),
            GameStatus::Draw => RoundState::Terminal(Outcome::Draw),
        };

        if let RoundState::Terminal(outcome) = self.state {
            let elapsed = self.started_at.elapsed();
            self.finished_after = Some(elapsed);
            log!("Round over: {:?} after {}s", outcome, elapsed.as_secs());
        }
        Ok(())
    }
}
