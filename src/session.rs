use crate::command::Command;
use crate::difficulty::Difficulty;
use crate::game::{Arena, Direction, GameState, Position, StepResult};
use crate::highscore::{HighScore, ScoreStore};
use crate::menu::DifficultyMenu;
use crate::warning::{Warning, WarningOutcome};
use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// A run of the program from the difficulty menu until the player quits.
///
/// The session owns the high score and the storage it is persisted to; the
/// game state only ever reports scores upwards.
#[derive(Debug)]
pub(crate) struct Session<S, R = rand::rngs::ThreadRng> {
    store: S,
    high_score: HighScore,
    /// Set when the in-memory high score has not yet been written to `store`
    unsaved: bool,
    game: GameState<R>,
    difficulty: Difficulty,
    /// The direction most recently requested by the player
    pending: Direction,
    phase: Phase,
    warnings: VecDeque<Warning>,
}

impl<S: ScoreStore> Session<S> {
    pub(crate) fn new(store: S, arena: Arena) -> Self {
        Session::new_with_game(store, GameState::new(arena))
    }
}

impl<S: ScoreStore, R: Rng> Session<S, R> {
    pub(crate) fn new_with_game(store: S, game: GameState<R>) -> Session<S, R> {
        let mut warnings = VecDeque::new();
        let high_score = match store.load() {
            Ok(score) => {
                info!("Loaded high score of {score}");
                HighScore::new(score)
            }
            Err(e) => {
                warnings.push_back(Warning::logged(&e));
                HighScore::default()
            }
        };
        let pending = game.direction();
        Session {
            store,
            high_score,
            unsaved: false,
            game,
            difficulty: Difficulty::default(),
            pending,
            phase: Phase::Menu(DifficultyMenu::default()),
            warnings,
        }
    }

    /// Act on a command from the player
    pub(crate) fn handle_command(&mut self, cmd: Command) {
        if let Some(warning) = self.warnings.front_mut() {
            match warning.handle_command(cmd) {
                Some(WarningOutcome::Dismissed) => {
                    let _ = self.warnings.pop_front();
                }
                Some(WarningOutcome::Quit) => self.quit(),
                None => (),
            }
            return;
        }
        match self.phase {
            Phase::Menu(ref mut menu) => match cmd {
                Command::Quit | Command::Q => self.quit(),
                cmd => {
                    if let Some(difficulty) = menu.handle_command(cmd) {
                        self.start(difficulty);
                    }
                }
            },
            Phase::Playing => match cmd {
                Command::Quit => self.quit(),
                cmd => {
                    if let Some(d) = cmd.direction() {
                        self.pending = d;
                    }
                }
            },
            Phase::GameOver { .. } => match cmd {
                Command::R => self.retry(),
                Command::Quit | Command::Q => self.quit(),
                _ => (),
            },
            Phase::Terminated => (),
        }
    }

    /// Advance the game by one tick.  Does nothing outside of the `Playing`
    /// phase.
    pub(crate) fn tick(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let result = self.game.step(self.pending);
        if matches!(result, StepResult::Collided(_)) {
            self.game_over(result.score());
        }
    }

    fn start(&mut self, difficulty: Difficulty) {
        info!(
            "Starting game on {difficulty} ({} ticks per second)",
            difficulty.ticks_per_second()
        );
        self.difficulty = difficulty;
        self.pending = self.game.direction();
        self.phase = Phase::Playing;
    }

    fn retry(&mut self) {
        debug!("Restarting game on {}", self.difficulty);
        self.game.reset();
        self.pending = self.game.direction();
        self.phase = Phase::Playing;
    }

    fn game_over(&mut self, score: u32) {
        let head = self.game.head();
        info!(
            "Game over with score {score} and snake length {}",
            self.game.snake_len()
        );
        debug!("Snake crashed at ({}, {})", head.x, head.y);
        let new_high_score = self.high_score.record(score);
        if new_high_score {
            info!("New high score: {score}");
            self.unsaved = true;
            self.flush();
        }
        self.phase = Phase::GameOver {
            score,
            new_high_score,
        };
    }

    /// Write the high score to storage if it has changed since it was last
    /// successfully written
    fn flush(&mut self) {
        if !self.unsaved {
            return;
        }
        match self.store.save(self.high_score.get()) {
            Ok(()) => {
                debug!("Saved high score of {}", self.high_score.get());
                self.unsaved = false;
            }
            Err(e) => self.warnings.push_back(Warning::logged(&e)),
        }
    }

    fn quit(&mut self) {
        self.flush();
        info!("Quitting");
        self.phase = Phase::Terminated;
    }
}

impl<S, R> Session<S, R> {
    pub(crate) fn terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// How long to wait between ticks, or `None` if the session is waiting
    /// for input instead
    pub(crate) fn tick_period(&self) -> Option<Duration> {
        (self.phase == Phase::Playing && self.warnings.is_empty())
            .then(|| self.difficulty.tick_period())
    }

    /// Capture everything needed to draw the current state of the session
    pub(crate) fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            phase: self.phase,
            difficulty: self.difficulty,
            arena: self.game.arena(),
            snake: self.game.snake().collect(),
            food: self.game.food(),
            score: self.game.score(),
            high_score: self.high_score.get(),
            warning: self.warnings.front(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Phase {
    /// Waiting for the player to pick a difficulty
    Menu(DifficultyMenu),
    Playing,
    /// The snake has crashed; waiting for the player to retry or quit
    GameOver { score: u32, new_high_score: bool },
    Terminated,
}

/// The data a renderer needs to draw one frame
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snapshot<'a> {
    pub(crate) phase: Phase,
    pub(crate) difficulty: Difficulty,
    pub(crate) arena: Arena,
    /// Positions of the snake's segments, head first
    pub(crate) snake: Vec<Position>,
    pub(crate) food: Position,
    pub(crate) score: u32,
    pub(crate) high_score: u32,
    /// A warning pop-up to draw on top of everything else
    pub(crate) warning: Option<&'a Warning>,
}
