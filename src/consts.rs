//! Assorted constants & hard-coded configuration
use crate::game::{Direction, Position};
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Default width of the arena, in arena units
pub(crate) const ARENA_WIDTH: i32 = 720;

/// Default height of the arena, in arena units
pub(crate) const ARENA_HEIGHT: i32 = 480;

/// Default size of the grid that food is placed on and that segments are
/// drawn at
pub(crate) const BLOCK_SIZE: i32 = 20;

/// Default distance the snake travels on each tick
pub(crate) const STEP: i32 = 10;

/// Where the snake's head starts
pub(crate) const INITIAL_HEAD: Position = Position::new(100, 50);

/// Number of segments, head included, that the snake starts with.  The rest
/// of the body trails behind the head one step apart.
pub(crate) const INITIAL_LENGTH: usize = 3;

/// The direction the snake is moving in at the start of a game
pub(crate) const INITIAL_DIRECTION: Direction = Direction::Right;

/// Name of the directory under the local config & data directories in which
/// the program's files are kept
pub(crate) const DIR_NAME: &str = "gridsnake";

/// File name of the high score record within the local data directory
pub(crate) const HIGH_SCORE_FILE_NAME: &str = "highscore.txt";

/// Color of the snake
pub(crate) const SNAKE_COLOR: Color = Color::Green;

/// Color of the food
pub(crate) const FOOD_COLOR: Color = Color::LightRed;

/// Color of the snake's head once it's crashed into something
pub(crate) const COLLISION_COLOR: Color = Color::Red;

/// Style for the title on the difficulty menu
pub(crate) const TITLE_STYLE: Style = Style::new().fg(SNAKE_COLOR).add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Style for the "new high score" notice on the game over screen
pub(crate) const NEW_HIGH_SCORE_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .add_modifier(Modifier::BOLD);
