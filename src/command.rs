use crate::game::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An abstract input command, decoupled from the keys that produce it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    R,
    Q,
    One,
    Two,
    Three,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (m, code) if normal_modifiers.contains(m) => match code {
                KeyCode::Char('w' | 'W' | 'k') | KeyCode::Up => Some(Command::Up),
                KeyCode::Char('s' | 'S' | 'j') | KeyCode::Down => Some(Command::Down),
                KeyCode::Char('a' | 'A' | 'h') | KeyCode::Left => Some(Command::Left),
                KeyCode::Char('d' | 'D' | 'l') | KeyCode::Right => Some(Command::Right),
                KeyCode::Enter => Some(Command::Enter),
                KeyCode::Char('r' | 'R') => Some(Command::R),
                KeyCode::Char('q' | 'Q') => Some(Command::Q),
                KeyCode::Char('1') => Some(Command::One),
                KeyCode::Char('2') => Some(Command::Two),
                KeyCode::Char('3') => Some(Command::Three),
                _ => None,
            },
            _ => None,
        }
    }

    /// The direction a movement command steers the snake in
    pub(crate) fn direction(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::Up),
            Command::Down => Some(Direction::Down),
            Command::Left => Some(Direction::Left),
            Command::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('w'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('k'), KeyModifiers::NONE, Some(Command::Up))]
    #[case(KeyCode::Char('s'), KeyModifiers::NONE, Some(Command::Down))]
    #[case(KeyCode::Char('a'), KeyModifiers::NONE, Some(Command::Left))]
    #[case(KeyCode::Char('D'), KeyModifiers::SHIFT, Some(Command::Right))]
    #[case(KeyCode::Right, KeyModifiers::NONE, Some(Command::Right))]
    #[case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(Command::Quit))]
    #[case(KeyCode::Char('c'), KeyModifiers::NONE, None)]
    #[case(KeyCode::Char('r'), KeyModifiers::NONE, Some(Command::R))]
    #[case(KeyCode::Char('Q'), KeyModifiers::SHIFT, Some(Command::Q))]
    #[case(KeyCode::Char('q'), KeyModifiers::ALT, None)]
    #[case(KeyCode::Char('2'), KeyModifiers::NONE, Some(Command::Two))]
    #[case(KeyCode::Enter, KeyModifiers::NONE, Some(Command::Enter))]
    #[case(KeyCode::Esc, KeyModifiers::NONE, None)]
    fn test_from_key_event(
        #[case] code: KeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }

    #[rstest]
    #[case(Command::Up, Some(Direction::Up))]
    #[case(Command::Down, Some(Direction::Down))]
    #[case(Command::Left, Some(Direction::Left))]
    #[case(Command::Right, Some(Direction::Right))]
    #[case(Command::R, None)]
    #[case(Command::Enter, None)]
    fn test_direction(#[case] cmd: Command, #[case] d: Option<Direction>) {
        assert_eq!(cmd.direction(), d);
    }
}
