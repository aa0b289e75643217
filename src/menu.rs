use crate::command::Command;
use crate::consts;
use crate::difficulty::Difficulty;
use crate::util::{get_display_area, EnumExt};
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

/// The difficulty selection menu shown at the start of a session
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct DifficultyMenu {
    /// The currently-highlighted entry
    pub(crate) selection: Difficulty,
}

impl DifficultyMenu {
    /// Handle a command.  Returns `Some` once the player has chosen a
    /// difficulty.
    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<Difficulty> {
        match cmd {
            Command::One => return Some(Difficulty::Easy),
            Command::Two => return Some(Difficulty::Medium),
            Command::Three => return Some(Difficulty::Hard),
            Command::Enter => return Some(self.selection),
            Command::Up => {
                if let Some(d) = self.selection.prev() {
                    self.selection = d;
                }
            }
            Command::Down => {
                if let Some(d) = self.selection.next() {
                    self.selection = d;
                }
            }
            _ => (),
        }
        None
    }
}

/// Everything drawn on the menu screen
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MenuScreen {
    pub(crate) menu: DifficultyMenu,
    pub(crate) high_score: u32,
}

impl MenuScreen {
    const ENTRY_WIDTH: u16 = 13;
}

impl Widget for &MenuScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let entries = u16::try_from(Difficulty::LENGTH).unwrap_or(u16::MAX);
        let [title_area, entries_area, high_score_area, help_area] =
            Layout::vertical([1, entries, 1, 2])
                .flex(Flex::Center)
                .spacing(1)
                .areas(display);
        Line::styled("Select Difficulty", consts::TITLE_STYLE)
            .centered()
            .render(title_area, buf);

        let [entries_area] = Layout::horizontal([MenuScreen::ENTRY_WIDTH])
            .flex(Flex::Center)
            .areas(entries_area);
        for (d, row) in Difficulty::iter().zip(entries_area.rows()) {
            let selected = d == self.menu.selection;
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            Line::from_iter([
                Span::raw(if selected { "» " } else { "  " }),
                Span::styled(String::from(d.hotkey()), consts::KEY_STYLE),
                Span::styled(format!(". {d}"), style),
            ])
            .render(row, buf);
        }

        Line::from(format!("High Score: {}", self.high_score))
            .centered()
            .render(high_score_area, buf);

        let [help1, help2] = Layout::vertical([1, 1]).areas(help_area);
        Line::from_iter([
            Span::raw("Press "),
            Span::styled("1", consts::KEY_STYLE),
            Span::raw(", "),
            Span::styled("2", consts::KEY_STYLE),
            Span::raw(" or "),
            Span::styled("3", consts::KEY_STYLE),
            Span::raw(", or choose with "),
            Span::styled("↑ ↓", consts::KEY_STYLE),
            Span::raw(" and "),
            Span::styled("Enter", consts::KEY_STYLE),
        ])
        .centered()
        .render(help1, buf);
        Line::from_iter([
            Span::raw("Steer with "),
            Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
            Span::raw(" or "),
            Span::styled("a s w d", consts::KEY_STYLE),
            Span::raw(" -- Quit ("),
            Span::styled("q", consts::KEY_STYLE),
            Span::raw(")"),
        ])
        .centered()
        .render(help2, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::buffer_rows;
    use rstest::rstest;

    #[rstest]
    #[case(Command::One, Some(Difficulty::Easy))]
    #[case(Command::Two, Some(Difficulty::Medium))]
    #[case(Command::Three, Some(Difficulty::Hard))]
    #[case(Command::Enter, Some(Difficulty::Medium))]
    #[case(Command::Left, None)]
    #[case(Command::R, None)]
    fn test_handle_command(#[case] cmd: Command, #[case] r: Option<Difficulty>) {
        let mut menu = DifficultyMenu::default();
        assert_eq!(menu.handle_command(cmd), r);
    }

    #[test]
    fn move_selection() {
        let mut menu = DifficultyMenu::default();
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.selection, Difficulty::Hard);
        assert_eq!(menu.handle_command(Command::Down), None);
        assert_eq!(menu.selection, Difficulty::Hard);
        assert_eq!(menu.handle_command(Command::Up), None);
        assert_eq!(menu.handle_command(Command::Up), None);
        assert_eq!(menu.handle_command(Command::Up), None);
        assert_eq!(menu.selection, Difficulty::Easy);
        assert_eq!(
            menu.handle_command(Command::Enter),
            Some(Difficulty::Easy)
        );
    }

    #[test]
    fn render() {
        let screen = MenuScreen {
            menu: DifficultyMenu {
                selection: Difficulty::Hard,
            },
            high_score: 12,
        };
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        screen.render(area, &mut buffer);
        let rows = buffer_rows(&buffer)
            .into_iter()
            .map(|row| row.trim().to_owned())
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();
        pretty_assertions::assert_eq!(
            rows,
            [
                "Select Difficulty",
                "1. Easy",
                "2. Medium",
                "» 3. Hard",
                "High Score: 12",
                "Press 1, 2 or 3, or choose with ↑ ↓ and Enter",
                "Steer with ← ↓ ↑ → or a s w d -- Quit (q)",
            ]
        );
    }
}
