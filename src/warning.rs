use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{Block, Clear, Padding, Widget},
};
use std::borrow::Cow;

/// A pop-up telling the player about a non-fatal error, such as a failure to
/// save the high score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
    /// Index of the first line shown
    offset: usize,
}

impl Warning {
    /// Lines of text shown at once; longer messages scroll
    const VISIBLE_LINES: usize = 12;
    const TEXT_WIDTH: u16 = 48;

    /// Log `e` and its chain of causes at warning level, and return a pop-up
    /// displaying the same
    pub(crate) fn logged<E: std::error::Error>(e: &E) -> Warning {
        let msgs = error_messages(e);
        log::warn!("{}", msgs.join(": "));
        Warning::from_error_messages(&msgs)
    }

    pub(crate) fn handle_command(&mut self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter => return Some(WarningOutcome::Dismissed),
            Command::Quit => return Some(WarningOutcome::Quit),
            Command::Up => self.offset = self.offset.saturating_sub(1),
            Command::Down => self.offset = (self.offset + 1).min(self.max_offset()),
            _ => (),
        }
        None
    }

    fn max_offset(&self) -> usize {
        self.lines.len().saturating_sub(Warning::VISIBLE_LINES)
    }

    /// Lay out an error message followed by a bulleted list of its causes
    fn from_error_messages(msgs: &[String]) -> Warning {
        let width = usize::from(Warning::TEXT_WIDTH);
        let mut lines = Vec::new();
        let mut msgs = msgs.iter();
        match msgs.next() {
            Some(first) => lines.extend(wrap(first, textwrap::Options::new(width))),
            None => lines.push(String::from("Something went wrong.")),
        }
        let mut causes = msgs.peekable();
        if causes.peek().is_some() {
            lines.push(String::new());
            lines.push(String::from("Caused by:"));
            let opts = textwrap::Options::new(width)
                .initial_indent("  - ")
                .subsequent_indent("    ");
            for cause in causes {
                lines.extend(wrap(cause, opts.clone()));
            }
        }
        Warning { lines, offset: 0 }
    }
}

fn wrap(text: &str, opts: textwrap::Options<'_>) -> Vec<String> {
    textwrap::wrap(text, opts.break_words(true))
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Return the display text of `e` followed by that of each of its sources
fn error_messages<E: std::error::Error>(e: &E) -> Vec<String> {
    let mut msgs = vec![e.to_string()];
    let mut source = e.source();
    while let Some(src) = source {
        msgs.push(src.to_string());
        source = src.source();
    }
    msgs
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl Widget for &Warning {
    // `area` is the whole screen; the pop-up centers itself within it.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let shown = self.lines.len().min(Warning::VISIBLE_LINES);
        let text_height = u16::try_from(shown).unwrap_or(u16::MAX);
        // Borders, a blank line, and the footer
        let size = Size::new(Warning::TEXT_WIDTH + 4, text_height.saturating_add(4));
        let popup = center_rect(area, size);
        let block = Block::bordered()
            .title(Line::from(" WARNING ").centered())
            .padding(Padding::horizontal(1));
        let [text_area, _, footer_area] = Layout::vertical([
            Constraint::Length(text_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(block.inner(popup));
        Clear.render(popup, buf);
        block.render(popup, buf);

        Text::from_iter(
            self.lines
                .iter()
                .skip(self.offset)
                .take(shown)
                .map(String::as_str),
        )
        .render(text_area, buf);
        Line::from("[OK]").centered().render(footer_area, buf);
        if self.max_offset() > 0 {
            Line::from(format!(
                "↑↓ {}-{}/{}",
                self.offset + 1,
                self.offset + shown,
                self.lines.len()
            ))
            .right_aligned()
            .render(footer_area, buf);
        }
    }
}
