use crate::consts;
use crate::game::{Arena, Position};
use crate::menu::MenuScreen;
use crate::session::{Phase, Snapshot};
use crate::util::get_display_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Color,
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Widget,
    },
};

impl Widget for &Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.phase {
            Phase::Menu(menu) => MenuScreen {
                menu,
                high_score: self.high_score,
            }
            .render(area, buf),
            Phase::Playing | Phase::GameOver { .. } | Phase::Terminated => {
                self.render_game(area, buf);
            }
        }
        if let Some(warning) = self.warning {
            warning.render(area, buf);
        }
    }
}

impl Snapshot<'_> {
    fn render_game(&self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.render_score_bar(score_area, buf);
        Canvas::default()
            .block(Block::bordered())
            .marker(Marker::Braille)
            .x_bounds([0.0, f64::from(self.arena.width)])
            .y_bounds([0.0, f64::from(self.arena.height)])
            .paint(|ctx| self.paint_board(ctx))
            .render(board_area, buf);

        match self.phase {
            Phase::GameOver {
                score,
                new_high_score,
            } => {
                let mut spans = vec![Span::raw(format!(" GAME OVER   Your Score is: {score}"))];
                if new_high_score {
                    spans.push(Span::raw("   "));
                    spans.push(Span::styled(
                        "New High Score!",
                        consts::NEW_HIGH_SCORE_STYLE,
                    ));
                }
                Line::from(spans).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Press "),
                    Span::styled("R", consts::KEY_STYLE),
                    Span::raw(" to Retry or "),
                    Span::styled("Q", consts::KEY_STYLE),
                    Span::raw(" to Quit"),
                ])
                .render(msg2_area, buf);
            }
            _ => {
                Line::from_iter([
                    Span::raw(" Steer with "),
                    Span::styled("← ↓ ↑ →", consts::KEY_STYLE),
                    Span::raw(" -- Quit ("),
                    Span::styled("Ctrl-C", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }

    fn render_score_bar(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, consts::SCORE_BAR_STYLE);
        Line::from(format!(" Score: {}", self.score)).render(area, buf);
        Line::from(self.difficulty.as_str())
            .centered()
            .render(area, buf);
        Line::from(format!("High Score: {} ", self.high_score))
            .right_aligned()
            .render(area, buf);
    }

    fn paint_board(&self, ctx: &mut Context<'_>) {
        let arena = self.arena;
        let radius = f64::from(arena.block_size) / 2.0;
        for (&a, &b) in self.snake.iter().zip(self.snake.iter().skip(1)) {
            let (x1, y1) = center(arena, a);
            let (x2, y2) = center(arena, b);
            ctx.draw(&CanvasLine {
                x1,
                y1,
                x2,
                y2,
                color: consts::SNAKE_COLOR,
            });
        }
        for (i, &pos) in self.snake.iter().enumerate().rev() {
            let color = if i == 0 && matches!(self.phase, Phase::GameOver { .. }) {
                consts::COLLISION_COLOR
            } else {
                consts::SNAKE_COLOR
            };
            draw_block(ctx, arena, pos, radius, color);
        }
        draw_block(ctx, arena, self.food, radius, consts::FOOD_COLOR);
    }
}

fn draw_block(ctx: &mut Context<'_>, arena: Arena, pos: Position, radius: f64, color: Color) {
    let (x, y) = center(arena, pos);
    ctx.draw(&Circle {
        x,
        y,
        radius,
        color,
    });
}

/// Canvas coordinates of the center of the block whose top-left corner is at
/// `pos`.  The canvas's y axis points up while the arena's points down.
fn center(arena: Arena, pos: Position) -> (f64, f64) {
    let half = f64::from(arena.block_size) / 2.0;
    (
        f64::from(pos.x) + half,
        f64::from(arena.height) - (f64::from(pos.y) + half),
    )
}
