use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use std::time::Duration;

use crate::game::GameState;

/// Facts about the running session that are not part of the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionInfo {
    pub tick_interval: Duration,
    pub game_number: u32,
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, info: &SessionInfo) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_status(state, info), chunks[0]);

        let board_area = board_rect(chunks[1], state);
        frame.render_widget(self.render_board(state), board_area);

        if state.is_game_over {
            frame.render_widget(Clear, board_area);
            frame.render_widget(self.render_game_over(state), board_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let board = state.board;
        let head = state.snake.head();

        let lines: Vec<Line> = (0..board.rows())
            .map(|row| {
                let spans: Vec<Span> = (0..board.columns())
                    .map(|column| {
                        let pos = board.cell_at(column, row);
                        if pos == head {
                            Span::styled(
                                "■ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            )
                        } else if state.snake.occupies(pos) {
                            Span::styled("□ ", Style::default().fg(Color::Green))
                        } else if pos == state.food {
                            Span::styled(
                                "● ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::styled(". ", Style::default().fg(Color::DarkGray))
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_status(&self, state: &GameState, info: &SessionInfo) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Game: ", label),
            Span::styled(format!("#{}", info.game_number), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(
                state.snake.len().to_string(),
                value.add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Heading: ", label),
            Span::styled(state.direction.label(), value),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", info.tick_interval.as_millis()), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Length: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.snake.len().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" Restart ]", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Board-sized rectangle centered in `area`: two terminal columns per cell
/// plus the border, clipped to what is available
fn board_rect(area: Rect, state: &GameState) -> Rect {
    let columns = i64::from(state.board.columns()) * 2 + 2;
    let rows = i64::from(state.board.rows()) + 2;
    let width = u16::try_from(columns.max(0)).unwrap_or(u16::MAX).min(area.width);
    let height = u16::try_from(rows.max(0)).unwrap_or(u16::MAX).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
