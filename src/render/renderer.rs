use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Coordinate, GameState};
use crate::metrics::GameMetrics;

/// Terminal color for a display tag. Asset paths and unknown names fall back to `fallback`.
pub fn tag_color(tag: &str, fallback: Color) -> Color {
    match tag.to_ascii_lowercase().as_str() {
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "red" => Color::Red,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "magenta" => Color::Magenta,
        "white" => Color::White,
        _ => fallback,
    }
}

/// Screen row `row` (0 at the top) holds grid y = `grid_size - 1 - row`
fn grid_y(grid_size: i32, row: i32) -> i32 {
    grid_size - 1 - row
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        if state.is_alive {
            frame.render_widget(self.render_grid(state), game_area);
        } else {
            frame.render_widget(self.render_game_over(state, metrics), game_area);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    /// One line per grid row, top row first
    pub fn grid_lines(&self, state: &GameState) -> Vec<Line<'static>> {
        let apple = state.apple();
        let mut lines = Vec::new();

        for row in 0..state.grid_size {
            let y = grid_y(state.grid_size, row);
            let mut spans = Vec::new();

            for x in 0..state.grid_size {
                let pos = Coordinate::new(x, y);
                let index = state
                    .snake
                    .all_parts()
                    .position(|part| part.coordinate == pos);
                let tag = index.and_then(|i| state.snake.part_background(i, state.direction));

                let cell = match (index, tag) {
                    (Some(0), tag) => Span::styled(
                        "■ ",
                        Style::default()
                            .fg(tag_color(tag.unwrap_or_default(), Color::Cyan))
                            .add_modifier(Modifier::BOLD),
                    ),
                    (Some(_), tag) => Span::styled(
                        "□ ",
                        Style::default().fg(tag_color(tag.unwrap_or_default(), Color::Green)),
                    ),
                    (None, _) if pos == apple.coordinate => Span::styled(
                        "O ",
                        Style::default()
                            .fg(tag_color(&apple.display_tag, Color::Red))
                            .add_modifier(Modifier::BOLD),
                    ),
                    (None, _) => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        lines
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'static> {
        Paragraph::new(self.grid_lines(state))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.snake.len().to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'static> {
        let headline = match metrics.last_outcome {
            Some(outcome) if outcome.board_full => "BOARD CLEARED",
            _ => "GAME OVER",
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;

    fn row_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_tag_color() {
        assert_eq!(tag_color("yellow", Color::Cyan), Color::Yellow);
        assert_eq!(tag_color("Green", Color::Cyan), Color::Green);
        assert_eq!(tag_color("./game-assets/apple.png", Color::Red), Color::Red);
    }

    #[test]
    fn test_grid_is_drawn_y_up() {
        let state = GameState::new(Snake::default(), Coordinate::new(0, 0), 10, "red");
        let lines = Renderer::new().grid_lines(&state);

        assert_eq!(lines.len(), 10);
        // Food at y = 0 lands on the bottom row
        assert!(row_text(&lines[9]).starts_with("O "));
        // Snake at y = 5 is screen row 4
        assert_eq!(row_text(&lines[4]), ". . . □ □ ■ . . . . ");
    }
}
