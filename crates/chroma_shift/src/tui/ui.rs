//! Stateless rendering of a [`GameView`].

use chroma_core::{Cell, Color as PaintColor, GamePhase, GameView, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const INSTRUCTIONS: &str =
    "Arrows/WASD move | Space cycles color | Enter starts | R resets | Q quits";

/// Each cell is two terminal columns wide so the grid looks square.
const CELL_WIDTH: u16 = 2;

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, view: &GameView<'_>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Instructions
            Constraint::Min(4),    // Grid
            Constraint::Length(4), // Status
        ])
        .split(area);

    let title = Paragraph::new("Chroma Shift")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let instructions = Paragraph::new(INSTRUCTIONS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(instructions, chunks[1]);

    draw_grid(frame, chunks[2], view);
    draw_status(frame, chunks[3], view);
}

fn draw_grid(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let grid = view.grid();
    let size = u16::try_from(grid.size()).unwrap_or(u16::MAX);
    let grid_area = center_rect(
        area,
        size.saturating_mul(CELL_WIDTH).saturating_add(2),
        size.saturating_add(2),
    );

    let player = view.player_position();
    let lines: Vec<Line> = grid
        .rows()
        .enumerate()
        .map(|(y, row)| {
            let spans: Vec<Span> = row
                .iter()
                .enumerate()
                .map(|(x, cell)| cell_span(*cell, Position::new(x, y) == player, view))
                .collect();
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), grid_area);
}

fn cell_span(cell: Cell, is_player: bool, view: &GameView<'_>) -> Span<'static> {
    if is_player {
        let style = Style::default()
            .fg(Color::Black)
            .bg(paint(view.player_color()))
            .add_modifier(Modifier::BOLD);
        return Span::styled("@@", style);
    }

    match cell {
        Cell::Paint(color) => Span::styled("  ", Style::default().bg(paint(color))),
        Cell::Goal => Span::styled(
            "<>",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Cell::Obstacle => Span::styled("##", Style::default().fg(Color::Gray).bg(Color::Black)),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView<'_>) {
    let color = view.player_color();
    let swatch = Line::from(vec![
        Span::raw("Color: "),
        Span::styled("    ", Style::default().bg(paint(color))),
        Span::raw(format!(" {}", color)),
    ]);

    let time = Line::from(format!("Time: {} seconds", view.elapsed_label()));
    let best = Line::from(format!("Best Times: {}", view.best_times_label()));

    let message = match view.phase() {
        GamePhase::Idle => Line::styled(
            "Press Enter to start",
            Style::default().fg(Color::Yellow),
        ),
        GamePhase::Playing => Line::styled(
            "Reach the goal in the bottom-right corner",
            Style::default().fg(Color::DarkGray),
        ),
        GamePhase::Won => Line::styled(
            format!(
                "You won in {} seconds! Press Enter to play again",
                view.elapsed_label()
            ),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    };

    let status = Paragraph::new(vec![swatch, time, best, message]).alignment(Alignment::Center);
    frame.render_widget(status, area);
}

fn paint(color: PaintColor) -> Color {
    match color {
        PaintColor::Red => Color::Red,
        PaintColor::Green => Color::Green,
        PaintColor::Blue => Color::Blue,
        PaintColor::Yellow => Color::Yellow,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_core::{ChromaGame, GridLayout, MAX_GRID_SIZE, RandomGridGenerator};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draws_labels_and_player() {
        let game = ChromaGame::new(GridLayout::default(), RandomGridGenerator::from_seed(4));
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("test terminal");

        terminal
            .draw(|frame| draw(frame, &game.view()))
            .expect("draw");

        let text = screen_text(&terminal);
        assert!(text.contains("Chroma Shift"));
        assert!(text.contains("Time: 0.0 seconds"));
        assert!(text.contains("Best Times:"));
        assert!(text.contains("Press Enter to start"));
        assert!(text.contains("@@"));
        assert!(text.contains("<>"));
    }

    #[test]
    fn test_largest_grid_draws_in_small_terminal() {
        let layout = GridLayout::new(MAX_GRID_SIZE, 0).expect("valid layout");
        let game = ChromaGame::new(layout, RandomGridGenerator::from_seed(2));
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).expect("test terminal");

        terminal
            .draw(|frame| draw(frame, &game.view()))
            .expect("draw");

        assert!(screen_text(&terminal).contains("Chroma Shift"));
    }
}
