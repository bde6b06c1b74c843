//! Stateless UI rendering.

use super::app::App;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tidepool_tictactoe::{Board, Mark, Outcome, Position, Screen, Square};
use tidepool_waves::{RasterSurface, Rgb};

/// Rows the game area needs.
const GAME_HEIGHT: u16 = 15;

/// Paints a raster surface as cell background colors.
pub struct WaveBand<'a>(pub &'a RasterSurface);

impl Widget for WaveBand<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = area.height.min(self.0.rows());
        let cols = area.width.min(self.0.cols());
        for row in 0..rows {
            for col in 0..cols {
                if let (Some(color), Some(cell)) = (
                    self.0.cell(col, row),
                    buf.cell_mut((area.x + col, area.y + row)),
                ) {
                    cell.set_bg(to_color(color));
                }
            }
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Draws the whole screen: the first band, the game, then the other bands.
pub fn draw(frame: &mut Frame, app: &App) {
    let bands = app.band_rows();
    let mut constraints = Vec::with_capacity(bands.len() + 1);
    if let Some(first) = bands.first() {
        constraints.push(Constraint::Length(*first));
    }
    constraints.push(Constraint::Min(GAME_HEIGHT));
    constraints.extend(bands.iter().skip(1).map(|rows| Constraint::Length(*rows)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let game_chunk = usize::from(!bands.is_empty());
    for (idx, surface) in app.waves().surfaces().enumerate() {
        let chunk = if idx == 0 { 0 } else { idx + 1 };
        if let Some(area) = chunks.get(chunk) {
            frame.render_widget(WaveBand(surface), *area);
        }
    }
    draw_game(frame, chunks[game_chunk], app);
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Tidepool ")
        .title_alignment(Alignment::Center)
        .borders(Borders::TOP | Borders::BOTTOM)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(1)])
        .split(inner);

    let view = app.view();
    match view.screen() {
        Screen::Selection => draw_selection(frame, chunks[0]),
        Screen::Board => draw_board(
            frame,
            chunks[0],
            view.cells(),
            app.cursor(),
            view.active(),
            view.input_enabled(),
        ),
        Screen::Result(outcome) => draw_result(frame, chunks[0], outcome),
    }

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[1]);
}

fn draw_selection(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("Play as"),
        Line::from(""),
        Line::from(vec![
            Span::styled("[x]", mark_style(Mark::X)),
            Span::raw("   or   "),
            Span::styled("[o]", mark_style(Mark::O)),
        ]),
        Line::from(""),
        Line::from(Span::styled("X moves first", Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, 30, 5));
}

fn draw_result(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let style = match outcome.winner() {
        Some(mark) => mark_style(mark),
        None => Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    };
    let text = vec![
        Line::from(Span::styled(outcome.to_string(), style)),
        Line::from(""),
        Line::from("[r] play again"),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, 30, 3));
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Position,
    active: Option<Mark>,
    input_enabled: bool,
) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_turn(frame, rows[0], active);
    // Hide the cursor while the opponent is on the move.
    let cursor = input_enabled.then_some(cursor);
    for (band, row) in [1usize, 3, 5].into_iter().zip(0..3) {
        draw_row(frame, rows[band], board, cursor, row);
        if band < 5 {
            draw_separator(frame, rows[band + 1]);
        }
    }
}

fn draw_turn(frame: &mut Frame, area: Rect, active: Option<Mark>) {
    let spans: Vec<Span> = [Mark::X, Mark::O]
        .into_iter()
        .map(|mark| {
            let style = if active == Some(mark) {
                mark_style(mark).add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {mark} "), style)
        })
        .collect();
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], board, cursor, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>, pos: Position) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Mark::X) => ("X", mark_style(Mark::X)),
        Square::Occupied(Mark::O) => ("O", mark_style(Mark::O)),
    };

    let style = if cursor == Some(pos) {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {symbol}  "), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
