//! Stateless UI rendering for multi-player tic-tac-toe.

use multitoe_core::{Cell, Coord, KeyValueStore, Status, Symbol};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

const HELP: &str = "arrows/hjkl move  enter play  2-5 players  r new game  s reset scores  q quit";

/// Renders the whole screen: status, scoreboard, board and help line.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Scoreboard
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Help / message
        ])
        .split(frame.area());

    draw_status(frame, chunks[0], app);
    draw_scoreboard(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let footer = Paragraph::new(app.message().unwrap_or(HELP))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[3]);
}

/// Headline, plus whose turn it is while the game is still open.
fn draw_status<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let game = app.game();
    let status = game.status();
    let color = match status {
        Status::Idle => Color::Cyan,
        Status::Won(_) => Color::Green,
        Status::Draw => Color::Magenta,
    };
    let mut spans = vec![Span::styled(
        status.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if !game.is_locked() {
        let symbol = game.current_symbol();
        spans.push(Span::raw("   Turn: Player "));
        spans.push(Span::styled(
            symbol.to_string(),
            Style::default().fg(symbol_color(symbol)).add_modifier(Modifier::BOLD),
        ));
    }

    let title = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn draw_scoreboard<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let active = app.game().current_symbol().to_string();
    let mut spans = Vec::new();
    for (symbol, wins) in app.game().scores().iter() {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        let style = if symbol == active {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" Player {}: {} ", symbol, wins), style));
    }

    let scoreboard = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().title("Scores").borders(Borders::ALL));
    frame.render_widget(scoreboard, area);
}

fn draw_board<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let game = app.game();
    let dim = game.board().dimension();

    let lines: Vec<Line> = game
        .board()
        .rows()
        .enumerate()
        .flat_map(|(r, row)| {
            let cells: Vec<Span> = row
                .iter()
                .enumerate()
                .flat_map(|(c, cell)| {
                    let at = Coord::new(r, c);
                    let mut spans = vec![cell_span(*cell, at, app)];
                    if c + 1 < dim {
                        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
                    }
                    spans
                })
                .collect();
            let mut lines = vec![Line::from(cells)];
            if r + 1 < dim {
                lines.push(Line::styled(
                    "─".repeat(dim * 4 - 1),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines
        })
        .collect();

    let width = (dim * 4 + 1) as u16;
    let height = (dim * 2 + 1) as u16;
    let board = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, center_rect(area, width, height));
}

fn cell_span<S: KeyValueStore>(cell: Cell, at: Coord, app: &App<S>) -> Span<'static> {
    let (text, base_style) = match cell {
        Cell::Empty => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(symbol) => (
            format!(" {} ", symbol),
            Style::default().fg(symbol_color(symbol)).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if app.game().winning_run().is_some_and(|run| run.contains(at)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if at == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(text, style)
}

fn symbol_color(symbol: Symbol) -> Color {
    match symbol.index() {
        0 => Color::Blue,
        1 => Color::Red,
        2 => Color::Magenta,
        3 => Color::Yellow,
        _ => Color::Cyan,
    }
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
