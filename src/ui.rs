#![warn(clippy::all, clippy::pedantic)]
#![allow(
    // Board dimensions are small enough to fit in u16
    clippy::cast_possible_truncation
)]

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;
use crate::game::GameState;
use crate::piece::{PIECE_SIZE, Piece};
use crate::tile::{Theme, Tile};

// Each cell is 2 characters wide and 1 tall
const CELL_WIDTH: u16 = 2;
const INFO_WIDTH: u16 = 24;

pub fn render(f: &mut Frame, app: &App) {
    let board = app.game.board();
    let board_width = board.width() as u16 * CELL_WIDTH + 2; // +2 for borders
    let board_height = board.height() as u16 + 2;
    let min_total_width = board_width + INFO_WIDTH;

    if f.area().width < min_total_width || f.area().height < board_height {
        let warning_text = Paragraph::new(format!(
            "Terminal too small!\nNeed at least {min_total_width}x{board_height}."
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Stackfall"));
        f.render_widget(warning_text, centered_rect(80, 60, f.area()));
        return;
    }

    let main_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Min(INFO_WIDTH)])
        .split(f.area());

    let board_area = Rect {
        height: board_height,
        ..main_layout[0]
    };
    render_board(f, app, board_area);

    let info_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PIECE_SIZE as u16 + 2), // Next piece
            Constraint::Length(3),                     // Status
            Constraint::Length(5),                     // Theme picker
            Constraint::Min(7),                        // Controls
        ])
        .split(main_layout[1]);

    render_next_piece(f, app.game.next_piece(), app.game.theme(), info_layout[0]);

    let status = match app.game.state() {
        GameState::Idle => "Idle",
        GameState::Running => "Running",
        GameState::Paused => "Paused",
    };
    let status_line = Paragraph::new(format!("{status}  [Enter: {}]", app.start_stop_label()))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_line, info_layout[1]);

    render_theme_picker(f, app, info_layout[2]);

    let controls = Paragraph::new(
        "←/→: Move\n\
        ↑: Rotate\n\
        ↓: Step down\n\
        Space: Drop\n\
        Enter/S: Start/Stop\n\
        Q: Quit",
    )
    .block(Block::default().borders(Borders::TOP).title("Controls"))
    .wrap(Wrap { trim: true });
    f.render_widget(controls, info_layout[3]);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let theme = app.game.theme();
    let lines: Vec<Line> = app
        .get_render_rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row.iter().map(|&tile| tile_span(tile, theme)).collect();
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner_area);
}

pub fn render_next_piece(f: &mut Frame, piece: Option<&Piece>, theme: Theme, area: Rect) {
    let lines: Vec<Line> = (0..PIECE_SIZE)
        .map(|j| {
            let spans: Vec<Span> = (0..PIECE_SIZE)
                .map(|i| tile_span(piece.map_or(Tile::Empty, |p| p.cell(i, j)), theme))
                .collect();
            Line::from(spans)
        })
        .collect();

    let preview =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Next"));
    f.render_widget(preview, area);
}

fn render_theme_picker(f: &mut Frame, app: &App, area: Rect) {
    let current = app.game.theme();
    let locked = app.game.is_running();
    let lines: Vec<Line> = Theme::ALL
        .iter()
        .map(|&theme| {
            let marker = if theme == current { "(•)" } else { "( )" };
            let style = if locked {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::styled(format!("{} {marker} {}", theme.index() + 1, theme.name()), style)
        })
        .collect();

    let picker = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Set"));
    f.render_widget(picker, area);
}

#[must_use]
pub fn tile_color(tile: Tile) -> Option<Color> {
    match tile {
        Tile::Empty => None,
        Tile::Red => Some(Color::Red),
        Tile::Green => Some(Color::Green),
        Tile::Blue => Some(Color::Blue),
        Tile::Yellow => Some(Color::Yellow),
        Tile::Orange => Some(Color::LightRed),
        Tile::Purple => Some(Color::Magenta),
        Tile::Cyan => Some(Color::Cyan),
    }
}

/// Two-character glyph for a filled cell in the given style.
#[must_use]
pub fn tile_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Solid => "██",
        Theme::Emboss => "▓▓",
        Theme::Glass => "[]",
    }
}

fn tile_span(tile: Tile, theme: Theme) -> Span<'static> {
    match tile_color(tile) {
        Some(color) => Span::styled(
            tile_glyph(theme),
            Style::default().fg(color).bg(Color::Black),
        ),
        None => Span::styled("  ", Style::default().bg(Color::Black)),
    }
}

/// Helper function to create a centered rect using up certain percentage of the available rect
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
