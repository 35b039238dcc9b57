//! Board rendering and mouse hit testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::games::tictactoe::{GameModel, Mark, Position, Square};

use super::{center_rect, contains};

/// Width of one square in terminal columns.
pub const CELL_WIDTH: u16 = 12;
/// Height of one square in terminal rows.
pub const CELL_HEIGHT: u16 = 3;
/// Total board width including separators.
pub const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Total board height including separators.
pub const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Background of squares on the winning line.
pub const WIN_COLOR: Color = Color::Rgb(144, 238, 144);

/// Screen rectangles of the nine squares, in row-major order, for a board
/// centered in `area`.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut rects = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = column_split(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            rects[r * 3 + c] = cell;
        }
    }
    rects
}

/// The square under terminal cell `(column, row)`, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .iter()
        .position(|rect| contains(*rect, column, row))
        .and_then(Position::from_index)
}

/// Renders the board centered in `area`.
///
/// `cursor` is highlighted while the game is active. Squares on a winning
/// line get [`WIN_COLOR`]; every other square is dimmed once play stops.
pub fn render_board(frame: &mut Frame, area: Rect, model: &GameModel, cursor: Option<Position>) {
    let rects = cell_rects(area);
    let winning = model.winning_line();
    let active = model.is_active();

    for pos in Position::ALL {
        let on_line = winning.is_some_and(|line| line.contains(&pos));
        let style = square_style(
            model.board().get(pos),
            on_line,
            active,
            active && cursor == Some(pos),
        );
        render_square(frame, rects[pos.to_index()], pos, model.board().get(pos), style);
    }

    render_separators(frame, &rects);
}

fn column_split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
}

fn square_style(square: Square, on_line: bool, active: bool, under_cursor: bool) -> Style {
    if on_line {
        return Style::default()
            .bg(WIN_COLOR)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD);
    }

    let base = match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Square::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    if under_cursor {
        base.bg(Color::White).fg(Color::Black)
    } else if !active {
        base.add_modifier(Modifier::DIM)
    } else {
        base
    }
}

fn render_square(frame: &mut Frame, area: Rect, pos: Position, square: Square, style: Style) {
    let symbol = match square {
        Square::Empty => (pos.to_index() + 1).to_string(),
        Square::Occupied(mark) => mark.to_string(),
    };

    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(symbol), Line::from("")])
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_separators(frame: &mut Frame, rects: &[Rect; 9]) {
    let sep_style = Style::default().fg(Color::DarkGray);
    let first = rects[0];
    let last = rects[8];
    let width = (last.x + last.width).saturating_sub(first.x);

    // Horizontal rules below the first two rows.
    for row in [0, 1] {
        let above = rects[row * 3];
        let rule = Rect::new(first.x, above.y + above.height, width, 1).intersection(frame.area());
        frame.render_widget(Paragraph::new("─".repeat(width as usize)).style(sep_style), rule);
    }

    // Vertical rules right of the first two columns, one per board row.
    for row in 0..3 {
        for col in [0, 1] {
            let left = rects[row * 3 + col];
            let bar = Rect::new(left.x + left.width, left.y, 1, left.height).intersection(frame.area());
            frame.render_widget(Paragraph::new(vec![Line::from("│"); 3]).style(sep_style), bar);
        }
    }
}
