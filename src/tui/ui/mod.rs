//! Layout helpers and widgets shared by the screens.

pub mod board;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Title and player names.
    pub title: Rect,
    /// The 3x3 board.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the full frame into the game screen's regions.
pub fn game_layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(board::BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    GameLayout {
        title: chunks[0],
        board: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Returns a `width` x `height` rectangle centered in `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
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

/// True when terminal cell `(column, row)` lies inside `rect`.
pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_rect_is_centered() {
        let area = Rect::new(0, 0, 60, 20);
        let inner = center_rect(area, 20, 10);
        assert_eq!(inner, Rect::new(20, 5, 20, 10));
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(contains(rect, 2, 3));
        assert!(contains(rect, 5, 4));
        assert!(!contains(rect, 6, 4));
        assert!(!contains(rect, 2, 5));
    }

    #[test]
    fn test_game_layout_stacks_regions() {
        let layout = game_layout(Rect::new(0, 0, 60, 24));
        assert_eq!(layout.title.height, 3);
        assert_eq!(layout.help.y + layout.help.height, 24);
        assert!(layout.board.height >= board::BOARD_HEIGHT);
    }
}
