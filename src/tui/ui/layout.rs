use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

/// Size of one board cell so `cells` x `cells` fits inside `area`.
///
/// Terminal glyphs are roughly twice as tall as wide, so cells keep a 2:1
/// width-to-height ratio.
pub(super) fn cell_size(area: Rect, cells: usize) -> (u16, u16) {
    let n = u16::try_from(cells.max(1)).unwrap_or(u16::MAX);
    let h = (area.height / n).max(1);
    let w = (area.width / n).max(2);
    let h = h.min(w / 2).max(1);
    (h * 2, h)
}

/// The square board rectangle centered in `area`.
pub(super) fn board_rect(area: Rect, cells: usize) -> Rect {
    let (cw, ch) = cell_size(area, cells);
    let n = u16::try_from(cells.max(1)).unwrap_or(u16::MAX);
    let width = cw.saturating_mul(n).min(area.width);
    let height = ch.saturating_mul(n).min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_stays_inside_tiny_areas() {
        let area = Rect { x: 3, y: 2, width: 10, height: 4 };
        for cells in [1, 5, 26, 10_000, usize::MAX] {
            let board = board_rect(area, cells);
            assert!(board.right() <= area.right());
            assert!(board.bottom() <= area.bottom());
        }
    }
}
