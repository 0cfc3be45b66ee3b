use inbox_core::Tab;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Terminal rows used by one conversation row (name, message, date).
pub const ROW_HEIGHT: u16 = 3;

/// The regions that make up the screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub search_bar: Rect,
    pub list_pane: Rect,
    pub footer: Rect,
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Calculate layout regions from a `Rect` (terminal area).
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(ROW_HEIGHT + 2),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        ScreenLayout {
            header: vertical[0],
            search_bar: vertical[1],
            list_pane: vertical[2],
            footer: vertical[3],
            status_bar: vertical[4],
        }
    }

    /// Layout for the area of the current frame.
    pub fn new(frame: &Frame) -> Self {
        Self::compute(frame.area())
    }

    /// List pane without its border.
    pub fn list_inner(&self) -> Rect {
        inner(self.list_pane)
    }

    /// Footer without its border.
    pub fn footer_inner(&self) -> Rect {
        inner(self.footer)
    }

    /// How many whole rows fit in the list pane.
    pub fn rows_per_page(&self) -> usize {
        (self.list_inner().height / ROW_HEIGHT).max(1) as usize
    }
}

fn inner(r: Rect) -> Rect {
    Rect {
        x: r.x.saturating_add(1),
        y: r.y.saturating_add(1),
        width: r.width.saturating_sub(2),
        height: r.height.saturating_sub(2),
    }
}

pub fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Area of the `slot`-th visible row inside the list pane's inner area.
pub fn row_rect(list_inner: Rect, slot: usize) -> Rect {
    let y = list_inner.y + (slot as u16).saturating_mul(ROW_HEIGHT);
    let bottom = list_inner.y + list_inner.height;
    Rect {
        x: list_inner.x,
        y,
        width: list_inner.width,
        height: ROW_HEIGHT.min(bottom.saturating_sub(y)),
    }
}

/// Index into the visible list of the row under screen row `row`.
pub fn row_at(list_inner: Rect, top: usize, row: u16) -> Option<usize> {
    if row < list_inner.y || row >= list_inner.y + list_inner.height {
        return None;
    }
    Some(top + ((row - list_inner.y) / ROW_HEIGHT) as usize)
}

/// Right-hand column of a row reserved for the photo marker or the delete
/// control, `width` columns wide.
pub fn action_rect(row: Rect, width: u16) -> Rect {
    let w = width.min(row.width);
    Rect { x: row.x + row.width - w, y: row.y, width: w, height: row.height }
}

/// Equal-width footer cells, one per tab.
pub fn tab_rects(footer_inner: Rect) -> Vec<Rect> {
    let n = Tab::ALL.len() as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Tab::ALL.iter().map(|_| Constraint::Ratio(1, n)))
        .split(footer_inner)
        .to_vec()
}

/// Footer tab under screen column `col`, when `row` lies inside the footer.
pub fn tab_at(footer_inner: Rect, col: u16, row: u16) -> Option<Tab> {
    tab_rects(footer_inner)
        .into_iter()
        .zip(Tab::ALL)
        .find(|(r, _)| contains(*r, col, row))
        .map(|(_, t)| t)
}
