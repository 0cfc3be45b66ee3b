// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Terminal event handler: keyboard, mouse, and resize dispatch.

use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    app::{App, Focus},
    keys::{map_key, Action},
    layout::{action_rect, contains, row_at, row_rect, tab_at},
    widgets::action_width,
};

/// Horizontal drag distance (columns) that counts as a swipe.
const SWIPE_COLS: i32 = 3;

impl App {
    /// Handle one terminal event.  Returns `true` when the app should exit.
    pub fn handle_term_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => {
                if self.show_help {
                    self.show_help = false;
                    return false;
                }
                match map_key(k, self.focus == Focus::Search) {
                    Some(action) => self.dispatch(action),
                    None => false,
                }
            }
            Event::Mouse(mouse) if self.config.tui.mouse => {
                if self.show_help {
                    // A button press only dismisses the overlay.
                    if matches!(mouse.kind, MouseEventKind::Down(_)) {
                        self.show_help = false;
                    }
                    self.press = None;
                    return false;
                }
                self.handle_mouse(mouse);
                false
            }
            // Resize is picked up by the next draw.
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let list_inner = self.layout.list_inner();
        match mouse.kind {
            MouseEventKind::ScrollUp if contains(list_inner, mouse.column, mouse.row) => {
                self.scroll_list(-1);
            }
            MouseEventKind::ScrollDown if contains(list_inner, mouse.column, mouse.row) => {
                self.scroll_list(1);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some((mouse.column, mouse.row));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some((col, row)) = self.press.take() else {
                    return;
                };
                let dx = mouse.column as i32 - col as i32;
                if dx <= -SWIPE_COLS {
                    self.swipe_row(row, true);
                } else if dx >= SWIPE_COLS {
                    self.swipe_row(row, false);
                } else {
                    self.click(col, row);
                }
            }
            _ => {}
        }
    }

    /// A left swipe uncovers the row's delete control, a right swipe hides it.
    fn swipe_row(&mut self, row: u16, reveal: bool) {
        let Some(idx) = row_at(self.layout.list_inner(), self.top, row) else {
            return;
        };
        let Some(id) = self.visible_id(idx) else {
            return;
        };
        self.focus = Focus::List;
        self.cursor = idx;
        self.revealed = if reveal { Some(id) } else { None };
    }

    fn click(&mut self, col: u16, row: u16) {
        if contains(self.layout.search_bar, col, row) {
            self.dispatch(Action::FocusSearch);
            return;
        }
        // Tapping anywhere else dismisses the search box.
        self.focus = Focus::List;

        if let Some(tab) = tab_at(self.layout.footer_inner(), col, row) {
            self.dispatch(Action::SelectTab(tab));
            return;
        }

        let list_inner = self.layout.list_inner();
        let Some(idx) = row_at(list_inner, self.top, row) else {
            return;
        };
        let Some(id) = self.visible_id(idx) else {
            return;
        };
        self.cursor = idx;

        let control = action_rect(
            row_rect(list_inner, idx - self.top),
            action_width(&self.config.strings),
        );
        if self.revealed.as_deref() == Some(id.as_str()) && contains(control, col, row) {
            self.delete_row(id);
        } else {
            self.open_row(id);
        }
    }

    fn scroll_list(&mut self, delta: isize) {
        let len = self.visible_len();
        let rows = self.layout.rows_per_page();
        let max_top = len.saturating_sub(rows);
        self.top = (self.top as isize + delta).clamp(0, max_top as isize) as usize;
        if len > 0 {
            self.cursor = self.cursor.clamp(self.top, (self.top + rows - 1).min(len - 1));
        }
    }
}
