// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Action dispatcher: translates key-mapped actions into list events and
//! cursor/focus changes.

use inbox_core::ListEvent;
use tracing::debug;

use crate::{
    app::{App, Focus},
    keys::Action,
};

impl App {
    /// Apply one action.  Returns `true` when the app should exit.
    pub fn dispatch(&mut self, action: Action) -> bool {
        debug!(?action, "dispatch");
        match action {
            Action::Quit => return true,
            Action::Help => self.show_help = !self.show_help,

            // ── Movement ──────────────────────────────────────────────────────
            Action::MoveUp => self.move_cursor(-1),
            Action::MoveDown => self.move_cursor(1),
            Action::PageUp => self.move_cursor(-(self.layout.rows_per_page() as isize)),
            Action::PageDown => self.move_cursor(self.layout.rows_per_page() as isize),
            Action::MoveTop => self.move_cursor(isize::MIN),
            Action::MoveBottom => self.move_cursor(isize::MAX),

            // ── Row gestures ──────────────────────────────────────────────────
            Action::Activate => {
                if let Some(id) = self.selected_id() {
                    if self.revealed.as_deref() == Some(id.as_str()) {
                        self.delete_row(id);
                    } else {
                        self.open_row(id);
                    }
                }
            }
            Action::RevealDelete => {
                if let Some(id) = self.selected_id() {
                    if self.revealed.as_deref() == Some(id.as_str()) {
                        self.delete_row(id);
                    } else {
                        self.revealed = Some(id);
                    }
                }
            }
            Action::HideDelete => self.revealed = None,

            // ── Search box ────────────────────────────────────────────────────
            Action::FocusSearch => {
                self.focus = Focus::Search;
                self.revealed = None;
            }
            Action::FocusList => self.focus = Focus::List,
            Action::SearchInput(c) => {
                let mut q = self.list.query().to_string();
                q.push(c);
                self.set_query(q);
            }
            Action::SearchBackspace => {
                let mut q = self.list.query().to_string();
                if q.pop().is_some() {
                    self.set_query(q);
                }
            }
            Action::SearchClear => self.set_query(String::new()),

            // ── Footer ────────────────────────────────────────────────────────
            Action::SelectTab(tab) => self.apply(ListEvent::Tab(tab)),
        }
        false
    }

    pub(crate) fn open_row(&mut self, id: String) {
        self.revealed = None;
        self.apply(ListEvent::Open(id));
    }

    pub(crate) fn delete_row(&mut self, id: String) {
        self.revealed = None;
        self.apply(ListEvent::Delete(id));
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let target = (self.cursor as isize).saturating_add(delta).clamp(0, len as isize - 1);
        if target as usize != self.cursor {
            self.revealed = None;
        }
        self.cursor = target as usize;
        self.ensure_cursor_visible();
    }
}

#[cfg(test)]
mod tests {
    use inbox_core::{Destination, Tab};

    use super::*;
    use crate::app::tests::app_with;

    fn ids(app: &App) -> Vec<String> {
        app.list().records().iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn quit_returns_true() {
        let mut app = app_with(1);
        assert!(app.dispatch(Action::Quit));
        assert!(!app.dispatch(Action::Help));
        assert!(app.show_help);
    }

    #[test]
    fn move_is_clamped() {
        let mut app = app_with(3);
        app.dispatch(Action::MoveUp);
        assert_eq!(app.cursor(), 0);
        app.dispatch(Action::MoveBottom);
        assert_eq!(app.cursor(), 2);
        app.dispatch(Action::MoveDown);
        assert_eq!(app.cursor(), 2);
        app.dispatch(Action::MoveTop);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn activate_opens_and_marks_read() {
        let mut app = app_with(2);
        app.dispatch(Action::MoveDown);
        app.dispatch(Action::Activate);
        assert_eq!(app.list().records()[1].unread_count, 0);
        assert_eq!(app.list().records()[0].unread_count, 3);
        assert_eq!(app.last_route(), Some(Destination::ChatScreen));
    }

    #[test]
    fn reveal_then_confirm_deletes() {
        let mut app = app_with(2);
        app.dispatch(Action::RevealDelete);
        assert_eq!(app.revealed(), Some("0"));
        assert_eq!(ids(&app), ["0", "1"]);
        app.dispatch(Action::RevealDelete);
        assert_eq!(ids(&app), ["1"]);
        assert_eq!(app.revealed(), None);
    }

    #[test]
    fn enter_on_revealed_row_deletes() {
        let mut app = app_with(3);
        app.dispatch(Action::MoveDown);
        app.dispatch(Action::RevealDelete);
        app.dispatch(Action::Activate);
        assert_eq!(ids(&app), ["0", "2"]);
        assert!(app.last_route().is_none());
    }

    #[test]
    fn moving_hides_delete_control() {
        let mut app = app_with(3);
        app.dispatch(Action::RevealDelete);
        app.dispatch(Action::MoveDown);
        assert_eq!(app.revealed(), None);
        app.dispatch(Action::RevealDelete);
        app.dispatch(Action::HideDelete);
        assert_eq!(app.revealed(), None);
        assert_eq!(ids(&app).len(), 3);
    }

    #[test]
    fn typing_filters_and_backspace_restores() {
        let mut app = app_with(4);
        app.dispatch(Action::FocusSearch);
        assert_eq!(app.focus(), Focus::Search);
        for c in "size".chars() {
            app.dispatch(Action::SearchInput(c));
        }
        assert_eq!(app.list().query(), "size");
        assert_eq!(app.visible_len(), 2);
        assert_eq!(app.selected_id().as_deref(), Some("1"));
        for _ in 0..4 {
            app.dispatch(Action::SearchBackspace);
        }
        assert_eq!(app.visible_len(), 4);
        app.dispatch(Action::SearchBackspace);
        assert_eq!(app.list().query(), "");
    }

    #[test]
    fn search_clear_and_focus_list() {
        let mut app = app_with(4);
        app.dispatch(Action::FocusSearch);
        app.dispatch(Action::SearchInput('?'));
        assert_eq!(app.visible_len(), 4);
        app.dispatch(Action::SearchInput('x'));
        assert_eq!(app.visible_len(), 0);
        app.dispatch(Action::SearchClear);
        assert_eq!(app.visible_len(), 4);
        app.dispatch(Action::FocusList);
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn delete_in_filtered_view_targets_visible_row() {
        let mut app = app_with(4);
        app.set_query("size".into());
        app.dispatch(Action::MoveDown);
        app.dispatch(Action::RevealDelete);
        app.dispatch(Action::RevealDelete);
        assert_eq!(ids(&app), ["0", "1", "2"]);
        assert_eq!(app.selected_id().as_deref(), Some("1"));
    }

    #[test]
    fn tabs_navigate_except_add() {
        let mut app = app_with(1);
        app.dispatch(Action::SelectTab(Tab::Cart));
        assert_eq!(app.last_route(), Some(Destination::ShoppingCart));
        app.dispatch(Action::SelectTab(Tab::Add));
        assert_eq!(app.last_route(), Some(Destination::ShoppingCart));
        assert_eq!(app.list().selected_tab(), Some(Tab::Cart));
    }

    #[test]
    fn actions_on_empty_list_are_harmless() {
        let mut app = app_with(0);
        for a in [Action::MoveDown, Action::PageDown, Action::Activate, Action::RevealDelete] {
            assert!(!app.dispatch(a));
        }
        assert_eq!(app.cursor(), 0);
        assert!(app.last_route().is_none());
    }
}
