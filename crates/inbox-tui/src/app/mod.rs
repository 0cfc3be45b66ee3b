// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Top-level TUI application state and event loop.

pub(crate) mod dispatch;
pub(crate) mod term_events;

use std::sync::Arc;

use crossterm::event::EventStream;
use futures::StreamExt;
use inbox_config::Config;
use inbox_core::{Destination, ListEvent, ListState, Navigator};
use ratatui::{layout::Rect, DefaultTerminal, Frame};
use tracing::debug;

use crate::{
    layout::ScreenLayout,
    widgets::{draw_footer, draw_header, draw_help, draw_list, draw_search, draw_status},
};

/// Options passed when constructing the TUI app.
pub struct AppOptions {
    /// Search text to start with (from `--query`).
    pub initial_query: Option<String>,
    /// Force ASCII borders and glyphs regardless of config.
    pub ascii: bool,
    /// Receives navigation requests (tab taps, opened conversations).
    pub navigator: Box<dyn Navigator + Send>,
}

/// Which part of the screen receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    List,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// The top-level TUI application state.
pub struct App {
    pub(crate) config: Arc<Config>,
    pub(crate) list: ListState,
    pub(crate) navigator: Box<dyn Navigator + Send>,
    pub(crate) focus: Focus,
    /// Index into the *visible* (filtered) rows.
    pub(crate) cursor: usize,
    /// First visible row shown at the top of the list pane.
    pub(crate) top: usize,
    /// Id of the row whose delete control is uncovered, if any.
    pub(crate) revealed: Option<String>,
    pub(crate) show_help: bool,
    pub(crate) last_route: Option<Destination>,
    pub(crate) ascii: bool,
    /// Layout of the last drawn frame; mouse hit-testing uses it.
    pub(crate) layout: ScreenLayout,
    /// Where the left button went down, for click vs. swipe detection.
    pub(crate) press: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: Arc<Config>, list: ListState, opts: AppOptions) -> Self {
        let ascii = opts.ascii
            || config.tui.ascii_borders
            || std::env::var("INBOX_ASCII_BORDERS").is_ok_and(|v| v == "1");
        let mut app = Self {
            config,
            list,
            navigator: opts.navigator,
            focus: Focus::List,
            cursor: 0,
            top: 0,
            revealed: None,
            show_help: false,
            last_route: None,
            ascii,
            // Reasonable default before the first frame is drawn.
            layout: ScreenLayout::compute(Rect::new(0, 0, 80, 24)),
            press: None,
        };
        if let Some(q) = opts.initial_query.filter(|q| !q.is_empty()) {
            app.set_query(q);
        }
        app
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Visible-row index of the selection.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn revealed(&self) -> Option<&str> {
        self.revealed.as_deref()
    }

    pub fn last_route(&self) -> Option<Destination> {
        self.last_route
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            let Some(event) = events.next().await else {
                debug!("terminal event stream closed");
                break;
            };
            if self.handle_term_event(event?) {
                break;
            }
        }
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        self.layout = ScreenLayout::new(frame);
        self.ensure_cursor_visible();

        let layout = self.layout;
        let strings = &self.config.strings;
        let ascii = self.ascii;
        let rows = self.list.visible();

        draw_header(frame, layout.header, &strings.header);
        draw_search(
            frame,
            layout.search_bar,
            self.list.query(),
            &strings.search_placeholder,
            self.focus == Focus::Search,
            rows.len(),
            self.list.records().len(),
            ascii,
        );
        draw_list(
            frame,
            layout.list_pane,
            &rows,
            self.list.needle(),
            self.top,
            self.cursor,
            self.revealed.as_deref(),
            strings,
            self.focus == Focus::List,
            ascii,
        );
        draw_footer(
            frame,
            layout.footer,
            self.list.selected_tab(),
            self.list.has_unread(),
            strings,
            ascii,
        );
        draw_status(frame, layout.status_bar, self.last_route, ascii);

        if self.show_help {
            draw_help(frame, ascii);
        }
    }

    // ── State helpers ─────────────────────────────────────────────────────────

    pub(crate) fn visible_len(&self) -> usize {
        self.list.visible().len()
    }

    pub(crate) fn visible_id(&self, idx: usize) -> Option<String> {
        self.list.visible().get(idx).map(|r| r.id.clone())
    }

    pub(crate) fn selected_id(&self) -> Option<String> {
        self.visible_id(self.cursor)
    }

    /// Feed an event to the list reducer and forward any navigation request.
    pub(crate) fn apply(&mut self, event: ListEvent) {
        if let Some(dest) = self.list.apply(event) {
            self.navigate(dest);
        }
        self.clamp_cursor();
    }

    pub(crate) fn set_query(&mut self, query: String) {
        self.apply(ListEvent::SetQuery(query));
        self.cursor = 0;
        self.top = 0;
        self.revealed = None;
    }

    fn navigate(&mut self, dest: Destination) {
        debug!(route = dest.route_name(), "navigate");
        self.navigator.navigate(dest);
        self.last_route = Some(dest);
    }

    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
            self.top = 0;
            return;
        }
        self.cursor = self.cursor.min(len - 1);
        self.top = self.top.min(len - 1);
        self.ensure_cursor_visible();
    }

    pub(crate) fn ensure_cursor_visible(&mut self) {
        let rows = self.layout.rows_per_page();
        if self.cursor < self.top {
            self.top = self.cursor;
        } else if self.cursor >= self.top + rows {
            self.top = self.cursor + 1 - rows;
        }
    }
}
