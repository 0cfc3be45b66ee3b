// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use inbox_config::StringsConfig;
use inbox_core::{ConversationRecord, Destination, Needle, Tab};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::layout::{action_rect, row_rect, tab_rects};

const HIGHLIGHT_BG: Color = Color::Rgb(0xFB, 0xC8, 0xAE);
const ACCENT: Color = Color::Rgb(0xFF, 0x8F, 0x2D);
const ALERT: Color = Color::Rgb(0xFF, 0x44, 0x44);

// ── Character sets ────────────────────────────────────────────────────────────

fn sep(ascii: bool) -> &'static str {
    if ascii { "|" } else { "│" }
}
fn avatar(ascii: bool) -> &'static str {
    if ascii { "(o)" } else { "(●)" }
}
fn unread_dot(ascii: bool) -> &'static str {
    if ascii { "*" } else { "●" }
}
fn cursor_mark(ascii: bool) -> &'static str {
    if ascii { ">" } else { "▌" }
}
fn border_type(ascii: bool) -> BorderType {
    if ascii { BorderType::Plain } else { BorderType::Rounded }
}

/// Width of the right-hand row column holding the photo marker or the
/// delete control.
pub fn action_width(strings: &StringsConfig) -> u16 {
    cols(&strings.delete_button)
        .max(cols(&strings.photo_preview))
        .saturating_add(4)
}

/// Display width of `s` in terminal columns, saturating at `u16::MAX`.
fn cols(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

// ── Draw functions ────────────────────────────────────────────────────────────

/// Draw the centred screen title.
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let para = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Draw the search box.  Shows the placeholder while the query is empty and
/// a `visible/total` counter on the right.
#[allow(clippy::too_many_arguments)]
pub fn draw_search(
    frame: &mut Frame,
    area: Rect,
    query: &str,
    placeholder: &str,
    focused: bool,
    visible: usize,
    total: usize,
    ascii: bool,
) {
    let block = pane_block(focused, ascii);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = if query.is_empty() {
        Line::from(Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(query.to_string())
    };
    frame.render_widget(Paragraph::new(text), inner);

    let counter = format!("{visible}/{total} ");
    let cw = cols(&counter);
    let qw = cols(query);
    if inner.width > cw.saturating_add(qw).saturating_add(1) {
        let r = Rect { x: inner.x + inner.width - cw, width: cw, ..inner };
        frame.render_widget(
            Paragraph::new(Span::styled(counter, Style::default().fg(Color::DarkGray))),
            r,
        );
    }

    if focused {
        let col = qw.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + col, inner.y));
    }
}

/// The three text lines of one conversation row: name (with unread badge),
/// message with matched runs highlighted, and date.
pub fn row_lines(record: &ConversationRecord, needle: &Needle, ascii: bool) -> Vec<Line<'static>> {
    let indent = " ".repeat(avatar(ascii).width() + 1);

    let mut name_line = vec![
        Span::styled(avatar(ascii), Style::default().fg(Color::Gray)),
        Span::raw(" "),
    ];
    name_line.push(Span::styled(
        record.name.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    if record.unread_count > 0 {
        name_line.push(Span::raw(" "));
        name_line.push(Span::styled(
            format!(" {} ", record.unread_count),
            Style::default().fg(Color::White).bg(ALERT),
        ));
    }

    let match_style = Style::default().bg(HIGHLIGHT_BG).fg(Color::Black);
    let base_style = Style::default().fg(Color::Gray);
    let mut message_line = vec![Span::raw(indent.clone())];
    message_line.extend(needle.segments(&record.message).into_iter().map(|seg| {
        Span::styled(
            seg.text.to_string(),
            if seg.matched { match_style } else { base_style },
        )
    }));

    let date_line = vec![
        Span::raw(indent),
        Span::styled(record.date.clone(), Style::default().fg(Color::DarkGray)),
    ];

    vec![Line::from(name_line), Line::from(message_line), Line::from(date_line)]
}

/// Draw the visible slice of the conversation list.
#[allow(clippy::too_many_arguments)]
pub fn draw_list(
    frame: &mut Frame,
    area: Rect,
    rows: &[&ConversationRecord],
    needle: &Needle,
    top: usize,
    cursor: usize,
    revealed: Option<&str>,
    strings: &StringsConfig,
    focused: bool,
    ascii: bool,
) {
    let block = pane_block(focused, ascii);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if rows.is_empty() {
        let para = Paragraph::new(Span::styled(
            strings.empty_list.clone(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(para, inner);
        return;
    }

    let aw = action_width(strings);
    for (slot, (idx, record)) in rows.iter().enumerate().skip(top).enumerate() {
        let r = row_rect(inner, slot);
        if r.height == 0 || r.y >= inner.y + inner.height {
            break;
        }
        let selected = idx == cursor;
        let row_style = if selected && focused {
            Style::default().bg(Color::Rgb(0x30, 0x30, 0x30))
        } else {
            Style::default()
        };

        let mut lines = row_lines(record, needle, ascii);
        if selected {
            if let Some(first) = lines.first_mut() {
                first.spans.insert(0, Span::styled(cursor_mark(ascii), Style::default().fg(ACCENT)));
            }
        } else if let Some(first) = lines.first_mut() {
            first.spans.insert(0, Span::raw(" "));
        }
        for line in lines.iter_mut().skip(1) {
            line.spans.insert(0, Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(lines).style(row_style), r);

        let action = action_rect(r, aw);
        if revealed == Some(record.id.as_str()) {
            frame.render_widget(Clear, action);
            let mut label = vec![Line::default(); action.height as usize];
            if let Some(mid) = label.get_mut((action.height / 2) as usize) {
                *mid = Line::from(strings.delete_button.clone());
            }
            frame.render_widget(
                Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::White).bg(ALERT).add_modifier(Modifier::BOLD)),
                action,
            );
        } else if record.has_photo && action.height > 1 {
            let marker = Rect { y: action.y + 1, height: 1, ..action };
            frame.render_widget(
                Paragraph::new(format!("[{}]", strings.photo_preview))
                    .alignment(Alignment::Center)
                    .style(row_style.fg(Color::DarkGray)),
                marker,
            );
        }
    }
}

/// Label shown for a footer tab.
pub fn tab_label(tab: Tab, strings: &StringsConfig) -> &str {
    match tab {
        Tab::Home => &strings.home_tab,
        Tab::Cart => &strings.cart_tab,
        Tab::Add => "+",
        Tab::Chats => &strings.comments_tab,
        Tab::Profile => &strings.user_tab,
    }
}

/// Draw the bottom navigation bar.
pub fn draw_footer(
    frame: &mut Frame,
    area: Rect,
    selected: Option<Tab>,
    has_unread: bool,
    strings: &StringsConfig,
    ascii: bool,
) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_type(border_type(ascii))
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..block.inner(area)
    };
    frame.render_widget(block, area);

    for (tab, cell) in Tab::ALL.into_iter().zip(tab_rects(inner)) {
        let style = if tab == Tab::Add || selected == Some(tab) {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let mut spans = vec![Span::styled(tab_label(tab, strings).to_string(), style)];
        if tab == Tab::Chats && has_unread {
            spans.push(Span::styled(unread_dot(ascii), Style::default().fg(ALERT)));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            cell,
        );
    }
}

/// Draw the status line at the bottom.
pub fn draw_status(frame: &mut Frame, area: Rect, last_route: Option<Destination>, ascii: bool) {
    let separator = sep(ascii);
    let route = match last_route {
        Some(d) => format!(" → {d} "),
        None => " ".to_string(),
    };
    let line = Line::from(vec![
        Span::styled(route, Style::default().fg(Color::LightCyan)),
        Span::styled(separator, Style::default().fg(Color::DarkGray)),
        Span::styled(
            "  F1:help  /:search  Enter:open  ←:delete  1-5:tabs  q:quit",
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(Color::DarkGray)), area);
}

/// Draw the help overlay.
pub fn draw_help(frame: &mut Frame, ascii: bool) {
    let area = frame.area();
    let bt = border_type(ascii);

    let help_text = vec![
        Line::from(Span::styled(
            "  Key Bindings",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::LightBlue),
        )),
        Line::default(),
        Line::from(" j/k ↑/↓   Move selection"),
        Line::from(" ^u/^d     Page up/down"),
        Line::from(" g / G     Jump to top/bottom"),
        Line::from(" Enter     Open conversation (marks it read)"),
        Line::from(" ← / d     Reveal delete; again to delete"),
        Line::from(" → / Esc   Hide delete"),
        Line::from(" / or s    Search messages"),
        Line::from("            Esc/Enter leaves the search box"),
        Line::from("            ^u clears the query"),
        Line::from(" 1-5       Home, Cart, +, Chats, Profile"),
        Line::from(" drag ←    Swipe a row to reveal delete"),
        Line::from(" q / ^c    Quit"),
        Line::from(" F1        Toggle this help"),
        Line::default(),
        Line::from(Span::styled(
            " Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let width = 52u16.min(area.width);
    let height = (help_text.len() as u16 + 2).min(area.height);
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    let overlay = Rect::new(x, y, width, height);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(bt)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);
    frame.render_widget(Paragraph::new(help_text), inner);
}

pub(crate) fn pane_block(focused: bool, ascii: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type(ascii))
        .border_style(border_style)
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use inbox_core::sample_records;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn row_lines_highlight_matches() {
        let recs = sample_records(2);
        let rec = &recs[1];
        let lines = row_lines(rec, &Needle::new("DESK"), true);
        assert_eq!(lines.len(), 3);
        assert!(line_text(&lines[0]).contains("Bbbbb"));
        assert!(line_text(&lines[0]).contains(" 3 "));
        assert!(line_text(&lines[1]).ends_with("What's desk size?"));
        let hit: Vec<_> = lines[1]
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(HIGHLIGHT_BG))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(hit, ["desk"]);
        assert!(line_text(&lines[2]).contains("11-02"));
    }

    #[test]
    fn row_lines_omit_badge_when_read() {
        let mut rec = sample_records(1).remove(0);
        rec.unread_count = 0;
        let lines = row_lines(&rec, &Needle::new(""), true);
        assert_eq!(line_text(&lines[0]), "(o) Aaaaa");
    }

    #[test]
    fn action_width_fits_longest_label() {
        let s = StringsConfig::default();
        assert_eq!(action_width(&s), "Delete".len() as u16 + 4);
    }

    #[test]
    fn list_renders_rows_photo_and_delete_control() {
        let recs = sample_records(3);
        let rows: Vec<_> = recs.iter().collect();
        let strings = StringsConfig::default();
        let mut term = Terminal::new(TestBackend::new(50, 12)).unwrap();
        term.draw(|f| {
            draw_list(
                f,
                f.area(),
                &rows,
                &Needle::new("desk"),
                0,
                0,
                Some("1"),
                &strings,
                true,
                true,
            )
        })
        .unwrap();
        let text = buffer_text(term.backend().buffer());
        assert!(text.contains("Aaaaa"));
        assert!(text.contains("Bbbbb"));
        assert!(text.contains("[Photo]"));
        assert!(text.contains("Delete"));
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let strings = StringsConfig::default();
        let mut term = Terminal::new(TestBackend::new(40, 6)).unwrap();
        term.draw(|f| {
            draw_list(f, f.area(), &[], &Needle::new("zz"), 0, 0, None, &strings, false, true)
        })
        .unwrap();
        assert!(buffer_text(term.backend().buffer()).contains("No conversations"));
    }

    #[test]
    fn footer_shows_labels_and_unread_dot() {
        let strings = StringsConfig::default();
        let mut term = Terminal::new(TestBackend::new(60, 3)).unwrap();
        term.draw(|f| draw_footer(f, f.area(), Some(Tab::Home), true, &strings, true))
            .unwrap();
        let text = buffer_text(term.backend().buffer());
        for label in ["Home", "Cart", "+", "Chats*", "Profile"] {
            assert!(text.contains(label), "missing {label} in {text}");
        }
    }

    #[test]
    fn search_shows_placeholder_then_query() {
        let mut term = Terminal::new(TestBackend::new(40, 3)).unwrap();
        term.draw(|f| draw_search(f, f.area(), "", "Search messages", false, 10, 10, true))
            .unwrap();
        let text = buffer_text(term.backend().buffer());
        assert!(text.contains("Search messages"));
        assert!(text.contains("10/10"));

        term.draw(|f| draw_search(f, f.area(), "desk", "Search messages", true, 2, 10, true))
            .unwrap();
        let text = buffer_text(term.backend().buffer());
        assert!(text.contains("desk"));
        assert!(!text.contains("Search messages"));
        assert!(text.contains("2/10"));
    }

    #[test]
    fn very_long_query_hides_counter_and_clamps_cursor() {
        let query = "x".repeat(70_000);
        let mut term = Terminal::new(TestBackend::new(40, 3)).unwrap();
        term.draw(|f| draw_search(f, f.area(), &query, "Search messages", true, 0, 10, true))
            .unwrap();
        let text = buffer_text(term.backend().buffer());
        assert!(!text.contains("0/10"));
        assert_eq!(term.get_cursor_position().unwrap().x, 38);
    }

    #[test]
    fn cols_saturates() {
        assert_eq!(cols("Delete"), 6);
        assert_eq!(cols(&"x".repeat(70_000)), u16::MAX);
        let strings = StringsConfig { delete_button: "x".repeat(70_000), ..StringsConfig::default() };
        assert_eq!(action_width(&strings), u16::MAX);
    }
}
