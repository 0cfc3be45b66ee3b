// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Query matching: list filtering and match highlighting.
//!
//! A message matches when its lowercased text contains the lowercased query.
//! The query is literal text; characters such as `(`, `?` or `*` carry no
//! pattern meaning.  A highlighted run always lowercases to exactly the
//! lowercased query, so a row can be listed without a highlighted run when the
//! only hit straddles a character whose lowercase form is longer than one char
//! (`İ` → `i̇`) or depends on context (final `Σ`).

use serde::Serialize;

use crate::record::ConversationRecord;

/// A contiguous run of source text, flagged when it matches the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

impl<'a> Segment<'a> {
    fn plain(text: &'a str) -> Self {
        Self { text, matched: false }
    }

    fn hit(text: &'a str) -> Self {
        Self { text, matched: true }
    }
}

/// Lowercased form of one query string, shared by filtering and highlighting.
#[derive(Debug, Clone)]
pub struct Needle {
    lowered: String,
}

impl Needle {
    pub fn new(query: &str) -> Self {
        Self { lowered: query.to_lowercase() }
    }

    /// True when the lowercased `text` contains the lowercased query; the
    /// empty query matches anything.
    pub fn is_match(&self, text: &str) -> bool {
        self.lowered.is_empty() || text.to_lowercase().contains(&self.lowered)
    }

    /// Split `text` into matched and unmatched runs.
    ///
    /// The runs concatenate back to `text`.  Runs are cut on `text`'s char
    /// boundaries, scanning left to right without overlap; a run is matched
    /// exactly when its lowercase form equals the lowercased query.
    /// Back-to-back matches stay separate segments.
    pub fn segments<'t>(&self, text: &'t str) -> Vec<Segment<'t>> {
        if self.lowered.is_empty() {
            return vec![Segment::plain(text)];
        }

        let mut out = Vec::new();
        let mut last = 0usize;
        let mut start = 0usize;
        while let Some(c) = text[start..].chars().next() {
            match self.match_at(text, start) {
                Some(end) => {
                    if start > last {
                        out.push(Segment::plain(&text[last..start]));
                    }
                    out.push(Segment::hit(&text[start..end]));
                    last = end;
                    start = end;
                }
                None => start += c.len_utf8(),
            }
        }
        if last < text.len() || out.is_empty() {
            out.push(Segment::plain(&text[last..]));
        }
        out
    }

    /// End of the run starting at `start` whose lowercase form is the query.
    ///
    /// Per-char lowercasing never changes the byte length that
    /// `str::to_lowercase` produces for the same run, so the first char
    /// boundary reaching the query's length is the only candidate.
    fn match_at(&self, text: &str, start: usize) -> Option<usize> {
        let mut len = 0usize;
        for (i, c) in text[start..].char_indices() {
            len += c.to_lowercase().map(char::len_utf8).sum::<usize>();
            if len >= self.lowered.len() {
                let end = start + i + c.len_utf8();
                return (len == self.lowered.len()
                    && text[start..end].to_lowercase() == self.lowered)
                    .then_some(end);
            }
        }
        None
    }
}

/// Records whose lowercased message contains the lowercased `query`, in
/// their original order.  An empty query keeps every record.
pub fn filter<'r>(records: &'r [ConversationRecord], query: &str) -> Vec<&'r ConversationRecord> {
    let needle = Needle::new(query);
    records
        .iter()
        .filter(|r| needle.is_match(&r.message))
        .collect()
}

/// Split `text` into segments flagged by whether they match `query`.
pub fn highlight<'t>(text: &'t str, query: &str) -> Vec<Segment<'t>> {
    Needle::new(query).segments(text)
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
