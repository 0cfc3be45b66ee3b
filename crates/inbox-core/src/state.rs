// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Screen-level list state and its single reducer.
//!
//! Row gestures and footer taps arrive as [`ListEvent`] values instead of
//! per-row callbacks.  [`ListState::apply`] is the only place the collection
//! changes; it returns the navigation request (if any) the caller should hand
//! to its [`crate::Navigator`].

use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::CoreError,
    nav::{Destination, Tab},
    ops,
    record::ConversationRecord,
    search::Needle,
};

/// A discrete user-initiated change to the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Replace the search text.
    SetQuery(String),
    /// Delete control of a revealed row was activated.
    Delete(String),
    /// Row was tapped: mark read and open the chat.
    Open(String),
    /// Footer control was tapped.
    Tab(Tab),
}

#[derive(Debug, Clone)]
pub struct ListState {
    records: Vec<ConversationRecord>,
    query: String,
    /// Compiled form of `query`, rebuilt on every `SetQuery`.
    needle: Needle,
    selected_tab: Option<Tab>,
}

impl ListState {
    /// Take ownership of `records`, rejecting collections with repeated ids.
    pub fn new(records: Vec<ConversationRecord>) -> Result<Self, CoreError> {
        ensure_unique_ids(&records)?;
        Ok(Self {
            records,
            query: String::new(),
            needle: Needle::new(""),
            selected_tab: None,
        })
    }

    pub fn records(&self) -> &[ConversationRecord] {
        &self.records
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn needle(&self) -> &Needle {
        &self.needle
    }

    pub fn selected_tab(&self) -> Option<Tab> {
        self.selected_tab
    }

    /// Records matching the current query, in collection order.
    pub fn visible(&self) -> Vec<&ConversationRecord> {
        self.records
            .iter()
            .filter(|r| self.needle.is_match(&r.message))
            .collect()
    }

    pub fn has_unread(&self) -> bool {
        ops::has_unread(&self.records)
    }

    pub fn apply(&mut self, event: ListEvent) -> Option<Destination> {
        match event {
            ListEvent::SetQuery(q) => {
                if q != self.query {
                    self.needle = Needle::new(&q);
                    self.query = q;
                    debug!(query = %self.query, "search query changed");
                }
                None
            }
            ListEvent::Delete(id) => {
                let before = self.records.len();
                self.records = ops::delete(&self.records, &id);
                debug!(%id, removed = before != self.records.len(), "delete conversation");
                None
            }
            ListEvent::Open(id) => {
                if ops::position(&self.records, &id).is_none() {
                    debug!(%id, "open ignored: unknown conversation");
                    return None;
                }
                self.records = ops::mark_read(&self.records, &id);
                debug!(%id, "conversation opened");
                Some(Destination::ChatScreen)
            }
            ListEvent::Tab(tab) => {
                let dest = tab.destination()?;
                self.selected_tab = Some(tab);
                Some(dest)
            }
        }
    }
}

fn ensure_unique_ids(records: &[ConversationRecord]) -> Result<(), CoreError> {
    let mut seen = HashSet::with_capacity(records.len());
    for r in records {
        if !seen.insert(r.id.as_str()) {
            return Err(CoreError::DuplicateId(r.id.clone()));
        }
    }
    Ok(())
}
