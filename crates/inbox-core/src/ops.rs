// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Pure transitions over a record collection.
//!
//! Each function takes the current collection by reference and returns a new
//! one; an unknown id yields an unchanged copy.

use crate::record::ConversationRecord;

/// Remove the record with `id`.
pub fn delete(records: &[ConversationRecord], id: &str) -> Vec<ConversationRecord> {
    records.iter().filter(|r| r.id != id).cloned().collect()
}

/// Reset the unread counter of the record with `id`.
pub fn mark_read(records: &[ConversationRecord], id: &str) -> Vec<ConversationRecord> {
    records
        .iter()
        .map(|r| {
            if r.id == id {
                ConversationRecord { unread_count: 0, ..r.clone() }
            } else {
                r.clone()
            }
        })
        .collect()
}

/// True when at least one record still has unread messages.
pub fn has_unread(records: &[ConversationRecord]) -> bool {
    records.iter().any(ConversationRecord::is_unread)
}

/// Position of `id` in `records`, if present.
pub fn position(records: &[ConversationRecord], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id == id)
}
