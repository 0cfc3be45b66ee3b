// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

/// One row of the conversation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationRecord {
    /// Unique within a collection.
    pub id: String,
    /// Display name of the other participant.
    pub name: String,
    /// Last message; the only field searched.
    pub message: String,
    /// Pre-formatted date label, e.g. `"11-02"`.
    pub date: String,
    #[serde(default)]
    pub unread_count: u32,
    #[serde(default)]
    pub has_photo: bool,
}

impl ConversationRecord {
    pub fn is_unread(&self) -> bool {
        self.unread_count > 0
    }
}

/// Placeholder conversations used when no data file is given.
///
/// Even indices talk about buying a desk, odd ones ask about its size; every
/// entry starts with three unread messages and a photo attachment.
pub fn sample_records(count: usize) -> Vec<ConversationRecord> {
    (0..count)
        .map(|i| {
            let even = i % 2 == 0;
            ConversationRecord {
                id: i.to_string(),
                name: if even { "Aaaaa" } else { "Bbbbb" }.into(),
                message: if even {
                    "When did you buy the desk?"
                } else {
                    "What's desk size?"
                }
                .into(),
                date: "11-02".into(),
                unread_count: 3,
                has_photo: true,
            }
        })
        .collect()
}
