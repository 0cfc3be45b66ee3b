// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Where the initial conversation list comes from.

use std::path::Path;

use tracing::debug;

use crate::{error::CoreError, record::ConversationRecord};

/// Read a JSON array of conversations.  The file is never written back.
pub fn load_records(path: &Path) -> Result<Vec<ConversationRecord>, CoreError> {
    let shown = path.display().to_string();
    let text = std::fs::read_to_string(path).map_err(|e| CoreError::Io(shown.clone(), e))?;
    let records: Vec<ConversationRecord> =
        serde_json::from_str(&text).map_err(|e| CoreError::Parse(shown.clone(), e))?;
    debug!(path = %shown, count = records.len(), "loaded conversations");
    Ok(records)
}
