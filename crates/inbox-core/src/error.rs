// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("could not read conversation file '{0}': {1}")]
    Io(String, #[source] std::io::Error),

    #[error("could not parse conversation file '{0}': {1}")]
    Parse(String, #[source] serde_json::Error),

    #[error("duplicate conversation id '{0}'")]
    DuplicateId(String),
}
