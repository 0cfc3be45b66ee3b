// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Conversation list core: records, search, highlighting and the list reducer.
//!
//! Nothing in this crate touches the terminal.  The front end feeds
//! [`ListEvent`]s into a [`ListState`] and renders what [`ListState::visible`]
//! and [`highlight`] hand back.
mod error;
pub mod nav;
pub mod ops;
pub mod record;
pub mod search;
pub mod source;
pub mod state;

pub use error::CoreError;
pub use nav::{Destination, Navigator, Tab};
pub use ops::{delete, has_unread, mark_read};
pub use record::{sample_records, ConversationRecord};
pub use search::{filter, highlight, Needle, Segment};
pub use state::{ListEvent, ListState};
