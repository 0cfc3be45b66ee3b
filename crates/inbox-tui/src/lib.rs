// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod app;
mod keys;
mod layout;
mod nav;
mod widgets;

pub use app::{App, AppOptions, Focus};
pub use keys::Action;
pub use nav::LogNavigator;
