// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use inbox_core::{Destination, Navigator};
use tracing::info;

/// Stand-in host navigator: there is no screen stack behind this TUI, so
/// requests are only logged (and echoed in the status bar by the app).
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&mut self, to: Destination) {
        info!(route = to.route_name(), "navigation requested");
    }
}
