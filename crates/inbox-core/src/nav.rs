// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Navigation requests leaving the conversation screen.

use std::fmt;

/// Screens this one can ask the host to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    HomePage,
    ShoppingCart,
    ConversationPage,
    Profile,
    /// The chat view for an opened conversation.
    ChatScreen,
}

impl Destination {
    /// Screen identity understood by the host navigator.
    pub fn route_name(self) -> &'static str {
        match self {
            Destination::HomePage => "HomePage",
            Destination::ShoppingCart => "ShoppingCart",
            Destination::ConversationPage => "ConversationPage",
            Destination::Profile => "Profile",
            Destination::ChatScreen => "ChatScreen",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

/// Footer controls, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Home,
    Cart,
    /// Centre "+" button; does nothing yet.
    Add,
    Chats,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Cart, Tab::Add, Tab::Chats, Tab::Profile];

    pub fn destination(self) -> Option<Destination> {
        match self {
            Tab::Home => Some(Destination::HomePage),
            Tab::Cart => Some(Destination::ShoppingCart),
            Tab::Add => None,
            Tab::Chats => Some(Destination::ConversationPage),
            Tab::Profile => Some(Destination::Profile),
        }
    }
}

/// Host-side navigation stack.  Implemented by whatever embeds the screen.
pub trait Navigator {
    fn navigate(&mut self, to: Destination);
}

/// Keeps every request in order; handy for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub requests: Vec<Destination>,
}

impl RecordingNavigator {
    pub fn last(&self) -> Option<Destination> {
        self.requests.last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, to: Destination) {
        self.requests.push(to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_map_to_routes() {
        assert_eq!(Tab::Home.destination(), Some(Destination::HomePage));
        assert_eq!(Tab::Cart.destination(), Some(Destination::ShoppingCart));
        assert_eq!(Tab::Chats.destination(), Some(Destination::ConversationPage));
        assert_eq!(Tab::Profile.destination(), Some(Destination::Profile));
        assert_eq!(Tab::Add.destination(), None);
    }

    #[test]
    fn route_names_match_host_screens() {
        assert_eq!(Destination::ChatScreen.to_string(), "ChatScreen");
        assert_eq!(Destination::ShoppingCart.route_name(), "ShoppingCart");
    }

    #[test]
    fn recording_navigator_keeps_order() {
        let mut nav = RecordingNavigator::default();
        nav.navigate(Destination::HomePage);
        nav.navigate(Destination::ChatScreen);
        assert_eq!(nav.requests, [Destination::HomePage, Destination::ChatScreen]);
        assert_eq!(nav.last(), Some(Destination::ChatScreen));
    }
}
