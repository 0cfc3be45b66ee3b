// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tui: TuiConfig,
    #[serde(default)]
    pub data: DataConfig,
    /// User-facing labels.  Override these to translate the screen.
    #[serde(default)]
    pub strings: StringsConfig,
    /// Write logs to this file instead of stderr.  `~` and `$VARS` are
    /// expanded.  Useful while the TUI owns the terminal.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Config {
    /// `log_file` with `~` / environment variables expanded.
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().map(expand_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Number of placeholder conversations generated when no file is given.
    pub sample_count: usize,
    /// JSON array of conversations to show instead of the placeholders.
    pub file: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { sample_count: 10, file: None }
    }
}

impl DataConfig {
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.as_deref().map(expand_path)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Use plain ASCII borders/indicators instead of Unicode box-drawing
    /// characters.  Enable this when the terminal font lacks wide Unicode
    /// support.  Can also be forced with the INBOX_ASCII_BORDERS=1
    /// environment variable.
    pub ascii_borders: bool,
    /// Capture mouse events (row clicks, tab clicks, wheel scrolling).
    pub mouse: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { ascii_borders: false, mouse: true }
    }
}

/// Labels shown on the conversation screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StringsConfig {
    pub header: String,
    pub search_placeholder: String,
    pub delete_button: String,
    pub photo_preview: String,
    pub home_tab: String,
    pub cart_tab: String,
    pub comments_tab: String,
    pub user_tab: String,
    /// Shown in place of the list when nothing is visible.
    pub empty_list: String,
}

impl Default for StringsConfig {
    fn default() -> Self {
        Self {
            header: "Messages".into(),
            search_placeholder: "Search messages".into(),
            delete_button: "Delete".into(),
            photo_preview: "Photo".into(),
            home_tab: "Home".into(),
            cart_tab: "Cart".into(),
            comments_tab: "Chats".into(),
            user_tab: "Profile".into(),
            empty_list: "No conversations".into(),
        }
    }
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::full(raw).map(|s| s.into_owned()).unwrap_or_else(|_| raw.to_string()))
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_generate_ten_samples() {
        let c = Config::default();
        assert_eq!(c.data.sample_count, 10);
        assert!(c.data.file.is_none());
        assert!(c.log_file.is_none());
    }

    #[test]
    fn default_tui_has_unicode_borders_and_mouse() {
        let t = TuiConfig::default();
        assert!(!t.ascii_borders);
        assert!(t.mouse);
    }

    #[test]
    fn partial_strings_table_keeps_other_defaults() {
        let c: Config = toml::from_str(r#"[strings]
header = "Samtal""#).unwrap();
        assert_eq!(c.strings.header, "Samtal");
        assert_eq!(c.strings.delete_button, "Delete");
    }

    #[test]
    fn empty_document_is_default() {
        let c: Config = toml::from_str("").unwrap();
        assert_eq!(c.strings, StringsConfig::default());
        assert_eq!(c.data.sample_count, 10);
    }

    #[test]
    fn plain_paths_are_unchanged() {
        let d = DataConfig { file: Some("/tmp/convs.json".into()), ..DataConfig::default() };
        assert_eq!(d.file_path(), Some(PathBuf::from("/tmp/convs.json")));
    }

    #[test]
    fn tilde_is_expanded() {
        let d = DataConfig { file: Some("~/convs.json".into()), ..DataConfig::default() };
        let p = d.file_path().unwrap();
        if dirs::home_dir().is_some() {
            assert!(!p.starts_with("~"));
        }
        assert!(p.ends_with("convs.json"));
    }

    #[test]
    fn config_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("sample_count: 10"));
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back.strings, StringsConfig::default());
    }
}
