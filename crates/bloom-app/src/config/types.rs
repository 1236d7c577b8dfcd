//! Configuration types for Bloom
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings`, `BehaviorSettings`, `ImageSettings` - its sections
//! - `ThemeMode`, `IconMode` - rendering choices

use bloom_core::Screen;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub images: ImageSettings,
}

/// Color palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Icon rendering mode for the TUI.
///
/// `Unicode` uses symbols such as `⌂` and `♡`; `Ascii` sticks to plain
/// characters for terminals without good font coverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    #[default]
    Unicode,
    Ascii,
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub theme: ThemeMode,

    #[serde(default)]
    pub icons: IconMode,
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Screen shown on launch
    #[serde(default)]
    pub start_screen: Screen,

    /// Require a second `q` before quitting
    #[serde(default)]
    pub confirm_quit: bool,

    /// Toast lifetime in ticks
    #[serde(default = "default_notice_ticks")]
    pub notice_ticks: u32,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            start_screen: Screen::default(),
            confirm_quit: false,
            notice_ticks: default_notice_ticks(),
        }
    }
}

/// Image loading settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageSettings {
    /// Request image loads at all; slots stay placeholders when off
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Simulated per-image delay in milliseconds
    #[serde(default)]
    pub latency_ms: u64,
}

impl ImageSettings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            latency_ms: 0,
        }
    }
}

fn default_notice_ticks() -> u32 {
    30
}

fn default_true() -> bool {
    true
}
