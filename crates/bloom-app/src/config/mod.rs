//! Configuration file parsing for Bloom
//!
//! Supports `config.toml` in the user's config directory
//! (`~/.config/bloom/config.toml` on Linux) or an explicit `--config` path.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
