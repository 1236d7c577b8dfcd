//! Settings loader for config.toml

use super::types::Settings;
use bloom_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const BLOOM_DIR: &str = "bloom";

const DEFAULT_CONFIG: &str = r#"# Bloom Configuration

[ui]
theme = "light"         # light | dark
icons = "unicode"       # unicode | ascii

[behavior]
start_screen = "welcome"   # welcome | login | home
confirm_quit = false       # Press q twice to quit
notice_ticks = 30          # How long notices stay up (100ms ticks)

[images]
enabled = true
latency_ms = 0
"#;

/// `<config dir>/bloom/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(BLOOM_DIR).join(CONFIG_FILENAME))
}

/// Load settings
///
/// An explicit `path` must exist. Without one, the default location is
/// tried and a missing file means defaults. A file that cannot be parsed
/// is logged and replaced by defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let config_path = match path {
        Some(path) if !path.exists() => return Err(Error::config_not_found(path)),
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            other => {
                debug!("No config file at {:?}, using defaults", other);
                return Ok(Settings::default());
            }
        },
    };

    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    match parse_settings(&content) {
        Ok(settings) => {
            debug!("Loaded settings from {:?}", config_path);
            Ok(settings)
        }
        Err(e) if e.is_recoverable() => {
            warn!("Failed to parse {:?}: {}", config_path, e);
            Ok(Settings::default())
        }
        Err(e) => Err(e),
    }
}

fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Write a commented default config file unless one already exists
pub fn init_config_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write config file: {}", e)))?;

    info!("Created default config at {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IconMode, ThemeMode};
    use bloom_core::Screen;
    use tempfile::tempdir;

    #[test]
    fn test_load_explicit_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[ui]
theme = "dark"
icons = "ascii"

[behavior]
start_screen = "login"
confirm_quit = true
notice_ticks = 5
"#,
        )
        .unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.ui.theme, ThemeMode::Dark);
        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert_eq!(settings.behavior.start_screen, Screen::Login);
        assert!(settings.behavior.confirm_quit);
        assert_eq!(settings.behavior.notice_ticks, 5);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nope.toml");
        let err = load_settings(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_invalid_toml_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_parse_error_is_recoverable_toml_error() {
        let err = parse_settings("[ui]\ntheme = 42\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_init_config_file_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bloom").join("config.toml");

        init_config_file(&path).unwrap();
        assert!(path.exists());

        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

        init_config_file(&path).unwrap();
        let settings = load_settings(Some(&path)).unwrap();
        assert_eq!(settings.ui.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("bloom/config.toml"));
        }
    }
}
