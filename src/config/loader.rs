//! Configuration file loading
//!
//! Reads `<config-dir>/urlq/config.toml`. A missing or malformed file
//! never prevents startup; defaults are used instead.

use std::path::{Path, PathBuf};

use super::types::Config;

/// Path of the user config file, when a config directory exists
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("urlq").join("config.toml"))
}

/// Load the user configuration, falling back to defaults
pub fn load_config() -> Config {
    match config_file_path() {
        Some(path) => load_from_path(&path),
        None => Config::default(),
    }
}

fn load_from_path(path: &Path) -> Config {
    let Ok(contents) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    match toml::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::debug!("ignoring malformed config {}: {err}", path.display());
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::config::ClipboardBackend;

    #[test]
    fn test_load_from_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[clipboard]\nbackend = \"system\"\n")
            .unwrap();

        let config = load_from_path(file.path());
        assert_eq!(config.clipboard.backend, ClipboardBackend::System);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_from_path(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.popup.max_visible, 8);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[clipboard\nbackend !!").unwrap();

        let config = load_from_path(file.path());
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
    }

    #[test]
    fn test_config_file_path_ends_with_expected_name() {
        if let Some(path) = config_file_path() {
            assert!(path.ends_with("urlq/config.toml"));
        }
    }
}
