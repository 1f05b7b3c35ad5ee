// Configuration type definitions

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Auto,
        }
    }
}

/// Suggestion popup configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PopupConfig {
    /// Rows shown before the list starts scrolling
    #[serde(default = "default_max_visible")]
    pub max_visible: usize,
}

fn default_max_visible() -> usize {
    8
}

impl Default for PopupConfig {
    fn default() -> Self {
        PopupConfig {
            max_visible: default_max_visible(),
        }
    }
}

/// Preview pane configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_preview_enabled")]
    pub enabled: bool,
}

fn default_preview_enabled() -> bool {
    true
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig {
            enabled: default_preview_enabled(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub popup: PopupConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}
