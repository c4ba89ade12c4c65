//! Notebook configuration
//!
//! [`NotebookConfig`] carries the handful of behavior switches a front end
//! may want to change. It deserializes from a flat table so binaries can load
//! it from TOML; every field has a default.

use crate::overlay::{DisplayMode, KeyBinding};
use crate::palette::PaletteKind;
use crate::suspicion::DEFAULT_SCORE;
use serde::{Deserialize, Serialize};

/// Notebook behavior switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotebookConfig {
    /// Entity catalog offered by pickers
    pub palette: PaletteKind,
    /// Reject cases saved without a victim
    pub require_victim: bool,
    /// Reject entity names outside the palette
    pub strict_palette: bool,
    /// Score used when a suspicion entry is set without one
    pub default_score: f64,
    /// Key combination that flips between mini and full view
    pub toggle_key: KeyBinding,
    /// View shown at startup
    pub start_mode: DisplayMode,
}

impl NotebookConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings matching the first notebook release: classic palette,
    /// victim optional, full view only
    #[must_use]
    pub fn classic() -> Self {
        Self {
            palette: PaletteKind::Classic,
            require_victim: false,
            start_mode: DisplayMode::Full,
            ..Self::default()
        }
    }

    /// With palette
    #[inline]
    #[must_use]
    pub fn with_palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }

    /// With victim requirement
    #[inline]
    #[must_use]
    pub fn with_require_victim(mut self, require: bool) -> Self {
        self.require_victim = require;
        self
    }

    /// With palette membership enforcement
    #[inline]
    #[must_use]
    pub fn with_strict_palette(mut self, strict: bool) -> Self {
        self.strict_palette = strict;
        self
    }

    /// With default suspicion score
    #[inline]
    #[must_use]
    pub fn with_default_score(mut self, score: f64) -> Self {
        self.default_score = score;
        self
    }

    /// With toggle key binding
    #[inline]
    #[must_use]
    pub fn with_toggle_key(mut self, binding: KeyBinding) -> Self {
        self.toggle_key = binding;
        self
    }

    /// With startup view
    #[inline]
    #[must_use]
    pub fn with_start_mode(mut self, mode: DisplayMode) -> Self {
        self.start_mode = mode;
        self
    }
}

impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            palette: PaletteKind::Extended,
            require_victim: true,
            strict_palette: false,
            default_score: DEFAULT_SCORE,
            toggle_key: KeyBinding::default(),
            start_mode: DisplayMode::Mini,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::Modifier;

    #[test]
    fn defaults_match_overlay_edition() {
        let c = NotebookConfig::new();
        assert_eq!(c.palette, PaletteKind::Extended);
        assert!(c.require_victim);
        assert!(!c.strict_palette);
        assert!((c.default_score - 50.0).abs() < f64::EPSILON);
        assert_eq!(c.toggle_key.to_string(), "Ctrl+Tab");
        assert_eq!(c.start_mode, DisplayMode::Mini);
    }

    #[test]
    fn classic_relaxes_victim() {
        let c = NotebookConfig::classic();
        assert_eq!(c.palette, PaletteKind::Classic);
        assert!(!c.require_victim);
        assert_eq!(c.start_mode, DisplayMode::Full);
    }

    #[test]
    fn builders_chain() {
        let c = NotebookConfig::new()
            .with_strict_palette(true)
            .with_default_score(25.0)
            .with_toggle_key(KeyBinding::new("F2", [Modifier::Alt]));
        assert!(c.strict_palette);
        assert!((c.default_score - 25.0).abs() < f64::EPSILON);
        assert_eq!(c.toggle_key.to_string(), "Alt+F2");
    }
}
