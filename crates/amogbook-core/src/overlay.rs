//! Display mode toggling
//!
//! Provides [`Overlay`], the compact/full display state, and [`KeyBinding`],
//! the reserved key combination that flips it. Neither touches notebook data.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Which view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Compact heads-up view of the selected case
    #[default]
    Mini,

    /// Full editor with case, suspicion and log tabs
    Full,
}

impl DisplayMode {
    /// The other mode
    #[inline]
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Mini => Self::Full,
            Self::Full => Self::Mini,
        }
    }
}

/// Keyboard modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    /// Control
    Ctrl,
    /// Shift
    Shift,
    /// Alt / Option
    Alt,
    /// Super / Command / Windows
    Meta,
}

impl Modifier {
    fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => Some(Self::Ctrl),
            "shift" => Some(Self::Shift),
            "alt" | "option" => Some(Self::Alt),
            "meta" | "super" | "cmd" | "win" => Some(Self::Meta),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shift",
            Self::Alt => "Alt",
            Self::Meta => "Meta",
        }
    }
}

/// Key plus the modifiers that must be held with it
///
/// Written as `Mod+Mod+Key`, e.g. `Ctrl+Tab` or `Ctrl+Shift+F1`. Key names are
/// case-insensitive and stored normalized (`Tab`, `F1`, `A`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyBinding {
    key: String,
    modifiers: Vec<Modifier>,
}

impl KeyBinding {
    /// Create binding from parts
    #[must_use]
    pub fn new(key: impl Into<String>, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        let mut modifiers: Vec<Modifier> = modifiers.into_iter().collect();
        modifiers.sort_unstable();
        modifiers.dedup();
        Self {
            key: normalize_key(&key.into()),
            modifiers,
        }
    }

    /// Bound key name
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Required modifiers
    #[inline]
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Check a key press against this binding
    ///
    /// Every required modifier must be held; additional held modifiers are
    /// allowed.
    #[must_use]
    pub fn matches(&self, key: &str, held: &[Modifier]) -> bool {
        normalize_key(key) == self.key && self.modifiers.iter().all(|m| held.contains(m))
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        Self::new("Tab", [Modifier::Ctrl])
    }
}

impl FromStr for KeyBinding {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidKeyBinding(s.to_string());

        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key, mods) = tokens.split_last().ok_or_else(invalid)?;
        if key.is_empty() || Modifier::parse(key).is_some() {
            return Err(invalid());
        }

        let modifiers = mods
            .iter()
            .map(|t| Modifier::parse(t).ok_or_else(invalid))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(*key, modifiers))
    }
}

impl TryFrom<String> for KeyBinding {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyBinding> for String {
    fn from(value: KeyBinding) -> Self {
        value.to_string()
    }
}

impl Display for KeyBinding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}+", m.label())?;
        }
        f.write_str(&self.key)
    }
}

fn normalize_key(key: &str) -> String {
    let key = key.trim();
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Compact/full display state
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    mode: DisplayMode,
    binding: KeyBinding,
}

impl Overlay {
    /// Create overlay starting in `mode`
    #[inline]
    #[must_use]
    pub fn new(mode: DisplayMode, binding: KeyBinding) -> Self {
        Self { mode, binding }
    }

    /// Current mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Toggle binding
    #[inline]
    #[must_use]
    pub fn binding(&self) -> &KeyBinding {
        &self.binding
    }

    /// Flip between mini and full; returns the new mode
    pub fn toggle(&mut self) -> DisplayMode {
        self.mode = self.mode.flipped();
        tracing::debug!(mode = ?self.mode, "overlay toggled");
        self.mode
    }

    /// Switch to the full view
    pub fn show_full(&mut self) {
        self.mode = DisplayMode::Full;
    }

    /// Feed a key press; toggles and returns true when it matches the binding
    pub fn handle_key(&mut self, key: &str, held: &[Modifier]) -> bool {
        if self.binding.matches(key, held) {
            self.toggle();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binding_is_ctrl_tab() {
        let b = KeyBinding::default();
        assert_eq!(b.to_string(), "Ctrl+Tab");
        assert_eq!("ctrl+tab".parse::<KeyBinding>().unwrap(), b);
    }

    #[test]
    fn parses_multiple_modifiers_in_any_order() {
        let a: KeyBinding = "Shift+Ctrl+f1".parse().unwrap();
        let b: KeyBinding = "control + shift + F1".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.key(), "F1");
        assert_eq!(a.modifiers(), &[Modifier::Ctrl, Modifier::Shift]);
        assert_eq!(a.to_string(), "Ctrl+Shift+F1");
    }

    #[test]
    fn bare_key_has_no_modifiers() {
        let b: KeyBinding = "F12".parse().unwrap();
        assert!(b.modifiers().is_empty());
        assert!(b.matches("f12", &[]));
        assert!(b.matches("F12", &[Modifier::Alt]));
    }

    #[test]
    fn rejects_malformed_bindings() {
        for bad in ["", "Ctrl+", "Ctrl", "Hyper+Tab", "Ctrl++Tab"] {
            assert!(bad.parse::<KeyBinding>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn match_requires_all_modifiers() {
        let b: KeyBinding = "Ctrl+Shift+Tab".parse().unwrap();
        assert!(!b.matches("Tab", &[Modifier::Ctrl]));
        assert!(b.matches("Tab", &[Modifier::Shift, Modifier::Ctrl]));
        assert!(b.matches("Tab", &[Modifier::Shift, Modifier::Ctrl, Modifier::Alt]));
        assert!(!b.matches("Space", &[Modifier::Shift, Modifier::Ctrl]));
    }

    #[test]
    fn overlay_starts_mini_and_toggles() {
        let mut o = Overlay::default();
        assert_eq!(o.mode(), DisplayMode::Mini);
        assert_eq!(o.toggle(), DisplayMode::Full);
        assert_eq!(o.toggle(), DisplayMode::Mini);
    }

    #[test]
    fn show_full_is_idempotent() {
        let mut o = Overlay::default();
        o.show_full();
        o.show_full();
        assert_eq!(o.mode(), DisplayMode::Full);
    }

    #[test]
    fn handle_key_only_reacts_to_binding() {
        let mut o = Overlay::default();
        assert!(!o.handle_key("Tab", &[]));
        assert_eq!(o.mode(), DisplayMode::Mini);
        assert!(o.handle_key("tab", &[Modifier::Ctrl]));
        assert_eq!(o.mode(), DisplayMode::Full);
    }
}
