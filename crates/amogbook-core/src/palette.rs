//! Fixed entity catalogs
//!
//! Provides [`Palette`], the ordered list of crewmate names offered by the
//! pickers and used to validate entity names when strict mode is on.

use crate::contrast::{text_tone_for, Rgb, TextTone};
use serde::{Deserialize, Serialize};

/// One named entity, optionally with its swatch color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Display name, also the entity identifier
    pub name: &'static str,

    /// Swatch color (extended palette only)
    pub color: Option<Rgb>,
}

impl PaletteEntry {
    const fn plain(name: &'static str) -> Self {
        Self { name, color: None }
    }

    const fn colored(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Some(Rgb::new(r, g, b)),
        }
    }

    /// Tone for the name label drawn on the swatch
    #[must_use]
    pub fn label_tone(&self) -> Option<TextTone> {
        self.color.map(text_tone_for)
    }
}

const CLASSIC: &[PaletteEntry] = &[
    PaletteEntry::plain("Red"),
    PaletteEntry::plain("Blue"),
    PaletteEntry::plain("Green"),
    PaletteEntry::plain("Pink"),
    PaletteEntry::plain("Orange"),
    PaletteEntry::plain("Yellow"),
    PaletteEntry::plain("Black"),
    PaletteEntry::plain("White"),
    PaletteEntry::plain("Purple"),
    PaletteEntry::plain("Brown"),
    PaletteEntry::plain("Cyan"),
    PaletteEntry::plain("Lime"),
];

const EXTENDED: &[PaletteEntry] = &[
    PaletteEntry::colored("Red", 0xff, 0x4d, 0x4d),
    PaletteEntry::colored("Blue", 0x4d, 0x4d, 0xff),
    PaletteEntry::colored("Green", 0x33, 0xcc, 0x33),
    PaletteEntry::colored("Pink", 0xff, 0x99, 0xcc),
    PaletteEntry::colored("Orange", 0xff, 0x99, 0x00),
    PaletteEntry::colored("Yellow", 0xff, 0xff, 0x66),
    PaletteEntry::colored("Black", 0x33, 0x33, 0x33),
    PaletteEntry::colored("White", 0xe0, 0xe0, 0xe0),
    PaletteEntry::colored("Purple", 0x99, 0x33, 0xcc),
    PaletteEntry::colored("Brown", 0x99, 0x66, 0x33),
    PaletteEntry::colored("Cyan", 0x00, 0xcc, 0xcc),
    PaletteEntry::colored("Lime", 0x99, 0xff, 0x33),
    PaletteEntry::colored("Maroon", 0x80, 0x00, 0x00),
    PaletteEntry::colored("Rose", 0xff, 0x66, 0xa3),
    PaletteEntry::colored("Banana", 0xff, 0xf2, 0x7f),
    PaletteEntry::colored("Gray", 0x9e, 0x9e, 0x9e),
    PaletteEntry::colored("Tan", 0xd2, 0xb4, 0x8c),
    PaletteEntry::colored("Coral", 0xff, 0x7f, 0x50),
];

/// Which compiled-in catalog to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    /// Original twelve names, no colors
    Classic,

    /// Eighteen names with swatch colors
    #[default]
    Extended,
}

/// Ordered entity catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    entries: &'static [PaletteEntry],
}

impl Palette {
    /// Palette for `kind`
    #[inline]
    #[must_use]
    pub const fn new(kind: PaletteKind) -> Self {
        let entries = match kind {
            PaletteKind::Classic => CLASSIC,
            PaletteKind::Extended => EXTENDED,
        };
        Self { kind, entries }
    }

    /// Catalog variant
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// All entries, in picker order
    #[inline]
    #[must_use]
    pub const fn entries(&self) -> &'static [PaletteEntry] {
        self.entries
    }

    /// Entry names, in picker order
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.name)
    }

    /// Check membership (exact, case-sensitive)
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Look up an entry by name
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&'static PaletteEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Resolve user input to a catalog name, ignoring ASCII case
    #[must_use]
    pub fn resolve(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(input))
            .map(|e| e.name)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; both catalogs are non-empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PaletteKind::default())
    }
}
