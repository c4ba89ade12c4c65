//! Compact read-only view of the selected case
//!
//! [`Mirror`] pins at most one case id and renders a [`MiniView`] snapshot of
//! it. A pin that no longer resolves renders as the empty view, so the mirror
//! never shows a deleted case.

use crate::case::{CaseId, CaseStore};
use crate::log::LOG_TIME_FORMAT;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// Four-line heads-up snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiniView {
    /// `Victim: ...`
    pub victim: String,
    /// `Location: ...`
    pub location: String,
    /// `Suspects: ...`
    pub suspects: String,
    /// Creation time, empty when nothing is pinned
    pub time: String,
}

impl MiniView {
    /// Snapshot shown when no case is pinned
    #[must_use]
    pub fn empty() -> Self {
        Self {
            victim: "Victim: None".into(),
            location: "Location: -".into(),
            suspects: "Suspects: -".into(),
            time: String::new(),
        }
    }

    /// Check if this is the empty snapshot
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }
}

impl Default for MiniView {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for MiniView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.victim)?;
        writeln!(f, "{}", self.location)?;
        write!(f, "{}", self.suspects)?;
        if !self.time.is_empty() {
            write!(f, "\n{}", self.time)?;
        }
        Ok(())
    }
}

/// Selected-case mirror
#[derive(Debug, Clone, Default)]
pub struct Mirror {
    pinned: Option<CaseId>,
    view: MiniView,
}

impl Mirror {
    /// Unpinned mirror
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently pinned case
    #[inline]
    #[must_use]
    pub fn pinned(&self) -> Option<&CaseId> {
        self.pinned.as_ref()
    }

    /// Last rendered snapshot
    #[inline]
    #[must_use]
    pub fn view(&self) -> &MiniView {
        &self.view
    }

    /// Pin `id` and render it from `store`
    pub fn pin(&mut self, id: CaseId, store: &CaseStore) {
        self.pinned = Some(id);
        self.refresh(store);
    }

    /// Drop the pin and show the empty view
    pub fn clear(&mut self) {
        self.pinned = None;
        self.view = MiniView::empty();
    }

    /// Check if `id` is the pinned case
    #[must_use]
    pub fn is_pinned(&self, id: &CaseId) -> bool {
        self.pinned.as_ref() == Some(id)
    }

    /// Re-render from `store`; a dangling pin is dropped
    pub fn refresh(&mut self, store: &CaseStore) {
        let Some(id) = self.pinned.as_ref() else {
            self.view = MiniView::empty();
            return;
        };

        let Ok(record) = store.get(id) else {
            tracing::debug!(%id, "mirrored case vanished");
            self.clear();
            return;
        };

        let suspects = if record.suspects().is_empty() {
            "-".to_string()
        } else {
            record.suspects().join(", ")
        };

        self.view = MiniView {
            victim: format!("Victim: {}", record.victim().unwrap_or("None")),
            location: format!("Location: {}", record.location()),
            suspects: format!("Suspects: {suspects}"),
            time: record.timestamp().format(LOG_TIME_FORMAT).to_string(),
        };
    }
}
