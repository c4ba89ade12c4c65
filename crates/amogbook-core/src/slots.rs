//! Variable-length suspect list under construction
//!
//! While a case is being composed or edited its suspects live in slots. The
//! list always ends in one open slot: filling the last slot opens a new one
//! behind it, and a removal that leaves the tail filled (or the list empty)
//! opens a fresh one.

use crate::error::{NotFoundError, Result};
use std::fmt::{self, Display, Formatter};

/// One position in the list; `None` is open
pub type Slot = Option<String>;

/// Ordered suspect slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectSlots {
    slots: Vec<Slot>,
}

impl SuspectSlots {
    /// Single open slot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { slots: vec![None] }
    }

    /// Editing layout for an existing suspect list: each suspect, then one
    /// open slot
    #[must_use]
    pub fn from_suspects<I, S>(suspects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut slots: Vec<Slot> = suspects.into_iter().map(|s| Some(s.into())).collect();
        slots.push(None);
        Self { slots }
    }

    /// Fill the first open slot with `name`; returns its index
    ///
    /// A new open slot is appended when the filled one was last.
    pub fn assign_next(&mut self, name: impl Into<String>) -> usize {
        let index = match self.slots.iter().position(Option::is_none) {
            Some(index) => index,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };
        self.fill(index, name.into());
        index
    }

    /// Fill or change the slot at `index`
    ///
    /// # Errors
    /// Returns [`NotFoundError::Slot`] if `index` is out of range.
    pub fn assign(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        self.check(index)?;
        self.fill(index, name.into());
        Ok(())
    }

    fn fill(&mut self, index: usize, name: String) {
        self.slots[index] = Some(name);
        if index == self.slots.len() - 1 {
            self.slots.push(None);
        }
    }

    /// Delete the slot at `index`, shifting later slots up
    ///
    /// An open slot is appended if the list no longer ends in one.
    ///
    /// # Errors
    /// Returns [`NotFoundError::Slot`] if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Slot> {
        self.check(index)?;
        let removed = self.slots.remove(index);
        if self.slots.last() != Some(&None) {
            self.slots.push(None);
        }
        Ok(removed)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(NotFoundError::Slot {
                index,
                len: self.slots.len(),
            }
            .into())
        }
    }

    /// Back to a single open slot
    pub fn reset(&mut self) {
        self.slots.clear();
        self.slots.push(None);
    }

    /// Filled slots, in order
    #[must_use]
    pub fn suspects(&self) -> Vec<String> {
        self.slots.iter().flatten().cloned().collect()
    }

    /// All slots, open ones included
    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Number of slots, open ones included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Never true; there is always at least one slot
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SuspectSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SuspectSlots {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match slot {
                Some(name) => write!(f, "Suspect: {name}")?,
                None => f.write_str("Suspect: [Unassigned]")?,
            }
        }
        Ok(())
    }
}
