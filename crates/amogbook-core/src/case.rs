//! Case records and their store
//!
//! Provides [`CaseStore`], which owns every [`CaseRecord`] keyed by a
//! generated [`CaseId`]. Callers keep ids, never references into the store.
//!
//! # Identifiers
//! Ids read `"{victim} @ {location} ({HH:MM:SS})"` using the creation time.
//! A second case with the same victim, location and second gets `#1`
//! appended, the next `#2`, and so on.

use crate::clock::Clock;
use crate::error::{NotFoundError, Result, ValidationError};
use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Victim label used in ids when no victim was given
pub const UNKNOWN_VICTIM: &str = "Unknown";

/// Generated case identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    /// Wrap an existing id string (e.g. one read back from a list view)
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn with_suffix(&self, n: u32) -> Self {
        Self(format!("{}#{n}", self.0))
    }
}

impl Display for CaseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CaseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Request to open a new case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCase {
    /// Victim entity
    pub victim: Option<String>,
    /// Where the body was found
    pub location: String,
    /// Suspects, in order; duplicates allowed
    pub suspects: Vec<String>,
    /// Free-text notes
    pub notes: String,
}

impl NewCase {
    /// Case at `location` with no victim, suspects or notes yet
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// With victim
    #[inline]
    #[must_use]
    pub fn with_victim(mut self, victim: impl Into<String>) -> Self {
        self.victim = Some(victim.into());
        self
    }

    /// With suspects
    #[must_use]
    pub fn with_suspects<I, S>(mut self, suspects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suspects = suspects.into_iter().map(Into::into).collect();
        self
    }

    /// With notes
    #[inline]
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Replacement values for the mutable case fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseUpdate {
    /// New location
    pub location: String,
    /// New notes
    pub notes: String,
    /// New suspect list
    pub suspects: Vec<String>,
}

impl CaseUpdate {
    /// Update carrying the current values of `record`
    #[must_use]
    pub fn from_record(record: &CaseRecord) -> Self {
        Self {
            location: record.location.clone(),
            notes: record.notes.clone(),
            suspects: record.suspects.clone(),
        }
    }
}

/// Stored case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    id: CaseId,
    victim: Option<String>,
    location: String,
    suspects: Vec<String>,
    notes: String,
    timestamp: NaiveDateTime,
}

impl CaseRecord {
    /// Case identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// Victim, if one was recorded
    #[inline]
    #[must_use]
    pub fn victim(&self) -> Option<&str> {
        self.victim.as_deref()
    }

    /// Location
    #[inline]
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Suspects, in order
    #[inline]
    #[must_use]
    pub fn suspects(&self) -> &[String] {
        &self.suspects
    }

    /// Notes
    #[inline]
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Creation time
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

/// Insertion-ordered case store
#[derive(Debug, Clone)]
pub struct CaseStore {
    cases: IndexMap<CaseId, CaseRecord>,
    clock: Arc<dyn Clock>,
    require_victim: bool,
}

impl CaseStore {
    /// Create empty store reading time from `clock`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            cases: IndexMap::new(),
            clock,
            require_victim: true,
        }
    }

    /// Allow or forbid cases without a victim
    #[inline]
    #[must_use]
    pub fn with_require_victim(mut self, require: bool) -> Self {
        self.require_victim = require;
        self
    }

    /// Record a new case and return its id
    ///
    /// # Errors
    /// - [`ValidationError::MissingLocation`] if the location is blank
    /// - [`ValidationError::MissingVictim`] if victims are required and none
    ///   (or an empty one) was given
    pub fn create(&mut self, request: NewCase) -> Result<CaseId> {
        let NewCase {
            victim,
            location,
            suspects,
            notes,
        } = request;

        let victim = victim.filter(|v| !v.trim().is_empty());
        if self.require_victim && victim.is_none() {
            return Err(ValidationError::MissingVictim.into());
        }
        if location.trim().is_empty() {
            return Err(ValidationError::MissingLocation.into());
        }

        let timestamp = self.clock.now();
        let id = self.unique_id(victim.as_deref(), &location, timestamp);

        tracing::info!(%id, suspects = suspects.len(), "case created");

        self.cases.insert(
            id.clone(),
            CaseRecord {
                id: id.clone(),
                victim,
                location,
                suspects,
                notes,
                timestamp,
            },
        );

        Ok(id)
    }

    fn unique_id(&self, victim: Option<&str>, location: &str, at: NaiveDateTime) -> CaseId {
        let base = CaseId(format!(
            "{} @ {} ({})",
            victim.unwrap_or(UNKNOWN_VICTIM),
            location,
            at.format("%H:%M:%S")
        ));

        if !self.cases.contains_key(&base) {
            return base;
        }

        let mut n = 1;
        loop {
            let candidate = base.with_suffix(n);
            if !self.cases.contains_key(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Replace location, notes and suspects of an existing case
    ///
    /// # Errors
    /// Returns [`NotFoundError::Case`] if `id` is absent.
    pub fn update(&mut self, id: &CaseId, update: CaseUpdate) -> Result<&CaseRecord> {
        let record = self
            .cases
            .get_mut(id)
            .ok_or_else(|| NotFoundError::Case(id.clone()))?;

        record.location = update.location;
        record.notes = update.notes;
        record.suspects = update.suspects;

        tracing::debug!(%id, "case updated");
        Ok(&*record)
    }

    /// Delete a case, returning its final state
    ///
    /// # Errors
    /// Returns [`NotFoundError::Case`] if `id` is absent.
    pub fn remove(&mut self, id: &CaseId) -> Result<CaseRecord> {
        let record = self
            .cases
            .shift_remove(id)
            .ok_or_else(|| NotFoundError::Case(id.clone()))?;
        tracing::info!(%id, "case removed");
        Ok(record)
    }

    /// Look up a case
    ///
    /// # Errors
    /// Returns [`NotFoundError::Case`] if `id` is absent.
    pub fn get(&self, id: &CaseId) -> Result<&CaseRecord> {
        self.cases
            .get(id)
            .ok_or_else(|| NotFoundError::Case(id.clone()).into())
    }

    /// Look up a case by its position in [`CaseStore::list`]
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&CaseRecord> {
        self.cases.get_index(index).map(|(_, record)| record)
    }

    /// Case ids in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<CaseId> {
        self.cases.keys().cloned().collect()
    }

    /// Records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CaseRecord> {
        self.cases.values()
    }

    /// Check if `id` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &CaseId) -> bool {
        self.cases.contains_key(id)
    }

    /// Number of cases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::NotebookError;
    use chrono::NaiveDate;

    fn clock() -> Arc<FixedClock> {
        let at = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(21, 4, 9)
            .unwrap();
        Arc::new(FixedClock::new(at))
    }

    fn store() -> CaseStore {
        CaseStore::new(clock())
    }

    #[test]
    fn create_then_get_round_trips_fields() {
        let mut s = store();
        let id = s
            .create(
                NewCase::new("Electrical")
                    .with_victim("Red")
                    .with_suspects(["Blue", "Blue", "Lime"])
                    .with_notes("vented?"),
            )
            .unwrap();

        assert_eq!(id.as_str(), "Red @ Electrical (21:04:09)");
        let rec = s.get(&id).unwrap();
        assert_eq!(rec.victim(), Some("Red"));
        assert_eq!(rec.location(), "Electrical");
        assert_eq!(rec.suspects(), ["Blue", "Blue", "Lime"]);
        assert_eq!(rec.notes(), "vented?");
        assert_eq!(rec.id(), &id);
    }

    #[test]
    fn same_second_collisions_get_suffixes() {
        let mut s = store();
        let a = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        let b = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        let c = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();

        assert_ne!(a, b);
        assert_eq!(b.as_str(), format!("{a}#1"));
        assert_eq!(c.as_str(), format!("{a}#2"));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn suffix_skips_taken_slots_after_removal() {
        let mut s = store();
        let a = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        let b = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        s.remove(&a).unwrap();

        let c = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        assert_eq!(c, a);
        let d = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        assert_ne!(d, b);
        assert_eq!(d.as_str(), format!("{a}#2"));
    }

    #[test]
    fn later_second_gets_plain_id() {
        let clock = clock();
        let mut s = CaseStore::new(clock.clone());
        let a = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        clock.advance(1);
        let b = s.create(NewCase::new("Admin").with_victim("Pink")).unwrap();
        assert_eq!(b.as_str(), "Pink @ Admin (21:04:10)");
        assert_ne!(a, b);
    }

    #[test]
    fn blank_location_rejected() {
        let mut s = store();
        for loc in ["", "   "] {
            let err = s.create(NewCase::new(loc).with_victim("Red")).unwrap_err();
            assert_eq!(err, NotebookError::Validation(ValidationError::MissingLocation));
        }
        assert!(s.is_empty());
    }

    #[test]
    fn victim_required_by_default() {
        let mut s = store();
        let err = s.create(NewCase::new("MedBay")).unwrap_err();
        assert_eq!(err, NotebookError::Validation(ValidationError::MissingVictim));

        let err = s.create(NewCase::new("MedBay").with_victim("")).unwrap_err();
        assert_eq!(err, NotebookError::Validation(ValidationError::MissingVictim));
        assert!(s.is_empty());
    }

    #[test]
    fn victim_optional_when_relaxed() {
        let mut s = store().with_require_victim(false);
        let id = s.create(NewCase::new("MedBay")).unwrap();
        assert_eq!(id.as_str(), "Unknown @ MedBay (21:04:09)");
        assert_eq!(s.get(&id).unwrap().victim(), None);
    }

    #[test]
    fn update_replaces_mutable_fields_only() {
        let clock = clock();
        let mut s = CaseStore::new(clock.clone());
        let id = s
            .create(NewCase::new("Reactor").with_victim("Cyan").with_suspects(["Tan"]))
            .unwrap();
        let before = s.get(&id).unwrap().timestamp();
        clock.advance(300);

        let rec = s
            .update(
                &id,
                CaseUpdate {
                    location: "O2".into(),
                    notes: "self report".into(),
                    suspects: vec!["Coral".into()],
                },
            )
            .unwrap();

        assert_eq!(rec.id(), &id);
        assert_eq!(rec.victim(), Some("Cyan"));
        assert_eq!(rec.location(), "O2");
        assert_eq!(rec.notes(), "self report");
        assert_eq!(rec.suspects(), ["Coral"]);
        assert_eq!(rec.timestamp(), before);
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut s = store();
        let err = s
            .update(&CaseId::new("nope"), CaseUpdate::default())
            .unwrap_err();
        assert_eq!(err, NotebookError::NotFound(NotFoundError::Case(CaseId::new("nope"))));
    }

    #[test]
    fn remove_then_get_fails_and_list_drops_id() {
        let mut s = store();
        let a = s.create(NewCase::new("Nav").with_victim("Red")).unwrap();
        let b = s.create(NewCase::new("Shields").with_victim("Blue")).unwrap();

        let removed = s.remove(&a).unwrap();
        assert_eq!(removed.location(), "Nav");
        assert!(s.get(&a).unwrap_err().is_not_found());
        assert_eq!(s.list(), vec![b]);
        assert!(s.remove(&a).unwrap_err().is_not_found());
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut s = store();
        let z = s.create(NewCase::new("Weapons").with_victim("White")).unwrap();
        let a = s.create(NewCase::new("Admin").with_victim("Black")).unwrap();
        assert_eq!(s.list(), vec![z.clone(), a]);
        assert_eq!(s.get_index(0).map(CaseRecord::id), Some(&z));
        assert!(s.get_index(2).is_none());
    }
}
