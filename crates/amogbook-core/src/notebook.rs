//! Notebook façade
//!
//! [`Notebook`] owns the case store, suspicion tracker, log, the case being
//! composed ([`Draft`]), the mirror and the overlay state. Front ends hold one
//! `Notebook` and call into it; there is no global state.
//!
//! Every mutation that touches the mirrored case re-renders the mirror before
//! returning, and removing the mirrored case clears it.

use crate::case::{CaseId, CaseRecord, CaseStore, CaseUpdate, NewCase};
use crate::clock::{Clock, SystemClock};
use crate::config::NotebookConfig;
use crate::error::{Result, ValidationError};
use crate::log::{LogEntry, SessionLog};
use crate::mirror::{MiniView, Mirror};
use crate::overlay::{DisplayMode, Modifier, Overlay};
use crate::palette::Palette;
use crate::slots::{Slot, SuspectSlots};
use crate::suspicion::{RankedEntry, Score, SuspicionTracker};
use std::sync::Arc;

/// Case being composed in the full view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    /// Selected victim
    pub victim: Option<String>,
    /// Location text
    pub location: String,
    /// Notes text
    pub notes: String,
    /// Suspect slots
    pub slots: SuspectSlots,
}

impl Draft {
    fn to_request(&self) -> NewCase {
        NewCase {
            victim: self.victim.clone(),
            location: self.location.clone(),
            suspects: self.slots.suspects(),
            notes: self.notes.clone(),
        }
    }

    /// Clear everything but the victim selection
    fn clear_inputs(&mut self) {
        self.location.clear();
        self.notes.clear();
        self.slots.reset();
    }
}

/// In-memory notebook
#[derive(Debug)]
pub struct Notebook {
    config: NotebookConfig,
    palette: Palette,
    cases: CaseStore,
    suspicion: SuspicionTracker,
    log: SessionLog,
    draft: Draft,
    mirror: Mirror,
    overlay: Overlay,
}

impl Notebook {
    /// Create notebook on the system clock
    ///
    /// # Errors
    /// Returns [`ValidationError::ScoreNotANumber`] if the configured default
    /// score is NaN.
    pub fn new(config: NotebookConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create notebook reading time from `clock`
    ///
    /// # Errors
    /// Returns [`ValidationError::ScoreNotANumber`] if the configured default
    /// score is NaN.
    pub fn with_clock(config: NotebookConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let suspicion = SuspicionTracker::with_default_score(config.default_score)?;
        let cases = CaseStore::new(Arc::clone(&clock)).with_require_victim(config.require_victim);

        tracing::info!(
            palette = ?config.palette,
            require_victim = config.require_victim,
            strict_palette = config.strict_palette,
            "notebook opened"
        );

        Ok(Self {
            palette: Palette::new(config.palette),
            cases,
            suspicion,
            log: SessionLog::new(clock),
            draft: Draft::default(),
            mirror: Mirror::new(),
            overlay: Overlay::new(config.start_mode, config.toggle_key.clone()),
            config,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &NotebookConfig {
        &self.config
    }

    /// Active palette
    #[inline]
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Case store (read-only)
    #[inline]
    #[must_use]
    pub fn cases(&self) -> &CaseStore {
        &self.cases
    }

    /// Suspicion tracker (read-only)
    #[inline]
    #[must_use]
    pub fn suspicion(&self) -> &SuspicionTracker {
        &self.suspicion
    }

    /// Session log (read-only)
    #[inline]
    #[must_use]
    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Case being composed
    #[inline]
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Mirror snapshot
    #[inline]
    #[must_use]
    pub fn mini_view(&self) -> &MiniView {
        self.mirror.view()
    }

    /// Case the mirror is pinned to
    #[inline]
    #[must_use]
    pub fn selected_case(&self) -> Option<&CaseId> {
        self.mirror.pinned()
    }

    /// Current display mode
    #[inline]
    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.overlay.mode()
    }

    fn check_entity(&self, name: &str) -> Result<(), ValidationError> {
        if self.config.strict_palette && !self.palette.contains(name) {
            tracing::warn!(%name, "entity outside palette");
            return Err(ValidationError::UnknownEntity(name.to_string()));
        }
        Ok(())
    }

    fn check_entities<'a>(&self, names: impl IntoIterator<Item = &'a String>) -> Result<()> {
        for name in names {
            self.check_entity(name)?;
        }
        Ok(())
    }

    // ----- draft ---------------------------------------------------------

    /// Select the draft victim
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownEntity`] in strict palette mode.
    pub fn set_victim(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.check_entity(&name)?;
        self.draft.victim = Some(name);
        Ok(())
    }

    /// Set the draft location
    pub fn set_location(&mut self, location: impl Into<String>) {
        self.draft.location = location.into();
    }

    /// Set the draft notes
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.draft.notes = notes.into();
    }

    /// Put `name` into the next open suspect slot; returns the slot index
    ///
    /// # Errors
    /// Returns [`ValidationError::UnknownEntity`] in strict palette mode.
    pub fn assign_suspect(&mut self, name: impl Into<String>) -> Result<usize> {
        let name = name.into();
        self.check_entity(&name)?;
        Ok(self.draft.slots.assign_next(name))
    }

    /// Fill or change the suspect slot at `index`
    ///
    /// # Errors
    /// [`ValidationError::UnknownEntity`] in strict palette mode, or
    /// [`crate::NotFoundError::Slot`] for a bad index.
    pub fn assign_suspect_at(&mut self, index: usize, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        self.check_entity(&name)?;
        self.draft.slots.assign(index, name)
    }

    /// Delete the suspect slot at `index`
    ///
    /// # Errors
    /// Returns [`crate::NotFoundError::Slot`] for a bad index.
    pub fn remove_suspect_slot(&mut self, index: usize) -> Result<Slot> {
        self.draft.slots.remove(index)
    }

    /// Discard the draft entirely
    pub fn clear_draft(&mut self) {
        self.draft = Draft::default();
    }

    // ----- cases ---------------------------------------------------------

    /// Save the draft as a new case
    ///
    /// On success the new case is mirrored and the draft's location, notes and
    /// slots are cleared; the victim selection is kept. On failure the draft
    /// is untouched.
    ///
    /// # Errors
    /// Same as [`Notebook::create_case`].
    pub fn save_case(&mut self) -> Result<CaseId> {
        let id = self.create_case(self.draft.to_request())?;
        self.draft.clear_inputs();
        Ok(id)
    }

    /// Record a case from a typed request and mirror it
    ///
    /// # Errors
    /// - [`ValidationError::MissingLocation`] / [`ValidationError::MissingVictim`]
    /// - [`ValidationError::UnknownEntity`] in strict palette mode
    pub fn create_case(&mut self, request: NewCase) -> Result<CaseId> {
        if let Some(victim) = request.victim.as_deref().filter(|v| !v.trim().is_empty()) {
            self.check_entity(victim)?;
        }
        self.check_entities(&request.suspects)?;

        let id = self.cases.create(request)?;
        self.mirror.pin(id.clone(), &self.cases);
        Ok(id)
    }

    /// Mirror an existing case
    ///
    /// # Errors
    /// Returns [`crate::NotFoundError::Case`] if absent.
    pub fn select_case(&mut self, id: &CaseId) -> Result<&CaseRecord> {
        self.cases.get(id)?;
        self.mirror.pin(id.clone(), &self.cases);
        self.cases.get(id)
    }

    /// Look up a case
    ///
    /// # Errors
    /// Returns [`crate::NotFoundError::Case`] if absent.
    pub fn case(&self, id: &CaseId) -> Result<&CaseRecord> {
        self.cases.get(id)
    }

    /// Suspect slots for editing an existing case
    ///
    /// # Errors
    /// Returns [`crate::NotFoundError::Case`] if absent.
    pub fn edit_slots(&self, id: &CaseId) -> Result<SuspectSlots> {
        let record = self.cases.get(id)?;
        Ok(SuspectSlots::from_suspects(record.suspects().iter().cloned()))
    }

    /// Replace location, notes and suspects of a case
    ///
    /// # Errors
    /// [`crate::NotFoundError::Case`] if absent, or
    /// [`ValidationError::UnknownEntity`] in strict palette mode.
    pub fn update_case(&mut self, id: &CaseId, update: CaseUpdate) -> Result<()> {
        self.check_entities(&update.suspects)?;
        self.cases.update(id, update)?;
        if self.mirror.is_pinned(id) {
            self.mirror.refresh(&self.cases);
        }
        Ok(())
    }

    /// Delete a case; a mirror pinned to it reverts to empty
    ///
    /// # Errors
    /// Returns [`crate::NotFoundError::Case`] if absent.
    pub fn remove_case(&mut self, id: &CaseId) -> Result<CaseRecord> {
        let record = self.cases.remove(id)?;
        if self.mirror.is_pinned(id) {
            self.mirror.clear();
        }
        Ok(record)
    }

    /// Case ids in insertion order
    #[must_use]
    pub fn case_ids(&self) -> Vec<CaseId> {
        self.cases.list()
    }

    // ----- suspicion -----------------------------------------------------

    /// Set a suspicion score; `None` uses the configured default
    ///
    /// # Errors
    /// [`ValidationError::ScoreNotANumber`] for NaN, or
    /// [`ValidationError::UnknownEntity`] in strict palette mode.
    pub fn set_suspicion(&mut self, entity: impl Into<String>, score: Option<f64>) -> Result<Score> {
        let entity = entity.into();
        self.check_entity(&entity)?;
        match score {
            Some(score) => self.suspicion.set(entity, score),
            None => Ok(self.suspicion.set_default(entity)),
        }
    }

    /// Drop a suspicion entry
    ///
    /// # Errors
    /// Returns [`crate::NotFoundError::Suspicion`] if absent.
    pub fn remove_suspicion(&mut self, entity: &str) -> Result<Score> {
        self.suspicion.remove(entity)
    }

    /// Leaderboard, highest score first
    #[must_use]
    pub fn ranked_suspicion(&self) -> Vec<RankedEntry> {
        self.suspicion.ranked_view()
    }

    // ----- log -----------------------------------------------------------

    /// Append a log entry
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyLogEntry`] for empty text.
    pub fn append_log(&mut self, text: impl Into<String>) -> Result<&LogEntry> {
        self.log.append(text)
    }

    // ----- overlay -------------------------------------------------------

    /// Flip between mini and full view
    pub fn toggle_overlay(&mut self) -> DisplayMode {
        self.overlay.toggle()
    }

    /// Switch to the full view
    pub fn show_full(&mut self) {
        self.overlay.show_full();
    }

    /// Feed a key press; returns true if it was the toggle binding
    pub fn handle_key(&mut self, key: &str, held: &[Modifier]) -> bool {
        self.overlay.handle_key(key, held)
    }

    // ----- text renderers ------------------------------------------------

    /// Case list rows
    #[must_use]
    pub fn case_lines(&self) -> Vec<String> {
        self.cases.iter().map(|c| c.id().to_string()).collect()
    }

    /// Suspicion board rows, `Entity: 12.5%`
    #[must_use]
    pub fn board_lines(&self) -> Vec<String> {
        self.ranked_suspicion().iter().map(ToString::to_string).collect()
    }

    /// Log rows, `[timestamp] text`
    #[must_use]
    pub fn log_lines(&self) -> Vec<String> {
        self.log.render().iter().map(ToString::to_string).collect()
    }
}
