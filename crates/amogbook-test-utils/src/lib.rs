//! Testing utilities for AmogBook workspace
//!
//! Shared fixtures: a pinned clock, notebooks built on it, and a few sample
//! cases.

#![allow(missing_docs)]

use amogbook_core::{CaseId, FixedClock, NewCase, Notebook, NotebookConfig};
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;

/// 2024-05-01 at the given local time
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|d| d.and_hms_opt(h, m, s))
        .expect("valid fixture time")
}

/// Clock pinned to 20:00:00
pub fn fixed_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(at(20, 0, 0)))
}

/// Notebook with `config` on its own pinned clock; the clock is returned so
/// tests can move time forward
pub fn notebook_with(config: NotebookConfig) -> (Notebook, Arc<FixedClock>) {
    let clock = fixed_clock();
    let notebook =
        Notebook::with_clock(config, clock.clone()).expect("fixture config is valid");
    (notebook, clock)
}

/// Default-config notebook on a pinned clock
pub fn notebook() -> (Notebook, Arc<FixedClock>) {
    notebook_with(NotebookConfig::new())
}

/// Body in Electrical, two suspects
pub fn electrical() -> NewCase {
    NewCase::new("Electrical")
        .with_victim("Red")
        .with_suspects(["Blue", "Lime"])
        .with_notes("found near wires")
}

/// Body in MedBay, no suspects
pub fn medbay() -> NewCase {
    NewCase::new("MedBay").with_victim("White")
}

/// Record every fixture case, returning ids in creation order
pub fn seed_cases(notebook: &mut Notebook) -> Vec<CaseId> {
    [electrical(), medbay()]
        .into_iter()
        .map(|c| notebook.create_case(c).expect("fixture case is valid"))
        .collect()
}
