//! End-to-end notebook scenarios.
//!
//! Each test drives a [`Notebook`] the way a front end would: compose a draft,
//! save, select, edit, remove, and check that the mirror and the stores agree
//! after every step.

use amogbook_core::{
    CaseId, CaseUpdate, DisplayMode, Modifier, NewCase, NotebookConfig, NotebookError,
    PaletteKind, ValidationError,
};
use amogbook_test_utils::{electrical, medbay, notebook, notebook_with, seed_cases};
use pretty_assertions::assert_eq;

/// A created case reads back exactly, and its id names victim and location.
#[test]
fn create_then_get_returns_supplied_fields() {
    let (mut nb, _clock) = notebook();
    let id = nb.create_case(electrical()).unwrap();
    let rec = nb.case(&id).unwrap();

    assert_eq!(rec.victim(), Some("Red"));
    assert_eq!(rec.location(), "Electrical");
    assert_eq!(rec.suspects(), ["Blue", "Lime"]);
    assert_eq!(rec.notes(), "found near wires");
    assert!(id.as_str().contains("Red"));
    assert!(id.as_str().contains("Electrical"));
}

/// Two saves in the same second with the same victim and location stay
/// distinct; the later one carries the suffix.
#[test]
fn same_second_saves_are_disambiguated() {
    let (mut nb, _clock) = notebook();
    let first = nb.create_case(medbay()).unwrap();
    let second = nb.create_case(medbay()).unwrap();

    assert_eq!(first.as_str(), "White @ MedBay (20:00:00)");
    assert_eq!(second.as_str(), "White @ MedBay (20:00:00)#1");
    assert_eq!(nb.case_ids(), vec![first, second]);
}

/// Time moving on removes the collision.
#[test]
fn next_second_needs_no_suffix() {
    let (mut nb, clock) = notebook();
    nb.create_case(medbay()).unwrap();
    clock.advance(1);
    let later = nb.create_case(medbay()).unwrap();
    assert_eq!(later.as_str(), "White @ MedBay (20:00:01)");
}

/// Updates never move id, victim or timestamp.
#[test]
fn update_preserves_identity() {
    let (mut nb, clock) = notebook();
    let id = nb.create_case(electrical()).unwrap();
    let created = nb.case(&id).unwrap().timestamp();
    clock.advance(120);

    nb.update_case(
        &id,
        CaseUpdate {
            location: "Lower Engine".into(),
            notes: "moved body?".into(),
            suspects: vec![],
        },
    )
    .unwrap();

    let rec = nb.case(&id).unwrap();
    assert_eq!(rec.id(), &id);
    assert_eq!(rec.victim(), Some("Red"));
    assert_eq!(rec.timestamp(), created);
    assert_eq!(rec.location(), "Lower Engine");
    assert_eq!(rec.notes(), "moved body?");
    assert!(rec.suspects().is_empty());
}

/// Removal is final: lookups fail and the list forgets the id.
#[test]
fn remove_then_get_is_not_found() {
    let (mut nb, _clock) = notebook();
    let ids = seed_cases(&mut nb);

    nb.remove_case(&ids[0]).unwrap();

    assert!(matches!(
        nb.case(&ids[0]),
        Err(NotebookError::NotFound(_))
    ));
    assert_eq!(nb.case_ids(), vec![ids[1].clone()]);
    assert!(nb.remove_case(&ids[0]).unwrap_err().is_not_found());
}

/// The mirror follows the selected case through edits and falls back to the
/// empty view when that case is deleted.
#[test]
fn mirror_stays_consistent() {
    let (mut nb, _clock) = notebook();
    let ids = seed_cases(&mut nb);
    assert_eq!(nb.selected_case(), Some(&ids[1]));

    nb.select_case(&ids[0]).unwrap();
    assert_eq!(nb.mini_view().suspects, "Suspects: Blue, Lime");

    let mut slots = nb.edit_slots(&ids[0]).unwrap();
    slots.remove(0).unwrap();
    let mut update = CaseUpdate::from_record(nb.case(&ids[0]).unwrap());
    update.suspects = slots.suspects();
    nb.update_case(&ids[0], update).unwrap();
    assert_eq!(nb.mini_view().suspects, "Suspects: Lime");

    nb.remove_case(&ids[0]).unwrap();
    assert!(nb.selected_case().is_none());
    assert!(nb.mini_view().is_empty());
}

/// Composing through slots: three picks give four slots; dropping the second
/// keeps order and the open tail; only filled slots are saved.
#[test]
fn slot_composition_feeds_saved_suspects() {
    let (mut nb, _clock) = notebook();
    nb.set_victim("Pink").unwrap();
    nb.set_location("Admin");
    for name in ["Red", "Blue", "Green"] {
        nb.assign_suspect(name).unwrap();
    }
    assert_eq!(nb.draft().slots.len(), 4);

    nb.remove_suspect_slot(1).unwrap();
    let shape: Vec<_> = nb.draft().slots.slots().iter().map(Option::as_deref).collect();
    assert_eq!(shape, vec![Some("Red"), Some("Green"), None]);

    let id = nb.save_case().unwrap();
    assert_eq!(nb.case(&id).unwrap().suspects(), ["Red", "Green"]);
}

/// Scores above and below the range are clamped and never observed outside
/// it.
#[test]
fn suspicion_scores_are_clamped() {
    let (mut nb, _clock) = notebook();
    nb.set_suspicion("Red", Some(150.0)).unwrap();
    nb.set_suspicion("Blue", Some(-5.0)).unwrap();

    let board = nb.ranked_suspicion();
    assert_eq!(board[0].entity, "Red");
    assert_eq!(board[0].score.value(), 100.0);
    assert_eq!(board[1].score.value(), 0.0);
}

/// Leaderboard ties keep first-set order.
#[test]
fn ranked_view_orders_ties_by_insertion() {
    let (mut nb, _clock) = notebook();
    nb.set_suspicion("A", Some(30.0)).unwrap();
    nb.set_suspicion("B", Some(90.0)).unwrap();
    nb.set_suspicion("C", Some(90.0)).unwrap();

    assert_eq!(nb.board_lines(), vec!["B: 90.0%", "C: 90.0%", "A: 30.0%"]);
}

/// Empty log text is refused and leaves the log as it was.
#[test]
fn empty_log_entry_rejected() {
    let (mut nb, _clock) = notebook();
    nb.append_log("Red skipped vote").unwrap();

    let err = nb.append_log("").unwrap_err();
    assert_eq!(err, NotebookError::Validation(ValidationError::EmptyLogEntry));
    assert_eq!(nb.log().render().len(), 1);
}

/// The toggle key flips views and nothing else.
#[test]
fn toggle_key_switches_views_only() {
    let (mut nb, _clock) = notebook_with(
        NotebookConfig::new().with_toggle_key("Alt+F2".parse().unwrap()),
    );
    let id = nb.create_case(medbay()).unwrap();

    assert!(!nb.handle_key("Tab", &[Modifier::Ctrl]));
    assert!(nb.handle_key("F2", &[Modifier::Alt, Modifier::Shift]));
    assert_eq!(nb.mode(), DisplayMode::Full);
    assert_eq!(nb.case_ids(), vec![id.clone()]);
    assert_eq!(nb.selected_case(), Some(&id));
}

/// The classic setup saves victimless cases and offers the short palette.
#[test]
fn classic_configuration() {
    let (mut nb, _clock) = notebook_with(NotebookConfig::classic());
    assert_eq!(nb.palette().kind(), PaletteKind::Classic);
    assert_eq!(nb.palette().len(), 12);

    let id = nb.create_case(NewCase::new("Reactor")).unwrap();
    assert_eq!(id, CaseId::new("Unknown @ Reactor (20:00:00)"));
}

/// Config tables deserialize with defaults filled in.
#[test]
fn config_from_toml() {
    let config: NotebookConfig = toml::from_str(
        r#"
        palette = "classic"
        strict_palette = true
        toggle_key = "Ctrl+Shift+N"
        "#,
    )
    .unwrap();

    assert_eq!(config.palette, PaletteKind::Classic);
    assert!(config.strict_palette);
    assert!(config.require_victim);
    assert_eq!(config.toggle_key.to_string(), "Ctrl+Shift+N");
    assert_eq!(config.start_mode, DisplayMode::Mini);

    assert!(toml::from_str::<NotebookConfig>("toggle_key = \"Ctrl+\"").is_err());
    assert!(toml::from_str::<NotebookConfig>("colour = \"red\"").is_err());
}

/// Records serialize for machine-readable listings.
#[test]
fn case_record_serializes() {
    let (mut nb, _clock) = notebook();
    let id = nb.create_case(medbay()).unwrap();
    let json = serde_json::to_value(nb.case(&id).unwrap()).unwrap();

    assert_eq!(json["id"], "White @ MedBay (20:00:00)");
    assert_eq!(json["victim"], "White");
    assert_eq!(json["suspects"], serde_json::json!([]));
    assert_eq!(json["timestamp"], "2024-05-01T20:00:00");
}
