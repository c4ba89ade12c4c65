//! Text rendering of notebook state

use amogbook_core::log::LOG_TIME_FORMAT;
use amogbook_core::{CaseRecord, DisplayMode, Draft, Notebook, Palette};

const MINI_TITLE: &str = "AmogBook (mini)";

/// Numbered rows, 1-based; `(none)` when empty
#[must_use]
pub fn numbered(rows: &[String]) -> String {
    if rows.is_empty() {
        return "(none)".to_string();
    }
    rows.iter()
        .enumerate()
        .map(|(i, row)| format!("{:>3}. {row}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plain rows; `(none)` when empty
fn plain(rows: &[String]) -> String {
    if rows.is_empty() {
        "(none)".to_string()
    } else {
        rows.join("\n")
    }
}

/// Draft summary
#[must_use]
pub fn draft(draft: &Draft) -> String {
    format!(
        "Victim: {}\nLocation: {}\n{}\nNotes: {}",
        draft.victim.as_deref().unwrap_or("None"),
        draft.location,
        draft.slots,
        draft.notes
    )
}

/// Full case detail
#[must_use]
pub fn case(record: &CaseRecord) -> String {
    let suspects = if record.suspects().is_empty() {
        "-".to_string()
    } else {
        record.suspects().join(", ")
    };
    format!(
        "{}\nVictim: {}\nLocation: {}\nSuspects: {}\nNotes: {}\nCreated: {}",
        record.id(),
        record.victim().unwrap_or("None"),
        record.location(),
        suspects,
        record.notes(),
        record.timestamp().format(LOG_TIME_FORMAT),
    )
}

/// Palette listing with swatch colors and label tone
#[must_use]
pub fn palette(palette: &Palette) -> String {
    palette
        .entries()
        .iter()
        .map(|entry| match (entry.color, entry.label_tone()) {
            (Some(color), Some(tone)) => {
                format!("{:<8} {color}  label {}", entry.name, tone.hex())
            }
            _ => entry.name.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Mini heads-up view
#[must_use]
pub fn mini(notebook: &Notebook) -> String {
    format!("{MINI_TITLE}\n{}", notebook.mini_view())
}

/// Full editor view with all three tabs
#[must_use]
pub fn full(notebook: &Notebook) -> String {
    format!(
        "AmogBook v{}\n\n[Case]\n{}\n\nCases:\n{}\n\n[Sus]\n{}\n\n[Log]\n{}",
        amogbook_core::VERSION,
        draft(notebook.draft()),
        numbered(&notebook.case_lines()),
        plain(&notebook.board_lines()),
        plain(&notebook.log_lines()),
    )
}

/// View for the current display mode
#[must_use]
pub fn view(notebook: &Notebook) -> String {
    match notebook.mode() {
        DisplayMode::Mini => mini(notebook),
        DisplayMode::Full => full(notebook),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amogbook_core::{NewCase, NotebookConfig, PaletteKind};
    use amogbook_test_utils::notebook;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbered_rows() {
        assert_eq!(numbered(&[]), "(none)");
        assert_eq!(numbered(&["a".into(), "b".into()]), "  1. a\n  2. b");
    }

    #[test]
    fn mini_view_shows_selected_case() {
        let (mut nb, _clock) = notebook();
        assert_eq!(mini(&nb), "AmogBook (mini)\nVictim: None\nLocation: -\nSuspects: -");

        nb.create_case(NewCase::new("Admin").with_victim("Rose")).unwrap();
        assert_eq!(
            mini(&nb),
            "AmogBook (mini)\nVictim: Rose\nLocation: Admin\nSuspects: -\n2024-05-01T20:00:00"
        );
    }

    #[test]
    fn full_view_has_all_tabs() {
        let (mut nb, _clock) = notebook();
        nb.show_full();
        nb.set_suspicion("Red", Some(40.0)).unwrap();
        let text = view(&nb);
        assert!(text.contains("[Case]"));
        assert!(text.contains("Suspect: [Unassigned]"));
        assert!(text.contains("Red: 40.0%"));
        assert!(text.contains("[Log]\n(none)"));
    }

    #[test]
    fn case_detail_uses_log_time_format() {
        let (mut nb, _clock) = notebook();
        let id = nb.create_case(NewCase::new("Admin").with_victim("Rose")).unwrap();
        let text = case(nb.case(&id).unwrap());
        assert!(text.ends_with("Notes: \nCreated: 2024-05-01T20:00:00"));
    }

    #[test]
    fn classic_palette_has_no_swatches() {
        let text = palette(&Palette::new(PaletteKind::Classic));
        assert_eq!(text.lines().count(), 12);
        assert_eq!(text.lines().next(), Some("Red"));
    }

    #[test]
    fn extended_palette_shows_label_tone() {
        let text = palette(&Palette::new(NotebookConfig::new().palette));
        assert!(text.contains("Banana   #fff27f  label #000000"));
        assert!(text.contains("Maroon   #800000  label #ffffff"));
    }
}
