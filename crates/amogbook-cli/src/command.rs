//! Shell command parsing
//!
//! One command per line: a verb followed by whitespace-separated arguments.
//! Free-text arguments (location, notes, log text) take the rest of the line
//! verbatim. Case numbers are 1-based rows of the `cases` listing.

use std::str::FromStr;

/// Field of an existing case to edit
#[derive(Debug, Clone, PartialEq)]
pub enum EditField {
    /// New location text
    Location(String),
    /// New notes text
    Notes(String),
    /// New comma-separated suspect list
    Suspects(Vec<String>),
}

/// Parsed shell command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// List commands
    Help,
    /// List palette entries
    Palette,
    /// Select draft victim
    Victim(String),
    /// Set draft location
    Location(String),
    /// Set draft notes
    Notes(String),
    /// Fill next open suspect slot
    Suspect(String),
    /// Fill or change slot (1-based)
    Slot(usize, String),
    /// Delete slot (1-based)
    Unslot(usize),
    /// Show the draft
    Draft,
    /// Save draft as a case
    Save,
    /// Discard the draft
    Clear,
    /// List cases
    Cases,
    /// Mirror case (1-based)
    Select(usize),
    /// Show full case (1-based)
    Show(usize),
    /// Edit a case field (1-based)
    Edit(usize, EditField),
    /// Delete case (1-based)
    Remove(usize),
    /// Set suspicion, default score when omitted
    Sus(String, Option<f64>),
    /// Drop suspicion entry
    Unsus(String),
    /// Show suspicion board
    Board,
    /// Append log entry
    Log(String),
    /// Show log
    History,
    /// Flip mini/full
    Toggle,
    /// Force full view
    Full,
    /// Simulate a key press, e.g. `Ctrl+Tab`
    Key(String),
    /// Render the current view
    View,
    /// Leave the shell
    Quit,
}

/// Command line could not be understood
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Blank line
    #[error("empty command")]
    Empty,

    /// Verb not recognised
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    /// Required argument absent
    #[error("{verb}: missing {what}")]
    MissingArgument {
        /// Command verb
        verb: &'static str,
        /// Argument description
        what: &'static str,
    },

    /// Argument was not a number in range
    #[error("{verb}: expected {what}, got {got:?}")]
    BadNumber {
        /// Command verb
        verb: &'static str,
        /// Argument description
        what: &'static str,
        /// Offending text
        got: String,
    },
}

/// Usage summary printed by `help`
pub const HELP: &str = "\
case draft:  victim NAME | location TEXT | notes TEXT | suspect NAME
             slot N NAME | unslot N | draft | save | clear
cases:       cases | select N | show N | remove N
             edit N location TEXT | edit N notes TEXT | edit N suspects A,B,...
suspicion:   sus NAME [SCORE] | unsus NAME | board
log:         log TEXT | history
view:        view | toggle | full | key COMBO
other:       palette | help | quit";

fn split_verb(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    }
}

fn required<'a>(verb: &'static str, what: &'static str, text: &'a str) -> Result<&'a str, ParseError> {
    if text.is_empty() {
        Err(ParseError::MissingArgument { verb, what })
    } else {
        Ok(text)
    }
}

fn row(verb: &'static str, text: &str) -> Result<usize, ParseError> {
    let text = required(verb, "case or slot number", text)?;
    match text.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::BadNumber {
            verb,
            what: "a number from 1",
            got: text.to_string(),
        }),
    }
}

fn parse_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (verb, rest) = split_verb(line);
        let cmd = match verb.to_ascii_lowercase().as_str() {
            "" => return Err(ParseError::Empty),
            "help" | "?" => Self::Help,
            "palette" => Self::Palette,
            "victim" => Self::Victim(required("victim", "name", rest)?.to_string()),
            "location" => Self::Location(required("location", "text", rest)?.to_string()),
            "notes" => Self::Notes(rest.to_string()),
            "suspect" => Self::Suspect(required("suspect", "name", rest)?.to_string()),
            "slot" => {
                let (n, name) = split_verb(rest);
                Self::Slot(row("slot", n)?, required("slot", "name", name)?.to_string())
            }
            "unslot" => Self::Unslot(row("unslot", rest)?),
            "draft" => Self::Draft,
            "save" => Self::Save,
            "clear" => Self::Clear,
            "cases" => Self::Cases,
            "select" => Self::Select(row("select", rest)?),
            "show" => Self::Show(row("show", rest)?),
            "remove" => Self::Remove(row("remove", rest)?),
            "edit" => {
                let (n, rest) = split_verb(rest);
                let n = row("edit", n)?;
                let (field, value) = split_verb(rest);
                let field = match field.to_ascii_lowercase().as_str() {
                    "location" => {
                        EditField::Location(required("edit", "location text", value)?.to_string())
                    }
                    "notes" => EditField::Notes(value.to_string()),
                    "suspects" => EditField::Suspects(parse_list(value)),
                    _ => {
                        return Err(ParseError::MissingArgument {
                            verb: "edit",
                            what: "field (location, notes or suspects)",
                        })
                    }
                };
                Self::Edit(n, field)
            }
            "sus" => {
                let (name, score) = split_verb(rest);
                let name = required("sus", "name", name)?.to_string();
                let score = if score.is_empty() {
                    None
                } else {
                    let parsed = score.trim_end_matches('%').parse::<f64>().map_err(|_| {
                        ParseError::BadNumber {
                            verb: "sus",
                            what: "a score",
                            got: score.to_string(),
                        }
                    })?;
                    Some(parsed)
                };
                Self::Sus(name, score)
            }
            "unsus" => Self::Unsus(required("unsus", "name", rest)?.to_string()),
            "board" => Self::Board,
            "log" => Self::Log(rest.to_string()),
            "history" => Self::History,
            "toggle" => Self::Toggle,
            "full" => Self::Full,
            "key" => Self::Key(required("key", "key combination", rest)?.to_string()),
            "view" => Self::View,
            "quit" | "exit" => Self::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn free_text_keeps_inner_spacing() {
        assert_eq!(
            parse("location   Upper  Engine ").unwrap(),
            Command::Location("Upper  Engine".into())
        );
        assert_eq!(parse("log Red  vented").unwrap(), Command::Log("Red  vented".into()));
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse("SAVE").unwrap(), Command::Save);
        assert_eq!(parse("Quit").unwrap(), Command::Quit);
    }

    #[test]
    fn empty_log_text_reaches_the_notebook() {
        assert_eq!(parse("log").unwrap(), Command::Log(String::new()));
    }

    #[test]
    fn sus_score_is_optional() {
        assert_eq!(parse("sus Red").unwrap(), Command::Sus("Red".into(), None));
        assert_eq!(parse("sus Red 72.5").unwrap(), Command::Sus("Red".into(), Some(72.5)));
        assert_eq!(parse("sus Red 80%").unwrap(), Command::Sus("Red".into(), Some(80.0)));
        assert!(matches!(parse("sus Red lots"), Err(ParseError::BadNumber { .. })));
    }

    #[test]
    fn rows_are_one_based() {
        assert_eq!(parse("select 1").unwrap(), Command::Select(1));
        assert!(matches!(parse("select 0"), Err(ParseError::BadNumber { .. })));
        assert!(matches!(parse("remove"), Err(ParseError::MissingArgument { .. })));
    }

    #[test]
    fn edit_fields() {
        assert_eq!(
            parse("edit 2 suspects Red, Blue,,Red").unwrap(),
            Command::Edit(2, EditField::Suspects(vec!["Red".into(), "Blue".into(), "Red".into()]))
        );
        assert_eq!(
            parse("edit 1 suspects").unwrap(),
            Command::Edit(1, EditField::Suspects(vec![]))
        );
        assert_eq!(
            parse("edit 1 notes").unwrap(),
            Command::Edit(1, EditField::Notes(String::new()))
        );
        assert!(parse("edit 1 victim Red").is_err());
    }

    #[test]
    fn slot_takes_number_and_name() {
        assert_eq!(parse("slot 2 Lime").unwrap(), Command::Slot(2, "Lime".into()));
        assert!(parse("slot 2").is_err());
    }

    #[test]
    fn unknown_and_empty() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("vent"), Err(ParseError::Unknown("vent".into())));
    }
}
