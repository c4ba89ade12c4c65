//! AmogBook terminal front end
//!
//! A line-oriented shell standing in for the overlay GUI: it drives a
//! [`amogbook_core::Notebook`] from text commands and renders the mini or full
//! view as plain text.

#![warn(unreachable_pub)]

pub mod command;
pub mod render;
pub mod settings;
pub mod shell;

pub use command::{Command, EditField, ParseError};
pub use settings::{load as load_settings, SettingsError};
pub use shell::{Flow, Shell, ShellError};
