//! AmogBook Core
//!
//! Headless notebook for social-deduction sessions.
//!
//! # Overview
//!
//! - **CaseStore**: cases (victim, location, suspects, notes) keyed by a
//!   generated id
//! - **SuspicionTracker**: per-entity score in `[0, 100]` with a ranked view
//! - **SessionLog**: append-only timestamped notes
//! - **SuspectSlots**: the growing suspect list used while composing a case
//! - **Mirror** / **Overlay**: compact view of the selected case and the
//!   mini/full toggle
//! - **Notebook**: façade that keeps all of the above consistent
//!
//! # Example
//!
//! ```rust
//! use amogbook_core::{NewCase, Notebook, NotebookConfig};
//!
//! let mut notebook = Notebook::new(NotebookConfig::new()).unwrap();
//!
//! let id = notebook
//!     .create_case(NewCase::new("Electrical").with_victim("Red").with_suspects(["Blue"]))
//!     .unwrap();
//! assert_eq!(notebook.case(&id).unwrap().suspects(), ["Blue"]);
//!
//! notebook.set_suspicion("Blue", Some(85.0)).unwrap();
//! assert_eq!(notebook.board_lines(), vec!["Blue: 85.0%"]);
//! ```

#![warn(missing_docs)]

pub mod case;
pub mod clock;
pub mod config;
pub mod contrast;
pub mod error;
pub mod log;
pub mod mirror;
pub mod notebook;
pub mod overlay;
pub mod palette;
pub mod slots;
pub mod suspicion;

// Re-exports
pub use case::{CaseId, CaseRecord, CaseStore, CaseUpdate, NewCase};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NotebookConfig;
pub use contrast::{text_tone_for, Rgb, TextTone};
pub use error::{NotFoundError, NotebookError, Result, ValidationError};
pub use log::{LogEntry, SessionLog};
pub use mirror::{MiniView, Mirror};
pub use notebook::{Draft, Notebook};
pub use overlay::{DisplayMode, KeyBinding, Modifier, Overlay};
pub use palette::{Palette, PaletteEntry, PaletteKind};
pub use slots::{Slot, SuspectSlots};
pub use suspicion::{RankedEntry, Score, SuspicionTracker};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a notebook
    pub use crate::{
        CaseId, CaseUpdate, DisplayMode, NewCase, Notebook, NotebookConfig, NotebookError,
        PaletteKind,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
