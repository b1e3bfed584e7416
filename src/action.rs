//! Action enum - All possible application actions
//!
//! Components turn key events into Actions; the App applies them.

use crate::model::{Category, EditCommit, EntryId};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick while idle
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move to next row in the focused table
    NextItem,
    /// Move to previous row in the focused table
    PrevItem,
    /// Jump to first row
    FirstItem,
    /// Jump to last row
    LastItem,
    /// Move focus to the other category
    SwitchCategory,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Close the top modal
    CloseModal,

    // ─────────────────────────────────────────────────────────────────────────
    // Entry Form
    // ─────────────────────────────────────────────────────────────────────────
    /// Open the add-entry form for a category
    OpenEntryForm(Category),
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPrevField,
    /// Validate the form and append its entry
    SubmitEntry(Category),

    // ─────────────────────────────────────────────────────────────────────────
    // Row Controls
    // ─────────────────────────────────────────────────────────────────────────
    /// Start editing an entry
    EditEntry(Category, EntryId),
    /// Apply values collected by the edit dialog
    CommitEdit(EditCommit),
    /// Remove an entry
    DeleteEntry(Category, EntryId),

    // ─────────────────────────────────────────────────────────────────────────
    // Panels & Export
    // ─────────────────────────────────────────────────────────────────────────
    /// Show or hide the chart panel
    ToggleCharts,
    /// Write both lists to the CSV export file
    ExportCsv,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::SwitchCategory => write!(f, "SwitchCategory"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::OpenEntryForm(category) => write!(f, "OpenEntryForm({})", category),
            Action::FormInput(c) => write!(f, "FormInput('{}')", c),
            Action::FormBackspace => write!(f, "FormBackspace"),
            Action::FormNextField => write!(f, "FormNextField"),
            Action::FormPrevField => write!(f, "FormPrevField"),
            Action::SubmitEntry(category) => write!(f, "SubmitEntry({})", category),
            Action::EditEntry(category, id) => write!(f, "EditEntry({}, {})", category, id),
            Action::CommitEdit(commit) => {
                write!(f, "CommitEdit({}, {})", commit.category, commit.id)
            }
            Action::DeleteEntry(category, id) => write!(f, "DeleteEntry({}, {})", category, id),
            Action::ToggleCharts => write!(f, "ToggleCharts"),
            Action::ExportCsv => write!(f, "ExportCsv"),
        }
    }
}
