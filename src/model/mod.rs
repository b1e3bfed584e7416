//! Model layer - ledger state and the messages that change it
//!
//! - `Ledger` / `EntryList` - the two entry lists with stable ids
//! - `EntryForm` / `EditCommit` - input collected before a mutation
//! - `ChartPanel` - chart instances and their lifecycle
//! - `ModalStack` - dialog overlay management

pub mod chart;
pub mod edit;
pub mod entry;
pub mod form;
pub mod ledger;
pub mod modal;
pub mod ui;

pub use chart::{ChartInstance, ChartPanel, Rgb};
pub use edit::{resolve_edit, EditCommit, EditPolicy};
pub use entry::{Category, Entry, EntryId};
pub use form::{EntryForm, FormField};
pub use ledger::{EntryList, Ledger};
