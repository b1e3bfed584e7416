//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod alert_dialog;
pub mod charts;
pub mod edit_dialog;
pub mod entry_form;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod quit_dialog;
pub mod table;

pub use alert_dialog::AlertDialog;
pub use edit_dialog::EditDialog;
pub use entry_form::EntryFormDialog;
pub use help_dialog::HelpDialog;
pub use home::{draw_home_screen, HomeComponent, HomeRenderContext};
pub use layout::{calculate_main_layout, centered_popup};
pub use quit_dialog::QuitDialog;
