//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components. It owns
//! the ledger and is the only place lists are mutated. Every mutation follows
//! the same order: persist the list, rebuild its table, refresh the charts.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    draw_home_screen, AlertDialog, EditDialog, EntryFormDialog, HelpDialog, HomeComponent,
    HomeRenderContext, QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::ui::StatusLine;
use crate::model::{resolve_edit, Category, ChartPanel, EditCommit, EditPolicy, EntryId, Ledger};
use crate::services::{export_csv, store, FileStore, KeyValueStore};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use tracing::{debug, error, info, warn};

/// Alert shown when the add form does not validate
pub const VALIDATION_ALERT: &str = "Please fill in all fields correctly!";

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App<S: KeyValueStore = FileStore> {
    pub config: Config,

    /// Durable copy of both lists
    store: S,

    /// In-memory lists, the source of truth for the session
    pub ledger: Ledger,

    pub charts: ChartPanel,

    /// Modal overlay stack
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Message shown under the tables
    pub status: Option<StatusLine>,

    edit_policy: EditPolicy,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub expense_form: EntryFormDialog,
    pub income_form: EntryFormDialog,
    pub edit_dialog: Option<EditDialog>,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub alert_dialog: AlertDialog,
}

impl App<FileStore> {
    /// App backed by the data directory from the config
    pub fn new(config: Config) -> Self {
        let store = FileStore::new(config.data_path());
        Self::with_store(store, config)
    }
}

impl<S: KeyValueStore> App<S> {
    /// Load both lists from `store` and render their tables
    pub fn with_store(store: S, config: Config) -> Self {
        let expenses = store::load(&store, Category::Expenses);
        let income = store::load(&store, Category::Income);
        info!(
            expenses = expenses.len(),
            income = income.len(),
            "loaded ledger"
        );

        let mut app = Self {
            edit_policy: config.edit_policy(),
            config,
            store,
            ledger: Ledger::new(expenses, income),
            charts: ChartPanel::default(),
            modals: ModalStack::new(),
            should_quit: false,
            status: None,
            home: HomeComponent::new(),
            expense_form: EntryFormDialog::new(Category::Expenses),
            income_form: EntryFormDialog::new(Category::Income),
            edit_dialog: None,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            alert_dialog: AlertDialog::default(),
        };

        for category in Category::all() {
            app.rebuild_table(category);
        }
        app
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn form(&self, category: Category) -> &EntryFormDialog {
        match category {
            Category::Expenses => &self.expense_form,
            Category::Income => &self.income_form,
        }
    }

    fn form_mut(&mut self, category: Category) -> &mut EntryFormDialog {
        match category {
            Category::Expenses => &mut self.expense_form,
            Category::Income => &mut self.income_form,
        }
    }

    fn rebuild_table(&mut self, category: Category) {
        let list = self.ledger.list(category);
        self.home
            .table_mut(category)
            .rebuild(list, &self.config.currency_label);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Persist a changed list, then re-render its table and the charts
    fn commit(&mut self, category: Category) {
        let entries = self.ledger.list(category).entries();
        match store::save(&mut self.store, category, entries) {
            Ok(()) => {
                if self.status.as_ref().is_some_and(StatusLine::is_error) {
                    self.status = None;
                }
            }
            Err(err) => {
                error!(category = %category, error = %err, "failed to save list");
                self.status = Some(StatusLine::Error(err.to_string()));
            }
        }

        self.rebuild_table(category);
        self.charts.refresh(&self.ledger);
    }

    fn submit_entry(&mut self, category: Category) {
        match self.form(category).form.validate() {
            Ok(entry) => {
                info!(category = %category, name = %entry.name, amount = entry.amount, "adding entry");
                let id = self.ledger.list_mut(category).push(entry);
                debug!(category = %category, id = %id, "entry appended");
                self.commit(category);

                self.form_mut(category).form.clear();
                if matches!(self.modals.top(), Some(Modal::EntryForm { .. })) {
                    self.modals.pop();
                }
            }
            Err(err) => {
                warn!(category = %category, error = %err, "entry rejected");
                self.alert_dialog.message = VALIDATION_ALERT.to_string();
                self.modals.push(Modal::Alert {
                    message: VALIDATION_ALERT.to_string(),
                });
            }
        }
    }

    fn open_edit(&mut self, category: Category, id: EntryId) {
        let Some(entry) = self.ledger.list(category).get(id) else {
            warn!(category = %category, id = %id, "edit requested for missing entry");
            return;
        };
        self.edit_dialog = Some(EditDialog::new(category, id, entry));
        self.modals.push(Modal::EditEntry { category, id });
    }

    fn apply_edit(&mut self, commit: EditCommit) {
        let category = commit.category;
        let Some(current) = self.ledger.list(category).get(commit.id) else {
            warn!(category = %category, id = %commit.id, "edit for missing entry ignored");
            return;
        };

        match resolve_edit(current, &commit, self.edit_policy) {
            Some(entry) => {
                info!(category = %category, id = %commit.id, name = %entry.name, "updating entry");
                self.ledger.list_mut(category).replace(commit.id, entry);
                self.commit(category);
            }
            None => debug!(category = %category, id = %commit.id, "edit discarded"),
        }
    }

    fn delete_entry(&mut self, category: Category, id: EntryId) {
        match self.ledger.list_mut(category).remove(id) {
            Some(entry) => {
                info!(category = %category, id = %id, name = %entry.name, "deleted entry");
                self.commit(category);
            }
            None => warn!(category = %category, id = %id, "delete for missing entry ignored"),
        }
    }

    fn export(&mut self) {
        let dir = self.config.export_path();
        match export_csv(&self.ledger, &dir, &self.config.export_file_stem) {
            Ok(path) => {
                self.status = Some(StatusLine::Info(format!("Exported to {}", path.display())));
            }
            Err(err) => {
                let message = format!("{:#}", err);
                error!(error = %message, "export failed");
                self.status = Some(StatusLine::Error(format!("Export failed: {}", message)));
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl<S: KeyValueStore> Component for App<S> {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Navigation (delegate to HomeComponent)
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem
            | Action::PrevItem
            | Action::FirstItem
            | Action::LastItem
            | Action::SwitchCategory => return self.home.update(action),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => {
                if let Some(Modal::EditEntry { .. }) = self.modals.pop() {
                    self.edit_dialog = None;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Entry Form
            // ─────────────────────────────────────────────────────────────────
            Action::OpenEntryForm(category) => {
                self.modals.push(Modal::EntryForm { category });
            }
            Action::FormInput(_)
            | Action::FormBackspace
            | Action::FormNextField
            | Action::FormPrevField => {
                if let Some(Modal::EntryForm { category }) = self.modals.top().cloned() {
                    return self.form_mut(category).update(action);
                }
            }
            Action::SubmitEntry(category) => self.submit_entry(category),

            // ─────────────────────────────────────────────────────────────────
            // Row Controls
            // ─────────────────────────────────────────────────────────────────
            Action::EditEntry(category, id) => self.open_edit(category, id),
            Action::CommitEdit(commit) => {
                if matches!(self.modals.top(), Some(Modal::EditEntry { .. })) {
                    self.modals.pop();
                }
                self.edit_dialog = None;
                self.apply_edit(commit);
            }
            Action::DeleteEntry(category, id) => self.delete_entry(category, id),

            // ─────────────────────────────────────────────────────────────────
            // Panels & Export
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleCharts => {
                let visible = self.charts.toggle(&self.ledger);
                let stats = self.charts.stats();
                debug!(
                    visible,
                    live = self.charts.live_instances(),
                    created = stats.created,
                    destroyed = stats.destroyed,
                    "chart panel toggled"
                );
            }
            Action::ExportCsv => self.export(),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            ledger: &self.ledger,
            charts: &self.charts,
            status: self.status.as_ref(),
            currency: &self.config.currency_label,
        };
        draw_home_screen(frame, area, &mut self.home, &ctx)?;

        if self.modals.is_empty() {
            return Ok(());
        }

        // Bottom to top, so an alert stays on top of the form it belongs to
        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in &modals {
            self.draw_modal(frame, area, modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl<S: KeyValueStore> App<S> {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::EntryForm { category } => self.form_mut(*category).handle_key_event(key),
            Modal::EditEntry { .. } => match self.edit_dialog.as_mut() {
                Some(dialog) => dialog.handle_key_event(key),
                None => Ok(Some(Action::CloseModal)),
            },
            Modal::Alert { .. } => self.alert_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::EntryForm { category } => self.form_mut(*category).draw(frame, area)?,
            Modal::EditEntry { .. } => {
                if let Some(dialog) = self.edit_dialog.as_mut() {
                    dialog.draw(frame, area)?;
                }
            }
            Modal::Alert { message } => {
                self.alert_dialog.message = message.clone();
                self.alert_dialog.draw(frame, area)?;
            }
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}
