//! Entry table component
//!
//! Rows are regenerated from the list after every mutation. Each row carries
//! its edit/delete controls as ready-made Actions bound to the entry id.

use crate::action::Action;
use crate::component::Component;
use crate::model::entry::two_decimals;
use crate::model::{Category, EntryId, EntryList};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Cut `text` to at most `max` display columns, ending with `…` when cut
pub fn truncate_to_width(text: &str, max: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Amount with the currency label and two decimals
pub fn format_money(currency: &str, amount: f64) -> String {
    format!("{} {}", currency, two_decimals(amount))
}

/// Edit and delete controls of one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowControls {
    pub edit: Action,
    pub delete: Action,
}

impl RowControls {
    pub fn new(category: Category, id: EntryId) -> Self {
        Self {
            edit: Action::EditEntry(category, id),
            delete: Action::DeleteEntry(category, id),
        }
    }
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: EntryId,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub controls: RowControls,
}

/// Table of one category's entries
pub struct EntryTable {
    pub category: Category,
    rows: Vec<TableRow>,
    total: String,
    state: TableState,
    renders: usize,
    pub focused: bool,
}

impl EntryTable {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            rows: Vec::new(),
            total: String::new(),
            state: TableState::default(),
            renders: 0,
            focused: false,
        }
    }

    /// Replace every row with a fresh rendering of `list`
    pub fn rebuild(&mut self, list: &EntryList, currency: &str) {
        self.rows.clear();
        for (id, entry) in list.iter() {
            self.rows.push(TableRow {
                id,
                name: entry.name.clone(),
                amount: format_money(currency, entry.amount),
                date: entry.date.clone(),
                controls: RowControls::new(self.category, id),
            });
        }
        self.total = format_money(currency, list.total());
        self.renders += 1;

        let selected = match (self.state.selected(), self.rows.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(i), len) => Some(i.min(len - 1)),
        };
        self.state.select(selected);
        tracing::trace!(
            category = ?self.category,
            rows = self.rows.len(),
            renders = self.renders,
            "table rebuilt"
        );
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Number of times the rows were regenerated
    #[cfg(test)]
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn selected_row(&self) -> Option<&TableRow> {
        self.state.selected().and_then(|i| self.rows.get(i))
    }

    pub fn selected_controls(&self) -> Option<&RowControls> {
        self.selected_row().map(|row| &row.controls)
    }

    pub fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            _ => 0,
        };
        self.state.select(Some(next));
    }

    pub fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let prev = match self.state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(self.rows.len() - 1));
        }
    }
}

impl Component for EntryTable {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('e') | KeyCode::Enter => {
                self.selected_controls().map(|controls| controls.edit.clone())
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.selected_controls().map(|controls| controls.delete.clone())
            }
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextItem => self.next(),
            Action::PrevItem => self.previous(),
            Action::FirstItem => self.select_first(),
            Action::LastItem => self.select_last(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let border_color = if self.focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let title_color = match self.category {
            Category::Expenses => Color::Red,
            Category::Income => Color::Green,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", self.category.title()),
                    Style::default().fg(title_color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("({}) ", self.rows.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .title_bottom(Line::from(Span::styled(
                format!(" Total: {} ", self.total),
                Style::default().fg(Color::Yellow),
            )));

        if self.rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No entries yet. Press 'a' to add one.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return Ok(());
        }

        let name_width = (area.width as usize).saturating_sub(42).max(8);
        let header = Row::new(vec!["Name", "Amount", "Date", ""]).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(truncate_to_width(&row.name, name_width)),
                    Cell::from(row.amount.clone()),
                    Cell::from(row.date.clone()),
                    Cell::from(Span::styled(
                        "[e]dit [d]el",
                        Style::default().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(8),
                Constraint::Length(14),
                Constraint::Length(10),
                Constraint::Length(12),
            ],
        )
        .header(header)
        .block(block)
        .highlight_style(if self.focused {
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        })
        .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn list() -> EntryList {
        EntryList::from_entries(vec![
            Entry::new("Aluguel", 1200.5, "2024-01-05"),
            Entry::new("Mercado", 300.0, "2024-01-06"),
        ])
    }

    #[test]
    fn test_rebuild_formats_rows() {
        let mut table = EntryTable::new(Category::Expenses);
        table.rebuild(&list(), "R$");

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].name, "Aluguel");
        assert_eq!(table.rows()[0].amount, "R$ 1200.50");
        assert_eq!(table.rows()[1].date, "2024-01-06");
        assert_eq!(table.render_count(), 1);
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_controls_are_bound_to_entry_ids() {
        let list = list();
        let mut table = EntryTable::new(Category::Income);
        table.rebuild(&list, "R$");

        let second = list.id_at(1).unwrap();
        assert_eq!(
            table.rows()[1].controls,
            RowControls {
                edit: Action::EditEntry(Category::Income, second),
                delete: Action::DeleteEntry(Category::Income, second),
            }
        );
    }

    #[test]
    fn test_half_cent_amounts_round_up() {
        let mut table = EntryTable::new(Category::Income);
        table.rebuild(
            &EntryList::from_entries(vec![Entry::new("Juros", 1200.125, "2024-02-01")]),
            "R$",
        );
        assert_eq!(table.rows()[0].amount, "R$ 1200.13");
        assert_eq!(format_money("R$", -0.125), "R$ -0.13");
    }

    #[test]
    fn test_empty_list_renders_no_rows() {
        let mut table = EntryTable::new(Category::Expenses);
        table.rebuild(&EntryList::new(), "R$");
        assert!(table.rows().is_empty());
        assert_eq!(table.selected(), None);
        assert!(table.selected_controls().is_none());
    }

    #[test]
    fn test_selection_is_clamped_after_shrinking() {
        let mut list = list();
        let mut table = EntryTable::new(Category::Expenses);
        table.rebuild(&list, "R$");
        table.select_last();

        let last = list.id_at(1).unwrap();
        list.remove(last);
        table.rebuild(&list, "R$");

        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut table = EntryTable::new(Category::Expenses);
        table.rebuild(&list(), "R$");

        table.previous();
        assert_eq!(table.selected(), Some(1));
        table.next();
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_keys_trigger_selected_row_controls() {
        let list = list();
        let mut table = EntryTable::new(Category::Expenses);
        table.rebuild(&list, "R$");
        table.next();

        let id = list.id_at(1).unwrap();
        let delete = table
            .handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(delete, Some(Action::DeleteEntry(Category::Expenses, id)));

        let edit = table
            .handle_key_event(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(edit, Some(Action::EditEntry(Category::Expenses, id)));
    }

    #[test]
    fn test_draw_shows_formatted_amount() {
        let mut table = EntryTable::new(Category::Expenses);
        table.rebuild(&list(), "R$");

        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal
            .draw(|frame| {
                table.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("R$ 1200.50"));
        assert!(content.contains("Aluguel"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Aluguel", 10), "Aluguel");
        assert_eq!(truncate_to_width("Supermercado", 6), "Super…");
    }
}
