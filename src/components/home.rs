//! Home component - Main application screen
//!
//! Displays the totals summary, both entry tables, the chart panel and the
//! status/help bars. Owns table selection and category focus.

use crate::action::Action;
use crate::component::Component;
use crate::components::calculate_main_layout;
use crate::components::charts::draw_chart_panel;
use crate::components::table::{format_money, EntryTable};
use crate::model::ui::{Focus, StatusLine};
use crate::model::{Category, ChartPanel, Ledger};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Home component for the main ledger view
pub struct HomeComponent {
    pub expenses: EntryTable,
    pub income: EntryTable,
    pub focus: Focus,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        let mut home = Self {
            expenses: EntryTable::new(Category::Expenses),
            income: EntryTable::new(Category::Income),
            focus: Focus::default(),
        };
        home.sync_focus();
        home
    }

    pub fn table(&self, category: Category) -> &EntryTable {
        match category {
            Category::Expenses => &self.expenses,
            Category::Income => &self.income,
        }
    }

    pub fn table_mut(&mut self, category: Category) -> &mut EntryTable {
        match category {
            Category::Expenses => &mut self.expenses,
            Category::Income => &mut self.income,
        }
    }

    pub fn focused_table_mut(&mut self) -> &mut EntryTable {
        self.table_mut(self.focus.category())
    }

    pub fn switch_category(&mut self) {
        self.focus.switch();
        self.sync_focus();
    }

    fn sync_focus(&mut self) {
        let focused = self.focus.category();
        self.expenses.focused = focused == Category::Expenses;
        self.income.focused = focused == Category::Income;
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            // Navigation
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchCategory),

            // Entries
            KeyCode::Char('a') => Some(Action::OpenEntryForm(self.focus.category())),

            // Panels & export
            KeyCode::Char('c') => Some(Action::ToggleCharts),
            KeyCode::Char('s') => Some(Action::ExportCsv),

            // Modals
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            // Row controls (e / d) belong to the focused table
            _ => return self.focused_table_mut().handle_key_event(key),
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SwitchCategory => self.switch_category(),
            Action::NextItem | Action::PrevItem | Action::FirstItem | Action::LastItem => {
                return self.focused_table_mut().update(action);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing is done through draw_home_screen which takes the ledger context
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

pub struct HomeRenderContext<'a> {
    pub ledger: &'a Ledger,
    pub charts: &'a ChartPanel,
    pub status: Option<&'a StatusLine>,
    pub currency: &'a str,
}

/// Draw the home screen
pub fn draw_home_screen(
    frame: &mut Frame,
    area: Rect,
    home: &mut HomeComponent,
    ctx: &HomeRenderContext,
) -> Result<()> {
    let layout = calculate_main_layout(area, ctx.charts.visible);

    render_summary(frame, layout.summary, ctx);
    home.expenses.draw(frame, layout.expenses)?;
    home.income.draw(frame, layout.income)?;

    if let Some(charts_area) = layout.charts {
        draw_chart_panel(frame, charts_area, ctx.charts, ctx.currency);
    }

    render_status_bar(frame, layout.status, home, ctx);
    render_help_bar(frame, layout.help, ctx.charts.visible);
    Ok(())
}

fn render_summary(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let balance = ctx.ledger.balance();
    let balance_color = if balance < 0.0 { Color::Red } else { Color::Green };

    let spans = vec![
        Span::styled(
            " Expenses ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {}   ",
            format_money(ctx.currency, ctx.ledger.expenses.total())
        )),
        Span::styled(
            " Income ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " {}   ",
            format_money(ctx.currency, ctx.ledger.income.total())
        )),
        Span::styled(
            " Balance ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", format_money(ctx.currency, balance)),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" finance-tui ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );
    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    home: &HomeComponent,
    ctx: &HomeRenderContext,
) {
    let line = match ctx.status {
        Some(status) if status.is_error() => Line::from(Span::styled(
            format!(" Error: {} ", status.text()),
            Style::default().fg(Color::Red),
        )),
        Some(status) => Line::from(Span::styled(
            format!(" {} ", status.text()),
            Style::default().fg(Color::Yellow),
        )),
        None => {
            let table = home.table(home.focus.category());
            let mut spans = vec![Span::styled(
                format!(" {} ", table.category.title()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )];
            if let (Some(index), Some(row)) = (table.selected(), table.selected_row()) {
                spans.push(Span::styled(
                    format!(" {}/{} ", index + 1, table.rows().len()),
                    Style::default().fg(Color::DarkGray),
                ));
                spans.push(Span::styled(
                    row.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_bar(frame: &mut Frame, area: Rect, charts_visible: bool) {
    let key_style = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let charts_label = if charts_visible {
        "Hide charts "
    } else {
        "Charts "
    };

    let help_spans = vec![
        Span::styled(" q ", key_style(Color::Yellow)),
        Span::raw("Quit "),
        Span::styled(" a ", key_style(Color::Green)),
        Span::raw("Add "),
        Span::styled(" e ", key_style(Color::Cyan)),
        Span::raw("Edit "),
        Span::styled(" d ", key_style(Color::Red)),
        Span::raw("Delete "),
        Span::styled(" Tab ", key_style(Color::Cyan)),
        Span::raw("Switch list "),
        Span::styled(" c ", key_style(Color::Magenta)),
        Span::raw(charts_label),
        Span::styled(" s ", key_style(Color::Blue)),
        Span::raw("Export CSV "),
        Span::styled(" ? ", key_style(Color::White)),
        Span::raw("Help"),
    ];

    let paragraph = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::chart::ColorPicker;
    use crate::model::Entry;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_add_key_targets_focused_category() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::OpenEntryForm(Category::Expenses))
        );

        home.update(Action::SwitchCategory).unwrap();
        assert!(home.income.focused);
        assert!(!home.expenses.focused);
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('a'))).unwrap(),
            Some(Action::OpenEntryForm(Category::Income))
        );
    }

    #[test]
    fn test_row_keys_delegate_to_focused_table() {
        let ledger = Ledger::new(vec![], vec![Entry::new("Salário", 3000.0, "2024-01-01")]);
        let mut home = HomeComponent::new();
        home.income.rebuild(&ledger.income, "R$");
        home.switch_category();

        let id = ledger.income.id_at(0).unwrap();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('d'))).unwrap(),
            Some(Action::DeleteEntry(Category::Income, id))
        );
    }

    #[test]
    fn test_navigation_moves_focused_table_only() {
        let ledger = Ledger::new(
            vec![
                Entry::new("Aluguel", 1200.0, "2024-01-05"),
                Entry::new("Mercado", 300.0, "2024-01-06"),
            ],
            vec![Entry::new("Salário", 3000.0, "2024-01-01")],
        );
        let mut home = HomeComponent::new();
        home.expenses.rebuild(&ledger.expenses, "R$");
        home.income.rebuild(&ledger.income, "R$");

        home.update(Action::LastItem).unwrap();
        assert_eq!(home.expenses.selected(), Some(1));
        assert_eq!(home.income.selected(), Some(0));
    }

    #[test]
    fn test_draw_shows_totals_and_status() {
        let ledger = Ledger::new(
            vec![Entry::new("Aluguel", 1200.5, "2024-01-05")],
            vec![Entry::new("Salário", 3000.0, "2024-01-01")],
        );
        let panel = ChartPanel::new(ColorPicker::with_seed(1));
        let status = StatusLine::Info("Exported to ./controle_financeiro.csv".to_string());
        let mut home = HomeComponent::new();
        home.expenses.rebuild(&ledger.expenses, "R$");
        home.income.rebuild(&ledger.income, "R$");

        let mut terminal = Terminal::new(TestBackend::new(140, 30)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = HomeRenderContext {
                    ledger: &ledger,
                    charts: &panel,
                    status: Some(&status),
                    currency: "R$",
                };
                draw_home_screen(frame, frame.area(), &mut home, &ctx).unwrap();
            })
            .unwrap();

        let content = buffer_text(&terminal);
        assert!(content.contains("R$ 1799.50"));
        assert!(content.contains("Exported to ./controle_financeiro.csv"));
        assert!(content.contains("Aluguel"));
    }
}
