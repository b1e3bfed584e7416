//! Edit dialog - asks for each field in turn
//!
//! Every field starts with the current value. Enter accepts what is typed,
//! Esc cancels just that field. After the last field the dialog emits a
//! `CommitEdit` carrying whatever was collected.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::{Category, EditCommit, Entry, EntryId, FormField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub struct EditDialog {
    commit: EditCommit,
    step: FormField,
    input: String,
    defaults: [String; 3],
}

impl EditDialog {
    pub fn new(category: Category, id: EntryId, current: &Entry) -> Self {
        let defaults = [
            current.name.clone(),
            current.amount.to_string(),
            current.date.clone(),
        ];
        Self {
            commit: EditCommit::cancelled(category, id),
            step: FormField::Name,
            input: defaults[0].clone(),
            defaults,
        }
    }

    #[cfg(test)]
    pub fn step(&self) -> FormField {
        self.step
    }

    #[cfg(test)]
    pub fn input(&self) -> &str {
        &self.input
    }

    fn default_for(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.defaults[0],
            FormField::Amount => &self.defaults[1],
            FormField::Date => &self.defaults[2],
        }
    }

    /// Record the answer for the current field and move on
    fn answer(&mut self, value: Option<String>) -> Option<Action> {
        match self.step {
            FormField::Name => self.commit.name = value,
            FormField::Amount => self.commit.amount = value,
            FormField::Date => self.commit.date = value,
        }

        if self.step == FormField::Date {
            return Some(Action::CommitEdit(self.commit.clone()));
        }

        self.step = self.step.next();
        self.input = self.default_for(self.step).to_string();
        None
    }
}

impl Component for EditDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => {
                let value = std::mem::take(&mut self.input);
                self.answer(Some(value))
            }
            KeyCode::Esc => self.answer(None),
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 9);
        frame.render_widget(Clear, popup_area);

        let prompt = match self.step {
            FormField::Name => "New name:",
            FormField::Amount => "New amount:",
            FormField::Date => "New date (YYYY-MM-DD):",
        };

        let content = vec![
            Line::from(""),
            Line::from(Span::styled(
                prompt,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("> {}_", self.input),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " Enter ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("OK  "),
                Span::styled(
                    " Esc ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Keep current"),
            ]),
        ];

        let step_number = match self.step {
            FormField::Name => 1,
            FormField::Amount => 2,
            FormField::Date => 3,
        };
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(format!(" Edit {} ({}/3) ", self.commit.id, step_number))
                    .title_style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}
