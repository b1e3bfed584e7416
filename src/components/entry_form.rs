//! Add-entry form dialog

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use crate::model::{Category, EntryForm, FormField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Form dialog for one category
///
/// The typed text outlives the dialog, so a rejected submission can be fixed
/// without retyping everything.
pub struct EntryFormDialog {
    pub form: EntryForm,
}

impl EntryFormDialog {
    pub fn new(category: Category) -> Self {
        Self {
            form: EntryForm::new(category),
        }
    }
}

impl Component for EntryFormDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SubmitEntry(self.form.category)),
            KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
            KeyCode::Backspace => Some(Action::FormBackspace),
            KeyCode::Char(c) => Some(Action::FormInput(c)),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::FormInput(c) => self.form.input(c),
            Action::FormBackspace => self.form.backspace(),
            Action::FormNextField => self.form.focus_next(),
            Action::FormPrevField => self.form.focus_prev(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_area = centered_popup(area, 56, 12);
        frame.render_widget(Clear, popup_area);

        let mut content = vec![Line::from("")];
        for field in FormField::all() {
            let focused = self.form.focus == field;
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let cursor = if focused { "_" } else { "" };

            content.push(Line::from(Span::styled(
                format!(" {}", field.label()),
                label_style,
            )));
            content.push(Line::from(Span::styled(
                format!(" > {}{}", self.form.field(field), cursor),
                Style::default().fg(Color::White),
            )));
        }
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Add  "),
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next field  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let title_color = match self.form.category {
            Category::Expenses => Color::Red,
            Category::Income => Color::Green,
        };
        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(title_color))
                .title(format!(" New {} Entry ", self.form.category.title()))
                .title_style(Style::default().fg(title_color).add_modifier(Modifier::BOLD)),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_keys_map_to_form_actions() {
        let mut dialog = EntryFormDialog::new(Category::Income);
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Char('x'))).unwrap(),
            Some(Action::FormInput('x'))
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::SubmitEntry(Category::Income))
        );
        assert_eq!(
            dialog.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModal)
        );
    }

    #[test]
    fn test_update_edits_focused_field() {
        let mut dialog = EntryFormDialog::new(Category::Expenses);
        dialog.update(Action::FormInput('L')).unwrap();
        dialog.update(Action::FormNextField).unwrap();
        dialog.update(Action::FormInput('9')).unwrap();

        assert_eq!(dialog.form.name, "L");
        assert_eq!(dialog.form.amount, "9");
        assert_eq!(dialog.form.focus, FormField::Amount);
    }
}
