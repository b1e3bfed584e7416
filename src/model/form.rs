//! New-entry form state and validation

use super::entry::{parse_amount, Category, Entry};
use crate::error::ValidationError;

/// Form fields in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Amount,
    Date,
}

impl FormField {
    pub fn all() -> [FormField; 3] {
        [FormField::Name, FormField::Amount, FormField::Date]
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::Name => FormField::Amount,
            FormField::Amount => FormField::Date,
            FormField::Date => FormField::Name,
        }
    }

    pub fn prev(&self) -> FormField {
        match self {
            FormField::Name => FormField::Date,
            FormField::Amount => FormField::Name,
            FormField::Date => FormField::Amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Amount => "Amount",
            FormField::Date => "Date (YYYY-MM-DD)",
        }
    }
}

/// Text typed into the add-entry form for one category
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub category: Category,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub focus: FormField,
}

impl EntryForm {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            name: String::new(),
            amount: String::new(),
            date: String::new(),
            focus: FormField::Name,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Amount => &mut self.amount,
            FormField::Date => &mut self.date,
        }
    }

    pub fn input(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Build an entry from the current input
    ///
    /// The name is stored trimmed; the date is taken as typed.
    pub fn validate(&self) -> Result<Entry, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let amount = parse_amount(&self.amount)
            .ok_or_else(|| ValidationError::InvalidAmount(self.amount.clone()))?;
        if self.date.is_empty() {
            return Err(ValidationError::EmptyDate);
        }
        Ok(Entry::new(name, amount, self.date.clone()))
    }

    /// Reset all fields after a successful submission
    pub fn clear(&mut self) {
        self.name.clear();
        self.amount.clear();
        self.date.clear();
        self.focus = FormField::Name;
    }
}
