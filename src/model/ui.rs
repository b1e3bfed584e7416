//! UI state - presentation state separate from ledger data

use super::entry::Category;

/// Which category table has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus(pub Category);

impl Default for Focus {
    fn default() -> Self {
        Focus(Category::Expenses)
    }
}

impl Focus {
    pub fn category(&self) -> Category {
        self.0
    }

    pub fn switch(&mut self) {
        self.0 = self.0.other();
    }
}

/// Message line under the tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Info(String),
    Error(String),
}

impl StatusLine {
    pub fn text(&self) -> &str {
        match self {
            StatusLine::Info(text) | StatusLine::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, StatusLine::Error(_))
    }
}
