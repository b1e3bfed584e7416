//! Modal stack for dialogs drawn over the ledger screen

use super::entry::{Category, EntryId};

/// A dialog displayed on top of the main screen
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Add-entry form for a category
    EntryForm { category: Category },
    /// Field-by-field edit of an existing entry
    EditEntry { category: Category, id: EntryId },
    /// Blocking message that must be dismissed
    Alert { message: String },
    /// Keyboard shortcuts
    Help,
}

/// A stack of modal overlays
///
/// Modals are rendered from bottom to top, with only the top modal
/// receiving input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterate from the bottom of the stack to the top
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_stacks_over_form() {
        let mut stack = ModalStack::new();
        stack.push(Modal::EntryForm {
            category: Category::Expenses,
        });
        stack.push(Modal::Alert {
            message: "oops".to_string(),
        });

        assert!(matches!(stack.top(), Some(Modal::Alert { .. })));
        stack.pop();
        assert_eq!(
            stack.top(),
            Some(&Modal::EntryForm {
                category: Category::Expenses
            })
        );
        assert_eq!(stack.iter().count(), 1);
    }

    #[test]
    fn test_pop_empties_stack() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Help);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
