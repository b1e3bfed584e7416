//! Edit request/commit messages and the field fallback rules

use super::entry::{parse_amount, Category, Entry, EntryId};

/// Values collected by the edit dialog
///
/// `None` means the user cancelled that field's prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub category: Category,
    pub id: EntryId,
    pub name: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
}

impl EditCommit {
    /// A commit where every prompt was cancelled
    pub fn cancelled(category: Category, id: EntryId) -> Self {
        Self {
            category,
            id,
            name: None,
            amount: None,
            date: None,
        }
    }
}

/// How edit input falls back to previous values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditPolicy {
    /// Treat an entered amount of zero as "no input" and keep the old amount
    pub zero_keeps_previous: bool,
}

impl Default for EditPolicy {
    fn default() -> Self {
        Self {
            zero_keeps_previous: true,
        }
    }
}

/// Resolve edit input against the current entry
///
/// Empty or cancelled name/date fall back to the previous value. The amount
/// falls back when cancelled, unparseable, or zero under the default policy.
/// Returns `None` when the result is still invalid, in which case the edit is
/// dropped without feedback.
pub fn resolve_edit(current: &Entry, commit: &EditCommit, policy: EditPolicy) -> Option<Entry> {
    let name = match commit.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => current.name.clone(),
    };

    let amount = match commit.amount.as_deref().and_then(parse_amount) {
        Some(value) if value == 0.0 && policy.zero_keeps_previous => current.amount,
        Some(value) => value,
        None => current.amount,
    };

    let date = match commit.date.as_deref() {
        Some(date) if !date.is_empty() => date.to_string(),
        _ => current.date.clone(),
    };

    if name.is_empty() || amount.is_nan() || date.is_empty() {
        return None;
    }

    Some(Entry { name, amount, date })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Entry {
        Entry::new("Aluguel", 1200.5, "2024-01-05")
    }

    fn commit(name: Option<&str>, amount: Option<&str>, date: Option<&str>) -> EditCommit {
        EditCommit {
            category: Category::Expenses,
            id: EntryId(0),
            name: name.map(str::to_string),
            amount: amount.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_all_cancelled_keeps_entry() {
        let resolved = resolve_edit(
            &current(),
            &EditCommit::cancelled(Category::Expenses, EntryId(0)),
            EditPolicy::default(),
        );
        assert_eq!(resolved, Some(current()));
    }

    #[test]
    fn test_new_values_replace_old_ones() {
        let resolved = resolve_edit(
            &current(),
            &commit(Some("Condomínio"), Some("450"), Some("2024-02-01")),
            EditPolicy::default(),
        );
        assert_eq!(resolved, Some(Entry::new("Condomínio", 450.0, "2024-02-01")));
    }

    #[test]
    fn test_empty_fields_fall_back() {
        let resolved = resolve_edit(
            &current(),
            &commit(Some(""), Some(""), Some("")),
            EditPolicy::default(),
        );
        assert_eq!(resolved, Some(current()));
    }

    #[test]
    fn test_unparseable_amount_falls_back() {
        let resolved = resolve_edit(
            &current(),
            &commit(None, Some("abc"), None),
            EditPolicy::default(),
        );
        assert_eq!(resolved.unwrap().amount, 1200.5);
    }

    #[test]
    fn test_zero_amount_keeps_previous_by_default() {
        let resolved = resolve_edit(
            &current(),
            &commit(None, Some("0"), None),
            EditPolicy::default(),
        );
        assert_eq!(resolved.unwrap().amount, 1200.5);
    }

    #[test]
    fn test_zero_amount_accepted_when_policy_disabled() {
        let resolved = resolve_edit(
            &current(),
            &commit(None, Some("0"), None),
            EditPolicy {
                zero_keeps_previous: false,
            },
        );
        assert_eq!(resolved.unwrap().amount, 0.0);
    }

    #[test]
    fn test_whitespace_name_is_kept_as_typed() {
        let resolved = resolve_edit(
            &current(),
            &commit(Some("  "), None, None),
            EditPolicy::default(),
        );
        assert_eq!(resolved.unwrap().name, "  ");
    }

    #[test]
    fn test_invalid_previous_entry_discards_edit() {
        let broken = Entry::new("", 1.0, "2024-01-01");
        assert_eq!(
            resolve_edit(&broken, &commit(None, None, None), EditPolicy::default()),
            None
        );
    }
}
