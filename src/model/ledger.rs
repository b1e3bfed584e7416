//! List model - ordered entry lists for both categories
//!
//! The free functions are the raw list operations. `EntryList` pairs each
//! entry with a stable `EntryId` so controls rendered earlier can still find
//! (or fail to find) their entry after other mutations.

use super::entry::{Category, Entry, EntryId};

/// Append an entry at the end of the list
pub fn append(list: &mut Vec<Entry>, entry: Entry) {
    list.push(entry);
}

/// Replace the entry at `index`, returning false when out of bounds
pub fn replace_at(list: &mut [Entry], index: usize, entry: Entry) -> bool {
    match list.get_mut(index) {
        Some(slot) => {
            *slot = entry;
            true
        }
        None => false,
    }
}

/// Remove the entry at `index`, shifting later entries down
pub fn remove_at(list: &mut Vec<Entry>, index: usize) -> Option<Entry> {
    if index < list.len() {
        Some(list.remove(index))
    } else {
        None
    }
}

/// Entries of one category in insertion order, each with a stable id
#[derive(Debug, Clone, Default)]
pub struct EntryList {
    entries: Vec<Entry>,
    ids: Vec<EntryId>,
    next_id: u64,
}

impl EntryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from loaded entries, assigning fresh ids
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            list.push(entry);
        }
        list
    }

    /// Append an entry and return its id
    pub fn push(&mut self, entry: Entry) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        append(&mut self.entries, entry);
        self.ids.push(id);
        id
    }

    /// Current position of an entry, if it still exists
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.ids.iter().position(|&candidate| candidate == id)
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.position(id).and_then(|index| self.entries.get(index))
    }

    /// Replace the entry with the given id in place
    pub fn replace(&mut self, id: EntryId, entry: Entry) -> bool {
        match self.position(id) {
            Some(index) => replace_at(&mut self.entries, index, entry),
            None => false,
        }
    }

    /// Remove the entry with the given id
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.position(id)?;
        self.ids.remove(index);
        remove_at(&mut self.entries, index)
    }

    /// Entries in order, as persisted
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries in order, paired with their ids
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &Entry)> {
        self.ids.iter().copied().zip(self.entries.iter())
    }

    #[cfg(test)]
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.ids.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }
}

/// In-memory state for both categories
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub expenses: EntryList,
    pub income: EntryList,
}

impl Ledger {
    pub fn new(expenses: Vec<Entry>, income: Vec<Entry>) -> Self {
        Self {
            expenses: EntryList::from_entries(expenses),
            income: EntryList::from_entries(income),
        }
    }

    pub fn list(&self, category: Category) -> &EntryList {
        match category {
            Category::Expenses => &self.expenses,
            Category::Income => &self.income,
        }
    }

    pub fn list_mut(&mut self, category: Category) -> &mut EntryList {
        match category {
            Category::Expenses => &mut self.expenses,
            Category::Income => &mut self.income,
        }
    }

    /// Income total minus expense total
    pub fn balance(&self) -> f64 {
        self.income.total() - self.expenses.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry::new(format!("item{}", i), i as f64 * 10.0, "2024-01-01"))
            .collect()
    }

    #[test]
    fn test_remove_at_excises_index() {
        let original = sample(5);
        let mut list = original.clone();

        let removed = remove_at(&mut list, 2);

        assert_eq!(removed, Some(original[2].clone()));
        let mut expected = original.clone();
        expected.remove(2);
        assert_eq!(list, expected);
    }

    #[test]
    fn test_out_of_bounds_operations_are_rejected() {
        let mut list = sample(2);
        assert_eq!(remove_at(&mut list, 2), None);
        assert!(!replace_at(&mut list, 5, Entry::new("x", 1.0, "d")));
        assert_eq!(list, sample(2));
    }

    #[test]
    fn test_replace_at_keeps_order() {
        let mut list = sample(3);
        assert!(replace_at(&mut list, 1, Entry::new("new", 99.0, "2024-02-02")));
        assert_eq!(list[0].name, "item0");
        assert_eq!(list[1].name, "new");
        assert_eq!(list[2].name, "item2");
    }

    #[test]
    fn test_ids_survive_removal_of_earlier_entries() {
        let mut list = EntryList::from_entries(sample(3));
        let last = list.id_at(2).unwrap();

        list.remove(list.id_at(0).unwrap());

        assert_eq!(list.position(last), Some(1));
        assert_eq!(list.get(last).unwrap().name, "item2");
    }

    #[test]
    fn test_stale_id_is_not_found() {
        let mut list = EntryList::from_entries(sample(2));
        let first = list.id_at(0).unwrap();

        assert!(list.remove(first).is_some());
        assert!(list.remove(first).is_none());
        assert!(!list.replace(first, Entry::new("x", 1.0, "d")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut list = EntryList::new();
        let a = list.push(Entry::new("a", 1.0, "d"));
        list.remove(a);
        let b = list.push(Entry::new("b", 2.0, "d"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_ledger_balance() {
        let ledger = Ledger::new(
            vec![Entry::new("rent", 1200.5, "2024-01-05")],
            vec![Entry::new("salary", 3000.0, "2024-01-01")],
        );
        assert_eq!(ledger.balance(), 1799.5);
        assert_eq!(ledger.list(Category::Expenses).len(), 1);
    }
}
