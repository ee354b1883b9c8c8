//! Session-local mirror of the backend's category collection.

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

/// Ordered, session-local copy of the server-side category list.
///
/// Entries keep their arrival order and are only mutated after the backend
/// confirms the corresponding write; nothing here performs I/O.
#[derive(Debug, Clone, Default)]
pub struct CategoryStore {
    items: Vec<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection, as after a full fetch or a search.
    pub fn set_all(&mut self, items: Vec<Category>) {
        self.items = items;
    }

    /// Append one entry after a confirmed registration.
    ///
    /// Persisted identities are unique on the backend; a duplicate here
    /// means the mirror and the backend disagree, so the entry is kept
    /// and the disagreement logged.
    pub fn append(&mut self, category: Category) {
        if category.id.is_assigned() && self.get(category.id).is_some() {
            log::warn!(
                "Category id {} appended twice to the local list",
                category.id
            );
        }
        self.items.push(category);
    }

    /// Replace the entry carrying the same identity, keeping its position.
    /// Returns `false` when no entry matches.
    pub fn replace(&mut self, category: Category) -> bool {
        match self.items.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category;
                true
            }
            None => false,
        }
    }

    /// Remove the entry with the given identity. Returns `false` when no
    /// entry matches.
    pub fn remove(&mut self, id: CategoryId) -> bool {
        let before = self.items.len();
        self.items.retain(|c| c.id != id);
        self.items.len() < before
    }

    pub fn get(&self, id: CategoryId) -> Option<&Category> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn items(&self) -> &[Category] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
