//! Self-contained category backend.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::category::{
    Category, CategoryDraft, DELETE_SUCCESS, OperationReply, REGISTER_SUCCESS,
};
use crate::domain::types::CategoryId;
use crate::repository::{ApiResult, CategoryReader, CategoryWriter};

/// Reply message for a successful update.
pub const UPDATE_SUCCESS: &str = "Actualización exitosa";
/// Reply message when the targeted category does not exist.
pub const NOT_FOUND: &str = "Categoría no encontrada";

/// In-memory implementation of the category endpoint.
///
/// Behaves like a cooperative backend: assigns identities from a counter
/// and answers with the same reply messages the REST service uses. Backs
/// offline shells and the happy-path flow tests.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    categories: Vec<Category>,
    next_id: i32,
}

impl MemoryRepository {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Create a backend holding the given rows. The identity counter
    /// continues after the highest seeded identifier.
    pub fn seeded(categories: Vec<Category>) -> Self {
        let next_id = categories.iter().map(|c| c.id.get()).max().unwrap_or(0);
        Self {
            state: Mutex::new(State { categories, next_id }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CategoryReader for MemoryRepository {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.lock().categories.clone())
    }

    async fn search_categories(&self, name: &str) -> ApiResult<Vec<Category>> {
        let needle = name.to_lowercase();
        Ok(self
            .lock()
            .categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryWriter for MemoryRepository {
    async fn create_category(&self, draft: &CategoryDraft) -> ApiResult<OperationReply> {
        let mut state = self.lock();
        state.next_id += 1;
        let id = CategoryId::new(state.next_id);
        state.categories.push(Category::from_draft(id, draft));
        Ok(OperationReply {
            message: REGISTER_SUCCESS.to_string(),
            category_id: Some(id),
        })
    }

    async fn update_category(&self, category: &Category) -> ApiResult<OperationReply> {
        let mut state = self.lock();
        let message = match state.categories.iter_mut().find(|c| c.id == category.id) {
            Some(slot) => {
                *slot = category.clone();
                UPDATE_SUCCESS
            }
            None => NOT_FOUND,
        };
        Ok(OperationReply {
            message: message.to_string(),
            category_id: Some(category.id),
        })
    }

    async fn delete_category(&self, id: CategoryId) -> ApiResult<OperationReply> {
        let mut state = self.lock();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        let message = if state.categories.len() < before {
            DELETE_SUCCESS
        } else {
            NOT_FOUND
        };
        Ok(OperationReply {
            message: message.to_string(),
            category_id: Some(id),
        })
    }
}
