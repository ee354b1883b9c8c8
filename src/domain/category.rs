use serde::{Deserialize, Serialize};

use crate::domain::types::CategoryId;

/// Reply message the backend sends for a successful registration.
pub const REGISTER_SUCCESS: &str = "Registro exitoso";
/// Reply message the backend sends for a successful deletion.
pub const DELETE_SUCCESS: &str = "Eliminación exitosa";

/// Canonical category record as mirrored from the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Category {
    /// Materializes a draft under the given identity.
    pub fn from_draft(id: CategoryId, draft: &CategoryDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
        }
    }
}

/// Scratch copy of a category while the editor is open.
///
/// Carries no identity of its own and no validation: fields are free-form
/// text and the backend is the sole validator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }
}

/// Decoded body of a write reply.
///
/// A resolved reply is not yet a success: registration and deletion are
/// confirmed only when `message` carries the exact sentinel the backend
/// uses for that operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationReply {
    pub message: String,
    /// Identity echoed back by the backend, absent when it reported none.
    pub category_id: Option<CategoryId>,
}

impl OperationReply {
    /// `true` when the reply confirms a registration.
    pub fn confirms_registration(&self) -> bool {
        self.message == REGISTER_SUCCESS
    }

    /// `true` when the reply confirms a deletion.
    pub fn confirms_deletion(&self) -> bool {
        self.message == DELETE_SUCCESS
    }
}
