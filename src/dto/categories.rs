use serde::{Deserialize, Serialize};

use crate::domain::category::{Category, CategoryDraft, OperationReply};
use crate::domain::types::CategoryId;

/// Category record as it travels on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDto {
    #[serde(rename = "categoryID")]
    pub category_id: i32,
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub description: String,
}

/// Registration request body. The backend assigns the identity, so none
/// is sent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewCategoryDto {
    #[serde(rename = "categoryName")]
    pub category_name: String,
    pub description: String,
}

/// Reply body shared by the mutating endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ReplyDto {
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(rename = "categoryID", default)]
    pub category_id: Option<i32>,
}

impl From<CategoryDto> for Category {
    fn from(value: CategoryDto) -> Self {
        Self {
            id: CategoryId::new(value.category_id),
            name: value.category_name,
            description: value.description,
        }
    }
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            category_id: value.id.get(),
            category_name: value.name.clone(),
            description: value.description.clone(),
        }
    }
}

impl From<&CategoryDraft> for NewCategoryDto {
    fn from(value: &CategoryDraft) -> Self {
        Self {
            category_name: value.name.clone(),
            description: value.description.clone(),
        }
    }
}

impl From<ReplyDto> for OperationReply {
    fn from(value: ReplyDto) -> Self {
        Self {
            message: value.message,
            category_id: value.category_id.map(CategoryId::new),
        }
    }
}
