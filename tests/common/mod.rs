//! Helpers for integration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use intranet_categoria::domain::category::{
    Category, CategoryDraft, DELETE_SUCCESS, OperationReply, REGISTER_SUCCESS,
};
use intranet_categoria::domain::types::CategoryId;
use intranet_categoria::repository::{ApiError, ApiResult, CategoryReader, CategoryWriter};

/// Operation the double was asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    List,
    Search,
    Create,
    Update,
    Delete,
}

/// Scripted outcome for one operation.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Resolve with the given reply.
    Reply(OperationReply),
    /// Reject with a fabricated transport failure.
    Transport,
}

impl Outcome {
    fn produce(&self) -> ApiResult<OperationReply> {
        match self {
            Self::Reply(reply) => Ok(reply.clone()),
            Self::Transport => Err(ApiError::Transport("connection refused".to_string())),
        }
    }
}

/// Category endpoint double with scripted outcomes and call recording.
///
/// Reads serve the seeded rows; writes answer their script and mutate
/// nothing, so tests can tell exactly which state changes came from the
/// screen itself.
pub struct RecordingRepository {
    categories: Vec<Category>,
    reads_fail: bool,
    create: Outcome,
    update: Outcome,
    delete: Outcome,
    calls: Mutex<Vec<Call>>,
}

impl RecordingRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            reads_fail: false,
            create: Outcome::Reply(reply(REGISTER_SUCCESS, Some(100))),
            update: Outcome::Reply(reply("Actualización exitosa", None)),
            delete: Outcome::Reply(reply(DELETE_SUCCESS, None)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make both read operations reject with a transport failure.
    pub fn failing_reads(mut self) -> Self {
        self.reads_fail = true;
        self
    }

    pub fn with_create(mut self, outcome: Outcome) -> Self {
        self.create = outcome;
        self
    }

    pub fn with_update(mut self, outcome: Outcome) -> Self {
        self.update = outcome;
        self
    }

    pub fn with_delete(mut self, outcome: Outcome) -> Self {
        self.delete = outcome;
        self
    }

    /// Operations performed so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: Call) {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(call);
    }

    fn read_result(&self, items: Vec<Category>) -> ApiResult<Vec<Category>> {
        if self.reads_fail {
            Err(ApiError::Transport("connection refused".to_string()))
        } else {
            Ok(items)
        }
    }
}

#[async_trait]
impl CategoryReader for RecordingRepository {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        self.record(Call::List);
        self.read_result(self.categories.clone())
    }

    async fn search_categories(&self, name: &str) -> ApiResult<Vec<Category>> {
        self.record(Call::Search);
        let needle = name.to_lowercase();
        let items = self
            .categories
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        self.read_result(items)
    }
}

#[async_trait]
impl CategoryWriter for RecordingRepository {
    async fn create_category(&self, _draft: &CategoryDraft) -> ApiResult<OperationReply> {
        self.record(Call::Create);
        self.create.produce()
    }

    async fn update_category(&self, _category: &Category) -> ApiResult<OperationReply> {
        self.record(Call::Update);
        self.update.produce()
    }

    async fn delete_category(&self, _id: CategoryId) -> ApiResult<OperationReply> {
        self.record(Call::Delete);
        self.delete.produce()
    }
}

/// Build a category row for seeding doubles.
pub fn category(id: i32, name: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        description: format!("{name} description"),
    }
}

/// Build a reply body.
pub fn reply(message: &str, category_id: Option<i32>) -> OperationReply {
    OperationReply {
        message: message.to_string(),
        category_id: category_id.map(CategoryId::new),
    }
}
