use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::category::{
    Category, CategoryDraft, DELETE_SUCCESS, OperationReply, REGISTER_SUCCESS,
};
use crate::domain::types::CategoryId;
use crate::repository::{ApiError, ApiResult, CategoryReader, CategoryWriter};

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
pub enum Scripted {
    /// Resolve with the given reply.
    Reply(OperationReply),
    /// Reject with a fabricated transport failure.
    Transport,
}

impl Scripted {
    fn produce(&self) -> ApiResult<OperationReply> {
        match self {
            Self::Reply(reply) => Ok(reply.clone()),
            Self::Transport => Err(ApiError::Transport("connection refused".to_string())),
        }
    }
}

/// Simple scripted repository used for unit tests.
///
/// Reads serve the seeded rows; writes answer with their scripted outcome
/// and mutate nothing. Every call is recorded so tests can assert which
/// operations ran.
pub struct TestRepository {
    categories: Vec<Category>,
    reads_fail: bool,
    create_reply: Scripted,
    update_reply: Scripted,
    delete_reply: Scripted,
    calls: Mutex<Vec<Call>>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            reads_fail: false,
            create_reply: Scripted::Reply(OperationReply {
                message: REGISTER_SUCCESS.to_string(),
                category_id: Some(CategoryId::new(100)),
            }),
            update_reply: Scripted::Reply(OperationReply {
                message: "Actualización exitosa".to_string(),
                category_id: None,
            }),
            delete_reply: Scripted::Reply(OperationReply {
                message: DELETE_SUCCESS.to_string(),
                category_id: None,
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Make both read operations reject with a transport failure.
    pub fn failing_reads(mut self) -> Self {
        self.reads_fail = true;
        self
    }

    pub fn with_create_reply(mut self, scripted: Scripted) -> Self {
        self.create_reply = scripted;
        self
    }

    pub fn with_update_reply(mut self, scripted: Scripted) -> Self {
        self.update_reply = scripted;
        self
    }

    pub fn with_delete_reply(mut self, scripted: Scripted) -> Self {
        self.delete_reply = scripted;
        self
    }

    /// Operations performed so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock_calls().clone()
    }

    fn record(&self, call: Call) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<Call>> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
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
impl CategoryReader for TestRepository {
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
impl CategoryWriter for TestRepository {
    async fn create_category(&self, _draft: &CategoryDraft) -> ApiResult<OperationReply> {
        self.record(Call::Create);
        self.create_reply.produce()
    }

    async fn update_category(&self, _category: &Category) -> ApiResult<OperationReply> {
        self.record(Call::Update);
        self.update_reply.produce()
    }

    async fn delete_category(&self, _id: CategoryId) -> ApiResult<OperationReply> {
        self.record(Call::Delete);
        self.delete_reply.produce()
    }
}
