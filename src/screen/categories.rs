use crate::domain::category::{Category, CategoryDraft, OperationReply};
use crate::domain::types::CategoryId;
use crate::pagination::Pagination;
use crate::repository::{CategoryReader, CategoryWriter};
use crate::screen::editor::Editor;
use crate::screen::notify::{Notification, Notifications};
use crate::store::CategoryStore;

/// Message shown instead of the table when the initial fetch fails.
pub const LOAD_ERROR: &str = "Error al cargar las categorías";
/// Message shown when a name search fails.
pub const SEARCH_ERROR: &str = "Error al buscar las categorías";

/// Title of the delete confirmation prompt.
pub const DELETE_PROMPT_TITLE: &str = "¿Estás seguro?";
/// Body of the delete confirmation prompt.
pub const DELETE_PROMPT_TEXT: &str = "No podrás revertir esta acción";
/// Confirm label of the delete prompt.
pub const DELETE_CONFIRM_LABEL: &str = "Sí, eliminar";
/// Cancel label of the delete prompt.
pub const DELETE_CANCEL_LABEL: &str = "Cancelar";

/// Progress of the collection fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight; the shell shows a placeholder.
    #[default]
    Loading,
    /// The local list mirrors the backend.
    Ready,
    /// The fetch was rejected; the shell shows the message instead of the
    /// table.
    Failed(String),
}

/// The category management screen.
///
/// Owns the local list, the page window over it, the editor modal, the
/// delete confirmation and the notification queue, and runs every backend
/// flow against an injected client. Rendering is left to the shell, which
/// reads the state exposed here.
#[derive(Debug, Default)]
pub struct CategoryScreen {
    store: CategoryStore,
    pagination: Pagination,
    editor: Editor,
    pending_delete: Option<CategoryId>,
    notifications: Notifications,
    load_state: LoadState,
}

impl CategoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the full collection and replace the local list with it.
    pub async fn load<R>(&mut self, repo: &R)
    where
        R: CategoryReader + Sync,
    {
        self.load_state = LoadState::Loading;
        match repo.list_categories().await {
            Ok(categories) => {
                self.store.set_all(categories);
                self.load_state = LoadState::Ready;
            }
            Err(e) => {
                log::error!("Failed to list categories: {e}");
                self.load_state = LoadState::Failed(LOAD_ERROR.to_string());
            }
        }
    }

    /// Replace the local list with the backend's name search. An empty or
    /// whitespace-only term fetches the full collection instead. On
    /// success the view jumps back to the first page; on failure the list
    /// is left as it was.
    pub async fn search<R>(&mut self, repo: &R, term: &str)
    where
        R: CategoryReader + Sync,
    {
        let term = term.trim();
        let result = if term.is_empty() {
            repo.list_categories().await
        } else {
            repo.search_categories(term).await
        };

        match result {
            Ok(categories) => {
                self.store.set_all(categories);
                self.pagination.set_page(0);
            }
            Err(e) => {
                log::error!("Failed to search categories: {e}");
                self.notifications.error("Error!", SEARCH_ERROR);
            }
        }
    }

    /// Open the editor with an empty draft.
    pub fn start_create(&mut self) {
        self.editor.open_blank();
    }

    /// Open the editor over a copy of the stored entity. Returns `false`
    /// and leaves the editor untouched when the identity is not in the
    /// local list.
    pub fn start_edit(&mut self, id: CategoryId) -> bool {
        match self.store.get(id) {
            Some(category) => {
                self.editor.open_copy(category);
                true
            }
            None => false,
        }
    }

    /// Discard the open draft. No backend call, no notification.
    pub fn cancel_edit(&mut self) {
        self.editor.close();
    }

    /// Submit the open draft to the backend. Does nothing while the
    /// editor is closed.
    pub async fn save<R>(&mut self, repo: &R)
    where
        R: CategoryWriter + Sync,
    {
        match self.editor.clone() {
            Editor::Closed => {}
            Editor::Creating(draft) => self.save_new(repo, draft).await,
            Editor::Editing { id, draft } => self.save_existing(repo, id, draft).await,
        }
    }

    /// Arm the delete confirmation prompt for the given identity.
    pub fn request_delete(&mut self, id: CategoryId) {
        self.pending_delete = Some(id);
    }

    /// Dismiss the prompt. No backend call, no notification.
    pub fn decline_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Run the armed deletion. The prompt is disarmed up front so a
    /// second confirmation cannot re-issue the call.
    pub async fn confirm_delete<R>(&mut self, repo: &R)
    where
        R: CategoryWriter + Sync,
    {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        match repo.delete_category(id).await {
            Ok(reply) if reply.confirms_deletion() => {
                self.store.remove(id);
                self.notifications
                    .success("Eliminado!", "La categoría ha sido eliminada.");
            }
            Ok(reply) => {
                log::error!("Category deletion refused for {id}: {}", reply.message);
                self.notifications
                    .error("Error!", "No se pudo eliminar la categoría.");
            }
            Err(e) => {
                log::error!("Failed to delete category {id}: {e}");
                self.notifications
                    .error("Error!", "Hubo un problema al eliminar la categoría.");
            }
        }
    }

    /// Show another page of the local list.
    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    /// Change the page size; the view jumps back to the first page.
    pub fn set_rows_per_page(&mut self, per_page: usize) {
        self.pagination.set_per_page(per_page);
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    /// The rows of the current page.
    pub fn visible_rows(&self) -> &[Category] {
        self.pagination.slice(self.store.items())
    }

    /// Size of the whole local list, not just the current page.
    pub fn total(&self) -> usize {
        self.store.len()
    }

    pub fn page(&self) -> usize {
        self.pagination.page()
    }

    pub fn rows_per_page(&self) -> usize {
        self.pagination.per_page()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.store.len())
    }

    /// Footer label for the current page window.
    pub fn pagination_label(&self) -> String {
        self.pagination.label(self.store.len())
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Mutable access to the open draft for field edits.
    pub fn draft_mut(&mut self) -> Option<&mut CategoryDraft> {
        self.editor.draft_mut()
    }

    /// Identity armed for deletion, while the prompt is on screen.
    pub fn pending_delete(&self) -> Option<CategoryId> {
        self.pending_delete
    }

    /// Drain the queued notifications for rendering.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.take()
    }

    async fn save_new<R>(&mut self, repo: &R, draft: CategoryDraft)
    where
        R: CategoryWriter + Sync,
    {
        match repo.create_category(&draft).await {
            Ok(reply) => {
                if reply.confirms_registration() {
                    let id = assigned_id(&reply);
                    self.store.append(Category::from_draft(id, &draft));
                    self.notifications
                        .success("Registrado!", "La categoría ha sido registrada.");
                } else {
                    log::error!("Category registration refused: {}", reply.message);
                    self.notifications
                        .error("Error!", "No se pudo registrar la categoría.");
                }
                // The modal closes on any resolved reply, confirmed or not.
                self.editor.close();
            }
            Err(e) => {
                log::error!("Failed to register category: {e}");
                self.notifications
                    .error("Error!", "Hubo un problema al registrar la categoría.");
            }
        }
    }

    async fn save_existing<R>(&mut self, repo: &R, id: CategoryId, draft: CategoryDraft)
    where
        R: CategoryWriter + Sync,
    {
        let updated = Category::from_draft(id, &draft);
        match repo.update_category(&updated).await {
            // Unlike registration, any resolved reply counts as a
            // confirmed update; the reply message is not inspected.
            Ok(_) => {
                if !self.store.replace(updated) {
                    log::warn!("Updated category {id} is no longer in the local list");
                }
                self.notifications
                    .success("Actualizado!", "La categoría ha sido actualizada.");
                self.editor.close();
            }
            Err(e) => {
                log::error!("Failed to update category {id}: {e}");
                self.notifications
                    .error("Error!", "Hubo un problema al actualizar la categoría.");
            }
        }
    }
}

/// Identity to store for a confirmed registration. A confirmed reply that
/// names no identity is stored as [`CategoryId::UNASSIGNED`] so the entry
/// is visibly unpersisted instead of silently wrong.
fn assigned_id(reply: &OperationReply) -> CategoryId {
    match reply.category_id {
        Some(id) => id,
        None => {
            log::warn!("Registration confirmed without an id; keeping the entry unassigned");
            CategoryId::UNASSIGNED
        }
    }
}
