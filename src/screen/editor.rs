use crate::domain::category::{Category, CategoryDraft};
use crate::domain::types::CategoryId;

/// Modal title while registering a new category.
pub const CREATE_TITLE: &str = "Registrar Nueva Categoría";
/// Modal title while updating an existing category.
pub const EDIT_TITLE: &str = "Actualizar Categoría";
/// Submit label while registering.
pub const CREATE_SUBMIT: &str = "Registrar";
/// Submit label while updating.
pub const EDIT_SUBMIT: &str = "Guardar";

/// Form-controller state of the category editor modal.
///
/// Create and edit share one modal but close differently after a failed
/// save, so the mode is a tagged state rather than an optional selection.
/// The edit draft is a copy; the stored entity stays untouched until the
/// backend confirms the update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Editor {
    /// No modal on screen.
    #[default]
    Closed,
    /// Registering a new category; the draft has no identity yet.
    Creating(CategoryDraft),
    /// Updating the category identified by `id`.
    Editing { id: CategoryId, draft: CategoryDraft },
}

impl Editor {
    /// Open the modal with an empty draft.
    pub fn open_blank(&mut self) {
        *self = Editor::Creating(CategoryDraft::default());
    }

    /// Open the modal over a copy of an existing entity.
    pub fn open_copy(&mut self, category: &Category) {
        *self = Editor::Editing {
            id: category.id,
            draft: CategoryDraft::from(category),
        };
    }

    /// Discard the draft and close the modal.
    pub fn close(&mut self) {
        *self = Editor::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Editor::Closed)
    }

    pub fn draft(&self) -> Option<&CategoryDraft> {
        match self {
            Editor::Closed => None,
            Editor::Creating(draft) | Editor::Editing { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut CategoryDraft> {
        match self {
            Editor::Closed => None,
            Editor::Creating(draft) | Editor::Editing { draft, .. } => Some(draft),
        }
    }

    /// Modal heading for the current mode, `None` while closed.
    pub fn title(&self) -> Option<&'static str> {
        match self {
            Editor::Closed => None,
            Editor::Creating(_) => Some(CREATE_TITLE),
            Editor::Editing { .. } => Some(EDIT_TITLE),
        }
    }

    /// Submit button label for the current mode, `None` while closed.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self {
            Editor::Closed => None,
            Editor::Creating(_) => Some(CREATE_SUBMIT),
            Editor::Editing { .. } => Some(EDIT_SUBMIT),
        }
    }
}
