pub mod categories;
pub mod editor;
pub mod notify;
