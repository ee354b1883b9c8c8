//! Identity newtypes for domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers keep their meaning when they cross the wire boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Unique identifier for a category.
///
/// The backend assigns identifiers starting at `1`. The reserved value `0`
/// ([`CategoryId::UNASSIGNED`]) marks an entity whose identity the backend
/// has not reported yet, so the constructor accepts any raw value rather
/// than rejecting zero.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(i32);

impl CategoryId {
    /// Identity of an entity the backend has not persisted or not named.
    pub const UNASSIGNED: CategoryId = CategoryId(0);

    /// Wraps a raw backend identifier.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// `true` once the backend has assigned a real identity.
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for CategoryId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<CategoryId> for i32 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl PartialEq<i32> for CategoryId {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<CategoryId> for i32 {
    fn eq(&self, other: &CategoryId) -> bool {
        *self == other.0
    }
}
