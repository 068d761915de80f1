//! Errors raised by [`crate::DirectoryStore`] backends.

use std::fmt;

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The resource a store error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Area,
    Employee,
}

impl Entity {
    /// Capitalised label, used at the start of user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Entity::Area => "Area",
            Entity::Employee => "Employee",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Area => write!(f, "area"),
            Entity::Employee => write!(f, "employee"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this id exists.
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i32 },

    /// An employee write referenced an area that does not exist.
    #[error("area {0} does not exist")]
    UnknownArea(i32),

    /// The area is still referenced by at least one employee.
    #[error("area {id} is still assigned to one or more employees")]
    AreaInUse { id: i32 },

    /// Failure reported by the underlying storage engine.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(entity: Entity, id: i32) -> Self {
        StoreError::NotFound { entity, id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::not_found(Entity::Employee, 7).to_string(),
            "employee 7 not found"
        );
        assert_eq!(StoreError::UnknownArea(3).to_string(), "area 3 does not exist");
        assert!(StoreError::not_found(Entity::Area, 1).is_not_found());
        assert!(!StoreError::AreaInUse { id: 1 }.is_not_found());
    }
}
