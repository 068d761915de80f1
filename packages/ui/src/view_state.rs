//! Immutable view state for fetched collections.
//!
//! A list view never edits its rows in place. Each fetch produces a fresh
//! [`ListState`], and a successful mutation restarts the fetch.

use std::sync::Arc;

use crate::client::ClientError;

#[derive(Clone, Debug, PartialEq)]
pub enum ListState<T> {
    Loading,
    Ready(Arc<[T]>),
    Failed(String),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Loading
    }
}

impl<T> ListState<T> {
    /// Rows to render; empty unless the fetch succeeded.
    pub fn items(&self) -> &[T] {
        match self {
            ListState::Ready(items) => items,
            _ => &[],
        }
    }
}

impl<T> From<Result<Vec<T>, ClientError>> for ListState<T> {
    fn from(result: Result<Vec<T>, ClientError>) -> Self {
        match result {
            Ok(items) => ListState::Ready(items.into()),
            Err(e) => {
                tracing::error!("Failed to load collection: {}", e);
                ListState::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_ready_state_exposes_items() {
        let state = ListState::from(Ok::<_, ClientError>(vec![1, 2, 3]));
        assert_eq!(state.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_failed_state_has_no_items() {
        let state: ListState<i32> = ListState::from(Err(ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to list employees".to_string(),
        }));
        assert!(state.items().is_empty());
        assert_eq!(
            state,
            ListState::Failed("Failed to list employees (500 Internal Server Error)".to_string())
        );
    }

    #[test]
    fn test_default_is_loading() {
        assert_eq!(ListState::<i32>::default(), ListState::Loading);
    }
}
