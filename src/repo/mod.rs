use thiserror::Error;

use crate::domain::todo::{Todo, TodoId};

pub mod memory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("no task with id {0}")]
    NotFound(TodoId),
}

/// Exclusive owner of the task collection. Operations either fully succeed
/// or leave the collection untouched.
pub trait TodoRepository {
    fn all(&self) -> Vec<Todo>;
    fn add(&mut self, text: &str) -> Result<Todo, StoreError>;
    fn toggle(&mut self, id: TodoId) -> Result<Todo, StoreError>;
    fn remove(&mut self, id: TodoId) -> Result<Vec<Todo>, StoreError>;
}
