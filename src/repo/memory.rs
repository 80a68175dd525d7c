use std::collections::VecDeque;

use super::{StoreError, TodoRepository};
use crate::domain::todo::{Todo, TodoId};

#[derive(Default)]
pub struct InMemoryTodoRepo {
    items: VecDeque<Todo>,
    // Highest id handed out so far; only ever moves forward, so deleting a
    // task never frees its id for reuse.
    next_id: TodoId,
}

impl InMemoryTodoRepo {
    pub fn with_seed(seed: impl IntoIterator<Item = Todo>) -> Self {
        let mut repo = Self::default();
        for todo in seed {
            repo.next_id = repo.next_id.max(todo.id);
            repo.items.push_back(todo);
        }
        repo
    }
}

impl TodoRepository for InMemoryTodoRepo {
    fn all(&self) -> Vec<Todo> {
        self.items.iter().cloned().collect()
    }

    fn add(&mut self, text: &str) -> Result<Todo, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyText);
        }
        self.next_id += 1;
        let todo = Todo::new(self.next_id, text);
        self.items.push_back(todo.clone());
        Ok(todo)
    }

    fn toggle(&mut self, id: TodoId) -> Result<Todo, StoreError> {
        for todo in &mut self.items {
            if todo.id == id {
                todo.completed = !todo.completed;
                return Ok(todo.clone());
            }
        }
        Err(StoreError::NotFound(id))
    }

    fn remove(&mut self, id: TodoId) -> Result<Vec<Todo>, StoreError> {
        let pos = self
            .items
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.items.remove(pos);
        Ok(self.all())
    }
}
