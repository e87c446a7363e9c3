use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub contents: String,
    pub owner_id: i64,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default)]
pub struct Todos {
    rows: DashMap<i64, Todo>,
    next_id: AtomicI64,
}

impl Todos {
    pub fn insert(&self, owner_id: i64, title: &str, contents: &str) -> Todo {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let todo = Todo {
            id,
            title: title.to_string(),
            contents: contents.to_string(),
            owner_id,
            created_at: OffsetDateTime::now_utc(),
        };
        self.rows.insert(id, todo.clone());
        todo
    }

    pub fn get(&self, id: i64) -> Option<Todo> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    /// All todos, newest first.
    pub fn list(&self) -> Vec<Todo> {
        let mut todos: Vec<Todo> = self.rows.iter().map(|r| r.value().clone()).collect();
        todos.sort_by_key(|t| std::cmp::Reverse(t.id));
        todos
    }
}
