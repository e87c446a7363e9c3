use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;
use time::OffsetDateTime;

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: i64,
    pub todo_id: i64,
    pub author_id: i64,
    pub contents: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Default)]
pub struct Comments {
    rows: DashMap<i64, Comment>,
    next_id: AtomicI64,
}

impl Comments {
    pub fn insert(&self, todo_id: i64, author_id: i64, contents: &str) -> Comment {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let comment = Comment {
            id,
            todo_id,
            author_id,
            contents: contents.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.rows.insert(id, comment.clone());
        comment
    }

    pub fn get(&self, id: i64) -> Option<Comment> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    /// Comments on one todo, oldest first.
    pub fn list_for_todo(&self, todo_id: i64) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .rows
            .iter()
            .filter(|r| r.value().todo_id == todo_id)
            .map(|r| r.value().clone())
            .collect();
        comments.sort_by_key(|c| c.id);
        comments
    }

    pub fn remove(&self, id: i64) -> Option<Comment> {
        self.rows.remove(&id).map(|(_, comment)| comment)
    }
}
