use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

/// A user assigned to help with a todo.
#[derive(Debug, Clone)]
pub struct Manager {
    pub id: i64,
    pub todo_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Default)]
pub struct Managers {
    rows: DashMap<i64, Manager>,
    next_id: AtomicI64,
}

impl Managers {
    pub fn insert(&self, todo_id: i64, user_id: i64) -> Manager {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let manager = Manager {
            id,
            todo_id,
            user_id,
        };
        self.rows.insert(id, manager.clone());
        manager
    }

    pub fn get(&self, id: i64) -> Option<Manager> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    pub fn list_for_todo(&self, todo_id: i64) -> Vec<Manager> {
        let mut managers: Vec<Manager> = self
            .rows
            .iter()
            .filter(|r| r.value().todo_id == todo_id)
            .map(|r| r.value().clone())
            .collect();
        managers.sort_by_key(|m| m.id);
        managers
    }

    pub fn exists(&self, todo_id: i64, user_id: i64) -> bool {
        self.rows
            .iter()
            .any(|r| r.value().todo_id == todo_id && r.value().user_id == user_id)
    }

    pub fn remove(&self, id: i64) -> Option<Manager> {
        self.rows.remove(&id).map(|(_, manager)| manager)
    }
}
