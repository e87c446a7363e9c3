//! In-memory persistence.
//!
//! Concurrent-map tables with atomic id counters. Deliberately thin: the
//! interesting behavior of this service lives in the request pipeline, and
//! the store only has to be safe to share across request executions.

pub mod comments;
pub mod managers;
pub mod todos;
pub mod users;

pub use comments::{Comment, Comments};
pub use managers::{Manager, Managers};
pub use todos::{Todo, Todos};
pub use users::{User, Users};

#[derive(Debug, Default)]
pub struct Store {
    pub users: Users,
    pub todos: Todos,
    pub comments: Comments,
    pub managers: Managers,
}
