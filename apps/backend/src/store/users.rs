use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use crate::auth::claims::UserRole;

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

#[derive(Debug, Default)]
pub struct Users {
    rows: DashMap<i64, User>,
    next_id: AtomicI64,
}

impl Users {
    pub fn insert(&self, email: &str, password_hash: &str, role: UserRole) -> User {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let user = User {
            id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            role,
        };
        self.rows.insert(id, user.clone());
        user
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.rows.get(&id).map(|r| r.value().clone())
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.rows
            .iter()
            .find(|r| r.value().email == email)
            .map(|r| r.value().clone())
    }

    /// Apply an in-place update, returning the updated row.
    pub fn update<F>(&self, id: i64, f: F) -> Option<User>
    where
        F: FnOnce(&mut User),
    {
        self.rows.get_mut(&id).map(|mut r| {
            f(r.value_mut());
            r.value().clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Users;
    use crate::auth::claims::UserRole;

    #[test]
    fn ids_are_sequential_and_lookups_work() {
        let users = Users::default();
        let a = users.insert("a@b.com", "hash-a", UserRole::User);
        let b = users.insert("b@b.com", "hash-b", UserRole::Admin);

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(users.get(1).unwrap().email, "a@b.com");
        assert_eq!(users.find_by_email("b@b.com").unwrap().id, 2);
        assert!(users.find_by_email("c@b.com").is_none());
    }

    #[test]
    fn update_changes_the_stored_row() {
        let users = Users::default();
        let user = users.insert("a@b.com", "hash", UserRole::User);

        users.update(user.id, |u| u.role = UserRole::Admin);
        assert_eq!(users.get(user.id).unwrap().role, UserRole::Admin);
    }
}
