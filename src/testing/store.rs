use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::entities::v1::users::Model;
use crate::helpers::now;
use crate::models::v1::user::{StoreError, UserStore};

/// [`UserStore`] kept in a concurrent map keyed by email
///
/// Counts successful writes so tests can assert that a rejected or conflicting
/// registration never reached `create`.
#[derive(Default)]
pub struct MemoryUserStore {
    users: DashMap<String, Model>,
    creates: AtomicUsize,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Number of users written so far
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    /// Stored (hashed) password of `email`
    pub fn password_of(&self, email: &str) -> Option<String> {
        self.users.get(email).map(|user| user.password.clone())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.users.contains_key(email))
    }

    async fn create(&self, email: &str, password: String) -> Result<Model, StoreError> {
        match self.users.entry(email.to_string()) {
            Entry::Occupied(_) => Err(StoreError::Conflict),
            Entry::Vacant(entry) => {
                let timestamp = now();
                let user = Model {
                    id: Uuid::new_v4(),
                    email: email.to_string(),
                    password,
                    created_at: timestamp,
                    updated_at: timestamp,
                };

                entry.insert(user.clone());
                self.creates.fetch_add(1, Ordering::SeqCst);

                Ok(user)
            }
        }
    }
}
