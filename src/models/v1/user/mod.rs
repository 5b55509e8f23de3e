use async_trait::async_trait;
use sea_orm::prelude::*;
use sea_orm::{DatabaseConnection, Set, SqlErr};
use thiserror::Error;

use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};
use crate::helpers::now;
use crate::responses::v1::user::User;

/// Failure reported by a [`UserStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("User already exists")]
    Conflict,
    #[error("User store failure: {0}")]
    Database(#[from] DbErr),
}

/// Persistence capability the registration flow depends on
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Persist a new user; `password` must already be hashed.
    ///
    /// Reports [`StoreError::Conflict`] when the email is taken, including
    /// when another registration won a race after `exists` returned false.
    async fn create(&self, email: &str, password: String) -> Result<Model, StoreError>;
}

impl Model {
    pub async fn find_by_id(db: &DatabaseConnection, id: Uuid) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Exact, case-sensitive lookup
    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Email.eq(email)).one(db).await
    }

    pub async fn email_exists(db: &DatabaseConnection, email: &str) -> Result<bool, DbErr> {
        let count = Entity::find()
            .filter(Column::Email.eq(email))
            .count(db)
            .await?;

        Ok(count > 0)
    }
}

#[async_trait]
impl UserStore for DatabaseConnection {
    async fn exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(Model::email_exists(self, email).await?)
    }

    async fn create(&self, email: &str, password: String) -> Result<Model, StoreError> {
        let timestamp = now();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.to_string()),
            password: Set(password),
            created_at: Set(timestamp),
            updated_at: Set(timestamp),
        };

        model.insert(self).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::Conflict,
            _ => StoreError::Database(e),
        })
    }
}

impl From<Model> for User {
    fn from(val: Model) -> Self {
        User {
            id: val.id,
            email: val.email,
            created_at: val.created_at,
        }
    }
}

impl From<&Model> for User {
    fn from(val: &Model) -> Self {
        User {
            id: val.id,
            email: val.email.clone(),
            created_at: val.created_at,
        }
    }
}
