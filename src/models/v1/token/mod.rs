use std::time::Duration;

use chrono::NaiveDateTime;
use sea_orm::prelude::*;
use sea_orm::{DatabaseConnection, Set};

use crate::entities::v1::tokens::{ActiveModel, Column, Entity, Model};
use crate::entities::v1::users;
use crate::helpers::now;

impl Model {
    /// Store a fresh token for `user_id` that expires after `lifetime`
    pub async fn issue(
        db: &DatabaseConnection,
        user_id: Uuid,
        lifetime: Duration,
    ) -> Result<Self, DbErr> {
        let created_at = now();
        let expired_at = chrono::Duration::from_std(lifetime)
            .ok()
            .and_then(|lifetime| created_at.checked_add_signed(lifetime));

        ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            expired_at: Set(expired_at),
            created_at: Set(created_at),
        }
        .insert(db)
        .await
    }

    /// Token row together with its owner
    pub async fn find_with_user(
        db: &DatabaseConnection,
        id: Uuid,
    ) -> Result<Option<(Self, users::Model)>, DbErr> {
        let found = Entity::find_by_id(id)
            .find_also_related(users::Entity)
            .one(db)
            .await?;

        Ok(found.and_then(|(token, user)| user.map(|user| (token, user))))
    }

    pub fn is_expired_at(&self, instant: NaiveDateTime) -> bool {
        matches!(self.expired_at, Some(expired_at) if expired_at <= instant)
    }

    /// The string handed to clients as the bearer credential
    pub fn bearer(&self) -> String {
        self.id.simple().to_string()
    }

    /// Inverse of [`Model::bearer`]; `None` when `token` is not a token id
    pub fn parse_bearer(token: &str) -> Option<Uuid> {
        Uuid::try_parse(token).ok()
    }

    pub async fn revoke(db: &DatabaseConnection, id: Uuid) -> Result<(), DbErr> {
        Entity::delete_by_id(id).exec(db).await?;

        Ok(())
    }

    /// Drop every token that expired before now
    pub async fn purge_expired(db: &DatabaseConnection) -> Result<u64, DbErr> {
        let result = Entity::delete_many()
            .filter(Column::ExpiredAt.lte(now()))
            .exec(db)
            .await?;

        Ok(result.rows_affected)
    }
}
