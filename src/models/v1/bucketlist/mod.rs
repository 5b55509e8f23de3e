use sea_orm::prelude::*;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{DatabaseConnection, QueryOrder, QuerySelect, Set};

use crate::entities::v1::bucketlists::{ActiveModel, Column, Entity, Model};
use crate::helpers::now;
use crate::responses::v1::bucketlist::Bucketlist;

/// `LIKE` pattern matching `search` literally anywhere in the value
fn substring_pattern(search: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

impl Model {
    /// Bucketlist `id` if and only if it belongs to `owner`
    pub async fn find_owned(
        db: &DatabaseConnection,
        id: i32,
        owner: Uuid,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id)
            .filter(Column::CreatedBy.eq(owner))
            .one(db)
            .await
    }

    pub async fn store<T: ToString>(
        db: &DatabaseConnection,
        owner: Uuid,
        name: T,
    ) -> Result<Self, DbErr> {
        let timestamp = now();

        ActiveModel {
            name: Set(name.to_string()),
            created_by: Set(owner),
            date_created: Set(timestamp),
            date_modified: Set(timestamp),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn rename<T: ToString>(&self, db: &DatabaseConnection, name: T) -> Result<Self, DbErr> {
        let mut model = ActiveModel::from(self.clone());

        model.name = Set(name.to_string());
        model.date_modified = Set(now());
        model.update(db).await
    }

    pub async fn remove(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        Entity::delete_by_id(self.id).exec(db).await?;

        Ok(())
    }

    /// One page of `owner`'s bucketlists ordered by id, plus the total match count
    pub async fn page(
        db: &DatabaseConnection,
        owner: Uuid,
        search: Option<&str>,
        limit: u64,
        offset: u64,
    ) -> Result<(Vec<Self>, u64), DbErr> {
        let mut query = Entity::find().filter(Column::CreatedBy.eq(owner));

        if let Some(search) = search {
            query = query.filter(Column::Name.like(substring_pattern(search)));
        }

        let total = query.clone().count(db).await?;
        let rows = query
            .order_by_asc(Column::Id)
            .limit(limit)
            .offset(offset)
            .all(db)
            .await?;

        Ok((rows, total))
    }
}

impl From<Model> for Bucketlist {
    fn from(val: Model) -> Self {
        Bucketlist {
            id: val.id,
            name: val.name,
            date_created: val.date_created,
            date_modified: val.date_modified,
            created_by: val.created_by,
        }
    }
}

impl From<&Model> for Bucketlist {
    fn from(val: &Model) -> Self {
        Bucketlist::from(val.clone())
    }
}
