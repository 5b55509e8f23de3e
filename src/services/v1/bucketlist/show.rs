use sea_orm::DatabaseConnection;

use crate::entities::v1::bucketlists::Model;
use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::bucketlist::Bucketlist;

pub const NOT_FOUND: &str = "Bucketlist not found.";

/// Owned bucketlist `id`, 404 otherwise
pub(super) async fn find(db: &DatabaseConnection, auth: &Auth, id: i32) -> Result<Model, Error> {
    Model::find_owned(db, id, auth.user.id)
        .await?
        .ok_or_else(|| Error::not_found(NOT_FOUND))
}

#[::tracing::instrument(skip(db, auth), fields(user_id = %auth.user.id))]
pub async fn show(db: &DatabaseConnection, auth: &Auth, id: i32) -> Result<Bucketlist, Error> {
    Ok(find(db, auth, id).await?.into())
}
