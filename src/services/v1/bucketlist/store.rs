use sea_orm::DatabaseConnection;

use crate::entities::v1::bucketlists::Model;
use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::bucketlist::BucketlistRequest;
use crate::responses::v1::bucketlist::Bucketlist;

#[::tracing::instrument(skip(db, auth, request), fields(user_id = %auth.user.id))]
pub async fn store(
    db: &DatabaseConnection,
    auth: &Auth,
    request: BucketlistRequest,
) -> Result<Bucketlist, Error> {
    let name = request.validate()?;
    let bucketlist = Model::store(db, auth.user.id, name).await?;

    ::tracing::info!(bucketlist_id = bucketlist.id, "Bucketlist created");

    Ok(bucketlist.into())
}
