use sea_orm::DatabaseConnection;

use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::bucketlist::BucketlistRequest;
use crate::responses::v1::bucketlist::Bucketlist;

#[::tracing::instrument(skip(db, auth, request), fields(user_id = %auth.user.id))]
pub async fn update(
    db: &DatabaseConnection,
    auth: &Auth,
    id: i32,
    request: BucketlistRequest,
) -> Result<Bucketlist, Error> {
    let name = request.validate()?;
    let bucketlist = super::show::find(db, auth, id).await?;
    let bucketlist = bucketlist.rename(db, name).await?;

    ::tracing::info!("Bucketlist renamed");

    Ok(bucketlist.into())
}
