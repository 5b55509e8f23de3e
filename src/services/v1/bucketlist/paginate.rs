use sea_orm::DatabaseConnection;

use crate::entities::v1::bucketlists::Model;
use crate::errors::Error;
use crate::middlewares::v1::auth::Auth;
use crate::requests::v1::bucketlist::BucketlistPaginationRequest;
use crate::responses::v1::bucketlist::BucketlistPaginationResponse;

#[::tracing::instrument(skip(db, auth), fields(user_id = %auth.user.id))]
pub async fn paginate(
    db: &DatabaseConnection,
    auth: &Auth,
    request: BucketlistPaginationRequest,
) -> Result<BucketlistPaginationResponse, Error> {
    request.validate()?;

    let limit = request.limit();
    let offset = request.offset()?;
    let (bucketlists, total) =
        Model::page(db, auth.user.id, request.search(), limit, offset).await?;

    Ok(BucketlistPaginationResponse {
        total,
        page: request.page(),
        pages: total.div_ceil(limit),
        data: bucketlists.into_iter().map(Into::into).collect(),
    })
}
