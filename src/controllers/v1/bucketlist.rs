use actix_web::web::{Data, Json, Path, Query};
use actix_web::{HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use crate::errors::{Error, Message};
use crate::middlewares::v1::auth::Auth;
use crate::requests::FormFields;
use crate::requests::v1::bucketlist::{BucketlistPaginationRequest, BucketlistRequest};
use crate::responses::v1::bucketlist::{Bucketlist, BucketlistPaginationResponse};
use crate::services;

/// Store new bucketlist
///
/// Name is trimmed before it is stored.
#[utoipa::path(
    tag = "Bucketlist",
    security(("token" = [])),
    request_body(content = BucketlistRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Created", body = Bucketlist),
        (status = 400, description = "Name missing or empty", body = Message),
        (status = 401, description = "Unauthorized", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[post("/bucketlists/")]
pub async fn store(
    auth: Auth,
    db: Data<DatabaseConnection>,
    FormFields(request): FormFields<BucketlistRequest>,
) -> Result<impl Responder, Error> {
    let response = services::v1::bucketlist::store::store(&db, &auth, request).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Paginate own bucketlists
#[utoipa::path(
    tag = "Bucketlist",
    security(("token" = [])),
    params(BucketlistPaginationRequest),
    responses(
        BucketlistPaginationResponse,
        (status = 400, description = "Invalid paging", body = Message),
        (status = 401, description = "Unauthorized", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[get("/bucketlists/")]
pub async fn paginate(
    auth: Auth,
    db: Data<DatabaseConnection>,
    Query(request): Query<BucketlistPaginationRequest>,
) -> Result<impl Responder, Error> {
    let response = services::v1::bucketlist::paginate::paginate(&db, &auth, request).await?;
    Ok(Json(response))
}

/// Show bucketlist by id
///
/// Fail if bucketlist not found or owned by someone else
#[utoipa::path(
    tag = "Bucketlist",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Bucketlist id")),
    responses(
        Bucketlist,
        (status = 401, description = "Unauthorized", body = Message),
        (status = 404, description = "Not found", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[get("/bucketlists/{id}")]
pub async fn show(
    auth: Auth,
    db: Data<DatabaseConnection>,
    id: Path<i32>,
) -> Result<impl Responder, Error> {
    let response = services::v1::bucketlist::show::show(&db, &auth, id.into_inner()).await?;
    Ok(Json(response))
}

/// Rename bucketlist by id
///
/// Fail if bucketlist not found or owned by someone else
#[utoipa::path(
    tag = "Bucketlist",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Bucketlist id")),
    request_body(content = BucketlistRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        Bucketlist,
        (status = 400, description = "Name missing or empty", body = Message),
        (status = 401, description = "Unauthorized", body = Message),
        (status = 404, description = "Not found", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[put("/bucketlists/{id}")]
pub async fn update(
    auth: Auth,
    db: Data<DatabaseConnection>,
    id: Path<i32>,
    FormFields(request): FormFields<BucketlistRequest>,
) -> Result<impl Responder, Error> {
    let response =
        services::v1::bucketlist::update::update(&db, &auth, id.into_inner(), request).await?;
    Ok(Json(response))
}

/// Delete bucketlist by id
///
/// Fail if bucketlist not found or owned by someone else
#[utoipa::path(
    tag = "Bucketlist",
    security(("token" = [])),
    params(("id" = i32, Path, description = "Bucketlist id")),
    responses(
        Message,
        (status = 401, description = "Unauthorized", body = Message),
        (status = 404, description = "Not found", body = Message),
        (status = 500, description = "Internal server error", body = Message),
    )
)]
#[delete("/bucketlists/{id}")]
pub async fn delete(
    auth: Auth,
    db: Data<DatabaseConnection>,
    id: Path<i32>,
) -> Result<impl Responder, Error> {
    let response = services::v1::bucketlist::delete::delete(&db, &auth, id.into_inner()).await?;
    Ok(response)
}
