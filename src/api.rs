use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{controllers, errors, requests, responses};

/// Registers the `token` bearer scheme referenced by protected paths
pub struct Authentication;

impl Modify for Authentication {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .description(Some("Access token returned by /api/v1/auth/login"))
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Bucketlist API"),
    tags(
        (name = "Auth"),
        (name = "Bucketlist"),
        (name = "Health"),
    ),
    modifiers(&Authentication),
    paths(
        controllers::v1::auth::register,
        controllers::v1::auth::login,
        controllers::v1::auth::logout,

        controllers::v1::bucketlist::store,
        controllers::v1::bucketlist::paginate,
        controllers::v1::bucketlist::show,
        controllers::v1::bucketlist::update,
        controllers::v1::bucketlist::delete,

        controllers::health::health,
        controllers::health::health_db,
    ),
    components(schemas(
        errors::Message,

        requests::v1::auth::RegisterRequest,
        requests::v1::auth::LoginRequest,
        requests::v1::bucketlist::BucketlistRequest,

        responses::v1::auth::Registered,
        responses::v1::auth::LoggedIn,
        responses::v1::user::User,
        responses::v1::bucketlist::Bucketlist,
        responses::v1::bucketlist::BucketlistPaginationResponse,

        controllers::health::LivenessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
