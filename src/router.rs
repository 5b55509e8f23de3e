use actix_web::web::{self, QueryConfig, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::errors::Error;

/// Mount every route. Expects the database, hasher, auth config and metrics
/// to be registered as app data.
pub fn route(app: &mut ServiceConfig) {
    // Malformed query strings answer in the same `{"message"}` shape as bodies
    app.app_data(QueryConfig::default().error_handler(|error, _| {
        Error::bad_request(format!("Invalid query string: {error}")).into()
    }));

    // Auth
    app.service(controllers::v1::auth::register);
    app.service(controllers::v1::auth::login);
    app.service(controllers::v1::auth::logout);
    // Bucketlist
    app.service(controllers::v1::bucketlist::store);
    app.service(controllers::v1::bucketlist::paginate);
    app.service(controllers::v1::bucketlist::show);
    app.service(controllers::v1::bucketlist::update);
    app.service(controllers::v1::bucketlist::delete);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Bucketlist", "/api.json"),
        Definition::openapi(),
    )]));
}
