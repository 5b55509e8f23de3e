use actix_web::web::Data;
use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::metrics::AppMetrics;
use crate::security::password::PasswordHasher;
use crate::testing::setup;

/// Application state the router expects, built around `db`
pub struct State {
    pub db: Data<DatabaseConnection>,
    pub hasher: Data<PasswordHasher>,
    pub auth: Data<AuthConfig>,
    pub metrics: Data<AppMetrics>,
}

impl State {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db: Data::new(db),
            hasher: Data::new(setup::password_hasher().expect("Failed to build test hasher")),
            auth: Data::new(setup::auth_config()),
            metrics: Data::new(AppMetrics::new()),
        }
    }
}

/// Build an `actix_web::test` service with the full router on a fresh
/// in-memory database. Evaluates to `(service, db)`.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::setup::database().await;
        let state = $crate::testing::instance::State::new(db.clone());
        let app = ::actix_web::App::new()
            .app_data(state.db)
            .app_data(state.hasher)
            .app_data(state.auth)
            .app_data(state.metrics)
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
