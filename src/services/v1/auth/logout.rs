use sea_orm::DatabaseConnection;

use crate::entities::v1::tokens::Model;
use crate::errors::{Error, Message};
use crate::middlewares::v1::auth::Auth;
use crate::responses::v1::auth::LOGGED_OUT;

/// Revoke the token the request was made with; other sessions stay valid
#[::tracing::instrument(skip(auth, db), fields(user_id = %auth.user.id, token_id = %auth.id))]
pub async fn logout(auth: Auth, db: &DatabaseConnection) -> Result<Message, Error> {
    Model::revoke(db, auth.id).await?;

    ::tracing::info!("User logged out");

    Ok(Message::new(LOGGED_OUT))
}
