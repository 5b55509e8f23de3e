use sea_orm::DatabaseConnection;

use crate::errors::{Error, Message};
use crate::middlewares::v1::auth::Auth;

#[::tracing::instrument(skip(db, auth), fields(user_id = %auth.user.id))]
pub async fn delete(db: &DatabaseConnection, auth: &Auth, id: i32) -> Result<Message, Error> {
    let bucketlist = super::show::find(db, auth, id).await?;
    bucketlist.remove(db).await?;

    ::tracing::info!("Bucketlist deleted");

    Ok(Message::new(format!("bucketlist {id} deleted successfully")))
}
