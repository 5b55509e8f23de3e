pub mod v1;

use actix_web::dev::Payload;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::errors::Error;

/// Urlencoded body fields, decoded whatever the `Content-Type` says
///
/// A request without a body yields `T` with every optional field absent, so
/// handlers can report exactly which fields are missing.
pub struct FormFields<T>(pub T);

impl<T> FormFields<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned + 'static> FromRequest for FormFields<T> {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await?;

            serde_urlencoded::from_bytes::<T>(&body)
                .map(FormFields)
                .map_err(|e| Error::bad_request(format!("Invalid form body: {e}")).into())
        })
    }
}
