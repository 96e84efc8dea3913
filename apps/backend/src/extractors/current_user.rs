use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::AccessClaims;
use crate::error::AppError;

/// Verified claims of the caller, extracted from request extensions where
/// the `JwtExtract` middleware stored them.
///
/// No store lookup happens here: the claims already carry the role and its
/// attribute, which is all downstream authorization needs.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AccessClaims);

impl CurrentUser {
    pub fn into_claims(self) -> AccessClaims {
        self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<AccessClaims>().cloned();
        std::future::ready(
            claims
                .map(CurrentUser)
                .ok_or_else(AppError::unauthorized_missing_bearer),
        )
    }
}
