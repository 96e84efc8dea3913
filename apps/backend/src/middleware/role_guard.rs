//! Authorization middleware: declarative role gates.
//!
//! Wire a gate after `JwtExtract`; it checks the verified claims already in
//! request extensions against its allowed set. A request that skipped the
//! authenticate stage has no claims and gets a 401, never a 403 — authorize
//! without authenticate is not a reachable state.

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::error::ResponseError;
use actix_web::{Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::AccessClaims;
use crate::auth::role::{authorize, Role};
use crate::error::AppError;

/// One of the four gates used by the platform.
pub struct RequireRole {
    allowed: &'static [Role],
}

impl RequireRole {
    pub fn admin() -> Self {
        Self {
            allowed: &[Role::Admin],
        }
    }

    pub fn professor() -> Self {
        Self {
            allowed: &[Role::Professor],
        }
    }

    pub fn aluno() -> Self {
        Self {
            allowed: &[Role::Aluno],
        }
    }

    pub fn professor_or_admin() -> Self {
        Self {
            allowed: &[Role::Professor, Role::Admin],
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service,
            allowed: self.allowed,
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: S,
    allowed: &'static [Role],
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let role = req.extensions().get::<AccessClaims>().map(|c| c.role);

        // Pure predicate over already-verified claims; never touches the store.
        let gate_result = match role {
            Some(role) => authorize(role, self.allowed),
            None => Err(AppError::unauthorized_missing_bearer()),
        };

        match gate_result {
            Ok(()) => {
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_boxed_body) })
            }
            Err(e) => {
                let response = e.error_response();
                Box::pin(async move { Ok(req.into_response(response)) })
            }
        }
    }
}
