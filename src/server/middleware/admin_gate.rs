//! Admin gate middleware
//!
//! Wraps the administrative route scope. Every request is resolved to a
//! principal from its bearer token and checked against the access gate.
//! Denied requests are redirected, never answered with a plain 403.

use crate::server::AppState;
use crate::server::middleware::helpers::bearer_token;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header;
use actix_web::{HttpMessage, HttpResponse, web};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Admin gate for Actix-web
pub struct AdminGate;

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AdminGateService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminGateService {
            service: Rc::new(service),
        }))
    }
}

/// Service implementation for the admin gate
pub struct AdminGateService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AdminGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let state = req
                .app_data::<web::Data<AppState>>()
                .cloned()
                .ok_or_else(|| {
                    actix_web::error::ErrorInternalServerError("Missing application state")
                })?;

            // A bad or missing token yields no principal, which the gate denies
            let principal = match bearer_token(req.headers()) {
                Some(token) => match state.auth.authenticate_token(&token).await {
                    Ok(user) => Some(user),
                    Err(e) => {
                        debug!("Token rejected at admin gate: {}", e);
                        None
                    }
                },
                None => None,
            };

            let decision = state
                .auth
                .rbac()
                .check_admin_access(principal.as_ref())
                .await
                .map_err(actix_web::error::ErrorInternalServerError)?;

            if !decision.is_allowed() {
                warn!(path = %req.path(), "Admin access denied, redirecting");
                let location = state.auth.config().denied_redirect.clone();
                let (req, _payload) = req.into_parts();
                let res = HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, location))
                    .finish()
                    .map_into_right_body();
                return Ok(ServiceResponse::new(req, res));
            }

            if let Some(user) = principal {
                req.extensions_mut().insert(user);
            }

            service
                .call(req)
                .await
                .map(|res| res.map_into_left_body())
        })
    }
}
