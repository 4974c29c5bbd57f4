//! Middleware turning handler panics into the uniform 500 response.
//!
//! Actix would otherwise drop the connection when a handler panics. The
//! panic is logged inside the request span and the client receives
//! `{"success": false, "error": "Something went wrong!"}`.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, ResponseError};
use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::Error as DomainError;

/// Client-facing message for any uncaught handler failure.
pub const PANIC_MESSAGE: &str = "Something went wrong!";

/// Catches panics raised while serving a request.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::middleware::CatchPanic;
///
/// let _app = App::new().wrap(CatchPanic);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CatchPanic;

impl<S, B> Transform<S, ServiceRequest> for CatchPanic
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = CatchPanicMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchPanicMiddleware { service }))
    }
}

/// Service wrapper produced by [`CatchPanic`].
pub struct CatchPanicMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CatchPanicMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request = req.request().clone();
        let fut = AssertUnwindSafe(self.service.call(req)).catch_unwind();
        Box::pin(async move {
            match fut.await {
                Ok(result) => result.map(ServiceResponse::map_into_left_body),
                Err(payload) => {
                    error!(panic = panic_message(payload.as_ref()), "request handler panicked");
                    let response = DomainError::internal(PANIC_MESSAGE).error_response();
                    Ok(ServiceResponse::new(request, response).map_into_right_body())
                }
            }
        })
    }
}

/// Extract the text of a panic payload raised with `panic!` or `expect`.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&'static str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
