//! Request-id middleware for log correlation.
//!
//! Each inbound request gets a fresh UUID. The id is attached to a
//! tracing span covering the handler, so every log record emitted while
//! serving the request carries it, and the same value is returned to the
//! client in an `x-request-id` response header.

use std::task::{Context, Poll};

use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::Error;
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware attaching a per-request UUID to logs and responses.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::RequestId;
///
/// let app = App::new().wrap(RequestId);
/// ```
#[derive(Clone)]
pub struct RequestId;

impl<S, B> Transform<S, ServiceRequest> for RequestId
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestIdMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdMiddleware { service }))
    }
}

/// Service wrapper produced by [`RequestId`].
pub struct RequestIdMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %req.method(),
            path = %req.path(),
        );
        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut res = fut.await?;
                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    res.response_mut()
                        .headers_mut()
                        .insert(HeaderName::from_static("x-request-id"), value);
                }
                Ok(res)
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test as actix_test, web, App, HttpResponse};

    use super::*;

    #[actix_web::test]
    async fn adds_request_id_header() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestId)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/").to_request(),
        )
        .await;

        let header = res
            .headers()
            .get("x-request-id")
            .expect("request id header present")
            .to_str()
            .expect("header is ascii");
        Uuid::parse_str(header).expect("header is a UUID");
    }

    #[actix_web::test]
    async fn each_request_gets_a_fresh_id() {
        let app = actix_test::init_service(
            App::new()
                .wrap(RequestId)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let mut seen = Vec::new();
        for _ in 0..2 {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri("/").to_request(),
            )
            .await;
            seen.push(
                res.headers()
                    .get("x-request-id")
                    .expect("request id header present")
                    .to_str()
                    .expect("header is ascii")
                    .to_owned(),
            );
        }

        assert_ne!(seen[0], seen[1]);
    }
}
