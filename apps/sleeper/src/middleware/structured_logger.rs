//! Access log: one `request_completed` event per request.
//!
//! The event carries the matched route pattern (`/get/{id}`, not the raw
//! path) so log queries group requests per endpoint, and the trace id from
//! `trace_ctx` so it joins the error lines of the same request.

use std::future::{ready, Ready};
use std::time::Instant;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::Error as ActixError;
use futures_util::future::LocalBoxFuture;
use tracing::{error, info, warn, Level};

use crate::trace_ctx;

/// Route label for requests no resource matched.
const UNMATCHED_ROUTE: &str = "<unmatched>";

pub struct StructuredLogger;

impl<S, B> Transform<S, ServiceRequest> for StructuredLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = StructuredLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(StructuredLoggerMiddleware { service }))
    }
}

pub struct StructuredLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for StructuredLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let method = req.method().clone();

        let fut = self.service.call(req);

        Box::pin(async move {
            let result = fut.await;

            let (status, route) = match &result {
                Ok(res) => (res.status(), route_of(res)),
                Err(err) => (
                    err.as_response_error().status_code(),
                    UNMATCHED_ROUTE.to_string(),
                ),
            };

            let completed = Completed {
                method: method.as_str(),
                route: &route,
                status,
                duration_us: start.elapsed().as_micros() as u64,
                // polled inside the RequestTrace scope
                trace_id: trace_ctx::trace_id(),
            };
            completed.emit();

            result
        })
    }
}

fn route_of<B>(res: &ServiceResponse<B>) -> String {
    res.request()
        .match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}

/// Level for an access log line: 5xx error, 4xx warn, everything else info.
pub fn level_for(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

struct Completed<'a> {
    method: &'a str,
    route: &'a str,
    status: StatusCode,
    duration_us: u64,
    trace_id: String,
}

impl Completed<'_> {
    fn emit(&self) {
        let Completed {
            method,
            route,
            status,
            duration_us,
            trace_id,
        } = self;
        let status_code = status.as_u16();

        macro_rules! completed {
            ($lvl:ident) => {
                $lvl!(
                    service = "sleeper",
                    http.method = %method,
                    http.route = %route,
                    http.status_code = status_code,
                    duration_us = *duration_us,
                    trace_id = %trace_id,
                    "request_completed"
                )
            };
        }

        let level = level_for(*status);
        if level == Level::ERROR {
            completed!(error);
        } else if level == Level::WARN {
            completed!(warn);
        } else {
            completed!(info);
        }
    }
}
