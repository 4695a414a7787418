//! HTTP server of the GraphQL API.

use std::{sync::Arc, time};

use axum::{
    extract::MatchedPath,
    routing::{on, MethodFilter},
    Extension, Router,
};
use axum_client_ip::InsecureClientIp;
use derive_more::{Display, Error as StdError};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{api, config, graphql, Service};

/// Origin in [`config::Cors`] not being a valid header value.
#[derive(Debug, Display, StdError)]
#[display("`{origin}` is not a correct CORS origin: {source}")]
pub struct InvalidOrigin {
    /// Rejected origin.
    pub origin: String,

    /// Reason of the rejection.
    pub source: http::header::InvalidHeaderValue,
}

/// Builds a [`CorsLayer`] allowing the configured origins.
///
/// `*` among the origins allows any origin.
///
/// # Errors
///
/// If any of the origins is not a valid header value.
pub fn cors(conf: &config::Cors) -> Result<CorsLayer, InvalidOrigin> {
    let allow_origin = if conf.origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            conf.origins
                .iter()
                .map(|origin| {
                    origin.parse::<http::HeaderValue>().map_err(|source| {
                        InvalidOrigin {
                            origin: origin.clone(),
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            http::Method::GET,
            http::Method::OPTIONS,
            http::Method::POST,
        ])
        .allow_headers([
            http::header::AUTHORIZATION,
            http::header::CONTENT_TYPE,
        ]))
}

/// Builds a [`Router`] serving the GraphQL API at `/graphql` with the
/// provided [`CorsLayer`] and per-request tracing.
pub fn router(schema: api::Schema, service: Service, cors: CorsLayer) -> Router {
    Router::new()
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .layer(Extension(Arc::new(schema)))
        .layer(Extension(service))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|r: &http::Request<_>| {
                    tracing::info_span!(
                        "HTTP request",
                        http.client_ip = InsecureClientIp::from(
                            r.headers(),
                            r.extensions()
                        )
                            .map(|ip| ip.0.to_string())
                            .ok(),
                        http.method = r.method().as_str(),
                        http.route = r
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str),
                        http.target = r
                            .uri()
                            .path_and_query()
                            .map(http::uri::PathAndQuery::as_str),
                        http.user_agent = r
                            .headers()
                            .get(http::header::USER_AGENT)
                            .and_then(|h| h.to_str().ok()),
                        http.status_code = tracing::field::Empty,
                    )
                })
                .on_response(
                    |r: &http::Response<_>,
                     dur: time::Duration,
                     span: &tracing::Span| {
                        let status = r.status();
                        span.record(
                            "http.status_code",
                            tracing::field::display(status.as_u16()),
                        );

                        let duration = format!("{}ms", dur.as_millis());
                        if status.is_server_error() {
                            tracing::error!(duration = duration.as_str());
                        } else if status.is_client_error() {
                            tracing::warn!(duration = duration.as_str());
                        } else {
                            tracing::info!(duration = duration.as_str());
                        }
                    },
                ),
        )
}
