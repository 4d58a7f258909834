//! Response envelopes and cross-origin headers.
//!
//! Every inbound request resolves to one of five shapes: the CORS
//! preflight, a 405 for non-GET methods, a 400 naming the required
//! parameter set, a 200 envelope wrapping whatever the upstream returned,
//! or a 500 envelope describing a failed forwarding call.

use std::fmt::Display;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::relay::params::REQUIRED_PARAMS;
use crate::upstream::UpstreamReply;

/// Value of `Access-Control-Allow-Origin` on every response.
pub const ALLOW_ORIGIN: &str = "*";

/// Methods granted to cross-origin callers during preflight.
pub const ALLOW_METHODS: &str = "GET, POST, OPTIONS";

/// Headers granted to cross-origin callers during preflight.
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Layer stamping `Access-Control-Allow-Origin: *` onto every response,
/// including middleware-produced ones such as timeouts.
pub fn allow_origin_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::if_not_present(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    )
}

/// Empty 200 answering the CORS preflight.
pub fn preflight() -> Response {
    [
        (header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
        (header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
        (header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
    ]
    .into_response()
}

/// 405 body for non-GET methods.
#[derive(Debug, Serialize)]
struct MethodNotAllowedBody {
    error: &'static str,
}

/// 400 body naming the full required parameter set.
#[derive(Debug, Serialize)]
struct MissingParamsBody {
    error: &'static str,
    required: [&'static str; 4],
}

/// 200 envelope wrapping a completed upstream exchange.
#[derive(Debug, Serialize)]
struct RelayedBody {
    success: bool,
    status: u16,
    message: &'static str,
    data: String,
}

impl RelayedBody {
    fn new(reply: UpstreamReply) -> Self {
        Self {
            success: true,
            status: reply.status,
            message: "Emote sent successfully",
            data: reply.body,
        }
    }
}

/// 500 envelope for a failed forwarding call.
#[derive(Debug, Serialize)]
struct FailureBody {
    success: bool,
    error: String,
}

/// JSON rejection for any method other than GET (or OPTIONS).
pub fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MethodNotAllowedBody {
            error: "Method not allowed",
        }),
    )
        .into_response()
}

/// JSON rejection when required parameters are absent or empty.
pub fn missing_params() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(MissingParamsBody {
            error: "Missing required parameters",
            required: REQUIRED_PARAMS,
        }),
    )
        .into_response()
}

/// Success envelope for a completed upstream exchange. The relay's own
/// status is 200 regardless of the upstream status, which is reported in
/// the body instead.
pub fn relayed(reply: UpstreamReply) -> Response {
    Json(RelayedBody::new(reply)).into_response()
}

/// Failure envelope for a forwarding call that never completed.
pub fn relay_failed(error: impl Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(FailureBody {
            success: false,
            error: error.to_string(),
        }),
    )
        .into_response()
}
