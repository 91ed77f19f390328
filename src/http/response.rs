//! Core response to wire response conversion.

use axum::body::Body;

use crate::dispatch::Response;

/// Server identification header value.
const SERVER: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Convert the dispatcher's transport-agnostic response into an axum one.
pub fn into_wire_response(response: Response) -> axum::response::Response {
    let (status, headers, body) = response.into_parts();

    let mut wire = axum::response::Response::new(Body::from(body));
    *wire.status_mut() = status;
    *wire.headers_mut() = headers;
    wire.headers_mut().insert(
        axum::http::header::SERVER,
        axum::http::HeaderValue::from_static(SERVER),
    );
    wire
}
