//! Response Envelope
//!
//! Every JSON body returned by the service carries a `meta` block with the
//! HTTP status and the server time:
//!
//! ```json
//! { "message": "...", "meta": { "http_status": 201, "server_time": "2022-10-29T23:59:59.123Z" } }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// `meta` block shared by all JSON responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub http_status: u16,
    /// RFC 3339 UTC with millisecond precision
    pub server_time: String,
}

impl Meta {
    pub fn new(http_status: u16, now: DateTime<Utc>) -> Self {
        Self {
            http_status,
            server_time: format_server_time(now),
        }
    }
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`
pub fn format_server_time(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// JSON body: payload fields flattened next to `meta`
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    #[serde(flatten)]
    pub data: T,
    pub meta: Meta,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(http_status: u16, data: T, now: DateTime<Utc>) -> Self {
        Self {
            data,
            meta: Meta::new(http_status, now),
        }
    }
}

#[cfg(feature = "axum")]
impl<T: Serialize> axum::response::IntoResponse for Envelope<T> {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status = StatusCode::from_u16(self.meta.http_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self)).into_response()
    }
}
