//! Static assets and HTML helpers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

const STYLE_CSS: &str = include_str!("../ui/style.css");

/// GET /static/style.css
pub async fn serve_stylesheet() -> Response {
    (StatusCode::OK, [("content-type", "text/css")], STYLE_CSS).into_response()
}

/// Escape text for interpolation into HTML bodies and attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
