//! Response builders for the HTTP front of the Lambda.

use serde_json::{Value, json};

pub const CONTENT_TYPE_CSS: &str = "text/css; charset=utf-8";
pub const ALLOW_ANY_ORIGIN: &str = "*";
/// Fifteen minutes.
pub const CACHE_CONTROL: &str = "public, max-age=900";

/// Returns a 200 OK response carrying a stylesheet.
#[must_use]
pub fn css_response(css: &str) -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "content-type": CONTENT_TYPE_CSS,
            "access-control-allow-origin": ALLOW_ANY_ORIGIN,
            "cache-control": CACHE_CONTROL,
        },
        "body": css,
    })
}
