// src/session.rs
//
// Session-scoped storage for the recently-viewed list. The list rides in a
// browser-session cookie (no Max-Age) as base64url-encoded JSON; the server
// keeps no state of its own. Reads are best-effort: anything that fails to
// decode is treated as an empty list.

use crate::domain::recent::RecentlyViewed;
use crate::errors::ServerError;
use astra::Request;
use base64::Engine;

pub const RECENT_COOKIE: &str = "last_viewed";

/// Reads the recently-viewed list from the request cookie. Missing or
/// malformed cookies yield an empty list, never an error.
pub fn recent_from_request(req: &Request) -> RecentlyViewed {
    let Some(raw) = cookie_value(req, RECENT_COOKIE) else {
        return RecentlyViewed::new();
    };

    let Ok(bytes) = base64::engine::general_purpose::URL_SAFE_NO_PAD.decode(raw) else {
        return RecentlyViewed::new();
    };

    match serde_json::from_slice::<Vec<String>>(&bytes) {
        Ok(ids) => RecentlyViewed::from_ids(ids),
        Err(_) => RecentlyViewed::new(),
    }
}

/// Builds the `Set-Cookie` value carrying the updated list.
pub fn recent_cookie(recent: &RecentlyViewed) -> Result<String, ServerError> {
    let json = serde_json::to_vec(recent)
        .map_err(|e| ServerError::DataError(format!("recent list encode failed: {e}")))?;
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);
    Ok(format!("{RECENT_COOKIE}={payload}; Path=/; SameSite=Lax"))
}

fn cookie_value<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    let header = req.headers().get("cookie")?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name).then_some(v)
    })
}
