//! Session cookie parsing and `Set-Cookie` rendering.

use axum::http::{header::COOKIE, HeaderMap};

use crate::config::SessionConfig;

/// Find a cookie value across every `Cookie` header on the request.
pub fn read(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value storing the session token.
pub fn issue(config: &SessionConfig, token: &str, max_age_secs: i64) -> String {
    render(config, token, max_age_secs)
}

/// `Set-Cookie` value removing the session token.
pub fn clear(config: &SessionConfig) -> String {
    render(config, "", 0)
}

fn render(config: &SessionConfig, value: &str, max_age_secs: i64) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name,
        value,
        max_age_secs.max(0)
    );
    if config.secure {
        cookie.push_str("; Secure");
    }
    cookie
}
