// src/cookie.rs
use axum::http::{HeaderMap, header};
use poem_site_domain::SortOption;

/// Client-stored sort preference, read server-side on every render.
pub const SORT_COOKIE: &str = "poem-sort-preference";

const ONE_YEAR_SECS: u64 = 60 * 60 * 24 * 365;

/// Resolve the active sort option from the request cookies. Absent or
/// invalid values fall back to the default (filename ascending).
pub fn sort_preference(headers: &HeaderMap) -> SortOption {
    cookie_value(headers, SORT_COOKIE)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// `Set-Cookie` value persisting the preference for one year.
pub fn set_sort_cookie(option: SortOption) -> String {
    format!("{SORT_COOKIE}={}; Path=/; Max-Age={ONE_YEAR_SECS}", option.as_str())
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}
