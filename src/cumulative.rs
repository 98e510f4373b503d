use axum_extra::extract::cookie::{Cookie, CookieJar};
use time::{Duration, OffsetDateTime};
use tracing::warn;

pub const COOKIE_NAME: &str = "total_time_tracked";

/// Reads the all-time hour counter. Anything unusable counts as zero.
pub fn read_cumulative(jar: &CookieJar) -> f64 {
    jar.get(COOKIE_NAME)
        .map(|cookie| parse_cumulative(cookie.value()))
        .unwrap_or(0.0)
}

pub fn parse_cumulative(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!("ignoring invalid {COOKIE_NAME} cookie value: {raw:?}");
            0.0
        }
    }
}

pub fn cumulative_cookie(total: f64) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, total.to_string()))
        .path("/")
        .expires(OffsetDateTime::now_utc() + Duration::days(365))
        .build()
}

pub fn write_cumulative(jar: CookieJar, total: f64) -> CookieJar {
    jar.add(cumulative_cookie(total))
}
