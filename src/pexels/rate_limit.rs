use std::str::FromStr;

use reqwest::header::HeaderMap;
use tracing::{debug, warn};

const LIMIT_HEADER: &str = "x-ratelimit-limit";
const REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";

/// Quota counters reported by the API on every response. Advisory only,
/// each field keeps its last observed value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Total requests allowed in the current quota window.
    pub limit: Option<u32>,

    /// Requests left in the current quota window.
    pub remaining: Option<i64>,

    /// UNIX timestamp (seconds) when the window resets.
    pub reset: Option<u64>,
}

impl RateLimit {
    /// Best-effort update, missing or garbled headers leave the old values.
    pub(crate) fn observe(&mut self, headers: &HeaderMap) {
        if let Some(limit) = parse_header::<u32>(headers, LIMIT_HEADER) {
            self.limit = Some(limit);
        }
        if let Some(remaining) = parse_header::<i64>(headers, REMAINING_HEADER) {
            debug!(remaining, "Updated remaining rate limit");
            self.remaining = Some(remaining);
        }
        if let Some(reset) = parse_header::<u64>(headers, RESET_HEADER) {
            self.reset = Some(reset);
        }
    }
}

fn parse_header<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    let value = headers.get(name)?;

    let parsed = value
        .to_str()
        .ok()
        .and_then(|value| value.trim().parse().ok());

    if parsed.is_none() {
        warn!(header = name, ?value, "Ignoring unparseable rate limit header");
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers(entries: &[(&'static str, &'static str)]) -> HeaderMap {
        entries
            .iter()
            .map(|&(name, value)| {
                (
                    HeaderName::from_static(name),
                    HeaderValue::from_static(value),
                )
            })
            .collect()
    }

    #[test]
    fn numeric_header_sets_remaining() {
        let mut rate_limit = RateLimit::default();

        rate_limit.observe(&headers(&[("x-ratelimit-remaining", "19684")]));

        assert_eq!(rate_limit.remaining, Some(19684));
    }

    #[test]
    fn missing_header_keeps_previous_value() {
        let mut rate_limit = RateLimit {
            remaining: Some(10),
            ..Default::default()
        };

        rate_limit.observe(&HeaderMap::new());

        assert_eq!(rate_limit.remaining, Some(10));
    }

    #[test]
    fn garbage_header_keeps_previous_value() {
        let mut rate_limit = RateLimit {
            remaining: Some(10),
            ..Default::default()
        };

        rate_limit.observe(&headers(&[("x-ratelimit-remaining", "lots")]));
        assert_eq!(rate_limit.remaining, Some(10));

        rate_limit.observe(&headers(&[("x-ratelimit-remaining", "1.5")]));
        assert_eq!(rate_limit.remaining, Some(10));
    }

    #[test]
    fn negative_remaining_is_taken_verbatim() {
        let mut rate_limit = RateLimit {
            remaining: Some(10),
            ..Default::default()
        };

        rate_limit.observe(&headers(&[("x-ratelimit-remaining", "-1")]));

        assert_eq!(rate_limit.remaining, Some(-1));
    }

    #[test]
    fn reads_whole_quota() {
        let mut rate_limit = RateLimit::default();

        rate_limit.observe(&headers(&[
            ("x-ratelimit-limit", "20000"),
            ("x-ratelimit-remaining", "19999"),
            ("x-ratelimit-reset", "1700000000"),
        ]));

        assert_eq!(
            rate_limit,
            RateLimit {
                limit: Some(20000),
                remaining: Some(19999),
                reset: Some(1700000000),
            }
        );
    }
}
