use crate::error::AppError;
use crate::http::{Transport, UreqTransport};
use crate::rate_limit::FixedWindowLimiter;
use governor::clock::{Clock as _, DefaultClock};
use governor::{
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, warn};

const TOO_MANY_REQUESTS: u16 = 429;

/// Every request goes through here: pacing, the HTTP call, the single
/// retry after a 429 and the JSON decode.
pub struct Gateway<T = UreqTransport> {
    transport: T,
    limiter: Arc<FixedWindowLimiter>,
    burst: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl Gateway<UreqTransport> {
    pub fn new(limiter: Arc<FixedWindowLimiter>) -> Self {
        Gateway::with_transport(UreqTransport::new(), limiter)
    }
}

impl<T: Transport> Gateway<T> {
    pub fn with_transport(transport: T, limiter: Arc<FixedWindowLimiter>) -> Self {
        Gateway {
            transport,
            limiter,
            burst: None,
        }
    }

    /// Additionally cap metered calls at `per_second`. The cap runs on
    /// governor's own clock, not the limiter's.
    pub fn with_burst_limit(mut self, per_second: NonZeroU32) -> Self {
        self.burst = Some(RateLimiter::direct(Quota::per_second(per_second)));
        self
    }

    pub fn limiter(&self) -> &Arc<FixedWindowLimiter> {
        &self.limiter
    }

    pub fn call(&self, url: &str, rate_limited: bool) -> Result<Value, AppError> {
        if rate_limited {
            self.limiter.acquire();
            self.wait_for_burst();
        }

        debug!(url = %redact(url), rate_limited, "GET");
        let mut response = self.transport.get(url)?;

        if response.status == TOO_MANY_REQUESTS {
            warn!(url = %redact(url), "429 returned by server, retrying once after back-off");
            if rate_limited {
                self.limiter.back_off();
                self.wait_for_burst();
            } else {
                self.limiter.pause();
            }
            response = self.transport.get(url)?;
            if response.status == TOO_MANY_REQUESTS {
                error!(url = %redact(url), "429 returned again after back-off");
                return Err(AppError::RateLimited { url: redact(url) });
            }
        }

        if !response.is_success() {
            error!(
                status = response.status,
                url = %redact(url),
                body = %response.body,
                "request failed"
            );
            return Err(AppError::Http {
                status: response.status,
                body: response.body,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    fn wait_for_burst(&self) {
        let Some(burst) = &self.burst else {
            return;
        };
        let clock = DefaultClock::default();
        while let Err(not_until) = burst.check() {
            thread::sleep(not_until.wait_time_from(clock.now()));
        }
    }
}

/// Hide the API key before a URL reaches logs or errors.
pub fn redact(url: &str) -> String {
    match url.find("api_key=") {
        Some(idx) => {
            let value_start = idx + "api_key=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |end| value_start + end);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ManualClock, ScriptedTransport};
    use std::time::{Duration, Instant};

    const URL: &str =
        "https://NA1.api.riotgames.com/lol/status/v4/platform-data?api_key=RGAPI-secret";

    fn gateway(
        budget: u32,
        window_secs: u64,
    ) -> (Gateway<Arc<ScriptedTransport>>, Arc<ScriptedTransport>, Arc<ManualClock>) {
        let clock = ManualClock::new();
        let transport = ScriptedTransport::new();
        let limiter = Arc::new(FixedWindowLimiter::with_clock(
            budget,
            Duration::from_secs(window_secs),
            clock.clone(),
        ));
        (
            Gateway::with_transport(transport.clone(), limiter),
            transport,
            clock,
        )
    }

    #[test]
    fn decodes_json_body() {
        let (gateway, transport, _clock) = gateway(100, 120);
        transport.push(200, r#"{"id":"NA1","name":"North America"}"#);

        let value = gateway.call(URL, true).unwrap();

        assert_eq!(value["name"], "North America");
        assert_eq!(transport.requests(), vec![URL.to_string()]);
    }

    #[test]
    fn single_429_retries_same_url_once_after_full_window() {
        let (gateway, transport, clock) = gateway(100, 120);
        transport.push(429, "");
        transport.push(200, "[1,2,3]");

        let value = gateway.call(URL, true).unwrap();

        assert_eq!(value, serde_json::json!([1, 2, 3]));
        assert_eq!(transport.requests(), vec![URL.to_string(), URL.to_string()]);
        assert_eq!(clock.sleeps(), vec![Duration::from_secs(120)]);
        assert_eq!(gateway.limiter().window().call_count, 1);
    }

    #[test]
    fn second_429_is_terminal() {
        let (gateway, transport, clock) = gateway(100, 120);
        transport.push(429, "");
        transport.push(429, "");
        transport.push(200, "{}");

        let err = gateway.call(URL, true).unwrap_err();

        assert!(matches!(err, AppError::RateLimited { .. }));
        assert_eq!(transport.requests().len(), 2);
        assert_eq!(clock.sleeps().len(), 1);
    }

    #[test]
    fn failure_after_retry_is_not_retried_again() {
        let (gateway, transport, _clock) = gateway(100, 120);
        transport.push(429, "");
        transport.push(503, "unavailable");

        let err = gateway.call(URL, true).unwrap_err();

        assert!(matches!(err, AppError::Http { status: 503, .. }));
        assert_eq!(transport.requests().len(), 2);
    }

    #[test]
    fn other_status_surfaces_code_and_body() {
        let (gateway, transport, clock) = gateway(100, 120);
        transport.push(403, r#"{"status":{"message":"Forbidden"}}"#);

        match gateway.call(URL, true) {
            Err(AppError::Http { status, body }) => {
                assert_eq!(status, 403);
                assert!(body.contains("Forbidden"));
            }
            other => panic!("expected HTTP error, got {:?}", other),
        }
        assert_eq!(transport.requests().len(), 1);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn budget_exhaustion_blocks_then_proceeds() {
        let (gateway, transport, clock) = gateway(3, 10);
        for _ in 0..3 {
            gateway.call(URL, true).unwrap();
        }
        assert!(clock.sleeps().is_empty());

        gateway.call(URL, true).unwrap();

        assert_eq!(clock.sleeps(), vec![Duration::from_secs(10)]);
        assert_eq!(gateway.limiter().window().call_count, 1);
        assert_eq!(transport.requests().len(), 4);
    }

    #[test]
    fn unmetered_calls_skip_the_counter() {
        let (gateway, _transport, clock) = gateway(1, 10);
        for _ in 0..5 {
            gateway.call(URL, false).unwrap();
        }
        assert_eq!(gateway.limiter().window().call_count, 0);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn unmetered_429_pauses_without_touching_counter() {
        let (gateway, transport, clock) = gateway(100, 60);
        transport.push(429, "");
        transport.push(200, "[]");

        gateway.call(URL, false).unwrap();

        assert_eq!(clock.sleeps(), vec![Duration::from_secs(60)]);
        assert_eq!(gateway.limiter().window().call_count, 0);
    }

    #[test]
    fn invalid_json_is_a_json_error() {
        let (gateway, transport, _clock) = gateway(100, 120);
        transport.push(200, "<html>");
        assert!(matches!(gateway.call(URL, true), Err(AppError::JsonError(_))));
    }

    #[test]
    fn burst_limit_allows_first_call_immediately() {
        let (gateway, _transport, _clock) = gateway(100, 120);
        let gateway = gateway.with_burst_limit(NonZeroU32::new(20).unwrap());
        gateway.call(URL, true).unwrap();
        assert_eq!(gateway.limiter().window().call_count, 1);
    }

    #[test]
    fn burst_limit_spaces_out_metered_calls() {
        let (gateway, transport, clock) = gateway(100, 120);
        let gateway = gateway.with_burst_limit(NonZeroU32::new(2).unwrap());

        // Two calls fit the burst, the next three wait 500ms each.
        let started = Instant::now();
        for _ in 0..5 {
            gateway.call(URL, true).unwrap();
        }

        assert!(started.elapsed() >= Duration::from_millis(1400));
        assert_eq!(transport.requests().len(), 5);
        assert_eq!(gateway.limiter().window().call_count, 5);
        assert!(clock.sleeps().is_empty());
    }

    #[test]
    fn burst_limit_ignores_unmetered_calls() {
        let (gateway, transport, _clock) = gateway(100, 120);
        let gateway = gateway.with_burst_limit(NonZeroU32::new(1).unwrap());

        let started = Instant::now();
        for _ in 0..5 {
            gateway.call(URL, false).unwrap();
        }

        assert!(started.elapsed() < Duration::from_millis(500));
        assert_eq!(transport.requests().len(), 5);
    }

    #[test]
    fn redact_hides_the_key() {
        assert_eq!(
            redact(URL),
            "https://NA1.api.riotgames.com/lol/status/v4/platform-data?api_key=***"
        );
        assert_eq!(
            redact("https://a.test/x?api_key=k&count=5"),
            "https://a.test/x?api_key=***&count=5"
        );
        let static_url = "https://ddragon.leagueoflegends.com/api/versions.json";
        assert_eq!(redact(static_url), static_url);
    }
}
