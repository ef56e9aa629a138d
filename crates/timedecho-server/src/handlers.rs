//! The four echo handlers.
//!
//! `sync_*` block the calling thread; `async_*` await a timer. None of them log
//! on their own; the router wraps each one in an `Instrumented` handler.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use timedecho_core::error::{EchoError, Result};

/// Used when `sleep_sec` is omitted.
pub const DEFAULT_SLEEP_SEC: f64 = 1.0;

/// `?sleep_sec=<float>` query string.
#[derive(Debug, Deserialize)]
pub struct SleepQuery {
    #[serde(default = "default_sleep_sec")]
    pub sleep_sec: f64,
}

fn default_sleep_sec() -> f64 {
    DEFAULT_SLEEP_SEC
}

/// A validated sleep request.
#[derive(Debug, Clone, Copy)]
pub struct SleepArgs {
    sleep_sec: f64,
    duration: Duration,
}

impl SleepArgs {
    /// Rejects values a `Duration` cannot hold (negative, NaN, infinite), and
    /// values above `max_sleep_sec` when a cap is configured.
    pub fn new(sleep_sec: f64, max_sleep_sec: Option<f64>) -> Result<Self> {
        if let Some(max) = max_sleep_sec {
            if sleep_sec > max {
                return Err(EchoError::BadRequest(format!(
                    "sleep_sec must be at most {}",
                    float_repr(max)
                )));
            }
        }
        let duration = Duration::try_from_secs_f64(sleep_sec).map_err(|_| {
            EchoError::BadRequest("sleep_sec must be a non-negative number".into())
        })?;
        Ok(Self {
            sleep_sec,
            duration,
        })
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// `1.0s`, `0.2s`, `1e-05s`.
    fn slept(&self) -> String {
        format!("{}s", float_repr(self.sleep_sec))
    }
}

/// Shortest round-trip float text with a fractional part and a signed,
/// two-digit exponent (`1.0`, `0.2`, `1e-05`, `1.5e+16`).
fn float_repr(v: f64) -> String {
    let s = format!("{v:?}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

/// Sleep request carrying a JSON object body to echo back.
#[derive(Debug, Clone)]
pub struct PostArgs {
    pub sleep: SleepArgs,
    pub payload: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoReply {
    pub message: &'static str,
    pub slept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Map<String, Value>>,
}

pub fn sync_get(args: SleepArgs) -> Result<EchoReply> {
    std::thread::sleep(args.duration());
    Ok(EchoReply {
        message: "sync GET",
        slept: args.slept(),
        received: None,
    })
}

pub fn sync_post(args: PostArgs) -> Result<EchoReply> {
    std::thread::sleep(args.sleep.duration());
    Ok(EchoReply {
        message: "sync POST",
        slept: args.sleep.slept(),
        received: Some(args.payload),
    })
}

pub async fn async_get(args: SleepArgs) -> Result<EchoReply> {
    tokio::time::sleep(args.duration()).await;
    Ok(EchoReply {
        message: "async GET",
        slept: args.slept(),
        received: None,
    })
}

pub async fn async_post(args: PostArgs) -> Result<EchoReply> {
    tokio::time::sleep(args.sleep.duration()).await;
    Ok(EchoReply {
        message: "async POST",
        slept: args.sleep.slept(),
        received: Some(args.payload),
    })
}
