//! Result envelope returned by instrumented handlers.

use std::time::Duration;

use serde::Serialize;

/// `{ result, execution_time }` produced once per successful invocation.
///
/// Fields are private; an envelope is never modified after the wrapper builds it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    result: T,
    execution_time: f64,
}

impl<T> Envelope<T> {
    pub(crate) fn new(result: T, elapsed: Duration) -> Self {
        Self {
            result,
            execution_time: round_secs(elapsed),
        }
    }

    pub fn result(&self) -> &T {
        &self.result
    }

    /// Elapsed wall-clock seconds, rounded to milliseconds.
    pub fn execution_time(&self) -> f64 {
        self.execution_time
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

/// Seconds rounded to 3 decimal places.
pub fn round_secs(d: Duration) -> f64 {
    (d.as_secs_f64() * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn rounds_to_milliseconds() {
        assert_eq!(round_secs(Duration::from_micros(200_400)), 0.2);
        assert_eq!(round_secs(Duration::from_micros(200_600)), 0.201);
        assert_eq!(round_secs(Duration::ZERO), 0.0);
    }

    #[test]
    fn serializes_result_and_execution_time() {
        let env = Envelope::new(json!({ "message": "hi" }), Duration::from_millis(1500));
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v, json!({ "result": { "message": "hi" }, "execution_time": 1.5 }));
    }
}
