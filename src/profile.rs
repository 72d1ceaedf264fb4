//! Optional timing hook around matrix function calls
//!
//! A client may carry a [`ProfileHook`]; it is invoked once per call with a
//! [`ProfileRecord`] describing what ran. Nothing is recorded globally.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback receiving one record per profiled call
pub type ProfileHook = Arc<dyn Fn(&ProfileRecord) + Send + Sync>;

/// Timing record for one profiled call
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    /// Operation name
    pub op: &'static str,
    /// Matrix dimension (rows of the input)
    pub dim: usize,
    /// Wall-clock time spent in the call
    pub elapsed: Duration,
    /// Whether the call returned `Ok`
    pub succeeded: bool,
}

impl ProfileRecord {
    /// Create a record
    pub fn new(op: &'static str, dim: usize, elapsed: Duration, succeeded: bool) -> Self {
        Self {
            op,
            dim,
            elapsed,
            succeeded,
        }
    }
}

impl fmt::Display for ProfileRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} n={} {:?} {}",
            self.op,
            self.dim,
            self.elapsed,
            if self.succeeded { "ok" } else { "err" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rec = ProfileRecord::new("sqrt_sym_real", 4, Duration::from_micros(12), true);
        assert_eq!(rec.to_string(), "sqrt_sym_real n=4 12µs ok");
    }
}
