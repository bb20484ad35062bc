//! Run statistics reported after a pipeline completes.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Counters and timing for one completed pipeline run.
///
/// `lines_total` is every logical line observed before filtering;
/// `cities_kept` is the subset that passed every predicate and was written.
/// The difference is the number of records rejected by at least one
/// predicate, malformed-record rejections included.
#[derive(Clone, Debug, Serialize)]
pub struct RunStats {
    /// Total logical lines observed, pre-filter.
    pub lines_total: u64,
    /// Records that survived the full filter chain.
    pub cities_kept: u64,
    /// Elapsed wall time for the run.
    #[serde(serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl RunStats {
    /// Records rejected by at least one predicate.
    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.lines_total - self.cities_kept
    }

    /// Render the stats as a JSON object (durations in milliseconds), for
    /// callers that persist run reports.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "lines_total": self.lines_total,
            "cities_kept": self.cities_kept,
            "elapsed_ms": self.elapsed.as_millis() as u64,
        })
    }
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Finished in {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Number of cities matched the conditions: {}", self.cities_kept)?;
        write!(f, "Total number of cities: {}", self.lines_total)
    }
}
