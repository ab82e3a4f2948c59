use std::fmt;

use serde::{Deserialize, Serialize};

/// Statistic computed over the durations of one hypermap cell.
///
/// `Percentile(50.0)` is the median; see [`AggregationType::median`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum AggregationType {
    Min,
    Max,
    Avg,
    Sum,
    Percentile(f64),
}

impl AggregationType {
    pub const fn median() -> Self {
        AggregationType::Percentile(50.0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregationType::Min => "min",
            AggregationType::Max => "max",
            AggregationType::Avg => "avg",
            AggregationType::Sum => "sum",
            AggregationType::Percentile(_) => "percentile",
        }
    }

    /// Removes repeated types while keeping the first occurrence order.
    pub fn dedup(types: &[AggregationType]) -> Vec<AggregationType> {
        let mut out: Vec<AggregationType> = Vec::with_capacity(types.len());
        for t in types {
            if !out.contains(t) {
                out.push(*t);
            }
        }
        out
    }
}

impl fmt::Display for AggregationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationType::Percentile(p) => write!(f, "p{}", p),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Which span of a user task's lifetime is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DurationKind {
    /// Creation to completion or cancellation
    #[default]
    Total,
    /// Claim to completion
    Work,
    /// Creation to claim
    Idle,
}

/// Lifecycle states of user task instances that contribute samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionState {
    Running,
    Completed,
    Canceled,
    #[default]
    All,
}

impl ExecutionState {
    pub fn matches(&self, ended: bool, canceled: bool) -> bool {
        match self {
            ExecutionState::Running => !ended,
            ExecutionState::Completed => ended && !canceled,
            ExecutionState::Canceled => canceled,
            ExecutionState::All => true,
        }
    }
}
