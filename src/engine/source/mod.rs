mod clock;
mod filter;
mod memory;
mod task;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{DateRange, TaskFilter};
pub use memory::InMemoryStore;
pub use task::{ProcessInstance, UserTaskInstance};

use crate::engine::errors::SourceError;
use crate::engine::types::ReportSpec;

/// One task-instance observation for one candidate group.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub flow_node_id: String,
    /// `None` when the task has no candidate group
    pub candidate_group_id: Option<String>,
    /// `None` when the task has no value yet for the requested duration kind
    pub duration_ms: Option<f64>,
    pub process_instance_id: String,
    /// Shared by every sample fanned out from one task instance
    pub task_instance_id: String,
}

/// Everything a source returns for one report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBatch {
    pub samples: Vec<Sample>,
    /// Process instances with at least one sample after filters
    pub instance_count: u64,
    /// Process instances in the version and tenant scope, ignoring other filters
    pub instance_count_without_filters: u64,
}

/// Executes a report's raw query. Order of returned samples is not significant.
pub trait DurationSampleSource: Send + Sync {
    fn fetch(&self, spec: &ReportSpec, clock: &dyn Clock) -> Result<SampleBatch, SourceError>;
}
