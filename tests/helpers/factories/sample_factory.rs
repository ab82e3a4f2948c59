use std::sync::atomic::{AtomicUsize, Ordering};

use crate::engine::source::Sample;

static NEXT_TASK: AtomicUsize = AtomicUsize::new(1);

pub struct SampleFactory {
    flow_node_id: String,
    candidate_group_id: Option<String>,
    duration_ms: Option<f64>,
    process_instance_id: String,
    task_instance_id: String,
}

impl SampleFactory {
    pub fn new(flow_node_id: &str) -> Self {
        Self {
            flow_node_id: flow_node_id.to_string(),
            candidate_group_id: None,
            duration_ms: Some(100.0),
            process_instance_id: "instance-1".to_string(),
            task_instance_id: format!("task-{}", NEXT_TASK.fetch_add(1, Ordering::Relaxed)),
        }
    }

    pub fn with_group(mut self, group: &str) -> Self {
        self.candidate_group_id = Some(group.to_string());
        self
    }

    pub fn unassigned(mut self) -> Self {
        self.candidate_group_id = None;
        self
    }

    pub fn with_duration(mut self, ms: f64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn without_duration(mut self) -> Self {
        self.duration_ms = None;
        self
    }

    pub fn in_instance(mut self, id: &str) -> Self {
        self.process_instance_id = id.to_string();
        self
    }

    /// Marks the sample as one fan-out entry of task instance `id`.
    pub fn of_task(mut self, id: &str) -> Self {
        self.task_instance_id = id.to_string();
        self
    }

    pub fn create(self) -> Sample {
        Sample {
            flow_node_id: self.flow_node_id,
            candidate_group_id: self.candidate_group_id,
            duration_ms: self.duration_ms,
            process_instance_id: self.process_instance_id,
            task_instance_id: self.task_instance_id,
        }
    }
}
