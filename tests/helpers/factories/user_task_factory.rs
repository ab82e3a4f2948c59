use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::engine::source::UserTaskInstance;

/// Fixed reference instant tasks are laid out against.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

/// `base_time()` shifted by `ms` milliseconds.
pub fn at_ms(ms: i64) -> DateTime<Utc> {
    base_time() + TimeDelta::milliseconds(ms)
}

pub struct UserTaskFactory {
    flow_node_id: String,
    start_date: DateTime<Utc>,
    claim_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    canceled: bool,
    assignee: Option<String>,
    candidate_groups: Vec<String>,
}

impl UserTaskFactory {
    pub fn new(flow_node_id: &str) -> Self {
        Self {
            flow_node_id: flow_node_id.to_string(),
            start_date: base_time(),
            claim_date: None,
            end_date: None,
            canceled: false,
            assignee: None,
            candidate_groups: Vec::new(),
        }
    }

    pub fn started_at(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = start;
        self
    }

    /// Claims after `ms` milliseconds.
    pub fn claimed_after(mut self, ms: i64) -> Self {
        self.claim_date = Some(self.start_date + TimeDelta::milliseconds(ms));
        self
    }

    /// Completes after `ms` milliseconds.
    pub fn completed_after(mut self, ms: i64) -> Self {
        self.end_date = Some(self.start_date + TimeDelta::milliseconds(ms));
        self
    }

    /// Cancels after `ms` milliseconds.
    pub fn canceled_after(mut self, ms: i64) -> Self {
        self.end_date = Some(self.start_date + TimeDelta::milliseconds(ms));
        self.canceled = true;
        self
    }

    pub fn with_assignee(mut self, assignee: &str) -> Self {
        self.assignee = Some(assignee.to_string());
        self
    }

    pub fn with_candidate_group(mut self, group: &str) -> Self {
        self.candidate_groups.push(group.to_string());
        self
    }

    pub fn create(self) -> UserTaskInstance {
        UserTaskInstance {
            flow_node_id: self.flow_node_id,
            start_date: self.start_date,
            claim_date: self.claim_date,
            end_date: self.end_date,
            canceled: self.canceled,
            assignee: self.assignee,
            candidate_groups: self.candidate_groups,
        }
    }
}
