use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::types::DurationKind;

/// One execution of a user task inside a process instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserTaskInstance {
    pub flow_node_id: String,
    pub start_date: DateTime<Utc>,
    pub claim_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub canceled: bool,
    pub assignee: Option<String>,
    pub candidate_groups: Vec<String>,
}

impl UserTaskInstance {
    pub fn is_ended(&self) -> bool {
        self.end_date.is_some()
    }

    /// Candidate groups as distribution keys; a task without any is unassigned.
    pub fn candidate_group_keys(&self) -> Vec<Option<&str>> {
        if self.candidate_groups.is_empty() {
            vec![None]
        } else {
            self.candidate_groups.iter().map(|g| Some(g.as_str())).collect()
        }
    }

    /// Duration of the requested kind in milliseconds, or `None` when the task
    /// has not produced one yet. Running tasks are measured up to `now`.
    pub fn duration_ms(&self, kind: DurationKind, now: DateTime<Utc>) -> Option<f64> {
        let end_or_now = self.end_date.unwrap_or(now);
        match kind {
            DurationKind::Total => Some(span_ms(self.start_date, end_or_now)),
            DurationKind::Idle => match self.claim_date {
                Some(claim) => Some(span_ms(self.start_date, claim)),
                None => Some(span_ms(self.start_date, end_or_now)),
            },
            DurationKind::Work => match (self.claim_date, self.end_date) {
                (Some(claim), _) => Some(span_ms(claim, end_or_now)),
                (None, Some(_)) => Some(0.0),
                (None, None) => None,
            },
        }
    }
}

fn span_ms(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds().max(0) as f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessInstance {
    pub id: String,
    pub definition_key: String,
    pub definition_version: u32,
    pub tenant_id: Option<String>,
    pub user_tasks: Vec<UserTaskInstance>,
}
