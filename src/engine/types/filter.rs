use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MembershipOperator {
    In,
    NotIn,
}

/// Restricts task instances by assignee or candidate group.
/// A `None` value stands for "unassigned".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipFilter {
    pub operator: MembershipOperator,
    pub values: Vec<Option<String>>,
}

impl MembershipFilter {
    pub fn is_in(values: &[Option<&str>]) -> Self {
        Self::new(MembershipOperator::In, values)
    }

    pub fn not_in(values: &[Option<&str>]) -> Self {
        Self::new(MembershipOperator::NotIn, values)
    }

    fn new(operator: MembershipOperator, values: &[Option<&str>]) -> Self {
        Self {
            operator,
            values: values.iter().map(|v| v.map(str::to_string)).collect(),
        }
    }

    /// IN passes when any of the task's values is listed, NOT_IN when none is.
    pub fn matches<'a, I>(&self, task_values: I) -> bool
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let listed = task_values
            .into_iter()
            .any(|v| self.values.iter().any(|f| f.as_deref() == v));
        match self.operator {
            MembershipOperator::In => listed,
            MembershipOperator::NotIn => !listed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Years,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DateFilter {
    /// Absolute bounds, both inclusive
    Fixed {
        #[serde(default)]
        start: Option<DateTime<Utc>>,
        #[serde(default)]
        end: Option<DateTime<Utc>>,
    },
    /// The last `value` units up to now
    Rolling { value: u32, unit: DateUnit },
    /// Calendar aligned: 0 is the current unit so far, n the n-th previous full unit onwards
    Relative { value: u32, unit: DateUnit },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum ReportFilter {
    Assignee(MembershipFilter),
    CandidateGroup(MembershipFilter),
    FlowNodeStartDate(DateFilter),
    FlowNodeEndDate(DateFilter),
}

impl ReportFilter {
    pub fn kind(&self) -> &'static str {
        match self {
            ReportFilter::Assignee(_) => "assignee",
            ReportFilter::CandidateGroup(_) => "candidateGroup",
            ReportFilter::FlowNodeStartDate(_) => "flowNodeStartDate",
            ReportFilter::FlowNodeEndDate(_) => "flowNodeEndDate",
        }
    }
}
