use chrono::{DateTime, Datelike, Days, DurationRound, Months, NaiveDate, TimeDelta, TimeZone, Utc};

use super::task::UserTaskInstance;
use crate::engine::errors::SourceError;
use crate::engine::types::{
    DateFilter, DateUnit, ExecutionState, MembershipFilter, ReportFilter, ReportSpec,
};

/// Resolved time window a task date must fall into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub end_inclusive: bool,
}

impl DateRange {
    /// Both bounds inclusive; a missing bound is open.
    pub fn inclusive(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            start,
            end,
            end_inclusive: true,
        }
    }

    /// `[start, end)`
    pub fn end_exclusive(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            end_inclusive: false,
        }
    }

    /// Resolves a date filter against `now`.
    pub fn resolve(filter: &DateFilter, now: DateTime<Utc>) -> Result<Self, SourceError> {
        match filter {
            DateFilter::Fixed { start, end } => Ok(Self::inclusive(*start, *end)),
            DateFilter::Rolling { value, unit } => {
                let start = shift_back(now, *unit, *value).ok_or_else(|| overflow(filter))?;
                Ok(Self::inclusive(Some(start), Some(now)))
            }
            DateFilter::Relative { value, unit } => {
                let current = start_of_unit(now, *unit).ok_or_else(|| overflow(filter))?;
                if *value == 0 {
                    return Ok(Self::inclusive(Some(current), Some(now)));
                }
                let start = shift_back(current, *unit, *value).ok_or_else(|| overflow(filter))?;
                Ok(Self::end_exclusive(start, current))
            }
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        if self.start.is_some_and(|start| instant < start) {
            return false;
        }
        match self.end {
            Some(end) if self.end_inclusive => instant <= end,
            Some(end) => instant < end,
            None => true,
        }
    }
}

fn overflow(filter: &DateFilter) -> SourceError {
    SourceError::Filter(format!("date filter out of range: {:?}", filter))
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| Utc.from_utc_datetime(&dt))
}

fn start_of_unit(now: DateTime<Utc>, unit: DateUnit) -> Option<DateTime<Utc>> {
    let date = now.date_naive();
    match unit {
        DateUnit::Minutes => now.duration_trunc(TimeDelta::minutes(1)).ok(),
        DateUnit::Hours => now.duration_trunc(TimeDelta::hours(1)).ok(),
        DateUnit::Days => midnight(date),
        DateUnit::Weeks => {
            let back = date.weekday().num_days_from_monday() as u64;
            date.checked_sub_days(Days::new(back)).and_then(midnight)
        }
        DateUnit::Months => NaiveDate::from_ymd_opt(date.year(), date.month(), 1).and_then(midnight),
        DateUnit::Years => NaiveDate::from_ymd_opt(date.year(), 1, 1).and_then(midnight),
    }
}

fn shift_back(instant: DateTime<Utc>, unit: DateUnit, value: u32) -> Option<DateTime<Utc>> {
    let n = i64::from(value);
    match unit {
        DateUnit::Minutes => instant.checked_sub_signed(TimeDelta::try_minutes(n)?),
        DateUnit::Hours => instant.checked_sub_signed(TimeDelta::try_hours(n)?),
        DateUnit::Days => instant.checked_sub_signed(TimeDelta::try_days(n)?),
        DateUnit::Weeks => instant.checked_sub_signed(TimeDelta::try_weeks(n)?),
        DateUnit::Months => instant.checked_sub_months(Months::new(value)),
        DateUnit::Years => instant.checked_sub_months(Months::new(value.checked_mul(12)?)),
    }
}

/// Task-level predicate assembled from a report's execution state and filters.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFilter {
    execution_state: ExecutionState,
    assignee: Vec<MembershipFilter>,
    candidate_group: Vec<MembershipFilter>,
    start_date: Vec<DateRange>,
    end_date: Vec<DateRange>,
}

impl TaskFilter {
    pub fn from_spec(spec: &ReportSpec, now: DateTime<Utc>) -> Result<Self, SourceError> {
        let mut filter = Self {
            execution_state: spec.execution_state,
            assignee: Vec::new(),
            candidate_group: Vec::new(),
            start_date: Vec::new(),
            end_date: Vec::new(),
        };
        for f in &spec.filters {
            match f {
                ReportFilter::Assignee(m) => filter.assignee.push(m.clone()),
                ReportFilter::CandidateGroup(m) => filter.candidate_group.push(m.clone()),
                ReportFilter::FlowNodeStartDate(d) => {
                    filter.start_date.push(DateRange::resolve(d, now)?)
                }
                ReportFilter::FlowNodeEndDate(d) => {
                    filter.end_date.push(DateRange::resolve(d, now)?)
                }
            }
        }
        Ok(filter)
    }

    pub fn accepts(&self, task: &UserTaskInstance) -> bool {
        if !self.execution_state.matches(task.is_ended(), task.canceled) {
            return false;
        }
        if !self
            .assignee
            .iter()
            .all(|m| m.matches([task.assignee.as_deref()]))
        {
            return false;
        }
        let groups = task.candidate_group_keys();
        if !self
            .candidate_group
            .iter()
            .all(|m| m.matches(groups.iter().copied()))
        {
            return false;
        }
        if !self.start_date.iter().all(|r| r.contains(task.start_date)) {
            return false;
        }
        // tasks without an end date never match an end date filter
        self.end_date
            .iter()
            .all(|r| task.end_date.is_some_and(|end| r.contains(end)))
    }
}
