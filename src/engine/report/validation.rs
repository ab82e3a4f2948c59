use crate::engine::errors::ReportError;
use crate::engine::types::{
    AggregationType, DateFilter, DistributedByType, GroupByType, ReportFilter, ReportSpec,
    SortSpec, ViewEntity, ViewProperty,
};
use crate::shared::config::ReportConfig;

/// Rejects reports the evaluator cannot run, before any sample is fetched.
pub struct ReportValidator;

impl ReportValidator {
    pub fn validate(spec: &ReportSpec) -> Result<(), ReportError> {
        Self::validate_view(spec)?;
        if let Some(limit) = spec.bucket_limit {
            check_bucket_limit(limit).map_err(ReportError::InvalidReport)?;
        }
        for aggregation in &spec.aggregation_types {
            check_aggregation(aggregation).map_err(ReportError::InvalidReport)?;
        }
        for sort in [&spec.group_sort, &spec.distribution_sort].into_iter().flatten() {
            Self::validate_sort(sort)?;
        }
        for filter in &spec.filters {
            Self::validate_filter(filter)?;
        }
        Ok(())
    }

    fn validate_view(spec: &ReportSpec) -> Result<(), ReportError> {
        let view = &spec.view;
        let entity = view
            .entity
            .ok_or_else(|| ReportError::InvalidReport("view entity is missing".into()))?;
        let property = view
            .property
            .ok_or_else(|| ReportError::InvalidReport("view property is missing".into()))?;
        let group_by = view
            .group_by
            .ok_or_else(|| ReportError::InvalidReport("group by type is missing".into()))?;
        let distributed_by = view
            .distributed_by
            .ok_or_else(|| ReportError::InvalidReport("distributed by type is missing".into()))?;

        match (entity, property, group_by, distributed_by) {
            (
                ViewEntity::UserTask,
                ViewProperty::Duration | ViewProperty::Frequency,
                GroupByType::UserTasks,
                DistributedByType::CandidateGroup,
            ) => Ok(()),
            other => Err(ReportError::UnsupportedView(format!("{:?}", other))),
        }
    }

    /// Defaults the evaluator falls back to obey the same rules as report fields.
    pub fn validate_config(config: &ReportConfig) -> Result<(), ReportError> {
        let configuration =
            |e: String| ReportError::Configuration(format!("report defaults: {}", e));
        check_bucket_limit(config.default_bucket_limit).map_err(configuration)?;
        for aggregation in &config.default_aggregation_types {
            check_aggregation(aggregation).map_err(configuration)?;
        }
        Ok(())
    }

    fn validate_sort(sort: &SortSpec) -> Result<(), ReportError> {
        match &sort.aggregation_type {
            Some(aggregation) => {
                check_aggregation(aggregation).map_err(ReportError::InvalidReport)
            }
            None => Ok(()),
        }
    }

    fn validate_filter(filter: &ReportFilter) -> Result<(), ReportError> {
        let date = match filter {
            ReportFilter::FlowNodeStartDate(d) | ReportFilter::FlowNodeEndDate(d) => d,
            ReportFilter::Assignee(_) | ReportFilter::CandidateGroup(_) => return Ok(()),
        };
        if let DateFilter::Fixed {
            start: Some(start),
            end: Some(end),
        } = date
        {
            if start > end {
                return Err(ReportError::Configuration(format!(
                    "{} filter starts after it ends: {} > {}",
                    filter.kind(),
                    start,
                    end
                )));
            }
        }
        Ok(())
    }
}

fn check_bucket_limit(limit: usize) -> Result<(), String> {
    match limit {
        0 => Err("bucket limit must be positive".into()),
        _ => Ok(()),
    }
}

fn check_aggregation(aggregation: &AggregationType) -> Result<(), String> {
    match aggregation {
        AggregationType::Percentile(p) if !(*p > 0.0 && *p <= 100.0) => {
            Err(format!("percentile {} is outside (0, 100]", p))
        }
        _ => Ok(()),
    }
}
