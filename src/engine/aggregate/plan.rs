use crate::engine::aggregate::cell::CellSamples;
use crate::engine::errors::ReportError;
use crate::engine::types::{
    AggregationType, DurationKind, ReportSpec, SortBy, SortSpec, ViewProperty,
};
use crate::shared::config::ReportConfig;

/// One value computed for every cell of the hypermap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    Duration {
        aggregation: AggregationType,
        kind: DurationKind,
    },
    /// Number of samples in the cell
    Frequency,
}

impl Measure {
    pub fn evaluate(&self, cell: &CellSamples) -> Option<f64> {
        match self {
            Measure::Duration { aggregation, .. } => aggregation.compute(&cell.durations),
            Measure::Frequency => match cell.sample_count {
                0 => None,
                n => Some(n as f64),
            },
        }
    }

    pub fn aggregation(&self) -> Option<AggregationType> {
        match self {
            Measure::Duration { aggregation, .. } => Some(*aggregation),
            Measure::Frequency => None,
        }
    }
}

/// Measures a report evaluates, one independent hypermap each.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePlan {
    measures: Vec<Measure>,
}

impl AggregatePlan {
    pub fn from_spec(spec: &ReportSpec, config: &ReportConfig) -> Result<Self, ReportError> {
        let property = spec
            .view
            .property
            .ok_or_else(|| ReportError::InvalidReport("view property is missing".into()))?;

        let measures = match property {
            ViewProperty::Frequency => vec![Measure::Frequency],
            ViewProperty::Duration => {
                let requested = if spec.aggregation_types.is_empty() {
                    &config.default_aggregation_types
                } else {
                    &spec.aggregation_types
                };
                let mut types = AggregationType::dedup(requested);
                if types.is_empty() {
                    types.push(AggregationType::Avg);
                }
                types
                    .into_iter()
                    .map(|aggregation| Measure::Duration {
                        aggregation,
                        kind: spec.duration_kind,
                    })
                    .collect()
            }
        };

        Ok(Self { measures })
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Index of the measure whose values drive BY_VALUE ordering. Key and
    /// label sorts never read values, so their nominated type is ignored.
    pub fn sort_measure_index(&self, sort: Option<&SortSpec>) -> Result<usize, ReportError> {
        let Some(wanted) = sort
            .filter(|s| s.by == SortBy::Value)
            .and_then(|s| s.aggregation_type)
        else {
            return Ok(0);
        };
        if self.measures.iter().all(|m| m.aggregation().is_none()) {
            return Ok(0);
        }
        self.measures
            .iter()
            .position(|m| m.aggregation() == Some(wanted))
            .ok_or_else(|| {
                ReportError::Configuration(format!(
                    "sort aggregation {} is not among the requested aggregation types",
                    wanted
                ))
            })
    }
}
