use crate::engine::types::AggregationType;

/// Durations of one cell: finite values only, sorted ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedDurations {
    values: Vec<f64>,
}

impl PreparedDurations {
    pub fn new(mut values: Vec<f64>) -> Self {
        values.retain(|v| v.is_finite());
        values.sort_by(f64::total_cmp);
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AggregationType {
    /// Computes this statistic, or `None` for an empty multiset.
    pub fn compute(&self, durations: &PreparedDurations) -> Option<f64> {
        let values = durations.as_slice();
        let (first, last) = (*values.first()?, *values.last()?);
        let value = match self {
            AggregationType::Min => first,
            AggregationType::Max => last,
            AggregationType::Sum => values.iter().sum(),
            AggregationType::Avg => values.iter().sum::<f64>() / values.len() as f64,
            AggregationType::Percentile(p) => percentile(values, *p),
        };
        Some(value)
    }
}

/// Linear interpolation between the closest ranks of a sorted, non-empty slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let w = rank - lower as f64;
        sorted[lower] * (1.0 - w) + sorted[upper] * w
    }
}

/// Computes every requested type over one shared prepared multiset.
pub fn aggregate(
    durations: Vec<f64>,
    types: &[AggregationType],
) -> Vec<(AggregationType, Option<f64>)> {
    let prepared = PreparedDurations::new(durations);
    types.iter().map(|t| (*t, t.compute(&prepared))).collect()
}
