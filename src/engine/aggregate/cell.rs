use super::ops::PreparedDurations;

/// Collects the samples falling into one hypermap cell.
#[derive(Debug, Clone, Default)]
pub struct CellAccumulator {
    durations: Vec<f64>,
    sample_count: usize,
}

impl CellAccumulator {
    /// Counts the sample; only a present duration joins the multiset.
    pub fn push(&mut self, duration_ms: Option<f64>) {
        self.sample_count += 1;
        if let Some(d) = duration_ms {
            self.durations.push(d);
        }
    }

    pub fn finish(self) -> CellSamples {
        CellSamples {
            durations: PreparedDurations::new(self.durations),
            sample_count: self.sample_count,
        }
    }
}

/// Finished cell contents every measure reads from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellSamples {
    pub durations: PreparedDurations,
    pub sample_count: usize,
}
