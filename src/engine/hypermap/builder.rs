use super::axis::{CellIndex, DistributionKey};
use super::result::{DistributionEntry, GroupEntry, HyperMapResult, MeasureResult};
use crate::engine::aggregate::Measure;
use crate::engine::errors::ReportError;
use crate::engine::types::{DurationKind, ViewProperty};
use crate::shared::config::ReportConfig;

/// Counters reported next to the hypermap, computed upstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub instance_count: u64,
    pub instance_count_without_filters: u64,
    pub is_complete: bool,
}

/// Turns cell values into the presented result. This is the only place the
/// unassigned key becomes a string.
pub struct HyperMapResultBuilder<'a> {
    config: &'a ReportConfig,
}

impl<'a> HyperMapResultBuilder<'a> {
    pub fn new(config: &'a ReportConfig) -> Self {
        Self { config }
    }

    fn present_key(&self, key: &DistributionKey) -> (String, String) {
        match key {
            Some(group) => (group.clone(), group.clone()),
            None => (
                self.config.unassigned_key.clone(),
                self.config.unassigned_label.clone(),
            ),
        }
    }

    /// Fails when a real candidate group would be presented under the
    /// unassigned key next to the unassigned distribution.
    pub fn check_keys(&self, index: &CellIndex) -> Result<(), ReportError> {
        let keys = index.keys();
        let clash = keys.contains(&None)
            && keys
                .iter()
                .flatten()
                .any(|group| *group == self.config.unassigned_key);
        if clash {
            return Err(ReportError::Configuration(format!(
                "candidate group '{}' collides with the unassigned key",
                self.config.unassigned_key
            )));
        }
        Ok(())
    }

    /// Every group with every distribution key in axis order; cells without
    /// samples are `None`.
    pub fn entries(&self, index: &CellIndex, measure: &Measure) -> Vec<GroupEntry> {
        let keys: Vec<(String, String)> =
            index.keys().iter().map(|k| self.present_key(k)).collect();

        index
            .groups()
            .iter()
            .enumerate()
            .map(|(g, node)| GroupEntry {
                key: node.id.clone(),
                label: node.label().to_string(),
                value: keys
                    .iter()
                    .enumerate()
                    .map(|(k, (key, label))| DistributionEntry {
                        key: key.clone(),
                        label: label.clone(),
                        value: index.cell(g, k).and_then(|cell| measure.evaluate(cell)),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Collapsed value of each group over all of its samples.
    pub fn group_totals(&self, index: &CellIndex, measure: &Measure) -> Vec<Option<f64>> {
        (0..index.groups().len())
            .map(|g| index.group_total(g).and_then(|cell| measure.evaluate(cell)))
            .collect()
    }

    pub fn measure_result(&self, measure: &Measure, data: Vec<GroupEntry>) -> MeasureResult {
        let (property, duration_kind): (ViewProperty, Option<DurationKind>) = match measure {
            Measure::Duration { kind, .. } => (ViewProperty::Duration, Some(*kind)),
            Measure::Frequency => (ViewProperty::Frequency, None),
        };
        MeasureResult {
            property,
            aggregation_type: measure.aggregation(),
            duration_kind,
            data,
        }
    }

    pub fn build(&self, measures: Vec<MeasureResult>, counters: Counters) -> HyperMapResult {
        HyperMapResult {
            instance_count: counters.instance_count,
            instance_count_without_filters: counters.instance_count_without_filters,
            is_complete: counters.is_complete,
            measures,
        }
    }
}
