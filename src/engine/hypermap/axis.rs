use std::collections::{BTreeSet, HashMap, HashSet};

use ahash::RandomState as AHashRandomState;
use tracing::debug;

use crate::engine::aggregate::{CellAccumulator, CellSamples};
use crate::engine::definition::{FlowNode, FlowNodeSet};
use crate::engine::source::Sample;

/// Candidate group id, or `None` for tasks nobody was eligible for.
pub type DistributionKey = Option<String>;

/// Union of the distribution keys of every sample that lands in a resolved group.
pub fn distribution_axis(flow_nodes: &FlowNodeSet, samples: &[Sample]) -> Vec<DistributionKey> {
    samples
        .iter()
        .filter(|s| flow_nodes.contains(&s.flow_node_id))
        .map(|s| &s.candidate_group_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}

/// Fixed group and distribution axes with the samples of every non-empty cell.
///
/// Built once per evaluation and shared read-only by every measure.
#[derive(Debug, Clone)]
pub struct CellIndex {
    groups: Vec<FlowNode>,
    keys: Vec<DistributionKey>,
    cells: HashMap<(usize, usize), CellSamples, AHashRandomState>,
    group_totals: Vec<CellSamples>,
}

impl CellIndex {
    pub fn build(flow_nodes: &FlowNodeSet, samples: &[Sample]) -> Self {
        let keys = distribution_axis(flow_nodes, samples);
        let key_index: HashMap<&DistributionKey, usize, AHashRandomState> = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k, i))
            .collect();

        let mut cells: HashMap<(usize, usize), CellAccumulator, AHashRandomState> =
            HashMap::with_hasher(AHashRandomState::new());
        let mut totals: Vec<CellAccumulator> = vec![CellAccumulator::default(); flow_nodes.len()];
        let mut counted_tasks: HashSet<&str, AHashRandomState> = HashSet::default();
        let mut outside_axis = 0usize;

        for sample in samples {
            let Some(group) = flow_nodes.index_of(&sample.flow_node_id) else {
                outside_axis += 1;
                continue;
            };
            // every in-scope key was collected above
            let Some(&key) = key_index.get(&sample.candidate_group_id) else {
                continue;
            };
            cells
                .entry((group, key))
                .or_default()
                .push(sample.duration_ms);
            // group totals see each task instance once, however many groups it fans out to
            if counted_tasks.insert(sample.task_instance_id.as_str()) {
                totals[group].push(sample.duration_ms);
            }
        }

        if outside_axis > 0 {
            debug!(
                target: "task_report::axis",
                samples = outside_axis,
                "Dropped samples of flow nodes outside the resolved set"
            );
        }

        Self {
            groups: flow_nodes.iter().cloned().collect(),
            keys,
            cells: cells
                .into_iter()
                .map(|(pos, acc)| (pos, acc.finish()))
                .collect(),
            group_totals: totals.into_iter().map(CellAccumulator::finish).collect(),
        }
    }

    pub fn groups(&self) -> &[FlowNode] {
        &self.groups
    }

    pub fn keys(&self) -> &[DistributionKey] {
        &self.keys
    }

    /// Samples of one cell, `None` when no sample references the pair.
    pub fn cell(&self, group: usize, key: usize) -> Option<&CellSamples> {
        self.cells.get(&(group, key))
    }

    /// One entry per task instance of a group regardless of distribution key.
    pub fn group_total(&self, group: usize) -> Option<&CellSamples> {
        self.group_totals.get(group)
    }
}
