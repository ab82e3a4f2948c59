use serde::Serialize;

use crate::engine::types::{AggregationType, DurationKind, ViewProperty};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionEntry {
    pub key: String,
    pub label: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry {
    pub key: String,
    pub label: String,
    pub value: Vec<DistributionEntry>,
}

impl GroupEntry {
    pub fn distribution(&self, key: &str) -> Option<&DistributionEntry> {
        self.value.iter().find(|d| d.key == key)
    }

    pub fn distribution_keys(&self) -> Vec<&str> {
        self.value.iter().map(|d| d.key.as_str()).collect()
    }
}

/// Hypermap of one measure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureResult {
    pub property: ViewProperty,
    pub aggregation_type: Option<AggregationType>,
    pub duration_kind: Option<DurationKind>,
    pub data: Vec<GroupEntry>,
}

impl MeasureResult {
    pub fn group(&self, key: &str) -> Option<&GroupEntry> {
        self.data.iter().find(|g| g.key == key)
    }

    pub fn group_keys(&self) -> Vec<&str> {
        self.data.iter().map(|g| g.key.as_str()).collect()
    }

    /// Cell value, flattened over missing group, missing key and null cell.
    pub fn value(&self, group: &str, distribution: &str) -> Option<f64> {
        self.group(group)?.distribution(distribution)?.value
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HyperMapResult {
    pub instance_count: u64,
    pub instance_count_without_filters: u64,
    pub is_complete: bool,
    pub measures: Vec<MeasureResult>,
}

impl HyperMapResult {
    pub fn measure(&self, aggregation: AggregationType) -> Option<&MeasureResult> {
        self.measures
            .iter()
            .find(|m| m.aggregation_type == Some(aggregation))
    }

    /// The first measure; a report always evaluates at least one.
    pub fn first_measure(&self) -> Option<&MeasureResult> {
        self.measures.first()
    }
}
