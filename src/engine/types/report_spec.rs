use serde::{Deserialize, Serialize};

use super::aggregation::{AggregationType, DurationKind, ExecutionState};
use super::filter::ReportFilter;
use super::sort::SortSpec;
use crate::engine::errors::ReportError;

/// Which deployed versions of a process definition a report covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "versions", rename_all = "camelCase")]
pub enum VersionSelector {
    #[default]
    All,
    Latest,
    Specific(Vec<u32>),
}

impl VersionSelector {
    pub fn single(version: u32) -> Self {
        VersionSelector::Specific(vec![version])
    }

    /// The one concrete version named, if exactly one is.
    pub fn as_single(&self) -> Option<u32> {
        match self {
            VersionSelector::Specific(versions) if versions.len() == 1 => Some(versions[0]),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewEntity {
    UserTask,
    FlowNode,
    ProcessInstance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewProperty {
    Duration,
    Frequency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupByType {
    UserTasks,
    FlowNodes,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DistributedByType {
    CandidateGroup,
    Assignee,
    None,
}

/// Report shape. Every part is optional on the wire and checked before evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    #[serde(default)]
    pub entity: Option<ViewEntity>,
    #[serde(default)]
    pub property: Option<ViewProperty>,
    #[serde(default)]
    pub group_by: Option<GroupByType>,
    #[serde(default)]
    pub distributed_by: Option<DistributedByType>,
}

impl ReportView {
    pub fn user_task(property: ViewProperty) -> Self {
        Self {
            entity: Some(ViewEntity::UserTask),
            property: Some(property),
            group_by: Some(GroupByType::UserTasks),
            distributed_by: Some(DistributedByType::CandidateGroup),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSpec {
    pub process_definition_key: String,
    #[serde(default)]
    pub versions: VersionSelector,
    /// Empty means every tenant; a `None` entry is the default tenant
    #[serde(default)]
    pub tenant_ids: Vec<Option<String>>,
    #[serde(default)]
    pub view: ReportView,
    #[serde(default)]
    pub duration_kind: DurationKind,
    /// Empty means the configured default
    #[serde(default)]
    pub aggregation_types: Vec<AggregationType>,
    #[serde(default)]
    pub execution_state: ExecutionState,
    #[serde(default)]
    pub filters: Vec<ReportFilter>,
    #[serde(default)]
    pub group_sort: Option<SortSpec>,
    #[serde(default)]
    pub distribution_sort: Option<SortSpec>,
    #[serde(default)]
    pub bucket_limit: Option<usize>,
}

impl ReportSpec {
    /// User task duration by user task, distributed by candidate group.
    pub fn user_task_duration(process_definition_key: &str) -> Self {
        Self {
            process_definition_key: process_definition_key.to_string(),
            versions: VersionSelector::All,
            tenant_ids: Vec::new(),
            view: ReportView::user_task(ViewProperty::Duration),
            duration_kind: DurationKind::Total,
            aggregation_types: Vec::new(),
            execution_state: ExecutionState::All,
            filters: Vec::new(),
            group_sort: None,
            distribution_sort: None,
            bucket_limit: None,
        }
    }

    /// Parses a camelCase JSON report. Unknown aggregation types or filter
    /// subtypes surface as configuration errors.
    pub fn from_json(input: &str) -> Result<Self, ReportError> {
        serde_json::from_str(input).map_err(|e| ReportError::Configuration(e.to_string()))
    }

    /// Same definition, version and tenant scope with every other filter removed.
    pub fn without_filters(&self) -> Self {
        Self {
            execution_state: ExecutionState::All,
            filters: Vec::new(),
            ..self.clone()
        }
    }
}
