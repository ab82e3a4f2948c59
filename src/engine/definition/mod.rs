mod resolver;

pub use resolver::FlowNodeSetResolver;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::engine::errors::SourceError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    pub name: Option<String>,
}

impl FlowNode {
    pub fn new(id: &str, name: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            name: name.map(str::to_string),
        }
    }

    /// Display label, falling back to the id for unnamed nodes
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// One deployed version of a process definition and its user tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefinitionVersion {
    pub key: String,
    pub version: u32,
    pub tenant_id: Option<String>,
    pub user_tasks: Vec<FlowNode>,
}

/// Supplies deployed process-definition versions.
pub trait DefinitionCatalog: Send + Sync {
    /// All deployed versions of `key` visible to the given tenants
    /// (empty slice = every tenant).
    fn deployed_versions(
        &self,
        key: &str,
        tenant_ids: &[Option<String>],
    ) -> Result<Vec<DefinitionVersion>, SourceError>;
}

/// Authoritative group axis of a report, in definition order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowNodeSet {
    nodes: IndexMap<String, FlowNode>,
}

impl FlowNodeSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: FlowNode) {
        self.nodes.entry(node.id.clone()).or_insert(node);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowNode> {
        self.nodes.values()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<FlowNode> for FlowNodeSet {
    fn from_iter<T: IntoIterator<Item = FlowNode>>(iter: T) -> Self {
        let mut set = FlowNodeSet::empty();
        for node in iter {
            set.insert(node);
        }
        set
    }
}
