use tracing::debug;

use super::{DefinitionCatalog, DefinitionVersion, FlowNodeSet};
use crate::engine::errors::SourceError;
use crate::engine::types::VersionSelector;

/// Determines which user tasks a report groups by.
///
/// A single concrete version reports on exactly that version's tasks. Any other
/// selection (all, latest, or several versions) normalizes to the latest
/// deployed version, so reports spanning versions keep the newest shape no
/// matter which versions contributed samples. A version list naming no
/// deployed version resolves to the empty set.
pub struct FlowNodeSetResolver<'a> {
    catalog: &'a dyn DefinitionCatalog,
}

impl<'a> FlowNodeSetResolver<'a> {
    pub fn new(catalog: &'a dyn DefinitionCatalog) -> Self {
        Self { catalog }
    }

    pub fn resolve(
        &self,
        key: &str,
        versions: &VersionSelector,
        tenant_ids: &[Option<String>],
    ) -> Result<FlowNodeSet, SourceError> {
        let deployed = self.catalog.deployed_versions(key, tenant_ids)?;
        if deployed.is_empty() {
            debug!(
                target: "task_report::resolver",
                key,
                "No deployed definition found"
            );
            return Ok(FlowNodeSet::empty());
        }

        let latest = deployed.iter().map(|d| d.version).max();
        let target = match (versions, versions.as_single()) {
            (_, Some(version)) => Some(version),
            // a version list only normalizes if one of its versions exists
            (VersionSelector::Specific(requested), None) => requested
                .iter()
                .any(|v| deployed.iter().any(|d| d.version == *v))
                .then_some(latest)
                .flatten(),
            (VersionSelector::All | VersionSelector::Latest, None) => latest,
        };

        let Some(target) = target else {
            return Ok(FlowNodeSet::empty());
        };

        let set = Self::user_tasks_of(&deployed, target);
        debug!(
            target: "task_report::resolver",
            key,
            version = target,
            flow_nodes = set.len(),
            "Resolved flow node set"
        );
        Ok(set)
    }

    /// Union of the user tasks every tenant deployed under `version`.
    fn user_tasks_of(deployed: &[DefinitionVersion], version: u32) -> FlowNodeSet {
        deployed
            .iter()
            .filter(|d| d.version == version)
            .flat_map(|d| d.user_tasks.iter().cloned())
            .collect()
    }
}
