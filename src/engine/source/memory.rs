use std::collections::HashSet;

use tracing::debug;

use super::clock::Clock;
use super::filter::TaskFilter;
use super::task::ProcessInstance;
use super::{DurationSampleSource, Sample, SampleBatch};
use crate::engine::definition::{DefinitionCatalog, DefinitionVersion};
use crate::engine::errors::SourceError;
use crate::engine::types::{ReportSpec, VersionSelector};

/// Process history held in memory. Serves both as definition catalog and as
/// sample source, applying every report filter itself.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    definitions: Vec<DefinitionVersion>,
    instances: Vec<ProcessInstance>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deploy(&mut self, definition: DefinitionVersion) {
        self.definitions.push(definition);
    }

    pub fn add_instance(&mut self, instance: ProcessInstance) {
        self.instances.push(instance);
    }

    fn tenant_visible(tenant_ids: &[Option<String>], tenant: &Option<String>) -> bool {
        tenant_ids.is_empty() || tenant_ids.contains(tenant)
    }

    /// Version numbers whose instances are in scope for the report.
    fn versions_in_scope(&self, spec: &ReportSpec) -> Result<HashSet<u32>, SourceError> {
        let deployed = self.deployed_versions(&spec.process_definition_key, &spec.tenant_ids)?;
        let versions = match &spec.versions {
            VersionSelector::All => deployed.iter().map(|d| d.version).collect(),
            VersionSelector::Latest => deployed.iter().map(|d| d.version).max().into_iter().collect(),
            VersionSelector::Specific(requested) => requested.iter().copied().collect(),
        };
        Ok(versions)
    }

    fn instances_in_scope<'a>(
        &'a self,
        spec: &'a ReportSpec,
        versions: &'a HashSet<u32>,
    ) -> impl Iterator<Item = &'a ProcessInstance> + 'a {
        self.instances.iter().filter(move |i| {
            i.definition_key == spec.process_definition_key
                && versions.contains(&i.definition_version)
                && Self::tenant_visible(&spec.tenant_ids, &i.tenant_id)
        })
    }
}

impl DefinitionCatalog for InMemoryStore {
    fn deployed_versions(
        &self,
        key: &str,
        tenant_ids: &[Option<String>],
    ) -> Result<Vec<DefinitionVersion>, SourceError> {
        Ok(self
            .definitions
            .iter()
            .filter(|d| d.key == key && Self::tenant_visible(tenant_ids, &d.tenant_id))
            .cloned()
            .collect())
    }
}

impl DurationSampleSource for InMemoryStore {
    fn fetch(&self, spec: &ReportSpec, clock: &dyn Clock) -> Result<SampleBatch, SourceError> {
        let now = clock.now();
        let versions = self.versions_in_scope(spec)?;
        let filter = TaskFilter::from_spec(spec, now)?;

        let unfiltered = spec.without_filters();
        let instance_count_without_filters =
            self.instances_in_scope(&unfiltered, &versions).count() as u64;

        let mut samples = Vec::new();
        let mut instance_count = 0u64;

        for instance in self.instances_in_scope(spec, &versions) {
            let mut contributed = false;
            for (position, task) in instance.user_tasks.iter().enumerate() {
                if !filter.accepts(task) {
                    continue;
                }
                contributed = true;
                let duration_ms = task.duration_ms(spec.duration_kind, now);
                let task_instance_id = format!("{}#{}", instance.id, position);
                for group in task.candidate_group_keys() {
                    samples.push(Sample {
                        flow_node_id: task.flow_node_id.clone(),
                        candidate_group_id: group.map(str::to_string),
                        duration_ms,
                        process_instance_id: instance.id.clone(),
                        task_instance_id: task_instance_id.clone(),
                    });
                }
            }
            if contributed {
                instance_count += 1;
            }
        }

        debug!(
            target: "task_report::source",
            key = %spec.process_definition_key,
            samples = samples.len(),
            instance_count,
            instance_count_without_filters,
            "Fetched samples from memory"
        );

        Ok(SampleBatch {
            samples,
            instance_count,
            instance_count_without_filters,
        })
    }
}
