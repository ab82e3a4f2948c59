use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use super::validation::ReportValidator;
use crate::engine::aggregate::AggregatePlan;
use crate::engine::definition::{DefinitionCatalog, FlowNodeSetResolver};
use crate::engine::errors::ReportError;
use crate::engine::hypermap::{
    BucketLimiter, CellIndex, Counters, GroupEntry, HyperMapResult, HyperMapResultBuilder,
    ResultSorter,
};
use crate::engine::source::{Clock, DurationSampleSource, SystemClock};
use crate::engine::types::ReportSpec;
use crate::shared::config::ReportConfig;

/// Evaluates user task reports against a sample source and a definition catalog.
///
/// Samples are fetched once per report. Each measure is then computed against
/// the same fixed axes in parallel; one ordering and one bucket limit are
/// applied to all of them.
pub struct ReportEvaluator<'a> {
    source: &'a dyn DurationSampleSource,
    catalog: &'a dyn DefinitionCatalog,
    config: ReportConfig,
    clock: Arc<dyn Clock>,
}

impl<'a> ReportEvaluator<'a> {
    pub fn new(
        source: &'a dyn DurationSampleSource,
        catalog: &'a dyn DefinitionCatalog,
        config: ReportConfig,
    ) -> Self {
        Self {
            source,
            catalog,
            config,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn evaluate(&self, spec: &ReportSpec) -> Result<HyperMapResult, ReportError> {
        self.run(spec).inspect_err(|e| e.log_error())
    }

    fn run(&self, spec: &ReportSpec) -> Result<HyperMapResult, ReportError> {
        ReportValidator::validate_config(&self.config)?;
        ReportValidator::validate(spec)?;

        let plan = AggregatePlan::from_spec(spec, &self.config)?;
        let group_measure = plan.sort_measure_index(spec.group_sort.as_ref())?;
        let distribution_measure = plan.sort_measure_index(spec.distribution_sort.as_ref())?;

        let flow_nodes = FlowNodeSetResolver::new(self.catalog).resolve(
            &spec.process_definition_key,
            &spec.versions,
            &spec.tenant_ids,
        )?;
        let batch = self.source.fetch(spec, self.clock.as_ref())?;
        let index = CellIndex::build(&flow_nodes, &batch.samples);

        debug!(
            target: "task_report::evaluator",
            key = %spec.process_definition_key,
            groups = index.groups().len(),
            distribution_keys = index.keys().len(),
            measures = plan.measures().len(),
            "Built report axes"
        );

        let builder = HyperMapResultBuilder::new(&self.config);
        builder.check_keys(&index)?;
        let entries: Vec<Vec<GroupEntry>> = plan
            .measures()
            .par_iter()
            .map(|measure| builder.entries(&index, measure))
            .collect();

        let totals = builder.group_totals(&index, &plan.measures()[group_measure]);
        let mut order = ResultSorter::new(spec.group_sort.as_ref(), spec.distribution_sort.as_ref())
            .order(
                &entries[group_measure],
                &totals,
                &entries[distribution_measure],
            );

        let limit = spec.bucket_limit.unwrap_or(self.config.default_bucket_limit);
        let (groups, is_complete) = BucketLimiter::new(limit).limit(order.groups);
        order.groups = groups;

        let measures = plan
            .measures()
            .iter()
            .zip(entries)
            .map(|(measure, data)| builder.measure_result(measure, order.apply(data)))
            .collect();

        let result = builder.build(
            measures,
            Counters {
                instance_count: batch.instance_count,
                instance_count_without_filters: batch.instance_count_without_filters,
                is_complete,
            },
        );

        info!(
            target: "task_report::evaluator",
            key = %spec.process_definition_key,
            groups = order.groups.len(),
            instance_count = result.instance_count,
            is_complete,
            "Evaluated report"
        );
        Ok(result)
    }
}
