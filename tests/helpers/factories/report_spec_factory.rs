use crate::engine::types::{
    AggregationType, DurationKind, ExecutionState, ReportFilter, ReportSpec, ReportView,
    SortSpec, VersionSelector, ViewProperty,
};

pub struct ReportSpecFactory {
    inner: ReportSpec,
}

impl ReportSpecFactory {
    pub fn user_task_duration(key: &str) -> Self {
        Self {
            inner: ReportSpec::user_task_duration(key),
        }
    }

    pub fn user_task_frequency(key: &str) -> Self {
        let mut inner = ReportSpec::user_task_duration(key);
        inner.view = ReportView::user_task(ViewProperty::Frequency);
        Self { inner }
    }

    pub fn with_versions(mut self, versions: VersionSelector) -> Self {
        self.inner.versions = versions;
        self
    }

    pub fn with_version(self, version: u32) -> Self {
        self.with_versions(VersionSelector::single(version))
    }

    pub fn with_tenants(mut self, tenants: &[Option<&str>]) -> Self {
        self.inner.tenant_ids = tenants.iter().map(|t| t.map(str::to_string)).collect();
        self
    }

    pub fn with_view(mut self, view: ReportView) -> Self {
        self.inner.view = view;
        self
    }

    pub fn with_duration_kind(mut self, kind: DurationKind) -> Self {
        self.inner.duration_kind = kind;
        self
    }

    pub fn with_aggregation_types(mut self, types: &[AggregationType]) -> Self {
        self.inner.aggregation_types = types.to_vec();
        self
    }

    pub fn with_execution_state(mut self, state: ExecutionState) -> Self {
        self.inner.execution_state = state;
        self
    }

    pub fn with_filter(mut self, filter: ReportFilter) -> Self {
        self.inner.filters.push(filter);
        self
    }

    pub fn with_group_sort(mut self, sort: SortSpec) -> Self {
        self.inner.group_sort = Some(sort);
        self
    }

    pub fn with_distribution_sort(mut self, sort: SortSpec) -> Self {
        self.inner.distribution_sort = Some(sort);
        self
    }

    pub fn with_bucket_limit(mut self, limit: usize) -> Self {
        self.inner.bucket_limit = Some(limit);
        self
    }

    pub fn create(self) -> ReportSpec {
        self.inner
    }
}
