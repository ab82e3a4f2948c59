mod aggregation;
mod filter;
mod report_spec;
mod sort;

pub use aggregation::{AggregationType, DurationKind, ExecutionState};
pub use filter::{DateFilter, DateUnit, MembershipFilter, MembershipOperator, ReportFilter};
pub use report_spec::{
    DistributedByType, GroupByType, ReportSpec, ReportView, VersionSelector, ViewEntity,
    ViewProperty,
};
pub use sort::{SortBy, SortOrder, SortSpec};
