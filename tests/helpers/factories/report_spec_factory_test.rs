use crate::engine::types::{
    AggregationType, ExecutionState, SortBy, SortOrder, SortSpec, VersionSelector, ViewProperty,
};
use crate::test_helpers::factories::ReportSpecFactory;

#[test]
fn builds_duration_report_with_overrides() {
    let spec = ReportSpecFactory::user_task_duration("invoice")
        .with_version(3)
        .with_aggregation_types(&[AggregationType::Max])
        .with_execution_state(ExecutionState::Running)
        .with_group_sort(SortSpec::new(SortBy::Label, SortOrder::Desc))
        .with_bucket_limit(4)
        .create();

    assert_eq!(spec.process_definition_key, "invoice");
    assert_eq!(spec.versions, VersionSelector::single(3));
    assert_eq!(spec.aggregation_types, vec![AggregationType::Max]);
    assert_eq!(spec.execution_state, ExecutionState::Running);
    assert_eq!(spec.group_sort.unwrap().by, SortBy::Label);
    assert_eq!(spec.bucket_limit, Some(4));
}

#[test]
fn frequency_report_switches_view_property() {
    let spec = ReportSpecFactory::user_task_frequency("invoice").create();
    assert_eq!(spec.view.property, Some(ViewProperty::Frequency));
}
