use crate::engine::definition::{FlowNode, FlowNodeSet};
use crate::engine::hypermap::{CellIndex, distribution_axis};
use crate::test_helpers::factories::SampleFactory;

fn nodes(ids: &[&str]) -> FlowNodeSet {
    ids.iter().map(|id| FlowNode::new(id, None)).collect()
}

#[test]
fn axis_is_union_of_keys_across_groups() {
    let samples = vec![
        SampleFactory::new("a").with_group("sales").create(),
        SampleFactory::new("b").with_group("ops").create(),
        SampleFactory::new("b").with_group("sales").create(),
    ];
    let axis = distribution_axis(&nodes(&["a", "b"]), &samples);
    assert_eq!(axis, vec![Some("ops".to_string()), Some("sales".to_string())]);
}

#[test]
fn unassigned_key_present_only_when_some_sample_has_no_group() {
    let assigned = vec![SampleFactory::new("a").with_group("sales").create()];
    assert_eq!(
        distribution_axis(&nodes(&["a"]), &assigned),
        vec![Some("sales".to_string())]
    );

    let mixed = vec![
        SampleFactory::new("a").with_group("sales").create(),
        SampleFactory::new("a").unassigned().create(),
    ];
    assert_eq!(
        distribution_axis(&nodes(&["a"]), &mixed),
        vec![None, Some("sales".to_string())]
    );
}

#[test]
fn samples_outside_resolved_set_do_not_shape_axes() {
    let samples = vec![
        SampleFactory::new("a").with_group("sales").create(),
        SampleFactory::new("removedInLatest").with_group("legacy").create(),
    ];
    let index = CellIndex::build(&nodes(&["a", "b"]), &samples);

    assert_eq!(index.groups().len(), 2);
    assert_eq!(index.keys(), &[Some("sales".to_string())]);
}

#[test]
fn cells_hold_only_their_samples() {
    let samples = vec![
        SampleFactory::new("a").with_group("sales").with_duration(10.0).create(),
        SampleFactory::new("a").with_group("sales").without_duration().create(),
        SampleFactory::new("a").unassigned().with_duration(30.0).create(),
        SampleFactory::new("b").with_group("ops").with_duration(5.0).create(),
    ];
    let index = CellIndex::build(&nodes(&["a", "b"]), &samples);
    // keys: None, ops, sales
    assert_eq!(index.keys().len(), 3);

    let a_sales = index.cell(0, 2).unwrap();
    assert_eq!(a_sales.sample_count, 2);
    assert_eq!(a_sales.durations.as_slice(), &[10.0]);
    assert!(index.cell(0, 1).is_none());
    assert!(index.cell(1, 0).is_none());

    let a_total = index.group_total(0).unwrap();
    assert_eq!(a_total.sample_count, 3);
    assert_eq!(a_total.durations.as_slice(), &[10.0, 30.0]);
    assert_eq!(index.group_total(1).unwrap().sample_count, 1);
}

#[test]
fn group_total_counts_fanned_out_task_once() {
    let samples = vec![
        SampleFactory::new("a").with_group("sales").with_duration(100.0).of_task("t1").create(),
        SampleFactory::new("a").with_group("ops").with_duration(100.0).of_task("t1").create(),
        SampleFactory::new("a").with_group("sales").with_duration(400.0).of_task("t2").create(),
    ];
    let index = CellIndex::build(&nodes(&["a"]), &samples);

    let total = index.group_total(0).unwrap();
    assert_eq!(total.sample_count, 2);
    assert_eq!(total.durations.as_slice(), &[100.0, 400.0]);
    // cells still see every fan-out entry
    assert_eq!(index.cell(0, 0).unwrap().sample_count, 1);
    assert_eq!(index.cell(0, 1).unwrap().sample_count, 2);
}
