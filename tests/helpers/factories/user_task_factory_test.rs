use crate::test_helpers::factories::{UserTaskFactory, at_ms, base_time};

#[test]
fn lays_out_task_lifecycle_relative_to_start() {
    let task = UserTaskFactory::new("approve")
        .claimed_after(100)
        .completed_after(400)
        .with_assignee("demo")
        .with_candidate_group("sales")
        .create();

    assert_eq!(task.start_date, base_time());
    assert_eq!(task.claim_date, Some(at_ms(100)));
    assert_eq!(task.end_date, Some(at_ms(400)));
    assert!(!task.canceled);
    assert_eq!(task.assignee.as_deref(), Some("demo"));
    assert_eq!(task.candidate_groups, vec!["sales".to_string()]);
}

#[test]
fn canceled_task_is_ended() {
    let task = UserTaskFactory::new("approve").canceled_after(50).create();
    assert!(task.canceled);
    assert!(task.is_ended());
}
