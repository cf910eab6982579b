use super::*;

#[test]
fn validate_new_task_trims_and_drops_blank_template() {
    let req = validate_new_task(" Backend hiring ", "  Rust, 3+ years ", "  ").unwrap();
    assert_eq!(req.name, "Backend hiring");
    assert_eq!(req.job_description, "Rust, 3+ years");
    assert_eq!(req.template_id, None);
    assert!(req.resume_ids.is_empty());
}

#[test]
fn validate_new_task_keeps_template_id() {
    let req = validate_new_task("Backend", "Rust", " tpl-1 ").unwrap();
    assert_eq!(req.template_id.as_deref(), Some("tpl-1"));
}

#[test]
fn validate_new_task_requires_name_and_description() {
    assert_eq!(validate_new_task(" ", "Rust", ""), Err("Task name is required."));
    assert_eq!(
        validate_new_task("Backend", "\n", ""),
        Err("Paste the job description to match against.")
    );
}

#[test]
fn status_filters_start_with_all() {
    assert_eq!(STATUS_FILTERS[0].0, "");
    assert!(STATUS_FILTERS.iter().skip(1).all(|(value, _)| !value.is_empty()));
}

#[test]
fn status_class_flags_terminal_failures() {
    assert_eq!(status_class(MatchingTaskStatus::Failed), "status status--bad");
    assert_eq!(status_class(MatchingTaskStatus::Completed), "status status--ok");
    assert_eq!(status_class(MatchingTaskStatus::Unknown), "status");
}
