use super::*;

fn sink() -> (Owner, FaultSink) {
    let owner = Owner::new();
    owner.set();
    (owner, FaultSink(RwSignal::new(BarrierState::default())))
}

#[test]
fn malformed_url_report_is_suppressed() {
    let (_owner, sink) = sink();
    let outcome = sink.report(UiFault::from_js_message("Invalid URL: foo"));
    assert_eq!(outcome, CatchOutcome::Suppressed);
    assert!(!sink.0.get_untracked().is_faulted());
}

#[test]
fn network_failure_report_faults_the_barrier() {
    let (_owner, sink) = sink();
    let outcome = sink.report(UiFault::from_js_message("Network request failed"));
    assert_eq!(outcome, CatchOutcome::Faulted);
    assert_eq!(
        sink.0.get_untracked().fault(),
        Some(&UiFault::Render("Network request failed".into()))
    );
}

#[test]
fn benign_report_after_fault_clears_the_barrier() {
    let (_owner, sink) = sink();
    sink.report(UiFault::Render("boom".into()));
    sink.report(UiFault::from_js_message("Failed to construct 'URL': Invalid URL"));
    assert!(!sink.0.get_untracked().is_faulted());
}

#[test]
fn thrown_errors_fault_only_when_one_is_not_benign() {
    let (_owner, sink) = sink();
    assert!(!sink.report_messages(vec!["Invalid URL: a".to_string(), "Invalid URL: b".to_string()]));
    assert!(!sink.0.get_untracked().is_faulted());

    assert!(sink.report_messages(vec!["Invalid URL: a".to_string(), "Network request failed".to_string()]));
    assert!(sink.0.get_untracked().is_faulted());
}
