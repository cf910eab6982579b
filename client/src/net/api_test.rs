use super::*;

// =============================================================
// List endpoints
// =============================================================

#[test]
fn weight_templates_path_includes_all_paging_params() {
    let query = ListQuery {
        page: Some(2),
        size: Some(20),
        next_token: Some("tok==".to_owned()),
        filter: Some("senior backend".to_owned()),
    };
    assert_eq!(
        weight_templates_path(&query),
        "/v1/screening/weights/templates?page=2&size=20&next_token=tok%3D%3D&name=senior%20backend"
    );
}

#[test]
fn list_paths_without_params_have_no_query() {
    let query = ListQuery::default();
    assert_eq!(audit_logs_path(&query), "/v1/audit/logs");
    assert_eq!(resumes_path(&query), "/v1/resumes");
}

#[test]
fn blank_filter_and_token_are_dropped() {
    let query = ListQuery {
        page: None,
        size: Some(50),
        next_token: Some(String::new()),
        filter: Some("   ".to_owned()),
    };
    assert_eq!(resumes_path(&query), "/v1/resumes?size=50");
}

#[test]
fn filter_maps_to_endpoint_specific_param() {
    let query = ListQuery { filter: Some("running".to_owned()), ..Default::default() };
    assert_eq!(matching_tasks_path(&query), "/v1/screening/tasks?status=running");

    let query = ListQuery { filter: Some("resume.delete".to_owned()), ..Default::default() };
    assert_eq!(audit_logs_path(&query), "/v1/audit/logs?action=resume.delete");
}

// =============================================================
// Item + file endpoints
// =============================================================

#[test]
fn item_path_encodes_id() {
    assert_eq!(item_path(AUDIT_LOGS, "a-1"), "/v1/audit/logs/a-1");
    assert_eq!(item_path(WEIGHT_TEMPLATES, "w/1"), "/v1/screening/weights/templates/w%2F1");
}

#[test]
fn download_path_encodes_key() {
    assert_eq!(download_path("kb/7/cv.pdf"), "/v1/file/download?key=kb%2F7%2Fcv.pdf");
}

// =============================================================
// DownloadError
// =============================================================

#[test]
fn download_error_wraps_both_failure_kinds() {
    let api: DownloadError = ApiError::MissingParam("key").into();
    assert_eq!(api.to_string(), "missing required parameter: key");

    let fault: DownloadError = UiFault::MalformedUrl("not a url".to_owned()).into();
    assert_eq!(fault, DownloadError::Fault(UiFault::MalformedUrl("not a url".to_owned())));
}
