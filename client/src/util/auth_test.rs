use super::*;

// =============================================================
// login_redirect_path
// =============================================================

#[test]
fn login_redirect_path_encodes_current_location() {
    assert_eq!(login_redirect_path("/tasks"), "/login?redirect=%2Ftasks");
}

#[test]
fn login_redirect_path_skips_login_itself() {
    assert_eq!(login_redirect_path("/login"), "/login");
    assert_eq!(login_redirect_path("/login?redirect=%2F"), "/login");
}

#[test]
fn login_redirect_path_ignores_non_paths() {
    assert_eq!(login_redirect_path(""), "/login");
    assert_eq!(login_redirect_path("https://evil.test/"), "/login");
}

// =============================================================
// post_login_destination
// =============================================================

#[test]
fn post_login_destination_uses_same_origin_path() {
    assert_eq!(post_login_destination(Some("/resumes/r-1")), "/resumes/r-1");
    assert_eq!(post_login_destination(Some("/weights?page=2")), "/weights?page=2");
}

#[test]
fn post_login_destination_rejects_foreign_targets() {
    assert_eq!(post_login_destination(Some("https://evil.test")), "/");
    assert_eq!(post_login_destination(Some("//evil.test/x")), "/");
    assert_eq!(post_login_destination(Some("/\\evil.test")), "/");
}

#[test]
fn post_login_destination_defaults_to_root() {
    assert_eq!(post_login_destination(None), "/");
    assert_eq!(post_login_destination(Some("/login")), "/");
}

// =============================================================
// current_location
// =============================================================

#[test]
fn current_location_joins_search_with_or_without_marker() {
    assert_eq!(current_location("/audit", ""), "/audit");
    assert_eq!(current_location("/audit", "page=3"), "/audit?page=3");
    assert_eq!(current_location("/audit", "?page=3"), "/audit?page=3");
}

#[test]
fn post_login_destination_rejects_paths_browsers_rewrite_to_other_hosts() {
    assert_eq!(post_login_destination(Some("/\t/evil.example")), "/");
    assert_eq!(post_login_destination(Some("/\n/evil.example")), "/");
    assert_eq!(post_login_destination(Some("/ /evil.example")), "/");
    assert_eq!(post_login_destination(Some("/evil\\.example/x")), "/");
}

#[test]
fn post_login_destination_allows_backslash_after_first_segment() {
    assert_eq!(post_login_destination(Some("/files?key=a\\b")), "/files?key=a\\b");
}
