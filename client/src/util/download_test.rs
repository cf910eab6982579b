use super::*;

#[test]
fn filename_from_key_takes_last_segment() {
    assert_eq!(filename_from_key("kb/42/resume-dana.pdf"), Some("resume-dana.pdf"));
    assert_eq!(filename_from_key("plain.docx"), Some("plain.docx"));
}

#[test]
fn filename_from_key_skips_trailing_separators() {
    assert_eq!(filename_from_key("kb/42/report.pdf/"), Some("report.pdf"));
    assert_eq!(filename_from_key("dir\\cv.pdf"), Some("cv.pdf"));
}

#[test]
fn filename_from_key_empty_key_has_no_name() {
    assert_eq!(filename_from_key(""), None);
    assert_eq!(filename_from_key("//"), None);
}

#[test]
fn trigger_download_needs_browser() {
    let err = trigger_download("https://cdn.test/a.pdf", None).unwrap_err();
    assert!(!err.is_benign());
}
