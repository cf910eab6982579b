use super::*;

#[test]
fn normalize_token_trims_value() {
    assert_eq!(normalize_token(Some("  abc  ".to_owned())), Some("abc".to_owned()));
}

#[test]
fn normalize_token_drops_blank_and_missing() {
    assert_eq!(normalize_token(Some("   ".to_owned())), None);
    assert_eq!(normalize_token(None), None);
}

#[test]
fn load_token_is_empty_off_browser() {
    store_token("abc");
    assert_eq!(load_token(), None);
    clear_token();
}
