use super::*;

#[test]
fn empty_query_leaves_path_untouched() {
    assert_eq!(QueryString::new().apply("/v1/audit/logs"), "/v1/audit/logs");
}

#[test]
fn push_opt_skips_none() {
    let q = QueryString::new()
        .push("page", 2)
        .push_opt::<u32>("size", None)
        .push_opt("name", Some("backend"));
    assert_eq!(q.apply("/v1/screening/weights/templates"), "/v1/screening/weights/templates?page=2&name=backend");
}

#[test]
fn values_are_percent_encoded() {
    let q = QueryString::new().push("key", "uploads/cv 2024 (final).pdf");
    assert_eq!(q.to_string(), "key=uploads%2Fcv%202024%20%28final%29.pdf");
}

#[test]
fn encode_component_keeps_unreserved_and_encodes_utf8() {
    assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
    assert_eq!(encode_component("简历"), "%E7%AE%80%E5%8E%86");
}
