use super::*;

#[test]
fn validate_login_input_trims_username_only() {
    let req = validate_login_input("  alice ", " secret ").unwrap();
    assert_eq!(req.username, "alice");
    assert_eq!(req.password, " secret ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_login_input("alice", ""), Err("Enter both username and password."));
}
