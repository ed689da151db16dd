use super::*;

fn admin_json() -> String {
    serde_json::json!({
        "user_id": 1,
        "user_name": "admin",
        "email": "admin@example.com",
        "real_name": "管理员",
        "phone": null,
        "role_id": 1,
        "role_name": "admin",
        "role_desc": "系统管理员",
        "permissions": {"user_manage": true}
    })
    .to_string()
}

// =============================================================
// Tolerant parsing
// =============================================================

#[test]
fn parse_none_is_absent() {
    assert_eq!(StoredUserInfo::parse(None), StoredUserInfo::Absent);
}

#[test]
fn parse_empty_and_undefined_are_absent() {
    assert_eq!(StoredUserInfo::parse(Some("")), StoredUserInfo::Absent);
    assert_eq!(StoredUserInfo::parse(Some("undefined")), StoredUserInfo::Absent);
}

#[test]
fn parse_corrupt_json_is_malformed_not_fatal() {
    assert_eq!(StoredUserInfo::parse(Some("{not json")), StoredUserInfo::Malformed);
    assert_eq!(StoredUserInfo::parse(Some("[1,2,3]")), StoredUserInfo::Malformed);
}

#[test]
fn parse_valid_record() {
    let stored = StoredUserInfo::parse(Some(&admin_json()));
    let user = stored.user().expect("user should be present");
    assert_eq!(user.user_name, "admin");
    assert!(user.is_admin());
}

#[test]
fn parse_tolerates_missing_optional_fields() {
    let raw = r#"{"user_id": 7, "user_name": "reader", "role_id": 2}"#;
    let stored = StoredUserInfo::parse(Some(raw));
    let user = stored.user().expect("user should be present");
    assert!(!user.is_admin());
    assert!(user.email.is_none());
    assert!(user.permissions.is_empty());
}

#[test]
fn malformed_and_absent_expose_no_user() {
    assert!(StoredUserInfo::Absent.user().is_none());
    assert!(StoredUserInfo::Malformed.user().is_none());
}

// =============================================================
// Memory store round trip
// =============================================================

#[test]
fn memory_store_round_trips_user() {
    let store = MemoryUserInfoStore::new();
    assert_eq!(store.load(), StoredUserInfo::Absent);

    let user: UserInfo = serde_json::from_str(&admin_json()).expect("fixture");
    store.save(&user);
    assert_eq!(store.load().user(), Some(&user));

    store.clear();
    assert_eq!(store.load(), StoredUserInfo::Absent);
}

#[test]
fn memory_store_reports_seeded_garbage_as_malformed() {
    let store = MemoryUserInfoStore::with_raw("%%%");
    assert_eq!(store.load(), StoredUserInfo::Malformed);
}
