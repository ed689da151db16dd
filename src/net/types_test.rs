use super::*;

#[test]
fn successful_envelope_unwraps_data() {
    let body = serde_json::json!({
        "code": 200,
        "message": "Success",
        "data": {
            "user": {"user_id": 1, "user_name": "admin", "role_id": 1},
            "token": "jwt-abc"
        }
    })
    .to_string();

    let envelope: Envelope<LoginData> = serde_json::from_str(&body).expect("decode");
    assert!(envelope.is_success());
    let data = envelope.into_data().expect("data");
    assert_eq!(data.token, "jwt-abc");
    assert!(data.user.is_admin());
}

#[test]
fn logical_failure_with_empty_data_still_decodes() {
    // Failed logins arrive as HTTP 200 with `code: 500` and `data: {}`.
    let body = serde_json::json!({
        "code": 500,
        "message": "账号或密码错误",
        "data": {}
    })
    .to_string();

    let envelope: Envelope<LoginData> = serde_json::from_str(&body).expect("decode");
    assert!(!envelope.is_success());
    assert_eq!(envelope.into_data(), Err("账号或密码错误".to_owned()));
}

#[test]
fn success_without_expected_payload_yields_the_message() {
    let body = serde_json::json!({"code": 200, "message": "Success", "data": {}}).to_string();
    let envelope: Envelope<LoginData> = serde_json::from_str(&body).expect("decode");
    assert_eq!(envelope.into_data(), Err("Success".to_owned()));
}

#[test]
fn missing_data_field_is_tolerated() {
    let body = serde_json::json!({"code": 200, "message": "Success"}).to_string();
    let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body).expect("decode");
    assert!(envelope.data.is_none());
}
