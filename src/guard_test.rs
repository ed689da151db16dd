use super::*;

use crate::session::StoredUserInfo;

fn user_with_role(role_id: i64) -> StoredUserInfo {
    StoredUserInfo::parse(Some(
        &serde_json::json!({
            "user_id": 9,
            "user_name": "reader",
            "role_id": role_id,
        })
        .to_string(),
    ))
}

// =============================================================
// Unauthenticated transitions
// =============================================================

#[test]
fn no_token_on_protected_route_redirects_to_login_with_target() {
    let decision = evaluate(
        "/system/users-mgr",
        "/system/users-mgr",
        None,
        &StoredUserInfo::Absent,
    );
    assert_eq!(
        decision,
        GuardDecision::RedirectToLogin { redirect: "/system/users-mgr".to_owned() }
    );
    assert_eq!(decision.notice(), Some("登录状态已过期，请重新登录"));
    assert_eq!(
        decision.redirect_target().as_deref(),
        Some("/login?redirect=/system/users-mgr")
    );
}

#[test]
fn login_redirect_preserves_query_string() {
    let decision = evaluate(
        "/knowledge/document",
        "/knowledge/document?kb=3",
        None,
        &StoredUserInfo::Absent,
    );
    assert_eq!(
        decision.redirect_target().as_deref(),
        Some("/login?redirect=/knowledge/document?kb=3")
    );
}

#[test]
fn no_token_may_visit_no_auth_routes() {
    for path in ["/login", "/register"] {
        let decision = evaluate(path, path, None, &StoredUserInfo::Absent);
        assert_eq!(decision, GuardDecision::Proceed { title: None }, "path {path}");
    }
}

#[test]
fn unmatched_path_carries_no_auth_requirement() {
    let decision = evaluate("/no-such-page", "/no-such-page", None, &StoredUserInfo::Absent);
    assert_eq!(decision, GuardDecision::Proceed { title: None });
}

// =============================================================
// Role gating
// =============================================================

#[test]
fn non_admin_on_admin_route_is_sent_home() {
    let decision = evaluate(
        "/system/users-mgr",
        "/system/users-mgr",
        Some("tok"),
        &user_with_role(2),
    );
    assert_eq!(decision, GuardDecision::DeniedRedirectHome);
    assert_eq!(decision.notice(), Some("您没有权限访问此页面"));
    assert_eq!(decision.redirect_target().as_deref(), Some("/"));
}

#[test]
fn missing_or_malformed_user_info_gates_like_non_admin() {
    for user in [StoredUserInfo::Absent, StoredUserInfo::Malformed] {
        let decision = evaluate("/system/users-mgr", "/system/users-mgr", Some("tok"), &user);
        assert_eq!(decision, GuardDecision::DeniedRedirectHome);
    }
}

#[test]
fn admin_proceeds_to_admin_route() {
    let decision = evaluate(
        "/system/users-mgr",
        "/system/users-mgr",
        Some("tok"),
        &user_with_role(1),
    );
    assert_eq!(decision, GuardDecision::Proceed { title: Some("用户管理") });
}

#[test]
fn non_admin_routes_ignore_role() {
    let decision = evaluate(
        "/system/models-mgr",
        "/system/models-mgr",
        Some("tok"),
        &user_with_role(2),
    );
    assert_eq!(decision, GuardDecision::Proceed { title: Some("模型管理") });
}

// =============================================================
// Authenticated visits to the login page
// =============================================================

#[test]
fn authenticated_user_cannot_revisit_login() {
    let decision = evaluate("/login", "/login", Some("tok"), &user_with_role(2));
    assert_eq!(decision, GuardDecision::AlreadyAuthedRedirectHome);
    assert_eq!(decision.notice(), None);
    assert_eq!(decision.redirect_target().as_deref(), Some("/"));
}

// =============================================================
// Proceeding transitions and titles
// =============================================================

#[test]
fn proceeding_route_exposes_its_title() {
    let decision = evaluate(
        "/knowledge/mgt",
        "/knowledge/mgt",
        Some("tok"),
        &user_with_role(2),
    );
    assert_eq!(decision, GuardDecision::Proceed { title: Some("知识库管理") });
    assert_eq!(document_title("知识库管理"), "知识库管理 - 知识库管理系统");
}

#[test]
fn decision_order_prefers_login_redirect_over_role_check() {
    // No token on an admin route: the auth check fires first.
    let decision = evaluate(
        "/system/users-mgr",
        "/system/users-mgr",
        None,
        &user_with_role(1),
    );
    assert!(matches!(decision, GuardDecision::RedirectToLogin { .. }));
}
