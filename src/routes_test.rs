use super::*;

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolves_top_level_login() {
    let chain = resolve("/login").expect("login should resolve");
    assert_eq!(chain.len(), 1);
    assert_eq!(chain[0].name, "Login");
    assert!(chain[0].meta.no_auth);
}

#[test]
fn resolves_nested_route_with_ancestors_first() {
    let chain = resolve("/knowledge/mgt").expect("route should resolve");
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].name, "Knowledge");
    assert_eq!(chain[1].name, "Mgt");
    assert_eq!(chain[1].meta.title, Some("知识库管理"));
}

#[test]
fn resolve_ignores_query_string() {
    let chain = resolve("/system/users-mgr?tab=active").expect("route should resolve");
    assert_eq!(chain[1].name, "UsersMgr");
    assert!(chain[1].meta.requires_admin);
}

#[test]
fn unknown_path_does_not_resolve() {
    assert!(resolve("/nope").is_none());
    assert!(resolve("/knowledge/nope").is_none());
}

#[test]
fn section_without_leaf_does_not_resolve() {
    assert!(resolve("/knowledge").is_none());
    assert!(resolve("/system").is_none());
}

#[test]
fn root_path_does_not_resolve() {
    assert!(resolve("/").is_none());
}

#[test]
fn full_path_rebuilds_destination() {
    let chain = resolve("/chat/single").expect("route should resolve");
    assert_eq!(full_path(&chain), "/chat/single");
}

// =============================================================
// Nav grouping
// =============================================================

#[test]
fn nav_groups_follow_table_order() {
    let groups = nav_groups();
    let labels: Vec<&str> = groups.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, vec!["知识库配置", "对话管理", "系统管理"]);
}

#[test]
fn nav_groups_exclude_auth_pages() {
    let groups = nav_groups();
    assert!(
        groups
            .iter()
            .flat_map(|(_, items)| items)
            .all(|item| item.path != "/login" && item.path != "/register")
    );
}

#[test]
fn system_group_lists_all_four_views() {
    let groups = nav_groups();
    let (_, items) = groups
        .iter()
        .find(|(label, _)| *label == "系统管理")
        .expect("system group");
    let paths: Vec<&str> = items.iter().map(|i| i.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "/system/users-mgr",
            "/system/models-mgr",
            "/system/embedding-mgr",
            "/system/profile-center",
        ]
    );
}
