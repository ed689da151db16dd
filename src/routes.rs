//! Static route table with auth metadata and matched-chain resolution.
//!
//! DESIGN
//! ======
//! Routes form a small static tree. Each node carries the metadata the
//! navigation guard and the sidebar need: `no_auth` marks routes reachable
//! without a session, `requires_admin` gates a route on the admin role,
//! `title` feeds the document title, and `parent` is the sidebar group label.
//!
//! Resolution returns the full matched chain (ancestors first) so guard
//! flags declared on any segment apply to the whole subtree, mirroring the
//! "any matched record" semantics of the original route config.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Metadata flags attached to a route node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    /// Document title for this view, if any.
    pub title: Option<&'static str>,
    /// Sidebar group label this view is listed under, if any.
    pub parent: Option<&'static str>,
    /// Route is reachable without a session token.
    pub no_auth: bool,
    /// Route additionally requires the admin role.
    pub requires_admin: bool,
}

impl RouteMeta {
    const NONE: Self = Self { title: None, parent: None, no_auth: false, requires_admin: false };
}

/// One node in the static route tree.
#[derive(Debug)]
pub struct RouteNode {
    /// Path segment ("login") or nested segments under a section ("mgt").
    pub segment: &'static str,
    /// Route name, unique across the table.
    pub name: &'static str,
    pub meta: RouteMeta,
    pub children: &'static [RouteNode],
}

/// Path of the login route.
pub const LOGIN_PATH: &str = "/login";

/// Path the home route redirects to.
pub const HOME_REDIRECT: &str = "/knowledge/mgt";

/// The full route table.
pub static ROUTES: &[RouteNode] = &[
    RouteNode {
        segment: "login",
        name: "Login",
        meta: RouteMeta { no_auth: true, ..RouteMeta::NONE },
        children: &[],
    },
    RouteNode {
        segment: "register",
        name: "Register",
        meta: RouteMeta { no_auth: true, ..RouteMeta::NONE },
        children: &[],
    },
    RouteNode {
        segment: "knowledge",
        name: "Knowledge",
        meta: RouteMeta::NONE,
        children: &[
            RouteNode {
                segment: "mgt",
                name: "Mgt",
                meta: RouteMeta {
                    title: Some("知识库管理"),
                    parent: Some("知识库配置"),
                    ..RouteMeta::NONE
                },
                children: &[],
            },
            RouteNode {
                segment: "document",
                name: "DocumentMgr",
                meta: RouteMeta {
                    title: Some("文档管理"),
                    parent: Some("知识库配置"),
                    ..RouteMeta::NONE
                },
                children: &[],
            },
            RouteNode {
                segment: "recall-test",
                name: "RecallTest",
                meta: RouteMeta {
                    title: Some("召回检索测试"),
                    parent: Some("知识库配置"),
                    ..RouteMeta::NONE
                },
                children: &[],
            },
        ],
    },
    RouteNode {
        segment: "chat",
        name: "Chat",
        meta: RouteMeta::NONE,
        children: &[RouteNode {
            segment: "single",
            name: "Single",
            meta: RouteMeta {
                title: Some("单知识库检索对话"),
                parent: Some("对话管理"),
                ..RouteMeta::NONE
            },
            children: &[],
        }],
    },
    RouteNode {
        segment: "system",
        name: "System",
        meta: RouteMeta::NONE,
        children: &[
            RouteNode {
                segment: "users-mgr",
                name: "UsersMgr",
                meta: RouteMeta {
                    title: Some("用户管理"),
                    parent: Some("系统管理"),
                    requires_admin: true,
                    ..RouteMeta::NONE
                },
                children: &[],
            },
            RouteNode {
                segment: "models-mgr",
                name: "ModelsMgr",
                meta: RouteMeta {
                    title: Some("模型管理"),
                    parent: Some("系统管理"),
                    ..RouteMeta::NONE
                },
                children: &[],
            },
            RouteNode {
                segment: "embedding-mgr",
                name: "EmbeddingMgr",
                meta: RouteMeta {
                    title: Some("嵌入模型管理"),
                    parent: Some("系统管理"),
                    ..RouteMeta::NONE
                },
                children: &[],
            },
            RouteNode {
                segment: "profile-center",
                name: "ProfileCenter",
                meta: RouteMeta {
                    title: Some("个人中心"),
                    parent: Some("系统管理"),
                    ..RouteMeta::NONE
                },
                children: &[],
            },
        ],
    },
];

/// Resolve a destination path to its matched chain, ancestors first.
///
/// The query string, if any, is ignored for matching. Returns `None` for
/// paths not in the table (including `/`, which is a bare redirect).
#[must_use]
pub fn resolve(path: &str) -> Option<Vec<&'static RouteNode>> {
    let path = path.split('?').next().unwrap_or(path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    let mut chain = Vec::new();
    let mut nodes = ROUTES;
    for segment in &segments {
        let node = nodes.iter().find(|n| n.segment == *segment)?;
        chain.push(node);
        nodes = node.children;
    }
    // Partial matches (a section with no leaf) are not routable views.
    if !chain.last().is_some_and(|n| n.children.is_empty()) {
        return None;
    }
    Some(chain)
}

/// Full path of a leaf found in a matched chain.
#[must_use]
pub fn full_path(chain: &[&RouteNode]) -> String {
    let mut path = String::new();
    for node in chain {
        path.push('/');
        path.push_str(node.segment);
    }
    path
}

/// A sidebar entry: leaf title and its full path.
#[derive(Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: String,
}

/// Sidebar groups in table order: `(group label, entries)`.
///
/// Only leaves carrying both a `parent` group and a `title` are listed, so
/// login and register never show up in the nav.
#[must_use]
pub fn nav_groups() -> Vec<(&'static str, Vec<NavItem>)> {
    let mut groups: Vec<(&'static str, Vec<NavItem>)> = Vec::new();
    for section in ROUTES {
        for leaf in section.children {
            let (Some(parent), Some(title)) = (leaf.meta.parent, leaf.meta.title) else {
                continue;
            };
            let path = format!("/{}/{}", section.segment, leaf.segment);
            match groups.iter_mut().find(|(label, _)| *label == parent) {
                Some((_, items)) => items.push(NavItem { title, path }),
                None => groups.push((parent, vec![NavItem { title, path }])),
            }
        }
    }
    groups
}
