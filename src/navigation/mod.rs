//! Dashboard navigation table and role-based filtering

mod table;

pub use table::NAVIGATION;

use crate::auth::rbac::{Permission, Role, has_all_permissions};
use serde::Serialize;

/// Sidebar icon identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NavIcon {
    LayoutDashboard,
    Megaphone,
    Users,
    Bot,
    Share2,
    BarChart2,
    Shield,
}

/// Declared navigation destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: NavIcon,
    pub is_active: bool,
    pub required_permissions: &'static [Permission],
    pub children: &'static [NavChild],
}

/// Nested destination under a [`NavItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavChild {
    pub title: &'static str,
    pub url: &'static str,
    pub required_permissions: &'static [Permission],
}

/// Navigation entry visible to a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: NavIcon,
    pub is_active: bool,
    pub required_permissions: &'static [Permission],
    pub items: Vec<NavigationChild>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationChild {
    pub title: &'static str,
    pub url: &'static str,
    pub required_permissions: &'static [Permission],
}

/// Entries of [`NAVIGATION`] visible to `role`, in declared order
pub fn filtered_navigation(role: Role) -> Vec<NavigationEntry> {
    filter_navigation(NAVIGATION, role)
}

/// Filter any navigation table for `role`
///
/// An entry is kept when the role holds all of its required permissions.
/// Children are filtered by the same rule; an entry stays visible even if
/// none of its children do. Declared order is preserved.
pub fn filter_navigation(table: &[NavItem], role: Role) -> Vec<NavigationEntry> {
    table
        .iter()
        .filter(|item| has_all_permissions(role, item.required_permissions))
        .map(|item| NavigationEntry {
            title: item.title,
            url: item.url,
            icon: item.icon,
            is_active: item.is_active,
            required_permissions: item.required_permissions,
            items: item
                .children
                .iter()
                .filter(|child| has_all_permissions(role, child.required_permissions))
                .map(|child| NavigationChild {
                    title: child.title,
                    url: child.url,
                    required_permissions: child.required_permissions,
                })
                .collect(),
        })
        .collect()
}

/// Look up the declared entry for a destination path
pub fn find_entry(url: &str) -> Option<&'static NavItem> {
    NAVIGATION.iter().find(|item| item.url == url)
}

/// Whether `role` may see the destination at `url`
///
/// Paths that are not in the navigation table are not gated by it and
/// return `None`.
pub fn is_reachable(role: Role, url: &str) -> Option<bool> {
    find_entry(url).map(|item| has_all_permissions(role, item.required_permissions))
}
