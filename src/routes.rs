//! Host application routes and the drawer's navigation entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes belong to the single-spa host; the drawer only links to them and
//! highlights whichever entry matches the current browser path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const DASHBOARD: &str = "/dashboard";
pub const STATEMENT: &str = "/statement";
pub const TRANSACTIONS: &str = "/transactions";
pub const AUTH: &str = "/auth";
pub const ROOT: &str = "/";

/// Icon drawn next to a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Statement,
    Transaction,
}

/// One entry in the drawer's link list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Path matched against the current location.
    pub path: &'static str,
    /// Route navigated to on click.
    pub route: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        path: ROOT,
        route: DASHBOARD,
        label: "Inicio",
        icon: NavIcon::Home,
    },
    NavItem {
        path: STATEMENT,
        route: STATEMENT,
        label: "Extrato",
        icon: NavIcon::Statement,
    },
    NavItem {
        path: TRANSACTIONS,
        route: TRANSACTIONS,
        label: "Transação",
        icon: NavIcon::Transaction,
    },
];

/// Whether the entry at `item_path` should be highlighted for `current_path`.
///
/// The root entry also answers to the dashboard alias. Other entries match
/// themselves and any nested path below them.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    if item_path == ROOT {
        return current_path == ROOT || current_path == DASHBOARD;
    }
    current_path == item_path
        || current_path
            .strip_prefix(item_path)
            .is_some_and(|rest| rest.starts_with('/'))
}
