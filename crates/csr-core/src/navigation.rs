//! Console pages and the sidebar menu.

/// Path of the only page reachable without a session.
pub const LOGIN_PATH: &str = "/login";

/// A page of the console shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    IntentRules,
    GroupManagement,
    CustomerRules,
    RequestHistory,
}

impl Page {
    /// Sidebar order.
    pub const MENU: [Page; 5] = [
        Page::Dashboard,
        Page::IntentRules,
        Page::GroupManagement,
        Page::CustomerRules,
        Page::RequestHistory,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::IntentRules => "/intent-rules",
            Self::GroupManagement => "/group-management",
            Self::CustomerRules => "/customer-rules",
            Self::RequestHistory => "/request-history",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "数据看板",
            Self::IntentRules => "意图规则管理",
            Self::GroupManagement => "人员与分组管理",
            Self::CustomerRules => "客户规则管理",
            Self::RequestHistory => "请求历史",
        }
    }
}

/// One sidebar entry, with the active flag resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Sidebar entries with `current` highlighted.
pub fn menu(current: Page) -> Vec<MenuItem> {
    Page::MENU
        .into_iter()
        .map(|page| MenuItem {
            path: page.path(),
            label: page.label(),
            active: page == current,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_paths_are_unique() {
        let mut paths: Vec<_> = Page::MENU.iter().map(|p| p.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), Page::MENU.len());
        assert_eq!(Page::Dashboard.path(), "/");
    }

    #[test]
    fn test_menu_marks_exactly_one_active() {
        let items = menu(Page::GroupManagement);
        assert_eq!(items.len(), 5);
        let active: Vec<_> = items.iter().filter(|i| i.active).map(|i| i.path).collect();
        assert_eq!(active, vec!["/group-management"]);
    }
}
