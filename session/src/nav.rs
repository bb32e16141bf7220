//! Role-gated navigation filtering.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigation entry. An empty `roles` list means everyone may see it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub roles: &'static [&'static str],
}

impl NavItem {
    #[must_use]
    pub const fn public(label: &'static str, href: &'static str) -> Self {
        Self { label, href, roles: &[] }
    }

    #[must_use]
    pub const fn restricted(label: &'static str, href: &'static str, roles: &'static [&'static str]) -> Self {
        Self { label, href, roles }
    }

    #[must_use]
    pub fn allows(&self, role: Option<&str>) -> bool {
        self.roles.is_empty() || role.is_some_and(|r| self.roles.iter().any(|allowed| *allowed == r))
    }
}

/// Items visible to `role`, in table order.
#[must_use]
pub fn visible_items(items: &[NavItem], role: Option<&str>) -> Vec<NavItem> {
    items.iter().filter(|item| item.allows(role)).copied().collect()
}
