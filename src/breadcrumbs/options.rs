//! Options accepted by [`BreadcrumbTrail::set_breadcrumbs`](super::BreadcrumbTrail::set_breadcrumbs).

/// Options for composing a trail.
///
/// Unset fields fall back to the trail defaults: `replace = true`,
/// `auto_home = false`, home label/href/icon and `max_items` from
/// [`BreadcrumbSettings`](crate::config::BreadcrumbSettings).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetOptions {
    /// Replace the trail (`true`) or append to it (`false`).
    pub replace: Option<bool>,
    /// Prepend a home item when replacing or when the trail is empty.
    pub auto_home: Option<bool>,
    /// Compress the composed items beyond this length. `0` disables truncation.
    pub max_items: Option<usize>,
    pub home_label: Option<String>,
    pub home_href: Option<String>,
    pub home_icon: Option<String>,
}

impl SetOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the existing trail instead of replacing it.
    pub fn append() -> Self {
        Self::new().replace(false)
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = Some(replace);
        self
    }

    pub fn auto_home(mut self, auto_home: bool) -> Self {
        self.auto_home = Some(auto_home);
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn home_label(mut self, label: impl Into<String>) -> Self {
        self.home_label = Some(label.into());
        self
    }

    pub fn home_href(mut self, href: impl Into<String>) -> Self {
        self.home_href = Some(href.into());
        self
    }

    pub fn home_icon(mut self, icon: impl Into<String>) -> Self {
        self.home_icon = Some(icon.into());
        self
    }

    /// Fill `auto_home` with `true` unless the caller chose a value.
    pub(crate) fn with_default_home(mut self) -> Self {
        self.auto_home.get_or_insert(true);
        self
    }
}
