//! Convenience builders for common trail shapes.
//!
//! Each builder derives item values from labels with [`slugify`], puts
//! hrefs on non-terminal segments only, and turns `auto_home` on unless
//! the caller set it.

use regex::Regex;
use std::sync::LazyLock;

use super::item::BreadcrumbItem;
use super::options::SetOptions;
use super::trail::BreadcrumbTrail;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN must compile"));

/// Lowercase a label and replace whitespace runs with `-`.
pub fn slugify(label: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&label.to_lowercase(), "-")
        .into_owned()
}

impl BreadcrumbTrail {
    /// Trail for a top-level page: `[Home?, page]`.
    pub fn set_page_breadcrumbs(
        &mut self,
        page_name: &str,
        options: SetOptions,
    ) -> Vec<BreadcrumbItem> {
        let page = BreadcrumbItem::new(page_name).with_value(slugify(page_name));
        self.set_breadcrumbs(vec![page], options.with_default_home())
    }

    /// Trail for a page inside a section: `[Home?, section, page]`.
    pub fn set_section_breadcrumbs(
        &mut self,
        section: &str,
        page_name: &str,
        options: SetOptions,
    ) -> Vec<BreadcrumbItem> {
        let section_slug = slugify(section);
        let items = vec![
            BreadcrumbItem::new(section)
                .with_href(format!("/{}", section_slug))
                .with_value(section_slug),
            BreadcrumbItem::new(page_name).with_value(slugify(page_name)),
        ];
        self.set_breadcrumbs(items, options.with_default_home())
    }

    /// Trail for an arbitrarily nested path.
    ///
    /// Intermediate segments link to their cumulative path
    /// (`/guides/getting-started`); the last segment has no href.
    pub fn set_nested_breadcrumbs<S: AsRef<str>>(
        &mut self,
        segments: &[S],
        options: SetOptions,
    ) -> Vec<BreadcrumbItem> {
        let last = segments.len().saturating_sub(1);
        let mut path = String::new();
        let items = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| {
                let label = segment.as_ref();
                let slug = slugify(label);
                path.push('/');
                path.push_str(&slug);

                let item = BreadcrumbItem::new(label).with_value(slug);
                if index < last {
                    item.with_href(path.clone())
                } else {
                    item
                }
            })
            .collect();
        self.set_breadcrumbs(items, options.with_default_home())
    }
}
