//! Integration tests for the breadcrumbs public API.

use std::cell::RefCell;
use std::rc::Rc;
use waypoint::breadcrumbs::{BreadcrumbItem, BreadcrumbTrail, SetOptions, ELLIPSIS_VALUE};
use waypoint::key::ItemKey;

fn assert_only_last_active(trail: &BreadcrumbTrail) {
    let active: Vec<usize> = trail
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_active())
        .map(|(i, _)| i)
        .collect();
    if trail.is_empty() {
        assert!(active.is_empty());
    } else {
        assert_eq!(active, vec![trail.len() - 1]);
    }
}

#[test]
fn exactly_the_last_item_stays_active_through_mutations() {
    let mut trail = BreadcrumbTrail::new();

    trail.set_breadcrumbs(
        vec![BreadcrumbItem::new("A").with_value("a"), BreadcrumbItem::new("B").with_value("b")],
        SetOptions::new().auto_home(true),
    );
    assert_only_last_active(&trail);

    trail.set_breadcrumbs(vec![BreadcrumbItem::new("C").with_value("c")], SetOptions::append());
    assert_only_last_active(&trail);

    trail.add_breadcrumb(BreadcrumbItem::new("D").with_value("d"));
    assert_only_last_active(&trail);

    trail.remove_breadcrumb(&ItemKey::from("d"));
    assert_only_last_active(&trail);

    trail.go_back(2);
    assert_only_last_active(&trail);

    trail.set_nested_breadcrumbs(&["x", "y", "z"], SetOptions::new());
    assert_only_last_active(&trail);

    trail.clear_breadcrumbs();
    assert_only_last_active(&trail);
}

#[test]
fn six_items_truncate_to_four() {
    let mut trail = BreadcrumbTrail::new();
    let items: Vec<_> = (0..6).map(|i| BreadcrumbItem::new(format!("item {}", i))).collect();

    let result = trail.set_breadcrumbs(items, SetOptions::new().max_items(4));

    let labels: Vec<_> = result.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["item 0", "...", "item 4", "item 5"]);
    assert_eq!(result[1].value, Some(ItemKey::from(ELLIPSIS_VALUE)));
    assert!(result[1].disabled);
}

#[test]
fn builders_derive_values_and_hrefs() {
    let mut trail = BreadcrumbTrail::new();
    trail.set_nested_breadcrumbs(&["Team Settings", "Billing  Plans"], SetOptions::new());

    let items = trail.items();
    assert_eq!(items[0].label, "Home");
    assert_eq!(items[1].value, Some(ItemKey::from("team-settings")));
    assert_eq!(items[1].href.as_deref(), Some("/team-settings"));
    assert_eq!(items[2].value, Some(ItemKey::from("billing-plans")));
    assert!(items[2].href.is_none());
}

#[test]
fn go_back_requires_more_items_than_steps() {
    let mut trail = BreadcrumbTrail::new();
    trail.set_section_breadcrumbs("Docs", "API", SetOptions::new());

    assert!(!trail.go_back(3));
    assert_eq!(trail.len(), 3);
    assert!(trail.go_back(2));
    assert_eq!(trail.current_path(), "Home");
}

#[test]
fn subscribers_see_every_change() {
    let count = Rc::new(RefCell::new(0));
    let mut trail = BreadcrumbTrail::new();
    let seen = Rc::clone(&count);
    let subscription = trail.subscribe(move |_| *seen.borrow_mut() += 1);

    trail.set_page_breadcrumbs("One", SetOptions::new());
    trail.add_breadcrumb(BreadcrumbItem::new("Two"));
    assert_eq!(*count.borrow(), 2);

    drop(subscription);
    trail.clear_breadcrumbs();
    assert_eq!(*count.borrow(), 2);
}
