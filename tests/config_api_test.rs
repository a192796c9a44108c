//! Integration tests for config module public API.

use waypoint::breadcrumbs::BreadcrumbTrail;
use waypoint::config::{load_config, load_merged_config, validate, LinkSettings, WaypointConfig};
use waypoint::links::LinkHistoryStore;
use std::fs;
use tempfile::TempDir;

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".waypoint");
    fs::create_dir_all(&dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
    temp
}

#[test]
fn defaults_without_settings_files() {
    let temp = TempDir::new().unwrap();
    let config = load_merged_config(temp.path()).unwrap();
    assert_eq!(config, WaypointConfig::default());
    assert_eq!(config.links.history_limit, LinkSettings::DEFAULT_HISTORY_LIMIT);
}

#[test]
fn local_overrides_merge_over_project_settings() {
    let temp = project_with(&[
        (
            "config.yml",
            "breadcrumbs:\n  home_label: Dashboard\nlinks:\n  history_limit: 20\n",
        ),
        ("config.local.yml", "links:\n  history_limit: 5\n"),
    ]);

    let config = load_merged_config(temp.path()).unwrap();

    assert_eq!(config.breadcrumbs.home_label, "Dashboard");
    assert_eq!(config.links.history_limit, 5);
    assert_eq!(config.links.high_confidence, 0.8);
}

#[test]
fn explicit_file_skips_discovery() {
    let temp = project_with(&[("config.yml", "links:\n  history_limit: 20\n")]);
    let other = temp.path().join("other.yml");
    fs::write(&other, "links:\n  history_limit: 3\n").unwrap();

    let config = load_config(temp.path(), Some(&other)).unwrap();
    assert_eq!(config.links.history_limit, 3);
}

#[test]
fn invalid_thresholds_are_rejected() {
    let temp = project_with(&[(
        "config.yml",
        "links:\n  high_confidence: 0.5\n  low_confidence: 0.7\n",
    )]);
    assert!(load_merged_config(temp.path()).is_err());

    let mut config = WaypointConfig::default();
    config.links.history_limit = 0;
    assert!(validate(&config).is_err());
}

#[test]
fn settings_flow_into_stores() {
    let temp = project_with(&[(
        "config.yml",
        "breadcrumbs:\n  home_label: Start\nlinks:\n  history_limit: 3\n",
    )]);
    let config = load_merged_config(temp.path()).unwrap();

    let mut trail = BreadcrumbTrail::with_settings(config.breadcrumbs.clone());
    trail.set_page_breadcrumbs("Reports", Default::default());
    assert_eq!(trail.current_path(), "Start / Reports");

    let mut links = LinkHistoryStore::with_settings(config.links.clone());
    for n in 0..10 {
        links.add_link(n, n, None);
    }
    assert_eq!(links.history_len(), 3);
}
