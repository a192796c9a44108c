//! Library integration tests.

use waypoint::WaypointError;

#[test]
fn error_types_are_public() {
    let err = WaypointError::LinkImportError {
        message: "expected value".into(),
    };
    assert!(err.to_string().contains("expected value"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> waypoint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use waypoint::cli::{Cli, Commands};

    let cli = Cli::parse_from(["waypoint", "config", "--json"]);

    if let Commands::Config(args) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Config command");
    }
}

#[test]
fn stores_are_independent_instances() {
    use waypoint::breadcrumbs::{BreadcrumbItem, BreadcrumbTrail};

    let mut first = BreadcrumbTrail::new();
    let second = BreadcrumbTrail::new();
    first.add_breadcrumb(BreadcrumbItem::new("Only here"));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}
