//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves
//! settings once and routes CLI subcommands to their implementations.

pub mod config;
pub mod dispatcher;
pub mod links;
pub mod trail;
pub mod wizard;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
