//! Core module - workspace discovery, configuration, and data loading

pub mod config;
pub mod loader;
pub mod workspace;

pub use config::Config;
pub use loader::{load_benchmarks, load_scoring_rules, LoadError};
pub use workspace::{Workspace, WorkspaceError};
