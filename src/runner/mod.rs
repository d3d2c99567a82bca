//! Bootstrap phase orchestration.

pub mod bootstrap;

pub use bootstrap::{
    BootstrapResult, BootstrapRunner, LaunchStatus, RunOptions, Toolkit, DEFAULT_LAUNCH_TARGET,
};
