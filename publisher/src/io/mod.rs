//! I/O adapters for the publish workflow.

pub mod config;
pub mod process;
pub mod runner;
pub mod site;
