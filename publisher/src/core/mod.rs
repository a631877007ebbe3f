//! Pure, deterministic publishing logic.
//!
//! Nothing here touches the filesystem or spawns processes: facts about the
//! environment (such as whether the web checkout exists) are passed in.

pub mod command;
pub mod config;
pub mod mode;
pub mod paths;
pub mod plan;
pub mod redirect;
