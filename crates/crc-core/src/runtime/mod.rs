//! External tools: detection and invocation
//!
//! This module provides:
//! - Toolchain detection (Node.js, npm, git)
//! - The [`CommandRunner`] seam used by the project pipelines

pub mod check;
pub mod process;

pub use check::{check_git, check_node, check_npm, evaluate, RuntimeInfo};
pub use process::{CommandRunner, ExternalCommand, ProcessError, SystemRunner};
