//! crc core - scaffolding for React components, stores, contexts and projects
//!
//! The binary turns flags or interactive answers into a single
//! [`GenerationRequest`] and hands it to one of three back ends:
//!
//! - **Scaffolding engine** ([`scaffold`]): writes a component, store or
//!   context directory from the pure [`templates`]
//! - **Project bootstrapper** ([`project::Bootstrapper::create_project`]):
//!   drives npm/npx/git to build a Vite + React project
//! - **Boilerplate cloner** ([`project::Bootstrapper::clone_boilerplate`]):
//!   clones and re-initializes the Next.js starter
//!
//! External programs only run through the [`runtime::CommandRunner`] trait,
//! so every pipeline can be exercised with a fake runner.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use crc_core::{scaffold, ComponentFlags};
//!
//! let request = ComponentFlags {
//!     name: "Button".into(),
//!     typescript: true,
//!     ..Default::default()
//! }
//! .into_request()?;
//!
//! let blueprint = scaffold::Blueprint::from_request(&request).unwrap();
//! scaffold::scaffold(&blueprint, &std::env::current_dir()?)?;
//! ```

pub mod config;
pub mod error;
pub mod project;
pub mod request;
pub mod runtime;
pub mod scaffold;
pub mod templates;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use project::Bootstrapper;
pub use request::{ComponentFlags, GenerationRequest, Kind, Script, StyleMode};
pub use runtime::{CommandRunner, SystemRunner};
pub use scaffold::{Blueprint, ScaffoldOutcome};
