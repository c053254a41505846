//! Toolchain detection for Node.js, npm and git

use crate::error::{Error, Result};
use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    pub fn summary(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Run `<binary> --version` and report what came back
fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

pub fn check_npm() -> RuntimeInfo {
    probe("npm", "npm")
}

pub fn check_git() -> RuntimeInfo {
    probe("git", "git")
}

/// Decide whether the probed tools are enough to run a pipeline.
///
/// Node.js and npm are always required. git is required only when the
/// pipeline cannot work without it (cloning); otherwise a missing git is
/// reported but tolerated.
pub fn evaluate(runtimes: &[RuntimeInfo], git_required: bool) -> Result<()> {
    let missing: Vec<&str> = runtimes
        .iter()
        .filter(|r| !r.available)
        .filter(|r| r.name != "git" || git_required)
        .map(|r| match r.name {
            "Node.js" => "Node.js (install from https://nodejs.org)",
            "npm" => "npm (ships with Node.js)",
            "git" => "git (install from https://git-scm.com)",
            other => other,
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::MissingRuntime(missing.join(", ")))
    }
}
