//! Input validation shared by flag mode and the interactive prompts

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static UNIT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("valid unit name pattern"));

static PROJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid project name pattern"));

/// Validate a component/store/context name and return it trimmed
pub fn unit_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(Error::MissingName);
    }
    if !UNIT_NAME.is_match(name) {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

/// Validate the folder a unit is created in.
///
/// Only relative paths are accepted: anything containing `..` must be written
/// explicitly relative to the current directory (`./`).
pub fn target_path(input: &str) -> Result<String> {
    let path = input.trim();
    if path.is_empty() {
        return Ok(".".to_string());
    }
    if path.contains("..") && !path.starts_with("./") {
        return Err(Error::InvalidPath(path.to_string()));
    }
    Ok(path.to_string())
}

/// Validate a project directory name (npm package style)
pub fn project_name(input: &str) -> Result<String> {
    let name = input.trim();
    if name.is_empty() {
        return Err(Error::MissingName);
    }
    if !PROJECT_NAME.is_match(name) {
        return Err(Error::InvalidProjectName(name.to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_name_accepts_pascal_case() {
        assert_eq!(unit_name("Button").unwrap(), "Button");
        assert_eq!(unit_name("  Modal2 ").unwrap(), "Modal2");
        assert_eq!(unit_name("X").unwrap(), "X");
    }

    #[test]
    fn test_unit_name_rejects_invalid() {
        assert!(matches!(unit_name(""), Err(Error::MissingName)));
        assert!(matches!(unit_name("   "), Err(Error::MissingName)));
        assert!(matches!(unit_name("button"), Err(Error::InvalidName(_))));
        assert!(matches!(unit_name("My-Button"), Err(Error::InvalidName(_))));
        assert!(matches!(unit_name("1Button"), Err(Error::InvalidName(_))));
        assert!(matches!(unit_name("Button Group"), Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_target_path_rules() {
        assert_eq!(target_path("").unwrap(), ".");
        assert_eq!(target_path("./src/components").unwrap(), "./src/components");
        assert_eq!(target_path("src").unwrap(), "src");
        assert_eq!(target_path("./../shared").unwrap(), "./../shared");
        assert!(matches!(target_path("../outside"), Err(Error::InvalidPath(_))));
        assert!(matches!(target_path("src/../../x"), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_project_name_rules() {
        assert_eq!(project_name("my-app").unwrap(), "my-app");
        assert_eq!(project_name("app2").unwrap(), "app2");
        assert!(matches!(project_name(""), Err(Error::MissingName)));
        assert!(matches!(project_name("MyApp"), Err(Error::InvalidProjectName(_))));
        assert!(matches!(project_name("my_app"), Err(Error::InvalidProjectName(_))));
        assert!(matches!(project_name("my app"), Err(Error::InvalidProjectName(_))));
    }
}
