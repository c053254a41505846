//! Generator configuration with environment overrides

/// Default API base URL baked into the generated axios client
pub const DEFAULT_API_URL: &str = "https://api.example.com";
/// Default editor binary used to open generated projects
pub const DEFAULT_EDITOR: &str = "code";
/// Default Next.js boilerplate repository
pub const DEFAULT_BOILERPLATE_URL: &str = "https://github.com/thiagonmiziara/boileerplate-next.git";
/// Default package spec for the shadcn/ui CLI (run through npx)
pub const DEFAULT_UI_KIT_CLI: &str = "shadcn@latest";

pub const API_URL_ENV: &str = "CRC_API_URL";
pub const EDITOR_ENV: &str = "CRC_EDITOR";
pub const BOILERPLATE_URL_ENV: &str = "CRC_BOILERPLATE_URL";
pub const UI_KIT_CLI_ENV: &str = "CRC_UI_KIT_CLI";

/// Settings that influence generated files and external commands.
///
/// Nothing in the generators reads the environment directly; the binary builds
/// one of these with [`GeneratorConfig::from_env`] and passes it down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Fallback for `VITE_API_URL` in the generated `services/api` module
    pub api_url: String,
    /// Editor binary invoked with the project directory
    pub editor: String,
    /// Git URL cloned by the boilerplate pipeline
    pub boilerplate_url: String,
    /// Package spec passed to `npx` to add UI-kit components
    pub ui_kit_cli: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            editor: DEFAULT_EDITOR.to_string(),
            boilerplate_url: DEFAULT_BOILERPLATE_URL.to_string(),
            ui_kit_cli: DEFAULT_UI_KIT_CLI.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Build from process environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_url: get(API_URL_ENV, DEFAULT_API_URL),
            editor: get(EDITOR_ENV, DEFAULT_EDITOR),
            boilerplate_url: get(BOILERPLATE_URL_ENV, DEFAULT_BOILERPLATE_URL),
            ui_kit_cli: get(UI_KIT_CLI_ENV, DEFAULT_UI_KIT_CLI),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = GeneratorConfig::from_lookup(|_| None);
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.editor, "code");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let vars: HashMap<&str, &str> = [
            (API_URL_ENV, "http://localhost:3000"),
            (EDITOR_ENV, "zed"),
            (UI_KIT_CLI_ENV, "  "),
        ]
        .into_iter()
        .collect();

        let config = GeneratorConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_url, "http://localhost:3000");
        assert_eq!(config.editor, "zed");
        // blank values fall back to the default
        assert_eq!(config.ui_kit_cli, DEFAULT_UI_KIT_CLI);
        assert_eq!(config.boilerplate_url, DEFAULT_BOILERPLATE_URL);
    }
}
