//! Configuration and starter files written into a bootstrapped project

use crate::error::{Error, Result};
use crate::request::Script;
use crate::templates::render;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const TAILWIND_COLORS: &str = include_str!("../../assets/project/tailwind.colors.tmpl");
const TAILWIND_BASE: &str = include_str!("../../assets/project/tailwind.base.config.js.tmpl");
const TAILWIND_SCOPED: &str = include_str!("../../assets/project/tailwind.config.js.tmpl");
const POSTCSS: &str = include_str!("../../assets/project/postcss.config.js.tmpl");
const INDEX_CSS: &str = include_str!("../../assets/project/index.css.tmpl");
const VITE_CONFIG: &str = include_str!("../../assets/project/vite.config.tmpl");
const APP_KIT: &str = include_str!("../../assets/project/App.kit.tmpl");
const APP_PLAIN: &str = include_str!("../../assets/project/App.plain.tmpl");

/// Folders created under every bootstrapped project
pub const PROJECT_FOLDERS: &[&str] = &[
    "src/components/ui",
    "src/pages",
    "src/hooks",
    "src/lib",
    "src/services",
    "src/stores",
    "src/contexts",
    "src/types",
    "src/utils",
    "src/assets",
];

/// Write `contents` to `path`, creating parent directories
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    log::debug!("writing {}", path.display());
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Pretty-print `value` as JSON into `path`
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::io(path, e.into()))?;
    write_file(path, &json)
}

/// Tailwind config with shadcn/ui defaults, before it is scoped to the Vite layout
pub fn tailwind_base_config() -> String {
    render(TAILWIND_BASE, &[("__COLORS__", TAILWIND_COLORS)])
}

/// Tailwind config scoped to `index.html` and `src/`
pub fn tailwind_config() -> String {
    render(TAILWIND_SCOPED, &[("__COLORS__", TAILWIND_COLORS)])
}

pub fn postcss_config() -> &'static str {
    POSTCSS
}

pub fn index_css() -> &'static str {
    INDEX_CSS
}

pub fn vite_config() -> &'static str {
    VITE_CONFIG
}

/// `src/lib/utils` with the `cn` class-name helper
pub fn utils(script: Script) -> String {
    let (clsx_import, inputs) = if script.is_typescript() {
        ("type ClassValue, clsx", "...inputs: ClassValue[]")
    } else {
        ("clsx", "...inputs")
    };
    format!(
        "import {{ {} }} from \"clsx\"\nimport {{ twMerge }} from \"tailwind-merge\"\n\nexport function cn({}) {{\n  return twMerge(clsx(inputs))\n}}\n",
        clsx_import, inputs
    )
}

/// Landing page written to `src/App.{jsx,tsx}`
pub fn app(script: Script, ui_kit: bool) -> String {
    let template = if ui_kit { APP_KIT } else { APP_PLAIN };
    render(template, &[("__EXT__", script.jsx_ext())])
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TailwindSettings {
    pub config: String,
    pub css: String,
    pub base_color: String,
    pub css_variables: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Aliases {
    pub components: String,
    pub utils: String,
}

/// shadcn/ui `components.json`
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ComponentsJson {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub style: String,
    pub rsc: bool,
    pub tsx: bool,
    pub tailwind: TailwindSettings,
    pub aliases: Aliases,
}

impl ComponentsJson {
    pub fn new(script: Script) -> Self {
        Self {
            schema: "https://ui.shadcn.com/schema.json".to_string(),
            style: "default".to_string(),
            rsc: false,
            tsx: script.is_typescript(),
            tailwind: TailwindSettings {
                config: "tailwind.config.js".to_string(),
                css: "src/index.css".to_string(),
                base_color: "slate".to_string(),
                css_variables: true,
            },
            aliases: Aliases {
                components: "@/components".to_string(),
                utils: "@/lib/utils".to_string(),
            },
        }
    }
}

/// Write the Tailwind, PostCSS and shadcn/ui configuration; returns the written paths
pub fn write_ui_kit_config(dir: &Path, script: Script) -> Result<Vec<PathBuf>> {
    let tailwind = dir.join("tailwind.config.js");
    write_file(&tailwind, &tailwind_base_config())?;

    let postcss = dir.join("postcss.config.js");
    write_file(&postcss, postcss_config())?;

    let components = dir.join("components.json");
    write_json(&components, &ComponentsJson::new(script))?;

    write_file(&tailwind, &tailwind_config())?;

    let css = dir.join("src").join("index.css");
    write_file(&css, index_css())?;

    let utils_path = dir
        .join("src")
        .join("lib")
        .join(format!("utils.{}", script.module_ext()));
    write_file(&utils_path, &utils(script))?;

    Ok(vec![tailwind, postcss, components, css, utils_path])
}

/// Create the standard folder layout; existing folders are left alone
pub fn create_folders(dir: &Path) -> Result<()> {
    for folder in PROJECT_FOLDERS {
        let path = dir.join(folder);
        fs::create_dir_all(&path).map_err(|e| Error::io(&path, e))?;
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsconfigPatch {
    Patched,
    /// No `tsconfig.json` in the project
    Missing,
    /// The file exists but is not valid JSON
    Unparseable(String),
}

/// Add the `@/*` path alias to `tsconfig.json`, keeping every other option
pub fn patch_tsconfig(path: &Path) -> Result<TsconfigPatch> {
    if !path.exists() {
        return Ok(TsconfigPatch::Missing);
    }

    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut tsconfig: Value = match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => return Ok(TsconfigPatch::Unparseable(e.to_string())),
    };

    let Some(root) = tsconfig.as_object_mut() else {
        return Ok(TsconfigPatch::Unparseable("top level is not an object".to_string()));
    };

    let options = root
        .entry("compilerOptions")
        .or_insert_with(|| Value::Object(Default::default()));
    if !options.is_object() {
        *options = Value::Object(Default::default());
    }
    if let Some(options) = options.as_object_mut() {
        options.insert("baseUrl".to_string(), Value::from("."));
        options.insert("paths".to_string(), serde_json::json!({ "@/*": ["./src/*"] }));
    }

    write_json(path, &tsconfig)?;
    Ok(TsconfigPatch::Patched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailwind_configs() {
        let base = tailwind_base_config();
        assert!(base.contains("'./components/**/*.{ts,tsx}'"));
        assert!(base.contains("accordion-down"));
        assert!(base.contains("hsl(var(--primary))"));
        assert!(!base.contains("__COLORS__"));

        let scoped = tailwind_config();
        assert!(scoped.contains("\"./index.html\""));
        assert!(scoped.contains("\"./src/**/*.{js,ts,jsx,tsx}\""));
        assert!(scoped.contains("hsl(var(--card-foreground))"));
        assert!(scoped.contains("require(\"tailwindcss-animate\")"));
    }

    #[test]
    fn test_utils_typing() {
        assert!(utils(Script::TypeScript).contains("cn(...inputs: ClassValue[])"));
        assert!(utils(Script::TypeScript).starts_with("import { type ClassValue, clsx } from \"clsx\""));

        let js = utils(Script::JavaScript);
        assert!(js.starts_with("import { clsx } from \"clsx\"\n"));
        assert!(js.contains("cn(...inputs)"));
        assert!(!js.contains("ClassValue"));
    }

    #[test]
    fn test_app_variants() {
        let kit = app(Script::TypeScript, true);
        assert!(kit.contains("lucide-react"));
        assert!(kit.contains("src/App.tsx"));

        let plain = app(Script::JavaScript, false);
        assert!(!plain.contains("lucide-react"));
        assert!(plain.contains("src/App.jsx"));
    }

    #[test]
    fn test_components_json_shape() {
        let json = serde_json::to_value(ComponentsJson::new(Script::JavaScript)).unwrap();
        assert_eq!(json["$schema"], "https://ui.shadcn.com/schema.json");
        assert_eq!(json["tsx"], false);
        assert_eq!(json["tailwind"]["baseColor"], "slate");
        assert_eq!(json["tailwind"]["cssVariables"], true);
        assert_eq!(json["aliases"]["utils"], "@/lib/utils");
    }

    #[test]
    fn test_write_ui_kit_config() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_ui_kit_config(dir.path(), Script::TypeScript).unwrap();
        assert_eq!(written.len(), 5);
        let tailwind = fs::read_to_string(dir.path().join("tailwind.config.js")).unwrap();
        assert!(tailwind.contains("./index.html"));
        assert!(dir.path().join("src/lib/utils.ts").is_file());
        let components: ComponentsJson =
            serde_json::from_str(&fs::read_to_string(dir.path().join("components.json")).unwrap())
                .unwrap();
        assert!(components.tsx);
    }

    #[test]
    fn test_create_folders_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        create_folders(dir.path()).unwrap();
        create_folders(dir.path()).unwrap();
        for folder in PROJECT_FOLDERS {
            assert!(dir.path().join(folder).is_dir());
        }
    }

    #[test]
    fn test_patch_tsconfig_keeps_existing_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tsconfig.json");
        fs::write(&path, r#"{"files":[],"compilerOptions":{"strict":true}}"#).unwrap();

        assert_eq!(patch_tsconfig(&path).unwrap(), TsconfigPatch::Patched);
        let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["compilerOptions"]["strict"], true);
        assert_eq!(value["compilerOptions"]["baseUrl"], ".");
        assert_eq!(value["compilerOptions"]["paths"]["@/*"][0], "./src/*");
        assert!(value["files"].is_array());
    }

    #[test]
    fn test_patch_tsconfig_missing_and_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tsconfig.json");
        assert_eq!(patch_tsconfig(&path).unwrap(), TsconfigPatch::Missing);

        fs::write(&path, "{ // comment\n }").unwrap();
        assert!(matches!(
            patch_tsconfig(&path).unwrap(),
            TsconfigPatch::Unparseable(_)
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ // comment\n }");
    }
}
