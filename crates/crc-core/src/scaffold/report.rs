//! Terminal report for the scaffolding engine

use super::{FileRole, ScaffoldOutcome};
use crate::request::{Kind, Script};
use crate::templates::context::context_exports;
use crate::templates::store::store_hook;
use colored::Colorize;
use std::path::Path;

const RULE_WIDTH: usize = 58;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

pub fn directory_created(path: &Path) {
    println!("{} {}", "📁 Created directory:".blue(), path.display());
}

pub fn banner(kind: Kind, name: &str, relative: &Path) {
    println!();
    println!("{}", rule().cyan());
    println!(
        "  {} {}",
        format!("Creating {}:", kind.label()).cyan().bold(),
        name.bold()
    );
    println!("  {} {}", "Path:".dimmed(), relative.display());
    println!("{}", rule().cyan());
    println!();
}

pub fn file_written(role: FileRole, path: &Path) {
    let file_name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("  {} {:<18} {}", role.icon(), role.label(), file_name.green());
}

/// Lines showing how to consume the generated unit
pub fn usage_hints(outcome: &ScaffoldOutcome, script: Script) -> Vec<String> {
    let import_path = outcome.import_path();
    let name = outcome.name.as_str();
    let hook = store_hook(name);
    let [provider, context_hook, actions] = context_exports(name);

    let mut lines = Vec::new();
    match outcome.kind {
        Kind::Store => {
            lines.push(format!("import {{ {} }} from '{}';", hook, import_path));
            lines.push(format!(
                "const {{ count, increment, decrement }} = {}();",
                hook
            ));
        }
        Kind::Context => {
            lines.push(format!(
                "import {{ {}, {}, {} }} from '{}';",
                provider, context_hook, actions, import_path
            ));
            lines.push(format!("<{}>{{children}}</{}>", provider, provider));
            lines.push(format!("const {{ state, dispatch }} = {}();", context_hook));
        }
        _ => {
            lines.push(format!("import {{ {} }} from '{}';", name, import_path));
            lines.push(format!("<{} />", name));
            let has = |role: FileRole| outcome.files.iter().any(|f| f.role == role);
            if has(FileRole::Store) {
                lines.push(format!("import {{ {} }} from '{}';", hook, import_path));
            }
            if has(FileRole::Context) {
                lines.push(format!(
                    "import {{ {}, {} }} from '{}';",
                    provider, context_hook, import_path
                ));
            }
        }
    }

    if script.is_typescript() {
        lines.push(format!("// typed exports live in {}/index.ts", import_path));
    }

    lines
}

pub fn summary(outcome: &ScaffoldOutcome, script: Script) {
    println!();
    println!("{}", rule().green());
    println!(
        "  {} {}",
        "✅".green(),
        format!("{} {} created successfully!", outcome.kind.title(), outcome.name)
            .green()
            .bold()
    );
    println!("{}", rule().green());
    println!();
    println!("  {}", "Files:".bold());
    for file in outcome.summary_files() {
        println!("    {} {}", "•".dimmed(), file.path.display());
    }
    println!();
    println!("  {}", "How to use:".bold());
    for line in usage_hints(outcome, script) {
        println!("    {}", line.cyan());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scaffold::CreatedFile;
    use std::path::PathBuf;

    fn outcome(kind: Kind, name: &str, roles: &[FileRole]) -> ScaffoldOutcome {
        ScaffoldOutcome {
            kind,
            name: name.to_string(),
            dir: PathBuf::from("/tmp/project").join(name),
            relative: PathBuf::from("src").join(name),
            files: roles
                .iter()
                .map(|role| CreatedFile {
                    role: *role,
                    path: PathBuf::from("unused"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_component_hint_imports_from_relative_dir() {
        let hints = usage_hints(
            &outcome(Kind::Component, "Button", &[FileRole::Component]),
            Script::JavaScript,
        );
        assert_eq!(hints[0], "import { Button } from './src/Button';");
        assert_eq!(hints[1], "<Button />");
        assert_eq!(hints.len(), 2);
    }

    #[test]
    fn test_component_hint_mentions_add_ons() {
        let hints = usage_hints(
            &outcome(
                Kind::Component,
                "Dashboard",
                &[FileRole::Component, FileRole::Store, FileRole::Context],
            ),
            Script::JavaScript,
        );
        assert!(hints.iter().any(|l| l.contains("useDashboardStore")));
        assert!(hints.iter().any(|l| l.contains("useDashboardContext")));
    }

    #[test]
    fn test_store_and_context_hints() {
        let store = usage_hints(&outcome(Kind::Store, "Cart", &[FileRole::Store]), Script::JavaScript);
        assert!(store[0].contains("useCartStore"));
        assert!(store[1].contains("useCartStore()"));

        let context = usage_hints(
            &outcome(Kind::Context, "Auth", &[FileRole::Context]),
            Script::TypeScript,
        );
        assert!(context[0].contains("AuthProvider, useAuthContext, authActions"));
        assert!(context.last().unwrap().contains("index.ts"));
    }
}
