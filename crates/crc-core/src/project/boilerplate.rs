//! Next.js boilerplate clone

use super::files::write_json;
use super::steps::{self, Step, StepOutcome};
use super::{banner, Bootstrapper};
use crate::error::{Error, Result};
use crate::request::BoilerplateRequest;
use crate::runtime::process::{CommandRunner, ExternalCommand};
use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

const PACKAGE_FIELDS_TO_DROP: &[&str] = &["repository", "bugs", "homepage"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateReport {
    pub name: String,
    pub dir: PathBuf,
    pub dependencies: Option<StepOutcome>,
    pub git: Option<StepOutcome>,
    pub editor: Option<StepOutcome>,
}

/// Point the cloned `package.json` at the new project.
///
/// Returns `Ok(false)` when the clone has no `package.json`.
pub fn rename_package(path: &Path, name: &str) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let mut package: Value = serde_json::from_str(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(fields) = package.as_object_mut() {
        fields.insert("name".to_string(), Value::from(name));
        fields.insert("version".to_string(), Value::from("1.0.0"));
        for field in PACKAGE_FIELDS_TO_DROP {
            fields.remove(*field);
        }
    }

    write_json(path, &package)?;
    Ok(true)
}

fn remove_history(dir: &Path) -> Result<()> {
    let git_dir = dir.join(".git");
    if git_dir.exists() {
        fs::remove_dir_all(&git_dir).map_err(|e| Error::io(&git_dir, e))?;
    }
    Ok(())
}

impl<'a, R: CommandRunner> Bootstrapper<'a, R> {
    /// Clone the Next.js boilerplate into `base/name` and make it the user's own
    pub async fn clone_boilerplate(&self, request: &BoilerplateRequest) -> Result<BoilerplateReport> {
        let dir = self.claim_target(&request.name)?;
        let steps = self.steps();

        banner(&format!("⚡ Cloning Next.js boilerplate: {}", request.name));

        steps
            .run(&Step::fatal(
                "Cloning repository",
                ExternalCommand::new(
                    "git",
                    ["clone", self.config.boilerplate_url.as_str(), request.name.as_str()],
                )
                .in_dir(&self.base),
            ))
            .await?;

        if request.fresh_history {
            println!("{} {}", "🗑️ ".blue(), "Removing git history".bold());
            if let Err(e) = remove_history(&dir) {
                steps::warning(&format!("could not remove git history: {}", e));
            }
        }

        println!("{} {}", "📝".blue(), "Updating package.json".bold());
        match rename_package(&dir.join("package.json"), &request.name) {
            Ok(true) => {}
            Ok(false) => log::debug!("boilerplate has no package.json"),
            Err(e) => steps::warning(&format!("could not update package.json: {}", e)),
        }

        let dependencies = if request.install_dependencies {
            println!("  {}", "This may take a few minutes...".dimmed());
            Some(
                steps
                    .run(&Step::warn(
                        "Installing dependencies",
                        ExternalCommand::new("npm", ["install"]).in_dir(&dir),
                    ))
                    .await?,
            )
        } else {
            None
        };

        let git = if request.fresh_history {
            println!("{} {}", "📚".blue(), "Initializing a new git repository".bold());
            Some(
                steps
                    .run_chain(&Self::git_steps(&dir, "Initial commit from Next.js boilerplate"))
                    .await?,
            )
        } else {
            None
        };

        let editor = if request.open_editor {
            Some(steps.run(&self.editor_step(&dir)).await?)
        } else {
            None
        };

        let report = BoilerplateReport {
            name: request.name.clone(),
            dir,
            dependencies,
            git,
            editor,
        };
        print_summary(&report, &self.config.editor);
        Ok(report)
    }
}

pub fn print_summary(report: &BoilerplateReport, editor: &str) {
    let rule = "═".repeat(62);
    println!();
    println!("{}", rule.green());
    println!(
        "  {}",
        format!("✅ Next.js boilerplate created: {}", report.name).bold()
    );
    println!("{}", rule.green());
    println!();

    println!("{}", "⚡ Included in the boilerplate:".bold());
    for feature in [
        "Next.js with App Router",
        "TypeScript",
        "Tailwind CSS",
        "shadcn/ui components",
        "ESLint + Prettier",
        "Organized structure",
        "Production-ready configuration",
    ] {
        println!("   {}", format!("• {}", feature).dimmed());
    }

    println!();
    println!("{}", "🚀 Next steps:".bold());
    println!("   {}", format!("cd {}", report.name).dimmed());
    if !matches!(report.dependencies, Some(StepOutcome::Succeeded)) {
        println!("   {}", "npm install".dimmed());
    }
    println!("   {}", "npm run dev".dimmed());
    if !matches!(report.editor, Some(StepOutcome::Succeeded)) {
        println!("   {}", format!("{} {}", editor, report.name).dimmed());
    }

    println!();
    println!("{}", "📚 Available commands:".bold());
    println!("   {}", "npm run dev         - development server".dimmed());
    println!("   {}", "npm run build       - production build".dimmed());
    println!("   {}", "npm run start       - serve the production build".dimmed());
    println!("   {}", "npm run lint        - run ESLint".dimmed());
    println!();
}
