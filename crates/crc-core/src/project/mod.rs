//! Project-level pipelines: the Vite + React bootstrapper and the Next.js boilerplate clone
//!
//! Both pipelines are strictly sequential. Every external program goes
//! through a [`CommandRunner`] wrapped in a [`StepRunner`], so each step
//! carries its own failure policy.

pub mod boilerplate;
pub mod examples;
pub mod files;
pub mod packages;
pub mod steps;

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::request::{ProjectRequest, Script};
use crate::runtime::process::{CommandRunner, ExternalCommand};
use colored::Colorize;
use examples::ExampleSet;
use files::TsconfigPatch;
use std::path::{Path, PathBuf};
use steps::{Step, StepOutcome, StepRunner};

pub use boilerplate::BoilerplateReport;

/// Runs project pipelines under a base directory
pub struct Bootstrapper<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a GeneratorConfig,
    base: PathBuf,
}

/// What the Vite pipeline ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub name: String,
    pub dir: PathBuf,
    pub script: Script,
    pub ui_kit: bool,
    /// UI-kit components whose install failed
    pub failed_components: Vec<String>,
    pub packages: Vec<String>,
    pub packages_installed: bool,
    /// Example files, relative to the project directory
    pub examples: Vec<PathBuf>,
    pub git: Option<StepOutcome>,
    pub editor: Option<StepOutcome>,
}

fn vite_template(script: Script) -> &'static str {
    if script.is_typescript() {
        "react-ts"
    } else {
        "react"
    }
}

fn banner(text: &str) {
    let rule = "═".repeat(62);
    println!("{}", rule.cyan());
    println!("  {}", text.bold());
    println!("{}", rule.cyan());
    println!();
}

impl<'a, R: CommandRunner> Bootstrapper<'a, R> {
    pub fn new(runner: &'a R, config: &'a GeneratorConfig, base: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            config,
            base: base.into(),
        }
    }

    fn steps(&self) -> StepRunner<'a, R> {
        StepRunner::new(self.runner)
    }

    /// Fail when `base/name` is already taken.
    ///
    /// Touches nothing but the filesystem, so callers can run it before
    /// probing the toolchain.
    pub fn claim_target(&self, name: &str) -> Result<PathBuf> {
        let dir = self.base.join(name);
        if dir.exists() {
            return Err(Error::TargetExists(dir));
        }
        Ok(dir)
    }

    fn editor_step(&self, dir: &Path) -> Step {
        Step::warn(
            format!("Opening {}", self.config.editor),
            ExternalCommand::new(&self.config.editor, [dir.display().to_string()]),
        )
    }

    fn git_steps(dir: &Path, message: &str) -> Vec<Step> {
        vec![
            Step::warn("git init", ExternalCommand::new("git", ["init"]).in_dir(dir)),
            Step::warn("git add", ExternalCommand::new("git", ["add", "."]).in_dir(dir)),
            Step::warn(
                "git commit",
                ExternalCommand::new("git", ["commit", "-m", message]).in_dir(dir),
            ),
        ]
    }

    /// Create a Vite + React project and layer the selected tooling on top
    pub async fn create_project(&self, request: &ProjectRequest) -> Result<BootstrapReport> {
        let dir = self.claim_target(&request.name)?;
        let script = request.script;
        let steps = self.steps();

        banner(&format!("🚀 Creating project: {}", request.name));

        steps
            .run(&Step::fatal(
                "Creating Vite project",
                ExternalCommand::new(
                    "npm",
                    [
                        "create",
                        "vite@latest",
                        request.name.as_str(),
                        "--",
                        "--template",
                        vite_template(script),
                    ],
                )
                .in_dir(&self.base)
                .with_stdin("n\nn\n"),
            ))
            .await?;

        steps
            .run(&Step::fatal(
                "Installing base dependencies",
                ExternalCommand::new("npm", ["install"]).in_dir(&dir),
            ))
            .await?;

        let mut failed_components = Vec::new();
        if request.install_ui_kit {
            failed_components = self.setup_ui_kit(&dir, request).await?;
        }

        let mut packages_installed = false;
        if !request.extra_packages.is_empty() {
            let mut args = vec!["install".to_string()];
            args.extend(request.extra_packages.iter().cloned());
            println!("  {} {}", "Packages:".dimmed(), request.extra_packages.join(", "));
            packages_installed = steps
                .run(&Step::warn(
                    "Installing additional packages",
                    ExternalCommand::new("npm", args).in_dir(&dir),
                ))
                .await?
                .succeeded();
        }

        println!("{} {}", "📁".blue(), "Creating folder structure".bold());
        files::create_folders(&dir)?;

        self.write_starter_files(&dir, script, request.install_ui_kit)?;

        let set = ExampleSet::for_project(request);
        let examples = if set.is_empty() {
            Vec::new()
        } else {
            println!("{} {}", "✨".blue(), "Creating package examples".bold());
            examples::write_examples(&dir, set, script, &self.config.api_url)?
        };

        let git = if request.init_git {
            println!("{} {}", "📚".blue(), "Initializing git".bold());
            Some(steps.run_chain(&Self::git_steps(&dir, "Initial commit")).await?)
        } else {
            None
        };

        let editor = if request.open_editor {
            Some(steps.run(&self.editor_step(&dir)).await?)
        } else {
            None
        };

        let report = BootstrapReport {
            name: request.name.clone(),
            dir,
            script,
            ui_kit: request.install_ui_kit,
            failed_components,
            packages: request.extra_packages.clone(),
            packages_installed,
            examples,
            git,
            editor,
        };
        print_summary(&report);
        Ok(report)
    }

    /// Install Tailwind and shadcn/ui; returns the components that failed to install
    async fn setup_ui_kit(&self, dir: &Path, request: &ProjectRequest) -> Result<Vec<String>> {
        let steps = self.steps();
        println!("{} {}", "🎨".blue(), "Configuring shadcn/ui".bold());

        let dev_deps = ["install", "-D"]
            .into_iter()
            .chain(packages::UI_KIT_DEV_DEPENDENCIES.iter().copied());
        steps
            .run(&Step::fatal(
                "Installing Tailwind CSS",
                ExternalCommand::new("npm", dev_deps).in_dir(dir),
            ))
            .await?;

        let deps = std::iter::once("install").chain(packages::UI_KIT_DEPENDENCIES.iter().copied());
        steps
            .run(&Step::fatal(
                "Installing UI kit dependencies",
                ExternalCommand::new("npm", deps).in_dir(dir),
            ))
            .await?;

        files::write_ui_kit_config(dir, request.script)?;
        println!("  {}", "✅ Configuration files created".green());

        let mut failed = Vec::new();
        for component in &request.ui_kit_components {
            let outcome = steps
                .run(&Step::warn(
                    format!("Adding {}", component),
                    ExternalCommand::new(
                        "npx",
                        [self.config.ui_kit_cli.as_str(), "add", component.as_str(), "--yes"],
                    )
                    .in_dir(dir),
                ))
                .await?;
            if !outcome.succeeded() {
                failed.push(component.clone());
            }
        }

        Ok(failed)
    }

    fn write_starter_files(&self, dir: &Path, script: Script, ui_kit: bool) -> Result<()> {
        println!("{} {}", "📝".blue(), "Writing starter files".bold());

        files::write_file(
            &dir.join("src").join(format!("App.{}", script.jsx_ext())),
            &files::app(script, ui_kit),
        )?;
        files::write_file(
            &dir.join(format!("vite.config.{}", script.module_ext())),
            files::vite_config(),
        )?;

        if script.is_typescript() {
            match files::patch_tsconfig(&dir.join("tsconfig.json"))? {
                TsconfigPatch::Patched => log::debug!("tsconfig.json patched with @/* alias"),
                TsconfigPatch::Missing => log::debug!("no tsconfig.json, alias patch skipped"),
                TsconfigPatch::Unparseable(reason) => {
                    steps::warning(&format!("tsconfig.json was not updated: {}", reason))
                }
            }
        }

        Ok(())
    }
}

pub fn print_summary(report: &BootstrapReport) {
    let rule = "═".repeat(62);
    println!();
    println!("{}", rule.green());
    println!(
        "  {}",
        format!("✅ Project {} created successfully!", report.name).bold()
    );
    println!("{}", rule.green());
    println!();

    println!("{}", "📦 Installed:".bold());
    println!("   {}", "• React + Vite".dimmed());
    if report.ui_kit {
        println!("   {}", "• shadcn/ui + Tailwind CSS".dimmed());
    }
    for package in &report.packages {
        println!("   {}", format!("• {}", package).dimmed());
    }
    if !report.failed_components.is_empty() {
        println!(
            "   {} {}",
            "⚠️  Not installed:".yellow(),
            report.failed_components.join(", ")
        );
    }

    if !report.examples.is_empty() {
        println!();
        println!("{}", "✨ Examples created:".yellow().bold());
        for path in &report.examples {
            println!("   {}", format!("• {}", path.display()).dimmed());
        }
    }

    println!();
    println!("{}", "🚀 Next steps:".bold());
    println!("   {}", format!("cd {}", report.name).dimmed());
    println!("   {}", "npm run dev".dimmed());

    if !report.examples.is_empty() {
        println!();
        println!("{}", "📚 Examples:".bold());
        println!("   {}", "Open EXAMPLES.md for the full walkthrough".dimmed());
        println!(
            "   {}",
            format!(
                "Render ExampleUsage from App.{} to see them running",
                report.script.jsx_ext()
            )
            .dimmed()
        );
    }

    println!();
    println!("{}", "📚 Available commands:".bold());
    println!("   {}", "npm run dev     - start the dev server".dimmed());
    println!("   {}", "npm run build   - production build".dimmed());
    println!("   {}", "npm run preview - preview the build".dimmed());
    println!();
}
