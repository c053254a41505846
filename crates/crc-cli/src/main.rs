//! crc - React component, store, context and project generator

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use clap::error::ErrorKind;
use crc_core::error::{EXIT_IO, EXIT_VALIDATION};
use crc_core::project::Bootstrapper;
use crc_core::scaffold::{self, Blueprint};
use crc_core::{tui, ComponentFlags, GenerationRequest, GeneratorConfig, SystemRunner};
use log::LevelFilter;
use std::path::Path;

const EXAMPLES: &str = "\
Examples:
  crc Button                     Button/ with Button.jsx, Button.css and index.js
  crc Modal --ts --styled --test Modal/ with Modal.tsx, styled.ts, Modal.test.tsx and index.ts
  crc Dashboard -t -z -c         component plus Zustand store and Context
  crc Card --path ./src/components
  crc --interactive              answer a few questions instead of passing flags
  crc my-app --project           new Vite + React project
  crc my-site --nextjs           clone the Next.js boilerplate

Generated structure:
  Name/
    Name.jsx | Name.tsx          component
    Name.css | styled.* | styles.*
    Name.test.*                  with --test
    store.*                      with --zustand
    context.*                    with --context
    index.*                      re-exports everything above

Environment:
  CRC_API_URL          fallback API URL baked into generated axios examples
  CRC_EDITOR           editor command used to open projects (default: code)
  CRC_BOILERPLATE_URL  repository cloned by --nextjs
  CRC_UI_KIT_CLI       npx package used to add shadcn/ui components
  RUST_LOG             diagnostic log filter";

#[derive(Parser, Debug)]
#[command(name = "crc")]
#[command(about = "Generate React components, Zustand stores, Context modules and Vite projects")]
#[command(version)]
#[command(after_long_help = EXAMPLES)]
pub struct Args {
    /// Component name in PascalCase (project name with --project/--nextjs)
    pub name: Option<String>,

    /// Generate TypeScript files
    #[arg(short = 't', long = "ts")]
    pub ts: bool,

    /// Style with styled-components
    #[arg(short, long)]
    pub styled: bool,

    /// Style with Emotion
    #[arg(short, long)]
    pub emotion: bool,

    /// Folder the component directory is created in
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Ask questions instead of reading flags
    #[arg(short, long)]
    pub interactive: bool,

    /// Also generate a test file
    #[arg(long)]
    pub test: bool,

    /// Also generate a Zustand store
    #[arg(short, long)]
    pub zustand: bool,

    /// Also generate a Context module
    #[arg(short, long)]
    pub context: bool,

    /// Create a Vite + React project
    #[arg(long, conflicts_with = "nextjs")]
    pub project: bool,

    /// Clone the Next.js boilerplate
    #[arg(long)]
    pub nextjs: bool,

    /// Accept every default in the project prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    fn component_flags(&self) -> ComponentFlags {
        ComponentFlags {
            name: self.name.clone().unwrap_or_default(),
            typescript: self.ts,
            styled: self.styled,
            emotion: self.emotion,
            path: self.path.clone(),
            test: self.test,
            zustand: self.zustand,
            context: self.context,
        }
    }
}

/// Map `-v` counts to a log level; warnings are always shown
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Help and version are successful exits; every other parse error is a usage error
fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => EXIT_VALIDATION,
    }
}

/// Turn the command line into a request, prompting when needed
fn build_request(args: &Args) -> crc_core::Result<GenerationRequest> {
    if args.project {
        return tui::project_flow(args.name.as_deref(), args.yes);
    }
    if args.nextjs {
        return tui::boilerplate_flow(args.name.as_deref(), args.yes);
    }
    if args.interactive || args.name.is_none() {
        return tui::run_interactive();
    }
    args.component_flags().into_request()
}

async fn execute(request: GenerationRequest, base: &Path) -> crc_core::Result<()> {
    let config = GeneratorConfig::from_env();
    let runner = SystemRunner;

    match request {
        GenerationRequest::Project(project) => {
            let bootstrapper = Bootstrapper::new(&runner, &config, base);
            bootstrapper.claim_target(&project.name)?;
            tui::preflight(false)?;
            bootstrapper.create_project(&project).await?;
        }
        GenerationRequest::Boilerplate(boilerplate) => {
            let bootstrapper = Bootstrapper::new(&runner, &config, base);
            bootstrapper.claim_target(&boilerplate.name)?;
            tui::preflight(true)?;
            bootstrapper.clone_boilerplate(&boilerplate).await?;
        }
        unit => {
            if let Some(blueprint) = Blueprint::from_request(&unit) {
                scaffold::scaffold(&blueprint, base)?;
            }
        }
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let base = std::env::current_dir().context("could not read the current directory")?;
    let request = build_request(&args)?;
    log::debug!("request: {:?}", request);
    execute(request, &base).await?;
    Ok(())
}

/// Print a diagnostic for `err` and return the process exit code
fn report_error(err: &anyhow::Error) -> i32 {
    let Some(core) = err.downcast_ref::<crc_core::Error>() else {
        eprintln!("{} {:#}", "❌ ERROR:".red().bold(), err);
        return EXIT_IO;
    };

    match core {
        crc_core::Error::Cancelled => {
            eprintln!("{}", "Operation cancelled.".yellow());
        }
        crc_core::Error::StepFailed { .. } => {
            eprintln!("{} {}", "❌ ERROR:".red().bold(), core.to_string().red());
            eprintln!("{}", "💡 Try running the failed command manually.".dimmed());
        }
        crc_core::Error::MissingName | crc_core::Error::InvalidName(_) => {
            eprintln!("{} {}", "❌ ERROR:".red().bold(), core.to_string().red());
            eprintln!("{}", "💡 Usage: crc <ComponentName> [options], e.g. crc Button --ts".dimmed());
        }
        _ => {
            eprintln!("{} {}", "❌ ERROR:".red().bold(), core.to_string().red());
        }
    }

    core.exit_code()
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(crc_core::error::EXIT_CANCELLED);
    })
    .ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(usage_exit_code(&err));
        }
    };
    env_logger::Builder::new()
        .filter_level(log_level(args.verbose))
        .parse_default_env()
        .init();

    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        std::process::exit(report_error(&err));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags_map_to_component_request() {
        let args = Args::parse_from(["crc", "Modal", "-t", "--styled", "--test", "-p", "./src"]);
        let flags = args.component_flags();
        assert_eq!(flags.name, "Modal");
        assert!(flags.typescript && flags.styled && flags.test);
        assert!(!flags.emotion);
        assert_eq!(flags.path, "./src");
    }

    #[test]
    fn test_project_and_nextjs_conflict() {
        assert!(Args::try_parse_from(["crc", "app", "--project", "--nextjs"]).is_err());
    }

    #[test]
    fn test_usage_errors_are_validation_failures() {
        let err = Args::try_parse_from(["crc", "Button", "--bogus"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), EXIT_VALIDATION);

        let err = Args::try_parse_from(["crc", "--help"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);

        let err = Args::try_parse_from(["crc", "--version"]).unwrap_err();
        assert_eq!(usage_exit_code(&err), 0);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(7), LevelFilter::Trace);
    }

    #[test]
    fn test_exit_codes() {
        let err = anyhow::Error::from(crc_core::Error::StyleConflict);
        assert_eq!(report_error(&err), 1);

        let err = anyhow::Error::from(crc_core::Error::Cancelled);
        assert_eq!(report_error(&err), 130);

        let err = anyhow::anyhow!("something else");
        assert_eq!(report_error(&err), EXIT_IO);
    }
}
