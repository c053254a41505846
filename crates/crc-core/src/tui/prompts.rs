//! Charm-style interactive prompts using cliclack

use crate::error::{Error, Result};
use crate::project::packages::{self, CatalogEntry};
use crate::request::{
    BoilerplateRequest, GenerationRequest, Kind, ProjectRequest, Script, StyleMode, UnitAnswers,
};
use crate::runtime::check;
use crate::validate;

/// Adapt a validator to cliclack's `validate` hook
fn check_with(
    rule: fn(&str) -> Result<String>,
) -> impl Fn(&String) -> std::result::Result<(), String> {
    move |input: &String| rule(input).map(|_| ()).map_err(|e| e.to_string())
}

fn multiselect_catalog(prompt: &str, catalog: &[CatalogEntry]) -> Result<Vec<String>> {
    let mut multi = cliclack::multiselect(prompt);
    for entry in catalog {
        multi = multi.item(entry.value.to_string(), entry.label, entry.hint);
    }
    let selected: Vec<String> = multi
        .initial_values(packages::defaults(catalog))
        .required(false)
        .interact()?;
    Ok(selected)
}

/// Run the full interactive flow and return what the user asked for
pub fn run_interactive() -> Result<GenerationRequest> {
    cliclack::intro("React component generator")?;

    let kind: Kind = cliclack::select("What do you want to create?")
        .item(Kind::Component, "Component", "React component with styles")
        .item(Kind::Store, "Store", "Zustand store")
        .item(Kind::Context, "Context", "Context API with reducer")
        .item(Kind::Project, "Project", "Vite + React project")
        .item(Kind::Boilerplate, "Next.js boilerplate", "Clone the Next.js starter")
        .interact()?;

    match kind {
        Kind::Project => project_flow(None, false),
        Kind::Boilerplate => boilerplate_flow(None, false),
        _ => unit_flow(kind),
    }
}

fn unit_flow(kind: Kind) -> Result<GenerationRequest> {
    let name: String = cliclack::input(format!("{} name", kind.title()))
        .placeholder("Button")
        .validate(check_with(validate::unit_name))
        .interact()?;

    let path: String = cliclack::input("Where should it be created?")
        .placeholder(".")
        .default_input(".")
        .validate(check_with(validate::target_path))
        .interact()?;

    let typescript: bool = cliclack::confirm("Use TypeScript?")
        .initial_value(false)
        .interact()?;

    let mut answers = UnitAnswers {
        kind,
        name,
        path,
        typescript,
        style: StyleMode::Css,
        test: false,
        store: false,
        context: false,
    };

    if kind == Kind::Component {
        answers.style = cliclack::select("Styling")
            .item(StyleMode::Css, StyleMode::Css.display_name(), "Plain stylesheet")
            .item(StyleMode::Styled, StyleMode::Styled.display_name(), "styled-components")
            .item(StyleMode::Emotion, StyleMode::Emotion.display_name(), "@emotion/styled")
            .initial_value(StyleMode::Css)
            .interact()?;
        answers.test = cliclack::confirm("Include a test file?")
            .initial_value(false)
            .interact()?;
        answers.store = cliclack::confirm("Also create a Zustand store?")
            .initial_value(false)
            .interact()?;
        answers.context = cliclack::confirm("Also create a Context?")
            .initial_value(false)
            .interact()?;
    }

    let request = answers.normalize()?;
    cliclack::outro(format!("Generating {}", kind.label()))?;
    Ok(request)
}

/// Resolve the project name from a preset or a prompt
fn project_name(preset: Option<&str>, yes: bool) -> Result<String> {
    match preset {
        Some(name) => {
            let name = validate::project_name(name)?;
            cliclack::log::info(format!("Project name: {}", name))?;
            Ok(name)
        }
        None if yes => Err(Error::MissingName),
        None => {
            let name: String = cliclack::input("Project name")
                .placeholder("my-app")
                .validate(check_with(validate::project_name))
                .interact()?;
            Ok(name.trim().to_string())
        }
    }
}

fn confirm_or_default(prompt: &str, default: bool, yes: bool) -> Result<bool> {
    if yes {
        return Ok(default);
    }
    Ok(cliclack::confirm(prompt).initial_value(default).interact()?)
}

/// Questions for a new Vite project; `yes` accepts every default
pub fn project_flow(preset_name: Option<&str>, yes: bool) -> Result<GenerationRequest> {
    if preset_name.is_some() || yes {
        cliclack::intro("New React project")?;
    }

    let name = project_name(preset_name, yes)?;
    let typescript = confirm_or_default("Use TypeScript?", true, yes)?;
    let install_ui_kit = confirm_or_default("Install shadcn/ui + Tailwind CSS?", true, yes)?;

    let ui_kit_components = match (install_ui_kit, yes) {
        (false, _) => Vec::new(),
        (true, true) => packages::defaults(packages::UI_KIT_COMPONENTS),
        (true, false) => multiselect_catalog("shadcn/ui components", packages::UI_KIT_COMPONENTS)?,
    };

    let extra_packages = if yes {
        packages::defaults(packages::EXTRA_PACKAGES)
    } else {
        multiselect_catalog("Additional packages", packages::EXTRA_PACKAGES)?
    };

    let init_git = confirm_or_default("Initialize a git repository?", true, yes)?;
    let open_editor = confirm_or_default("Open in the editor when done?", false, yes)?;

    cliclack::outro(format!("Creating {}", name))?;

    Ok(GenerationRequest::Project(ProjectRequest {
        name,
        script: Script::from_typescript(typescript),
        install_ui_kit,
        ui_kit_components,
        extra_packages,
        init_git,
        open_editor,
    }))
}

/// Questions for cloning the Next.js boilerplate
pub fn boilerplate_flow(preset_name: Option<&str>, yes: bool) -> Result<GenerationRequest> {
    if preset_name.is_some() || yes {
        cliclack::intro("Next.js boilerplate")?;
    }

    let name = project_name(preset_name, yes)?;
    let install_dependencies = confirm_or_default("Install dependencies?", true, yes)?;
    let fresh_history = confirm_or_default("Start a fresh git history?", true, yes)?;
    let open_editor = confirm_or_default("Open in the editor when done?", false, yes)?;

    cliclack::outro(format!("Cloning into {}", name))?;

    Ok(GenerationRequest::Boilerplate(BoilerplateRequest {
        name,
        install_dependencies,
        fresh_history,
        open_editor,
    }))
}

/// Report the detected toolchain; fails when a required runtime is missing
pub fn preflight(git_required: bool) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking Node.js, npm and git...");

    let runtimes = vec![check::check_node(), check::check_npm(), check::check_git()];
    let summary: Vec<String> = runtimes.iter().map(|r| r.summary()).collect();
    spinner.stop(summary.join(", "));

    if let Err(e) = check::evaluate(&runtimes, git_required) {
        cliclack::log::error(e.to_string())?;
        return Err(e);
    }

    if runtimes.iter().any(|r| r.name == "git" && !r.available) {
        cliclack::log::warning("git not found: repository steps will be skipped")?;
    }

    Ok(())
}
