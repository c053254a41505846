//! Scaffolding engine for components, stores and contexts
//!
//! A request is first turned into a [`Blueprint`], then into the list of
//! files to write ([`plan`]), and finally written under the base directory
//! by [`scaffold`].

pub mod report;

use crate::error::{Error, Result};
use crate::request::{GenerationRequest, Kind, StyleMode, Unit};
use crate::templates::{self, BarrelExports};
use std::fs;
use std::path::{Path, PathBuf};

/// Role of a generated file inside the unit directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Component,
    Stylesheet(StyleMode),
    Test,
    Store,
    Context,
    Barrel,
}

impl FileRole {
    pub fn label(&self) -> &'static str {
        match self {
            FileRole::Component => "React Component",
            FileRole::Stylesheet(StyleMode::Css) => "CSS Stylesheet",
            FileRole::Stylesheet(StyleMode::Styled) => "Styled Components",
            FileRole::Stylesheet(StyleMode::Emotion) => "Emotion Styles",
            FileRole::Test => "Test File",
            FileRole::Store => "Zustand Store",
            FileRole::Context => "Context API",
            FileRole::Barrel => "Index File",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileRole::Component => "⚛️ ",
            FileRole::Stylesheet(StyleMode::Css) => "🎨",
            FileRole::Stylesheet(StyleMode::Styled) => "📦",
            FileRole::Stylesheet(StyleMode::Emotion) => "😊",
            FileRole::Test => "🧪",
            FileRole::Store => "🏪",
            FileRole::Context => "🎯",
            FileRole::Barrel => "📋",
        }
    }

    /// Position in the final summary listing
    fn summary_rank(&self) -> u8 {
        match self {
            FileRole::Component => 0,
            FileRole::Stylesheet(_) => 1,
            FileRole::Barrel => 2,
            FileRole::Test => 3,
            FileRole::Store => 4,
            FileRole::Context => 5,
        }
    }
}

/// Component-only options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentParts {
    pub style: StyleMode,
    pub with_test: bool,
}

/// Everything the engine needs to know about a unit-level request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    pub kind: Kind,
    pub unit: Unit,
    pub component: Option<ComponentParts>,
    pub store: bool,
    pub context: bool,
}

impl Blueprint {
    /// `None` for project-level requests, which the engine does not handle
    pub fn from_request(request: &GenerationRequest) -> Option<Self> {
        let component = match request {
            GenerationRequest::Component(c) => Some(ComponentParts {
                style: c.style,
                with_test: c.with_test,
            }),
            _ => None,
        };

        Some(Self {
            kind: request.kind(),
            unit: request.unit()?.clone(),
            component,
            store: request.includes_store(),
            context: request.includes_context(),
        })
    }

    pub fn barrel_exports(&self) -> BarrelExports {
        BarrelExports {
            component: self.component.is_some(),
            store: self.store,
            context: self.context,
        }
    }
}

/// A file about to be written, relative to the unit directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub role: FileRole,
    pub file_name: String,
    pub contents: String,
}

/// Files for a blueprint, in write order: style, component, test, store, context, index
pub fn plan(blueprint: &Blueprint) -> Vec<PlannedFile> {
    let name = blueprint.unit.name.as_str();
    let script = blueprint.unit.script;
    let mut files = Vec::new();

    if let Some(parts) = blueprint.component {
        files.push(PlannedFile {
            role: FileRole::Stylesheet(parts.style),
            file_name: templates::style_file_name(name, parts.style, script),
            contents: templates::stylesheet(name, parts.style),
        });
        files.push(PlannedFile {
            role: FileRole::Component,
            file_name: format!("{}.{}", name, script.jsx_ext()),
            contents: templates::component(name, parts.style),
        });
        if parts.with_test {
            files.push(PlannedFile {
                role: FileRole::Test,
                file_name: format!("{}.test.{}", name, script.jsx_ext()),
                contents: templates::component_test(name, parts.style),
            });
        }
    }

    if blueprint.store {
        files.push(PlannedFile {
            role: FileRole::Store,
            file_name: format!("store.{}", script.module_ext()),
            contents: templates::store(name, script),
        });
    }

    if blueprint.context {
        files.push(PlannedFile {
            role: FileRole::Context,
            file_name: format!("context.{}", script.module_ext()),
            contents: templates::context(name, script),
        });
    }

    files.push(PlannedFile {
        role: FileRole::Barrel,
        file_name: format!("index.{}", script.module_ext()),
        contents: templates::barrel(name, blueprint.barrel_exports()),
    });

    files
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedFile {
    pub role: FileRole,
    pub path: PathBuf,
}

/// What the engine wrote
#[derive(Debug, Clone)]
pub struct ScaffoldOutcome {
    pub kind: Kind,
    pub name: String,
    /// Absolute unit directory
    pub dir: PathBuf,
    /// Unit directory relative to the base directory
    pub relative: PathBuf,
    pub files: Vec<CreatedFile>,
}

impl ScaffoldOutcome {
    /// Created files in summary order (component, style, index, add-ons)
    pub fn summary_files(&self) -> Vec<&CreatedFile> {
        let mut files: Vec<&CreatedFile> = self.files.iter().collect();
        files.sort_by_key(|f| f.role.summary_rank());
        files
    }

    /// Import specifier for the unit directory, relative to the base directory
    pub fn import_path(&self) -> String {
        format!("./{}", self.relative.display()).replace('\\', "/")
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| Error::io(path, e))
}

/// Write the unit described by `blueprint` under `base`.
///
/// Missing directories are created; existing files at the computed paths are
/// overwritten.
pub fn scaffold(blueprint: &Blueprint, base: &Path) -> Result<ScaffoldOutcome> {
    let parent = base.join(&blueprint.unit.target);
    if !parent.exists() {
        create_dir(&parent)?;
        report::directory_created(&parent);
    }

    let dir = parent.join(&blueprint.unit.name);
    create_dir(&dir)?;

    let relative = dir
        .strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| dir.clone());

    report::banner(blueprint.kind, &blueprint.unit.name, &relative);

    let mut files = Vec::new();
    for planned in plan(blueprint) {
        let path = dir.join(&planned.file_name);
        log::debug!("writing {}", path.display());
        fs::write(&path, &planned.contents).map_err(|e| Error::io(&path, e))?;
        report::file_written(planned.role, &path);
        files.push(CreatedFile {
            role: planned.role,
            path,
        });
    }

    let outcome = ScaffoldOutcome {
        kind: blueprint.kind,
        name: blueprint.unit.name.clone(),
        dir,
        relative,
        files,
    };

    report::summary(&outcome, blueprint.unit.script);

    Ok(outcome)
}
