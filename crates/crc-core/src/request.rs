//! Normalized generation requests
//!
//! Every invocation builds exactly one [`GenerationRequest`], either from
//! command-line flags ([`ComponentFlags`]) or from the interactive prompts
//! ([`UnitAnswers`]), and hands it to the scaffolding engine or one of the
//! project pipelines.

use crate::error::{Error, Result};
use crate::validate;
use std::fmt;
use std::path::PathBuf;

/// Source language of the generated files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Script {
    #[default]
    JavaScript,
    TypeScript,
}

impl Script {
    pub fn from_typescript(typescript: bool) -> Self {
        if typescript {
            Script::TypeScript
        } else {
            Script::JavaScript
        }
    }

    pub fn is_typescript(&self) -> bool {
        matches!(self, Script::TypeScript)
    }

    /// Extension for files containing JSX (`tsx` / `jsx`)
    pub fn jsx_ext(&self) -> &'static str {
        match self {
            Script::TypeScript => "tsx",
            Script::JavaScript => "jsx",
        }
    }

    /// Extension for plain modules (`ts` / `js`)
    pub fn module_ext(&self) -> &'static str {
        match self {
            Script::TypeScript => "ts",
            Script::JavaScript => "js",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Script::TypeScript => "TypeScript",
            Script::JavaScript => "JavaScript",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How a component is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleMode {
    #[default]
    Css,
    Styled,
    Emotion,
}

impl StyleMode {
    /// Resolve the two CSS-in-JS toggles; both at once is a conflict
    pub fn from_flags(styled: bool, emotion: bool) -> Result<Self> {
        match (styled, emotion) {
            (true, true) => Err(Error::StyleConflict),
            (true, false) => Ok(StyleMode::Styled),
            (false, true) => Ok(StyleMode::Emotion),
            (false, false) => Ok(StyleMode::Css),
        }
    }

    pub fn is_css_in_js(&self) -> bool {
        !matches!(self, StyleMode::Css)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StyleMode::Css => "CSS",
            StyleMode::Styled => "Styled Components",
            StyleMode::Emotion => "Emotion",
        }
    }
}

/// What the user asked to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Component,
    Store,
    Context,
    Project,
    Boilerplate,
}

impl Kind {
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Component => "component",
            Kind::Store => "store",
            Kind::Context => "context",
            Kind::Project => "project",
            Kind::Boilerplate => "boilerplate",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Kind::Component => "Component",
            Kind::Store => "Store",
            Kind::Context => "Context",
            Kind::Project => "Project",
            Kind::Boilerplate => "Boilerplate",
        }
    }
}

/// Fields shared by every unit-level request (component, store, context)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    pub script: Script,
    /// Folder (relative to the base directory) the `name/` directory is created in
    pub target: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    pub unit: Unit,
    pub style: StyleMode,
    pub with_test: bool,
    pub with_store: bool,
    pub with_context: bool,
}

/// Vite + React project bootstrap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub script: Script,
    pub install_ui_kit: bool,
    pub ui_kit_components: Vec<String>,
    pub extra_packages: Vec<String>,
    pub init_git: bool,
    pub open_editor: bool,
}

impl ProjectRequest {
    pub fn has_package(&self, package: &str) -> bool {
        self.extra_packages.iter().any(|p| p == package)
    }
}

/// Clone of the Next.js boilerplate repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoilerplateRequest {
    pub name: String,
    pub install_dependencies: bool,
    pub fresh_history: bool,
    pub open_editor: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Component(ComponentRequest),
    Store(Unit),
    Context(Unit),
    Project(ProjectRequest),
    Boilerplate(BoilerplateRequest),
}

impl GenerationRequest {
    pub fn kind(&self) -> Kind {
        match self {
            GenerationRequest::Component(_) => Kind::Component,
            GenerationRequest::Store(_) => Kind::Store,
            GenerationRequest::Context(_) => Kind::Context,
            GenerationRequest::Project(_) => Kind::Project,
            GenerationRequest::Boilerplate(_) => Kind::Boilerplate,
        }
    }

    /// The unit-level part of the request, if it is handled by the scaffolding engine
    pub fn unit(&self) -> Option<&Unit> {
        match self {
            GenerationRequest::Component(c) => Some(&c.unit),
            GenerationRequest::Store(u) | GenerationRequest::Context(u) => Some(u),
            GenerationRequest::Project(_) | GenerationRequest::Boilerplate(_) => None,
        }
    }

    pub fn includes_store(&self) -> bool {
        match self {
            GenerationRequest::Component(c) => c.with_store,
            GenerationRequest::Store(_) => true,
            _ => false,
        }
    }

    pub fn includes_context(&self) -> bool {
        match self {
            GenerationRequest::Component(c) => c.with_context,
            GenerationRequest::Context(_) => true,
            _ => false,
        }
    }
}

/// Component options as given on the command line
#[derive(Debug, Clone, Default)]
pub struct ComponentFlags {
    pub name: String,
    pub typescript: bool,
    pub styled: bool,
    pub emotion: bool,
    pub path: String,
    pub test: bool,
    pub zustand: bool,
    pub context: bool,
}

impl ComponentFlags {
    /// Validate and normalize flag-mode input.
    ///
    /// Uses the same name and path rules as the interactive prompts.
    pub fn into_request(self) -> Result<GenerationRequest> {
        let style = StyleMode::from_flags(self.styled, self.emotion)?;
        let name = validate::unit_name(&self.name)?;
        let target = validate::target_path(&self.path)?;

        Ok(GenerationRequest::Component(ComponentRequest {
            unit: Unit {
                name,
                script: Script::from_typescript(self.typescript),
                target: PathBuf::from(target),
            },
            style,
            with_test: self.test,
            with_store: self.zustand,
            with_context: self.context,
        }))
    }
}

/// Raw answers collected by the interactive unit flow
#[derive(Debug, Clone)]
pub struct UnitAnswers {
    pub kind: Kind,
    pub name: String,
    pub path: String,
    pub typescript: bool,
    pub style: StyleMode,
    pub test: bool,
    pub store: bool,
    pub context: bool,
}

impl UnitAnswers {
    /// Collapse answers into a request; store and context kinds ignore the component-only answers
    pub fn normalize(self) -> Result<GenerationRequest> {
        let unit = Unit {
            name: validate::unit_name(&self.name)?,
            script: Script::from_typescript(self.typescript),
            target: PathBuf::from(validate::target_path(&self.path)?),
        };

        match self.kind {
            Kind::Store => Ok(GenerationRequest::Store(unit)),
            Kind::Context => Ok(GenerationRequest::Context(unit)),
            Kind::Component => Ok(GenerationRequest::Component(ComponentRequest {
                unit,
                style: self.style,
                with_test: self.test,
                with_store: self.store,
                with_context: self.context,
            })),
            Kind::Project | Kind::Boilerplate => Err(Error::NotAUnit(self.kind.label())),
        }
    }
}
