//! Catalogs offered by the project prompts

/// An entry in a multi-select catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    /// Pre-checked in the prompt and selected with `--yes`
    pub default: bool,
}

const fn entry(value: &'static str, label: &'static str, hint: &'static str, default: bool) -> CatalogEntry {
    CatalogEntry {
        value,
        label,
        hint,
        default,
    }
}

pub const UI_KIT_COMPONENTS: &[CatalogEntry] = &[
    entry("button", "Button", "Buttons with variants", true),
    entry("card", "Card", "Content containers", true),
    entry("input", "Input", "Text fields", true),
    entry("label", "Label", "Form labels", false),
    entry("dialog", "Dialog", "Modal dialogs", false),
    entry("dropdown-menu", "Dropdown Menu", "Contextual menus", false),
    entry("form", "Form", "Form building blocks", false),
    entry("select", "Select", "Option pickers", false),
    entry("table", "Table", "Data tables", false),
    entry("toast", "Toast", "Notifications", false),
    entry("tabs", "Tabs", "Tabbed navigation", false),
    entry("badge", "Badge", "Status badges", false),
    entry("avatar", "Avatar", "User avatars", false),
];

pub const ZUSTAND: &str = "zustand";
pub const REACT_QUERY: &str = "@tanstack/react-query";
pub const AXIOS: &str = "axios";
pub const ZOD: &str = "zod";

pub const EXTRA_PACKAGES: &[CatalogEntry] = &[
    entry(ZUSTAND, "Zustand", "State management", true),
    entry(REACT_QUERY, "React Query", "Server state and caching", true),
    entry(AXIOS, "Axios", "HTTP client", true),
    entry(ZOD, "Zod", "Schema validation", true),
    entry("react-router-dom", "React Router", "Routing", true),
    entry("react-hook-form", "React Hook Form", "Form state", false),
    entry("@hookform/resolvers", "Hook Form Resolvers", "Schema resolvers for React Hook Form", false),
    entry("date-fns", "date-fns", "Date utilities", false),
    entry("framer-motion", "Framer Motion", "Animations", false),
];

/// Dev dependencies installed with the UI kit
pub const UI_KIT_DEV_DEPENDENCIES: &[&str] = &["tailwindcss@^3", "postcss", "autoprefixer", "tailwindcss-animate"];

/// Runtime dependencies installed with the UI kit
pub const UI_KIT_DEPENDENCIES: &[&str] = &["class-variance-authority", "clsx", "tailwind-merge", "lucide-react"];

/// Values of the pre-checked entries
pub fn defaults(catalog: &[CatalogEntry]) -> Vec<String> {
    catalog
        .iter()
        .filter(|e| e.default)
        .map(|e| e.value.to_string())
        .collect()
}
