//! File templates for generated React units
//!
//! Every function here is pure: the same name and flags always yield the same
//! text. Larger templates live under `assets/` and are filled in with
//! [`render`].

pub mod barrel;
pub mod component;
pub mod context;
pub mod store;
pub mod style;
pub mod test_file;

pub use barrel::{barrel, BarrelExports};
pub use component::component;
pub use context::context;
pub use store::store;
pub use style::{style_file_name, stylesheet};
pub use test_file::component_test;

/// Replace each `(placeholder, value)` pair in `template`
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    vars.iter()
        .fold(template.to_string(), |acc, (key, value)| acc.replace(key, value))
}

/// Lower-cased entity name, used for CSS classes and reducer/action identifiers
pub fn lower(name: &str) -> String {
    name.to_lowercase()
}
