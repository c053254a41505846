//! React Context API module: reducer, provider, hook and action creators

use super::{lower, render};
use crate::request::Script;

const CONTEXT_TS: &str = include_str!("../../assets/unit/context.ts.tmpl");
const CONTEXT_JS: &str = include_str!("../../assets/unit/context.js.tmpl");

/// Action kinds handled by the generated reducer
pub const ACTION_KINDS: [&str; 5] = ["INCREMENT", "DECREMENT", "UPDATE_TEXT", "SET_LOADING", "RESET"];

pub fn context(name: &str, script: Script) -> String {
    let template = match script {
        Script::TypeScript => CONTEXT_TS,
        Script::JavaScript => CONTEXT_JS,
    };
    let lowered = lower(name);
    render(template, &[("__NAME__", name), ("__LOWER__", &lowered)])
}

/// Symbols the barrel re-exports from the context module
pub fn context_exports(name: &str) -> [String; 3] {
    [
        format!("{}Provider", name),
        format!("use{}Context", name),
        format!("{}Actions", lower(name)),
    ]
}
