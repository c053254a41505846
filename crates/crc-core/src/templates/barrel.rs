//! `index.js` / `index.ts` re-exporting a unit's public symbols

use super::context::context_exports;
use super::store::store_hook;

/// Which groups of symbols the barrel re-exports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarrelExports {
    pub component: bool,
    pub store: bool,
    pub context: bool,
}

pub fn barrel(name: &str, exports: BarrelExports) -> String {
    let mut out = String::new();

    if exports.component {
        out.push_str(&format!("export {{ {} }} from \"./{}\";\n", name, name));
    }

    if exports.store {
        out.push_str(&format!("export {{ {} }} from \"./store\";\n", store_hook(name)));
    }

    if exports.context {
        out.push_str(&format!(
            "export {{ {} }} from \"./context\";\n",
            context_exports(name).join(", ")
        ));
    }

    out
}

/// Symbols exported by a barrel, in file order
pub fn exported_symbols(source: &str) -> Vec<String> {
    source
        .lines()
        .filter_map(|line| {
            let start = line.find('{')?;
            let end = line.find('}')?;
            Some(line[start + 1..end].to_string())
        })
        .flat_map(|group| {
            group
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}
