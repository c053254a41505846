//! React function component

use super::lower;
use crate::request::StyleMode;

/// Import lines for the component, depending on where its styles live
fn imports(name: &str, style: StyleMode) -> String {
    let style_import = match style {
        StyleMode::Css => format!("import \"./{}.css\";", name),
        StyleMode::Styled => "import { Container } from \"./styled\";".to_string(),
        StyleMode::Emotion => "import { Container } from \"./styles\";".to_string(),
    };
    format!("import React from \"react\";\n{}\n", style_import)
}

fn body(name: &str, style: StyleMode) -> String {
    let (open, close) = if style.is_css_in_js() {
        ("<Container>".to_string(), "</Container>")
    } else {
        (format!("<div className=\"{}\">", lower(name)), "</div>")
    };

    format!(
        "export const {name} = () => {{\n  return (\n    {open}\n      <h1>{name} component</h1>\n    {close}\n  );\n}};",
        name = name,
        open = open,
        close = close,
    )
}

/// Component source for `Name.jsx` / `Name.tsx`
pub fn component(name: &str, style: StyleMode) -> String {
    format!("{}\n{}\n", imports(name, style), body(name, style))
}
