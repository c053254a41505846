//! Stylesheets: plain CSS or a CSS-in-JS `Container`

use super::lower;
use crate::request::{Script, StyleMode};

const CONTAINER_RULES: &str = "  display: flex;
  flex-direction: column;
  align-items: center;
  padding: 1rem;

  h1 {
    color: #333;
    margin: 0;
  }
";

fn styled_container(module: &str) -> String {
    format!(
        "import styled from \"{}\";\n\nexport const Container = styled.div`\n{}`;\n",
        module, CONTAINER_RULES
    )
}

fn css(name: &str) -> String {
    let class = lower(name);
    format!(
        ".{class} {{\n  display: flex;\n  flex-direction: column;\n  align-items: center;\n  padding: 1rem;\n}}\n\n.{class} h1 {{\n  color: #333;\n  margin: 0;\n}}\n",
        class = class
    )
}

/// Stylesheet contents for the given style mode
pub fn stylesheet(name: &str, style: StyleMode) -> String {
    match style {
        StyleMode::Css => css(name),
        StyleMode::Styled => styled_container("styled-components"),
        StyleMode::Emotion => styled_container("@emotion/styled"),
    }
}

/// File name of the style artifact inside the unit directory
pub fn style_file_name(name: &str, style: StyleMode, script: Script) -> String {
    match style {
        StyleMode::Css => format!("{}.css", name),
        StyleMode::Styled => format!("styled.{}", script.module_ext()),
        StyleMode::Emotion => format!("styles.{}", script.module_ext()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_selector_is_lowercase_name() {
        let out = stylesheet("NavBar", StyleMode::Css);
        assert!(out.starts_with(".navbar {\n"));
        assert!(out.contains(".navbar h1 {"));
    }

    #[test]
    fn test_styled_and_emotion_use_their_library() {
        let styled = stylesheet("Header", StyleMode::Styled);
        assert!(styled.starts_with("import styled from \"styled-components\";"));
        assert!(styled.contains("export const Container = styled.div`"));

        let emotion = stylesheet("Header", StyleMode::Emotion);
        assert!(emotion.starts_with("import styled from \"@emotion/styled\";"));
        assert!(emotion.ends_with("`;\n"));
    }

    #[test]
    fn test_style_file_names() {
        assert_eq!(style_file_name("Foo", StyleMode::Css, Script::TypeScript), "Foo.css");
        assert_eq!(style_file_name("Foo", StyleMode::Styled, Script::TypeScript), "styled.ts");
        assert_eq!(style_file_name("Foo", StyleMode::Emotion, Script::JavaScript), "styles.js");
    }
}
