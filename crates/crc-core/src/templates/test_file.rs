//! Testing Library spec for a generated component

use super::lower;
use crate::request::StyleMode;

pub fn component_test(name: &str, style: StyleMode) -> String {
    let second_case = match style {
        StyleMode::Css => format!(
            "  it(\"applies the expected CSS class\", () => {{\n    render(<{name} />);\n    const element = screen.getByText(\"{name} component\").closest(\"div\");\n    expect(element).toHaveClass(\"{class}\");\n  }});",
            name = name,
            class = lower(name),
        ),
        StyleMode::Styled | StyleMode::Emotion => {
            let library = if style == StyleMode::Emotion {
                "emotion"
            } else {
                "styled-components"
            };
            format!(
                "  it(\"renders the styled container ({library})\", () => {{\n    render(<{name} />);\n    const element = screen.getByText(\"{name} component\").closest(\"div\");\n    expect(element).toBeInTheDocument();\n  }});",
                name = name,
                library = library,
            )
        }
    };

    format!(
        "import React from \"react\";
import {{ render, screen }} from \"@testing-library/react\";
import {{ {name} }} from \"./{name}\";

describe(\"{name}\", () => {{
  it(\"renders the component\", () => {{
    render(<{name} />);
    expect(screen.getByText(\"{name} component\")).toBeInTheDocument();
  }});

{second_case}
}});
",
        name = name,
        second_case = second_case,
    )
}
