// src/ports/html.rs
use crate::constants::{DEFAULT_PAGE_TITLE, TAILWIND_CDN_URL};
use crate::domain::{Element, Node};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the utility classes of the tree get their styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stylesheet {
    /// Embedded `<style>` block covering exactly the classes the tree uses
    #[default]
    Inline,
    /// Load Tailwind from its CDN at view time
    Cdn,
}

#[derive(Debug)]
pub struct HtmlPresenter {
    title: String,
    stylesheet: Stylesheet,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_PAGE_TITLE.to_string(),
            stylesheet: Stylesheet::default(),
        }
    }

    pub fn with_options(title: impl Into<String>, stylesheet: Stylesheet) -> Self {
        Self {
            title: title.into(),
            stylesheet,
        }
    }

    /// Serialize the tree alone, without the document wrapper
    pub fn render_fragment(&self, tree: &Element) -> String {
        let mut out = String::new();
        write_element(tree, &mut out);
        out
    }

    #[instrument(level = "debug", skip(self, tree))]
    fn stylesheet_block(&self, tree: &Element) -> String {
        match self.stylesheet {
            Stylesheet::Cdn => format!(r#"<script src="{}"></script>"#, TAILWIND_CDN_URL),
            Stylesheet::Inline => {
                let mut rules = String::new();
                for class in tree.class_names() {
                    match utility_css(class) {
                        Some(declarations) => {
                            rules.push_str(&format!("        .{} {{ {} }}\n", class, declarations))
                        }
                        None => debug!(class, "No inline style for utility class"),
                    }
                }
                format!(
                    r#"<style>
        *, ::before, ::after {{ box-sizing: border-box; }}
        body {{
            margin: 0;
            font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
            line-height: 1.5;
        }}
        h1, p {{ margin: 0; }}
        h1 {{ font-size: inherit; font-weight: inherit; }}
{rules}    </style>"#
                )
            }
        }
    }

    pub fn render(&self, tree: &Element) -> String {
        let body = self.render_fragment(tree);
        let styles = self.stylesheet_block(tree);

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    {styles}
</head>
<body>
    {body}
</body>
</html>
"#,
            title = encode_text(&self.title),
            styles = styles,
            body = body,
        )
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&encode_double_quoted_attribute(&element.classes.join(" ")));
        out.push('"');
    }
    out.push('>');
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(child, out),
            Node::Text { text } => out.push_str(&encode_text(text)),
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

/// CSS equivalent of the Tailwind utilities the pages use
fn utility_css(class: &str) -> Option<&'static str> {
    let css = match class {
        "flex" => "display: flex;",
        "flex-col" => "flex-direction: column;",
        "items-center" => "align-items: center;",
        "justify-center" => "justify-content: center;",
        "min-h-screen" => "min-height: 100vh;",
        "p-24" => "padding: 6rem;",
        "mt-4" => "margin-top: 1rem;",
        "text-4xl" => "font-size: 2.25rem; line-height: 2.5rem;",
        "text-xl" => "font-size: 1.25rem; line-height: 1.75rem;",
        "font-bold" => "font-weight: 700;",
        "text-gray-600" => "color: rgb(75 85 99);",
        _ => return None,
    };
    Some(css)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Tom & Jerry", "<p>Tom &amp; Jerry</p>")]
    #[case("<script>", "<p>&lt;script&gt;</p>")]
    #[case("plain", "<p>plain</p>")]
    fn given_text_when_rendering_fragment_then_escapes_markup(
        #[case] text: &str,
        #[case] expected: &str,
    ) {
        let presenter = HtmlPresenter::new();
        let tree = Element::new("p").with_text(text);

        assert_eq!(presenter.render_fragment(&tree), expected);
    }

    #[test]
    fn given_classes_when_rendering_fragment_then_joins_them_in_class_attribute() {
        let presenter = HtmlPresenter::new();
        let tree = Element::new("h1").with_classes("text-4xl font-bold").with_text("Hi");

        assert_eq!(
            presenter.render_fragment(&tree),
            r#"<h1 class="text-4xl font-bold">Hi</h1>"#
        );
    }

    #[test]
    fn given_inline_mode_when_rendering_then_styles_only_used_classes() {
        let presenter = HtmlPresenter::new();
        let tree = Element::new("p").with_classes("text-xl unknown-class");

        let html = presenter.render(&tree);

        assert!(html.contains(".text-xl { font-size: 1.25rem; line-height: 1.75rem; }"));
        assert!(!html.contains(".text-4xl"));
        assert!(!html.contains(".unknown-class"));
        assert!(!html.contains(TAILWIND_CDN_URL));
    }

    #[test]
    fn given_cdn_mode_when_rendering_then_loads_tailwind_script() {
        let presenter = HtmlPresenter::with_options("Notes", Stylesheet::Cdn);
        let tree = Element::new("p").with_classes("text-xl");

        let html = presenter.render(&tree);

        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(!html.contains("<style>"));
        assert!(html.contains("<title>Notes</title>"));
    }

    #[test]
    fn given_title_with_markup_when_rendering_then_title_is_escaped() {
        let presenter = HtmlPresenter::with_options("A <b> & C", Stylesheet::Inline);

        let html = presenter.render(&Element::new("main"));

        assert!(html.contains("<title>A &lt;b&gt; &amp; C</title>"));
    }
}
