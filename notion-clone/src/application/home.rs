// src/application/home.rs
use crate::application::View;
use crate::constants::{HEADING_TEXT, SUBTITLE_TEXT};
use crate::domain::Element;

/// The landing page: a centered heading with a subtitle underneath.
#[derive(Debug, Default, Clone, Copy)]
pub struct HomePage;

impl HomePage {
    pub fn new() -> Self {
        Self
    }
}

impl View for HomePage {
    fn name(&self) -> &str {
        "home"
    }

    fn render(&self) -> Element {
        Element::new("main")
            .with_classes("flex min-h-screen flex-col items-center justify-center p-24")
            .with_child(
                Element::new("h1")
                    .with_classes("text-4xl font-bold")
                    .with_text(HEADING_TEXT),
            )
            .with_child(
                Element::new("p")
                    .with_classes("mt-4 text-xl text-gray-600")
                    .with_text(SUBTITLE_TEXT),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Node;

    #[test]
    fn given_home_page_when_rendering_then_root_is_centered_container() {
        let tree = HomePage::new().render();

        assert_eq!(tree.tag, "main");
        assert!(tree.classes.iter().any(|c| c == "items-center"));
        assert!(tree.classes.iter().any(|c| c == "justify-center"));
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn given_home_page_when_rendering_then_heading_precedes_subtitle() {
        let tree = HomePage::new().render();

        let tags: Vec<&str> = tree
            .children
            .iter()
            .filter_map(|n| match n {
                Node::Element(e) => Some(e.tag.as_str()),
                Node::Text { .. } => None,
            })
            .collect();
        assert_eq!(tags, vec!["h1", "p"]);
    }

    #[test]
    fn given_home_page_when_rendering_twice_then_trees_are_equal() {
        let page = HomePage::new();
        assert_eq!(page.render(), page.render());
    }
}
