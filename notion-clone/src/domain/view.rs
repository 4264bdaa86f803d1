// src/domain/view.rs
use serde::Serialize;

/// Tags a user can interact with. A static view must not contain any of these.
pub const INTERACTIVE_TAGS: &[&str] = &[
    "a", "button", "input", "select", "textarea", "form", "details", "label", "option",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element(Element),
    Text { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: vec![],
            children: vec![],
        }
    }

    /// Add whitespace separated utility classes, e.g. `"text-xl font-bold"`
    pub fn with_classes(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(str::to_string));
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.children.push(Node::Text {
            text: text.to_string(),
        });
        self
    }

    pub fn is_interactive(&self) -> bool {
        INTERACTIVE_TAGS.contains(&self.tag.as_str())
    }

    /// All elements with the given tag, self included, in document order
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    pub fn interactive_elements(&self) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.is_interactive())
            .collect()
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Element(element) => element.collect_text(out),
                Node::Text { text } => out.push_str(text),
            }
        }
    }

    fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in &self.children {
            if let Node::Element(element) = child {
                out.extend(element.descendants());
            }
        }
        out
    }

    /// All distinct classes used in the tree, in first-seen order
    pub fn class_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = vec![];
        for element in self.descendants() {
            for class in &element.classes {
                if !seen.contains(&class.as_str()) {
                    seen.push(class);
                }
            }
        }
        seen
    }
}
