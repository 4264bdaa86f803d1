// src/ports/json.rs
use crate::domain::{Element, Node};
use anyhow::{Context, Result};

#[derive(Debug, Default)]
pub struct JsonPresenter;

impl JsonPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Pretty JSON; the root is tagged with its kind like every nested node
    pub fn render(&self, tree: &Element) -> Result<String> {
        serde_json::to_string_pretty(&Node::Element(tree.clone()))
            .context("Failed to serialize view tree to JSON")
    }
}
