// src/application/page_viewer.rs
use crate::domain::Element;
use tracing::debug;

/// A renderable page. Implementations take no input and must return the same
/// tree on every call.
pub trait View {
    fn name(&self) -> &str;

    fn render(&self) -> Element;
}

pub struct PageViewer<V: View> {
    view: V,
}

impl<V: View> PageViewer<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view_page(&self) -> Element {
        let tree = self.view.render();
        debug!(view = self.view.name(), ?tree, "Rendered view");
        tree
    }
}
