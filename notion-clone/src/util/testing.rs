// src/util/testing.rs

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::View;
use crate::domain::Element;

/// View returning a fixed tree, for testing code that is generic over `View`
///
/// # Examples
///
/// ```
/// use notion_clone::application::{PageViewer, View};
/// use notion_clone::domain::Element;
/// use notion_clone::util::testing::StubView;
///
/// let stub = StubView::new("stub", Element::new("div").with_text("Hello"));
/// let viewer = PageViewer::new(stub);
/// assert_eq!(viewer.view_page().text_content(), "Hello");
/// ```
#[derive(Debug, Clone)]
pub struct StubView {
    name: String,
    tree: Element,
}

impl StubView {
    pub fn new(name: &str, tree: Element) -> Self {
        Self {
            name: name.to_string(),
            tree,
        }
    }
}

impl View for StubView {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self) -> Element {
        self.tree.clone()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_stub_view_when_rendering_then_returns_configured_tree() {
        let tree = Element::new("p").with_text("fixed");
        let stub = StubView::new("fixed", tree.clone());

        assert_eq!(stub.name(), "fixed");
        assert_eq!(stub.render(), tree);
    }
}
