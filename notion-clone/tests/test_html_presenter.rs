use notion_clone::application::{HomePage, View};
use notion_clone::domain::INTERACTIVE_TAGS;
use notion_clone::ports::{HtmlPresenter, Stylesheet};

fn body_of(html: &str) -> &str {
    let start = html.find("<body>").expect("document has a body");
    let end = html.find("</body>").expect("body is closed");
    &html[start..end]
}

#[test]
fn given_home_page_when_rendering_then_produces_complete_document() {
    // Arrange
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render(&HomePage::new().render());

    // Assert
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains(r#"<meta charset="UTF-8">"#));
    assert!(html.contains("<title>Notion Clone</title>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn given_home_page_when_rendering_then_body_holds_heading_and_subtitle() {
    // Arrange
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render(&HomePage::new().render());

    // Assert
    let body = body_of(&html);
    assert!(body.contains(r#"<h1 class="text-4xl font-bold">Welcome to Notion Clone</h1>"#));
    assert!(body.contains(
        r#"<p class="mt-4 text-xl text-gray-600">Your advanced note-taking application</p>"#
    ));
    assert_eq!(body.matches("<h1").count(), 1);
}

#[test]
fn given_home_page_when_rendering_then_body_has_no_interactive_markup() {
    // Arrange
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render(&HomePage::new().render());

    // Assert
    let body = body_of(&html);
    for tag in INTERACTIVE_TAGS {
        assert!(
            !body.contains(&format!("<{} ", tag)) && !body.contains(&format!("<{}>", tag)),
            "unexpected <{}> in body",
            tag
        );
    }
    assert!(!html.contains("<script"));
}

#[test]
fn given_home_page_when_rendering_inline_then_styles_every_class_used() {
    // Arrange
    let presenter = HtmlPresenter::new();
    let tree = HomePage::new().render();

    // Act
    let html = presenter.render(&tree);

    // Assert
    for class in tree.class_names() {
        assert!(html.contains(&format!(".{} {{", class)), "missing style for {}", class);
    }
}

#[test]
fn given_home_page_when_rendering_twice_then_output_is_byte_identical() {
    // Arrange
    let presenter = HtmlPresenter::with_options("Notion Clone", Stylesheet::Cdn);

    // Act
    let first = presenter.render(&HomePage::new().render());
    let second = presenter.render(&HomePage::new().render());

    // Assert
    assert_eq!(first, second);
}
