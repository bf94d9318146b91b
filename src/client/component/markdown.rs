use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders Markdown source to an HTML fragment.
///
/// Raw HTML in the source is emitted as escaped text, never as markup.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all()).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(source: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let html_output = render_markdown(&source);

    rsx!(
        div {
            class: "prose prose-sm max-w-none {class}",
            dangerous_inner_html: "{html_output}"
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests rendering emphasis and lists.
    ///
    /// Expected: Ok with matching HTML tags
    #[test]
    fn renders_basic_markdown() {
        let html = render_markdown("**Bold** text\n\n- one\n- two");

        assert!(html.contains("<strong>Bold</strong>"));
        assert!(html.contains("<li>one</li>"));
    }

    /// Tests plain text without markup.
    ///
    /// Expected: Ok with a single paragraph
    #[test]
    fn wraps_plain_text_in_paragraph() {
        assert_eq!(render_markdown("Just text"), "<p>Just text</p>\n");
    }

    /// Tests raw HTML blocks and inline tags in the source.
    ///
    /// Expected: Ok with the tags escaped as text
    #[test]
    fn escapes_raw_html() {
        let block = render_markdown("<img src=x onerror=alert(1)>");
        let inline = render_markdown("Nice <script>alert(1)</script> site");

        assert!(!block.contains("<img"));
        assert!(block.contains("&lt;img"));
        assert!(!inline.contains("<script>"));
        assert!(inline.contains("&lt;script&gt;"));
    }
}
