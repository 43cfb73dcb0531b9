//! Seam between resolved asset URLs and the host framework's tag helpers.

/// Markup-generation collaborators invoked with resolved asset URLs.
///
/// Host frameworks implement this to route emission through their own HTML
/// helpers; [`HtmlMarkup`] is a plain implementation for standalone use.
/// Attribute pairs are passed through untouched apart from escaping.
pub trait MarkupRenderer {
    /// Render an `<img>` tag for the resolved URL.
    fn image(&self, url: &str, attributes: &[(&str, &str)]) -> String;

    /// Render a `<script>` tag for the resolved URL.
    fn script(&self, url: &str, attributes: &[(&str, &str)]) -> String;

    /// Render a `<link>` tag for the resolved URL. `rel` falls back to
    /// `stylesheet` when not given.
    fn stylesheet(&self, url: &str, rel: Option<&str>, attributes: &[(&str, &str)]) -> String;
}

/// Minimal renderer emitting plain HTML5 tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlMarkup;

impl MarkupRenderer for HtmlMarkup {
    fn image(&self, url: &str, attributes: &[(&str, &str)]) -> String {
        format!(
            "<img src=\"{}\"{}/>",
            escape_attribute(url),
            render_attributes(attributes)
        )
    }

    fn script(&self, url: &str, attributes: &[(&str, &str)]) -> String {
        format!(
            "<script src=\"{}\"{}></script>",
            escape_attribute(url),
            render_attributes(attributes)
        )
    }

    fn stylesheet(&self, url: &str, rel: Option<&str>, attributes: &[(&str, &str)]) -> String {
        format!(
            "<link rel=\"{}\" href=\"{}\"{}/>",
            escape_attribute(rel.unwrap_or("stylesheet")),
            escape_attribute(url),
            render_attributes(attributes)
        )
    }
}

fn render_attributes(attributes: &[(&str, &str)]) -> String {
    let mut rendered = String::new();
    for (name, value) in attributes {
        rendered.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    rendered
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_image_tags() {
        let tag = HtmlMarkup.image("http://assets0.example.com/img/logo.png", &[("alt", "Logo")]);
        assert_eq!(
            tag,
            "<img src=\"http://assets0.example.com/img/logo.png\" alt=\"Logo\"/>"
        );
    }

    #[test]
    fn renders_script_tags() {
        let tag = HtmlMarkup.script("http://assets1.example.com/js/app.js", &[]);
        assert_eq!(
            tag,
            "<script src=\"http://assets1.example.com/js/app.js\"></script>"
        );
    }

    #[test]
    fn renders_stylesheet_tags_with_default_rel() {
        let tag = HtmlMarkup.stylesheet("http://assets2.example.com/css/app.css", None, &[]);
        assert_eq!(
            tag,
            "<link rel=\"stylesheet\" href=\"http://assets2.example.com/css/app.css\"/>"
        );
    }

    #[test]
    fn renders_stylesheet_tags_with_explicit_rel() {
        let tag = HtmlMarkup.stylesheet(
            "http://assets2.example.com/css/print.css",
            Some("alternate stylesheet"),
            &[("media", "print")],
        );
        assert_eq!(
            tag,
            "<link rel=\"alternate stylesheet\" href=\"http://assets2.example.com/css/print.css\" media=\"print\"/>"
        );
    }

    #[test]
    fn escapes_attribute_values() {
        let tag = HtmlMarkup.image("a.png?x=\"1\"&y=<2>", &[]);
        assert_eq!(tag, "<img src=\"a.png?x=&quot;1&quot;&amp;y=&lt;2&gt;\"/>");
    }
}
