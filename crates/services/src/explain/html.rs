use std::collections::HashSet;

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Render model markdown as sanitized HTML, demoting headings by two levels.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(input, options).map(|event| match event {
        Event::Start(Tag::Heading {
            level,
            id,
            classes,
            attrs,
        }) => Event::Start(Tag::Heading {
            level: demote(level),
            id,
            classes,
            attrs,
        }),
        Event::End(TagEnd::Heading(level)) => Event::End(TagEnd::Heading(demote(level))),
        other => other,
    });

    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Strip everything outside the explanation allow-list.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul", "ol", "li",
        "h3", "h4", "h5", "h6", "table", "thead", "tbody", "tr", "th", "td", "del",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}

fn demote(level: HeadingLevel) -> HeadingLevel {
    match level {
        HeadingLevel::H1 => HeadingLevel::H3,
        HeadingLevel::H2 => HeadingLevel::H4,
        HeadingLevel::H3 => HeadingLevel::H5,
        _ => HeadingLevel::H6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_are_demoted() {
        let html = markdown_to_html("# One\n\n## Two\n\n### Three\n\n#### Four");
        assert!(html.contains("<h3>One</h3>"));
        assert!(html.contains("<h4>Two</h4>"));
        assert!(html.contains("<h5>Three</h5>"));
        assert!(html.contains("<h6>Four</h6>"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn lists_and_paragraphs() {
        let html = markdown_to_html("Intro line.\n\n- first\n- second\n\n1. one\n2. two\n\nOutro.");
        assert!(html.contains("<p>Intro line.</p>"));
        assert!(html.contains("<ul>\n<li>first</li>\n<li>second</li>\n</ul>"));
        assert!(html.contains("<ol>\n<li>one</li>\n<li>two</li>\n</ol>"));
        assert!(html.contains("<p>Outro.</p>"));
    }

    #[test]
    fn unsafe_markup_is_removed() {
        let html = markdown_to_html("Hi <script>alert(1)</script> [x](javascript:alert(1))");
        assert!(!html.contains("<script"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("Hi"));
    }
}
