use std::collections::{HashMap, HashSet};

/// Renders lesson Markdown to HTML that is safe to inject into the page.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "h1", "h2", "h3", "h4", "p", "br", "em", "strong", "del", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "hr",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", std::iter::once("href").collect());
    attributes.insert("th", std::iter::once("style").collect());
    attributes.insert("td", std::iter::once("style").collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_lists_and_emphasis() {
        let html = markdown_to_html("## Form\n\n- I **work**\n- she *works*\n");
        assert!(html.contains("<h2>Form</h2>"), "{html}");
        assert!(html.contains("<li>I <strong>work</strong></li>"), "{html}");
        assert!(html.contains("<em>works</em>"), "{html}");
    }

    #[test]
    fn strips_scripts_and_event_handlers() {
        let html = markdown_to_html("Hi <script>alert(1)</script><a href=\"x\" onclick=\"y()\">x</a>");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("onclick"), "{html}");
        assert!(html.contains("href=\"x\""), "{html}");
    }

    #[test]
    fn tables_survive_sanitizing() {
        let html = markdown_to_html("| Verb | Past |\n|---|---|\n| go | went |\n");
        assert!(html.contains("<table>"), "{html}");
        assert!(html.contains("<td>went</td>"), "{html}");
    }
}
