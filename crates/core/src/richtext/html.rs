use super::node::{format, Node};

/// Format bits paired with their tags, innermost first.
const FORMAT_TAGS: [(u64, &str); 7] = [
    (format::BOLD, "strong"),
    (format::ITALIC, "em"),
    (format::STRIKETHROUGH, "s"),
    (format::UNDERLINE, "u"),
    (format::CODE, "code"),
    (format::SUBSCRIPT, "sub"),
    (format::SUPERSCRIPT, "sup"),
];

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Render a node list to HTML.
pub(crate) fn render(nodes: &[Node]) -> String {
    nodes.iter().map(render_node).collect()
}

fn render_node(node: &Node) -> String {
    match node {
        Node::Text { text, .. } if text.is_empty() => String::new(),
        Node::Text { text, format } => apply_format(escape_html(text), *format),
        Node::LineBreak => "<br>".to_string(),
        Node::Paragraph(children) => {
            let inner = render(children);
            if inner.is_empty() {
                "<p><br></p>".to_string()
            } else {
                format!("<p>{inner}</p>")
            }
        }
        Node::Heading { level, children } => {
            format!("<h{level}>{}</h{level}>", render(children))
        }
        Node::List { ordered, children } => {
            let tag = if *ordered { "ol" } else { "ul" };
            format!("<{tag}>{}</{tag}>", render(children))
        }
        Node::ListItem(children) => format!("<li>{}</li>", render(children)),
        Node::Quote(children) => format!("<blockquote>{}</blockquote>", render(children)),
        Node::Code(children) => format!("<pre><code>{}</code></pre>", render(children)),
        Node::Link {
            url,
            new_tab,
            children,
        } => {
            let target = if *new_tab {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(
                r#"<a href="{}"{target}>{}</a>"#,
                escape_html(safe_href(url)),
                render(children)
            )
        }
        Node::Container(children) => render(children),
        Node::Unknown => String::new(),
    }
}

/// Wrap already-escaped text in one tag per set format bit.
fn apply_format(mut text: String, bits: u64) -> String {
    for (bit, tag) in FORMAT_TAGS {
        if bits & bit != 0 {
            text = format!("<{tag}>{text}</{tag}>");
        }
    }
    text
}

fn safe_href(url: &str) -> &str {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return "#";
    }
    let lowered = trimmed.to_ascii_lowercase();
    if BLOCKED_SCHEMES.iter().any(|s| lowered.starts_with(s)) {
        "#"
    } else {
        trimmed
    }
}

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
