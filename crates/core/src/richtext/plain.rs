use std::sync::LazyLock;

use regex::Regex;

use super::node::Node;

static EXTRA_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline pattern is valid"));

/// Flatten a node list to plain text.
pub(crate) fn render(nodes: &[Node]) -> String {
    let mut out = String::new();
    visit(nodes, &mut out);
    EXTRA_NEWLINES
        .replace_all(&out, "\n\n")
        .trim()
        .to_string()
}

fn visit(nodes: &[Node], out: &mut String) {
    let last = nodes.len().saturating_sub(1);
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::LineBreak => out.push('\n'),
            Node::Text { text, .. } => out.push_str(text),
            Node::Paragraph(children) => {
                let before = out.len();
                visit(children, out);
                // Separator only between paragraphs that produced something.
                if index < last && out.len() > before {
                    out.push('\n');
                }
            }
            other => visit(other.children(), out),
        }
    }
}
