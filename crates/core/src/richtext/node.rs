use serde_json::{Map, Value};

/// Text format bits carried on Lexical `text` nodes.
pub mod format {
    pub const BOLD: u64 = 1;
    pub const ITALIC: u64 = 1 << 1;
    pub const STRIKETHROUGH: u64 = 1 << 2;
    pub const UNDERLINE: u64 = 1 << 3;
    pub const CODE: u64 = 1 << 4;
    pub const SUBSCRIPT: u64 = 1 << 5;
    pub const SUPERSCRIPT: u64 = 1 << 6;
}

/// A rich-text node, parsed leniently from the CMS JSON tree.
///
/// The set of kinds is closed: anything unrecognised becomes a `Container`
/// when it has children and `Unknown` otherwise, so renderers never see a
/// shape they cannot handle.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Paragraph(Vec<Node>),
    Heading { level: u8, children: Vec<Node> },
    Text { text: String, format: u64 },
    Link { url: String, new_tab: bool, children: Vec<Node> },
    List { ordered: bool, children: Vec<Node> },
    ListItem(Vec<Node>),
    Quote(Vec<Node>),
    Code(Vec<Node>),
    LineBreak,
    Container(Vec<Node>),
    Unknown,
}

impl Node {
    /// Parse a single node. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Node::Unknown;
        };
        let kind = obj.get("type").and_then(Value::as_str).unwrap_or_default();

        match kind {
            "paragraph" => Node::Paragraph(children_of(obj)),
            "heading" => Node::Heading {
                level: heading_level(obj.get("tag")),
                children: children_of(obj),
            },
            "text" => Node::Text {
                text: str_field(obj, "text").to_string(),
                format: obj.get("format").and_then(Value::as_u64).unwrap_or(0),
            },
            "tab" => Node::Text {
                text: "\t".to_string(),
                format: 0,
            },
            "link" | "autolink" => Node::Link {
                url: link_url(obj),
                new_tab: link_new_tab(obj),
                children: children_of(obj),
            },
            "list" => Node::List {
                ordered: str_field(obj, "listType") == "number",
                children: children_of(obj),
            },
            "listitem" => Node::ListItem(children_of(obj)),
            "quote" => Node::Quote(children_of(obj)),
            "code" => Node::Code(children_of(obj)),
            "linebreak" => Node::LineBreak,
            _ => match obj.get("children") {
                Some(Value::Array(_)) => Node::Container(children_of(obj)),
                _ => Node::Unknown,
            },
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Paragraph(children)
            | Node::ListItem(children)
            | Node::Quote(children)
            | Node::Code(children)
            | Node::Container(children)
            | Node::Heading { children, .. }
            | Node::Link { children, .. }
            | Node::List { children, .. } => children,
            Node::Text { .. } | Node::LineBreak | Node::Unknown => &[],
        }
    }
}

/// Parse the `children` array of a node object. Non-array values yield no children.
pub(crate) fn children_of(obj: &Map<String, Value>) -> Vec<Node> {
    match obj.get("children") {
        Some(Value::Array(items)) => items.iter().map(Node::from_value).collect(),
        _ => Vec::new(),
    }
}

fn str_field<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a str {
    obj.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// `tag` is `"h1"`..`"h6"`; anything else renders as `h1`.
fn heading_level(tag: Option<&Value>) -> u8 {
    tag.and_then(Value::as_str)
        .and_then(|t| t.strip_prefix('h'))
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=6).contains(n))
        .unwrap_or(1)
}

// Payload stores link targets under `fields`; plain Lexical puts them on the node.
fn link_url(obj: &Map<String, Value>) -> String {
    obj.get("fields")
        .and_then(|f| f.get("url"))
        .or_else(|| obj.get("url"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn link_new_tab(obj: &Map<String, Value>) -> bool {
    let flag = obj
        .get("fields")
        .and_then(|f| f.get("newTab"))
        .or_else(|| obj.get("newTab"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    flag || str_field(obj, "target") == "_blank"
}
