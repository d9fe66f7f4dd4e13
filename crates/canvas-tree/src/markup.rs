//! Markup output tree: a JsonML-shaped node type, an HTML serializer, and a
//! depth-first walker.
//!
//! The built-in [`ElementComponent`](crate::html::ElementComponent) renders
//! into [`MarkupNode`]s; a rendered page is a fragment element holding the
//! roots.

use serde_json::{json, Value};

/// Element tag. A fragment has no wrapper of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Named(String),
    Fragment,
}

impl Tag {
    pub fn is_fragment(&self) -> bool {
        matches!(self, Tag::Fragment)
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Named(name) => name,
            Tag::Fragment => "",
        }
    }
}

/// Node of the output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupNode {
    Text(String),
    Element(Element),
}

/// Element with attributes in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: Tag,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<MarkupNode>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: Tag::Named(tag.into()),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn fragment(children: Vec<MarkupNode>) -> Self {
        Element {
            tag: Tag::Fragment,
            attrs: Vec::new(),
            children,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, node: MarkupNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for MarkupNode {
    fn from(el: Element) -> Self {
        MarkupNode::Element(el)
    }
}

impl MarkupNode {
    pub fn text(s: impl Into<String>) -> Self {
        MarkupNode::Text(s.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            MarkupNode::Element(el) => Some(el),
            MarkupNode::Text(_) => None,
        }
    }

    /// JsonML form: `[tag, attrs, ...children]`, `""` for fragments.
    pub fn to_json_ml(&self) -> Value {
        match self {
            MarkupNode::Text(s) => Value::String(s.clone()),
            MarkupNode::Element(el) => {
                let attrs = if el.attrs.is_empty() {
                    Value::Null
                } else {
                    Value::Object(
                        el.attrs
                            .iter()
                            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                            .collect(),
                    )
                };
                let mut out = vec![json!(el.tag.name()), attrs];
                out.extend(el.children.iter().map(MarkupNode::to_json_ml));
                Value::Array(out)
            }
        }
    }
}

/// True if `name` can be written as a tag or attribute name without
/// escaping: `[A-Za-z_:][-A-Za-z0-9_:.]*`.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn escape_text(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
}

/// Serializes `node` to HTML.
///
/// `tab` is the indentation unit; an empty `tab` produces compact output.
/// Elements whose children are all text stay on one line.
pub fn to_html(node: &MarkupNode, tab: &str) -> String {
    let mut out = String::new();
    write_node(node, tab, "", &mut out);
    out
}

fn write_node(node: &MarkupNode, tab: &str, indent: &str, out: &mut String) {
    match node {
        MarkupNode::Text(s) => {
            out.push_str(indent);
            escape_text(s, out);
        }
        MarkupNode::Element(el) => write_element(el, tab, indent, out),
    }
}

fn write_element(el: &Element, tab: &str, indent: &str, out: &mut String) {
    let pretty = !tab.is_empty();
    let text_only = el.children.iter().all(|c| matches!(c, MarkupNode::Text(_)));

    if el.tag.is_fragment() {
        for (i, child) in el.children.iter().enumerate() {
            if pretty && i > 0 {
                out.push('\n');
            }
            write_node(child, tab, indent, out);
        }
        return;
    }

    let name = el.tag.name();
    out.push_str(indent);
    out.push('<');
    out.push_str(name);
    for (k, v) in &el.attrs {
        out.push(' ');
        out.push_str(k);
        out.push_str("=\"");
        escape_attr(v, out);
        out.push('"');
    }

    if el.children.is_empty() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    if text_only {
        for child in &el.children {
            write_node(child, tab, "", out);
        }
    } else {
        let child_indent = format!("{indent}{tab}");
        for child in &el.children {
            if pretty {
                out.push('\n');
            }
            write_node(child, tab, &child_indent, out);
        }
        if pretty {
            out.push('\n');
            out.push_str(indent);
        }
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Depth-first, pre-order iterator over a tree.
pub struct Walk<'a> {
    stack: Vec<&'a MarkupNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a MarkupNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let MarkupNode::Element(el) = node {
            self.stack.extend(el.children.iter().rev());
        }
        Some(node)
    }
}

pub fn walk(node: &MarkupNode) -> Walk<'_> {
    Walk { stack: vec![node] }
}
