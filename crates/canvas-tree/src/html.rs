//! Generic element component rendering into [`MarkupNode`]s.

use crate::markup::{is_valid_name, Element, MarkupNode};
use crate::props::{PropValue, Props};
use crate::record::DEFAULT_SLOT;
use crate::registry::Component;
use serde_json::Value;

/// Attribute carrying the record uuid.
pub const KEY_ATTR: &str = "data-uuid";
/// Attribute naming the slot of a wrapped slot group.
pub const SLOT_ATTR: &str = "data-slot";

/// Renders a record as `<tag data-uuid=…>` with its inputs as attributes.
///
/// Strings are used verbatim, numbers and booleans are stringified, nulls
/// are dropped, and arrays/objects are JSON-encoded. Inputs named like
/// [`KEY_ATTR`] or not matching [`is_valid_name`] are dropped. Default-slot
/// children become direct children; every other slot is wrapped in
/// `<div data-slot="name">`, in the order the slots appear in `props`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementComponent {
    tag: String,
}

impl ElementComponent {
    pub fn new(tag: impl Into<String>) -> Self {
        ElementComponent { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Component<MarkupNode> for ElementComponent {
    fn render(&self, key: &str, props: Props<MarkupNode>) -> MarkupNode {
        let mut el = Element::new(self.tag.as_str()).attr(KEY_ATTR, key);
        for (name, value) in props {
            match value {
                PropValue::Value(_) if name == KEY_ATTR || !is_valid_name(&name) => {
                    tracing::debug!(key, input = %name, "dropping input with unusable attribute name");
                }
                PropValue::Value(v) => {
                    if let Some(text) = attr_text(v) {
                        el.attrs.push((name, text));
                    }
                }
                slot if name == DEFAULT_SLOT => el.children.extend(slot.into_nodes()),
                slot => {
                    let mut wrapper = Element::new("div").attr(SLOT_ATTR, name);
                    wrapper.children = slot.into_nodes();
                    el.children.push(wrapper.into());
                }
            }
        }
        el.into()
    }
}

fn attr_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        composite => Some(composite.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn inputs_become_attributes() {
        let mut props = Props::new();
        props.insert("title", PropValue::Value(json!("Hi")));
        props.insert("level", PropValue::Value(json!(2)));
        props.insert("open", PropValue::Value(json!(true)));
        props.insert("skip", PropValue::Value(json!(null)));
        props.insert("image", PropValue::Value(json!({"src": "a.png"})));

        let node = ElementComponent::new("section").render("u1", props);
        let el = node.as_element().unwrap();
        assert_eq!(
            el.attrs,
            vec![
                ("data-uuid".to_string(), "u1".to_string()),
                ("title".to_string(), "Hi".to_string()),
                ("level".to_string(), "2".to_string()),
                ("open".to_string(), "true".to_string()),
                ("image".to_string(), r#"{"src":"a.png"}"#.to_string()),
            ]
        );
        assert!(el.children.is_empty());
    }

    #[test]
    fn hostile_input_names_are_dropped() {
        let mut props = Props::new();
        props.insert("x\"><script>alert(1)</script><i y=\"", PropValue::Value(json!("v")));
        props.insert("data-uuid", PropValue::Value(json!("spoofed")));
        props.insert("has space", PropValue::Value(json!("v")));
        props.insert("title", PropValue::Value(json!("kept")));

        let node = ElementComponent::new("p").render("a", props);
        assert_eq!(
            crate::markup::to_html(&node, ""),
            r#"<p data-uuid="a" title="kept" />"#
        );
    }

    #[test]
    fn slots_become_children() {
        let leaf = |t: &str| MarkupNode::from(Element::new(t));
        let mut props = Props::new();
        props.insert("header", PropValue::Node(leaf("h1")));
        props.insert("default", PropValue::Nodes(vec![leaf("p"), leaf("hr")]));

        let node = ElementComponent::new("article").render("k", props);
        assert_eq!(
            crate::markup::to_html(&node, ""),
            r#"<article data-uuid="k"><div data-slot="header"><h1 /></div><p /><hr /></article>"#
        );
    }
}
