#![allow(dead_code)]

use canvas_tree::{ComponentRecord, Props, TypeRegistry};

/// Structural stand-in for a rendered component.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub component: String,
    pub key: String,
    pub props: Props<Rendered>,
}

impl Rendered {
    /// Pre-order list of keys in this subtree.
    pub fn keys(&self) -> Vec<String> {
        let mut out = vec![self.key.clone()];
        for (_, value) in &self.props {
            for child in value.nodes() {
                out.extend(child.keys());
            }
        }
        out
    }
}

pub fn registry(ids: &[&'static str]) -> TypeRegistry<Rendered> {
    let mut registry = TypeRegistry::new();
    for &id in ids {
        registry.register(id, move |key: &str, props: Props<Rendered>| Rendered {
            component: id.to_string(),
            key: key.to_string(),
            props,
        });
    }
    registry
}

pub fn record(uuid: &str, component_id: &str, parent: Option<&str>, slot: Option<&str>, inputs: &str) -> ComponentRecord {
    ComponentRecord {
        uuid: uuid.to_string(),
        component_id: component_id.to_string(),
        parent_uuid: parent.map(str::to_string),
        slot: slot.map(str::to_string),
        inputs: inputs.to_string(),
    }
}
