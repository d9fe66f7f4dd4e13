//! Flat component records as delivered by the content source.

use serde::{Deserialize, Serialize};

/// Slot name used when a record does not name one.
pub const DEFAULT_SLOT: &str = "default";

/// One node of a serialized component tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    /// Identifier, unique within one tree.
    pub uuid: String,
    /// Key into the type registry.
    pub component_id: String,
    /// Parent record, `None` for roots.
    #[serde(default)]
    pub parent_uuid: Option<String>,
    /// Slot on the parent this record is placed in.
    #[serde(default)]
    pub slot: Option<String>,
    /// Serialized JSON property bag.
    pub inputs: String,
}

impl ComponentRecord {
    pub fn new(uuid: impl Into<String>, component_id: impl Into<String>) -> Self {
        ComponentRecord {
            uuid: uuid.into(),
            component_id: component_id.into(),
            parent_uuid: None,
            slot: None,
            inputs: "{}".to_string(),
        }
    }

    pub fn with_parent(mut self, parent_uuid: impl Into<String>) -> Self {
        self.parent_uuid = Some(parent_uuid.into());
        self
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn with_inputs(mut self, inputs: impl Into<String>) -> Self {
        self.inputs = inputs.into();
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_uuid.is_none()
    }

    /// Slot this record occupies on its parent.
    ///
    /// An empty slot name counts as unnamed.
    pub fn slot_name(&self) -> &str {
        match self.slot.as_deref() {
            Some(slot) if !slot.is_empty() => slot,
            _ => DEFAULT_SLOT,
        }
    }
}

/// A page as returned by the content source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasPage {
    #[serde(default)]
    pub title: String,
    pub components: Vec<ComponentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_optional_fields_deserialize_as_none() {
        let record: ComponentRecord = serde_json::from_value(json!({
            "uuid": "a",
            "component_id": "sdc.theme.card",
            "inputs": "{}",
        }))
        .unwrap();
        assert!(record.is_root());
        assert_eq!(record.slot, None);
    }

    #[test]
    fn slot_name_defaults() {
        let record = ComponentRecord::new("a", "x");
        assert_eq!(record.slot_name(), "default");
        assert_eq!(record.clone().with_slot("").slot_name(), "default");
        assert_eq!(record.with_slot("header").slot_name(), "header");
    }

    #[test]
    fn page_envelope() {
        let page: CanvasPage = serde_json::from_value(json!({
            "title": "Home",
            "components": [
                {"uuid": "a", "component_id": "x", "parent_uuid": null, "slot": null, "inputs": "{}"},
            ],
        }))
        .unwrap();
        assert_eq!(page.title, "Home");
        assert_eq!(page.components, vec![ComponentRecord::new("a", "x")]);
    }
}
