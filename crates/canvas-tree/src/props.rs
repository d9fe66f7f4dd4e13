//! Properties handed to a component: normalized inputs plus slot content.

use canvas_inputs::Inputs;
use indexmap::IndexMap;
use serde_json::Value;

/// One property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue<N> {
    /// A normalized input.
    Value(Value),
    /// A slot holding exactly one rendered child.
    Node(N),
    /// A slot holding two or more rendered children, in order.
    Nodes(Vec<N>),
}

impl<N> PropValue<N> {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            PropValue::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_slot(&self) -> bool {
        !matches!(self, PropValue::Value(_))
    }

    /// Rendered children of a slot entry; empty for inputs.
    pub fn nodes(&self) -> &[N] {
        match self {
            PropValue::Value(_) => &[],
            PropValue::Node(n) => std::slice::from_ref(n),
            PropValue::Nodes(ns) => ns,
        }
    }

    pub fn into_nodes(self) -> Vec<N> {
        match self {
            PropValue::Value(_) => Vec::new(),
            PropValue::Node(n) => vec![n],
            PropValue::Nodes(ns) => ns,
        }
    }
}

/// Insertion-ordered property set.
#[derive(Debug, Clone, PartialEq)]
pub struct Props<N> {
    entries: IndexMap<String, PropValue<N>>,
}

impl<N> Default for Props<N> {
    fn default() -> Self {
        Props {
            entries: IndexMap::new(),
        }
    }
}

impl<N> Props<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges inputs with grouped slot content.
    ///
    /// Inputs come first. A slot sharing a name with an input replaces the
    /// input's value in place. A slot with one child is stored as
    /// [`PropValue::Node`], never as a one-element list.
    pub fn merge(inputs: Inputs, slots: IndexMap<String, Vec<N>>) -> Self {
        let mut entries = IndexMap::with_capacity(inputs.len() + slots.len());
        for (name, value) in inputs {
            entries.insert(name, PropValue::Value(value));
        }
        for (name, mut nodes) in slots {
            let value = match nodes.len() {
                1 => match nodes.pop() {
                    Some(node) => PropValue::Node(node),
                    None => continue,
                },
                0 => continue,
                _ => PropValue::Nodes(nodes),
            };
            entries.insert(name, value);
        }
        Props { entries }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: PropValue<N>) -> Option<PropValue<N>> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&PropValue<N>> {
        self.entries.get(name)
    }

    /// The input called `name`, if it is not shadowed by a slot.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.get(name).and_then(PropValue::as_value)
    }

    /// The rendered children of slot `name`; empty if there are none.
    pub fn slot(&self, name: &str) -> &[N] {
        self.get(name).map(PropValue::nodes).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, PropValue<N>> {
        self.entries.iter()
    }
}

impl<N> IntoIterator for Props<N> {
    type Item = (String, PropValue<N>);
    type IntoIter = indexmap::map::IntoIter<String, PropValue<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'p, N> IntoIterator for &'p Props<N> {
    type Item = (&'p String, &'p PropValue<N>);
    type IntoIter = indexmap::map::Iter<'p, String, PropValue<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
