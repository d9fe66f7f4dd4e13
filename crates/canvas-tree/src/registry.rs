//! Component type registry.

use crate::error::RenderError;
use crate::props::Props;
use std::collections::HashMap;
use std::fmt;

/// Something that turns a keyed property set into a renderable node.
pub trait Component<N> {
    /// `key` is the record's uuid, stable across renders of the same tree.
    fn render(&self, key: &str, props: Props<N>) -> N;
}

impl<N, F> Component<N> for F
where
    F: Fn(&str, Props<N>) -> N,
{
    fn render(&self, key: &str, props: Props<N>) -> N {
        self(key, props)
    }
}

pub type BoxedComponent<N> = Box<dyn Component<N> + Send + Sync>;

/// Map of component id → component.
pub struct TypeRegistry<N> {
    components: HashMap<String, BoxedComponent<N>>,
}

impl<N> Default for TypeRegistry<N> {
    fn default() -> Self {
        TypeRegistry {
            components: HashMap::new(),
        }
    }
}

impl<N> fmt::Debug for TypeRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.components.keys().collect();
        ids.sort();
        f.debug_struct("TypeRegistry").field("components", &ids).finish()
    }
}

impl<N> TypeRegistry<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `component` under `id`, replacing any previous entry.
    pub fn register<C>(&mut self, id: impl Into<String>, component: C) -> &mut Self
    where
        C: Component<N> + Send + Sync + 'static,
    {
        self.components.insert(id.into(), Box::new(component));
        self
    }

    pub fn with<C>(mut self, id: impl Into<String>, component: C) -> Self
    where
        C: Component<N> + Send + Sync + 'static,
    {
        self.register(id, component);
        self
    }

    pub fn get(&self, id: &str) -> Option<&(dyn Component<N> + Send + Sync)> {
        self.components.get(id).map(|c| c.as_ref())
    }

    /// Like [`get`](Self::get), but a missing id is an error.
    pub fn resolve(&self, id: &str) -> Result<&(dyn Component<N> + Send + Sync), RenderError> {
        self.get(id).ok_or_else(|| RenderError::ComponentNotFound {
            component_id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
