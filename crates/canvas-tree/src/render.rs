//! Recursive assembly of a component tree.

use crate::error::RenderError;
use crate::index::ComponentIndex;
use crate::props::Props;
use crate::record::ComponentRecord;
use crate::registry::TypeRegistry;
use canvas_inputs::parse_inputs;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Render-time switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Validate the record set before rendering and fail on duplicate ids,
    /// dangling parents and parent cycles instead of silently skipping
    /// unreachable records.
    #[serde(default)]
    pub strict: bool,
}

impl RenderOptions {
    pub fn strict() -> Self {
        RenderOptions { strict: true }
    }
}

/// Keyless container for the rendered roots.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<N> {
    pub children: Vec<N>,
}

impl<N> Fragment<N> {
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.children.iter()
    }
}

impl<N> IntoIterator for Fragment<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

/// Renders records through a [`TypeRegistry`].
pub struct Renderer<'r, N> {
    registry: &'r TypeRegistry<N>,
    options: RenderOptions,
}

impl<'r, N> Renderer<'r, N> {
    pub fn new(registry: &'r TypeRegistry<N>) -> Self {
        Renderer {
            registry,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Indexes `records` and renders every root in input order.
    pub fn render(&self, records: &[ComponentRecord]) -> Result<Fragment<N>, RenderError> {
        self.render_index(&ComponentIndex::build(records))
    }

    pub fn render_index(&self, index: &ComponentIndex<'_>) -> Result<Fragment<N>, RenderError> {
        if self.options.strict {
            let issues = index.validate();
            if !issues.is_empty() {
                return Err(RenderError::InvalidTree(issues));
            }
        }

        let children = index
            .roots()
            .iter()
            .map(|root| self.render_component(root, index))
            .collect::<Result<Vec<_>, _>>()?;
        if tracing::enabled!(tracing::Level::DEBUG) {
            let omitted = index.len() - index.reachable().len();
            if omitted > 0 {
                tracing::debug!(omitted, "records unreachable from any root were not rendered");
            }
        }
        tracing::trace!(roots = children.len(), records = index.len(), "rendered component tree");
        Ok(Fragment { children })
    }

    /// Renders one record and, recursively, everything below it.
    ///
    /// Fails as soon as any record in the subtree has an unregistered
    /// component id.
    pub fn render_component(
        &self,
        record: &ComponentRecord,
        index: &ComponentIndex<'_>,
    ) -> Result<N, RenderError> {
        let component = self.registry.resolve(&record.component_id)?;
        let inputs = parse_inputs(&record.inputs);

        let mut slots: IndexMap<String, Vec<N>> = IndexMap::new();
        for child in index.children_of(&record.uuid) {
            let node = self.render_component(child, index)?;
            slots
                .entry(child.slot_name().to_string())
                .or_default()
                .push(node);
        }

        Ok(component.render(&record.uuid, Props::merge(inputs, slots)))
    }
}

/// Renders `records` with default options.
pub fn render_tree<N>(
    records: &[ComponentRecord],
    registry: &TypeRegistry<N>,
) -> Result<Fragment<N>, RenderError> {
    Renderer::new(registry).render(records)
}
