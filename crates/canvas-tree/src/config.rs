//! TOML configuration for the element registry.
//!
//! ```toml
//! strict = true
//! fallback_tag = "div"
//!
//! [components]
//! "sdc.theme.hero" = "section"
//! "sdc.theme.card" = "article"
//! ```

use crate::html::ElementComponent;
use crate::markup::{is_valid_name, MarkupNode};
use crate::record::ComponentRecord;
use crate::registry::TypeRegistry;
use crate::render::RenderOptions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid tag {tag:?} for {target}")]
    InvalidTag { target: String, tag: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RendererConfig {
    /// See [`RenderOptions::strict`].
    #[serde(default)]
    pub strict: bool,
    /// Tag used for component ids missing from `components`. Without it an
    /// unknown id fails the render.
    #[serde(default)]
    pub fallback_tag: Option<String>,
    /// Component id → element tag.
    #[serde(default)]
    pub components: IndexMap<String, String>,
}

impl RendererConfig {
    /// Parses and validates a TOML configuration.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: RendererConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every configured tag is a usable element name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fallback = self
            .fallback_tag
            .as_ref()
            .map(|tag| ("fallback_tag".to_string(), tag));
        let components = self
            .components
            .iter()
            .map(|(id, tag)| (format!("component {id}"), tag));
        for (target, tag) in fallback.into_iter().chain(components) {
            if !is_valid_name(tag) {
                return Err(ConfigError::InvalidTag {
                    target,
                    tag: tag.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn options(&self) -> RenderOptions {
        RenderOptions {
            strict: self.strict,
        }
    }

    /// Builds the element registry for `records`.
    ///
    /// Every configured component is registered; with a fallback tag, so is
    /// every other component id that occurs in `records`.
    pub fn registry(&self, records: &[ComponentRecord]) -> TypeRegistry<MarkupNode> {
        let mut registry = TypeRegistry::new();
        for (id, tag) in &self.components {
            registry.register(id.as_str(), ElementComponent::new(tag.as_str()));
        }
        if let Some(fallback) = &self.fallback_tag {
            for record in records {
                if !registry.contains(&record.component_id) {
                    tracing::debug!(component_id = %record.component_id, tag = %fallback, "using fallback tag");
                    registry.register(record.component_id.as_str(), ElementComponent::new(fallback.as_str()));
                }
            }
        }
        registry
    }
}
