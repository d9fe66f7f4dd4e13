//! canvas-tree — rebuild flat component records into a slotted tree and
//! render it through a component registry.
//!
//! Records reference their parent by uuid and name the slot they occupy on
//! it. [`ComponentIndex`] groups them into roots and per-parent children;
//! [`Renderer`] walks that index, normalizes each record's inputs with
//! [`canvas_inputs`], and hands the merged [`Props`] to the component
//! registered for the record's `component_id`.
//!
//! # Example
//!
//! ```
//! use canvas_tree::{render_tree, ComponentRecord, PropValue, Props, TypeRegistry};
//!
//! let registry = TypeRegistry::new()
//!     .with("card", |key: &str, props: Props<String>| {
//!         let title = props.value("title").and_then(|v| v.as_str()).unwrap_or("");
//!         let body = match props.get("default") {
//!             Some(PropValue::Node(n)) => n.clone(),
//!             Some(PropValue::Nodes(ns)) => ns.join(""),
//!             _ => String::new(),
//!         };
//!         format!("[{key}:{title}{body}]")
//!     });
//!
//! let records = vec![
//!     ComponentRecord::new("a", "card").with_inputs(r#"{"title": {"value": "Outer"}}"#),
//!     ComponentRecord::new("b", "card").with_parent("a"),
//! ];
//! let out = render_tree(&records, &registry).unwrap();
//! assert_eq!(out.children, vec!["[a:Outer[b:]]"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod index;
pub mod markup;
pub mod props;
pub mod record;
pub mod registry;
pub mod render;

pub use error::{RenderError, TreeIssue};
pub use index::ComponentIndex;
pub use props::{PropValue, Props};
pub use record::{CanvasPage, ComponentRecord, DEFAULT_SLOT};
pub use registry::{Component, TypeRegistry};
pub use render::{render_tree, Fragment, RenderOptions, Renderer};
