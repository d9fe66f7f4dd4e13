//! Logic behind the `canvas-render` binary: page JSON in, HTML out.

use crate::config::{ConfigError, RendererConfig};
use crate::error::RenderError;
use crate::markup::{to_html, Element, MarkupNode};
use crate::record::{CanvasPage, ComponentRecord};
use crate::render::Renderer;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid page: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Reads either a `{title, components}` page or a bare record array.
pub fn parse_page(json: &str) -> Result<CanvasPage, CliError> {
    let page = match serde_json::from_str(json)? {
        records @ Value::Array(_) => CanvasPage {
            title: String::new(),
            components: serde_json::from_value::<Vec<ComponentRecord>>(records)?,
        },
        other => serde_json::from_value::<CanvasPage>(other)?,
    };
    Ok(page)
}

/// Renders a page to a markup fragment.
pub fn render_page_markup(page: &CanvasPage, config: &RendererConfig) -> Result<MarkupNode, CliError> {
    let registry = config.registry(&page.components);
    let fragment = Renderer::new(&registry)
        .with_options(config.options())
        .render(&page.components)?;
    tracing::info!(
        title = %page.title,
        records = page.components.len(),
        roots = fragment.len(),
        "rendered page"
    );
    Ok(Element::fragment(fragment.children).into())
}

/// Parses page JSON and renders it to HTML, indenting with `tab`.
pub fn render_page(json: &str, config: &RendererConfig, tab: &str) -> Result<String, CliError> {
    let page = parse_page(json)?;
    let markup = render_page_markup(&page, config)?;
    Ok(to_html(&markup, tab))
}
