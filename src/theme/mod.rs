//! Themed `/equipments` page
//!
//! Renders the equipment catalogue with tera. The template is embedded in the
//! binary and can be replaced by an `equipments.html` file in the configured
//! templates directory.

pub mod handlers;
pub mod page_url;

use crate::core::error::{EquipmentsError, EquipmentsResult};
use crate::core::query::ListResult;
use serde::Serialize;
use std::error::Error as _;
use std::path::Path;
use tera::{Context, Tera};

pub use handlers::{ThemeState, build_theme_routes};
pub use page_url::{append_group_param, next_page_url, prev_page_url};

/// Name of the equipment page template
pub const EQUIPMENTS_TEMPLATE: &str = "equipments.html";

const EMBEDDED_EQUIPMENTS: &str = include_str!("../../templates/equipments.html");

/// A page of items with links to its neighbours
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlContextListResult<T> {
    #[serde(flatten)]
    pub list: ListResult<T>,
    pub prev_url: String,
    pub next_url: String,
}

/// Template renderer for the themed pages
pub struct ThemeRenderer {
    tera: Tera,
}

impl ThemeRenderer {
    /// Renderer with the embedded templates only
    pub fn embedded() -> EquipmentsResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(EQUIPMENTS_TEMPLATE, EMBEDDED_EQUIPMENTS)
            .map_err(|e| render_error(EQUIPMENTS_TEMPLATE, &e))?;
        Ok(Self { tera })
    }

    /// Renderer whose templates may be overridden from `dir`
    ///
    /// Files missing from `dir` keep their embedded version.
    pub fn with_overrides(dir: Option<&Path>) -> EquipmentsResult<Self> {
        let mut renderer = Self::embedded()?;
        let Some(dir) = dir else {
            return Ok(renderer);
        };

        let file = dir.join(EQUIPMENTS_TEMPLATE);
        if file.is_file() {
            renderer
                .tera
                .add_template_file(&file, Some(EQUIPMENTS_TEMPLATE))
                .map_err(|e| render_error(EQUIPMENTS_TEMPLATE, &e))?;
            tracing::info!(template = %file.display(), "using template override");
        }
        Ok(renderer)
    }

    pub fn render(&self, template: &str, context: &Context) -> EquipmentsResult<String> {
        self.tera
            .render(template, context)
            .map_err(|e| render_error(template, &e))
    }
}

/// Flatten a tera error and its causes into one message
fn render_error(template: &str, error: &tera::Error) -> EquipmentsError {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    EquipmentsError::Render {
        template: template.to_string(),
        message,
    }
}
