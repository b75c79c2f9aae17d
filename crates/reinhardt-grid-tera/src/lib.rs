//! Tera renderer for Reinhardt data grids
//!
//! Implements [`TemplateRenderer`] on top of the Tera template engine and
//! ships a default `grid.html` template that understands the context built
//! by [`Grid::view`](reinhardt_grid::Grid::view).
//!
//! # Example
//!
//! ```rust
//! use reinhardt_grid::TemplateRenderer;
//! use reinhardt_grid_tera::TeraGridRenderer;
//! use serde_json::json;
//!
//! let renderer = TeraGridRenderer::new()
//!     .unwrap()
//!     .with_template("count.html", "{{ rows | length }} rows")
//!     .unwrap();
//!
//! let html = renderer.render("count.html", &json!({"rows": [1, 2, 3]})).unwrap();
//! assert_eq!(html, "3 rows");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

use reinhardt_grid::{GridError, GridResult, TemplateRenderer};
use std::error::Error as _;
use std::fmt;
use tera::{Context, Tera};

/// Name of the built-in grid template
pub const DEFAULT_TEMPLATE: &str = "grid.html";

const DEFAULT_TEMPLATE_SOURCE: &str = include_str!("../templates/grid.html");

/// Flattens a Tera error and its causes into one message
fn render_error(error: tera::Error) -> GridError {
	let mut message = error.to_string();
	let mut source = error.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	GridError::Render(message)
}

/// Grid renderer backed by a Tera instance
pub struct TeraGridRenderer {
	tera: Tera,
}

impl TeraGridRenderer {
	/// Creates a renderer holding the built-in `grid.html` template
	pub fn new() -> GridResult<Self> {
		let mut tera = Tera::default();
		tera.add_raw_template(DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_SOURCE)
			.map_err(render_error)?;
		Ok(Self { tera })
	}

	/// Wraps an existing Tera instance, e.g. one loaded from a template directory
	///
	/// The built-in template is added unless `tera` already defines `grid.html`.
	pub fn from_tera(mut tera: Tera) -> GridResult<Self> {
		if !tera.get_template_names().any(|name| name == DEFAULT_TEMPLATE) {
			tera.add_raw_template(DEFAULT_TEMPLATE, DEFAULT_TEMPLATE_SOURCE)
				.map_err(render_error)?;
		}
		Ok(Self { tera })
	}

	/// Adds or replaces a template
	pub fn with_template(mut self, name: &str, source: &str) -> GridResult<Self> {
		self.tera
			.add_raw_template(name, source)
			.map_err(render_error)?;
		tracing::debug!(template = name, "grid template registered");
		Ok(self)
	}

	/// Returns `true` if a template is registered under `name`
	pub fn has_template(&self, name: &str) -> bool {
		self.tera.get_template_names().any(|registered| registered == name)
	}
}

impl TemplateRenderer for TeraGridRenderer {
	fn render(&self, template: &str, context: &serde_json::Value) -> GridResult<String> {
		let context = Context::from_value(context.clone()).map_err(render_error)?;
		self.tera.render(template, &context).map_err(|e| {
			let err = render_error(e);
			tracing::warn!(template, error = %err, "grid template failed to render");
			err
		})
	}
}

impl fmt::Debug for TeraGridRenderer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut templates: Vec<&str> = self.tera.get_template_names().collect();
		templates.sort_unstable();
		f.debug_struct("TeraGridRenderer")
			.field("templates", &templates)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_builtin_template_registered() {
		let renderer = TeraGridRenderer::new().unwrap();
		assert!(renderer.has_template(DEFAULT_TEMPLATE));
	}

	#[rstest]
	fn test_unknown_template_is_render_error() {
		let renderer = TeraGridRenderer::new().unwrap();
		let result = renderer.render("missing.html", &json!({}));
		assert!(matches!(result, Err(GridError::Render(m)) if m.contains("missing.html")));
	}

	#[rstest]
	fn test_syntax_error_is_reported() {
		let result = TeraGridRenderer::new()
			.unwrap()
			.with_template("broken.html", "{% if %}");
		assert!(matches!(result, Err(GridError::Render(_))));
	}

	#[rstest]
	fn test_non_object_context_rejected() {
		let renderer = TeraGridRenderer::new().unwrap();
		let result = renderer.render(DEFAULT_TEMPLATE, &json!([1, 2]));
		assert!(matches!(result, Err(GridError::Render(_))));
	}

	#[rstest]
	fn test_from_tera_keeps_existing_grid_template() {
		let mut tera = Tera::default();
		tera.add_raw_template(DEFAULT_TEMPLATE, "custom {{ name }}").unwrap();

		let renderer = TeraGridRenderer::from_tera(tera).unwrap();
		let html = renderer
			.render(DEFAULT_TEMPLATE, &json!({"name": "users"}))
			.unwrap();
		assert_eq!(html, "custom users");
	}
}
