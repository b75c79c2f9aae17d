//! # Reinhardt Datagrid
//!
//! Data grids for Reinhardt applications.
//!
//! A grid is declared with a [`GridBuilder`](grid::GridBuilder): columns are
//! added by type name (resolved through a column type registry) or as
//! prebuilt objects, row actions are attached per column, and `build`
//! produces an initialized [`Grid`](grid::Grid) that resolves action URLs,
//! checks roles, forwards mass actions and renders through a pluggable
//! template renderer.
//!
//! ## Feature Flags
//!
//! - `tera` (default) - [`TeraGridRenderer`](tera::TeraGridRenderer) with a built-in `grid.html`
//! - `full` - All features enabled
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_datagrid::prelude::*;
//! use std::sync::Arc;
//!
//! let mut routes = RouteTable::new();
//! routes.register_path("user_edit", "/users/{id}/edit/");
//!
//! let factory = GridFactory::new(GridServices::new(
//!     Arc::new(routes),
//!     Arc::new(GrantedRoles::new(["ROLE_ADMIN"])),
//!     Arc::new(ControllerMap::new()),
//!     Arc::new(TeraGridRenderer::new().unwrap()),
//! ));
//!
//! let mut builder = factory.create_builder("users", Options::new()).unwrap();
//! builder
//!     .add("id", "integer", Options::new())
//!     .unwrap()
//!     .add("name", "text", Options::new())
//!     .unwrap();
//! builder.add_action(RowAction::new("Edit", "user_edit").with_role("ROLE_ADMIN"));
//!
//! let grid = builder.build().unwrap();
//! let row = Row::new()
//!     .with_field("id", serde_json::json!(1))
//!     .with_field("name", serde_json::json!("Alice"));
//! let html = grid.render(&[row]).unwrap();
//! assert!(html.contains("Alice"));
//! ```

#![warn(missing_docs)]

pub mod grid;
#[cfg(feature = "tera")]
pub mod tera;

/// Common imports for building and rendering grids
pub mod prelude {
	pub use crate::grid::dispatch::ControllerMap;
	pub use crate::grid::routing::RouteTable;
	pub use crate::grid::security::GrantedRoles;
	pub use crate::grid::{
		ColumnType, Grid, GridBuilder, GridError, GridFactory, GridResult, GridServices,
		MassAction, Options, Row, RowAction, SortOrder,
	};

	#[cfg(feature = "tera")]
	pub use crate::tera::TeraGridRenderer;
}
