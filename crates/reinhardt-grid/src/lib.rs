//! Data grid builder for Reinhardt
//!
//! Declarative construction of data grids: named, typed columns, per-row
//! actions, mass actions and grid level options, assembled by a
//! [`GridBuilder`] into an initialized [`Grid`] ready for rendering.
//!
//! # Features
//!
//! - **Builder**: Insertion ordered columns added by type name or as prebuilt objects
//! - **Column Types**: text, number/integer, boolean, datetime/date, array and actions
//! - **Row Actions**: Route based links per row, filtered by role
//! - **Mass Actions**: Forwarded to registered controllers with the selected keys
//! - **Options**: Typed grid options from option bags or TOML
//! - **Collaborators**: Router, authorization checker, dispatcher and renderer injected as traits
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     F[GridFactory] --> B[GridBuilder]
//!     B --> C[Columns]
//!     B --> CB[GridConfigBuilder]
//!     CB --> RA[Row Actions]
//!     B -->|build| G[Grid]
//!     G --> S[GridServices]
//!     S --> U[UrlGenerator]
//!     S --> A[AuthorizationChecker]
//!     S --> D[RequestDispatcher]
//!     S --> R[TemplateRenderer]
//!     S --> T[ColumnTypeRegistry]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_grid::dispatch::ControllerMap;
//! use reinhardt_grid::routing::RouteTable;
//! use reinhardt_grid::security::GrantedRoles;
//! use reinhardt_grid::{
//!     GridFactory, GridResult, GridServices, Options, Row, RowAction, TemplateRenderer,
//! };
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! struct JsonRenderer;
//!
//! impl TemplateRenderer for JsonRenderer {
//!     fn render(&self, _template: &str, context: &serde_json::Value) -> GridResult<String> {
//!         Ok(context.to_string())
//!     }
//! }
//!
//! let mut routes = RouteTable::new();
//! routes.register_path("user_edit", "/users/{id}/edit/");
//!
//! let factory = GridFactory::new(GridServices::new(
//!     Arc::new(routes),
//!     Arc::new(GrantedRoles::anonymous()),
//!     Arc::new(ControllerMap::new()),
//!     Arc::new(JsonRenderer),
//! ));
//!
//! let mut builder = factory.create_builder("users", Options::new()).unwrap();
//! builder
//!     .add("id", "integer", Options::new())
//!     .unwrap()
//!     .add("name", "text", Options::new())
//!     .unwrap();
//! builder.add_action(RowAction::new("Edit", "user_edit"));
//!
//! let grid = builder.build().unwrap();
//! assert_eq!(grid.column_ids(), vec!["id", "name", "__actions"]);
//!
//! let row = Row::new().with_field("id", json!(7)).with_field("name", json!("Alice"));
//! let actions = grid.visible_row_actions("__actions", &row).unwrap();
//! assert_eq!(actions[0].url, "/users/7/edit/");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod action;
pub mod builder;
pub mod column;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod factory;
pub mod grid;
pub mod options;
pub mod routing;
pub mod row;
pub mod security;
pub mod services;

// Re-exports for convenience
pub use action::{ACTIONS_COLUMN, MassAction, RowAction};
pub use builder::{ColumnType, GridBuilder, IntoColumnType};
pub use column::{Column, ColumnTypeRegistry, SharedColumn};
pub use config::{GridConfig, GridConfigBuilder};
pub use error::{GridError, GridResult};
pub use factory::GridFactory;
pub use grid::{Grid, GridView};
pub use options::{GridOptions, Options, SortOrder};
pub use row::Row;
pub use services::{
	AuthorizationChecker, ColumnFactory, GridServices, RequestDispatcher, TemplateRenderer,
	UrlGenerator,
};
