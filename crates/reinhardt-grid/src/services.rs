//! Framework collaborators injected into builders and grids
//!
//! Each collaborator is a narrow trait covering only what the grid calls.
//! They are passed in explicitly through [`GridServices`]; nothing is looked
//! up from global state.

use crate::column::{ColumnTypeRegistry, SharedColumn};
use crate::error::GridResult;
use crate::options::Options;
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Creates columns from a type name
///
/// The only extension point for new column kinds.
pub trait ColumnFactory: Send + Sync {
	/// Builds the column `name` of kind `type_name`
	fn create_column(&self, name: &str, type_name: &str, options: &Options)
	-> GridResult<SharedColumn>;
}

/// Generates URLs for named routes
pub trait UrlGenerator: Send + Sync {
	/// Reverses `route` with the given placeholder values
	fn generate(&self, route: &str, parameters: &HashMap<String, String>) -> GridResult<String>;
}

/// Answers whether the current user holds a role
pub trait AuthorizationChecker: Send + Sync {
	/// Returns `true` when `role` is granted
	fn is_granted(&self, role: &str) -> bool;
}

/// Forwards a sub-request to a controller
pub trait RequestDispatcher: Send + Sync {
	/// Invokes `controller` with the given request attributes
	fn forward(&self, controller: &str, attributes: &Options) -> GridResult<http::Response<Bytes>>;
}

/// Renders a named template with a JSON context
pub trait TemplateRenderer: Send + Sync {
	/// Renders `template` and returns the output
	fn render(&self, template: &str, context: &serde_json::Value) -> GridResult<String>;
}

/// Bundle of collaborators handed to every grid
///
/// Cloning is cheap: only the handles are cloned.
#[derive(Clone)]
pub struct GridServices {
	router: Arc<dyn UrlGenerator>,
	authorization_checker: Arc<dyn AuthorizationChecker>,
	dispatcher: Arc<dyn RequestDispatcher>,
	renderer: Arc<dyn TemplateRenderer>,
	column_types: Arc<dyn ColumnFactory>,
}

impl GridServices {
	/// Creates a services bundle using the built-in column types
	pub fn new(
		router: Arc<dyn UrlGenerator>,
		authorization_checker: Arc<dyn AuthorizationChecker>,
		dispatcher: Arc<dyn RequestDispatcher>,
		renderer: Arc<dyn TemplateRenderer>,
	) -> Self {
		Self {
			router,
			authorization_checker,
			dispatcher,
			renderer,
			column_types: Arc::new(ColumnTypeRegistry::default()),
		}
	}

	/// Replaces the column-type factory
	pub fn with_column_types(mut self, column_types: Arc<dyn ColumnFactory>) -> Self {
		self.column_types = column_types;
		self
	}

	/// URL generator
	pub fn router(&self) -> &Arc<dyn UrlGenerator> {
		&self.router
	}

	/// Authorization checker
	pub fn authorization_checker(&self) -> &Arc<dyn AuthorizationChecker> {
		&self.authorization_checker
	}

	/// Request dispatcher
	pub fn dispatcher(&self) -> &Arc<dyn RequestDispatcher> {
		&self.dispatcher
	}

	/// Template renderer
	pub fn renderer(&self) -> &Arc<dyn TemplateRenderer> {
		&self.renderer
	}

	/// Column-type factory
	pub fn column_types(&self) -> &Arc<dyn ColumnFactory> {
		&self.column_types
	}
}

impl fmt::Debug for GridServices {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GridServices").finish_non_exhaustive()
	}
}
