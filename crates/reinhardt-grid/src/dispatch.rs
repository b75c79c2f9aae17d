//! Controller registry used to forward mass actions

use crate::error::{GridError, GridResult};
use crate::options::Options;
use crate::services::RequestDispatcher;
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;

type ControllerFn = Box<dyn Fn(&Options) -> GridResult<http::Response<Bytes>> + Send + Sync>;

/// Controllers registered by name
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::dispatch::ControllerMap;
/// use reinhardt_grid::{Options, RequestDispatcher};
///
/// let mut controllers = ControllerMap::new();
/// controllers.register("archive_users", |attributes| {
///     let count = attributes["primary_keys"].as_array().map_or(0, Vec::len);
///     Ok(http::Response::new(format!("archived {count}").into()))
/// });
///
/// let mut attributes = Options::new();
/// attributes.insert("primary_keys".into(), serde_json::json!([1, 2]));
/// let response = controllers.forward("archive_users", &attributes).unwrap();
/// assert_eq!(response.body().as_ref(), b"archived 2");
/// ```
#[derive(Default)]
pub struct ControllerMap {
	controllers: HashMap<String, ControllerFn>,
}

impl ControllerMap {
	/// Creates an empty controller map
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a controller
	pub fn register<F>(&mut self, name: impl Into<String>, controller: F)
	where
		F: Fn(&Options) -> GridResult<http::Response<Bytes>> + Send + Sync + 'static,
	{
		self.controllers.insert(name.into(), Box::new(controller));
	}

	/// Returns `true` if `name` is registered
	pub fn contains(&self, name: &str) -> bool {
		self.controllers.contains_key(name)
	}
}

impl RequestDispatcher for ControllerMap {
	fn forward(&self, controller: &str, attributes: &Options) -> GridResult<http::Response<Bytes>> {
		let handler = self
			.controllers
			.get(controller)
			.ok_or_else(|| GridError::Dispatch(format!("controller \"{controller}\" is not registered")))?;
		handler(attributes)
	}
}

impl fmt::Debug for ControllerMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<&String> = self.controllers.keys().collect();
		names.sort();
		f.debug_struct("ControllerMap")
			.field("controllers", &names)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unknown_controller() {
		let controllers = ControllerMap::new();
		let result = controllers.forward("missing", &Options::new());
		assert!(matches!(result, Err(GridError::Dispatch(_))));
	}

	#[rstest]
	fn test_controller_errors_propagate() {
		let mut controllers = ControllerMap::new();
		controllers.register("fails", |_| Err(GridError::AccessDenied("nope".into())));
		assert!(controllers.contains("fails"));
		let result = controllers.forward("fails", &Options::new());
		assert!(matches!(result, Err(GridError::AccessDenied(_))));
	}
}
