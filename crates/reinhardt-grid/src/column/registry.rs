//! Registry of column kinds

use super::types::{
	ActionsColumn, ArrayColumn, BooleanColumn, DateTimeColumn, NumberColumn, TextColumn,
};
use super::{SharedColumn, shared};
use crate::error::{GridError, GridResult};
use crate::options::Options;
use crate::services::ColumnFactory;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Builds a column from `(name, options)`
pub type ColumnConstructor = Arc<dyn Fn(&str, &Options) -> GridResult<SharedColumn> + Send + Sync>;

/// Maps column type names to constructors
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::column::{ColumnTypeRegistry, TextColumn, shared};
/// use reinhardt_grid::{ColumnFactory, Options};
///
/// let mut registry = ColumnTypeRegistry::default();
/// registry.register("email", |name, options| {
///     Ok(shared(TextColumn::from_options(name, options)?))
/// });
///
/// let column = registry.create_column("contact", "email", &Options::new()).unwrap();
/// assert_eq!(column.read().id(), "contact");
/// assert!(registry.create_column("x", "unknown", &Options::new()).is_err());
/// ```
#[derive(Clone)]
pub struct ColumnTypeRegistry {
	constructors: HashMap<String, ColumnConstructor>,
}

impl ColumnTypeRegistry {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self {
			constructors: HashMap::new(),
		}
	}

	/// Creates a registry with the built-in column kinds
	///
	/// `text`, `number`, `integer`, `boolean`, `datetime`, `date`, `array`
	/// and `actions`.
	pub fn with_builtin_types() -> Self {
		let mut registry = Self::new();
		registry.register("text", |name, options| {
			Ok(shared(TextColumn::from_options(name, options)?))
		});
		for type_name in ["number", "integer"] {
			registry.register(type_name, move |name, options| {
				Ok(shared(NumberColumn::from_options(name, type_name, options)?))
			});
		}
		registry.register("boolean", |name, options| {
			Ok(shared(BooleanColumn::from_options(name, options)?))
		});
		for type_name in ["datetime", "date"] {
			registry.register(type_name, move |name, options| {
				Ok(shared(DateTimeColumn::from_options(name, type_name, options)?))
			});
		}
		registry.register("array", |name, options| {
			Ok(shared(ArrayColumn::from_options(name, options)?))
		});
		registry.register("actions", |name, options| {
			Ok(shared(ActionsColumn::from_options(name, options)?))
		});
		registry
	}

	/// Registers (or replaces) a column kind
	pub fn register<F>(&mut self, type_name: impl Into<String>, constructor: F)
	where
		F: Fn(&str, &Options) -> GridResult<SharedColumn> + Send + Sync + 'static,
	{
		self.constructors
			.insert(type_name.into(), Arc::new(constructor));
	}

	/// Returns `true` if `type_name` is registered
	pub fn has_type(&self, type_name: &str) -> bool {
		self.constructors.contains_key(type_name)
	}

	/// Registered type names, sorted
	pub fn type_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
		names.sort_unstable();
		names
	}
}

impl Default for ColumnTypeRegistry {
	fn default() -> Self {
		Self::with_builtin_types()
	}
}

impl ColumnFactory for ColumnTypeRegistry {
	fn create_column(
		&self,
		name: &str,
		type_name: &str,
		options: &Options,
	) -> GridResult<SharedColumn> {
		let constructor = self
			.constructors
			.get(type_name)
			.ok_or_else(|| GridError::UnknownColumnType(type_name.to_string()))?;
		tracing::trace!(column = name, column_type = type_name, "creating column");
		constructor(name, options)
	}
}

impl fmt::Debug for ColumnTypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ColumnTypeRegistry")
			.field("types", &self.type_names())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_builtin_types() {
		let registry = ColumnTypeRegistry::default();
		assert_eq!(
			registry.type_names(),
			vec![
				"actions", "array", "boolean", "date", "datetime", "integer", "number", "text"
			]
		);
	}

	#[rstest]
	#[case("text")]
	#[case("integer")]
	#[case("date")]
	#[case("actions")]
	fn test_created_column_reports_its_type(#[case] type_name: &str) {
		let registry = ColumnTypeRegistry::default();
		let column = registry
			.create_column("field", type_name, &Options::new())
			.unwrap();
		let column = column.read();
		assert_eq!(column.id(), "field");
		assert_eq!(column.column_type(), type_name);
	}

	#[rstest]
	fn test_unknown_type() {
		let registry = ColumnTypeRegistry::new();
		let result = registry.create_column("id", "integer", &Options::new());
		assert!(matches!(result, Err(GridError::UnknownColumnType(t)) if t == "integer"));
	}

	#[rstest]
	fn test_register_replaces_existing_kind() {
		let mut registry = ColumnTypeRegistry::default();
		registry.register("text", |name, _| {
			Ok(shared(TextColumn::new(name).with_base(
				super::super::ColumnBase::new(name).with_title("Custom"),
			)))
		});
		let column = registry
			.create_column("name", "text", &Options::new())
			.unwrap();
		assert_eq!(column.read().title(), "Custom");
	}
}
