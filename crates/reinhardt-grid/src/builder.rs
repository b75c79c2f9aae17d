//! Grid builder
//!
//! [`GridBuilder`] accumulates named columns and row actions, then produces
//! a fully configured [`Grid`].
//!
//! ```text
//! add/get/has/remove ──► columns (insertion ordered)
//! add_action ──────────► GridConfigBuilder (actions by column id)
//!                                  │
//! build() ── snapshot config ──► Grid::new ─► add_column* ─► add_row_action* ─► initialize
//! ```
//!
//! # Shared columns
//!
//! Columns are stored as [`SharedColumn`] handles and `build` hands the same
//! handles to every grid it produces. `build` may be called repeatedly and
//! each call yields an independent grid, but a column changed through one
//! grid (or through [`GridBuilder::get`]) changes in all of them. Configuration
//! and row actions are copied.

use crate::action::RowAction;
use crate::column::SharedColumn;
use crate::config::GridConfigBuilder;
use crate::error::{GridError, GridResult};
use crate::grid::Grid;
use crate::options::{Options, value_kind};
use crate::services::{ColumnFactory, GridServices};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Shapes accepted for a column definition
const EXPECTED_COLUMN_TYPE: &str = "string, Column";

/// Column definition passed to [`GridBuilder::add`]
#[derive(Clone)]
pub enum ColumnType {
	/// An already constructed column, stored as is
	Prebuilt(SharedColumn),
	/// A registered column kind, constructed by the column factory
	Named(String),
}

impl fmt::Debug for ColumnType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ColumnType::Prebuilt(column) => f.debug_tuple("Prebuilt").field(&*column.read()).finish(),
			ColumnType::Named(name) => f.debug_tuple("Named").field(name).finish(),
		}
	}
}

/// Conversion into a [`ColumnType`]
///
/// Implemented for type names (`&str`, `String`), column handles, and JSON
/// values from dynamic configuration. Only a JSON string names a type; any
/// other JSON value fails with [`GridError::UnexpectedType`].
pub trait IntoColumnType {
	/// Performs the conversion
	fn into_column_type(self) -> GridResult<ColumnType>;
}

impl IntoColumnType for ColumnType {
	fn into_column_type(self) -> GridResult<ColumnType> {
		Ok(self)
	}
}

impl IntoColumnType for &str {
	fn into_column_type(self) -> GridResult<ColumnType> {
		Ok(ColumnType::Named(self.to_string()))
	}
}

impl IntoColumnType for String {
	fn into_column_type(self) -> GridResult<ColumnType> {
		Ok(ColumnType::Named(self))
	}
}

impl IntoColumnType for SharedColumn {
	fn into_column_type(self) -> GridResult<ColumnType> {
		Ok(ColumnType::Prebuilt(self))
	}
}

impl IntoColumnType for Value {
	fn into_column_type(self) -> GridResult<ColumnType> {
		match self {
			Value::String(name) => Ok(ColumnType::Named(name)),
			other => Err(GridError::unexpected_type(
				value_kind(&other),
				EXPECTED_COLUMN_TYPE,
			)),
		}
	}
}

impl IntoColumnType for &Value {
	fn into_column_type(self) -> GridResult<ColumnType> {
		match self {
			Value::String(name) => Ok(ColumnType::Named(name.clone())),
			other => Err(GridError::unexpected_type(
				value_kind(other),
				EXPECTED_COLUMN_TYPE,
			)),
		}
	}
}

/// Builder for [`Grid`] instances
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::routing::RouteTable;
/// use reinhardt_grid::security::GrantedRoles;
/// use reinhardt_grid::dispatch::ControllerMap;
/// use reinhardt_grid::{
///     ColumnTypeRegistry, GridBuilder, GridResult, GridServices, Options, TemplateRenderer,
/// };
/// use std::sync::Arc;
///
/// struct JsonRenderer;
///
/// impl TemplateRenderer for JsonRenderer {
///     fn render(&self, _template: &str, context: &serde_json::Value) -> GridResult<String> {
///         Ok(context.to_string())
///     }
/// }
///
/// let services = GridServices::new(
///     Arc::new(RouteTable::new()),
///     Arc::new(GrantedRoles::anonymous()),
///     Arc::new(ControllerMap::new()),
///     Arc::new(JsonRenderer),
/// );
///
/// let mut builder = GridBuilder::new(
///     Arc::new(ColumnTypeRegistry::default()),
///     services,
///     "users",
///     Options::new(),
/// )
/// .unwrap();
///
/// builder
///     .add("id", "integer", Options::new())
///     .unwrap()
///     .add("name", "text", Options::new())
///     .unwrap();
///
/// let grid = builder.build().unwrap();
/// assert_eq!(grid.column_ids(), vec!["id", "name"]);
/// ```
pub struct GridBuilder {
	config: GridConfigBuilder,
	factory: Arc<dyn ColumnFactory>,
	services: GridServices,
	columns: IndexMap<String, SharedColumn>,
}

impl GridBuilder {
	/// Creates a builder for the grid `name`
	///
	/// `factory` constructs columns added by type name; `services` are
	/// passed through to every built grid. Fails with
	/// [`GridError::InvalidOption`] when `options` contains unknown keys.
	pub fn new(
		factory: Arc<dyn ColumnFactory>,
		services: GridServices,
		name: impl Into<String>,
		options: Options,
	) -> GridResult<Self> {
		Ok(Self {
			config: GridConfigBuilder::new(name, options)?,
			factory,
			services,
			columns: IndexMap::new(),
		})
	}

	/// Adds a column, replacing any column already stored under `name`
	///
	/// Prebuilt columns are stored as given. Type names are resolved through
	/// the column factory with `(name, type, options)`; factory errors are
	/// returned unchanged. A replaced column keeps its position.
	pub fn add(
		&mut self,
		name: impl Into<String>,
		column_type: impl IntoColumnType,
		options: Options,
	) -> GridResult<&mut Self> {
		let name = name.into();
		let column = match column_type.into_column_type()? {
			ColumnType::Prebuilt(column) => column,
			ColumnType::Named(type_name) => {
				self.factory.create_column(&name, &type_name, &options)?
			}
		};

		tracing::debug!(grid = self.config.name(), column = %name, "column added");
		self.columns.insert(name, column);
		Ok(self)
	}

	/// Returns the column stored under `name`
	///
	/// The returned handle shares the stored column.
	pub fn get(&self, name: &str) -> GridResult<SharedColumn> {
		self.columns
			.get(name)
			.cloned()
			.ok_or_else(|| GridError::NotFound(name.to_string()))
	}

	/// Returns `true` if a column is stored under `name`
	pub fn has(&self, name: &str) -> bool {
		self.columns.contains_key(name)
	}

	/// Removes the column stored under `name`, if any
	pub fn remove(&mut self, name: &str) -> &mut Self {
		if self.columns.shift_remove(name).is_some() {
			tracing::debug!(grid = self.config.name(), column = name, "column removed");
		}
		self
	}

	/// Column names in insertion order
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.columns.keys().map(String::as_str)
	}

	/// Adds a row action
	pub fn add_action(&mut self, action: RowAction) -> &mut Self {
		self.config.add_action(action);
		self
	}

	/// Underlying configuration builder
	pub fn config(&self) -> &GridConfigBuilder {
		&self.config
	}

	/// Mutable access to the underlying configuration builder
	pub fn config_mut(&mut self) -> &mut GridConfigBuilder {
		&mut self.config
	}

	/// Builds and initializes a grid from the accumulated state
	///
	/// Columns are added in insertion order, then row actions in column and
	/// list order, then [`Grid::initialize`] runs. Errors from initialization
	/// are returned unchanged.
	pub fn build(&self) -> GridResult<Grid> {
		let config = self.config.grid_config();
		let actions = config.actions().clone();

		let mut grid = Grid::new(self.services.clone(), config.name().to_string(), config);

		for column in self.columns.values() {
			grid.add_column(Arc::clone(column));
		}

		if !actions.is_empty() {
			for action in actions.into_values().flatten() {
				grid.add_row_action(action);
			}
		}

		grid.initialize()?;

		tracing::debug!(
			grid = grid.name(),
			columns = self.columns.len(),
			"grid built"
		);
		Ok(grid)
	}
}

impl fmt::Debug for GridBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GridBuilder")
			.field("name", &self.config.name())
			.field("columns", &self.columns.keys().collect::<Vec<_>>())
			.field("actions", self.config.actions())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::{ColumnTypeRegistry, TextColumn, shared};
	use crate::dispatch::ControllerMap;
	use crate::routing::RouteTable;
	use crate::security::GrantedRoles;
	use crate::services::TemplateRenderer;
	use rstest::{fixture, rstest};
	use serde_json::json;

	struct NullRenderer;

	impl TemplateRenderer for NullRenderer {
		fn render(&self, _template: &str, _context: &Value) -> GridResult<String> {
			Ok(String::new())
		}
	}

	#[fixture]
	fn builder() -> GridBuilder {
		let services = GridServices::new(
			Arc::new(RouteTable::new()),
			Arc::new(GrantedRoles::anonymous()),
			Arc::new(ControllerMap::new()),
			Arc::new(NullRenderer),
		);
		GridBuilder::new(
			Arc::new(ColumnTypeRegistry::default()),
			services,
			"users",
			Options::new(),
		)
		.unwrap()
	}

	#[rstest]
	fn test_into_column_type_from_str() {
		let column_type = "text".into_column_type().unwrap();
		assert!(matches!(column_type, ColumnType::Named(name) if name == "text"));
	}

	#[rstest]
	#[case(json!(3), "integer")]
	#[case(json!(["text"]), "array")]
	#[case(json!(null), "null")]
	#[case(json!({"type": "text"}), "object")]
	fn test_into_column_type_rejects_non_strings(#[case] value: Value, #[case] kind: &str) {
		let result = value.into_column_type();
		assert!(matches!(
			result,
			Err(GridError::UnexpectedType { actual, expected })
				if actual == kind && expected == "string, Column"
		));
	}

	#[rstest]
	fn test_names_follow_insertion_order(mut builder: GridBuilder) {
		builder
			.add("b", "text", Options::new())
			.unwrap()
			.add("a", "text", Options::new())
			.unwrap()
			.add("c", "text", Options::new())
			.unwrap();
		builder.remove("a");
		assert_eq!(builder.names().collect::<Vec<_>>(), vec!["b", "c"]);
	}

	#[rstest]
	fn test_replaced_column_keeps_position(mut builder: GridBuilder) {
		builder
			.add("id", "integer", Options::new())
			.unwrap()
			.add("name", "text", Options::new())
			.unwrap()
			.add("id", shared(TextColumn::new("id")), Options::new())
			.unwrap();

		assert_eq!(builder.names().collect::<Vec<_>>(), vec!["id", "name"]);
		assert_eq!(builder.get("id").unwrap().read().column_type(), "text");
	}

	#[rstest]
	fn test_failed_add_leaves_builder_unchanged(mut builder: GridBuilder) {
		let result = builder.add("id", "no_such_type", Options::new());
		assert!(matches!(result, Err(GridError::UnknownColumnType(_))));
		assert!(!builder.has("id"));
	}

	#[rstest]
	fn test_add_action_goes_to_config(mut builder: GridBuilder) {
		builder.add_action(RowAction::new("Edit", "user_edit"));
		assert_eq!(builder.config().actions()["__actions"].len(), 1);
	}
}
