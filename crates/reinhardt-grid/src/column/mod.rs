//! Grid columns
//!
//! A column is a named, typed definition of one displayed field. Columns are
//! stored behind [`SharedColumn`] handles: a builder and every grid built from
//! it hold the same column objects.

pub mod base;
pub mod registry;
pub mod types;

use crate::row::Row;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

pub use base::{Align, ColumnBase};
pub use registry::{ColumnConstructor, ColumnTypeRegistry};
pub use types::{
	ActionsColumn, ArrayColumn, BooleanColumn, DateTimeColumn, NumberColumn, TextColumn,
};

/// Shared, mutable handle to a column
///
/// Cloning the handle does not clone the column. A change made through one
/// handle (for example a grid disabling sorting) is visible through all.
pub type SharedColumn = Arc<RwLock<dyn Column>>;

/// Wraps a column in a [`SharedColumn`] handle
pub fn shared<C: Column + 'static>(column: C) -> SharedColumn {
	Arc::new(RwLock::new(column))
}

/// Trait for grid column definitions
///
/// Implementors own a [`ColumnBase`] with the state common to every column
/// kind and decide how a single cell value is displayed.
pub trait Column: Debug + Send + Sync {
	/// Common column state
	fn base(&self) -> &ColumnBase;

	/// Mutable access to the common column state
	fn base_mut(&mut self) -> &mut ColumnBase;

	/// Registered type name of this column (`"text"`, `"integer"`, ...)
	fn column_type(&self) -> &str;

	/// Renders one cell value as display text
	fn render_cell(&self, value: &Value) -> String;

	/// Column identifier, unique within a grid
	fn id(&self) -> &str {
		self.base().id()
	}

	/// Header text
	fn title(&self) -> &str {
		self.base().title()
	}

	/// Whether the column can be sorted
	fn sortable(&self) -> bool {
		self.base().sortable()
	}

	/// Enables or disables sorting
	fn set_sortable(&mut self, sortable: bool) {
		self.base_mut().set_sortable(sortable);
	}

	/// Whether the column can be filtered
	fn filterable(&self) -> bool {
		self.base().filterable()
	}

	/// Enables or disables filtering
	fn set_filterable(&mut self, filterable: bool) {
		self.base_mut().set_filterable(filterable);
	}

	/// Whether the column is displayed
	fn visible(&self) -> bool {
		self.base().visible()
	}

	/// Renders this column's cell for a row; missing fields render empty
	fn cell(&self, row: &Row) -> String {
		row.field(self.base().field())
			.map(|value| self.render_cell(value))
			.unwrap_or_default()
	}
}
