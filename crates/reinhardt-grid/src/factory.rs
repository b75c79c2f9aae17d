//! Entry point for creating grid builders

use crate::builder::GridBuilder;
use crate::column::SharedColumn;
use crate::error::GridResult;
use crate::options::Options;
use crate::services::{ColumnFactory, GridServices};
use std::sync::Arc;

/// Creates [`GridBuilder`]s wired to a shared set of services
///
/// Columns added by type name are constructed from the column types held by
/// the services.
#[derive(Debug, Clone)]
pub struct GridFactory {
	services: GridServices,
}

impl GridFactory {
	/// Creates a factory over `services`
	pub fn new(services: GridServices) -> Self {
		Self { services }
	}

	/// Services handed to every builder
	pub fn services(&self) -> &GridServices {
		&self.services
	}

	/// Creates a builder for the grid `name`
	pub fn create_builder(&self, name: impl Into<String>, options: Options) -> GridResult<GridBuilder> {
		let name = name.into();
		tracing::trace!(grid = %name, "creating grid builder");
		GridBuilder::new(
			Arc::new(self.clone()),
			self.services.clone(),
			name,
			options,
		)
	}
}

impl ColumnFactory for GridFactory {
	fn create_column(
		&self,
		name: &str,
		type_name: &str,
		options: &Options,
	) -> GridResult<SharedColumn> {
		self.services
			.column_types()
			.create_column(name, type_name, options)
	}
}
