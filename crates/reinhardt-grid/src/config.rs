//! Grid configuration
//!
//! [`GridConfigBuilder`] accumulates the grid name, its options and its row
//! actions. [`GridConfig`] is the immutable snapshot handed to a grid.

use crate::action::RowAction;
use crate::error::GridResult;
use crate::options::{GridOptions, Options, SortOrder};
use indexmap::IndexMap;

/// Row actions grouped by hosting column id, in insertion order
pub type RowActions = IndexMap<String, Vec<RowAction>>;

/// Immutable grid configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
	name: String,
	options: GridOptions,
	actions: RowActions,
}

impl GridConfig {
	/// Grid name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Typed grid options
	pub fn options(&self) -> &GridOptions {
		&self.options
	}

	/// Row actions grouped by column id
	pub fn actions(&self) -> &RowActions {
		&self.actions
	}
}

/// Mutable grid configuration
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::{GridConfigBuilder, Options, RowAction};
/// use reinhardt_grid::options::SortOrder;
///
/// let mut builder = GridConfigBuilder::new("users", Options::new()).unwrap();
/// builder
///     .set_route("user_list")
///     .set_sort_by("name", SortOrder::Desc)
///     .add_action(RowAction::new("Edit", "user_edit"));
///
/// let config = builder.grid_config();
/// assert_eq!(config.name(), "users");
/// assert_eq!(config.options().route.as_deref(), Some("user_list"));
/// assert_eq!(config.actions()["__actions"].len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct GridConfigBuilder {
	name: String,
	options: GridOptions,
	actions: RowActions,
}

impl GridConfigBuilder {
	/// Creates a configuration builder, parsing the recognised option keys
	pub fn new(name: impl Into<String>, options: Options) -> GridResult<Self> {
		Ok(Self::with_options(name, GridOptions::from_options(&options)?))
	}

	/// Creates a configuration builder from already typed options
	pub fn with_options(name: impl Into<String>, options: GridOptions) -> Self {
		Self {
			name: name.into(),
			options,
			actions: IndexMap::new(),
		}
	}

	/// Grid name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Typed grid options
	pub fn options(&self) -> &GridOptions {
		&self.options
	}

	/// Sets the route of the grid URL
	pub fn set_route(&mut self, route: impl Into<String>) -> &mut Self {
		self.options.route = Some(route.into());
		self
	}

	/// Adds a parameter of the grid route
	pub fn set_route_parameter(
		&mut self,
		name: impl Into<String>,
		value: impl Into<String>,
	) -> &mut Self {
		self.options
			.route_parameters
			.insert(name.into(), value.into());
		self
	}

	/// Enables or disables state persistence
	pub fn set_persistence(&mut self, persistence: bool) -> &mut Self {
		self.options.persistence = persistence;
		self
	}

	/// Sets the HTTP method of the grid forms (upper-cased)
	pub fn set_method(&mut self, method: impl Into<String>) -> &mut Self {
		self.options.method = Some(method.into().to_uppercase());
		self
	}

	/// Sets the single page size limit
	pub fn set_max_per_page(&mut self, max_per_page: usize) -> &mut Self {
		self.options.max_per_page = Some(max_per_page);
		self
	}

	/// Caps the total number of rows
	pub fn set_max_results(&mut self, max_results: usize) -> &mut Self {
		self.options.max_results = Some(max_results);
		self
	}

	/// Sets the initial page
	pub fn set_page(&mut self, page: usize) -> &mut Self {
		self.options.page = Some(page);
		self
	}

	/// Sets the default order
	pub fn set_sort_by(&mut self, column: impl Into<String>, order: SortOrder) -> &mut Self {
		self.options.sort_by = Some(column.into());
		self.options.order = order;
		self
	}

	/// Groups rows by a column
	pub fn set_group_by(&mut self, column: impl Into<String>) -> &mut Self {
		self.options.group_by = Some(column.into());
		self
	}

	/// Grid wide sortable switch
	pub fn set_sortable(&mut self, sortable: bool) -> &mut Self {
		self.options.sortable = sortable;
		self
	}

	/// Grid wide filterable switch
	pub fn set_filterable(&mut self, filterable: bool) -> &mut Self {
		self.options.filterable = filterable;
		self
	}

	/// Sets the template handed to the renderer
	pub fn set_template(&mut self, template: impl Into<String>) -> &mut Self {
		self.options.template = template.into();
		self
	}

	/// Adds a row action under its column id
	pub fn add_action(&mut self, action: RowAction) -> &mut Self {
		self.actions
			.entry(action.column().to_string())
			.or_default()
			.push(action);
		self
	}

	/// Row actions grouped by column id
	pub fn actions(&self) -> &RowActions {
		&self.actions
	}

	/// Snapshot of the current configuration
	pub fn grid_config(&self) -> GridConfig {
		GridConfig {
			name: self.name.clone(),
			options: self.options.clone(),
			actions: self.actions.clone(),
		}
	}
}
