//! The finished grid
//!
//! A [`Grid`] owns its column handles, row actions and configuration, plus
//! the collaborators needed to route, authorize, dispatch and render. It is
//! normally produced by [`GridBuilder::build`](crate::GridBuilder::build),
//! which calls [`Grid::initialize`] before handing it out.

use crate::action::{MassAction, RowAction};
use crate::column::{Align, SharedColumn};
use crate::config::{GridConfig, RowActions};
use crate::error::{GridError, GridResult};
use crate::options::{DEFAULT_LIMITS, Options, SortOrder};
use crate::row::Row;
use crate::services::GridServices;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Row action resolved for one row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRowAction {
	/// Link text
	pub title: String,
	/// Generated URL
	pub url: String,
	/// Confirmation message, present only when confirmation is required
	pub confirm_message: Option<String>,
	/// Link target
	pub target: Option<String>,
	/// Extra HTML attributes
	pub attributes: BTreeMap<String, String>,
}

/// Column header as seen by templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
	/// Column id
	pub id: String,
	/// Header text
	pub title: String,
	/// Column type name
	pub column_type: String,
	/// Whether the column can be sorted
	pub sortable: bool,
	/// Whether the column can be filtered
	pub filterable: bool,
	/// Width hint
	pub size: Option<usize>,
	/// Cell alignment
	pub align: Align,
}

/// One rendered cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellView {
	/// Column id
	pub column: String,
	/// Display text
	pub value: String,
	/// Row actions hosted by this cell
	pub actions: Vec<ResolvedRowAction>,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
	/// Cells of visible columns, in column order
	pub cells: Vec<CellView>,
}

/// Mass action offered to the current user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassActionView {
	/// Index passed back to [`Grid::execute_mass_action`]
	pub index: usize,
	/// Button text
	pub title: String,
	/// Whether confirmation is required
	pub confirm: bool,
}

/// Default order as seen by templates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
	/// Column id
	pub column: String,
	/// Direction
	pub order: SortOrder,
}

/// Template context produced by [`Grid::view`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridView {
	/// Grid name
	pub name: String,
	/// Grid URL, when a route is configured
	pub route_url: Option<String>,
	/// HTTP method of the grid forms
	pub method: String,
	/// Whether the grid state is persisted
	pub persistence: bool,
	/// Visible columns
	pub columns: Vec<ColumnView>,
	/// Rendered rows
	pub rows: Vec<RowView>,
	/// Mass actions granted to the current user
	pub mass_actions: Vec<MassActionView>,
	/// Page size limits
	pub limits: Vec<usize>,
	/// Current page
	pub page: usize,
	/// Row cap
	pub max_results: Option<usize>,
	/// Default order
	pub default_order: Option<OrderView>,
	/// Grouping column
	pub group_by: Option<String>,
}

/// Tabular display object composed of columns, row actions and configuration
pub struct Grid {
	name: String,
	config: GridConfig,
	services: GridServices,
	columns: Vec<SharedColumn>,
	row_actions: RowActions,
	mass_actions: Vec<MassAction>,
	initialized: bool,
	route_url: Option<String>,
	method: String,
	persistence: bool,
	limits: Vec<usize>,
	page: usize,
	max_results: Option<usize>,
	default_order: Option<(String, SortOrder)>,
	group_by: Option<String>,
}

impl Grid {
	/// Creates an empty, uninitialized grid
	pub fn new(services: GridServices, name: impl Into<String>, config: GridConfig) -> Self {
		Self {
			name: name.into(),
			config,
			services,
			columns: Vec::new(),
			row_actions: RowActions::new(),
			mass_actions: Vec::new(),
			initialized: false,
			route_url: None,
			method: "GET".to_string(),
			persistence: false,
			limits: DEFAULT_LIMITS.to_vec(),
			page: 0,
			max_results: None,
			default_order: None,
			group_by: None,
		}
	}

	/// Appends a column to the render set
	pub fn add_column(&mut self, column: SharedColumn) -> &mut Self {
		self.columns.push(column);
		self
	}

	/// Appends a row action under its column id
	pub fn add_row_action(&mut self, action: RowAction) -> &mut Self {
		self.row_actions
			.entry(action.column().to_string())
			.or_default()
			.push(action);
		self
	}

	/// Appends a mass action
	pub fn add_mass_action(&mut self, action: MassAction) -> &mut Self {
		self.mass_actions.push(action);
		self
	}

	/// Applies the configuration and computes derived state
	///
	/// Generates the grid URL, applies paging and ordering options, pushes
	/// the grid wide sortable/filterable switches onto every column and adds
	/// an actions column for each row action column id without a column.
	/// The default order and grouping columns must exist. Options set through
	/// the configuration setters are validated here.
	///
	/// May be called once; later calls fail with
	/// [`GridError::AlreadyInitialized`].
	pub fn initialize(&mut self) -> GridResult<()> {
		if self.initialized {
			return Err(GridError::AlreadyInitialized(self.name.clone()));
		}
		let options = self.config.options().clone();
		options.validate()?;

		self.persistence = options.persistence;
		if let Some(route) = &options.route {
			let parameters: HashMap<String, String> = options
				.route_parameters
				.iter()
				.map(|(k, v)| (k.clone(), v.clone()))
				.collect();
			self.route_url = Some(self.services.router().generate(route, &parameters)?);
		}
		if let Some(method) = &options.method {
			self.method = method.to_uppercase();
		}
		if let Some(max_per_page) = options.max_per_page {
			self.limits = vec![max_per_page];
		}
		self.max_results = options.max_results;
		if let Some(page) = options.page {
			self.page = page;
		}
		if let Some(sort_by) = options.sort_by {
			self.ensure_column(&sort_by)?;
			self.default_order = Some((sort_by, options.order));
		}
		if let Some(group_by) = options.group_by {
			self.ensure_column(&group_by)?;
			self.group_by = Some(group_by);
		}

		if !options.sortable || !options.filterable {
			for column in &self.columns {
				let mut column = column.write();
				if !options.sortable {
					column.set_sortable(false);
				}
				if !options.filterable {
					column.set_filterable(false);
				}
			}
		}

		let missing: Vec<String> = self
			.row_actions
			.keys()
			.filter(|id| !self.has_column(id))
			.cloned()
			.collect();
		for id in missing {
			let mut column_options = Options::new();
			column_options.insert(
				"title".to_string(),
				Value::String(options.actions_column_title.clone()),
			);
			let column = self
				.services
				.column_types()
				.create_column(&id, "actions", &column_options)?;
			self.columns.push(column);
		}

		self.initialized = true;
		tracing::debug!(
			grid = %self.name,
			columns = self.columns.len(),
			row_action_columns = self.row_actions.len(),
			"grid initialized"
		);
		Ok(())
	}

	fn ensure_column(&self, id: &str) -> GridResult<()> {
		if self.has_column(id) {
			Ok(())
		} else {
			Err(GridError::NotFound(id.to_string()))
		}
	}

	/// Grid name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Configuration the grid was built from
	pub fn config(&self) -> &GridConfig {
		&self.config
	}

	/// Whether [`Grid::initialize`] has run
	pub fn is_initialized(&self) -> bool {
		self.initialized
	}

	/// Column handles in render order
	pub fn columns(&self) -> &[SharedColumn] {
		&self.columns
	}

	/// Column ids in render order
	pub fn column_ids(&self) -> Vec<String> {
		self.columns
			.iter()
			.map(|column| column.read().id().to_string())
			.collect()
	}

	/// Returns `true` if a column with this id exists
	pub fn has_column(&self, id: &str) -> bool {
		self.columns.iter().any(|column| column.read().id() == id)
	}

	/// Returns the column with this id
	pub fn column(&self, id: &str) -> GridResult<SharedColumn> {
		self.columns
			.iter()
			.find(|column| column.read().id() == id)
			.cloned()
			.ok_or_else(|| GridError::NotFound(id.to_string()))
	}

	/// All row actions grouped by column id
	pub fn all_row_actions(&self) -> &RowActions {
		&self.row_actions
	}

	/// Row actions hosted by a column
	pub fn row_actions(&self, column_id: &str) -> &[RowAction] {
		self.row_actions
			.get(column_id)
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	/// Mass actions
	pub fn mass_actions(&self) -> &[MassAction] {
		&self.mass_actions
	}

	/// Grid URL
	pub fn route_url(&self) -> Option<&str> {
		self.route_url.as_deref()
	}

	/// HTTP method of the grid forms
	pub fn method(&self) -> &str {
		&self.method
	}

	/// Whether the grid state is persisted
	pub fn persistence(&self) -> bool {
		self.persistence
	}

	/// Page size limits
	pub fn limits(&self) -> &[usize] {
		&self.limits
	}

	/// Current page
	pub fn page(&self) -> usize {
		self.page
	}

	/// Row cap
	pub fn max_results(&self) -> Option<usize> {
		self.max_results
	}

	/// Default order
	pub fn default_order(&self) -> Option<(&str, SortOrder)> {
		self.default_order
			.as_ref()
			.map(|(column, order)| (column.as_str(), *order))
	}

	/// Grouping column
	pub fn group_by(&self) -> Option<&str> {
		self.group_by.as_deref()
	}

	fn is_granted(&self, role: Option<&str>) -> bool {
		role.is_none_or(|role| self.services.authorization_checker().is_granted(role))
	}

	/// Row actions of a column the current user may see, with URLs for `row`
	pub fn visible_row_actions(
		&self,
		column_id: &str,
		row: &Row,
	) -> GridResult<Vec<ResolvedRowAction>> {
		let primary_field = &self.config.options().primary_field;
		let mut resolved = Vec::new();

		for action in self.row_actions(column_id) {
			if !self.is_granted(action.role()) {
				tracing::trace!(grid = %self.name, action = action.title(), "row action hidden");
				continue;
			}
			let parameters = action.route_parameters_for(row, primary_field)?;
			let url = self.services.router().generate(action.route(), &parameters)?;
			resolved.push(ResolvedRowAction {
				title: action.title().to_string(),
				url,
				confirm_message: action
					.confirm()
					.then(|| action.confirm_message().to_string()),
				target: action.target().map(str::to_string),
				attributes: action.attributes().clone(),
			});
		}

		Ok(resolved)
	}

	/// Builds the template context for `rows`
	pub fn view(&self, rows: &[Row]) -> GridResult<GridView> {
		let visible: Vec<&SharedColumn> = self
			.columns
			.iter()
			.filter(|column| column.read().visible())
			.collect();

		let columns = visible
			.iter()
			.map(|column| {
				let column = column.read();
				ColumnView {
					id: column.id().to_string(),
					title: column.title().to_string(),
					column_type: column.column_type().to_string(),
					sortable: column.sortable(),
					filterable: column.filterable(),
					size: column.base().size(),
					align: column.base().align(),
				}
			})
			.collect();

		let rows = rows
			.iter()
			.map(|row| -> GridResult<RowView> {
				let cells = visible
					.iter()
					.map(|column| -> GridResult<CellView> {
						let column = column.read();
						Ok(CellView {
							column: column.id().to_string(),
							value: column.cell(row),
							actions: self.visible_row_actions(column.id(), row)?,
						})
					})
					.collect::<GridResult<Vec<_>>>()?;
				Ok(RowView { cells })
			})
			.collect::<GridResult<Vec<_>>>()?;

		let mass_actions = self
			.mass_actions
			.iter()
			.enumerate()
			.filter(|(_, action)| self.is_granted(action.role()))
			.map(|(index, action)| MassActionView {
				index,
				title: action.title().to_string(),
				confirm: action.confirm(),
			})
			.collect();

		Ok(GridView {
			name: self.name.clone(),
			route_url: self.route_url.clone(),
			method: self.method.clone(),
			persistence: self.persistence,
			columns,
			rows,
			mass_actions,
			limits: self.limits.clone(),
			page: self.page,
			max_results: self.max_results,
			default_order: self
				.default_order
				.as_ref()
				.map(|(column, order)| OrderView {
					column: column.clone(),
					order: *order,
				}),
			group_by: self.group_by.clone(),
		})
	}

	/// Renders `rows` with the configured template
	pub fn render(&self, rows: &[Row]) -> GridResult<String> {
		let view = self.view(rows)?;
		let context = serde_json::to_value(&view).map_err(|e| GridError::Render(e.to_string()))?;
		let template = &self.config.options().template;
		tracing::debug!(grid = %self.name, template = %template, rows = rows.len(), "rendering grid");
		self.services.renderer().render(template, &context)
	}

	/// Forwards a mass action to its controller
	///
	/// The controller receives the action parameters plus `grid`,
	/// `primary_keys` and `all_primary_keys`.
	pub fn execute_mass_action(
		&self,
		index: usize,
		primary_keys: Vec<Value>,
		all_primary_keys: bool,
	) -> GridResult<http::Response<Bytes>> {
		let action = self
			.mass_actions
			.get(index)
			.ok_or(GridError::MassActionNotFound(index))?;

		if let Some(role) = action.role() {
			if !self.services.authorization_checker().is_granted(role) {
				tracing::warn!(grid = %self.name, action = action.title(), role, "mass action denied");
				return Err(GridError::AccessDenied(format!(
					"mass action \"{}\" requires {role}",
					action.title()
				)));
			}
		}

		let mut attributes = action.parameters().clone();
		attributes.insert("grid".to_string(), Value::String(self.name.clone()));
		attributes.insert("primary_keys".to_string(), Value::Array(primary_keys));
		attributes.insert("all_primary_keys".to_string(), Value::Bool(all_primary_keys));

		tracing::debug!(grid = %self.name, controller = action.controller(), "forwarding mass action");
		self.services
			.dispatcher()
			.forward(action.controller(), &attributes)
	}
}

impl std::fmt::Debug for Grid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Grid")
			.field("name", &self.name)
			.field("columns", &self.column_ids())
			.field("row_actions", &self.row_actions)
			.field("initialized", &self.initialized)
			.finish_non_exhaustive()
	}
}
