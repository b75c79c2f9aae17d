//! Row and mass actions
//!
//! Row actions are links attached to each displayed row (edit, delete, ...),
//! grouped under the id of the column that hosts them. Mass actions apply to
//! a selection of rows and are forwarded to a controller.

use crate::error::{GridError, GridResult};
use crate::options::Options;
use crate::row::Row;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Column id used by row actions that do not name a column
pub const ACTIONS_COLUMN: &str = "__actions";

/// Action displayed on every row
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::{Row, RowAction};
/// use serde_json::json;
///
/// let action = RowAction::new("Edit", "user_edit")
///     .with_role("ROLE_ADMIN")
///     .with_route_parameters(["id", "slug"]);
///
/// let row = Row::new().with_field("id", json!(3)).with_field("slug", json!("alice"));
/// let params = action.route_parameters_for(&row, "id").unwrap();
/// assert_eq!(params["id"], "3");
/// assert_eq!(params["slug"], "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowAction {
	title: String,
	route: String,
	column: String,
	confirm: bool,
	confirm_message: String,
	target: Option<String>,
	role: Option<String>,
	route_parameters: Vec<String>,
	route_parameters_mapping: BTreeMap<String, String>,
	attributes: BTreeMap<String, String>,
}

impl RowAction {
	/// Creates an action linking `title` to `route`
	pub fn new(title: impl Into<String>, route: impl Into<String>) -> Self {
		let title = title.into();
		Self {
			confirm_message: format!("Do you want to {} this row?", title.to_lowercase()),
			title,
			route: route.into(),
			column: ACTIONS_COLUMN.to_string(),
			confirm: false,
			target: None,
			role: None,
			route_parameters: Vec::new(),
			route_parameters_mapping: BTreeMap::new(),
			attributes: BTreeMap::new(),
		}
	}

	/// Hosts the action in another column
	pub fn with_column(mut self, column: impl Into<String>) -> Self {
		self.column = column.into();
		self
	}

	/// Asks for confirmation before following the link
	pub fn with_confirm(mut self, confirm: bool) -> Self {
		self.confirm = confirm;
		self
	}

	/// Replaces the confirmation message
	pub fn with_confirm_message(mut self, message: impl Into<String>) -> Self {
		self.confirm_message = message.into();
		self
	}

	/// Sets the link target (`_blank`, ...)
	pub fn with_target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	/// Restricts the action to users holding `role`
	pub fn with_role(mut self, role: impl Into<String>) -> Self {
		self.role = Some(role.into());
		self
	}

	/// Row fields passed as route parameters
	pub fn with_route_parameters<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.route_parameters = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Passes row field `field` under the route parameter name `parameter`
	pub fn with_route_parameter_mapping(
		mut self,
		field: impl Into<String>,
		parameter: impl Into<String>,
	) -> Self {
		self.route_parameters_mapping
			.insert(field.into(), parameter.into());
		self
	}

	/// Adds an HTML attribute to the rendered link
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Link text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Route name
	pub fn route(&self) -> &str {
		&self.route
	}

	/// Id of the hosting column
	pub fn column(&self) -> &str {
		&self.column
	}

	/// Whether confirmation is required
	pub fn confirm(&self) -> bool {
		self.confirm
	}

	/// Confirmation message
	pub fn confirm_message(&self) -> &str {
		&self.confirm_message
	}

	/// Link target
	pub fn target(&self) -> Option<&str> {
		self.target.as_deref()
	}

	/// Required role
	pub fn role(&self) -> Option<&str> {
		self.role.as_deref()
	}

	/// Extra HTML attributes
	pub fn attributes(&self) -> &BTreeMap<String, String> {
		&self.attributes
	}

	/// Resolves the route parameters for one row
	///
	/// Without configured parameters the row's `primary_field` is used.
	/// A parameter whose field is missing or `null` is an error.
	pub fn route_parameters_for(
		&self,
		row: &Row,
		primary_field: &str,
	) -> GridResult<HashMap<String, String>> {
		let fields: Vec<&str> = if self.route_parameters.is_empty() {
			vec![primary_field]
		} else {
			self.route_parameters.iter().map(String::as_str).collect()
		};

		fields
			.into_iter()
			.map(|field| {
				let name = self
					.route_parameters_mapping
					.get(field)
					.map(String::as_str)
					.unwrap_or(field);
				let value = row.field_as_string(field).ok_or_else(|| {
					GridError::MissingRouteParameter {
						route: self.route.clone(),
						parameter: name.to_string(),
					}
				})?;
				Ok((name.to_string(), value))
			})
			.collect()
	}
}

/// Action applied to a selection of rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MassAction {
	title: String,
	controller: String,
	confirm: bool,
	role: Option<String>,
	parameters: Options,
}

impl MassAction {
	/// Creates a mass action forwarding to `controller`
	pub fn new(title: impl Into<String>, controller: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			controller: controller.into(),
			confirm: false,
			role: None,
			parameters: Options::new(),
		}
	}

	/// Asks for confirmation before executing
	pub fn with_confirm(mut self, confirm: bool) -> Self {
		self.confirm = confirm;
		self
	}

	/// Restricts the action to users holding `role`
	pub fn with_role(mut self, role: impl Into<String>) -> Self {
		self.role = Some(role.into());
		self
	}

	/// Adds an attribute forwarded with the selection
	pub fn with_parameter(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
		self.parameters.insert(name.into(), value);
		self
	}

	/// Button text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Controller receiving the selection
	pub fn controller(&self) -> &str {
		&self.controller
	}

	/// Whether confirmation is required
	pub fn confirm(&self) -> bool {
		self.confirm
	}

	/// Required role
	pub fn role(&self) -> Option<&str> {
		self.role.as_deref()
	}

	/// Extra attributes
	pub fn parameters(&self) -> &Options {
		&self.parameters
	}
}
