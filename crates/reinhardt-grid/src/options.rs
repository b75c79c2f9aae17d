//! Option bags and typed grid options
//!
//! Grids and columns are configured with a loose [`Options`] map. Grid level
//! keys are parsed into [`GridOptions`]; unknown keys are rejected so typos
//! surface when the builder is created instead of silently doing nothing.
//!
//! ```
//! use reinhardt_grid::options::{GridOptions, SortOrder};
//!
//! let options = GridOptions::from_toml_str(r#"
//! route = "user_list"
//! max_per_page = 25
//! sort_by = "name"
//! order = "desc"
//! "#).unwrap();
//!
//! assert_eq!(options.max_per_page, Some(25));
//! assert_eq!(options.order, SortOrder::Desc);
//! ```

use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Loose option bag passed to grids and columns
pub type Options = serde_json::Map<String, Value>;

/// Page size limits used when `max_per_page` is not configured
pub const DEFAULT_LIMITS: [usize; 3] = [20, 50, 100];

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl SortOrder {
	/// Returns the lowercase keyword used in URLs and templates
	pub fn as_str(&self) -> &'static str {
		match self {
			SortOrder::Asc => "asc",
			SortOrder::Desc => "desc",
		}
	}
}

/// Typed view of the recognised grid option keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridOptions {
	/// Route used to build the grid URL
	pub route: Option<String>,
	/// Parameters for `route`
	pub route_parameters: BTreeMap<String, String>,
	/// Whether the grid state is persisted between requests
	pub persistence: bool,
	/// HTTP method used by the grid forms (`GET` or `POST`)
	pub method: Option<String>,
	/// Single page size limit replacing [`DEFAULT_LIMITS`]
	pub max_per_page: Option<usize>,
	/// Upper bound on the total number of rows
	pub max_results: Option<usize>,
	/// Initial page (zero based)
	pub page: Option<usize>,
	/// Column used for the default order
	pub sort_by: Option<String>,
	/// Direction of the default order
	pub order: SortOrder,
	/// Column used to group rows
	pub group_by: Option<String>,
	/// Grid wide sortable switch
	pub sortable: bool,
	/// Grid wide filterable switch
	pub filterable: bool,
	/// Template handed to the renderer
	pub template: String,
	/// Title of generated actions columns
	pub actions_column_title: String,
	/// Row field used as the default row action parameter
	pub primary_field: String,
}

impl Default for GridOptions {
	fn default() -> Self {
		Self {
			route: None,
			route_parameters: BTreeMap::new(),
			persistence: false,
			method: None,
			max_per_page: None,
			max_results: None,
			page: None,
			sort_by: None,
			order: SortOrder::Asc,
			group_by: None,
			sortable: true,
			filterable: true,
			template: "grid.html".to_string(),
			actions_column_title: "Actions".to_string(),
			primary_field: "id".to_string(),
		}
	}
}

impl GridOptions {
	/// Parses an option bag
	pub fn from_options(options: &Options) -> GridResult<Self> {
		let parsed: Self = serde_json::from_value(Value::Object(options.clone()))
			.map_err(|e| GridError::InvalidOption(e.to_string()))?;
		parsed.validate()?;
		Ok(parsed)
	}

	/// Parses grid options from a TOML document
	pub fn from_toml_str(source: &str) -> GridResult<Self> {
		let parsed: Self =
			toml::from_str(source).map_err(|e| GridError::InvalidOption(e.to_string()))?;
		parsed.validate()?;
		Ok(parsed)
	}

	/// Checks value ranges serde cannot express
	pub fn validate(&self) -> GridResult<()> {
		if self.max_per_page == Some(0) {
			return Err(GridError::InvalidOption(
				"max_per_page must be greater than zero".into(),
			));
		}
		if let Some(method) = &self.method {
			if !method.eq_ignore_ascii_case("GET") && !method.eq_ignore_ascii_case("POST") {
				return Err(GridError::InvalidOption(format!(
					"method must be GET or POST, \"{method}\" given"
				)));
			}
		}
		Ok(())
	}
}

/// Typed accessors over a loose [`Options`] bag
pub trait OptionsExt {
	/// Reads a string option
	fn str_option(&self, key: &str) -> GridResult<Option<&str>>;

	/// Reads a boolean option, falling back to `default` when absent
	fn bool_option(&self, key: &str, default: bool) -> GridResult<bool>;

	/// Reads a non-negative integer option
	fn usize_option(&self, key: &str) -> GridResult<Option<usize>>;
}

impl OptionsExt for Options {
	fn str_option(&self, key: &str) -> GridResult<Option<&str>> {
		match self.get(key) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::String(s)) => Ok(Some(s.as_str())),
			Some(other) => Err(invalid(key, "a string", other)),
		}
	}

	fn bool_option(&self, key: &str, default: bool) -> GridResult<bool> {
		match self.get(key) {
			None | Some(Value::Null) => Ok(default),
			Some(Value::Bool(b)) => Ok(*b),
			Some(other) => Err(invalid(key, "a boolean", other)),
		}
	}

	fn usize_option(&self, key: &str) -> GridResult<Option<usize>> {
		match self.get(key) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::Number(n)) => n
				.as_u64()
				.and_then(|n| usize::try_from(n).ok())
				.map(Some)
				.ok_or_else(|| invalid(key, "a non-negative integer", &Value::Number(n.clone()))),
			Some(other) => Err(invalid(key, "a non-negative integer", other)),
		}
	}
}

/// Name of a JSON value's kind, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(n) if n.is_f64() => "double",
		Value::Number(_) => "integer",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn invalid(key: &str, expected: &str, got: &Value) -> GridError {
	GridError::InvalidOption(format!(
		"\"{key}\" must be {expected}, {} given",
		value_kind(got)
	))
}
