//! Built-in column kinds

use super::{Column, ColumnBase};
use crate::error::{GridError, GridResult};
use crate::options::{Options, OptionsExt};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt::Write;

fn plain(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Column displaying values as plain text
#[derive(Debug, Clone)]
pub struct TextColumn {
	base: ColumnBase,
}

impl TextColumn {
	/// Creates a text column
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(id),
		}
	}

	/// Creates a text column from its option bag
	pub fn from_options(id: &str, options: &Options) -> GridResult<Self> {
		Ok(Self {
			base: ColumnBase::from_options(id, options)?,
		})
	}

	/// Replaces the common column state
	pub fn with_base(mut self, base: ColumnBase) -> Self {
		self.base = base;
		self
	}
}

impl Column for TextColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ColumnBase {
		&mut self.base
	}

	fn column_type(&self) -> &str {
		"text"
	}

	fn render_cell(&self, value: &Value) -> String {
		plain(value)
	}
}

/// Column displaying numbers
///
/// Registered as both `number` and `integer`. Integer columns drop the
/// fractional part; number columns honour the `precision` option.
#[derive(Debug, Clone)]
pub struct NumberColumn {
	base: ColumnBase,
	type_name: String,
	precision: Option<usize>,
}

impl NumberColumn {
	/// Creates a `number` column
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(id),
			type_name: "number".to_string(),
			precision: None,
		}
	}

	/// Creates an `integer` column
	pub fn integer(id: impl Into<String>) -> Self {
		Self {
			type_name: "integer".to_string(),
			..Self::new(id)
		}
	}

	/// Largest accepted `precision`
	pub const MAX_PRECISION: usize = 20;

	/// Creates a number column registered under `type_name`
	///
	/// Extra key: `precision` (decimals, at most [`Self::MAX_PRECISION`]).
	pub fn from_options(id: &str, type_name: &str, options: &Options) -> GridResult<Self> {
		let mut base = ColumnBase::from_options(id, options)?;
		if !options.contains_key("align") {
			base = base.with_align(super::Align::Right);
		}
		let precision = options.usize_option("precision")?;
		if let Some(given) = precision.filter(|&p| p > Self::MAX_PRECISION) {
			return Err(GridError::InvalidOption(format!(
				"\"precision\" must be at most {}, {given} given",
				Self::MAX_PRECISION
			)));
		}
		Ok(Self {
			base,
			type_name: type_name.to_string(),
			precision,
		})
	}

	/// Number of decimals displayed
	pub fn precision(&self) -> Option<usize> {
		self.precision
	}

	fn is_integer(&self) -> bool {
		self.type_name == "integer"
	}
}

impl Column for NumberColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ColumnBase {
		&mut self.base
	}

	fn column_type(&self) -> &str {
		&self.type_name
	}

	fn render_cell(&self, value: &Value) -> String {
		let number = match value {
			Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					if self.precision.is_none() || self.is_integer() {
						return i.to_string();
					}
				}
				n.as_f64()
			}
			Value::String(s) => s.trim().parse::<f64>().ok(),
			_ => None,
		};

		match number {
			Some(n) if self.is_integer() => format!("{:.0}", n.trunc()),
			Some(n) => match self.precision {
				Some(precision) => format!("{n:.precision$}"),
				None => n.to_string(),
			},
			None => plain(value),
		}
	}
}

/// Column displaying booleans with configurable labels
#[derive(Debug, Clone)]
pub struct BooleanColumn {
	base: ColumnBase,
	true_label: String,
	false_label: String,
}

impl BooleanColumn {
	/// Creates a boolean column labelled `true` / `false`
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(id).with_align(super::Align::Center),
			true_label: "true".to_string(),
			false_label: "false".to_string(),
		}
	}

	/// Creates a boolean column from its option bag
	///
	/// Extra keys: `true_label`, `false_label`.
	pub fn from_options(id: &str, options: &Options) -> GridResult<Self> {
		let mut base = ColumnBase::from_options(id, options)?;
		if !options.contains_key("align") {
			base = base.with_align(super::Align::Center);
		}
		Ok(Self {
			base,
			true_label: options.str_option("true_label")?.unwrap_or("true").to_string(),
			false_label: options
				.str_option("false_label")?
				.unwrap_or("false")
				.to_string(),
		})
	}

	/// Sets the labels shown for `true` and `false`
	pub fn with_labels(mut self, true_label: impl Into<String>, false_label: impl Into<String>) -> Self {
		self.true_label = true_label.into();
		self.false_label = false_label.into();
		self
	}
}

impl Column for BooleanColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ColumnBase {
		&mut self.base
	}

	fn column_type(&self) -> &str {
		"boolean"
	}

	fn render_cell(&self, value: &Value) -> String {
		let flag = match value {
			Value::Bool(b) => Some(*b),
			Value::Number(n) => n.as_i64().map(|n| n != 0),
			Value::String(s) => match s.as_str() {
				"1" | "true" => Some(true),
				"0" | "false" | "" => Some(false),
				_ => None,
			},
			_ => None,
		};
		match flag {
			Some(true) => self.true_label.clone(),
			Some(false) => self.false_label.clone(),
			None => String::new(),
		}
	}
}

/// Column displaying dates and timestamps
///
/// Registered as `datetime` (default format `%Y-%m-%d %H:%M:%S`) and `date`
/// (default format `%Y-%m-%d`). Accepts RFC 3339 strings, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DD` and unix timestamps in seconds.
#[derive(Debug, Clone)]
pub struct DateTimeColumn {
	base: ColumnBase,
	type_name: String,
	format: String,
}

impl DateTimeColumn {
	/// Creates a `datetime` column
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(id),
			type_name: "datetime".to_string(),
			format: Self::default_format("datetime").to_string(),
		}
	}

	/// Creates a date or datetime column from its option bag
	///
	/// Extra key: `format` (strftime syntax).
	pub fn from_options(id: &str, type_name: &str, options: &Options) -> GridResult<Self> {
		let format = options
			.str_option("format")?
			.unwrap_or(Self::default_format(type_name))
			.to_string();
		if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
			return Err(GridError::InvalidOption(format!(
				"\"format\" is not a valid date format: \"{format}\""
			)));
		}
		Ok(Self {
			base: ColumnBase::from_options(id, options)?,
			type_name: type_name.to_string(),
			format,
		})
	}

	fn default_format(type_name: &str) -> &'static str {
		if type_name == "date" {
			"%Y-%m-%d"
		} else {
			"%Y-%m-%d %H:%M:%S"
		}
	}

	fn parse(value: &Value) -> Option<NaiveDateTime> {
		match value {
			Value::String(s) => DateTime::parse_from_rfc3339(s)
				.map(|dt| dt.naive_local())
				.or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
				.or_else(|_| {
					NaiveDate::parse_from_str(s, "%Y-%m-%d")
						.map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
				})
				.ok(),
			Value::Number(n) => n
				.as_i64()
				.and_then(|secs| DateTime::from_timestamp(secs, 0))
				.map(|dt| dt.naive_utc()),
			_ => None,
		}
	}
}

impl Column for DateTimeColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ColumnBase {
		&mut self.base
	}

	fn column_type(&self) -> &str {
		&self.type_name
	}

	fn render_cell(&self, value: &Value) -> String {
		let Some(datetime) = Self::parse(value) else {
			return plain(value);
		};
		let mut out = String::new();
		match write!(out, "{}", datetime.format(&self.format)) {
			Ok(()) => out,
			Err(_) => plain(value),
		}
	}
}

/// Column displaying lists joined by a separator
#[derive(Debug, Clone)]
pub struct ArrayColumn {
	base: ColumnBase,
	separator: String,
}

impl ArrayColumn {
	/// Creates an array column joined with `", "`
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(id),
			separator: ", ".to_string(),
		}
	}

	/// Creates an array column from its option bag
	///
	/// Extra key: `separator`. Array columns are never sortable.
	pub fn from_options(id: &str, options: &Options) -> GridResult<Self> {
		let mut base = ColumnBase::from_options(id, options)?;
		base.set_sortable(false);
		Ok(Self {
			base,
			separator: options.str_option("separator")?.unwrap_or(", ").to_string(),
		})
	}
}

impl Column for ArrayColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ColumnBase {
		&mut self.base
	}

	fn column_type(&self) -> &str {
		"array"
	}

	fn render_cell(&self, value: &Value) -> String {
		match value {
			Value::Array(items) => items
				.iter()
				.map(plain)
				.collect::<Vec<_>>()
				.join(&self.separator),
			other => plain(other),
		}
	}
}

/// Column hosting row actions
///
/// Its cells carry no value; the grid attaches the row actions registered for
/// the column id when rendering.
#[derive(Debug, Clone)]
pub struct ActionsColumn {
	base: ColumnBase,
}

impl ActionsColumn {
	/// Creates an actions column with the given header
	pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
		Self {
			base: ColumnBase::new(id)
				.with_title(title)
				.with_sortable(false)
				.with_filterable(false),
		}
	}

	/// Creates an actions column from its option bag
	pub fn from_options(id: &str, options: &Options) -> GridResult<Self> {
		let mut base = ColumnBase::from_options(id, options)?;
		base.set_sortable(false);
		base.set_filterable(false);
		Ok(Self { base })
	}
}

impl Column for ActionsColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn base_mut(&mut self) -> &mut ColumnBase {
		&mut self.base
	}

	fn column_type(&self) -> &str {
		"actions"
	}

	fn render_cell(&self, _value: &Value) -> String {
		String::new()
	}

	fn set_sortable(&mut self, _sortable: bool) {}

	fn set_filterable(&mut self, _filterable: bool) {}
}
