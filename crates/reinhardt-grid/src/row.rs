//! Grid rows

use serde::Serialize;
use serde_json::Value;

/// One record displayed by a grid
///
/// Rows are plain field maps; the grid never fetches them itself.
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::Row;
/// use serde_json::json;
///
/// let row = Row::new()
///     .with_field("id", json!(7))
///     .with_field("name", json!("Alice"));
///
/// assert_eq!(row.field("name"), Some(&json!("Alice")));
/// assert_eq!(row.field_as_string("id").as_deref(), Some("7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
	fields: serde_json::Map<String, Value>,
}

impl Row {
	/// Creates an empty row
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field, replacing any previous value
	pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
		self.fields.insert(name.into(), value);
		self
	}

	/// Sets a field
	pub fn set_field(&mut self, name: impl Into<String>, value: Value) {
		self.fields.insert(name.into(), value);
	}

	/// Returns a field value
	pub fn field(&self, name: &str) -> Option<&Value> {
		self.fields.get(name)
	}

	/// Returns a field as a plain string (strings unquoted, `null` as absent)
	pub fn field_as_string(&self, name: &str) -> Option<String> {
		match self.fields.get(name)? {
			Value::Null => None,
			Value::String(s) => Some(s.clone()),
			other => Some(other.to_string()),
		}
	}

	/// Returns all fields
	pub fn fields(&self) -> &serde_json::Map<String, Value> {
		&self.fields
	}
}

impl From<serde_json::Map<String, Value>> for Row {
	fn from(fields: serde_json::Map<String, Value>) -> Self {
		Self { fields }
	}
}
