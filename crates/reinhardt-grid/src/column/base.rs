//! State shared by every column kind

use crate::error::{GridError, GridResult};
use crate::options::{Options, OptionsExt};
use serde::Serialize;

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
	/// Left aligned (default)
	#[default]
	Left,
	/// Centered
	Center,
	/// Right aligned
	Right,
}

impl std::str::FromStr for Align {
	type Err = GridError;

	fn from_str(s: &str) -> GridResult<Self> {
		match s {
			"left" => Ok(Align::Left),
			"center" => Ok(Align::Center),
			"right" => Ok(Align::Right),
			other => Err(GridError::InvalidOption(format!(
				"\"align\" must be left, center or right, \"{other}\" given"
			))),
		}
	}
}

/// Common column definition
///
/// Holds the identity, header and behaviour flags every column kind carries.
/// Built either fluently or from the column's option bag.
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::column::{Align, ColumnBase};
///
/// let base = ColumnBase::new("email")
///     .with_title("E-mail")
///     .with_sortable(false)
///     .with_align(Align::Center);
///
/// assert_eq!(base.id(), "email");
/// assert_eq!(base.field(), "email");
/// assert!(!base.sortable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnBase {
	id: String,
	title: String,
	field: String,
	sortable: bool,
	filterable: bool,
	visible: bool,
	size: Option<usize>,
	align: Align,
}

impl ColumnBase {
	/// Creates a column base whose title and field default to the id
	pub fn new(id: impl Into<String>) -> Self {
		let id = id.into();
		Self {
			title: id.clone(),
			field: id.clone(),
			id,
			sortable: true,
			filterable: true,
			visible: true,
			size: None,
			align: Align::Left,
		}
	}

	/// Creates a column base from the common option keys
	///
	/// Recognised keys: `title`, `field`, `sortable`, `filterable`, `visible`,
	/// `size` and `align`. Other keys are left to the column kind.
	pub fn from_options(id: impl Into<String>, options: &Options) -> GridResult<Self> {
		let mut base = Self::new(id);
		if let Some(title) = options.str_option("title")? {
			base.title = title.to_string();
		}
		if let Some(field) = options.str_option("field")? {
			base.field = field.to_string();
		}
		base.sortable = options.bool_option("sortable", base.sortable)?;
		base.filterable = options.bool_option("filterable", base.filterable)?;
		base.visible = options.bool_option("visible", base.visible)?;
		base.size = options.usize_option("size")?;
		if let Some(align) = options.str_option("align")? {
			base.align = align.parse()?;
		}
		Ok(base)
	}

	/// Sets the header text
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Sets the row field read by this column
	pub fn with_field(mut self, field: impl Into<String>) -> Self {
		self.field = field.into();
		self
	}

	/// Sets whether this column is sortable
	pub fn with_sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}

	/// Sets whether this column is filterable
	pub fn with_filterable(mut self, filterable: bool) -> Self {
		self.filterable = filterable;
		self
	}

	/// Sets the cell alignment
	pub fn with_align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	/// Column identifier
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Header text
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Row field read by this column
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Whether the column can be sorted
	pub fn sortable(&self) -> bool {
		self.sortable
	}

	/// Enables or disables sorting
	pub fn set_sortable(&mut self, sortable: bool) {
		self.sortable = sortable;
	}

	/// Whether the column can be filtered
	pub fn filterable(&self) -> bool {
		self.filterable
	}

	/// Enables or disables filtering
	pub fn set_filterable(&mut self, filterable: bool) {
		self.filterable = filterable;
	}

	/// Whether the column is displayed
	pub fn visible(&self) -> bool {
		self.visible
	}

	/// Hides or shows the column
	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	/// Width hint in pixels
	pub fn size(&self) -> Option<usize> {
		self.size
	}

	/// Cell alignment
	pub fn align(&self) -> Align {
		self.align
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_column_base_defaults() {
		let base = ColumnBase::new("name");
		assert_eq!(base.id(), "name");
		assert_eq!(base.title(), "name");
		assert_eq!(base.field(), "name");
		assert!(base.sortable());
		assert!(base.filterable());
		assert!(base.visible());
		assert_eq!(base.size(), None);
		assert_eq!(base.align(), Align::Left);
	}

	#[rstest]
	fn test_column_base_from_options() {
		let options = json!({
			"title": "Full name",
			"field": "full_name",
			"sortable": false,
			"visible": false,
			"size": 200,
			"align": "right"
		});
		let base = ColumnBase::from_options("name", options.as_object().unwrap()).unwrap();

		assert_eq!(base.title(), "Full name");
		assert_eq!(base.field(), "full_name");
		assert!(!base.sortable());
		assert!(base.filterable());
		assert!(!base.visible());
		assert_eq!(base.size(), Some(200));
		assert_eq!(base.align(), Align::Right);
	}

	#[rstest]
	fn test_column_base_rejects_bad_align() {
		let options = json!({"align": "justify"});
		let result = ColumnBase::from_options("name", options.as_object().unwrap());
		assert!(matches!(result, Err(GridError::InvalidOption(_))));
	}

	#[rstest]
	fn test_column_base_builder() {
		let base = ColumnBase::new("active")
			.with_title("Active")
			.with_field("is_active")
			.with_filterable(false);

		assert_eq!(base.title(), "Active");
		assert_eq!(base.field(), "is_active");
		assert!(!base.filterable());
	}
}
