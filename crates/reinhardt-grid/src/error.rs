//! Error types for grid construction and rendering

use thiserror::Error;

/// Grid error type
#[derive(Debug, Error)]
pub enum GridError {
	/// A column type argument had the wrong shape
	#[error("Expected argument of type \"{expected}\", \"{actual}\" given")]
	UnexpectedType {
		/// Kind of value that was received
		actual: String,
		/// Accepted shapes
		expected: String,
	},

	/// No column is stored under the requested name
	#[error("The column with the name \"{0}\" does not exist.")]
	NotFound(String),

	/// The column factory does not know the requested type name
	#[error("Column type \"{0}\" is not registered")]
	UnknownColumnType(String),

	/// A grid or column option was unknown or had an invalid value
	#[error("Invalid option: {0}")]
	InvalidOption(String),

	/// `Grid::initialize` was called more than once
	#[error("Grid \"{0}\" has already been initialized")]
	AlreadyInitialized(String),

	/// The router does not know the requested route
	#[error("Route \"{0}\" does not exist")]
	RouteNotFound(String),

	/// A route placeholder had no value
	#[error("Missing parameter \"{parameter}\" for route \"{route}\"")]
	MissingRouteParameter {
		/// Route name
		route: String,
		/// Placeholder without a value
		parameter: String,
	},

	/// A route parameter value contains reserved URL characters
	#[error("Invalid value for parameter \"{parameter}\" of route \"{route}\"")]
	InvalidRouteParameter {
		/// Route name
		route: String,
		/// Offending parameter
		parameter: String,
	},

	/// Template rendering failed
	#[error("Template rendering error: {0}")]
	Render(String),

	/// Forwarding to a controller failed
	#[error("Dispatch error: {0}")]
	Dispatch(String),

	/// No mass action exists at the given index
	#[error("Mass action {0} does not exist")]
	MassActionNotFound(usize),

	/// The current user lacks the role required by an action
	#[error("Access denied: {0}")]
	AccessDenied(String),
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

impl GridError {
	/// Builds an [`GridError::UnexpectedType`] from the received kind and the accepted shapes
	pub fn unexpected_type(actual: impl Into<String>, expected: impl Into<String>) -> Self {
		Self::UnexpectedType {
			actual: actual.into(),
			expected: expected.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_not_found_message_names_column() {
		let err = GridError::NotFound("email".into());
		assert_eq!(
			err.to_string(),
			"The column with the name \"email\" does not exist."
		);
	}

	#[rstest]
	fn test_unexpected_type_message() {
		let err = GridError::unexpected_type("integer", "string, Column");
		assert_eq!(
			err.to_string(),
			"Expected argument of type \"string, Column\", \"integer\" given"
		);
	}
}
