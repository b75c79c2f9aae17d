//! Named route table used to build grid and action URLs
//!
//! Patterns use `{name}` placeholders. Parameters that do not appear in the
//! pattern are appended as a query string, sorted by name. Values are
//! percent-encoded; only RFC 3986 unreserved characters pass through.

use crate::error::{GridError, GridResult};
use crate::services::UrlGenerator;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::collections::HashMap;

/// Everything except `ALPHA / DIGIT / "-" / "." / "_" / "~"`
const PARAM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'.')
	.remove(b'_')
	.remove(b'~');

fn encode(value: &str) -> String {
	utf8_percent_encode(value, PARAM_ENCODE_SET).to_string()
}

/// Extract parameter names from a URL pattern
///
/// # Examples
///
/// ```
/// use reinhardt_grid::routing::extract_param_names;
///
/// let names = extract_param_names("/users/{id}/posts/{post_id}/");
/// assert_eq!(names, vec!["id", "post_id"]);
/// ```
pub fn extract_param_names(pattern: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if !name.is_empty() {
				names.push(name);
			}
		}
	}

	names
}

/// Rejects values that would change the URL structure
fn is_safe_param(value: &str) -> bool {
	!value.is_empty()
		&& !value.contains("..")
		&& !value
			.chars()
			.any(|c| matches!(c, '/' | '\\' | '?' | '#' | '&' | '=' | '%') || c.is_control())
}

/// Route names mapped to URL patterns
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::routing::RouteTable;
/// use reinhardt_grid::UrlGenerator;
/// use std::collections::HashMap;
///
/// let mut routes = RouteTable::new();
/// routes.register_path("user_edit", "/users/{id}/edit/");
///
/// let params = HashMap::from([("id".to_string(), "7".to_string())]);
/// assert_eq!(routes.generate("user_edit", &params).unwrap(), "/users/7/edit/");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
	routes: HashMap<String, String>,
}

impl RouteTable {
	/// Creates an empty route table
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers (or replaces) a named pattern
	pub fn register_path(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.routes.insert(name.into(), pattern.into());
	}

	/// Returns the pattern registered under `name`
	pub fn pattern(&self, name: &str) -> Option<&str> {
		self.routes.get(name).map(String::as_str)
	}

	/// Single-pass placeholder substitution
	fn substitute(route: &str, pattern: &str, params: &HashMap<String, String>) -> GridResult<String> {
		let mut result = String::with_capacity(pattern.len());
		let mut chars = pattern.chars();

		while let Some(ch) = chars.next() {
			if ch == '{' {
				let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
				let value = params
					.get(&name)
					.ok_or_else(|| GridError::MissingRouteParameter {
						route: route.to_string(),
						parameter: name.clone(),
					})?;
				result.push_str(&encode(value));
			} else {
				result.push(ch);
			}
		}

		Ok(result)
	}
}

impl UrlGenerator for RouteTable {
	fn generate(&self, route: &str, parameters: &HashMap<String, String>) -> GridResult<String> {
		let pattern = self
			.routes
			.get(route)
			.ok_or_else(|| GridError::RouteNotFound(route.to_string()))?;

		for (name, value) in parameters {
			if !is_safe_param(value) {
				return Err(GridError::InvalidRouteParameter {
					route: route.to_string(),
					parameter: name.clone(),
				});
			}
		}

		let mut url = Self::substitute(route, pattern, parameters)?;

		let placeholders = extract_param_names(pattern);
		let mut extra: Vec<(&String, &String)> = parameters
			.iter()
			.filter(|(name, _)| !placeholders.contains(*name))
			.collect();
		if !extra.is_empty() {
			extra.sort();
			let query: Vec<String> = extra
				.into_iter()
				.map(|(name, value)| format!("{}={}", encode(name), encode(value)))
				.collect();
			url.push('?');
			url.push_str(&query.join("&"));
		}

		Ok(url)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn routes() -> RouteTable {
		let mut routes = RouteTable::new();
		routes.register_path("user_list", "/users/");
		routes.register_path("team_user", "/teams/{team}/users/{id}/");
		routes
	}

	fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
		pairs
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_generate_substitutes_placeholders(routes: RouteTable) {
		let url = routes
			.generate("team_user", &params(&[("team", "core"), ("id", "42")]))
			.unwrap();
		assert_eq!(url, "/teams/core/users/42/");
	}

	#[rstest]
	fn test_extra_parameters_become_sorted_query(routes: RouteTable) {
		let url = routes
			.generate("user_list", &params(&[("page", "2"), ("order", "desc")]))
			.unwrap();
		assert_eq!(url, "/users/?order=desc&page=2");
	}

	#[rstest]
	fn test_unknown_route(routes: RouteTable) {
		let result = routes.generate("missing", &HashMap::new());
		assert!(matches!(result, Err(GridError::RouteNotFound(r)) if r == "missing"));
	}

	#[rstest]
	fn test_missing_placeholder(routes: RouteTable) {
		let result = routes.generate("team_user", &params(&[("team", "core")]));
		assert!(matches!(
			result,
			Err(GridError::MissingRouteParameter { parameter, .. }) if parameter == "id"
		));
	}

	#[rstest]
	#[case("Alice Smith", "/teams/core/users/Alice%20Smith/")]
	#[case("zoë", "/teams/core/users/zo%C3%AB/")]
	#[case("a-b_c.d~e", "/teams/core/users/a-b_c.d~e/")]
	#[case("<b>", "/teams/core/users/%3Cb%3E/")]
	fn test_values_are_percent_encoded(routes: RouteTable, #[case] value: &str, #[case] expected: &str) {
		let url = routes
			.generate("team_user", &params(&[("team", "core"), ("id", value)]))
			.unwrap();
		assert_eq!(url, expected);
	}

	#[rstest]
	fn test_query_values_are_percent_encoded(routes: RouteTable) {
		let url = routes
			.generate("user_list", &params(&[("search", "Alice Smith")]))
			.unwrap();
		assert_eq!(url, "/users/?search=Alice%20Smith");
	}

	#[rstest]
	#[case("../admin")]
	#[case("1/2")]
	#[case("1?x=2")]
	#[case("%2F")]
	#[case("")]
	fn test_unsafe_values_rejected(routes: RouteTable, #[case] value: &str) {
		let result = routes.generate("team_user", &params(&[("team", "core"), ("id", value)]));
		assert!(matches!(result, Err(GridError::InvalidRouteParameter { .. })));
	}
}
