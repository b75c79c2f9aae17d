//! Common test fixtures for reinhardt-grid tests

#![allow(dead_code)]

use bytes::Bytes;
use mockall::mock;
use reinhardt_grid::dispatch::ControllerMap;
use reinhardt_grid::routing::RouteTable;
use reinhardt_grid::security::GrantedRoles;
use reinhardt_grid::{
	GridBuilder, GridFactory, GridResult, GridServices, Options, Row, SharedColumn,
	TemplateRenderer,
};
use rstest::*;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

mock! {
	/// Column factory with verifiable calls
	pub ColumnFactory {}

	impl reinhardt_grid::ColumnFactory for ColumnFactory {
		fn create_column(&self, name: &str, type_name: &str, options: &Options) -> GridResult<SharedColumn>;
	}
}

mock! {
	/// Router with verifiable calls
	pub UrlGenerator {}

	impl reinhardt_grid::UrlGenerator for UrlGenerator {
		fn generate(&self, route: &str, parameters: &HashMap<String, String>) -> GridResult<String>;
	}
}

mock! {
	/// Authorization checker with verifiable calls
	pub AuthorizationChecker {}

	impl reinhardt_grid::AuthorizationChecker for AuthorizationChecker {
		fn is_granted(&self, role: &str) -> bool;
	}
}

mock! {
	/// Request dispatcher with verifiable calls
	pub RequestDispatcher {}

	impl reinhardt_grid::RequestDispatcher for RequestDispatcher {
		fn forward(&self, controller: &str, attributes: &Options) -> GridResult<http::Response<Bytes>>;
	}
}

mock! {
	/// Template renderer with verifiable calls
	pub TemplateRenderer {}

	impl reinhardt_grid::TemplateRenderer for TemplateRenderer {
		fn render(&self, template: &str, context: &serde_json::Value) -> GridResult<String>;
	}
}

/// Renderer returning the context as JSON text
pub struct JsonRenderer;

impl TemplateRenderer for JsonRenderer {
	fn render(&self, _template: &str, context: &serde_json::Value) -> GridResult<String> {
		Ok(context.to_string())
	}
}

/// Fixture providing routes used by the user grid
#[fixture]
pub fn routes() -> RouteTable {
	let mut routes = RouteTable::new();
	routes.register_path("user_list", "/users/");
	routes.register_path("user_edit", "/users/{id}/edit/");
	routes.register_path("user_delete", "/users/{id}/delete/");
	routes.register_path("team_user", "/teams/{team}/users/{id}/");
	routes
}

/// Fixture providing services backed by the reference collaborators
#[fixture]
pub fn services(routes: RouteTable) -> GridServices {
	services_with_roles(routes, GrantedRoles::new(["ROLE_USER"]))
}

/// Builds services for the given roles
pub fn services_with_roles(routes: RouteTable, roles: GrantedRoles) -> GridServices {
	let mut controllers = ControllerMap::new();
	controllers.register("archive_users", |attributes| {
		Ok(http::Response::new(Bytes::from(
			serde_json::Value::Object(attributes.clone()).to_string(),
		)))
	});

	GridServices::new(
		Arc::new(routes),
		Arc::new(roles),
		Arc::new(controllers),
		Arc::new(JsonRenderer),
	)
}

/// Fixture providing a grid factory over [`services`]
#[fixture]
pub fn factory(services: GridServices) -> GridFactory {
	GridFactory::new(services)
}

/// Fixture providing an empty builder for the `users` grid
#[fixture]
pub fn builder(factory: GridFactory) -> GridBuilder {
	factory
		.create_builder("users", Options::new())
		.expect("empty options are valid")
}

/// Fixture providing sample user rows
#[fixture]
pub fn user_rows() -> Vec<Row> {
	vec![
		Row::new()
			.with_field("id", json!(1))
			.with_field("name", json!("Alice"))
			.with_field("active", json!(true))
			.with_field("team", json!("core")),
		Row::new()
			.with_field("id", json!(2))
			.with_field("name", json!("Bob"))
			.with_field("active", json!(false))
			.with_field("team", json!("docs")),
	]
}

/// Builds an option bag from JSON object literal
pub fn options(value: serde_json::Value) -> Options {
	match value {
		serde_json::Value::Object(map) => map,
		other => panic!("options must be a JSON object, got {other}"),
	}
}
