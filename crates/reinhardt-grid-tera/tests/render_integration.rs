//! Rendering grids with the built-in Tera template

use reinhardt_grid::dispatch::ControllerMap;
use reinhardt_grid::routing::RouteTable;
use reinhardt_grid::security::GrantedRoles;
use reinhardt_grid::{
	GridFactory, GridServices, MassAction, Options, Row, RowAction,
};
use reinhardt_grid_tera::TeraGridRenderer;
use rstest::*;
use serde_json::json;
use std::sync::Arc;

#[fixture]
fn factory() -> GridFactory {
	let mut routes = RouteTable::new();
	routes.register_path("user_list", "/users/");
	routes.register_path("user_edit", "/users/{id}/edit/");

	GridFactory::new(GridServices::new(
		Arc::new(routes),
		Arc::new(GrantedRoles::superuser()),
		Arc::new(ControllerMap::new()),
		Arc::new(TeraGridRenderer::new().unwrap()),
	))
}

fn grid_options(value: serde_json::Value) -> Options {
	value.as_object().cloned().unwrap_or_default()
}

#[rstest]
fn test_renders_headers_cells_and_actions(factory: GridFactory) {
	let mut builder = factory
		.create_builder("users", grid_options(json!({"route": "user_list"})))
		.unwrap();
	builder
		.add("id", "integer", Options::new())
		.unwrap()
		.add("name", "text", grid_options(json!({"title": "Full name"})))
		.unwrap();
	builder.add_action(RowAction::new("Edit", "user_edit").with_confirm(true));
	let grid = builder.build().unwrap();

	let rows = vec![Row::new().with_field("id", json!(5)).with_field("name", json!("Alice"))];
	let html = grid.render(&rows).unwrap();

	assert!(html.contains(r#"id="grid_users""#));
	assert!(html.contains("Full name"));
	assert!(html.contains("Alice"));
	// Tera escapes `/` in HTML templates
	assert!(html.contains(r#"href="&#x2F;users&#x2F;5&#x2F;edit&#x2F;""#));
	assert!(html.contains(r#"data-confirm="Do you want to edit this row?""#));
}

#[rstest]
fn test_escapes_cell_values(factory: GridFactory) {
	let mut builder = factory.create_builder("notes", Options::new()).unwrap();
	builder.add("body", "text", Options::new()).unwrap();
	let grid = builder.build().unwrap();

	let rows = vec![Row::new().with_field("body", json!("<script>alert(1)</script>"))];
	let html = grid.render(&rows).unwrap();

	assert!(!html.contains("<script>"));
	assert!(html.contains("&lt;script&gt;"));
}

#[rstest]
fn test_empty_grid_and_mass_actions(factory: GridFactory) {
	let mut builder = factory
		.create_builder("users", grid_options(json!({"max_per_page": 10})))
		.unwrap();
	builder.add("id", "integer", Options::new()).unwrap();
	let mut grid = builder.build().unwrap();
	grid.add_mass_action(MassAction::new("Archive", "archive_users").with_confirm(true));

	let html = grid.render(&[]).unwrap();

	assert!(html.contains("No result"));
	assert!(html.contains(r#"<option value="0" data-confirm="1">Archive</option>"#));
	assert!(!html.contains("[limit]"));
}
