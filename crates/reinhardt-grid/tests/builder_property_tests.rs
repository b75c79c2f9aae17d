//! GridBuilder property-based tests
//!
//! Property tests for column storage and grid construction.

mod fixtures;

use fixtures::*;
use proptest::prelude::*;
use reinhardt_grid::column::{TextColumn, shared};
use reinhardt_grid::{GridBuilder, GridError, Options};
use rstest::*;
use serde_json::Value;
use std::sync::Arc;

fn new_builder() -> GridBuilder {
	builder(factory(services(routes())))
}

fn non_string_value() -> impl Strategy<Value = Value> {
	prop_oneof![
		Just(Value::Null),
		any::<bool>().prop_map(Value::Bool),
		any::<i64>().prop_map(Value::from),
		prop::collection::vec("[a-z]{1,5}", 0..3).prop_map(Value::from),
	]
}

// ============================================================================
// Property-Based Tests: GridBuilder
// ============================================================================

proptest! {
	/// Test: build preserves insertion order
	///
	/// Category: Property
	/// Verifies that grid columns follow the order in which names were first added.
	#[rstest]
	fn prop_build_preserves_insertion_order(
		names in prop::collection::vec("[a-z]{1,8}", 1..12)
	) {
		let mut builder = new_builder();
		let mut expected: Vec<String> = Vec::new();

		for name in &names {
			builder.add(name.as_str(), "text", Options::new()).unwrap();
			if !expected.contains(name) {
				expected.push(name.clone());
			}
		}

		let grid = builder.build().unwrap();
		prop_assert_eq!(grid.column_ids(), expected);
	}

	/// Test: has follows add and remove
	///
	/// Category: Property
	/// Verifies that `has` is true after `add` and false after `remove`.
	#[rstest]
	fn prop_has_follows_add_remove(
		ops in prop::collection::vec(("[a-c]", any::<bool>()), 0..20)
	) {
		let mut builder = new_builder();

		for (name, add) in &ops {
			if *add {
				builder.add(name.as_str(), "text", Options::new()).unwrap();
				prop_assert!(builder.has(name));
			} else {
				builder.remove(name);
				prop_assert!(!builder.has(name));
				let missing = matches!(builder.get(name), Err(GridError::NotFound(_)));
				prop_assert!(missing);
			}
		}
	}

	/// Test: last write wins
	///
	/// Category: Property
	/// Verifies that the last column added under a name is the one returned.
	#[rstest]
	fn prop_last_added_column_wins(name in "[a-z]{1,8}", count in 1usize..5) {
		let mut builder = new_builder();
		let columns: Vec<_> = (0..count).map(|_| shared(TextColumn::new(name.clone()))).collect();

		for column in &columns {
			builder.add(name.as_str(), Arc::clone(column), Options::new()).unwrap();
		}

		prop_assert_eq!(builder.names().count(), 1);
		prop_assert!(Arc::ptr_eq(&builder.get(&name).unwrap(), &columns[count - 1]));
	}

	/// Test: non-string types are rejected
	///
	/// Category: Property
	/// Verifies that any non-string JSON type fails regardless of name.
	#[rstest]
	fn prop_non_string_type_rejected(name in "[a-z]{1,8}", column_type in non_string_value()) {
		let mut builder = new_builder();
		let result = builder.add(name.as_str(), column_type, Options::new());

		let rejected = matches!(result, Err(GridError::UnexpectedType { .. }));
		prop_assert!(rejected);
		prop_assert!(!builder.has(&name));
	}
}
