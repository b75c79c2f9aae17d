//! Grid construction module.
//!
//! Columns, row and mass actions, options and the builder that assembles them.
//!
//! # Examples
//!
//! ```rust,no_run
//! use reinhardt_datagrid::grid::{GridBuilder, GridFactory, RowAction};
//! ```

pub use reinhardt_grid::*;
