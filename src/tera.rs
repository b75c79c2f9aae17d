//! Tera rendering module.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_datagrid::tera::TeraGridRenderer;
//!
//! let renderer = TeraGridRenderer::new().unwrap();
//! assert!(renderer.has_template("grid.html"));
//! ```

pub use reinhardt_grid_tera::*;
