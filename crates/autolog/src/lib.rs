//! # autolog
//!
//! Derive log table serialization for robot input classes.
//!
//! `#[derive(AutoLog)]` generates a `<Name>AutoLogged` wrapper that:
//! - writes every loggable field into a [`LogTable`] under its capitalized name
//! - reads fields back from a table, keeping current values for absent keys
//! - clones into an independent copy, lists included
//!
//! ## Quick Start
//!
//! ```rust
//! use autolog::prelude::*;
//!
//! #[derive(Debug, Default, AutoLog)]
//! pub struct Arm {
//!     pub angle_rad: f64,
//!     pub current_amps: Vec<f64>,
//! }
//!
//! let mut inputs = ArmAutoLogged::default();
//! inputs.angle_rad = 1.5;
//! inputs.current_amps = vec![2.0, 3.0];
//!
//! let mut table = LogTable::new();
//! inputs.to_log(&mut table);
//!
//! assert_eq!(table.get_double("AngleRad", 0.0), 1.5);
//! assert_eq!(table.get_double_array("CurrentAmps", &[]), vec![2.0, 3.0]);
//! ```
//!
//! ## Loggable Types
//!
//! | Field type | Table value |
//! |------------|-------------|
//! | `bool`, `i64`, `f32`, `f64`, `String` | `Boolean`, `Integer`, `Float`, `Double`, `String` |
//! | `Vec<u8>` | `Raw` |
//! | `Vec<bool>`, `Vec<i64>`, `Vec<f32>`, `Vec<f64>`, `Vec<String>` | `*Array` |
//!
//! Fields of any other type are left out; the reasons are listed in
//! `<Name>AutoLogged::DIAGNOSTICS`.
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`autolog_core`] - Runtime table, classification and generation engine
//! - [`autolog_macros`] - The `AutoLog` derive

// Re-export runtime types
pub use autolog_core::{LogTable, LogValue, LoggableInputs};

// Re-export the derive
pub use autolog_macros::AutoLog;

/// Generation engine, for build tools that drive it directly.
pub use autolog_core as codegen;

/// Prelude module for convenient imports.
///
/// Use `use autolog::prelude::*;` to import the derive, the table and the
/// `LoggableInputs` trait.
pub mod prelude {
    pub use crate::{AutoLog, LogTable, LogValue, LoggableInputs};
}
