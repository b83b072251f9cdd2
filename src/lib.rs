//! latticekit - lattice site geometry for Rust
//!
//! latticekit builds and queries Bravais-lattice site geometries: a
//! `Coordinate` value type with exact lexicographic ordering, unit cells
//! with fractional basis points, and finite lattices that enumerate their
//! sites in a fixed canonical order.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use latticekit::{Coordinate, Lattice, UnitCell};
//!
//! let cell = UnitCell::new(
//!     [[2.3, 0.0, 0.0], [2.4, 3.0, 0.0], [0.0, 0.0, 11.8]],
//!     vec![Coordinate::new(0.0, 0.0, 0.0), Coordinate::new(0.5, 0.5, 0.0)],
//! )?;
//!
//! let lattice = Lattice::new(cell, [2, 1, 1], [true, true, false])?;
//! assert_eq!(lattice.len(), 4);
//! assert_eq!(lattice.sites()[2], Coordinate::new(1.0, 0.0, 0.0));
//! # Ok::<(), latticekit::Error>(())
//! ```
//!
//! ## Coordinates as ordered keys
//!
//! ```
//! use latticekit::Coordinate;
//! use std::collections::BTreeMap;
//!
//! let mut occupancy = BTreeMap::new();
//! occupancy.insert(Coordinate::new(0.0, 0.0, 0.0), "A");
//! occupancy.insert(Coordinate::new(0.5, 0.5, 0.0), "B");
//!
//! assert_eq!(occupancy[&Coordinate::new(0.5, 0.5, 0.0)], "B");
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod lattice;

pub use config::LatticeConfig;
pub use error::{Error, Result};
pub use geometry::Coordinate;
pub use lattice::{Lattice, UnitCell};
