//! Spatial primitives shared by the lattice modules.

pub mod coordinate;

pub use coordinate::Coordinate;
