//! Unit cells and repeated lattices built from them.

pub mod lattice;
pub mod unit_cell;

pub use lattice::Lattice;
pub use unit_cell::UnitCell;
