//! JSON lattice descriptions consumed by the command-line tool.

use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::geometry::Coordinate;
use crate::lattice::{Lattice, UnitCell};

/// A lattice description as found in a JSON config file.
#[derive(Debug, Deserialize)]
pub struct LatticeConfig {
    pub cell_vectors: [[f64; 3]; 3],
    pub basis_points: Vec<[f64; 3]>,
    pub repetitions: [usize; 3],
    #[serde(default = "default_periodic")]
    pub periodic: [bool; 3],
}

fn default_periodic() -> [bool; 3] {
    [true, true, true]
}

impl LatticeConfig {
    /// Reads a config from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads a config from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    /// Builds the lattice this config describes.
    pub fn build(&self) -> Result<Lattice> {
        let basis = self
            .basis_points
            .iter()
            .map(|&[x, y, z]| Coordinate::new(x, y, z))
            .collect();
        let unit_cell = UnitCell::new(self.cell_vectors, basis)?;
        Lattice::new(unit_cell, self.repetitions, self.periodic)
    }
}
