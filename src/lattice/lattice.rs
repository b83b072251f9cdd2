use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::geometry::Coordinate;
use crate::lattice::unit_cell::UnitCell;

/// A finite lattice: a unit cell repeated along its three cell vectors,
/// with per-axis periodicity flags.
///
/// Sites are enumerated in a fixed canonical order: cell index `i`
/// outermost, then `j`, then `k`, then the basis index `b` innermost.
/// `global_index` maps `(i, j, k, b)` to the position of that site in the
/// `sites()` vector.
#[derive(Debug, Clone)]
pub struct Lattice {
    unit_cell: UnitCell,
    repetitions: [usize; 3],
    periodic: [bool; 3],
}

impl Lattice {
    /// Creates a lattice from a unit cell, the repetition counts along
    /// each cell vector, and the per-axis periodicity flags.
    ///
    /// Every repetition count must be at least 1.
    pub fn new(unit_cell: UnitCell, repetitions: [usize; 3], periodic: [bool; 3]) -> Result<Self> {
        for (axis, &n) in repetitions.iter().enumerate() {
            if n == 0 {
                return Err(Error::InvalidRepetitions(format!(
                    "repetition count along axis {} is zero",
                    axis
                )));
            }
        }

        Ok(Self {
            unit_cell,
            repetitions,
            periodic,
        })
    }

    /// Returns the unit cell.
    pub fn unit_cell(&self) -> &UnitCell {
        &self.unit_cell
    }

    /// Returns the repetition counts along the three cell vectors.
    pub fn repetitions(&self) -> &[usize; 3] {
        &self.repetitions
    }

    /// Returns the per-axis periodicity flags.
    pub fn periodic(&self) -> &[bool; 3] {
        &self.periodic
    }

    /// Returns the total number of sites in the lattice.
    pub fn len(&self) -> usize {
        self.repetitions[0]
            * self.repetitions[1]
            * self.repetitions[2]
            * self.unit_cell.basis_size()
    }

    /// Always false: a lattice holds at least one repetition of at least
    /// one basis point.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the flat index of site `(i, j, k, b)` in canonical
    /// enumeration order.
    ///
    /// Indices are unchecked against the lattice extents; callers pass
    /// `i < nI`, `j < nJ`, `k < nK` and `b < basis_size`.
    pub fn global_index(&self, i: usize, j: usize, k: usize, b: usize) -> usize {
        let [_, n_j, n_k] = self.repetitions;
        let n_b = self.unit_cell.basis_size();
        ((i * n_j + j) * n_k + k) * n_b + b
    }

    /// Returns every lattice site in fractional coordinates of the
    /// original cell, in canonical enumeration order.
    pub fn sites(&self) -> Vec<Coordinate> {
        let [n_i, n_j, n_k] = self.repetitions;
        let basis = self.unit_cell.basis();

        let mut sites = Vec::with_capacity(self.len());
        for i in 0..n_i {
            for j in 0..n_j {
                for k in 0..n_k {
                    for point in basis {
                        sites.push(Coordinate::new(
                            point.x() + i as f64,
                            point.y() + j as f64,
                            point.z() + k as f64,
                        ));
                    }
                }
            }
        }
        sites
    }

    /// Returns every lattice site in cartesian coordinates, in canonical
    /// enumeration order. The fractional-to-cartesian mapping runs in
    /// parallel.
    pub fn cartesian_sites(&self) -> Vec<Coordinate> {
        self.sites()
            .par_iter()
            .map(|site| self.unit_cell.fractional_to_cartesian(site))
            .collect()
    }
}
