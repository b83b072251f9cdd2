//! CSV export of lattice sites.

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::geometry::Coordinate;
use crate::lattice::Lattice;

/// One exported lattice site.
#[derive(Debug, Serialize)]
pub struct SiteRecord {
    pub index: usize,
    pub i: usize,
    pub j: usize,
    pub k: usize,
    pub basis: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Writes every site of the lattice as CSV in fractional coordinates.
/// Returns the number of records written.
pub fn write_sites<W: Write>(writer: W, lattice: &Lattice) -> Result<usize> {
    write_records(writer, lattice, &lattice.sites())
}

/// Writes every site of the lattice as CSV in cartesian coordinates.
/// Returns the number of records written.
pub fn write_cartesian_sites<W: Write>(writer: W, lattice: &Lattice) -> Result<usize> {
    write_records(writer, lattice, &lattice.cartesian_sites())
}

/// Writes fractional sites to a CSV file at `path`.
pub fn export_sites_csv<P: AsRef<Path>>(path: P, lattice: &Lattice) -> Result<usize> {
    let file = File::create(path)?;
    write_sites(file, lattice)
}

fn write_records<W: Write>(writer: W, lattice: &Lattice, sites: &[Coordinate]) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let [n_i, n_j, n_k] = *lattice.repetitions();
    let n_b = lattice.unit_cell().basis_size();

    let mut index = 0;
    for i in 0..n_i {
        for j in 0..n_j {
            for k in 0..n_k {
                for b in 0..n_b {
                    let site = &sites[index];
                    csv_writer.serialize(SiteRecord {
                        index,
                        i,
                        j,
                        k,
                        basis: b,
                        x: site.x(),
                        y: site.y(),
                        z: site.z(),
                    })?;
                    index += 1;
                }
            }
        }
    }

    csv_writer.flush()?;
    Ok(index)
}
