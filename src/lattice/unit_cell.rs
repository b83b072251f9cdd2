use crate::error::{Error, Result};
use crate::geometry::Coordinate;

/// A crystallographic unit cell: three cell vectors and the fractional
/// basis points of the sites inside the cell.
#[derive(Debug, Clone)]
pub struct UnitCell {
    cell_vectors: [[f64; 3]; 3],
    basis_points: Vec<Coordinate>,
}

impl UnitCell {
    /// Creates a unit cell from its cell vectors and basis points.
    ///
    /// Basis points are fractional: every component must lie in the
    /// half-open interval [0, 1). At least one basis point is required.
    pub fn new(cell_vectors: [[f64; 3]; 3], basis_points: Vec<Coordinate>) -> Result<Self> {
        if basis_points.is_empty() {
            return Err(Error::InvalidBasis(
                "at least one basis point is required".to_string(),
            ));
        }

        for (n, point) in basis_points.iter().enumerate() {
            for axis in 0..3 {
                let value = point[axis];
                if !(0.0..1.0).contains(&value) {
                    return Err(Error::InvalidBasis(format!(
                        "basis point {} component {} is {}, must be in [0, 1)",
                        n, axis, value
                    )));
                }
            }
        }

        Ok(Self {
            cell_vectors,
            basis_points,
        })
    }

    /// Returns the three cell vectors, row-major.
    pub fn cell_vectors(&self) -> &[[f64; 3]; 3] {
        &self.cell_vectors
    }

    /// Returns the fractional basis points.
    pub fn basis(&self) -> &[Coordinate] {
        &self.basis_points
    }

    /// Returns the number of basis points in the cell.
    pub fn basis_size(&self) -> usize {
        self.basis_points.len()
    }

    /// Maps a fractional coordinate to cartesian space through the cell
    /// vectors.
    pub fn fractional_to_cartesian(&self, fractional: &Coordinate) -> Coordinate {
        let v = &self.cell_vectors;
        let (a, b, c) = (fractional.x(), fractional.y(), fractional.z());
        Coordinate::new(
            a * v[0][0] + b * v[1][0] + c * v[2][0],
            a * v[0][1] + b * v[1][1] + c * v[2][1],
            a * v[0][2] + b * v[1][2] + c * v[2][2],
        )
    }
}
