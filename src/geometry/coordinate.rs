use std::cmp::Ordering;
use std::ops::{Index, IndexMut, Sub};

/// A point or displacement in 3D cartesian space.
///
/// Components are stored as a fixed `[f64; 3]` with index 0 = x, 1 = y,
/// 2 = z, so named access and indexed access always refer to the same
/// storage. Copies are independent value copies.
///
/// Ordering is lexicographic on (x, y, z) using `f64::total_cmp` per
/// component, so the type carries a genuine total order and can key a
/// `BTreeMap`/`BTreeSet`. Two consequences of total_cmp to be aware of:
/// -0.0 sorts before +0.0, and NaN participates in the order instead of
/// comparing false. No epsilon tolerance is applied anywhere.
#[derive(Debug, Clone, Copy)]
pub struct Coordinate([f64; 3]);

impl Coordinate {
    /// Creates a coordinate from its three components.
    ///
    /// The values are stored exactly as given; non-finite components are
    /// accepted and passed through.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    /// Returns the x component.
    pub fn x(&self) -> f64 {
        self.0[0]
    }

    /// Returns the y component.
    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Returns the z component.
    pub fn z(&self) -> f64 {
        self.0[2]
    }

    /// Returns a mutable borrow of the x component, aliased with `self[0]`.
    pub fn x_mut(&mut self) -> &mut f64 {
        &mut self.0[0]
    }

    /// Returns a mutable borrow of the y component, aliased with `self[1]`.
    pub fn y_mut(&mut self) -> &mut f64 {
        &mut self.0[1]
    }

    /// Returns a mutable borrow of the z component, aliased with `self[2]`.
    pub fn z_mut(&mut self) -> &mut f64 {
        &mut self.0[2]
    }

    /// Returns the Euclidean distance to another coordinate.
    ///
    /// The formula is symmetric in its operands, so
    /// `a.distance(&b) == b.distance(&a)` holds exactly.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.0[0] - other.0[0];
        let dy = self.0[1] - other.0[1];
        let dz = self.0[2] - other.0[2];
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Checked component access: panics if `index` is not in 0..=2.
impl Index<usize> for Coordinate {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Checked mutable component access: panics if `index` is not in 0..=2.
impl IndexMut<usize> for Coordinate {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.0[index]
    }
}

/// Element-wise vector subtraction; neither operand is modified.
impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, other: Coordinate) -> Coordinate {
        Coordinate([
            self.0[0] - other.0[0],
            self.0[1] - other.0[1],
            self.0[2] - other.0[2],
        ])
    }
}

impl Ord for Coordinate {
    /// Lexicographic order: x decides first, then y, then z.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0[0]
            .total_cmp(&other.0[0])
            .then_with(|| self.0[1].total_cmp(&other.0[1]))
            .then_with(|| self.0[2].total_cmp(&other.0[2]))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Coordinate {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::BTreeSet;

    #[test]
    fn test_construction_and_query() {
        let c = Coordinate::new(0.1, 0.2, 0.3);
        assert_abs_diff_eq!(c.x(), 0.1, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c.y(), 0.2, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c.z(), 0.3, epsilon = 1.0e-14);
    }

    #[test]
    fn test_construction_stores_exact_values() {
        let c = Coordinate::new(0.1, 0.2, 0.3);
        assert_eq!(c.x(), 0.1);
        assert_eq!(c.y(), 0.2);
        assert_eq!(c.z(), 0.3);
    }

    #[test]
    fn test_non_finite_components_pass_through() {
        let c = Coordinate::new(f64::INFINITY, f64::NEG_INFINITY, f64::NAN);
        assert_eq!(c.x(), f64::INFINITY);
        assert_eq!(c.y(), f64::NEG_INFINITY);
        assert!(c.z().is_nan());
    }

    #[test]
    fn test_less_operator_two_equal() {
        let c1 = Coordinate::new(0.1, 0.2, 0.3);
        let c2 = Coordinate::new(0.1, 0.2, 0.3);
        assert!(!(c1 < c2));
        assert!(!(c2 < c1));
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_less_operator_smaller_in_x() {
        let c1 = Coordinate::new(0.099999, 0.2, 0.3);
        let c2 = Coordinate::new(0.1, 0.2, 0.3);
        assert!(c1 < c2);
        assert!(!(c2 < c1));
    }

    #[test]
    fn test_less_operator_smaller_in_y() {
        let c1 = Coordinate::new(0.1, 0.19999999999, 0.3);
        let c2 = Coordinate::new(0.1, 0.2, 0.3);
        assert!(c1 < c2);
        assert!(!(c2 < c1));
    }

    #[test]
    fn test_less_operator_smaller_in_z() {
        let c1 = Coordinate::new(0.1, 0.2, 0.299999999);
        let c2 = Coordinate::new(0.1, 0.2, 0.3);
        assert!(c1 < c2);
        assert!(!(c2 < c1));
    }

    #[test]
    fn test_ordering_is_transitive() {
        let p = Coordinate::new(-1.0, 0.0, 9.0);
        let q = Coordinate::new(-1.0, 0.5, -3.0);
        let r = Coordinate::new(2.0, -7.0, 0.0);
        assert!(p < q);
        assert!(q < r);
        assert!(p < r);
    }

    #[test]
    fn test_ordering_keys_a_btree_set() {
        let mut set = BTreeSet::new();
        set.insert(Coordinate::new(0.1, 0.2, 0.3));
        set.insert(Coordinate::new(0.1, 0.2, 0.3));
        set.insert(Coordinate::new(0.0, 0.2, 0.3));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Coordinate::new(0.1, 0.2, 0.3)));
    }

    #[test]
    fn test_distance_unit_cube_diagonal() {
        let c1 = Coordinate::new(0.0, 0.0, 0.0);
        let c2 = Coordinate::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(c2.distance(&c1), 3.0_f64.sqrt(), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.distance(&c2), 3.0_f64.sqrt(), epsilon = 1.0e-14);
    }

    #[test]
    fn test_distance_across_origin() {
        let c1 = Coordinate::new(-1.0, -1.0, -1.0);
        let c2 = Coordinate::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(c2.distance(&c1), 2.0 * 3.0_f64.sqrt(), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.distance(&c2), 2.0 * 3.0_f64.sqrt(), epsilon = 1.0e-14);
    }

    #[test]
    fn test_distance_mixed_components() {
        let c1 = Coordinate::new(0.0, 0.0, 0.0);
        let c2 = Coordinate::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(c2.distance(&c1), (1.0_f64 + 4.0 + 9.0).sqrt(), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.distance(&c2), (1.0_f64 + 4.0 + 9.0).sqrt(), epsilon = 1.0e-14);
    }

    #[test]
    fn test_distance_shared_x() {
        let c1 = Coordinate::new(-1.0, 1.0, 5.0);
        let c2 = Coordinate::new(-1.0, 2.0, 3.0);
        assert_abs_diff_eq!(c2.distance(&c1), 5.0_f64.sqrt(), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.distance(&c2), 5.0_f64.sqrt(), epsilon = 1.0e-14);
    }

    #[test]
    fn test_distance_coincident_points() {
        let c = Coordinate::new(0.4, -2.5, 11.8);
        assert_eq!(c.distance(&c), 0.0);
    }

    #[test]
    fn test_minus_operator() {
        let c1 = Coordinate::new(2.0_f64.sqrt(), -(8.0_f64.sqrt()), 1.0 / 3.0);
        let c2 = Coordinate::new(0.1, 3.2, 5.3);
        let c3 = c1 - c2;
        assert_abs_diff_eq!(c3.x(), c1.x() - c2.x(), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c3.y(), c1.y() - c2.y(), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c3.z(), c1.z() - c2.z(), epsilon = 1.0e-14);

        // Operands keep their values.
        assert_eq!(c1.x(), 2.0_f64.sqrt());
        assert_eq!(c2.y(), 3.2);
    }

    #[test]
    fn test_access_operator_values() {
        let c1 = Coordinate::new(2.0_f64.sqrt(), -(8.0_f64.sqrt()), 1.0 / 3.0);
        assert_abs_diff_eq!(c1.x(), c1[0], epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.y(), c1[1], epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.z(), c1[2], epsilon = 1.0e-14);
    }

    #[test]
    fn test_named_and_indexed_access_share_storage() {
        let mut c1 = Coordinate::new(1.0, 2.0, 3.0);

        let via_index: *mut f64 = &mut c1[0];
        let via_name: *mut f64 = c1.x_mut();
        assert_eq!(via_index, via_name);

        let via_index: *mut f64 = &mut c1[1];
        let via_name: *mut f64 = c1.y_mut();
        assert_eq!(via_index, via_name);

        let via_index: *mut f64 = &mut c1[2];
        let via_name: *mut f64 = c1.z_mut();
        assert_eq!(via_index, via_name);
    }

    #[test]
    fn test_access_operator_mutation_isolation() {
        let mut c1 = Coordinate::new(2.0_f64.sqrt(), -(8.0_f64.sqrt()), 1.0 / 3.0);

        c1[0] = 12.0;
        assert_abs_diff_eq!(c1.x(), 12.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.y(), -(8.0_f64.sqrt()), epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.z(), 1.0 / 3.0, epsilon = 1.0e-14);

        c1[1] = 13.0;
        assert_abs_diff_eq!(c1.y(), 13.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.x(), 12.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.z(), 1.0 / 3.0, epsilon = 1.0e-14);

        c1[2] = 14.0;
        assert_abs_diff_eq!(c1.z(), 14.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.x(), 12.0, epsilon = 1.0e-14);
        assert_abs_diff_eq!(c1.y(), 13.0, epsilon = 1.0e-14);
    }

    #[test]
    fn test_mutation_through_named_accessor() {
        let mut c = Coordinate::new(1.0, 2.0, 3.0);
        *c.y_mut() = -7.5;
        assert_eq!(c[1], -7.5);
        assert_eq!(c.x(), 1.0);
        assert_eq!(c.z(), 3.0);
    }

    #[test]
    #[should_panic]
    fn test_access_operator_out_of_range() {
        let c = Coordinate::new(1.0, 2.0, 3.0);
        let _ = c[3];
    }

    #[test]
    #[should_panic]
    fn test_mutable_access_operator_out_of_range() {
        let mut c = Coordinate::new(1.0, 2.0, 3.0);
        c[4] = 0.0;
    }

    #[test]
    fn test_copies_are_independent() {
        let mut a = Coordinate::new(1.0, 2.0, 3.0);
        let b = a;
        a[0] = 99.0;
        assert_eq!(b.x(), 1.0);
        assert_eq!(a.x(), 99.0);
    }
}
