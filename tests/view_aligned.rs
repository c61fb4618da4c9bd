//! Aligned row view tests
//!
//! Rows of a row-major matrix: capacity bookkeeping, appends, native iteration and the
//! arithmetic operators.

use approx::assert_relative_eq;
use sparse_row::{
    AlignedPosition, AlignedRow, CompressedMatrix, CompressedVector, DynamicVector, RowAccess,
    RowMajor, SparseRowView, SparseRowViewMut, StaticVector, Vector,
};

/// Builds a row-major matrix from `(row, column, value)` triplets.
fn csr(rows: usize, columns: usize, triplets: &[(usize, usize, f64)]) -> CompressedMatrix<f64, RowMajor> {
    CompressedMatrix::from_triplets(rows, columns, triplets).unwrap()
}

#[test]
fn test_capacity_growth_policy() {
    let mut m = CompressedMatrix::<f64, RowMajor>::new(2, 100);
    let mut row = m.row_mut(0).unwrap();
    assert_eq!(row.capacity(), 0);
    assert_eq!(row.extend_capacity(), 7);
    row.reserve(7);
    assert_eq!(row.extend_capacity(), 15);
    row.reserve(60);
    assert_eq!(row.extend_capacity(), 100);
}

#[test]
fn test_capacity_clamped_to_short_rows() {
    let mut m = CompressedMatrix::<f64, RowMajor>::new(1, 4);
    let row = m.row_mut(0).unwrap();
    assert_eq!(row.extend_capacity(), 4);
}

#[test]
fn test_reserve_keeps_elements_and_neighbours() {
    let mut m = csr(3, 10, &[(0, 2, 1.0), (1, 3, 2.0), (1, 5, 3.0), (2, 9, 4.0)]);
    {
        let mut row = m.row_mut(1).unwrap();
        row.reserve(8);
        assert!(row.capacity() >= 8);
        assert_eq!(row.non_zeros(), 2);
        assert_eq!(row.get(5), 3.0);
    }
    assert_eq!(m.get(0, 2), 1.0);
    assert_eq!(m.get(2, 9), 4.0);
}

#[test]
fn test_append_fills_reserved_row() {
    let mut m = CompressedMatrix::<f64, RowMajor>::new(2, 6);
    let mut row = m.row_mut(1).unwrap();
    row.reserve(3);
    row.append(0, 1.0, false);
    row.append(2, 0.0, true);
    row.append(4, 5.0, true);
    row.append(5, 0.0, false);
    let stored: Vec<_> = row.iter().map(|(j, &v)| (j, v)).collect();
    assert_eq!(stored, vec![(0, 1.0), (4, 5.0), (5, 0.0)]);
    assert_eq!(row.non_zeros(), 3);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "append index is not strictly increasing")]
fn test_append_out_of_order_is_caught_in_debug() {
    let mut m = CompressedMatrix::<f64, RowMajor>::with_capacity(1, 6, 4);
    let mut row = m.row_mut(0).unwrap();
    row.append(3, 1.0, false);
    row.append(1, 1.0, false);
}

#[test]
fn test_iter_mut_and_erase() {
    let mut m = csr(2, 6, &[(0, 1, 1.0), (0, 3, 3.0), (0, 4, 4.0), (1, 0, 7.0)]);
    let mut row = m.row_mut(0).unwrap();
    for (j, value) in row.iter_mut() {
        *value += j as f64;
    }
    assert_eq!(row.get(3), 6.0);
    let next = row.erase_at(row.find(3));
    assert_eq!(row.entry(next), Some((4, 8.0)));
    row.erase(1);
    assert_eq!(row.non_zeros(), 1);
    assert_eq!(row.distance(AlignedPosition(0), row.end()), 1);
    row.erase(2);
    assert_eq!(row.non_zeros(), 1);
}

#[test]
fn test_index_reads_do_not_insert() {
    let mut m = csr(1, 4, &[(0, 1, 2.0)]);
    let mut row = m.row_mut(0).unwrap();
    assert_eq!(row[3], 0.0);
    assert_eq!(row.non_zeros(), 1);
    row[3] = 1.5;
    assert_eq!(row.non_zeros(), 2);
    assert_eq!(row[3], 1.5);
}

#[test]
fn test_compound_assignment_operators() {
    let mut m = csr(2, 4, &[(0, 0, 1.0), (0, 2, 2.0), (1, 1, 9.0)]);
    let mut row = m.row_mut(0).unwrap();
    row += &StaticVector::new([1.0, 1.0, 1.0, 1.0]);
    assert_eq!(row.evaluate(), CompressedVector::from_pairs(4, &[(0, 2.0), (1, 1.0), (2, 3.0), (3, 1.0)]).unwrap());
    row -= &CompressedVector::from_pairs(4, &[(1, 1.0)]).unwrap();
    assert_eq!(row.non_zeros(), 3);
    row *= &DynamicVector::from_vec(vec![0.5, 0.0, 2.0, 1.0]);
    assert_eq!(row.get(0), 1.0);
    assert_eq!(row.get(2), 6.0);
    assert_eq!(row.get(3), 1.0);
    row *= 3.0;
    row /= 2.0;
    assert_relative_eq!(row.get(2), 9.0, epsilon = 1e-12);
    assert_eq!(m.get(1, 1), 9.0);
}

#[test]
#[should_panic(expected = "vector sizes do not match")]
fn test_compound_assignment_size_mismatch_panics() {
    let mut m = csr(1, 4, &[(0, 0, 1.0)]);
    let mut row = m.row_mut(0).unwrap();
    row += &DynamicVector::from_vec(vec![1.0, 2.0]);
}

#[test]
#[should_panic(expected = "division by zero")]
fn test_division_by_zero_panics() {
    let mut m = csr(1, 4, &[(0, 0, 1.0)]);
    let mut row = m.row_mut(0).unwrap();
    row /= 0.0;
}

#[test]
fn test_binary_operators_produce_deduced_types() {
    let m = csr(2, 3, &[(0, 0, 1.0), (0, 2, 4.0), (1, 1, 2.0)]);
    let r0 = m.row(0).unwrap();
    let r1 = m.row(1).unwrap();
    let sum: CompressedVector<f64> = &r0 + &r1;
    assert_eq!(sum, CompressedVector::from_pairs(3, &[(0, 1.0), (1, 2.0), (2, 4.0)]).unwrap());
    let shifted: StaticVector<f64, 3> = &r0 + &StaticVector::new([1.0, 1.0, 1.0]);
    assert_eq!(shifted, StaticVector::new([2.0, 1.0, 5.0]));
    let dense: DynamicVector<f64> = &DynamicVector::from_vec(vec![1.0, 1.0, 1.0]) - &r0;
    assert_eq!(dense.as_slice(), &[0.0, 1.0, -3.0]);
    let doubled: CompressedVector<f64> = &r0 * 2.0;
    assert_eq!(doubled.get(2), 8.0);
    let halved: CompressedVector<f64> = &r0 / 2.0;
    assert_eq!(halved.get(2), 2.0);
    let left: CompressedVector<f64> = 3.0 * &r1;
    assert_eq!(left.get(1), 6.0);
}

#[test]
fn test_aliasing_predicates() {
    let mut m = csr(2, 3, &[(0, 0, 1.0)]);
    let other = m.clone();
    let row = AlignedRow::new(&mut m, 1).unwrap();
    let address = row.address();
    assert!(row.can_alias(address));
    assert!(row.is_aliased(address));
    assert!(!row.can_alias(&other as *const CompressedMatrix<f64, RowMajor>));
    assert!(!CompressedVector::<f64>::new(3).can_alias(address));
}

#[test]
fn test_self_referential_assignment() {
    let mut m = csr(2, 5, &[(0, 0, 1.0), (0, 3, -2.0), (1, 4, 5.0)]);
    let expected: Vec<f64> = (0..5).map(|j| 2.0 * m.get(0, j)).collect();
    let mut row = m.row_mut(0).unwrap();
    row.assign_with(|r| r * 2.0).unwrap();
    let got: Vec<f64> = (0..5).map(|j| row.get(j)).collect();
    assert_eq!(got, expected);
    row.assign_with(|r| &(r * 0.5) + r).unwrap();
    assert_eq!(row.get(3), -6.0);
    assert_eq!(m.get(1, 4), 5.0);
}

#[test]
fn test_nan_and_default_checks() {
    let mut m = csr(2, 3, &[(0, 1, f64::NAN)]);
    assert!(m.row(0).unwrap().is_nan());
    assert!(!m.row(1).unwrap().is_nan());
    assert!(m.row(1).unwrap().is_default());
    let mut row = m.row_mut(1).unwrap();
    row.insert(2, 0.0).unwrap();
    assert!(sparse_row::is_default(&row));
    sparse_row::clear(&mut row);
    assert_eq!(row.non_zeros(), 0);
}
