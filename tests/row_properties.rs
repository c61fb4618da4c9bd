//! Row-view properties shared by both storage orders
//!
//! Every property is written once against the `RowAccess` / `SparseRowViewMut` interface
//! and checked on a row-major matrix (aligned rows) and a column-major matrix (transposed
//! rows) holding the same elements.
//!
//! Random fills use a seeded `StdRng` so failures are reproducible.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sparse_row::{
    ColumnMajor, CompressedMatrix, DynamicVector, RowAccess, RowError, RowMajor, SparseRowView,
    SparseRowViewMut, StorageOrder, Vector,
};

/// Builds a random `rows x columns` matrix with roughly `density` of the entries set.
///
/// # Arguments
/// * `seed` - Seed for the generator, so both storage orders see the same entries
fn random_matrix<O: StorageOrder>(
    rows: usize,
    columns: usize,
    density: f64,
    seed: u64,
) -> CompressedMatrix<f64, O> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut triplets = Vec::new();
    for i in 0..rows {
        for j in 0..columns {
            if rng.gen_bool(density) {
                triplets.push((i, j, rng.gen_range(-5.0..5.0)));
            }
        }
    }
    CompressedMatrix::from_triplets(rows, columns, &triplets).unwrap()
}

/// The 3x3 matrix with `(0,1) = 2.0` and `(1,0) = 1.5`.
fn small<O: StorageOrder>() -> CompressedMatrix<f64, O> {
    CompressedMatrix::from_triplets(3, 3, &[(0, 1, 2.0), (1, 0, 1.5)]).unwrap()
}

fn size_matches_columns<A: RowAccess<Element = f64>>(matrix: &A, rows: usize, columns: usize) {
    for r in 0..rows {
        assert_eq!(matrix.row(r).unwrap().size(), columns);
    }
    assert_eq!(
        matrix.row(rows).err(),
        Some(RowError::InvalidRowIndex { row: rows, rows })
    );
}

fn insert_then_find<A: RowAccess<Element = f64>>(matrix: &mut A) {
    let mut row = matrix.row_mut(1).unwrap();
    assert_eq!(row.entry(row.find(2)), None);
    assert_eq!(row.find(2), row.end());
    *row.insert(2, 4.5).unwrap() *= 2.0;
    assert_eq!(row.entry(row.find(2)), Some((2, 9.0)));
    assert_eq!(row.lookup(2), Some(9.0));
    assert_eq!(
        row.insert(2, 1.0).unwrap_err(),
        RowError::DuplicateEntry { row: 1, column: 2 }
    );
    assert_eq!(row.get(2), 9.0);
}

fn dense_round_trip<A: RowAccess<Element = f64>>(matrix: &mut A, row: usize) {
    let x = DynamicVector::from_vec(vec![0.0, 1.25, 0.0, -3.0, 0.0, 7.5, 0.0, 0.0]);
    let mut view = matrix.row_mut(row).unwrap();
    view.assign(&x).unwrap();
    for j in 0..x.len() {
        assert_eq!(view.get(j), x[j]);
    }
    assert_eq!(view.non_zeros(), 3);
}

fn reset_is_idempotent<A: RowAccess<Element = f64>>(matrix: &mut A, row: usize) {
    let mut view = matrix.row_mut(row).unwrap();
    view.reset();
    assert_eq!(view.non_zeros(), 0);
    view.reset();
    assert_eq!(view.non_zeros(), 0);
    assert_eq!(view.begin(), view.end());
    assert!(view.is_default());
}

fn reading_through_element_inserts<A: RowAccess<Element = f64>>(matrix: &mut A) {
    {
        let row = matrix.row(0).unwrap();
        assert_eq!(row.non_zeros(), 1);
        assert_eq!(row.size(), 3);
        assert_eq!(row.get(1), 2.0);
        assert_eq!(row.get(2), 0.0);
        assert_eq!(row.non_zeros(), 1);
    }
    let mut row = matrix.row_mut(0).unwrap();
    assert_eq!(*row.element(1), 2.0);
    assert_eq!(*row.element(2), 0.0);
    assert_eq!(row.non_zeros(), 2);
}

fn scale_and_divide<A: RowAccess<Element = f64>>(matrix: &mut A)
where
    for<'a> A::RowMut<'a>: std::fmt::Debug,
{
    let mut row = matrix.row_mut(1).unwrap();
    row.scale(4.0);
    assert_eq!(row.get(0), 6.0);
    row.try_div_assign(3.0).unwrap();
    assert_relative_eq!(row.get(0), 2.0, epsilon = 1e-12);
    assert_eq!(row.try_div_assign(0.0).unwrap_err(), RowError::DivisionByZero);
    assert_relative_eq!(row.get(0), 2.0, epsilon = 1e-12);
}

fn traversal_is_ordered<A: RowAccess<Element = f64>>(matrix: &A, rows: usize) {
    for r in 0..rows {
        let row = matrix.row(r).unwrap();
        let mut seen = Vec::new();
        let mut position = row.begin();
        while position != row.end() {
            seen.push(row.entry(position).unwrap().0);
            position = row.advance(position);
        }
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(seen.len(), row.non_zeros());
    }
}

#[test]
fn test_size_matches_columns() {
    size_matches_columns(&random_matrix::<RowMajor>(6, 9, 0.3, 1), 6, 9);
    size_matches_columns(&random_matrix::<ColumnMajor>(6, 9, 0.3, 1), 6, 9);
}

#[test]
fn test_insert_then_find() {
    insert_then_find(&mut small::<RowMajor>());
    insert_then_find(&mut small::<ColumnMajor>());
}

#[test]
fn test_dense_round_trip() {
    for seed in 0..4 {
        dense_round_trip(&mut random_matrix::<RowMajor>(5, 8, 0.5, seed), 2);
        dense_round_trip(&mut random_matrix::<ColumnMajor>(5, 8, 0.5, seed), 2);
    }
}

#[test]
fn test_reset_is_idempotent() {
    reset_is_idempotent(&mut random_matrix::<RowMajor>(4, 10, 0.6, 3), 1);
    reset_is_idempotent(&mut random_matrix::<ColumnMajor>(4, 10, 0.6, 3), 1);
}

#[test]
fn test_reading_through_element_inserts() {
    reading_through_element_inserts(&mut small::<RowMajor>());
    reading_through_element_inserts(&mut small::<ColumnMajor>());
}

#[test]
fn test_scale_and_divide() {
    scale_and_divide(&mut small::<RowMajor>());
    scale_and_divide(&mut small::<ColumnMajor>());
}

#[test]
fn test_traversal_is_ordered() {
    traversal_is_ordered(&random_matrix::<RowMajor>(7, 12, 0.4, 11), 7);
    traversal_is_ordered(&random_matrix::<ColumnMajor>(7, 12, 0.4, 11), 7);
}

/// Both layouts must agree element for element on the same random input.
#[test]
fn test_layouts_agree() {
    let csr = random_matrix::<RowMajor>(6, 6, 0.35, 5);
    let csc = random_matrix::<ColumnMajor>(6, 6, 0.35, 5);
    for r in 0..6 {
        let a = csr.row(r).unwrap().evaluate();
        let b = csc.row(r).unwrap().evaluate();
        assert_eq!(a, b);
    }
}
