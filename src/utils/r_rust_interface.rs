//! Conversion helpers between R objects and their Rust representations.

use extendr_api::prelude::*;
use faer::MatRef;

//////////////
// Matrices //
//////////////

/// Transform an R matrix to a faer one
///
/// R matrices are column-major, so the faer view borrows the R data
/// without copying.
pub fn r_matrix_to_faer(x: &RMatrix<f64>) -> faer::MatRef<'_, f64> {
    let ncol = x.ncols();
    let nrow = x.nrows();
    let data = x.data();

    MatRef::from_column_major_slice(data, nrow, ncol)
}

/// Transform a faer into an R matrix
pub fn faer_to_r_matrix(x: faer::MatRef<f64>) -> extendr_api::RArray<f64, [usize; 2]> {
    let nrow = x.nrows();
    let ncol = x.ncols();

    RArray::new_matrix(nrow, ncol, |row, column| x[(row, column)])
}
