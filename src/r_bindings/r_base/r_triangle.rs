use extendr_api::prelude::*;

use crate::core::base::triangle::fold_triangle;
use crate::utils::r_rust_interface::*;

/// Fold one triangle of a square matrix into the other
///
/// @description Adds each entry of one triangle of a square matrix onto
/// its mirrored counterpart and sets the source entry to zero, leaving
/// the diagonal untouched. WARNING! Incorrect use can cause kernel
/// crashes. Wrapper around the Rust functions with type checks are
/// provided in the package.
///
/// @param x R matrix with doubles. Needs to be square.
/// @param upper Shall the sums end up in the upper triangle. If `FALSE`,
/// they end up in the lower one.
///
/// @returns The folded matrix. Throws an error if `x` is not square.
///
/// @export
#[extendr]
fn rs_fold_triangle(
    x: RMatrix<f64>,
    upper: bool,
) -> extendr_api::Result<extendr_api::RArray<f64, [usize; 2]>> {
    let mat = r_matrix_to_faer(&x);

    let folded = fold_triangle(&mat, upper)?;

    Ok(faer_to_r_matrix(folded.as_ref()))
}

extendr_module! {
  mod r_triangle;
  fn rs_fold_triangle;
}
