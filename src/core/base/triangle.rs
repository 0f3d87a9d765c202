use faer::{Mat, MatRef};

////////////
// Errors //
////////////

// Error handling for matrices with invalid shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    NotSquare { nrows: usize, ncols: usize },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ShapeError::NotSquare { nrows, ncols } => {
                write!(f, "Matrix is not square: {} rows != {} cols", nrows, ncols)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

impl From<ShapeError> for extendr_api::Error {
    fn from(err: ShapeError) -> Self {
        extendr_api::Error::Other(err.to_string())
    }
}

///////////////////
// Triangle fold //
///////////////////

/// Fold one triangle of a square matrix into the other
///
/// Every off-diagonal pair (i, j), (j, i) is combined by summation into
/// the target triangle (upper if `upper` is true, lower otherwise) and
/// the source entry is set to zero. Diagonal entries are left untouched.
/// The input is not mutated.
///
/// ### Params
///
/// * `mat` - The square matrix to fold.
/// * `upper` - If true the sums end up in the upper triangle, otherwise
///   in the lower one.
///
/// ### Returns
///
/// The folded matrix, or a `ShapeError` if `mat` is not square.
pub fn fold_triangle(mat: &MatRef<f64>, upper: bool) -> Result<Mat<f64>, ShapeError> {
    let mut res = mat.to_owned();
    fold_triangle_in_place(&mut res, upper)?;

    Ok(res)
}

/// Fold one triangle of a square matrix into the other, in place
///
/// Mutating version of [`fold_triangle`] for callers that own the
/// matrix. The shape check happens before any element is touched, so on
/// error the matrix is returned to the caller unchanged.
///
/// ### Params
///
/// * `mat` - The square matrix to fold.
/// * `upper` - If true the sums end up in the upper triangle, otherwise
///   in the lower one.
///
/// ### Returns
///
/// Unit, or a `ShapeError` if `mat` is not square.
pub fn fold_triangle_in_place(mat: &mut Mat<f64>, upper: bool) -> Result<(), ShapeError> {
    let n = mat.nrows();
    if mat.ncols() != n {
        return Err(ShapeError::NotSquare {
            nrows: n,
            ncols: mat.ncols(),
        });
    }

    // Within each pair the sum is taken before the source is zeroed.
    if upper {
        for i in 0..n {
            for j in (i + 1)..n {
                let sum = mat[(i, j)] + mat[(j, i)];
                mat[(i, j)] = sum;
                mat[(j, i)] = 0.0;
            }
        }
    } else {
        // Columns outermost: contiguous writes in column-major storage.
        for j in 0..n {
            for i in (j + 1)..n {
                let sum = mat[(i, j)] + mat[(j, i)];
                mat[(i, j)] = sum;
                mat[(j, i)] = 0.0;
            }
        }
    }

    Ok(())
}

///////////
// Tests //
///////////
