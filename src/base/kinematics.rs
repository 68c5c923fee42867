use super::{check_t2, N_DISPLACEMENT_GRADIENT};
use crate::StrError;
use russell_lab::{mat_add, Matrix, Vector};

/// Calculates the deformation gradient F = I + H
///
/// The displacement gradient `hh` holds the nine components of H in row-major order,
/// i.e., `hh[3 * i + j] = Hᵢⱼ`.
pub fn deformation_gradient(hh: &[f64]) -> Result<Matrix, StrError> {
    if hh.len() != N_DISPLACEMENT_GRADIENT {
        return Err("displacement gradient must have 9 components");
    }
    #[rustfmt::skip]
    let gradient = Matrix::from(&[
        [hh[0], hh[1], hh[2]],
        [hh[3], hh[4], hh[5]],
        [hh[6], hh[7], hh[8]],
    ]);
    let mut ff = Matrix::new(3, 3);
    mat_add(&mut ff, 1.0, &Matrix::identity(3), 1.0, &gradient)?;
    Ok(ff)
}

/// Extracts the displacement gradient H = F - I as nine components in row-major order
pub fn displacement_gradient(ff: &Matrix) -> Result<Vector, StrError> {
    check_t2(ff)?;
    let mut gradient = Matrix::new(3, 3);
    mat_add(&mut gradient, 1.0, ff, -1.0, &Matrix::identity(3))?;
    let mut hh = Vector::new(N_DISPLACEMENT_GRADIENT);
    for i in 0..3 {
        for j in 0..3 {
            hh[3 * i + j] = gradient.get(i, j);
        }
    }
    Ok(hh)
}

/// Calculates the gridvectors (deformed edges of the cube)
///
/// Returns `(length, components)` where `length[i]` is the stretch of the edge `i`,
/// i.e., the norm of the i-th column of F, and `components` is a copy of F whose
/// off-diagonal entries are the shear (coupling) terms between edges.
pub fn gridvectors(ff: &Matrix) -> Result<(Vector, Matrix), StrError> {
    check_t2(ff)?;
    let mut length = Vector::new(3);
    for j in 0..3 {
        let (x, y, z) = (ff.get(0, j), ff.get(1, j), ff.get(2, j));
        length[j] = f64::sqrt(x * x + y * y + z * z);
    }
    Ok((length, ff.clone()))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
