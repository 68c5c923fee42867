use crate::StrError;
use russell_lab::{mat_t_mat_mul, Matrix};
use russell_tensor::{t2_odyad_t2, t2_udyad_t2, Mandel, Tensor2, Tensor4};

/// Checks that the matrix holds the components of a second-order tensor in 3D
pub(crate) fn check_t2(a: &Matrix) -> Result<(), StrError> {
    if a.dims() != (3, 3) {
        return Err("second-order tensor must be given as a 3×3 matrix");
    }
    Ok(())
}

/// Returns the (non-symmetric) Mandel representation of a 3×3 matrix
pub fn general_tensor(a: &Matrix) -> Result<Tensor2, StrError> {
    check_t2(a)?;
    Tensor2::from_matrix(a, Mandel::General)
}

/// Returns the right Cauchy-Green tensor C = Fᵀ F
pub fn right_cauchy_green(ff: &Matrix) -> Result<Tensor2, StrError> {
    check_t2(ff)?;
    let mut cc = Matrix::new(3, 3);
    mat_t_mat_mul(&mut cc, 1.0, ff, ff, 0.0)?;
    Tensor2::from_matrix(&cc, Mandel::General)
}

/// Returns the determinant of the tensor given as a 3×3 matrix
pub fn matrix_determinant(a: &Matrix) -> Result<f64, StrError> {
    Ok(general_tensor(a)?.determinant())
}

/// Returns the inverse of a second-order tensor
///
/// A singular tensor (zero or NaN determinant) does not produce an error; instead, all
/// components of the returned tensor are NaN. Thus, degenerate configurations propagate
/// into the stress and residual values and can be handled by the continuation driver.
pub fn inverse_or_nan(a: &Tensor2) -> Tensor2 {
    let mut ai = Tensor2::new(a.mandel());
    if a.inverse(&mut ai, 0.0).is_none() {
        ai.vector_mut().fill(f64::NAN);
    }
    ai
}

/// Returns the transpose of a second-order tensor
pub fn transposed(a: &Tensor2) -> Tensor2 {
    let mut at = Tensor2::new(a.mandel());
    a.transpose(&mut at);
    at
}

/// Computes the symmetric (cross) dyadic product of two general second-order tensors
///
/// ```text
/// Dᵢⱼₖₗ = s (Aᵢₖ Bⱼₗ + Aᵢₗ Bₖⱼ) / 2
/// ```
///
/// which corresponds to the sum of the overbar and underbar dyadic products `(A ⊗̄ B + A ⊗̲ Bᵀ) s / 2`.
///
/// # Output
///
/// * `dd` -- the fourth-order tensor; it must be [Mandel::General]
pub fn t2_cross_dyad_t2(dd: &mut Tensor4, s: f64, a: &Tensor2, b: &Tensor2) {
    t2_odyad_t2(dd, s / 2.0, a, b);
    let mut under = Tensor4::new(Mandel::General);
    t2_udyad_t2(&mut under, s / 2.0, a, &transposed(b));
    dd.update(1.0, &under);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use russell_lab::{approx_eq, mat_approx_eq, Matrix};
    use russell_tensor::{t2_ddot_t2, t2_dot_t2, t2_dyad_t2};

    #[rustfmt::skip]
    fn sample_a() -> Matrix {
        Matrix::from(&[
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 10.0],
        ])
    }

    #[rustfmt::skip]
    fn sample_b() -> Matrix {
        Matrix::from(&[
            [ 0.5, -1.0, 0.0],
            [ 2.0,  1.0, 3.0],
            [-1.0,  0.0, 4.0],
        ])
    }

    #[test]
    fn check_t2_captures_errors() {
        let a = Matrix::new(2, 3);
        assert_eq!(
            general_tensor(&a).err(),
            Some("second-order tensor must be given as a 3×3 matrix")
        );
        assert_eq!(
            right_cauchy_green(&a).err(),
            Some("second-order tensor must be given as a 3×3 matrix")
        );
        assert_eq!(
            matrix_determinant(&a).err(),
            Some("second-order tensor must be given as a 3×3 matrix")
        );
    }

    #[test]
    fn general_tensor_and_determinant_work() {
        let a = general_tensor(&sample_a()).unwrap();
        approx_eq(a.get(0, 1), 2.0, 1e-14);
        approx_eq(a.get(1, 0), 4.0, 1e-14);
        approx_eq(a.trace(), 16.0, 1e-14);
        approx_eq(matrix_determinant(&sample_a()).unwrap(), -3.0, 1e-13);
        approx_eq(matrix_determinant(&Matrix::identity(3)).unwrap(), 1.0, 1e-15);
        let at = transposed(&a);
        approx_eq(at.get(0, 1), 4.0, 1e-14);
        approx_eq(at.get(2, 0), 3.0, 1e-14);
    }

    #[test]
    fn right_cauchy_green_works() {
        #[rustfmt::skip]
        let ff = Matrix::from(&[
            [1.0, 0.5, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 2.0],
        ]);
        let cc = right_cauchy_green(&ff).unwrap();
        #[rustfmt::skip]
        let correct = &[
            [1.0, 0.5,  0.0],
            [0.5, 1.25, 0.0],
            [0.0, 0.0,  4.0],
        ];
        mat_approx_eq(&cc.as_matrix(), correct, 1e-14);
    }

    #[test]
    fn ddot_and_deviator_work() {
        let a = general_tensor(&sample_a()).unwrap();
        let b = general_tensor(&sample_b()).unwrap();
        // 0.5 - 2 + 0 + 8 + 5 + 18 - 7 + 0 + 40
        approx_eq(t2_ddot_t2(&a, &b), 62.5, 1e-13);
        let mut dev = Tensor2::new(Mandel::General);
        a.deviator(&mut dev);
        approx_eq(dev.trace(), 0.0, 1e-14);
        approx_eq(dev.get(0, 0), 1.0 - 16.0 / 3.0, 1e-14);
        approx_eq(dev.get(0, 1), 2.0, 1e-14);
    }

    #[test]
    fn inverse_works() {
        let a = general_tensor(&sample_a()).unwrap();
        let ai = inverse_or_nan(&a);
        let mut id = Tensor2::new(Mandel::General);
        t2_dot_t2(&mut id, &a, &ai);
        mat_approx_eq(&id.as_matrix(), &Matrix::identity(3), 1e-13);
    }

    #[test]
    fn inverse_of_singular_tensor_gives_nan() {
        let a = general_tensor(&Matrix::new(3, 3)).unwrap();
        let ai = inverse_or_nan(&a);
        for i in 0..3 {
            for j in 0..3 {
                assert!(ai.get(i, j).is_nan());
            }
        }
    }

    #[test]
    fn t2_dyad_t2_agrees_with_components() {
        let a = general_tensor(&sample_a()).unwrap();
        let b = general_tensor(&sample_b()).unwrap();
        let mut dd = Tensor4::new(Mandel::General);
        t2_dyad_t2(&mut dd, 1.0, &a, &b);
        approx_eq(dd.get(0, 1, 2, 2), 2.0 * 4.0, 1e-13);
        approx_eq(dd.get(2, 0, 1, 0), 7.0 * 2.0, 1e-13);
    }

    #[test]
    fn t2_cross_dyad_t2_works() {
        let ma = sample_a();
        let mb = sample_b();
        let a = general_tensor(&ma).unwrap();
        let b = general_tensor(&mb).unwrap();
        let mut dd = Tensor4::new(Mandel::General);
        t2_cross_dyad_t2(&mut dd, 1.0, &a, &b);
        for i in 0..3 {
            for j in 0..3 {
                for k in 0..3 {
                    for l in 0..3 {
                        let correct = (ma.get(i, k) * mb.get(j, l) + ma.get(i, l) * mb.get(k, j)) / 2.0;
                        approx_eq(dd.get(i, j, k, l), correct, 1e-13);
                    }
                }
            }
        }
        // D(I, I)ᵢⱼₖₗ = (δᵢₖ δⱼₗ + δᵢₗ δₖⱼ) / 2
        let id = Tensor2::identity(Mandel::General);
        let mut ii = Tensor4::new(Mandel::General);
        t2_cross_dyad_t2(&mut ii, 1.0, &id, &id);
        approx_eq(ii.get(0, 1, 0, 1), 0.5, 1e-15);
        approx_eq(ii.get(0, 1, 1, 0), 0.5, 1e-15);
        approx_eq(ii.get(0, 0, 0, 0), 1.0, 1e-15);
        approx_eq(ii.get(0, 0, 1, 1), 0.0, 1e-15);
    }
}
