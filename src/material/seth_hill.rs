use super::{check_moduli, HyperelasticTrait};
use crate::base::{inverse_or_nan, right_cauchy_green};
use crate::StrError;
use russell_lab::{mat_eigen_sym_jacobi, mat_mat_mul, Matrix, Vector};
use russell_tensor::{t2_dot_t2, vec_dyad_vec, Mandel, Tensor2};

/// Implements the generalized-strain (Seth-Hill) model
///
/// The right Cauchy-Green tensor C = FᵀF is decomposed into its eigenvalues wₐ and
/// eigenvectors Nₐ; with the principal stretches λₐ = √wₐ:
///
/// ```text
/// Eₖ = Σ eₐ Nₐ ⊗ Nₐ    with    eₐ = (λₐᵏ - 1) / k    (k ≠ 0)
///                              eₐ = ln(λₐ)           (k = 0)
/// Cₖ = Σ λₐᵏ Nₐ ⊗ Nₐ
/// Sₖ = 2 μ Eₖ + γ tr(Eₖ) I    with    γ = K - 2μ/3
/// P  = F Sₖ Cₖ C⁻¹
/// ```
pub struct SethHill {
    /// Shear modulus μ
    pub mu: f64,

    /// Bulk modulus K
    pub bulk: f64,

    /// Strain exponent k
    pub k: f64,
}

impl SethHill {
    /// Allocates a new instance
    pub fn new(mu: f64, bulk: f64, k: f64) -> Result<Self, StrError> {
        check_moduli(mu, bulk)?;
        Ok(SethHill { mu, bulk, k })
    }
}

impl HyperelasticTrait for SethHill {
    /// Computes the first Piola-Kirchhoff stress tensor
    fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError> {
        seth_hill_stress(pp, ff, self.mu, self.bulk, self.k)
    }
}

/// Computes the first Piola-Kirchhoff stress of the Seth-Hill model with the given parameters
///
/// If the eigen-decomposition of C fails, all components of P are set to NaN.
pub(crate) fn seth_hill_stress(pp: &mut Matrix, ff: &Matrix, mu: f64, bulk: f64, k: f64) -> Result<(), StrError> {
    let cc = right_cauchy_green(ff)?;

    // spectral decomposition of C (the eigenvectors are the columns of vv)
    let mut ww = Vector::new(3);
    let mut vv = Matrix::new(3, 3);
    let mut aa = cc.as_matrix();
    if mat_eigen_sym_jacobi(&mut ww, &mut vv, &mut aa).is_err() {
        pp.fill(f64::NAN);
        return Ok(());
    }

    // generalized strain and the k-th power of the stretch tensor
    let mut eek = Tensor2::new(Mandel::General);
    let mut cck = Tensor2::new(Mandel::General);
    let mut proj = Tensor2::new(Mandel::General);
    let mut nn = Vector::new(3);
    for a in 0..3 {
        let lambda = f64::sqrt(ww[a]);
        let lambda_k = f64::powf(lambda, k);
        let ek = if k == 0.0 {
            f64::ln(ww[a]) / 2.0
        } else {
            (lambda_k - 1.0) / k
        };
        for i in 0..3 {
            nn[i] = vv.get(i, a);
        }
        vec_dyad_vec(&mut proj, 1.0, &nn, &nn)?;
        eek.update(ek, &proj);
        cck.update(lambda_k, &proj);
    }

    // stress conjugate to Eₖ
    let gamma = bulk - 2.0 * mu / 3.0;
    let mut ssk = Tensor2::new(Mandel::General);
    ssk.set_tensor(gamma * eek.trace(), &Tensor2::identity(Mandel::General));
    ssk.update(2.0 * mu, &eek);

    // P = F Sₖ Cₖ C⁻¹
    let mut ssk_cck = Tensor2::new(Mandel::General);
    let mut ssk_cck_cc_inv = Tensor2::new(Mandel::General);
    t2_dot_t2(&mut ssk_cck, &ssk, &cck);
    t2_dot_t2(&mut ssk_cck_cc_inv, &ssk_cck, &inverse_or_nan(&cc));
    mat_mat_mul(pp, 1.0, ff, &ssk_cck_cc_inv.as_matrix(), 0.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
