use super::HyperelasticTrait;
use crate::base::{inverse_or_nan, matrix_determinant, right_cauchy_green};
use crate::StrError;
use russell_lab::{mat_mat_mul, mat_scale, mat_update, Matrix};
use russell_tensor::{t2_ddot_t2, t2_dot_t2, Mandel, Tensor2};

/// Implements a polynomial model of the isochoric invariants with a volumetric penalty
///
/// With J = det(F), C = FᵀF and Ĉ = J^(-2/3) C:
///
/// ```text
/// Î₁ = tr(Ĉ)
/// Î₂ = (Î₁² - tr(Ĉ²)) / 2
/// W  = C10 (Î₁-3) + C01 (Î₂-3) + C20 (Î₁-3)² + C30 (Î₁-3)³ + C40 (Î₁-3)⁴
/// S̄  = 2 ∂W/∂Î₁ I + 2 ∂W/∂Î₂ (Î₁ I - Ĉ)
/// P  = F (J^(-2/3) dev(S̄ C) C⁻¹ + p J C⁻¹)    with    p = K (J - 1)
/// ```
pub struct InvariantPolynomial {
    /// Coefficients [C10, C01, C20, C30, C40]
    pub coefficients: [f64; 5],

    /// Bulk modulus K
    pub bulk: f64,
}

impl InvariantPolynomial {
    /// Allocates a new instance
    pub fn new(coefficients: [f64; 5], bulk: f64) -> Result<Self, StrError> {
        if bulk < 0.0 {
            return Err("bulk modulus K must be non-negative");
        }
        Ok(InvariantPolynomial { coefficients, bulk })
    }

    /// Returns the derivatives (∂W/∂Î₁, ∂W/∂Î₂) of the strain energy function
    pub fn energy_derivatives(&self, i1: f64, _i2: f64) -> (f64, f64) {
        let [c10, c01, c20, c30, c40] = self.coefficients;
        let x = i1 - 3.0;
        let w1 = c10 + 2.0 * c20 * x + 3.0 * c30 * x * x + 4.0 * c40 * x * x * x;
        (w1, c01)
    }

    /// Computes the deviatoric part of the second Piola-Kirchhoff stress
    ///
    /// ```text
    /// S_dev = J^(-2/3) dev(S̄ C) C⁻¹
    /// ```
    pub fn deviatoric_stress(&self, ff: &Matrix) -> Result<Matrix, StrError> {
        let jj = matrix_determinant(ff)?;
        let cc = right_cauchy_green(ff)?;
        let jj_23 = f64::powf(jj, -2.0 / 3.0);

        // isochoric invariants
        let mut cc_bar = Tensor2::new(Mandel::General);
        cc_bar.set_tensor(jj_23, &cc);
        let i1 = cc_bar.trace();
        let i2 = (i1 * i1 - t2_ddot_t2(&cc_bar, &cc_bar)) / 2.0;
        let (w1, w2) = self.energy_derivatives(i1, i2);

        // fictitious stress
        let mut ss_bar = Tensor2::new(Mandel::General);
        ss_bar.set_tensor(2.0 * w1 + 2.0 * w2 * i1, &Tensor2::identity(Mandel::General));
        ss_bar.update(-2.0 * w2, &cc_bar);

        let mut ss_bar_cc = Tensor2::new(Mandel::General);
        let mut dev = Tensor2::new(Mandel::General);
        let mut dev_cc_inv = Tensor2::new(Mandel::General);
        t2_dot_t2(&mut ss_bar_cc, &ss_bar, &cc);
        ss_bar_cc.deviator(&mut dev);
        t2_dot_t2(&mut dev_cc_inv, &dev, &inverse_or_nan(&cc));
        let mut ss_dev = dev_cc_inv.as_matrix();
        mat_scale(&mut ss_dev, jj_23);
        Ok(ss_dev)
    }

    /// Returns the hydrostatic pressure p = K (J - 1)
    pub fn pressure(&self, ff: &Matrix) -> Result<f64, StrError> {
        let jj = matrix_determinant(ff)?;
        Ok(self.bulk * (jj - 1.0))
    }
}

impl HyperelasticTrait for InvariantPolynomial {
    /// Computes the first Piola-Kirchhoff stress tensor
    fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError> {
        let jj = matrix_determinant(ff)?;
        let cc_inv = inverse_or_nan(&right_cauchy_green(ff)?).as_matrix();
        let p = self.pressure(ff)?;
        let mut ss = self.deviatoric_stress(ff)?;
        mat_update(&mut ss, p * jj, &cc_inv)?;
        mat_mat_mul(pp, 1.0, ff, &ss, 0.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
