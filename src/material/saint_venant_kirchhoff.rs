use super::{check_moduli, HyperelasticTrait};
use crate::base::right_cauchy_green;
use crate::StrError;
use russell_lab::{mat_mat_mul, Matrix};
use russell_tensor::{Mandel, Tensor2};

/// Implements the Saint-Venant-Kirchhoff model
///
/// ```text
/// E = (FᵀF - I) / 2
/// S = 2 μ E + γ tr(E) I    with    γ = K - 2μ/3
/// P = F S
/// ```
pub struct SaintVenantKirchhoff {
    /// Shear modulus μ
    pub mu: f64,

    /// Bulk modulus K
    pub bulk: f64,
}

impl SaintVenantKirchhoff {
    /// Allocates a new instance
    pub fn new(mu: f64, bulk: f64) -> Result<Self, StrError> {
        check_moduli(mu, bulk)?;
        Ok(SaintVenantKirchhoff { mu, bulk })
    }
}

impl HyperelasticTrait for SaintVenantKirchhoff {
    /// Computes the first Piola-Kirchhoff stress tensor
    fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError> {
        let ii = Tensor2::identity(Mandel::General);
        let mut ee = Tensor2::new(Mandel::General);
        ee.set_tensor(0.5, &right_cauchy_green(ff)?);
        ee.update(-0.5, &ii);
        let gamma = self.bulk - 2.0 * self.mu / 3.0;
        let mut ss = Tensor2::new(Mandel::General);
        ss.set_tensor(gamma * ee.trace(), &ii);
        ss.update(2.0 * self.mu, &ee);
        mat_mat_mul(pp, 1.0, ff, &ss.as_matrix(), 0.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
