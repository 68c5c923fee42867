use super::{check_moduli, HyperelasticTrait};
use crate::base::{general_tensor, inverse_or_nan, transposed};
use crate::StrError;
use russell_lab::{mat_add, Matrix};

/// Implements the compressible neo-Hookean model
///
/// ```text
/// P = μ (F - J F⁻ᵀ) + K ln(J) F⁻ᵀ
/// ```
pub struct NeoHookean {
    /// Shear modulus μ
    pub mu: f64,

    /// Bulk modulus K
    pub bulk: f64,
}

impl NeoHookean {
    /// Allocates a new instance
    pub fn new(mu: f64, bulk: f64) -> Result<Self, StrError> {
        check_moduli(mu, bulk)?;
        Ok(NeoHookean { mu, bulk })
    }
}

impl HyperelasticTrait for NeoHookean {
    /// Computes the first Piola-Kirchhoff stress tensor
    fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError> {
        let tt = general_tensor(ff)?;
        let jj = tt.determinant();
        let ff_inv_t = transposed(&inverse_or_nan(&tt)).as_matrix();
        let beta = self.bulk * f64::ln(jj) - self.mu * jj;
        mat_add(pp, self.mu, ff, beta, &ff_inv_t)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
