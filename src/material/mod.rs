//! Implements hyperelastic material models

mod hyperelastic;
mod invariant_polynomial;
mod neo_hookean;
mod saint_venant_kirchhoff;
mod seth_hill;
mod seth_hill_multi;
pub use crate::material::hyperelastic::*;
pub use crate::material::invariant_polynomial::*;
pub use crate::material::neo_hookean::*;
pub use crate::material::saint_venant_kirchhoff::*;
pub use crate::material::seth_hill::*;
pub use crate::material::seth_hill_multi::*;
