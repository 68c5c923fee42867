use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds the parameters of one term of the generalized-strain (Seth-Hill) model
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamSethHillTerm {
    /// Shear modulus μ
    pub mu: f64,

    /// Bulk modulus K
    pub bulk: f64,

    /// Strain exponent k (k = 0 gives the logarithmic strain)
    pub k: f64,
}

/// Holds parameters for hyperelastic (stress-deformation) relations
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamHyperelastic {
    /// Compressible neo-Hookean model (id = 0)
    NeoHookean {
        /// Shear modulus μ
        mu: f64,

        /// Bulk modulus K
        bulk: f64,
    },

    /// Generalized-strain (Seth-Hill) model (id = 1)
    ///
    /// ```text
    /// Eₖ = (Cᵏᐟ² - I) / k   (k ≠ 0)
    /// E₀ = ln(C) / 2
    /// ```
    SethHill {
        /// Shear modulus μ
        mu: f64,

        /// Bulk modulus K
        bulk: f64,

        /// Strain exponent k
        k: f64,
    },

    /// Superposition of generalized-strain (Seth-Hill) models (id = 2)
    SethHillMulti {
        /// Parameters of each (parallel) term
        terms: Vec<ParamSethHillTerm>,
    },

    /// Polynomial model of the isochoric invariants with volumetric penalty (id = 3)
    ///
    /// ```text
    /// W = C10 (Ī₁-3) + C01 (Ī₂-3) + C20 (Ī₁-3)² + C30 (Ī₁-3)³ + C40 (Ī₁-3)⁴ + K (J-1)² / 2
    /// ```
    InvariantPolynomial {
        /// Coefficient of (Ī₁-3)
        c10: f64,

        /// Coefficient of (Ī₂-3)
        c01: f64,

        /// Coefficient of (Ī₁-3)²
        c20: f64,

        /// Coefficient of (Ī₁-3)³
        c30: f64,

        /// Coefficient of (Ī₁-3)⁴
        c40: f64,

        /// Bulk modulus K
        bulk: f64,
    },

    /// Saint-Venant-Kirchhoff model (id = 4)
    SaintVenantKirchhoff {
        /// Shear modulus μ
        mu: f64,

        /// Bulk modulus K
        bulk: f64,
    },
}

impl ParamHyperelastic {
    /// Allocates parameters given the model id and a flat list of numbers
    ///
    /// | id | model                  | parameters                           |
    /// |----|------------------------|--------------------------------------|
    /// | 0  | `NeoHookean`           | `[μ, K]`                             |
    /// | 1  | `SethHill`             | `[μ, K, k]`                          |
    /// | 2  | `SethHillMulti`        | `[μ₁, K₁, k₁, μ₂, K₂, k₂, ...]`      |
    /// | 3  | `InvariantPolynomial`  | `[C10, C01, C20, C30, C40, K]`       |
    /// | 4  | `SaintVenantKirchhoff` | `[μ, K]`                             |
    ///
    /// Extra trailing values are ignored, except for `SethHillMulti`.
    pub fn from_id(id: usize, p: &[f64]) -> Result<Self, StrError> {
        match id {
            0 => {
                if p.len() < 2 {
                    return Err("NeoHookean model requires 2 parameters [μ, K]");
                }
                Ok(ParamHyperelastic::NeoHookean { mu: p[0], bulk: p[1] })
            }
            1 => {
                if p.len() < 3 {
                    return Err("SethHill model requires 3 parameters [μ, K, k]");
                }
                Ok(ParamHyperelastic::SethHill {
                    mu: p[0],
                    bulk: p[1],
                    k: p[2],
                })
            }
            2 => {
                if p.len() < 3 || p.len() % 3 != 0 {
                    return Err("SethHillMulti model requires a multiple of 3 parameters [μ, K, k, ...]");
                }
                let terms = p
                    .chunks(3)
                    .map(|c| ParamSethHillTerm {
                        mu: c[0],
                        bulk: c[1],
                        k: c[2],
                    })
                    .collect();
                Ok(ParamHyperelastic::SethHillMulti { terms })
            }
            3 => {
                if p.len() < 6 {
                    return Err("InvariantPolynomial model requires 6 parameters [C10, C01, C20, C30, C40, K]");
                }
                Ok(ParamHyperelastic::InvariantPolynomial {
                    c10: p[0],
                    c01: p[1],
                    c20: p[2],
                    c30: p[3],
                    c40: p[4],
                    bulk: p[5],
                })
            }
            4 => {
                if p.len() < 2 {
                    return Err("SaintVenantKirchhoff model requires 2 parameters [μ, K]");
                }
                Ok(ParamHyperelastic::SaintVenantKirchhoff { mu: p[0], bulk: p[1] })
            }
            _ => Err("constitutive model id is unknown"),
        }
    }

    /// Returns the model id
    pub fn id(&self) -> usize {
        match self {
            ParamHyperelastic::NeoHookean { .. } => 0,
            ParamHyperelastic::SethHill { .. } => 1,
            ParamHyperelastic::SethHillMulti { .. } => 2,
            ParamHyperelastic::InvariantPolynomial { .. } => 3,
            ParamHyperelastic::SaintVenantKirchhoff { .. } => 4,
        }
    }

    /// Returns the flat list of parameters (inverse of `from_id`)
    pub fn values(&self) -> Vec<f64> {
        match self {
            ParamHyperelastic::NeoHookean { mu, bulk } => vec![*mu, *bulk],
            ParamHyperelastic::SethHill { mu, bulk, k } => vec![*mu, *bulk, *k],
            ParamHyperelastic::SethHillMulti { terms } => terms.iter().flat_map(|t| [t.mu, t.bulk, t.k]).collect(),
            ParamHyperelastic::InvariantPolynomial {
                c10,
                c01,
                c20,
                c30,
                c40,
                bulk,
            } => vec![*c10, *c01, *c20, *c30, *c40, *bulk],
            ParamHyperelastic::SaintVenantKirchhoff { mu, bulk } => vec![*mu, *bulk],
        }
    }

    /// Returns a sample set of neo-Hookean parameters (nearly incompressible)
    pub fn sample_neo_hookean() -> Self {
        ParamHyperelastic::NeoHookean { mu: 1.0, bulk: 5000.0 }
    }

    /// Returns a sample set of Seth-Hill parameters with a given exponent
    pub fn sample_seth_hill(k: f64) -> Self {
        ParamHyperelastic::SethHill {
            mu: 1.0,
            bulk: 5000.0,
            k,
        }
    }

    /// Returns a sample set of invariant-polynomial parameters
    pub fn sample_invariant_polynomial() -> Self {
        ParamHyperelastic::InvariantPolynomial {
            c10: 0.4,
            c01: 0.1,
            c20: 0.0,
            c30: -0.01,
            c40: 0.01,
            bulk: 5000.0,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
