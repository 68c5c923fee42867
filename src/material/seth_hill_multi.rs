use super::{check_moduli, seth_hill_stress, HyperelasticTrait};
use crate::base::ParamSethHillTerm;
use crate::StrError;
use russell_lab::{mat_update, Matrix};

/// Implements the superposition of generalized-strain (Seth-Hill) models
///
/// The stress is the sum of the stresses of each term (parallel arrangement). A single term
/// may carry a negative modulus as long as the summed moduli are non-negative.
pub struct SethHillMulti {
    /// Parameters of each term
    pub terms: Vec<ParamSethHillTerm>,
}

impl SethHillMulti {
    /// Allocates a new instance
    pub fn new(terms: &[ParamSethHillTerm]) -> Result<Self, StrError> {
        if terms.is_empty() {
            return Err("SethHillMulti model requires at least one term");
        }
        let mu: f64 = terms.iter().map(|term| term.mu).sum();
        let bulk: f64 = terms.iter().map(|term| term.bulk).sum();
        check_moduli(mu, bulk)?;
        Ok(SethHillMulti { terms: terms.to_vec() })
    }
}

impl HyperelasticTrait for SethHillMulti {
    /// Computes the first Piola-Kirchhoff stress tensor
    fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError> {
        let mut pp_term = Matrix::new(3, 3);
        pp.fill(0.0);
        for term in &self.terms {
            seth_hill_stress(&mut pp_term, ff, term.mu, term.bulk, term.k)?;
            mat_update(pp, 1.0, &pp_term)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SethHillMulti;
    use crate::base::ParamSethHillTerm;
    use crate::material::{HyperelasticTrait, SethHill};
    use russell_lab::{mat_add, mat_approx_eq, Matrix};

    #[test]
    fn new_captures_errors() {
        assert_eq!(
            SethHillMulti::new(&[]).err(),
            Some("SethHillMulti model requires at least one term")
        );
        let terms = [ParamSethHillTerm {
            mu: 1.0,
            bulk: -1.0,
            k: 2.0,
        }];
        assert_eq!(SethHillMulti::new(&terms).err(), Some("bulk modulus K must be non-negative"));
        let terms = [
            ParamSethHillTerm {
                mu: 1.0,
                bulk: 10.0,
                k: 2.0,
            },
            ParamSethHillTerm {
                mu: -1.5,
                bulk: 0.0,
                k: -2.0,
            },
        ];
        assert_eq!(SethHillMulti::new(&terms).err(), Some("shear modulus μ must be non-negative"));
    }

    #[test]
    fn negative_branch_moduli_are_accepted() {
        let terms = [
            ParamSethHillTerm {
                mu: 1.0,
                bulk: 100.0,
                k: 2.0,
            },
            ParamSethHillTerm {
                mu: -0.1,
                bulk: 0.0,
                k: -2.0,
            },
        ];
        let multi = SethHillMulti::new(&terms).unwrap();
        assert_eq!(multi.terms.len(), 2);

        // uniaxial stretch: the softening branch reduces the axial stress
        let ff = Matrix::from(&[[1.1, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let mut pp = Matrix::new(3, 3);
        let mut pp_stiff = Matrix::new(3, 3);
        multi.first_piola_kirchhoff(&mut pp, &ff).unwrap();
        SethHill::new(1.0, 100.0, 2.0)
            .unwrap()
            .first_piola_kirchhoff(&mut pp_stiff, &ff)
            .unwrap();
        assert!(pp.get(0, 0) < pp_stiff.get(0, 0));
        assert!(pp.get(0, 0) > 0.0);
    }

    #[test]
    fn first_piola_kirchhoff_sums_the_terms() {
        let terms = [
            ParamSethHillTerm {
                mu: 1.0,
                bulk: 50.0,
                k: 2.0,
            },
            ParamSethHillTerm {
                mu: 0.3,
                bulk: 10.0,
                k: -1.0,
            },
        ];
        let multi = SethHillMulti::new(&terms).unwrap();
        #[rustfmt::skip]
        let ff = Matrix::from(&[
            [1.20, 0.30, 0.00],
            [0.00, 0.95, 0.00],
            [0.05, 0.00, 0.90],
        ]);
        let mut pp = Matrix::new(3, 3);
        multi.first_piola_kirchhoff(&mut pp, &ff).unwrap();

        let mut pp_a = Matrix::new(3, 3);
        let mut pp_b = Matrix::new(3, 3);
        SethHill::new(1.0, 50.0, 2.0)
            .unwrap()
            .first_piola_kirchhoff(&mut pp_a, &ff)
            .unwrap();
        SethHill::new(0.3, 10.0, -1.0)
            .unwrap()
            .first_piola_kirchhoff(&mut pp_b, &ff)
            .unwrap();
        let mut correct = Matrix::new(3, 3);
        mat_add(&mut correct, 1.0, &pp_a, 1.0, &pp_b).unwrap();
        mat_approx_eq(&pp, &correct, 1e-13);
    }
}
