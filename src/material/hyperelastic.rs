use super::{InvariantPolynomial, NeoHookean, SaintVenantKirchhoff, SethHill, SethHillMulti};
use crate::base::{check_t2, ParamHyperelastic};
use crate::StrError;
use russell_lab::Matrix;

/// Specifies the essential functions for hyperelastic (stress-deformation) models
pub trait HyperelasticTrait: Send + Sync {
    /// Computes the first Piola-Kirchhoff stress tensor P given the deformation gradient F
    ///
    /// Degenerate deformations (e.g., det(F) ≤ 0) do not produce errors; the
    /// resulting components may be NaN or infinite.
    fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError>;
}

/// Holds the actual hyperelastic model implementation
pub struct Hyperelastic {
    /// Holds the actual model implementation
    pub actual: Box<dyn HyperelasticTrait>,
}

impl Hyperelastic {
    /// Allocates a new instance
    pub fn new(param: &ParamHyperelastic) -> Result<Self, StrError> {
        let actual: Box<dyn HyperelasticTrait> = match param {
            // Compressible neo-Hookean model
            ParamHyperelastic::NeoHookean { mu, bulk } => Box::new(NeoHookean::new(*mu, *bulk)?),

            // Generalized-strain (Seth-Hill) model
            ParamHyperelastic::SethHill { mu, bulk, k } => Box::new(SethHill::new(*mu, *bulk, *k)?),

            // Superposition of Seth-Hill models
            ParamHyperelastic::SethHillMulti { terms } => Box::new(SethHillMulti::new(terms)?),

            // Polynomial model of the isochoric invariants
            ParamHyperelastic::InvariantPolynomial {
                c10,
                c01,
                c20,
                c30,
                c40,
                bulk,
            } => Box::new(InvariantPolynomial::new([*c10, *c01, *c20, *c30, *c40], *bulk)?),

            // Saint-Venant-Kirchhoff model
            ParamHyperelastic::SaintVenantKirchhoff { mu, bulk } => {
                Box::new(SaintVenantKirchhoff::new(*mu, *bulk)?)
            }
        };
        Ok(Hyperelastic { actual })
    }

    /// Allocates a new instance with a user-defined model
    pub fn from_custom(actual: Box<dyn HyperelasticTrait>) -> Self {
        Hyperelastic { actual }
    }

    /// Computes and returns the first Piola-Kirchhoff stress tensor P(F)
    pub fn stress(&self, ff: &Matrix) -> Result<Matrix, StrError> {
        check_t2(ff)?;
        let mut pp = Matrix::new(3, 3);
        self.actual.first_piola_kirchhoff(&mut pp, ff)?;
        Ok(pp)
    }
}

/// Checks that the elastic moduli are non-negative
pub(crate) fn check_moduli(mu: f64, bulk: f64) -> Result<(), StrError> {
    if mu < 0.0 {
        return Err("shear modulus μ must be non-negative");
    }
    if bulk < 0.0 {
        return Err("bulk modulus K must be non-negative");
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Hyperelastic, HyperelasticTrait};
    use crate::base::{deformation_gradient, ParamHyperelastic};
    use crate::StrError;
    use russell_lab::{mat_approx_eq, mat_copy, mat_scale, Matrix};

    struct Doubler {}

    impl HyperelasticTrait for Doubler {
        fn first_piola_kirchhoff(&self, pp: &mut Matrix, ff: &Matrix) -> Result<(), StrError> {
            mat_copy(pp, ff)?;
            mat_scale(pp, 2.0);
            Ok(())
        }
    }

    fn all_samples() -> Vec<ParamHyperelastic> {
        vec![
            ParamHyperelastic::sample_neo_hookean(),
            ParamHyperelastic::sample_seth_hill(2.0),
            ParamHyperelastic::sample_seth_hill(0.0),
            ParamHyperelastic::sample_seth_hill(-1.5),
            ParamHyperelastic::from_id(2, &[1.0, 100.0, 2.0, 0.5, 50.0, -2.0]).unwrap(),
            ParamHyperelastic::sample_invariant_polynomial(),
            ParamHyperelastic::SaintVenantKirchhoff { mu: 1.0, bulk: 5000.0 },
        ]
    }

    #[test]
    fn new_captures_errors() {
        let param = ParamHyperelastic::NeoHookean { mu: -1.0, bulk: 1.0 };
        assert_eq!(Hyperelastic::new(&param).err(), Some("shear modulus μ must be non-negative"));
        let param = ParamHyperelastic::SethHill {
            mu: 1.0,
            bulk: -1.0,
            k: 2.0,
        };
        assert_eq!(Hyperelastic::new(&param).err(), Some("bulk modulus K must be non-negative"));
        let param = ParamHyperelastic::from_id(2, &[1.0, 1.0, 2.0, -1.0, 1.0, 0.0]).unwrap();
        assert_eq!(Hyperelastic::new(&param).err(), Some("shear modulus μ must be non-negative"));
        let param = ParamHyperelastic::from_id(3, &[0.4, 0.1, 0.0, 0.0, 0.0, -5.0]).unwrap();
        assert_eq!(Hyperelastic::new(&param).err(), Some("bulk modulus K must be non-negative"));
        let param = ParamHyperelastic::SaintVenantKirchhoff { mu: -2.0, bulk: 1.0 };
        assert_eq!(Hyperelastic::new(&param).err(), Some("shear modulus μ must be non-negative"));
    }

    #[test]
    fn stress_captures_errors() {
        let model = Hyperelastic::new(&ParamHyperelastic::sample_neo_hookean()).unwrap();
        let ff = Matrix::new(2, 2);
        assert_eq!(
            model.stress(&ff).err(),
            Some("second-order tensor must be given as a 3×3 matrix")
        );
    }

    #[test]
    fn undeformed_state_is_stress_free() {
        let ff = Matrix::identity(3);
        for param in &all_samples() {
            let model = Hyperelastic::new(param).unwrap();
            let pp = model.stress(&ff).unwrap();
            mat_approx_eq(&pp, &Matrix::new(3, 3), 1e-12);
        }
    }

    #[test]
    fn rigid_rotation_is_stress_free() {
        // rotation of 30° about the z-axis
        let (c, s) = (f64::cos(std::f64::consts::PI / 6.0), f64::sin(std::f64::consts::PI / 6.0));
        let hh = [c - 1.0, -s, 0.0, s, c - 1.0, 0.0, 0.0, 0.0, 0.0];
        let ff = deformation_gradient(&hh).unwrap();
        for param in &all_samples() {
            let model = Hyperelastic::new(param).unwrap();
            let pp = model.stress(&ff).unwrap();
            mat_approx_eq(&pp, &Matrix::new(3, 3), 1e-9);
        }
    }

    #[test]
    fn from_custom_works() {
        let model = Hyperelastic::from_custom(Box::new(Doubler {}));
        let ff = deformation_gradient(&[0.0, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let pp = model.stress(&ff).unwrap();
        #[rustfmt::skip]
        let correct = &[
            [2.0, 1.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
        ];
        mat_approx_eq(&pp, correct, 1e-15);
    }
}
