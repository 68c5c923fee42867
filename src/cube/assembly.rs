use super::{cauchy_from_stress, force_from_stress, traction_from_stress, Model, Snapshot};
use crate::base::{deformation_gradient, gridvectors, matrix_determinant, N_DISPLACEMENT_GRADIENT, N_LPF_GROUP};
use crate::StrError;
use russell_lab::Vector;

/// Pairs of gridvector components (a, b) constrained by the symmetry conditions Fₐ = F_b
const SYMMETRY_PAIRS: [((usize, usize), (usize, usize)); 3] = [((0, 1), (1, 0)), ((1, 2), (2, 1)), ((2, 0), (0, 2))];

/// Error returned when a prescribed slot was cleared after the model update
const STALE: StrError = "model must be updated again after changing the prescribed values";

/// Computes the internal quantities for a trial state (H, lpf)
///
/// Updates `model.internal` and `model.external.lpf` and returns the LPF multipliers of each group.
fn compute_internal(hh: &[f64], lpf: f64, model: &mut Model) -> Result<[f64; N_LPF_GROUP], StrError> {
    let law = match &model.global.constitution.model {
        Some(law) => law,
        None => return Err("model must be updated before evaluating the equilibrium"),
    };
    let lpf_target = match model.global.lpf_target {
        Some(target) => target,
        None => return Err("model must be updated before evaluating the equilibrium"),
    };

    // kinematics
    let ff = deformation_gradient(hh)?;

    // load-proportionality factors of each group
    let mut lpfs = [1.0; N_LPF_GROUP];
    lpfs[lpf_target.index()] = lpf;
    model.external.lpf = lpf;

    // kinetics
    let pp = law.stress(&ff)?;
    let edges = &model.global.edges;
    let areas = &model.global.areas;
    model.internal.force = force_from_stress(&pp, edges, areas)?;
    model.internal.traction = traction_from_stress(&pp, edges, areas)?;

    // gridvectors and stress
    let (length, components) = gridvectors(&ff)?;
    model.internal.gridvec.volume_ratio = matrix_determinant(&components)?;
    model.internal.gridvec.length = length;
    model.internal.gridvec.components = components;
    model.internal.cauchy = cauchy_from_stress(&pp, &ff)?;
    Ok(lpfs)
}

/// Assembles the equilibrium equations
///
/// Computes the internal quantities for the trial state and returns the residual vector
///
/// ```text
/// r = -internal + external · lpf
/// ```
///
/// over the prescribed quantities, in the following order: normal forces, shear forces,
/// normal tractions, shear tractions, gridvector lengths, gridvector components and
/// symmetry conditions. Only the group selected by the LPF target is scaled by `lpf`.
///
/// # Input
///
/// * `hh` -- the nine components of the displacement gradient H (row-major)
/// * `lpf` -- the load-proportionality factor
/// * `model` -- the updated model; the internal quantities are overwritten
pub fn system(hh: &[f64], lpf: f64, model: &mut Model) -> Result<Vector, StrError> {
    if model.global.dofs.is_none() {
        return Err("model must be updated before evaluating the equilibrium");
    }
    let lpfs = compute_internal(hh, lpf, model)?;
    let dofs = match &model.global.dofs {
        Some(dofs) => dofs,
        None => return Err("model must be updated before evaluating the equilibrium"),
    };
    let ext = &model.external;
    let int = &model.internal;

    let mut residual = Vector::new(dofs.n_equation());
    let mut m = 0;
    for i in &dofs.force_normal {
        residual[m] = -int.force.normal[*i] + ext.force.normal[*i].ok_or(STALE)? * lpfs[0];
        m += 1;
    }
    for (i, j) in &dofs.force_shear {
        residual[m] = -int.force.shear.get(*i, *j) + ext.force.shear[*i][*j].ok_or(STALE)? * lpfs[1];
        m += 1;
    }
    for i in &dofs.traction_normal {
        residual[m] = -int.traction.normal[*i] + ext.traction.normal[*i].ok_or(STALE)? * lpfs[2];
        m += 1;
    }
    for (i, j) in &dofs.traction_shear {
        residual[m] = -int.traction.shear.get(*i, *j) + ext.traction.shear[*i][*j].ok_or(STALE)? * lpfs[3];
        m += 1;
    }
    for i in &dofs.gridvec_length {
        residual[m] = -int.gridvec.length[*i] + ext.gridvec.length[*i].ok_or(STALE)? * lpfs[4];
        m += 1;
    }
    for (i, j) in &dofs.gridvec_components {
        residual[m] = -int.gridvec.components.get(*i, *j) + ext.gridvec.components[*i][*j].ok_or(STALE)? * lpfs[5];
        m += 1;
    }
    for k in &dofs.symmetry {
        let ((ia, ja), (ib, jb)) = SYMMETRY_PAIRS[*k];
        residual[m] = -int.gridvec.components.get(ia, ja) + int.gridvec.components.get(ib, jb);
        m += 1;
    }
    Ok(residual)
}

/// Returns the residual of the equilibrium equations (see [system])
pub fn equilibrium(hh: &[f64], lpf: f64, model: &mut Model) -> Result<Vector, StrError> {
    system(hh, lpf, model)
}

/// Returns a closure evaluating the residual for the continuation driver
///
/// The closure borrows the model mutably for its whole lifetime.
pub fn residual_function<'a>(model: &'a mut Model) -> impl FnMut(&[f64], f64) -> Result<Vector, StrError> + 'a {
    move |hh: &[f64], lpf: f64| equilibrium(hh, lpf, model)
}

/// Recovers the internal quantities along an equilibrium path
///
/// # Input
///
/// * `trajectory` -- the solutions; each entry holds the nine components of H followed by the LPF
/// * `model` -- the updated model; the internal quantities are overwritten
///
/// # Output
///
/// Returns one independent snapshot per entry of the trajectory.
pub fn recover(trajectory: &[Vec<f64>], model: &mut Model) -> Result<Vec<Snapshot>, StrError> {
    if model.global.dofs.is_none() {
        return Err("model must be updated before evaluating the equilibrium");
    }
    let mut history = Vec::with_capacity(trajectory.len());
    for y in trajectory {
        if y.len() != N_DISPLACEMENT_GRADIENT + 1 {
            return Err("trajectory entries must have 10 components (H and LPF)");
        }
        let (hh, lpf) = (&y[..N_DISPLACEMENT_GRADIENT], y[N_DISPLACEMENT_GRADIENT]);
        compute_internal(hh, lpf, model)?;
        history.push(Snapshot {
            title: model.global.title.clone(),
            lpf,
            displacement_gradient: hh.to_vec(),
            edges: model.global.edges.clone(),
            areas: model.global.areas.clone(),
            internal: model.internal.clone(),
        });
    }
    Ok(history)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{equilibrium, recover, residual_function, system};
    use crate::cube::{LoadCase, Model};
    use russell_lab::{approx_eq, vec_approx_eq};

    fn updated_model(case: LoadCase) -> Model {
        let mut model = Model::new();
        model.set_model(0, &[1.0, 5000.0]).unwrap();
        case.apply(&mut model);
        model.update().unwrap();
        model
    }

    #[test]
    fn system_captures_errors() {
        let mut model = Model::new();
        model.set_model(0, &[1.0, 5000.0]).unwrap();
        LoadCase::Uniaxial.apply(&mut model);
        assert_eq!(
            system(&[0.0; 9], 0.0, &mut model).err(),
            Some("model must be updated before evaluating the equilibrium")
        );
        model.update().unwrap();
        assert_eq!(
            system(&[0.0; 8], 0.0, &mut model).err(),
            Some("displacement gradient must have 9 components")
        );
        model.set_model(1, &[1.0, 5000.0, 0.0]).unwrap();
        assert_eq!(
            equilibrium(&[0.0; 9], 0.0, &mut model).err(),
            Some("model must be updated before evaluating the equilibrium")
        );
    }

    #[test]
    fn system_rejects_prescribed_values_cleared_after_update() {
        let mut model = updated_model(LoadCase::Uniaxial);
        model.external.force.normal[0] = None;
        assert_eq!(
            system(&[0.0; 9], 1.0, &mut model).err(),
            Some("model must be updated again after changing the prescribed values")
        );

        let mut model = updated_model(LoadCase::SimpleShear);
        model.external.gridvec.components[1][1] = None;
        assert_eq!(
            system(&[0.0; 9], 1.0, &mut model).err(),
            Some("model must be updated again after changing the prescribed values")
        );

        // restoring the value is accepted again
        model.external.gridvec.components[1][1] = Some(1.0);
        let r = system(&[0.0; 9], 0.0, &mut model).unwrap();
        vec_approx_eq(&r, &[0.0; 9], 1e-12);
    }

    #[test]
    fn system_gives_zero_residual_in_undeformed_state() {
        for case in LoadCase::all() {
            let mut model = updated_model(case);
            let r = system(&[0.0; 9], 0.0, &mut model).unwrap();
            assert_eq!(r.dim(), 9);
            vec_approx_eq(&r, &[0.0; 9], 1e-12);
            approx_eq(model.internal.gridvec.volume_ratio, 1.0, 1e-15);
            assert_eq!(model.external.lpf, 0.0);
        }
    }

    #[test]
    fn system_scales_only_the_lpf_target() {
        let mut model = updated_model(LoadCase::Uniaxial);
        let r = system(&[0.0; 9], 0.5, &mut model).unwrap();
        // the normal force on face 0 is the only non-zero target
        vec_approx_eq(&r, &[0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0], 1e-12);

        let mut model = updated_model(LoadCase::SimpleShear);
        let r = system(&[0.0; 9], 0.25, &mut model).unwrap();
        // first equation is the shear force; the gridvector targets are not scaled
        approx_eq(r[0], 0.25, 1e-12);
        for m in 1..9 {
            approx_eq(r[m], 0.0, 1e-15);
        }
    }

    #[test]
    fn system_assembles_symmetry_conditions() {
        let mut model = updated_model(LoadCase::Uniaxial);
        let hh = [0.0, 0.1, 0.2, 0.3, 0.0, 0.4, 0.5, 0.6, 0.0];
        let r = system(&hh, 0.0, &mut model).unwrap();
        // F₁₀ - F₀₁, F₂₁ - F₁₂, F₀₂ - F₂₀
        approx_eq(r[6], 0.3 - 0.1, 1e-15);
        approx_eq(r[7], 0.6 - 0.4, 1e-15);
        approx_eq(r[8], 0.2 - 0.5, 1e-15);
    }

    #[test]
    fn system_matches_analytical_uniaxial_response() {
        // incompressible-like neo-Hookean: with lateral stretch t the lateral normal force is zero
        let mut model = updated_model(LoadCase::Uniaxial);
        let (l, t) = (1.2, 0.95);
        let hh = [l - 1.0, 0.0, 0.0, 0.0, t - 1.0, 0.0, 0.0, 0.0, t - 1.0];
        let jj = l * t * t;
        let p0 = 1.0 * (l - jj / l) + 5000.0 * f64::ln(jj) / l;
        let p1 = 1.0 * (t - jj / t) + 5000.0 * f64::ln(jj) / t;
        let lpf = 0.7;
        let r = system(&hh, lpf, &mut model).unwrap();
        approx_eq(r[0], -p0 + lpf, 1e-10);
        approx_eq(r[1], -p1, 1e-10);
        approx_eq(r[2], -p1, 1e-10);
        for m in 3..9 {
            approx_eq(r[m], 0.0, 1e-12);
        }
    }

    #[test]
    fn residual_function_works() {
        let mut model = updated_model(LoadCase::Biaxial);
        let (r1, r2) = {
            let mut fun = residual_function(&mut model);
            (fun(&[0.0; 9], 0.3).unwrap(), fun(&[0.0; 9], 0.0).unwrap())
        };
        approx_eq(r1[0], 0.3, 1e-12);
        approx_eq(r1[1], 0.3, 1e-12);
        approx_eq(r2[0], 0.0, 1e-12);
        assert_eq!(model.external.lpf, 0.0);
    }

    #[test]
    fn recover_captures_errors() {
        let mut model = Model::new();
        assert_eq!(
            recover(&[vec![0.0; 10]], &mut model).err(),
            Some("model must be updated before evaluating the equilibrium")
        );
        let mut model = updated_model(LoadCase::Uniaxial);
        assert_eq!(
            recover(&[vec![0.0; 9]], &mut model).err(),
            Some("trajectory entries must have 10 components (H and LPF)")
        );
    }

    #[test]
    fn recover_returns_independent_snapshots() {
        let mut model = updated_model(LoadCase::Uniaxial);
        let trajectory = vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.1, 0.0, 0.0, 0.0, -0.04, 0.0, 0.0, 0.0, -0.04, 0.2],
            vec![0.2, 0.0, 0.0, 0.0, -0.08, 0.0, 0.0, 0.0, -0.08, 0.4],
        ];
        let history = recover(&trajectory, &mut model).unwrap();
        assert_eq!(history.len(), 3);
        for (snapshot, y) in history.iter().zip(&trajectory) {
            assert_eq!(snapshot.lpf, y[9]);
            assert_eq!(snapshot.displacement_gradient, &y[..9]);
            assert_eq!(snapshot.title, "Uniaxial");
            approx_eq(snapshot.internal.gridvec.components.get(0, 0), 1.0 + y[0], 1e-15);
        }
        approx_eq(history[0].internal.gridvec.volume_ratio, 1.0, 1e-15);
        approx_eq(history[2].internal.gridvec.volume_ratio, 1.2 * 0.92 * 0.92, 1e-14);
        // the model holds the last state
        assert_eq!(model.external.lpf, 0.4);
    }
}
