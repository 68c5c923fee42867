use super::{LpfTarget, Model};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Uniaxial tension/compression along direction 0
///
/// The lateral faces are free of normal forces and the cube keeps its shape (no shear).
pub fn uniaxial(model: &mut Model) {
    model.external.force.normal = [Some(1.0), Some(0.0), Some(0.0)];
    model.external.force.shear[0][1] = Some(0.0);
    model.external.force.shear[1][2] = Some(0.0);
    model.external.force.shear[0][2] = Some(0.0);
    model.external.gridvec.symmetry = [true, true, true];
    model.global.lpf_target = Some(LpfTarget::ForceNormal);
    model.global.title = "Uniaxial".to_string();
}

/// Equibiaxial tension/compression along directions 0 and 1
pub fn biaxial(model: &mut Model) {
    model.external.force.normal = [Some(1.0), Some(1.0), Some(0.0)];
    model.external.gridvec.symmetry = [true, true, true];
    model.external.gridvec.components[1][0] = Some(0.0);
    model.external.gridvec.components[2][0] = Some(0.0);
    model.external.gridvec.components[2][1] = Some(0.0);
    model.global.lpf_target = Some(LpfTarget::ForceNormal);
    model.global.title = "Biaxial".to_string();
}

/// Planar (pure) shear: tension along direction 0 with fixed length of edge 1
pub fn planar_shear(model: &mut Model) {
    model.external.force.normal[0] = Some(1.0);
    model.external.force.normal[2] = Some(0.0);
    model.external.force.shear[0][1] = Some(0.0);
    model.external.force.shear[1][2] = Some(0.0);
    model.external.force.shear[0][2] = Some(0.0);
    model.external.gridvec.length[1] = Some(1.0);
    model.external.gridvec.symmetry = [true, true, true];
    model.global.lpf_target = Some(LpfTarget::ForceNormal);
    model.global.title = "Planar Shear".to_string();
}

/// Simple shear: shear force on face 0 along edge 1
///
/// Edges 0 and 2 keep their initial directions and lengths; edge 1 keeps its height.
pub fn simple_shear(model: &mut Model) {
    model.external.force.shear[0][1] = Some(1.0);
    for i in 0..3 {
        model.external.gridvec.components[i][0] = Some(if i == 0 { 1.0 } else { 0.0 });
        model.external.gridvec.components[i][2] = Some(if i == 2 { 1.0 } else { 0.0 });
    }
    model.external.gridvec.components[1][1] = Some(1.0);
    model.external.gridvec.components[2][1] = Some(0.0);
    model.global.lpf_target = Some(LpfTarget::ForceShear);
    model.global.title = "Simple Shear".to_string();
}

/// Simple shear without normal force on face 2
///
/// Edge 2 may change its length but keeps its direction.
pub fn simple_shear_free3(model: &mut Model) {
    model.external.force.normal[2] = Some(0.0);
    model.external.force.shear[0][1] = Some(1.0);
    for i in 0..3 {
        model.external.gridvec.components[i][0] = Some(if i == 0 { 1.0 } else { 0.0 });
    }
    model.external.gridvec.components[0][2] = Some(0.0);
    model.external.gridvec.components[1][2] = Some(0.0);
    model.external.gridvec.components[1][1] = Some(1.0);
    model.external.gridvec.components[2][1] = Some(0.0);
    model.global.lpf_target = Some(LpfTarget::ForceShear);
    model.global.title = "Simple Shear (no normal force on surface 3)".to_string();
}

/// Simple shear without normal forces on faces 1 and 2
///
/// Edges 1 and 2 may change their lengths; edge 2 keeps its direction.
pub fn simple_shear_free2_free3(model: &mut Model) {
    model.external.force.normal[1] = Some(0.0);
    model.external.force.normal[2] = Some(0.0);
    model.external.force.shear[0][1] = Some(1.0);
    for i in 0..3 {
        model.external.gridvec.components[i][0] = Some(if i == 0 { 1.0 } else { 0.0 });
    }
    model.external.gridvec.components[0][2] = Some(0.0);
    model.external.gridvec.components[1][2] = Some(0.0);
    model.external.gridvec.components[2][1] = Some(0.0);
    model.global.lpf_target = Some(LpfTarget::ForceShear);
    model.global.title = "Simple Shear (no normal force on surfaces 2 and 3)".to_string();
}

/// Defines the built-in load cases
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadCase {
    /// Normal force on face 0; see [uniaxial]
    Uniaxial,

    /// Equal normal forces on faces 0 and 1; see [biaxial]
    Biaxial,

    /// Normal force on face 0 with the length of edge 1 fixed; see [planar_shear]
    PlanarShear,

    /// Shear force on face 0 along edge 1 with edges 0 and 2 fixed; see [simple_shear]
    SimpleShear,

    /// Simple shear with a free normal on face 2; see [simple_shear_free3]
    SimpleShearFree3,

    /// Simple shear with free normals on faces 1 and 2; see [simple_shear_free2_free3]
    SimpleShearFree2Free3,
}

impl LoadCase {
    /// Returns all built-in load cases
    pub fn all() -> [LoadCase; 6] {
        [
            LoadCase::Uniaxial,
            LoadCase::Biaxial,
            LoadCase::PlanarShear,
            LoadCase::SimpleShear,
            LoadCase::SimpleShearFree3,
            LoadCase::SimpleShearFree2Free3,
        ]
    }

    /// Returns the load case corresponding to a name
    ///
    /// Underscores and letter case are ignored, e.g., "simple_shear" and "SimpleShear" are equivalent.
    pub fn from_name(name: &str) -> Result<Self, StrError> {
        let key: String = name.chars().filter(|c| *c != '_').collect::<String>().to_lowercase();
        match key.as_str() {
            "uniaxial" => Ok(LoadCase::Uniaxial),
            "biaxial" => Ok(LoadCase::Biaxial),
            "planarshear" => Ok(LoadCase::PlanarShear),
            "simpleshear" => Ok(LoadCase::SimpleShear),
            "simpleshearfree3" => Ok(LoadCase::SimpleShearFree3),
            "simpleshearfree2free3" => Ok(LoadCase::SimpleShearFree2Free3),
            _ => Err("load case name is unknown"),
        }
    }

    /// Returns the name of the load case
    pub fn name(&self) -> &'static str {
        match self {
            LoadCase::Uniaxial => "uniaxial",
            LoadCase::Biaxial => "biaxial",
            LoadCase::PlanarShear => "planar_shear",
            LoadCase::SimpleShear => "simple_shear",
            LoadCase::SimpleShearFree3 => "simple_shear_free3",
            LoadCase::SimpleShearFree2Free3 => "simple_shear_free2_free3",
        }
    }

    /// Applies the load case to the model (see [Model::set_load_case])
    pub fn apply(&self, model: &mut Model) {
        let function: fn(&mut Model) = match self {
            LoadCase::Uniaxial => uniaxial,
            LoadCase::Biaxial => biaxial,
            LoadCase::PlanarShear => planar_shear,
            LoadCase::SimpleShear => simple_shear,
            LoadCase::SimpleShearFree3 => simple_shear_free3,
            LoadCase::SimpleShearFree2Free3 => simple_shear_free2_free3,
        };
        model.set_load_case(function);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LoadCase;
    use crate::cube::{DofSets, LpfTarget, Model};

    #[test]
    fn from_name_and_name_work() {
        for case in LoadCase::all() {
            assert_eq!(LoadCase::from_name(case.name()).unwrap(), case);
        }
        assert_eq!(LoadCase::from_name("SimpleShear").unwrap(), LoadCase::SimpleShear);
        assert_eq!(LoadCase::from_name("planarshear").unwrap(), LoadCase::PlanarShear);
        assert_eq!(LoadCase::from_name("triaxial").err(), Some("load case name is unknown"));
    }

    #[test]
    fn all_load_cases_give_nine_equations() {
        for case in LoadCase::all() {
            let mut model = Model::new();
            case.apply(&mut model);
            let dofs = DofSets::new(&model.external);
            assert_eq!(dofs.n_equation(), 9);
            assert!(model.global.lpf_target.is_some());
            assert!(!model.global.title.is_empty());
        }
    }

    #[test]
    fn uniaxial_works() {
        let mut model = Model::new();
        LoadCase::Uniaxial.apply(&mut model);
        let dofs = DofSets::new(&model.external);
        assert_eq!(dofs.force_normal, &[0, 1, 2]);
        assert_eq!(dofs.force_shear, &[(0, 1), (0, 2), (1, 2)]);
        assert_eq!(dofs.symmetry, &[0, 1, 2]);
        assert_eq!(model.global.lpf_target, Some(LpfTarget::ForceNormal));
        assert_eq!(model.global.title, "Uniaxial");
    }

    #[test]
    fn simple_shear_works() {
        let mut model = Model::new();
        LoadCase::SimpleShear.apply(&mut model);
        let dofs = DofSets::new(&model.external);
        assert_eq!(dofs.force_shear, &[(0, 1)]);
        assert_eq!(
            dofs.gridvec_components,
            &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
        assert!(dofs.symmetry.is_empty());
        assert_eq!(model.external.gridvec.components[2][2], Some(1.0));
        assert_eq!(model.external.gridvec.components[1][1], Some(1.0));
        assert_eq!(model.external.gridvec.components[0][1], None);
        assert_eq!(model.global.lpf_target, Some(LpfTarget::ForceShear));
    }

    #[test]
    fn simple_shear_variants_work() {
        let mut model = Model::new();
        LoadCase::SimpleShearFree3.apply(&mut model);
        let dofs = DofSets::new(&model.external);
        assert_eq!(dofs.force_normal, &[2]);
        assert_eq!(
            dofs.gridvec_components,
            &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]
        );

        let mut model = Model::new();
        LoadCase::SimpleShearFree2Free3.apply(&mut model);
        let dofs = DofSets::new(&model.external);
        assert_eq!(dofs.force_normal, &[1, 2]);
        assert_eq!(dofs.gridvec_components, &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)]);
        assert_eq!(
            model.global.title,
            "Simple Shear (no normal force on surfaces 2 and 3)"
        );
    }

    #[test]
    fn biaxial_and_planar_shear_work() {
        let mut model = Model::new();
        LoadCase::Biaxial.apply(&mut model);
        let dofs = DofSets::new(&model.external);
        assert_eq!(dofs.force_normal, &[0, 1, 2]);
        assert_eq!(dofs.gridvec_components, &[(1, 0), (2, 0), (2, 1)]);

        let mut model = Model::new();
        LoadCase::PlanarShear.apply(&mut model);
        let dofs = DofSets::new(&model.external);
        assert_eq!(dofs.force_normal, &[0, 2]);
        assert_eq!(dofs.gridvec_length, &[1]);
        assert_eq!(model.external.gridvec.length[1], Some(1.0));
    }
}
