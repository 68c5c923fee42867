use super::{DofSets, FaceVectors};
use crate::base::{check_t2, general_tensor, matrix_determinant, transposed};
use crate::base::{Control, ParamHyperelastic, N_DISPLACEMENT_GRADIENT};
use crate::material::{Hyperelastic, HyperelasticTrait};
use crate::StrError;
use russell_lab::{mat_inverse, mat_scale, Matrix, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the group of external quantities scaled by the load-proportionality factor (LPF)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LpfTarget {
    /// Normal forces
    ForceNormal,

    /// Shear forces
    ForceShear,

    /// Normal tractions
    TractionNormal,

    /// Shear tractions
    TractionShear,

    /// Gridvector lengths
    GridvecLength,

    /// Gridvector components
    GridvecComponents,
}

impl LpfTarget {
    /// Returns the position of the group in the residual vector (0 to 5)
    pub fn index(&self) -> usize {
        match self {
            LpfTarget::ForceNormal => 0,
            LpfTarget::ForceShear => 1,
            LpfTarget::TractionNormal => 2,
            LpfTarget::TractionShear => 3,
            LpfTarget::GridvecLength => 4,
            LpfTarget::GridvecComponents => 5,
        }
    }

    /// Returns the group corresponding to a position (0 to 5)
    pub fn from_index(index: usize) -> Result<Self, StrError> {
        match index {
            0 => Ok(LpfTarget::ForceNormal),
            1 => Ok(LpfTarget::ForceShear),
            2 => Ok(LpfTarget::TractionNormal),
            3 => Ok(LpfTarget::TractionShear),
            4 => Ok(LpfTarget::GridvecLength),
            5 => Ok(LpfTarget::GridvecComponents),
            _ => Err("LPF target index must be in [0, 5]"),
        }
    }
}

/// Holds the constitutive model definition
pub struct Constitution {
    /// Parameters of a built-in model (None if a custom model is used)
    pub param: Option<ParamHyperelastic>,

    /// The resolved model (None until update or set_custom_model)
    pub model: Option<Hyperelastic>,
}

/// Holds global (problem-wide) data
pub struct Global {
    /// Reference edges dX of the cube (columns)
    pub edges: Matrix,

    /// Reference face (area) vectors dA of the cube (columns)
    pub areas: Matrix,

    /// Options passed to the continuation driver
    pub control: Control,

    /// Constitutive model
    pub constitution: Constitution,

    /// Group of external quantities scaled by the LPF
    pub lpf_target: Option<LpfTarget>,

    /// Title of the load case
    pub title: String,

    /// Indices of the prescribed external quantities (None until update)
    pub dofs: Option<DofSets>,
}

/// Holds external targets acting on the faces of the cube
///
/// None means that the quantity is free (not prescribed).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalFace {
    /// Normal components on each face
    pub normal: [Option<f64>; 3],

    /// Shear components; `shear[i][j]` acts on face `i` along edge `j`
    pub shear: [[Option<f64>; 3]; 3],
}

/// Holds external constraints on the gridvectors (deformed edges) of the cube
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalGridvec {
    /// Lengths (stretches) of the edges
    pub length: [Option<f64>; 3],

    /// Components of the edges; `components[i][j]` is the component `i` of edge `j`
    pub components: [[Option<f64>; 3]; 3],

    /// Enables the symmetry conditions F₀₁ = F₁₀, F₁₂ = F₂₁ and F₂₀ = F₀₂
    pub symmetry: [bool; 3],
}

/// Holds external (prescribed) quantities
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct External {
    /// Forces on the faces
    pub force: ExternalFace,

    /// Tractions on the faces
    pub traction: ExternalFace,

    /// Constraints on the gridvectors
    pub gridvec: ExternalGridvec,

    /// The most recent load-proportionality factor
    pub lpf: f64,
}

/// Holds the gridvectors (deformed edges of the cube)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gridvectors {
    /// Lengths of the deformed edges
    pub length: Vector,

    /// Components of the deformed edges (columns), i.e., F
    pub components: Matrix,

    /// Volume ratio J = det(F)
    pub volume_ratio: f64,
}

/// Holds internal (response) quantities computed by the assembly
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Internal {
    /// Forces on the faces
    pub force: FaceVectors,

    /// Tractions on the faces
    pub traction: FaceVectors,

    /// Deformed edges
    pub gridvec: Gridvectors,

    /// Cauchy stress tensor
    pub cauchy: Matrix,
}

impl Internal {
    /// Allocates a new instance with all values set to NaN
    pub fn new() -> Self {
        Internal {
            force: FaceVectors::new(),
            traction: FaceVectors::new(),
            gridvec: Gridvectors {
                length: Vector::filled(3, f64::NAN),
                components: Matrix::filled(3, 3, f64::NAN),
                volume_ratio: f64::NAN,
            },
            cauchy: Matrix::filled(3, 3, f64::NAN),
        }
    }
}

/// Holds the problem definition and state of the homogeneously deformed cube
pub struct Model {
    /// Global data
    pub global: Global,

    /// External (prescribed) quantities
    pub external: External,

    /// Internal (response) quantities
    pub internal: Internal,
}

impl Model {
    /// Allocates a new instance with a unit cube and nothing prescribed
    pub fn new() -> Self {
        Model {
            global: Global {
                edges: Matrix::identity(3),
                areas: Matrix::identity(3),
                control: Control::new(),
                constitution: Constitution {
                    param: None,
                    model: None,
                },
                lpf_target: None,
                title: String::new(),
                dofs: None,
            },
            external: External::default(),
            internal: Internal::new(),
        }
    }

    /// Selects a built-in constitutive model given its id and a flat list of parameters
    ///
    /// See [ParamHyperelastic::from_id] for the available ids.
    pub fn set_model(&mut self, id: usize, parameters: &[f64]) -> Result<&mut Self, StrError> {
        let param = ParamHyperelastic::from_id(id, parameters)?;
        Ok(self.set_param(param))
    }

    /// Selects a built-in constitutive model; the model is resolved by [Model::update]
    pub fn set_param(&mut self, param: ParamHyperelastic) -> &mut Self {
        self.global.constitution.param = Some(param);
        self.global.constitution.model = None;
        self
    }

    /// Installs a user-defined constitutive model
    pub fn set_custom_model(&mut self, actual: Box<dyn HyperelasticTrait>) -> &mut Self {
        self.global.constitution.param = None;
        self.global.constitution.model = Some(Hyperelastic::from_custom(actual));
        self
    }

    /// Sets the reference edges dX and the corresponding face vectors dA = det(dX) dX⁻ᵀ
    pub fn set_edges(&mut self, edges: &Matrix) -> Result<&mut Self, StrError> {
        check_t2(edges)?;
        let det = matrix_determinant(edges)?;
        if det <= 0.0 {
            return Err("edges must form a right-handed system with positive volume");
        }
        let mut edges_inv = Matrix::new(3, 3);
        mat_inverse(&mut edges_inv, edges)?;
        let mut areas = transposed(&general_tensor(&edges_inv)?).as_matrix();
        mat_scale(&mut areas, det);
        self.global.edges = edges.clone();
        self.global.areas = areas;
        Ok(self)
    }

    /// Applies a load case, i.e., a function that configures the external quantities
    ///
    /// The indices of prescribed quantities are cleared; thus [Model::update] must be called again.
    pub fn set_load_case<F>(&mut self, load_case: F) -> &mut Self
    where
        F: FnOnce(&mut Model),
    {
        load_case(self);
        self.global.dofs = None;
        self
    }

    /// Finalizes the problem definition
    ///
    /// Collects the indices of prescribed quantities, resolves the constitutive model,
    /// and checks that the number of equations equals the number of displacement
    /// gradient components.
    pub fn update(&mut self) -> Result<(), StrError> {
        self.global.dofs = None;
        if let Some(msg) = self.global.control.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot update model because control.validate() failed");
        }
        if self.global.lpf_target.is_none() {
            return Err("LPF target must be defined by the load case");
        }
        if self.global.constitution.model.is_none() {
            match &self.global.constitution.param {
                Some(param) => self.global.constitution.model = Some(Hyperelastic::new(param)?),
                None => return Err("constitutive model must be defined"),
            }
        }
        let dofs = DofSets::new(&self.external);
        if dofs.n_equation() != N_DISPLACEMENT_GRADIENT {
            return Err("number of equations must be equal to 9 (the number of displacement gradient components)");
        }
        self.global.dofs = Some(dofs);
        Ok(())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Homogeneously deformed cube\n")?;
        write!(f, "===========================\n")?;
        write!(f, "title = {:?}\n", self.global.title)?;
        match &self.global.constitution.param {
            Some(param) => write!(f, "model = {} {:?}\n", param.id(), param.values())?,
            None => match self.global.constitution.model {
                Some(_) => write!(f, "model = custom\n")?,
                None => write!(f, "model = None\n")?,
            },
        }
        write!(f, "lpf_target = {:?}\n", self.global.lpf_target)?;
        match &self.global.dofs {
            Some(dofs) => write!(f, "n_equation = {}\n", dofs.n_equation())?,
            None => write!(f, "n_equation = None (not updated)\n")?,
        }
        write!(f, "lpf = {:?}\n", self.external.lpf)?;
        write!(f, "\n{}", self.global.control)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
