//! Cubrium computes the equilibrium of a homogeneously deformed unit cube of hyperelastic material
//!
//! The cube is loaded by a mix of prescribed face forces, tractions and edge (gridvector)
//! constraints, all scaled by a load-proportionality factor (LPF). The residual of the
//! equilibrium equations is handed to an external path-continuation driver, which traces
//! stress-stretch or force-shear curves.
//!
//! The typical workflow is:
//!
//! 1. allocate a [cube::Model] and select a constitutive model
//! 2. apply one [cube::LoadCase] (or a custom function)
//! 3. call [cube::Model::update]
//! 4. evaluate [cube::equilibrium] repeatedly (continuation driver)
//! 5. call [cube::recover] and write the snapshots with [util::FileIo]

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod cube;
pub mod material;
pub mod prelude;
pub mod util;
