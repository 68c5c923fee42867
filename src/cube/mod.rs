//! Implements the homogeneously deformed cube: kinetics, problem definition, load cases and assembly

mod assembly;
mod dofs;
mod kinetics;
mod load_case;
mod model;
mod snapshot;
pub use crate::cube::assembly::*;
pub use crate::cube::dofs::*;
pub use crate::cube::kinetics::*;
pub use crate::cube::load_case::*;
pub use crate::cube::model::*;
pub use crate::cube::snapshot::*;
