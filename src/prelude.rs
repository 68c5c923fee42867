//! Makes available common structures needed to evaluate the equilibrium of the cube
//!
//! You may write `use cubrium::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Control, ParamHyperelastic, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::cube::{equilibrium, recover, residual_function, system, LoadCase, LpfTarget, Model, Snapshot};
pub use crate::material::{Hyperelastic, HyperelasticTrait};
pub use crate::util::{read_trajectory, ExportData, FileIo};
