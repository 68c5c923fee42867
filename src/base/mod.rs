//! Implements the base structures: tensor algebra, kinematics, parameters and control

mod constants;
mod control;
mod kinematics;
mod parameters;
mod tensor;
pub use crate::base::constants::*;
pub use crate::base::control::*;
pub use crate::base::kinematics::*;
pub use crate::base::parameters::*;
pub use crate::base::tensor::*;
