use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the smallest allowed tolerance (Control)
pub const CONTROL_MIN_TOL: f64 = 1e-15;

/// Defines the smallest allowed perturbation for finite-difference Jacobians (Control)
pub const CONTROL_MIN_JAC_EPS: f64 = 1e-12;

/// Holds the options of the external path-continuation driver
///
/// These values are not used by the equilibrium assembly; they are stored with the
/// model and passed through unchanged to the continuation routine.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Control {
    /// Maximum increment of the displacement gradient components per step
    pub dx_max: f64,

    /// Maximum increment of the load-proportionality factor per step
    pub dlpf_max: f64,

    /// Index of the unknown used as the initial control component
    pub control0: usize,

    /// Perturbation for the finite-difference Jacobian
    pub jac_eps: f64,

    /// Maximum number of continuation steps
    pub max_steps: usize,

    /// Maximum number of step-size reduction cycles
    pub max_cycles: usize,

    /// Maximum number of corrector iterations
    pub max_iter: usize,

    /// Tolerance for the norm of the residual vector
    pub tol: f64,
}

impl Control {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Control {
            dx_max: 0.05,
            dlpf_max: 0.05,
            control0: 10,
            jac_eps: 1e-4,
            max_steps: 250,
            max_cycles: 4,
            max_iter: 20,
            tol: 1e-10,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.dx_max <= 0.0 {
            return Some(format!("dx_max = {:?} is incorrect; it must be > 0.0", self.dx_max));
        }
        if self.dlpf_max <= 0.0 {
            return Some(format!("dlpf_max = {:?} is incorrect; it must be > 0.0", self.dlpf_max));
        }
        if self.jac_eps < CONTROL_MIN_JAC_EPS {
            return Some(format!(
                "jac_eps = {:?} is incorrect; it must be ≥ {:e}",
                self.jac_eps, CONTROL_MIN_JAC_EPS
            ));
        }
        if self.max_steps < 1 {
            return Some(format!("max_steps = {} is incorrect; it must be ≥ 1", self.max_steps));
        }
        if self.max_iter < 1 {
            return Some(format!("max_iter = {} is incorrect; it must be ≥ 1", self.max_iter));
        }
        if self.tol < CONTROL_MIN_TOL {
            return Some(format!(
                "tol = {:?} is incorrect; it must be ≥ {:e}",
                self.tol, CONTROL_MIN_TOL
            ));
        }
        None // all good
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Continuation control\n")?;
        write!(f, "====================\n")?;
        write!(f, "dx_max = {:?}\n", self.dx_max)?;
        write!(f, "dlpf_max = {:?}\n", self.dlpf_max)?;
        write!(f, "control0 = {}\n", self.control0)?;
        write!(f, "jac_eps = {:?}\n", self.jac_eps)?;
        write!(f, "max_steps = {}\n", self.max_steps)?;
        write!(f, "max_cycles = {}\n", self.max_cycles)?;
        write!(f, "max_iter = {}\n", self.max_iter)?;
        write!(f, "tol = {:?}\n", self.tol)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
