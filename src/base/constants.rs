/// Defines the directory where the result files are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/cubrium/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/cubrium/test";

/// Number of components of the displacement gradient (unknowns without the LPF)
pub const N_DISPLACEMENT_GRADIENT: usize = 9;

/// Number of quantity groups that may be scaled by the load-proportionality factor
pub const N_LPF_GROUP: usize = 6;
