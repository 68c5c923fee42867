use super::Internal;
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds an independent copy of the cube state at one point of the equilibrium path
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Title of the load case
    pub title: String,

    /// Load-proportionality factor
    pub lpf: f64,

    /// Displacement gradient (row-major)
    pub displacement_gradient: Vec<f64>,

    /// Reference edges dX of the cube (columns)
    pub edges: Matrix,

    /// Reference face vectors dA of the cube (columns)
    pub areas: Matrix,

    /// Internal (response) quantities
    pub internal: Internal,
}

impl Snapshot {
    /// Reads a JSON file containing the snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(file);
        let snapshot = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(snapshot)
    }

    /// Writes a JSON file with the snapshot
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
