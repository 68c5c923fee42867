use super::ExportData;
use crate::base::DEFAULT_OUT_DIR;
use crate::cube::Snapshot;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt::{self, Write};
use std::fs::{self, File};
use std::io::{BufReader, Write as IoWrite};
use std::path::Path;

/// VTK cell type of the hexahedron with 8 nodes
const VTK_HEXAHEDRON: usize = 12;

/// VTK cell type of the single-node vertex
const VTK_VERTEX: usize = 1;

/// Assists in generating output files
///
/// Each snapshot is saved as a JSON file and as two VTU files: one with the cube
/// (hexahedron) and another with the six face centers (vertices). Two PVD files
/// collect the corresponding time series; the "time" of each entry is the index
/// of the snapshot along the equilibrium path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileIo {
    /// Defines the output directory
    output_dir: String,

    /// Defines the filename stem
    filename_stem: String,

    /// Holds the indices of the output files
    pub indices: Vec<usize>,

    /// Holds the load-proportionality factors corresponding to each output file
    pub lpfs: Vec<f64>,
}

impl FileIo {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `filename_stem` -- the last part of the filename without extension, e.g., "uniaxial"
    /// * `output_directory` -- the directory to save the output files.
    ///   None means that the default directory will be used; see [DEFAULT_OUT_DIR]
    pub fn new(filename_stem: &str, output_directory: Option<&str>) -> Result<Self, StrError> {
        let out_dir = match output_directory {
            Some(d) => d,
            None => DEFAULT_OUT_DIR,
        };
        fs::create_dir_all(out_dir).map_err(|_| "cannot create output directory")?;
        Ok(FileIo {
            output_dir: out_dir.to_string(),
            filename_stem: filename_stem.to_string(),
            indices: Vec::new(),
            lpfs: Vec::new(),
        })
    }

    /// Generates the filename path for the summary file
    pub fn path_summary(&self) -> String {
        format!("{}/{}-summary.json", self.output_dir, self.filename_stem)
    }

    /// Generates the filename path for the snapshot files
    pub fn path_snapshot(&self, index: usize) -> String {
        format!("{}/{}-{:0>20}.json", self.output_dir, self.filename_stem, index)
    }

    /// Generates the filename path for the VTU files with the cube
    pub fn path_vtu_cube(&self, index: usize) -> String {
        format!("{}/{}-cube-{:0>20}.vtu", self.output_dir, self.filename_stem, index)
    }

    /// Generates the filename path for the VTU files with the face centers
    pub fn path_vtu_points(&self, index: usize) -> String {
        format!("{}/{}-points-{:0>20}.vtu", self.output_dir, self.filename_stem, index)
    }

    /// Generates the filename path for the PVD file with the cube
    pub fn path_pvd_cube(&self) -> String {
        format!("{}/{}-cube.pvd", self.output_dir, self.filename_stem)
    }

    /// Generates the filename path for the PVD file with the face centers
    pub fn path_pvd_points(&self) -> String {
        format!("{}/{}-points.pvd", self.output_dir, self.filename_stem)
    }

    /// Reads a JSON file containing this struct
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
        let summary = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(summary)
    }

    /// Writes a JSON file with this struct
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

    /// Reads the snapshot file with the given index
    pub fn read_snapshot(&self, index: usize) -> Result<Snapshot, StrError> {
        Snapshot::read_json(&self.path_snapshot(index))
    }

    /// Writes the snapshot to a JSON file and registers its index
    pub fn write_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), StrError> {
        let index = self.indices.len();
        snapshot.write_json(&self.path_snapshot(index))?;
        self.indices.push(index);
        self.lpfs.push(snapshot.lpf);
        Ok(())
    }

    /// Writes all snapshots of an equilibrium path (JSON, VTU, PVD, and summary files)
    pub fn write_history(&mut self, history: &[Snapshot]) -> Result<(), StrError> {
        for snapshot in history {
            self.write_snapshot(snapshot)?;
            let index = self.indices.len() - 1;
            self.write_vtu(snapshot, index)?;
        }
        self.write_pvd()?;
        self.write_json(&self.path_summary())
    }

    /// Writes the two VTU files associated with a single snapshot to perform visualization with ParaView
    pub fn write_vtu(&self, snapshot: &Snapshot, index: usize) -> Result<(), StrError> {
        let data = ExportData::new(snapshot)?;
        let buffer = vtu_cube(&data).map_err(|_| "cannot format VTU file")?;
        write_file(&self.path_vtu_cube(index), &buffer)?;
        let buffer = vtu_points(&data).map_err(|_| "cannot format VTU file")?;
        write_file(&self.path_vtu_points(index), &buffer)
    }

    /// Writes the two PVD files collecting all snapshots to perform visualization with ParaView
    pub fn write_pvd(&self) -> Result<(), StrError> {
        let files: Vec<_> = self.indices.iter().map(|i| (*i, self.path_vtu_cube(*i))).collect();
        let buffer = pvd(&files).map_err(|_| "cannot format PVD file")?;
        write_file(&self.path_pvd_cube(), &buffer)?;
        let files: Vec<_> = self.indices.iter().map(|i| (*i, self.path_vtu_points(*i))).collect();
        let buffer = pvd(&files).map_err(|_| "cannot format PVD file")?;
        write_file(&self.path_pvd_points(), &buffer)
    }
}

/// Reads a JSON file with an equilibrium path, i.e., an array of [H₀₀, H₀₁, ..., H₂₂, lpf] arrays
pub fn read_trajectory<P>(full_path: &P) -> Result<Vec<Vec<f64>>, StrError>
where
    P: AsRef<OsStr> + ?Sized,
{
    let path = Path::new(full_path).to_path_buf();
    let file = File::open(path).map_err(|_| "cannot open file")?;
    let buffered = BufReader::new(file);
    let trajectory = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
    Ok(trajectory)
}

fn write_file(path: &str, buffer: &str) -> Result<(), StrError> {
    let mut file = File::create(path).map_err(|_| "cannot create file")?;
    file.write_all(buffer.as_bytes()).map_err(|_| "cannot write file")?;
    Ok(())
}

fn write_header(buffer: &mut String, npoint: usize, ncell: usize) -> fmt::Result {
    write!(
        buffer,
        "<?xml version=\"1.0\"?>\n\
         <VTKFile type=\"UnstructuredGrid\" version=\"0.1\" byte_order=\"LittleEndian\">\n\
         <UnstructuredGrid>\n\
         <Piece NumberOfPoints=\"{}\" NumberOfCells=\"{}\">\n",
        npoint, ncell
    )
}

fn write_points(buffer: &mut String, points: &[[f64; 3]]) -> fmt::Result {
    write!(
        buffer,
        "<Points>\n\
         <DataArray type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">\n"
    )?;
    for x in points {
        write!(buffer, "{:?} {:?} {:?} ", x[0], x[1], x[2])?;
    }
    write!(
        buffer,
        "\n</DataArray>\n\
         </Points>\n"
    )
}

fn write_cells(buffer: &mut String, cells: &[Vec<usize>], vtk_type: usize) -> fmt::Result {
    write!(
        buffer,
        "<Cells>\n\
         <DataArray type=\"Int32\" Name=\"connectivity\" format=\"ascii\">\n"
    )?;
    for cell in cells {
        for p in cell {
            write!(buffer, "{} ", p)?;
        }
    }
    write!(
        buffer,
        "\n</DataArray>\n\
         <DataArray type=\"Int32\" Name=\"offsets\" format=\"ascii\">\n"
    )?;
    let mut offset = 0;
    for cell in cells {
        offset += cell.len();
        write!(buffer, "{} ", offset)?;
    }
    write!(
        buffer,
        "\n</DataArray>\n\
         <DataArray type=\"UInt8\" Name=\"types\" format=\"ascii\">\n"
    )?;
    for _ in cells {
        write!(buffer, "{} ", vtk_type)?;
    }
    write!(
        buffer,
        "\n</DataArray>\n\
         </Cells>\n"
    )
}

fn write_data_array(buffer: &mut String, name: &str, values: &[&[f64]]) -> fmt::Result {
    let ncomp = values.first().map(|v| v.len()).unwrap_or(1);
    write!(
        buffer,
        "<DataArray type=\"Float64\" Name=\"{}\" NumberOfComponents=\"{}\" format=\"ascii\">\n",
        name, ncomp
    )?;
    for v in values {
        for x in v.iter() {
            write!(buffer, "{:?} ", x)?;
        }
    }
    write!(buffer, "\n</DataArray>\n")
}

fn write_footer(buffer: &mut String) -> fmt::Result {
    write!(
        buffer,
        "</Piece>\n\
         </UnstructuredGrid>\n\
         </VTKFile>\n"
    )
}

fn as_slices(vectors: &[[f64; 3]]) -> Vec<&[f64]> {
    vectors.iter().map(|v| &v[..]).collect()
}

/// Generates the VTU content for the cube (hexahedron)
fn vtu_cube(data: &ExportData) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    write_header(&mut buffer, data.cube_points.len(), 1)?;
    write_points(&mut buffer, &data.cube_points)?;
    write_cells(&mut buffer, &[(0..8).collect()], VTK_HEXAHEDRON)?;
    write!(&mut buffer, "<PointData Vectors=\"TheVectors\">\n")?;
    write_data_array(&mut buffer, "Displacement", &as_slices(&data.cube_displacement))?;
    write!(&mut buffer, "</PointData>\n")?;
    write!(&mut buffer, "<CellData Scalars=\"TheScalars\">\n")?;
    write_data_array(&mut buffer, "Cauchy Stress", &[&data.cauchy_voigt[..]])?;
    write_data_array(&mut buffer, "Load-Proportionality-Factor (LPF)", &[&[data.lpf]])?;
    write!(&mut buffer, "</CellData>\n")?;
    write_footer(&mut buffer)?;
    Ok(buffer)
}

/// Generates the VTU content for the face centers (vertices)
fn vtu_points(data: &ExportData) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    let npoint = data.face_points.len();
    write_header(&mut buffer, npoint, npoint)?;
    write_points(&mut buffer, &data.face_points)?;
    let cells: Vec<Vec<usize>> = (0..npoint).map(|p| vec![p]).collect();
    write_cells(&mut buffer, &cells, VTK_VERTEX)?;
    write!(&mut buffer, "<PointData Vectors=\"TheVectors\">\n")?;
    write_data_array(&mut buffer, "Displacement", &as_slices(&data.face_displacement))?;
    write_data_array(&mut buffer, "Reaction Force", &as_slices(&data.reaction_force))?;
    write_data_array(&mut buffer, "Traction", &as_slices(&data.traction))?;
    write!(&mut buffer, "</PointData>\n")?;
    write_footer(&mut buffer)?;
    Ok(buffer)
}

/// Generates the PVD content given (timestep, VTU path) pairs
fn pvd(files: &[(usize, String)]) -> Result<String, fmt::Error> {
    let mut buffer = String::new();
    write!(
        &mut buffer,
        "<?xml version=\"1.0\"?>\n\
         <VTKFile type=\"Collection\" version=\"0.1\" byte_order=\"LittleEndian\">\n\
         <Collection>\n"
    )?;
    for (timestep, vtu_fn) in files {
        write!(&mut buffer, "<DataSet timestep=\"{}\" file=\"{}\" />\n", timestep, vtu_fn)?;
    }
    write!(&mut buffer, "</Collection>\n</VTKFile>\n")?;
    Ok(buffer)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
