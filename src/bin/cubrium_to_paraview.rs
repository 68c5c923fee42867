use cubrium::prelude::*;
use cubrium::StrError;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "cubrium_to_paraview",
    about = "Recovers the cube state along an equilibrium path and generates VTU and PVD files for Paraview"
)]
struct Options {
    /// JSON file with the equilibrium path: an array of [H₀₀, H₀₁, ..., H₂₂, lpf] arrays
    trajectory: String,

    /// Load case, e.g., uniaxial, biaxial, planar_shear, simple_shear
    load_case: String,

    /// Constitutive model id
    ///
    /// 0: NeoHookean, 1: SethHill, 2: SethHillMulti, 3: InvariantPolynomial, 4: SaintVenantKirchhoff
    #[structopt(short = "m", long, default_value = "0")]
    model_id: usize,

    /// Material parameters separated by commas, e.g., 1,5000
    #[structopt(short = "p", long, use_delimiter = true, default_value = "1,5000")]
    parameters: Vec<f64>,

    /// Output directory
    #[structopt(short = "o", long, default_value = "/tmp/cubrium/results")]
    out_dir: String,

    /// Filename stem of the output files (defaults to the load case name)
    #[structopt(short = "f", long)]
    fn_stem: Option<String>,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let trajectory = read_trajectory(&options.trajectory)?;

    // model
    let load_case = LoadCase::from_name(&options.load_case)?;
    let mut model = Model::new();
    model.set_model(options.model_id, &options.parameters)?;
    load_case.apply(&mut model);
    model.update()?;

    // recover the cube states
    let history = recover(&trajectory, &mut model)?;

    // write JSON, VTU, and PVD files
    let fn_stem = options.fn_stem.unwrap_or(load_case.name().to_string());
    let mut file_io = FileIo::new(&fn_stem, Some(options.out_dir.as_str()))?;
    file_io.write_history(&history)?;

    // message
    let path_pvd = file_io.path_pvd_cube();
    let thin_line = format!("{:─^1$}", "", path_pvd.len());
    println!("\n\n{}", thin_line);
    println!("VTU files generated; the PVD files are:");
    println!("{}", path_pvd);
    println!("{}", file_io.path_pvd_points());
    println!("{}\n\n", thin_line);
    Ok(())
}
