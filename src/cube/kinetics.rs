use crate::base::{check_t2, general_tensor, transposed};
use crate::material::Hyperelastic;
use crate::StrError;
use russell_lab::{mat_mat_mul, Matrix, Vector};
use serde::{Deserialize, Serialize};

/// Holds the force (or traction) vectors acting on the three independent faces of the cube
///
/// Index convention: rows correspond to directions and columns to faces (or edges),
/// except for `shear` where `shear[i][j]` is the component of the vector on face `i`
/// along the edge `j`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FaceVectors {
    /// Vectors acting on each face (columns), e.g., df = P · dA
    pub components: Matrix,

    /// Normal components (projection onto the face normal)
    pub normal: Vector,

    /// Shear components (projection onto the edges); the diagonal is zero
    pub shear: Matrix,
}

impl FaceVectors {
    /// Allocates a new instance with all values set to NaN
    pub fn new() -> Self {
        FaceVectors {
            components: Matrix::filled(3, 3, f64::NAN),
            normal: Vector::filled(3, f64::NAN),
            shear: Matrix::filled(3, 3, f64::NAN),
        }
    }
}

/// Returns the Euclidean norm of column `j`
fn column_norm(a: &Matrix, j: usize) -> f64 {
    f64::sqrt(a.get(0, j) * a.get(0, j) + a.get(1, j) * a.get(1, j) + a.get(2, j) * a.get(2, j))
}

/// Returns the dot product between column `ja` of `a` and column `jb` of `b`
fn column_dot(a: &Matrix, ja: usize, b: &Matrix, jb: usize) -> f64 {
    a.get(0, ja) * b.get(0, jb) + a.get(1, ja) * b.get(1, jb) + a.get(2, ja) * b.get(2, jb)
}

/// Computes the forces on the undeformed face elements given the first Piola-Kirchhoff stress
///
/// ```text
/// df = P · dA
/// normal[i]   = dAᵢ · dfᵢ / ‖dAᵢ‖
/// shear[i][j] = dXⱼ · dfᵢ / ‖dXⱼ‖    (i ≠ j)
/// ```
///
/// # Input
///
/// * `pp` -- first Piola-Kirchhoff stress P
/// * `edges` -- the reference edges dX (columns)
/// * `areas` -- the reference face (area) vectors dA (columns)
pub fn force_from_stress(pp: &Matrix, edges: &Matrix, areas: &Matrix) -> Result<FaceVectors, StrError> {
    check_t2(pp)?;
    check_t2(edges)?;
    check_t2(areas)?;
    let mut df = Matrix::new(3, 3);
    mat_mat_mul(&mut df, 1.0, pp, areas, 0.0)?;
    let mut normal = Vector::new(3);
    let mut shear = Matrix::new(3, 3);
    for i in 0..3 {
        normal[i] = column_dot(areas, i, &df, i) / column_norm(areas, i);
        for j in 0..3 {
            if j != i {
                shear.set(i, j, column_dot(edges, j, &df, i) / column_norm(edges, j));
            }
        }
    }
    Ok(FaceVectors {
        components: df,
        normal,
        shear,
    })
}

/// Computes the tractions on the undeformed face elements given the first Piola-Kirchhoff stress
///
/// ```text
/// df = P · dA
/// components[:,i] = dfᵢ / ‖dAᵢ‖
/// normal[i]       = dAᵢ · dfᵢ / ‖dAᵢ‖²
/// shear[i][j]     = dXⱼ · dfᵢ / (‖dAᵢ‖ ‖dXⱼ‖)    (i ≠ j)
/// ```
pub fn traction_from_stress(pp: &Matrix, edges: &Matrix, areas: &Matrix) -> Result<FaceVectors, StrError> {
    check_t2(pp)?;
    check_t2(edges)?;
    check_t2(areas)?;
    let mut df = Matrix::new(3, 3);
    mat_mat_mul(&mut df, 1.0, pp, areas, 0.0)?;
    let mut components = Matrix::new(3, 3);
    let mut normal = Vector::new(3);
    let mut shear = Matrix::new(3, 3);
    for i in 0..3 {
        let area = column_norm(areas, i);
        for k in 0..3 {
            components.set(k, i, df.get(k, i) / area);
        }
        normal[i] = column_dot(areas, i, &df, i) / (area * area);
        for j in 0..3 {
            if j != i {
                shear.set(i, j, column_dot(edges, j, &df, i) / (area * column_norm(edges, j)));
            }
        }
    }
    Ok(FaceVectors {
        components,
        normal,
        shear,
    })
}

/// Computes the Cauchy stress σ = P Fᵀ / J given the first Piola-Kirchhoff stress
pub fn cauchy_from_stress(pp: &Matrix, ff: &Matrix) -> Result<Matrix, StrError> {
    check_t2(pp)?;
    let ff = general_tensor(ff)?;
    let jj = ff.determinant();
    let mut sig = Matrix::new(3, 3);
    mat_mat_mul(&mut sig, 1.0 / jj, pp, &transposed(&ff).as_matrix(), 0.0)?;
    Ok(sig)
}

/// Computes the forces on the undeformed face elements (see [force_from_stress])
pub fn force(ff: &Matrix, law: &Hyperelastic, edges: &Matrix, areas: &Matrix) -> Result<FaceVectors, StrError> {
    let pp = law.stress(ff)?;
    force_from_stress(&pp, edges, areas)
}

/// Computes the tractions on the undeformed face elements (see [traction_from_stress])
pub fn traction(ff: &Matrix, law: &Hyperelastic, edges: &Matrix, areas: &Matrix) -> Result<FaceVectors, StrError> {
    let pp = law.stress(ff)?;
    traction_from_stress(&pp, edges, areas)
}

/// Computes the Cauchy stress tensor
pub fn cauchy(ff: &Matrix, law: &Hyperelastic) -> Result<Matrix, StrError> {
    let pp = law.stress(ff)?;
    cauchy_from_stress(&pp, ff)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
