use crate::base::check_t2;
use crate::cube::Snapshot;
use crate::StrError;
use russell_lab::Matrix;

/// Holds the data of one snapshot prepared for visualization
///
/// The cube is represented by its 8 corners (a hexahedron) and by the centers of its
/// 6 faces. The first three face centers lie on the faces through the origin (with
/// outward normals -dAᵢ) and the last three on the opposite faces (+dAᵢ).
pub struct ExportData {
    /// Reference coordinates of the corners (VTK hexahedron ordering)
    pub cube_points: Vec<[f64; 3]>,

    /// Displacements of the corners
    pub cube_displacement: Vec<[f64; 3]>,

    /// Reference coordinates of the face centers
    pub face_points: Vec<[f64; 3]>,

    /// Displacements of the face centers
    pub face_displacement: Vec<[f64; 3]>,

    /// Cauchy stress components [σ₀₀, σ₁₁, σ₂₂, σ₀₁, σ₁₂, σ₂₀]
    pub cauchy_voigt: [f64; 6],

    /// Load-proportionality factor
    pub lpf: f64,

    /// Reaction forces at the face centers
    pub reaction_force: Vec<[f64; 3]>,

    /// Tractions at the face centers
    pub traction: Vec<[f64; 3]>,
}

impl ExportData {
    /// Allocates a new instance from a snapshot
    pub fn new(snapshot: &Snapshot) -> Result<Self, StrError> {
        let ff = &snapshot.internal.gridvec.components;
        let cube_points = cube_corners(&snapshot.edges)?;
        let face_points = face_centers(&snapshot.edges)?;
        let cube_displacement = displacements(ff, &cube_points)?;
        let face_displacement = displacements(ff, &face_points)?;
        Ok(ExportData {
            cube_points,
            cube_displacement,
            face_points,
            face_displacement,
            cauchy_voigt: cauchy_voigt(&snapshot.internal.cauchy)?,
            lpf: snapshot.lpf,
            reaction_force: face_vectors(&snapshot.internal.force.components)?,
            traction: face_vectors(&snapshot.internal.traction.components)?,
        })
    }
}

/// Returns the column `j` as an array
fn column(a: &Matrix, j: usize) -> [f64; 3] {
    [a.get(0, j), a.get(1, j), a.get(2, j)]
}

/// Returns the sum of the given columns scaled by the given factors
fn combine(a: &Matrix, factors: [f64; 3]) -> [f64; 3] {
    let mut x = [0.0; 3];
    for j in 0..3 {
        let c = column(a, j);
        for i in 0..3 {
            x[i] += factors[j] * c[i];
        }
    }
    x
}

/// Returns the reference coordinates of the 8 corners of the cube spanned by the edges
pub fn cube_corners(edges: &Matrix) -> Result<Vec<[f64; 3]>, StrError> {
    check_t2(edges)?;
    const CORNERS: [[f64; 3]; 8] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 1.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 1.0],
    ];
    Ok(CORNERS.iter().map(|f| combine(edges, *f)).collect())
}

/// Returns the reference coordinates of the 6 face centers of the cube spanned by the edges
pub fn face_centers(edges: &Matrix) -> Result<Vec<[f64; 3]>, StrError> {
    check_t2(edges)?;
    const CENTERS: [[f64; 3]; 6] = [
        [0.0, 0.5, 0.5],
        [0.5, 0.0, 0.5],
        [0.5, 0.5, 0.0],
        [1.0, 0.5, 0.5],
        [0.5, 1.0, 0.5],
        [0.5, 0.5, 1.0],
    ];
    Ok(CENTERS.iter().map(|f| combine(edges, *f)).collect())
}

/// Returns the displacements u = F·X - X of the given points
pub fn displacements(ff: &Matrix, points: &[[f64; 3]]) -> Result<Vec<[f64; 3]>, StrError> {
    check_t2(ff)?;
    Ok(points
        .iter()
        .map(|x| {
            let mut u = [0.0; 3];
            for i in 0..3 {
                u[i] = ff.get(i, 0) * x[0] + ff.get(i, 1) * x[1] + ff.get(i, 2) * x[2] - x[i];
            }
            u
        })
        .collect())
}

/// Returns the Voigt components [σ₀₀, σ₁₁, σ₂₂, σ₀₁, σ₁₂, σ₂₀] of a stress tensor
pub fn cauchy_voigt(sig: &Matrix) -> Result<[f64; 6], StrError> {
    check_t2(sig)?;
    Ok([
        sig.get(0, 0),
        sig.get(1, 1),
        sig.get(2, 2),
        sig.get(0, 1),
        sig.get(1, 2),
        sig.get(2, 0),
    ])
}

/// Returns the vectors at the 6 face centers given the vectors on the 3 positive faces (columns)
///
/// The faces through the origin receive the opposite vectors.
pub fn face_vectors(components: &Matrix) -> Result<Vec<[f64; 3]>, StrError> {
    check_t2(components)?;
    let mut vectors = Vec::with_capacity(6);
    for j in 0..3 {
        let c = column(components, j);
        vectors.push([-c[0], -c[1], -c[2]]);
    }
    for j in 0..3 {
        vectors.push(column(components, j));
    }
    Ok(vectors)
}

/// Returns the indices of the snapshots where the volume ratio changes sign
///
/// Index `k` is returned if the sign of J in snapshot `k` differs from the sign in snapshot `k-1`;
/// a zero volume ratio counts as non-positive.
pub fn volume_ratio_sign_changes(history: &[Snapshot]) -> Vec<usize> {
    let positive: Vec<_> = history.iter().map(|s| s.internal.gridvec.volume_ratio > 0.0).collect();
    (1..positive.len()).filter(|k| positive[*k] != positive[*k - 1]).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
