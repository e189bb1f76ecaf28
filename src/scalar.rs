//! Scalar type and the constants shared by the geometry code.

pub type Scalar = f64;

/// Tolerance for geometric comparisons: parallel rays, degenerate triangles
/// and shadow-ray self hits.
pub const EPSILON: Scalar = 1e-4;

pub const PI: Scalar = std::f64::consts::PI;
pub const HALF_PI: Scalar = std::f64::consts::FRAC_PI_2;
pub const QUARTER_PI: Scalar = std::f64::consts::FRAC_PI_4;
