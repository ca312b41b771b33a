use crate::core::data::complex::Complex;

/// Escape-time iteration count for a single point.
///
/// Iterates `z = z^2 + c` from zero and counts the steps until `|z|` exceeds
/// `escape_radius`, capped at `max_iterations`. Points that never escape
/// within the bound are considered interior and return `max_iterations`.
#[must_use]
pub fn iterations_for_point(c: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
    let escape_squared = escape_radius * escape_radius;
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        if z.magnitude_squared() > escape_squared {
            return iteration;
        }
        z = z * z + c;
    }

    max_iterations
}
