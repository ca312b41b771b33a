use crate::core::data::colour::Colour;

/// Deterministic colour for an iteration count.
///
/// Points that exhaust the iteration bound are interior and map to a fixed
/// black; escaped points fall on a polynomial blue-white gradient over the
/// normalised count.
#[must_use]
pub fn iterations_to_colour(iterations: u32, max_iterations: u32) -> Colour {
    if iterations >= max_iterations {
        return Colour::BLACK;
    }

    let t = f64::from(iterations) / f64::from(max_iterations);

    Colour {
        r: (9.0 * (1.0 - t) * t * t * t * 255.0) as u8,
        g: (15.0 * (1.0 - t) * (1.0 - t) * t * t * 255.0) as u8,
        b: (8.5 * (1.0 - t) * (1.0 - t) * (1.0 - t) * t * 255.0) as u8,
    }
}
