//! Random source port for interior cell draws.

/// Produces uniform random values in `[0.0, 1.0)`.
///
/// The generator pulls exactly one value per interior cell, row-major.
pub trait RandomSource {
    /// Return the next uniform draw in `[0.0, 1.0)`.
    fn next_unit(&mut self) -> f64;
}
