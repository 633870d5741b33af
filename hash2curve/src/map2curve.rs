//! Traits for mapping field elements to points on the curve.

mod sswu;

pub use sswu::*;

use crate::Result;

/// Trait for converting field elements into affine coordinates via a mapping
/// method like Simplified Shallue-van de Woestijne-Ulas.
pub trait MapToCurve<F> {
    /// Map a field element into a curve point.
    ///
    /// # Errors
    /// [`Error::Arithmetic`](crate::Error::Arithmetic) if the field
    /// collaborator fails, which can't happen for a validated mapper.
    fn map_to_curve(&self, u: &F) -> Result<(F, F)>;
}
