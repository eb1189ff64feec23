/// A smooth real function of one variable.
pub trait Curve {
    fn value(&self, x: f64) -> f64;

    fn derivative(&self, x: f64) -> f64;

    /// Symmetric difference quotient, for checking `derivative` against `value`.
    fn central_difference(&self, x: f64, h: f64) -> f64 {
        (self.value(x + h) - self.value(x - h)) / (2.0 * h)
    }
}
