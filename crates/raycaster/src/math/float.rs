pub trait FloatAsExt {
    /// Returns `Some(f)` if f is far enough from zero (far is given by eps) else returns None
    /// The result value is guaranted to be far enough from 0
    ///
    /// Returns None for NaN and Some(f) for +/- infty
    fn into_non_zero(self, eps: Self) -> Option<f32>;

    /// Returns `Some(f)` is f is finite else returns None
    /// The result value is guaranted to be finite
    ///
    /// Returns None for NaN and +/- infty
    fn into_finite(self) -> Option<f32>;

    /// Returns `Some(f)` if f is strictly positive and finite else returns None
    fn into_positive_finite(self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }

    fn into_finite(self) -> Option<f32> {
        self.is_finite().then_some(self)
    }

    fn into_positive_finite(self) -> Option<f32> {
        self.into_finite().filter(|f| *f > 0.0)
    }
}
