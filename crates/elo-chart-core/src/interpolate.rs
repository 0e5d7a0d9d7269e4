// File: crates/elo-chart-core/src/interpolate.rs
// Summary: Natural cubic spline with clamped (non-extrapolating) evaluation.

/// Natural cubic spline through strictly increasing knots.
///
/// Evaluation outside the knot range holds the boundary value. One knot gives
/// a constant, two knots a straight line.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    // second derivatives at each knot
    m: Vec<f64>,
}

impl CubicSpline {
    /// Build a spline; returns `None` when `points` is empty.
    /// Callers guarantee strictly increasing x.
    pub fn new(points: &[(f64, f64)]) -> Option<Self> {
        if points.is_empty() { return None; }
        let xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.1).collect();
        let m = second_derivatives(&xs, &ys);
        Some(Self { xs, ys, m })
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Spline value at `x`; NaN in gives NaN out.
    pub fn eval(&self, x: f64) -> f64 {
        if x.is_nan() { return f64::NAN; }
        let n = self.xs.len();
        if n == 1 || x <= self.xs[0] { return self.ys[0]; }
        if x >= self.xs[n - 1] { return self.ys[n - 1]; }

        // segment i such that xs[i] <= x < xs[i + 1]
        let i = match self.xs.binary_search_by(|k| k.total_cmp(&x)) {
            Ok(i) => return self.ys[i],
            Err(i) => i - 1,
        };
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / 6.0
    }

    /// Evaluate on `lo, lo + step, ...` and always end exactly on the last knot,
    /// even when `step` does not divide the knot range.
    pub fn sample_grid(&self, step: f64) -> Vec<(f64, f64)> {
        let (lo, hi) = self.x_range();
        let mut out: Vec<(f64, f64)> = crate::grid::arange_inclusive(lo, hi, step)
            .into_iter()
            .map(|x| (x, self.eval(x)))
            .collect();
        let last = (hi, self.ys[self.ys.len() - 1]);
        match out.last_mut() {
            // within float drift of the knot: snap onto it
            Some(p) if hi - p.0 <= step * 1e-6 => *p = last,
            _ => out.push(last),
        }
        out
    }
}

/// Solve the tridiagonal system for natural boundary conditions (m0 = mn = 0).
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut m = vec![0.0; n];
    if n < 3 { return m; }

    let mut c_prime = vec![0.0; n];
    let mut d_prime = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = xs[i] - xs[i - 1];
        let h1 = xs[i + 1] - xs[i];
        let a = h0;
        let b = 2.0 * (h0 + h1);
        let c = h1;
        let d = 6.0 * ((ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0);
        let denom = b - a * c_prime[i - 1];
        c_prime[i] = c / denom;
        d_prime[i] = (d - a * d_prime[i - 1]) / denom;
    }
    for i in (1..n - 1).rev() {
        m[i] = d_prime[i] - c_prime[i] * m[i + 1];
    }
    m
}
