/// ln(1 + e^x) without overflow for large positive x.
pub fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// ln(1 + u) / u, continued to 1 at u = 0.
pub fn log1p_ratio(u: f64) -> f64 {
    if u == 0.0 {
        1.0
    } else {
        u.ln_1p() / u
    }
}
