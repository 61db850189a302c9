/// Significant digits kept for serialized coordinates and normals.
pub const DEFAULT_DIGITS: u32 = 3;

/// Values smaller than this serialize as a bare `0`.
pub const DEFAULT_EPSILON: f64 = 1e-3;

/// Round to `digits` significant digits.
pub fn round_sig(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits as i32 - 1 - magnitude);
    (value * factor).round() / factor
}

/// Serialize a float sequence as a compact space-separated list.
///
/// Raw tessellator output carries full double precision; trimming to a
/// few significant digits shrinks the emitted X3D without visibly
/// changing the rendering. Near-zero values snap to `0`.
pub fn compact_floats<I>(values: I, digits: u32, epsilon: f64) -> String
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .map(|v| {
            if v.abs() < epsilon {
                "0".to_string()
            } else {
                round_sig(v, digits).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
