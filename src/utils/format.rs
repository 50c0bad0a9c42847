//! Number formatting and reductions for cell annotations

/// Fixed-precision formatting with `nan` / `inf` / `-inf` for non-finite values
pub fn format_value(value: f64, precision: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        format!("{:.*}", precision, value)
    }
}

/// Maximum that propagates NaN; `None` for an empty slice
pub fn nan_max(values: &[f64]) -> Option<f64> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |acc, v| {
        if acc.is_nan() || v.is_nan() {
            f64::NAN
        } else if v > acc {
            v
        } else {
            acc
        }
    }))
}
