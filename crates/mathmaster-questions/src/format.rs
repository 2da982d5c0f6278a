//! Canonical rendering of numeric answers.

/// Round to `decimals` places and render without trailing zeros; integral
/// values render as bare integers. This is the one rendering every
/// generator funnels float answers through, so canonical strings stay
/// consistent across categories.
pub(crate) fn format_decimal(value: f64, decimals: u32) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{rounded:.prec$}", prec = decimals as usize);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
