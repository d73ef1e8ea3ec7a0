//! Number formatting shared by the analysis passes.

/// Formats a metric value the way the UI shows it: integers without a
/// trailing fraction, everything else with the default float rendering.
pub(crate) fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
