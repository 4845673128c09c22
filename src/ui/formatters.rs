//! Shared formatting utilities for UI components.

/// Format an axis tick value; whole numbers print without decimals.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-9 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if val.fract() == 0.0 {
        format!("{:.0}", val)
    } else if abs_val >= 100.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Format a statistic value with smart precision.
pub fn format_stat_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else {
        format!("{:.4}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels() {
        assert_eq!(format_axis_label(2.0), "2");
        assert_eq!(format_axis_label(-20.0), "-20");
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(-1e-12), "0");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn stat_values() {
        assert_eq!(format_stat_value(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_stat_value(1.5), "1.5000");
        assert_eq!(format_stat_value(250.0), "250.00");
    }
}
