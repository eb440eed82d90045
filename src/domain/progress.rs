//! Progress - Percentage-of-Target Math for Progress Bars

/// `clamp(current / target × 100, 0, 100)`
///
/// A non-positive or non-finite target yields 0.
pub fn percent_of_target(current: f64, target: f64) -> f32 {
    if !(target.is_finite() && target > 0.0) || !current.is_finite() {
        return 0.0;
    }
    clamp_percent((current / target * 100.0) as f32)
}

/// Clamp a percentage into `[0, 100]`, mapping NaN to 0
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// Ratio as a percentage string with one decimal, e.g. `3.2%`
///
/// Unlike [`percent_of_target`] this is not clamped; it formats rates such as
/// click-through or conversion.
pub fn format_rate(numerator: f64, denominator: f64) -> String {
    if denominator <= 0.0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", numerator / denominator * 100.0)
}

/// Signed change between two periods in whole percent, `None` without a baseline
pub fn percent_change(previous: f64, current: f64) -> Option<f32> {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return None;
    }
    Some((((current - previous) / previous.abs()) * 100.0).round() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_target_clamps_to_full() {
        assert_eq!(percent_of_target(120.0, 100.0), 100.0);
    }

    #[test]
    fn partial_progress() {
        assert_eq!(percent_of_target(45.0, 60.0), 75.0);
    }

    #[test]
    fn zero_or_negative_target_is_empty() {
        assert_eq!(percent_of_target(10.0, 0.0), 0.0);
        assert_eq!(percent_of_target(10.0, -5.0), 0.0);
    }

    #[test]
    fn negative_current_clamps_to_zero() {
        assert_eq!(percent_of_target(-10.0, 100.0), 0.0);
        assert_eq!(clamp_percent(f32::NAN), 0.0);
    }

    #[test]
    fn rate_formatting() {
        assert_eq!(format_rate(32.0, 1000.0), "3.2%");
        assert_eq!(format_rate(1.0, 0.0), "0.0%");
    }

    #[test]
    fn change_between_periods() {
        assert_eq!(percent_change(200.0, 250.0), Some(25.0));
        assert_eq!(percent_change(200.0, 150.0), Some(-25.0));
        assert_eq!(percent_change(0.0, 10.0), None);
    }
}
