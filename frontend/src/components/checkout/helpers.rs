//! Pure helpers for the checkout view: footprint thresholds and the width
//! of the impact meter. Kept free of DOM types so they can be unit tested.

/// Footprint above which the summary is styled as high-impact.
pub const IMPACT_WARN_KG: f64 = 15.0;

/// Scale ceiling for the impact meter; totals at or above render full.
pub const IMPACT_METER_MAX_KG: f64 = 30.0;

pub fn impact_is_high(total_kg: f64) -> bool {
    total_kg > IMPACT_WARN_KG
}

/// Meter fill as a percentage, clamped to 0..=100.
pub fn impact_meter_width(total_kg: f64) -> f64 {
    ((total_kg / IMPACT_METER_MAX_KG) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_threshold_is_exclusive() {
        assert!(!impact_is_high(15.0));
        assert!(impact_is_high(15.1));
        assert!(!impact_is_high(0.0));
    }

    #[test]
    fn meter_clamps_to_full() {
        assert_eq!(impact_meter_width(0.0), 0.0);
        assert_eq!(impact_meter_width(15.0), 50.0);
        assert_eq!(impact_meter_width(60.0), 100.0);
    }
}
