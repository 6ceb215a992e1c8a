//! Capital expenditure reserve scaled by building age.

/// Annual reserve per unit before the age adjustment.
pub const BASE_CAPEX_RESERVE_PER_UNIT: f64 = 300.0;

/// Reserve multiplier for a building of the given age in years.
///
/// | Age | Multiplier |
/// |-----|-----------|
/// | ≤ 10 | 0.75 |
/// | 11–20 | 1.00 |
/// | 21–30 | 1.25 |
/// | 31–50 | 1.50 |
/// | > 50 | 2.00 |
///
/// Negative ages (construction dated after the as-of year) are treated as new.
pub fn age_multiplier(age_years: i32) -> f64 {
    match age_years {
        i32::MIN..=10 => 0.75,
        11..=20 => 1.0,
        21..=30 => 1.25,
        31..=50 => 1.5,
        _ => 2.0,
    }
}

/// Annual capex reserve for `unit_count` units built in `year_built`, as of `as_of_year`.
///
/// # Examples
/// ```
/// use deal_models::financial::capex_reserve;
///
/// // 41-year-old single family home
/// assert_eq!(capex_reserve(1985, 1, 2026), 450.0);
/// // New fourplex
/// assert_eq!(capex_reserve(2024, 4, 2026), 900.0);
/// ```
pub fn capex_reserve(year_built: i32, unit_count: u32, as_of_year: i32) -> f64 {
    let age = as_of_year.saturating_sub(year_built);
    BASE_CAPEX_RESERVE_PER_UNIT * age_multiplier(age) * f64::from(unit_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(age_multiplier(0), 0.75);
        assert_eq!(age_multiplier(10), 0.75);
        assert_eq!(age_multiplier(11), 1.0);
        assert_eq!(age_multiplier(20), 1.0);
        assert_eq!(age_multiplier(21), 1.25);
        assert_eq!(age_multiplier(30), 1.25);
        assert_eq!(age_multiplier(31), 1.5);
        assert_eq!(age_multiplier(50), 1.5);
        assert_eq!(age_multiplier(51), 2.0);
        assert_eq!(age_multiplier(120), 2.0);
    }

    #[test]
    fn test_future_construction_treated_as_new() {
        assert_eq!(age_multiplier(-3), 0.75);
        assert_eq!(capex_reserve(2030, 2, 2026), 450.0);
    }

    #[test]
    fn test_multiplier_is_non_decreasing_with_age() {
        let mut last = 0.0;
        for age in -5..150 {
            let m = age_multiplier(age);
            assert!(m >= last);
            last = m;
        }
    }

    #[test]
    fn test_reserve_scales_with_units() {
        assert_eq!(capex_reserve(1960, 10, 2026), 6_000.0);
        assert_eq!(capex_reserve(1960, 0, 2026), 0.0);
    }
}
