//! Level-payment debt service.

/// Monthly payment on a fully amortising loan.
///
/// `payment = L·r·(1+r)^n / ((1+r)^n − 1)` with `r = annual_rate / 12` and
/// `n = term_years · 12`. A zero rate amortises straight-line. A non-positive
/// principal or a zero term has no payment. Once `(1+r)^n` overflows the
/// payment is the interest-only limit `L·r`.
///
/// # Examples
/// ```
/// use deal_models::financial::monthly_payment;
///
/// let payment = monthly_payment(337_500.0, 0.07, 30);
/// assert!((payment - 2_245.40).abs() < 0.01);
///
/// assert_eq!(monthly_payment(120_000.0, 0.0, 10), 1_000.0);
/// assert_eq!(monthly_payment(0.0, 0.07, 30), 0.0);
/// ```
pub fn monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let n = term_years.saturating_mul(12);
    if principal <= 0.0 || n == 0 {
        return 0.0;
    }
    let r = annual_rate / 12.0;
    if r == 0.0 {
        return principal / f64::from(n);
    }
    let growth = (1.0 + r).powf(f64::from(n));
    if !growth.is_finite() {
        return principal * r;
    }
    principal * r * growth / (growth - 1.0)
}
