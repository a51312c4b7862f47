//! End-to-end pricing scenarios across the zero-coupon, fixed-coupon and
//! curve modules.

use approx::assert_relative_eq;

use gilts_bonds::curves::{derive_yield_from_zero_curve, CurvePoint, ZeroCurve};
use gilts_bonds::fixed_coupon::{dmo_price, price_with_curve};
use gilts_bonds::zero_coupon::{
    continuous_price, convexity, duration, dv01, dv01_closed_form, price, time_to_maturity,
    DurationKind, Dv01Options, ZeroCouponPricer,
};
use gilts_core::config::{DEFAULT_DV01_MATURITY_THRESHOLD, DEFAULT_FREQUENCY};
use gilts_core::{Date, FixedClock, GiltError, PricingConfig};

const SETTLEMENT: &str = "2025-02-17";
const MATURITY: &str = "2035-02-17";

#[test]
fn ten_year_zero_coupon_risk_profile() {
    let settlement = Date::parse(SETTLEMENT).unwrap();
    let maturity = Date::parse(MATURITY).unwrap();

    let p = price(1000.0, 0.03, MATURITY, Some(SETTLEMENT)).unwrap();
    assert_eq!(p, 740.7);

    let t = time_to_maturity(settlement, maturity).unwrap();
    assert_relative_eq!(t, 3652.0 / 365.0, max_relative = 1e-15);

    let mac = duration(t, 0.03, DurationKind::Macaulay, None).unwrap();
    let modi = duration(t, 0.03, DurationKind::Modified, Some(DEFAULT_FREQUENCY)).unwrap();
    assert_eq!(mac.as_f64(), t);
    assert_relative_eq!(modi.as_f64(), t / 1.015, max_relative = 1e-12);

    let c = convexity(t, 0.03, DEFAULT_FREQUENCY).unwrap();
    assert_relative_eq!(c, t * (t + 1.0) / 1.015f64.powi(2), max_relative = 1e-12);

    let fd = dv01(1_000_000.0, 0.03, MATURITY, Some(SETTLEMENT), Dv01Options::default()).unwrap();
    assert_eq!(fd, 740.73);

    // Continuous DV01 is roughly t × P × 1bp
    assert_relative_eq!(fd, t * 740_696.45 * 0.0001, max_relative = 1e-3);

    let cf = dv01_closed_form(1_000_000.0, 0.05, 10.0, DEFAULT_FREQUENCY, DEFAULT_DV01_MATURITY_THRESHOLD)
        .unwrap();
    assert_relative_eq!(cf, 36334.69499, max_relative = 1e-3);
}

#[test]
fn negative_yield_prices_above_face() {
    assert_eq!(price(1000.0, -0.01, MATURITY, Some(SETTLEMENT)).unwrap(), 1105.23);
    assert_eq!(continuous_price(1000.0, -0.01, 10.0).unwrap(), 1105.17);
    assert_relative_eq!(
        duration(5.0, -0.01, DurationKind::Modified, Some(2)).unwrap().as_f64(),
        5.025125628140703,
        max_relative = 1e-12
    );
}

#[test]
fn pricer_with_fixed_clock_and_config() {
    let clock = FixedClock::new(Date::parse(SETTLEMENT).unwrap());
    let config = PricingConfig::from_json(r#"{"near_maturity_days": 5, "dv01_maturity_threshold": 0.0}"#)
        .unwrap();
    let pricer = ZeroCouponPricer::with_clock(clock).with_config(config).unwrap();

    // Four days out is inside the widened near-maturity window
    assert_eq!(pricer.price(1000.0, 0.05, "2025-02-21", None).unwrap(), 1000.0);
    // So both prices are face value and DV01 is zero even with no threshold
    assert_eq!(
        pricer.dv01(1000.0, 0.05, "2025-02-21", None, Dv01Options::default()).unwrap(),
        0.0
    );
    assert_eq!(pricer.price(1000.0, 0.03, MATURITY, None).unwrap(), 740.7);
}

#[test]
fn fixed_coupon_pricers() {
    let flat = vec![0.03; 20];
    assert_eq!(
        price_with_curve(1000.0, 0.05, SETTLEMENT, MATURITY, &flat, "Actual/Actual", 2).unwrap(),
        1171.69
    );

    assert_eq!(dmo_price(100.0, 4.25, "2025-03-01", "2025-06-07", 0.045).unwrap(), 2.1);
}

#[test]
fn curve_scenario() {
    let points = [(3.0, 0.01), (6.0, 0.015), (12.0, 0.02), (18.0, 0.025)];
    assert_relative_eq!(derive_yield_from_zero_curve(&points, 9.0).unwrap(), 0.0175, max_relative = 1e-12);
    assert_relative_eq!(derive_yield_from_zero_curve(&points, 24.0).unwrap(), 0.03, max_relative = 1e-12);

    let curve = ZeroCurve::new(points.iter().copied().map(CurvePoint::from)).unwrap();
    assert_eq!(curve.yield_at(2.0).unwrap(), 0.01);
    assert_eq!(curve.yield_at(12.0).unwrap(), 0.02);
}

#[test]
fn every_failure_is_invalid_input() {
    let errors: Vec<GiltError> = vec![
        price(-1.0, 0.03, MATURITY, Some(SETTLEMENT)).unwrap_err(),
        price(1000.0, 0.03, "2035-2-17x", Some(SETTLEMENT)).unwrap_err(),
        duration(5.0, 0.05, DurationKind::Modified, Some(0)).unwrap_err(),
        convexity(0.0, 0.05, 2).unwrap_err(),
        dv01_closed_form(1.0, 0.05, 0.0, 2, DEFAULT_DV01_MATURITY_THRESHOLD).unwrap_err(),
        dmo_price(99.0, 4.0, SETTLEMENT, MATURITY, 0.04).unwrap_err(),
        price_with_curve(1000.0, 0.05, SETTLEMENT, MATURITY, &[0.03], "Actual/Actual", 2).unwrap_err(),
        derive_yield_from_zero_curve(&[(3.0, 0.01)], 6.0).unwrap_err(),
        "Effective".parse::<DurationKind>().unwrap_err(),
    ];

    for err in errors {
        assert!(matches!(err, GiltError::InvalidInput { .. }), "{err}");
    }
}
