//! Discharge behavior across the free-flow / orifice switch.

use gf_core::units::m;
use gf_hydraulics::{FlowRegime, GateLimits, SluiceGate};

fn outlet() -> SluiceGate {
    SluiceGate::new("outlet".into(), m(3.0), 0.61).unwrap()
}

fn relative_gap(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs())
}

#[test]
fn free_flow_side_is_continuous() {
    let g = outlet();
    let q1 = g.discharge(m(2.98), m(3.0)).unwrap().value;
    let q2 = g.discharge(m(2.99), m(3.0)).unwrap().value;
    assert_eq!(g.regime(m(2.99), m(3.0)), FlowRegime::FreeFlow);
    assert!(relative_gap(q1, q2) < 0.05);
}

#[test]
fn orifice_side_is_continuous() {
    let g = outlet();
    let q1 = g.discharge(m(3.00), m(3.0)).unwrap().value;
    let q2 = g.discharge(m(3.01), m(3.0)).unwrap().value;
    assert!(relative_gap(q1, q2) < 0.05);
}

#[test]
fn regime_switch_carries_the_formula_jump() {
    // Manning at 2.99 m gives ~18.9 m3/s, the gate equation at 3.01 m ~33.3 m3/s.
    let g = outlet();
    let below = g.discharge(m(2.99), m(3.0)).unwrap().value;
    let above = g.discharge(m(3.01), m(3.0)).unwrap().value;
    assert!((below - 18.896_378_884_514_338).abs() < 1e-9);
    assert!((above - 33.270_985_171_097_85).abs() < 1e-9);
    assert!(above > below);
}

#[test]
fn discharge_grows_with_level_in_each_regime() {
    let g = outlet();
    let mut prev = 0.0;
    for level in [1.0, 1.5, 2.0, 2.5, 2.9] {
        let q = g.discharge(m(level), m(3.0)).unwrap().value;
        assert!(q > prev);
        prev = q;
    }
    let mut prev = 0.0;
    for level in [3.0, 3.5, 4.0, 5.0] {
        let q = g.discharge(m(level), m(3.0)).unwrap().value;
        assert!(q > prev);
        prev = q;
    }
}

#[test]
fn custom_limits_change_clamp() {
    let g = outlet().with_limits(GateLimits::new(1.0, 5.0).unwrap());
    assert_eq!(g.effective_opening(m(4.5)).value, 4.5);
    let default_q = outlet().discharge(m(6.0), m(4.5)).unwrap().value;
    let wide_q = g.discharge(m(6.0), m(4.5)).unwrap().value;
    assert!(wide_q > default_q);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn discharge_is_positive_and_finite(level in 0.1_f64..10.0, opening in -5.0_f64..10.0) {
            let q = outlet().discharge(m(level), m(opening)).unwrap();
            prop_assert!(q.value.is_finite());
            prop_assert!(q.value > 0.0);
        }

        #[test]
        fn opening_outside_limits_acts_as_bound(level in 0.1_f64..10.0, excess in 0.0_f64..5.0) {
            let g = outlet();
            let above = g.discharge(m(level), m(4.0 + excess)).unwrap();
            let at_max = g.discharge(m(level), m(4.0)).unwrap();
            prop_assert_eq!(above.value, at_max.value);
            let below = g.discharge(m(level), m(2.0 - excess)).unwrap();
            let at_min = g.discharge(m(level), m(2.0)).unwrap();
            prop_assert_eq!(below.value, at_min.value);
        }
    }
}
