//! Property-based checks for the analytical pricers and barrier rules.

use approx::assert_relative_eq;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_models::analytical::{norm_cdf, BlackScholes};
use pricer_models::instruments::{
    BarrierConfig, BarrierDirection, BarrierKind, BarrierOption, InstrumentError,
    InstrumentParams, OptionType, VanillaOption,
};
use proptest::prelude::*;

fn direction_strategy() -> impl Strategy<Value = BarrierDirection> {
    prop_oneof![Just(BarrierDirection::Up), Just(BarrierDirection::Down)]
}

fn kind_strategy() -> impl Strategy<Value = BarrierKind> {
    prop_oneof![
        Just(BarrierKind::Limit),
        Just(BarrierKind::KnockIn),
        Just(BarrierKind::KnockOut)
    ]
}

fn option_type_strategy() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_put_call_parity(
        spot in 50.0_f64..150.0,
        strike in 50.0_f64..150.0,
        expiry in 0.1_f64..3.0,
        volatility in 0.05_f64..0.6,
        rate in -0.02_f64..0.1,
    ) {
        let model = BlackScholes::new(spot, rate, rate, volatility).unwrap();
        let call = model.price_call(strike, expiry).unwrap();
        let put = model.price_put(strike, expiry).unwrap();
        let forward = spot - strike * (-rate * expiry).exp();

        prop_assert!(
            (call - put - forward).abs() < 1e-9,
            "call {} - put {} != {}", call, put, forward
        );
    }

    #[test]
    fn test_norm_cdf_symmetry(x in -8.0_f64..8.0) {
        assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_monotone(x in -6.0_f64..6.0, step in 1e-3_f64..1.0) {
        prop_assert!(norm_cdf(x + step) >= norm_cdf(x));
    }

    #[test]
    fn test_single_barrier_bounded_by_vanilla(
        spot in 60.0_f64..140.0,
        level in 60.0_f64..140.0,
        volatility in 0.05_f64..0.6,
        kind in kind_strategy(),
        direction in direction_strategy(),
        option_type in option_type_strategy(),
    ) {
        let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        let market = MarketSnapshot::new(spot, volatility, 0.03);
        let config = BarrierConfig::single(kind, level, 0.0, direction).unwrap();

        let barrier = BarrierOption::new(params, option_type, config)
            .price(&market)
            .unwrap();
        let vanilla = VanillaOption::new(params, option_type)
            .price(&market)
            .unwrap();

        prop_assert!(barrier >= 0.0);
        prop_assert!(
            barrier <= vanilla.max(0.0) + 1e-12,
            "{:?} {:?} barrier {} > vanilla {}", kind, direction, barrier, vanilla
        );
    }

    #[test]
    fn test_breach_law(price in 0.0_f64..200.0, barrier in 0.0_f64..200.0) {
        prop_assert_eq!(BarrierDirection::Up.breached(price, barrier), price >= barrier);
        prop_assert_eq!(BarrierDirection::Down.breached(price, barrier), price <= barrier);
        // Every price breaches in at least one direction
        prop_assert!(
            BarrierDirection::Up.breached(price, barrier)
                || BarrierDirection::Down.breached(price, barrier)
        );
    }

    #[test]
    fn test_price_scales_with_multiplier(
        multiplier in 1.0_f64..1000.0,
        spot in 80.0_f64..120.0,
    ) {
        let unit = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        let scaled = InstrumentParams::new(100.0, 1.0, multiplier).unwrap();
        let market = MarketSnapshot::new(spot, 0.25, 0.02);

        let one = VanillaOption::new(unit, OptionType::Call).price(&market).unwrap();
        let many = VanillaOption::new(scaled, OptionType::Call).price(&market).unwrap();
        assert_relative_eq!(many, multiplier * one, max_relative = 1e-12);
    }
}

#[test]
fn test_invalid_barrier_configurations_are_rejected() {
    let cases: [(f64, f64, f64, f64); 5] = [
        (0.0, 0.0, 0.0, 0.0),
        (-1.0, 0.0, 0.0, 0.0),
        (0.0, 110.0, 110.0, 0.0),
        (0.0, f64::NAN, 0.0, 0.0),
        (90.0, 0.0, 0.0, -1.0),
    ];

    for (limit, knock_in, knock_out, rebate) in cases {
        for _ in 0..2 {
            let result = BarrierConfig::from_levels(
                limit,
                knock_in,
                knock_out,
                rebate,
                BarrierDirection::Up,
            );
            assert!(
                matches!(result, Err(InstrumentError::InvalidBarrierConfiguration { .. })),
                "({}, {}, {}, {}) accepted",
                limit,
                knock_in,
                knock_out,
                rebate
            );
        }
    }

    assert!(matches!(
        BarrierDirection::from_indicator(0),
        Err(InstrumentError::InvalidBarrierConfiguration { .. })
    ));
}

#[test]
fn test_reference_values() {
    let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
    let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();

    let call = VanillaOption::new(params, OptionType::Call);
    let put = VanillaOption::new(params, OptionType::Put);

    assert_relative_eq!(call.price(&market).unwrap(), 10.45, epsilon = 0.1);
    assert_relative_eq!(put.price(&market).unwrap(), 5.57, epsilon = 0.1);
    assert_relative_eq!(call.greeks(&market).unwrap().vega, 37.52, epsilon = 0.1);
}
