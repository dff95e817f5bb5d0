//! End-to-end checks of the period risk protocol.

use approx::assert_relative_eq;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::DayCountConvention;
use pricer_models::instruments::{
    BarrierConfig, BarrierDirection, BarrierOption, Future, Instrument, InstrumentParams,
    OptionType, Spot, VanillaOption,
};
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::pnl::{market_risk, Position};
use pricer_risk::portfolio::{Book, PositionId};
use pricer_risk::RiskConfig;
use proptest::prelude::*;

fn market() -> MarketSnapshot<f64> {
    MarketSnapshot::new(100.0, 0.2, 0.05)
}

fn instruments() -> Vec<Instrument<f64>> {
    let params = InstrumentParams::new(100.0, 1.0, 10.0).unwrap();
    let barrier =
        BarrierConfig::from_levels(0.0, 0.0, 130.0, 1.0, BarrierDirection::Up).unwrap();
    vec![
        Instrument::from(Spot::new().with_helper_rate(5.0).unwrap()),
        Instrument::from(VanillaOption::new(params, OptionType::Call)),
        Instrument::from(VanillaOption::new(params, OptionType::Put)),
        Instrument::from(BarrierOption::new(params, OptionType::Call, barrier)),
        Instrument::from(
            Future::from_days(90, 50.0, 4.0, DayCountConvention::Actual360).unwrap(),
        ),
    ]
}

#[test]
fn test_lifecycle_for_every_instrument_kind() {
    for instrument in instruments() {
        let mut position = Position::new(instrument, market());
        assert_eq!(position.risk().unwrap(), 0.0, "{}", instrument.kind());

        position.set_spot(102.0);
        let expected = market_risk(&instrument, position.market(), &market()).unwrap();
        assert_relative_eq!(position.risk().unwrap(), expected, epsilon = 1e-12);
        assert_eq!(position.risk().unwrap(), 0.0, "{}", instrument.kind());
    }
}

#[test]
fn test_risk_uses_scaling_not_multiplier_twice() {
    let future = Future::new(1.0, 50.0, 4.0)
        .unwrap()
        .with_helper_rate(2.0)
        .unwrap();
    let mut position = Position::new(future, market());
    position.set_spot(101.0);

    let price_move = future.price(position.market()).unwrap() - future.price(&market()).unwrap();
    assert_relative_eq!(position.risk().unwrap(), price_move * 8.0, epsilon = 1e-9);
}

#[test]
fn test_book_from_config_matches_sequential() {
    let config = RiskConfig::from_toml_str("[parallel]\nparallel_threshold = 1\nbatch_size = 2")
        .unwrap();

    let mut parallel = Book::with_config(config.parallel.clone());
    let mut sequential = Book::with_config(ParallelConfig::sequential());
    for (i, instrument) in instruments().into_iter().cycle().take(40).enumerate() {
        let id = format!("P{}", i);
        parallel
            .insert(id.clone(), Position::new(instrument, market()))
            .unwrap();
        sequential
            .insert(id, Position::new(instrument, market()))
            .unwrap();
    }

    let mut moved = market();
    moved.set_spot(97.0);
    moved.set_volatility(0.25);
    for i in 0..40 {
        let id = PositionId::new(format!("P{}", i));
        parallel.update_market(&id, moved).unwrap();
        sequential.update_market(&id, moved).unwrap();
    }

    assert_eq!(parallel.risk_all(), sequential.risk_all());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_second_risk_query_is_zero(
        spot in 60.0_f64..140.0,
        volatility in 0.05_f64..0.8,
        rate in -0.01_f64..0.15,
    ) {
        for instrument in instruments() {
            let mut position = Position::new(instrument, market());
            position.update_market(MarketSnapshot::new(spot, volatility, rate));
            position.risk().unwrap();
            prop_assert_eq!(position.risk().unwrap(), 0.0);
        }
    }

    #[test]
    fn test_call_risk_sign_follows_spot(
        spot in 60.0_f64..140.0,
    ) {
        let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        let call = VanillaOption::new(params, OptionType::Call);
        let mut position = Position::new(call, market());
        position.set_spot(spot);
        let risk = position.risk().unwrap();

        if spot > 100.0 {
            prop_assert!(risk > 0.0);
        } else if spot < 100.0 {
            prop_assert!(risk < 0.0);
        }
    }
}
