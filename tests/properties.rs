//! Property tests for the severance calculation and trend series.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use severance_engine::calculation::{calculate, resolve, trend};
use severance_engine::error::EngineError;
use severance_engine::models::{ProrationPolicy, WageInput};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 1, 1).unwrap()
}

fn expected_amount(wage: Decimal, days: i64) -> Decimal {
    wage * Decimal::from(30) * Decimal::from(days) / Decimal::from(365)
}

fn policies() -> impl Strategy<Value = ProrationPolicy> {
    prop_oneof![
        Just(ProrationPolicy::Reject),
        Just(ProrationPolicy::ProrateWithWarning),
        Just(ProrationPolicy::ProrateSilently),
    ]
}

proptest! {
    #[test]
    fn full_year_amount_follows_formula(
        offset in 0u64..10_000,
        days in 365u64..20_000,
        wage in 0i64..50_000_000,
        policy in policies(),
    ) {
        let start = base_date() + Days::new(offset);
        let end = start + Days::new(days);
        let period = resolve(start, end).unwrap();
        let wage_input = WageInput::new(Decimal::from(wage)).unwrap();

        let result = calculate(&period, &wage_input, policy).unwrap();

        prop_assert_eq!(result.amount, expected_amount(Decimal::from(wage), days as i64));
        prop_assert!(!result.prorated);
        prop_assert!(result.warning.is_none());
    }

    #[test]
    fn short_tenure_follows_policy(
        days in 0u64..365,
        wage in 0i64..50_000_000,
        policy in policies(),
    ) {
        let start = base_date();
        let period = resolve(start, start + Days::new(days)).unwrap();
        let wage_input = WageInput::new(Decimal::from(wage)).unwrap();

        let outcome = calculate(&period, &wage_input, policy);

        match policy {
            ProrationPolicy::Reject => {
                let is_insufficient = matches!(outcome, Err(EngineError::InsufficientService { .. }));
                prop_assert!(is_insufficient);
            }
            ProrationPolicy::ProrateWithWarning | ProrationPolicy::ProrateSilently => {
                let result = outcome.unwrap();
                prop_assert_eq!(result.amount, expected_amount(Decimal::from(wage), days as i64));
                prop_assert!(result.prorated);
                prop_assert_eq!(
                    result.warning.is_some(),
                    policy == ProrationPolicy::ProrateWithWarning
                );
            }
        }
    }

    #[test]
    fn reversed_dates_are_invalid_range(
        offset in 0u64..20_000,
        gap in 1u64..20_000,
    ) {
        let end = base_date() + Days::new(offset);
        let start = end + Days::new(gap);

        let is_invalid_range = matches!(resolve(start, end), Err(EngineError::InvalidRange { .. }));
        prop_assert!(is_invalid_range);
    }

    #[test]
    fn trend_starts_at_zero_and_rises(
        days in 0u64..20_000,
        wage in 1i64..50_000_000,
    ) {
        let start = base_date();
        let period = resolve(start, start + Days::new(days)).unwrap();
        let wage_input = WageInput::new(Decimal::from(wage)).unwrap();

        let series = trend(&period, &wage_input).unwrap();

        prop_assert_eq!(series.len() as u64, days / 365 + 2);
        prop_assert_eq!(series.points[0].years_of_service, 0);
        prop_assert_eq!(series.points[0].projected_amount, Decimal::ZERO);
        for pair in series.points.windows(2) {
            prop_assert!(pair[1].projected_amount > pair[0].projected_amount);
        }
        for point in series.iter() {
            prop_assert_eq!(
                point.projected_amount,
                Decimal::from(point.years_of_service) * Decimal::from(wage) * Decimal::from(30)
            );
        }
    }
}
