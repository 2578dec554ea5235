use chrono::{DateTime, TimeZone, Utc};
use cron_cascade::Expression;
use proptest::prelude::*;

fn arb_second() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (0u8..60).prop_map(|s| s.to_string()),
        (1u8..60).prop_map(|s| format!("*/{s}")),
    ]
}

fn arb_minute() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (0u8..60).prop_map(|m| m.to_string()),
        (0u8..60, 0u8..60).prop_map(|(a, b)| format!("{a}-{b}")),
        (0u8..60, 1u8..30).prop_map(|(a, s)| format!("{a}/{s}")),
    ]
}

fn arb_hour() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (0u8..24).prop_map(|h| h.to_string()),
        (0u8..24, 0u8..24, 1u8..6).prop_map(|(a, b, s)| format!("{a}-{b}/{s}")),
    ]
}

fn arb_day_of_month() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just("?".to_string()),
        Just("L".to_string()),
        Just("LW".to_string()),
        (1u8..32).prop_map(|d| d.to_string()),
        (1u8..32).prop_map(|d| format!("{d}W")),
        (1u8..32, 1u8..32).prop_map(|(a, b)| format!("{a},{b}")),
    ]
}

fn arb_month() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just("jan-mar".to_string()),
        Just("OCT-FEB".to_string()),
        (1u8..13).prop_map(|m| m.to_string()),
        (1u8..13, 1u8..7).prop_map(|(m, s)| format!("{m}/{s}")),
    ]
}

fn arb_day_of_week() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        Just("?".to_string()),
        Just("mon-fri".to_string()),
        Just("5-1".to_string()),
        (0u8..8).prop_map(|d| d.to_string()),
        (0u8..8).prop_map(|d| format!("{d}L")),
        (0u8..8, 1u8..6).prop_map(|(d, n)| format!("{d}#{n}")),
    ]
}

fn arb_year() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("*".to_string()),
        (1970u16..2100).prop_map(|y| y.to_string()),
        (1970u16..2100, 1u16..10).prop_map(|(y, s)| format!("{y}/{s}")),
    ]
}

fn arb_expression() -> impl Strategy<Value = String> {
    (
        arb_second(),
        arb_minute(),
        arb_hour(),
        arb_day_of_month(),
        arb_month(),
        arb_day_of_week(),
        arb_year(),
    )
        .prop_map(|(s, m, h, dom, mon, dow, y)| format!("{s} {m} {h} {dom} {mon} {dow} {y}"))
}

fn arb_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..4_102_444_800).prop_map(|ts| Utc.timestamp_opt(ts, 0).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The next occurrence is always strictly after the reference time.
    #[test]
    fn next_is_after_from(expr in arb_expression(), from in arb_instant()) {
        let expression = Expression::parse(&expr).unwrap();
        if let Some(next) = expression.next(&from) {
            prop_assert!(next > from, "'{}' from {} returned {}", expr, from, next);
        }
    }

    /// Successive occurrences are strictly increasing.
    #[test]
    fn series_is_increasing(expr in arb_expression(), from in arb_instant()) {
        let expression = Expression::parse(&expr).unwrap();
        let series = expression.next_n(&from, 10);
        prop_assert!(series.windows(2).all(|w| w[0] < w[1]), "'{}' from {}: {:?}", expr, from, series);
        if let Some(first) = series.first() {
            prop_assert_eq!(Some(*first), expression.next(&from));
        }
    }

    /// Parsing is deterministic and the normalized form parses into the same expression.
    #[test]
    fn parse_is_idempotent(expr in arb_expression(), from in arb_instant()) {
        let first = Expression::parse(&expr).unwrap();
        let second = Expression::parse(&expr).unwrap();
        let reparsed = Expression::parse(&first.to_string()).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &reparsed);
        prop_assert_eq!(first.next(&from), reparsed.next(&from));
    }
}
