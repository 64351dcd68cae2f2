//! Integration tests exercising the full conversion pipeline:
//! parse → validate → encode → decode → format, across module boundaries.

use epochal_core::{
    BrokenDownTime, ClockSource, FixedClock, OffsetClock, Weekday, decode, decode_closed_form,
    encode, is_leap, try_encode, weekday,
};

/// Instants with independently known calendar values.
const KNOWN: &[(i64, &str, Weekday, u16)] = &[
    (0, "1970-01-01 00:00:00 UTC", Weekday::Thursday, 0),
    (86_399, "1970-01-01 23:59:59 UTC", Weekday::Thursday, 0),
    (86_400, "1970-01-02 00:00:00 UTC", Weekday::Friday, 1),
    (951_782_400, "2000-02-29 00:00:00 UTC", Weekday::Tuesday, 59),
    (946_684_800, "2000-01-01 00:00:00 UTC", Weekday::Saturday, 0),
    (1_709_164_800, "2024-02-29 00:00:00 UTC", Weekday::Thursday, 59),
    (2_147_483_647, "2038-01-19 03:14:07 UTC", Weekday::Tuesday, 18),
    (4_102_444_800, "2100-01-01 00:00:00 UTC", Weekday::Friday, 0),
    (-1, "1969-12-31 23:59:59 UTC", Weekday::Wednesday, 364),
    (-2_208_988_800, "1900-01-01 00:00:00 UTC", Weekday::Monday, 0),
];

/// Test 1: every known instant decodes, formats, parses and re-encodes to itself.
#[test]
fn known_instants_full_pipeline() {
    for &(secs, text, wday, yday) in KNOWN {
        let tm = decode(secs);
        assert_eq!(tm.to_string(), text, "decode({secs})");
        assert_eq!(tm.wday, wday, "weekday of {text}");
        assert_eq!(tm.yday, yday, "day of year of {text}");

        let parsed: BrokenDownTime = text.parse().unwrap();
        assert_eq!(parsed, tm);
        assert_eq!(try_encode(&parsed).unwrap().seconds, secs);
    }
}

/// Test 2: the weekday calculator and the decoder agree on every day of a
/// full 400-year cycle.
#[test]
fn weekday_calculator_matches_decoder_over_cycle() {
    let start = encode(&BrokenDownTime::date(2000, 0, 1)).seconds / 86_400;
    for day in start..start + 146_097 {
        let tm = decode(day * 86_400);
        assert_eq!(
            weekday(tm.full_year(), tm.month, tm.day),
            tm.wday,
            "day {day}: {tm}"
        );
    }
}

/// Test 3: consecutive days over several centuries are exactly 86400 s apart
/// and yday resets only on January 1st.
#[test]
fn consecutive_days_step_by_one() {
    let mut prev: Option<(i64, BrokenDownTime)> = None;
    for year in [1600i64, 1899, 1900, 1969, 1970, 1999, 2000, 2023, 2024, 2100] {
        for month in 0..12u8 {
            for day in 1..=epochal_core::days_in_month(year, month) {
                let mut tm = BrokenDownTime::date(year, month, day);
                let secs = tm.to_epoch();
                if let Some((prev_secs, prev_tm)) = prev
                    && prev_tm.full_year() == year
                {
                    assert_eq!(secs - prev_secs, 86_400, "{prev_tm} → {tm}");
                    assert_eq!(tm.yday, prev_tm.yday + 1);
                }
                prev = Some((secs, tm));
            }
        }
        let days = prev.map(|(_, tm)| tm.yday + 1).unwrap_or_default();
        assert_eq!(days, if is_leap(year) { 366 } else { 365 }, "{year}");
    }
}

/// Test 4: scanning and closed-form decoders agree day by day across the
/// 1582–2500 span.
#[test]
fn decoders_agree_daily() {
    let from = encode(&BrokenDownTime::date(1582, 9, 15)).seconds;
    let to = encode(&BrokenDownTime::date(2500, 0, 1)).seconds;
    let mut secs = from;
    while secs < to {
        assert_eq!(decode(secs), decode_closed_form(secs));
        secs += 86_400 + 3_599;
    }
}

/// Test 5: clock source with an offset feeds the decoder.
#[test]
fn offset_clock_through_decoder() {
    let clock = OffsetClock::new(FixedClock(1_709_164_800), -86_400);
    let now = clock.now().unwrap();
    assert_eq!(decode(now).to_string(), "2024-02-28 00:00:00 UTC");
}
