use chrono::{TimeZone, Utc};
use qtty::Seconds;
use xenochron::calendar::{DAYS_IN_YEAR, SECONDS_IN_DAY};
use xenochron::{
    convert, tick_manual, AlienClock, AlienTimestamp, ClockMode, EarthInstant, TimeOffset,
    ValidationError, ALIEN_EPOCH, EARTH_MS_PER_ALIEN_SECOND,
};

fn ts(year: i64, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> AlienTimestamp {
    AlienTimestamp::new(year, month, day, hour, minute, second).unwrap()
}

#[test]
fn unix_epoch_maps_to_alien_epoch() {
    let epoch = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
    let alien = convert(EarthInstant::from_utc(epoch), TimeOffset::ZERO);
    assert_eq!(alien, ts(2804, 18, 31, 2, 2, 88));
    assert_eq!(alien, ALIEN_EPOCH);
}

#[test]
fn half_second_steps_walk_one_alien_second() {
    let mut prev = convert(EarthInstant::EPOCH, TimeOffset::ZERO);
    for step in 1..=5_000_i64 {
        let next = convert(
            EarthInstant::from_millis(step * EARTH_MS_PER_ALIEN_SECOND),
            TimeOffset::ZERO,
        );
        assert_eq!(next.second(), (prev.second() + 1) % 90, "step {step}");
        assert_eq!(next, tick_manual(prev), "step {step}");
        prev = next;
    }
}

#[test]
fn crosses_into_next_year_at_month_18_day_38() {
    let seconds_to_new_year = 8 * SECONDS_IN_DAY - ALIEN_EPOCH.second_of_day();
    let ms = seconds_to_new_year * EARTH_MS_PER_ALIEN_SECOND;
    let before = convert(EarthInstant::from_millis(ms - 1), TimeOffset::ZERO);
    let after = convert(EarthInstant::from_millis(ms), TimeOffset::ZERO);
    assert_eq!(before, ts(2804, 18, 38, 35, 89, 89));
    assert_eq!(after, ts(2805, 1, 1, 0, 0, 0));
}

#[test]
fn decades_of_real_time_stay_consistent() {
    // one alien year in Earth milliseconds
    let year_ms = DAYS_IN_YEAR * SECONDS_IN_DAY * EARTH_MS_PER_ALIEN_SECOND;
    let dt = Utc.with_ymd_and_hms(2030, 6, 1, 12, 0, 0).unwrap();
    let instant = EarthInstant::from_utc(dt);
    let a = convert(instant, TimeOffset::ZERO);
    let b = convert(instant, TimeOffset::from_millis(year_ms));
    assert_eq!(b.year(), a.year() + 1);
    assert_eq!((b.month(), b.day()), (a.month(), a.day()));
    assert_eq!(b.formatted_time(), a.formatted_time());
}

#[test]
fn offset_from_seconds_quantity() {
    let offset = TimeOffset::from(Seconds::new(1.0));
    let alien = convert(EarthInstant::EPOCH, offset);
    assert_eq!(alien.formatted_time(), "02:03:00");
}

#[test]
fn manual_then_automatic_uses_prior_offset() {
    let offset = TimeOffset::from_millis(42_000);
    let mut clock = AlienClock::with_offset(EarthInstant::EPOCH, offset);

    let err = clock.set_manual(0, 18, 39, 0, 0, 0).unwrap_err();
    assert!(matches!(err, ValidationError::Day { max: 38, .. }));
    assert_eq!(clock.mode(), ClockMode::Automatic);

    clock.set_manual(0, 18, 38, 0, 0, 0).unwrap();
    for _ in 0..10 {
        clock.advance(EarthInstant::EPOCH);
    }
    assert_eq!(clock.current(), ts(0, 18, 38, 0, 0, 10));

    let now = EarthInstant::from_utc(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(clock.set_automatic(now), convert(now, offset));
}

#[cfg(feature = "serde")]
#[test]
fn serde_timestamp_validates_on_read() {
    let json = serde_json::to_string(&ALIEN_EPOCH).unwrap();
    assert!(json.contains("\"year\":2804"));
    let back: AlienTimestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ALIEN_EPOCH);

    let bad = r#"{"year":1,"month":18,"day":39,"hour":0,"minute":0,"second":0}"#;
    assert!(serde_json::from_str::<AlienTimestamp>(bad).is_err());
}
