//! DST-aware intraday timestamp generation.
//!
//! A local calendar day does not always contain 24 hours: on a spring-forward
//! day one slice of local clock time never happens, and on a fall-back day one
//! slice happens twice. The generator defers both windows entirely to the
//! IANA rule data exposed by `chrono-tz` rather than doing minute arithmetic
//! around the transition instant.

use chrono::offset::LocalResult;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::debug;

use crate::domain::Granularity;
use crate::error::SimError;

/// How a calendar day interacts with its timezone's DST rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Same UTC offset all day; nominal point count.
    Regular,
    /// Offset increases during the day; some local times do not exist.
    SpringForward,
    /// Offset decreases during the day; some local times occur twice.
    FallBack,
}

/// Classify `date` by comparing the UTC offsets in effect at its local
/// midnight and at the following local midnight.
pub fn classify_day(date: NaiveDate, tz: Tz) -> Result<DayKind, SimError> {
    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1);

    let offset_before = resolve_offset(tz, start)?;
    let offset_after = resolve_offset(tz, end)?;

    Ok(match offset_before.cmp(&offset_after) {
        std::cmp::Ordering::Equal => DayKind::Regular,
        std::cmp::Ordering::Less => DayKind::SpringForward,
        std::cmp::Ordering::Greater => DayKind::FallBack,
    })
}

/// Generate the ordered timezone-aware timestamps covering one local day.
///
/// Each naive tick in `[midnight, next midnight)` is localized through the
/// timezone's rule data:
///
/// - an unambiguous tick is emitted once;
/// - a tick inside a fall-back overlap is emitted twice, once per real
///   instant (pre- and post-transition offsets);
/// - a tick inside a spring-forward gap corresponds to no real instant and
///   is dropped without substitution.
///
/// The result is sorted by absolute instant, so fall-back output stays
/// strictly increasing in real time even though local labels repeat.
pub fn day_series(
    date: NaiveDate,
    tz: Tz,
    granularity: Granularity,
) -> Result<Vec<DateTime<Tz>>, SimError> {
    let kind = classify_day(date, tz)?;

    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1);
    let step = granularity.interval();

    let mut out: Vec<DateTime<Tz>> = Vec::with_capacity(granularity.points_per_day() + 2);
    let mut tick = start;
    while tick < end {
        match tz.from_local_datetime(&tick) {
            LocalResult::Single(dt) => out.push(dt),
            LocalResult::Ambiguous(earlier, later) => {
                out.push(earlier);
                out.push(later);
            }
            LocalResult::None => {}
        }
        tick += step;
    }

    // `DateTime` orders by absolute instant, never by the local label, and
    // Vec::sort is stable, so the fall-back merge is chronological.
    out.sort();

    debug!(%date, %tz, ?kind, n = out.len(), "generated intraday timestamp series");
    Ok(out)
}

fn resolve_offset(tz: Tz, at: NaiveDateTime) -> Result<i32, SimError> {
    match tz.offset_from_local_datetime(&at) {
        LocalResult::Single(offset) => Ok(offset.fix().local_minus_utc()),
        LocalResult::Ambiguous(_, _) | LocalResult::None => Err(SimError::configuration(format!(
            "timezone {tz} cannot resolve a unique UTC offset for local time {at}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    use crate::domain::CountryCode;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn local_hours(series: &[DateTime<Tz>]) -> Vec<u32> {
        series.iter().map(|dt| dt.hour()).collect()
    }

    fn assert_strictly_increasing(series: &[DateTime<Tz>]) {
        for pair in series.windows(2) {
            let (a, b) = (pair[0].with_timezone(&Utc), pair[1].with_timezone(&Utc));
            assert!(a < b, "instants not strictly increasing: {a} !< {b}");
        }
    }

    #[test]
    fn regular_day_has_nominal_length() {
        for country in CountryCode::ALL {
            let tz = country.timezone();
            let hourly = day_series(date(2024, 3, 20), tz, Granularity::Hourly).unwrap();
            assert_eq!(hourly.len(), 24, "{country} hourly");
            let half = day_series(date(2024, 3, 20), tz, Granularity::HalfHourly).unwrap();
            assert_eq!(half.len(), 48, "{country} half-hourly");
            assert_strictly_increasing(&hourly);
            assert_strictly_increasing(&half);
        }
    }

    #[test]
    fn spring_forward_drops_the_skipped_hour() {
        for country in CountryCode::ALL {
            let tz = country.timezone();
            let series = day_series(date(2024, 3, 31), tz, Granularity::Hourly).unwrap();
            assert_eq!(series.len(), 23, "{country}");
            assert_strictly_increasing(&series);

            // GB skips 01:00, the CET countries skip 02:00.
            let skipped = if country == CountryCode::Gb { 1 } else { 2 };
            assert!(
                !local_hours(&series).contains(&skipped),
                "{country}: local hour {skipped} should not exist on 2024-03-31"
            );

            // No local hour repeats on a spring-forward day.
            for pair in series.windows(2) {
                assert_ne!(pair[0].hour(), pair[1].hour(), "{country}");
            }
        }
    }

    #[test]
    fn spring_forward_half_hourly_drops_two_ticks() {
        for country in CountryCode::ALL {
            let series =
                day_series(date(2024, 3, 31), country.timezone(), Granularity::HalfHourly).unwrap();
            assert_eq!(series.len(), 46, "{country}");
            assert_strictly_increasing(&series);
        }
    }

    #[test]
    fn fall_back_repeats_the_ambiguous_hour() {
        for country in CountryCode::ALL {
            let tz = country.timezone();
            let series = day_series(date(2024, 10, 27), tz, Granularity::Hourly).unwrap();
            assert_eq!(series.len(), 25, "{country}");
            assert_strictly_increasing(&series);

            let mut counts = [0usize; 24];
            for hour in local_hours(&series) {
                counts[hour as usize] += 1;
            }
            let doubled: Vec<usize> = (0..24).filter(|&h| counts[h] == 2).collect();
            let repeated = if country == CountryCode::Gb { 1 } else { 2 };
            assert_eq!(doubled, vec![repeated], "{country}");

            // The two occurrences are distinct real instants.
            let twice: Vec<&DateTime<Tz>> = series
                .iter()
                .filter(|dt| dt.hour() == repeated as u32)
                .collect();
            assert_eq!(twice.len(), 2, "{country}");
            assert_ne!(
                twice[0].with_timezone(&Utc),
                twice[1].with_timezone(&Utc),
                "{country}: repeated local hour must map to two UTC instants"
            );
        }
    }

    #[test]
    fn fall_back_half_hourly_adds_two_ticks() {
        for country in CountryCode::ALL {
            let series =
                day_series(date(2024, 10, 27), country.timezone(), Granularity::HalfHourly)
                    .unwrap();
            assert_eq!(series.len(), 50, "{country}");
            assert_strictly_increasing(&series);
        }
    }

    #[test]
    fn day_classification() {
        let tz = chrono_tz::Europe::London;
        assert_eq!(classify_day(date(2024, 3, 20), tz).unwrap(), DayKind::Regular);
        assert_eq!(
            classify_day(date(2024, 3, 31), tz).unwrap(),
            DayKind::SpringForward
        );
        assert_eq!(
            classify_day(date(2024, 10, 27), tz).unwrap(),
            DayKind::FallBack
        );
    }

    #[test]
    fn unresolvable_local_midnight_is_configuration_error() {
        // Brazil's 2018 DST start skipped 00:00-00:59, so local midnight on
        // 2018-11-04 never existed in Sao Paulo.
        let err = day_series(
            date(2018, 11, 4),
            chrono_tz::America::Sao_Paulo,
            Granularity::Hourly,
        )
        .unwrap_err();
        assert!(matches!(err, SimError::Configuration(_)), "got {err:?}");
    }

    #[test]
    fn series_starts_at_local_midnight_and_stays_on_grid() {
        let series = day_series(
            date(2024, 6, 1),
            chrono_tz::Europe::Paris,
            Granularity::HalfHourly,
        )
        .unwrap();
        assert_eq!(series[0].hour(), 0);
        assert_eq!(series[0].minute(), 0);
        for dt in &series {
            assert!(dt.minute() == 0 || dt.minute() == 30, "off-grid tick {dt}");
            assert_eq!(dt.second(), 0);
        }
    }
}
