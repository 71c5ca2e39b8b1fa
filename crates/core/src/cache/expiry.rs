//! Daily expiration boundary for cached feed data.
//!
//! Both feeds publish once per day around late morning Nepal time, so cached
//! data is considered fresh until the next 11:00 Asia/Kathmandu boundary.
//! The boundary is computed in the feed's timezone regardless of where the
//! process runs.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Canonical timezone the expiration boundary is anchored in.
pub const BOUNDARY_TZ: Tz = chrono_tz::Asia::Kathmandu;

/// Local wall-clock hour at which cached data goes stale.
pub const BOUNDARY_HOUR: u32 = 11;

/// Next instant at which cached data becomes stale.
///
/// Interprets `now` in [`BOUNDARY_TZ`], takes 11:00:00.000 on the same local
/// date, and rolls forward one calendar day when `now` is at or past it: a
/// call made at exactly 11:00 gets tomorrow's boundary, not today's.
pub fn next_boundary(now: DateTime<Utc>) -> DateTime<Utc> {
    let eleven = NaiveTime::from_hms_opt(BOUNDARY_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
    let local = now.with_timezone(&BOUNDARY_TZ);

    let mut date = local.date_naive();
    if local.time() >= eleven {
        date = date.succ_opt().unwrap_or(date);
    }

    // Kathmandu has a fixed UTC offset, so the local datetime is never
    // ambiguous or skipped.
    BOUNDARY_TZ
        .from_local_datetime(&date.and_time(eleven))
        .earliest()
        .map(|boundary| boundary.with_timezone(&Utc))
        .unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn kathmandu(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        BOUNDARY_TZ
            .with_ymd_and_hms(y, mo, d, h, mi, s)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_before_eleven_expires_same_day() {
        let now = kathmandu(2026, 8, 26, 9, 30, 0);
        assert_eq!(next_boundary(now), kathmandu(2026, 8, 26, 11, 0, 0));
    }

    #[test]
    fn test_just_before_eleven_expires_same_day() {
        let now = kathmandu(2026, 8, 26, 10, 59, 59);
        assert_eq!(next_boundary(now), kathmandu(2026, 8, 26, 11, 0, 0));
    }

    #[test]
    fn test_exactly_eleven_expires_next_day() {
        // The boundary itself counts as already passed.
        let now = kathmandu(2026, 8, 26, 11, 0, 0);
        assert_eq!(next_boundary(now), kathmandu(2026, 8, 27, 11, 0, 0));
    }

    #[test]
    fn test_after_eleven_expires_next_day() {
        let now = kathmandu(2026, 8, 26, 23, 45, 0);
        assert_eq!(next_boundary(now), kathmandu(2026, 8, 27, 11, 0, 0));
    }

    #[test]
    fn test_month_rollover() {
        let now = kathmandu(2026, 8, 31, 12, 0, 0);
        assert_eq!(next_boundary(now), kathmandu(2026, 9, 1, 11, 0, 0));
    }

    #[test]
    fn test_year_rollover() {
        let now = kathmandu(2026, 12, 31, 11, 0, 0);
        assert_eq!(next_boundary(now), kathmandu(2027, 1, 1, 11, 0, 0));
    }

    #[test]
    fn test_independent_of_utc_representation() {
        // 2026-08-26 05:14:59 UTC is 10:59:59 in Kathmandu (+05:45).
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 5, 14, 59).single().unwrap();
        assert_eq!(next_boundary(now), kathmandu(2026, 8, 26, 11, 0, 0));

        // One second later the local clock reads 11:00:00 and rolls over.
        let now = Utc.with_ymd_and_hms(2026, 8, 26, 5, 15, 0).single().unwrap();
        assert_eq!(next_boundary(now), kathmandu(2026, 8, 27, 11, 0, 0));
    }

    proptest! {
        #[test]
        fn prop_boundary_is_strictly_future_at_eleven_local(
            offset_secs in 0i64..(86_400 * 730)
        ) {
            let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap();
            let now = base + Duration::seconds(offset_secs);
            let boundary = next_boundary(now);

            prop_assert!(boundary > now);
            prop_assert!(boundary - now <= Duration::days(1));

            let local = boundary.with_timezone(&BOUNDARY_TZ);
            prop_assert_eq!(
                local.time(),
                NaiveTime::from_hms_opt(BOUNDARY_HOUR, 0, 0).unwrap()
            );
        }
    }
}
