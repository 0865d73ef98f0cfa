//! Absolute time conversion tests
#[cfg(test)]
mod test {
    use crate::prelude::*;
    use std::str::FromStr;

    #[test]
    fn utc_accessor() {
        let epoch = Epoch::from_str("2024-03-19T12:00:00 UTC").unwrap();

        let t = AbsoluteTime::new(epoch);
        assert_eq!(t.utc(), epoch);

        let t: AbsoluteTime = epoch.into();
        assert_eq!(t.utc(), epoch);

        let t = AbsoluteTime::from_gregorian_utc(2024, 3, 19, 12, 0, 0, 0);
        assert_eq!(t.utc(), epoch);
    }

    #[test]
    fn julian_date() {
        // J2000.0 epoch
        let j2000 = AbsoluteTime::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert!(
            (j2000.julian_date() - 2451545.0).abs() < 1E-6,
            "bad julian date for J2000.0: {}",
            j2000.julian_date(),
        );

        let t = AbsoluteTime::from_gregorian_utc(2024, 3, 19, 12, 0, 0, 0);
        assert!(
            (t.julian_date() - 2460389.0).abs() < 1E-6,
            "bad julian date for 2024-03-19T12:00:00 UTC: {}",
            t.julian_date(),
        );
    }

    #[test]
    fn modified_julian_date() {
        let j2000 = AbsoluteTime::from_gregorian_utc(2000, 1, 1, 12, 0, 0, 0);
        assert!((j2000.modified_julian_date() - 51544.5).abs() < 1E-6);

        // MJD epoch itself
        let t = AbsoluteTime::from_gregorian_utc(1858, 11, 17, 0, 0, 0, 0);
        assert!((t.modified_julian_date() - 0.0).abs() < 1E-6);
        assert!((t.julian_date() - MJD_OFFSET).abs() < 1E-6);
    }

    #[test]
    fn mjd_jd_relation() {
        for epoch in [
            "1858-11-17T00:00:00 UTC",
            "2000-01-01T12:00:00 UTC",
            "2023-08-27T00:00:00 UTC",
            "2024-03-19T12:00:00 UTC",
        ] {
            let t = AbsoluteTime::new(Epoch::from_str(epoch).unwrap());
            assert!(
                (t.modified_julian_date() - (t.julian_date() - MJD_OFFSET)).abs() < 1E-9,
                "MJD/JD relation broken at {}",
                epoch,
            );
        }
    }

    #[test]
    fn pre_mjd_epoch() {
        // half a day prior to the MJD epoch: the day/seconds split
        // must floor toward the earlier day
        let t = AbsoluteTime::from_gregorian_utc(1858, 11, 16, 12, 0, 0, 0);
        assert!(
            (t.julian_date() - 2400000.0).abs() < 1E-6,
            "bad julian date prior to MJD epoch: {}",
            t.julian_date(),
        );
        assert!((t.modified_julian_date() - (-0.5)).abs() < 1E-6);
    }

    #[test]
    fn gpst_time_of_week() {
        // 2023-08-27 is a sunday, GPST-UTC was 18 s
        let t = AbsoluteTime::from_gregorian_utc(2023, 8, 27, 0, 0, 0, 0);
        let (week, nanos) = t.gpst_time_of_week();

        assert_eq!(week, 2277, "bad GPS week number");
        assert_eq!(nanos, 18_000_000_000, "bad GPS nanoseconds of week");
    }

    #[test]
    fn sub_second_precision() {
        let t0 = AbsoluteTime::from_gregorian_utc(2024, 3, 19, 12, 0, 0, 0);
        let t1 = AbsoluteTime::from_gregorian_utc(2024, 3, 19, 18, 0, 0, 0);

        // quarter of a day later
        assert!((t1.julian_date() - t0.julian_date() - 0.25).abs() < 1E-9);
        assert!(t1 > t0);
    }
}
