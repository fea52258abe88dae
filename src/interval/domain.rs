//! Type adapters: the ordering and step capabilities a value type lends to
//! the interval algebra.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use std::cmp::Ordering;
use std::fmt;

/// A totally ordered set of values that intervals can range over.
///
/// Floating point types use the IEEE 754 total order, so every value
/// (including `NaN` and signed zeros) has a well-defined position.
pub trait Domain: Clone + fmt::Debug {
    fn compare(&self, other: &Self) -> Ordering;
}

/// A domain with a successor/predecessor operation, used to move a finite
/// boundary across one unit when changing its inclusivity.
///
/// Both directions return `None` when the shifted value is not
/// representable in the domain.
///
/// # Examples
///
/// ```rust
/// use intervals::Step;
///
/// assert_eq!(4i32.checked_forward(&1), Some(5));
/// assert_eq!(4i32.checked_backward(&i32::unit()), Some(3));
/// assert_eq!(i32::MAX.checked_forward(&1), None);
/// ```
pub trait Step: Domain {
    /// The type of distance between two values, e.g. `TimeDelta` for
    /// timestamps.
    type Delta: Clone + fmt::Debug;

    /// The default step used by the `*_unit` conveniences.
    fn unit() -> Self::Delta;

    fn checked_forward(&self, delta: &Self::Delta) -> Option<Self>;

    fn checked_backward(&self, delta: &Self::Delta) -> Option<Self>;
}

macro_rules! ord_domain {
    ($($t:ty),* $(,)?) => {
        $(
            impl Domain for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

ord_domain!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, String,
    NaiveDate, NaiveTime, NaiveDateTime,
);

macro_rules! int_step {
    ($($t:ty),* $(,)?) => {
        $(
            impl Step for $t {
                type Delta = $t;

                fn unit() -> $t {
                    1
                }

                fn checked_forward(&self, delta: &$t) -> Option<$t> {
                    self.checked_add(*delta)
                }

                fn checked_backward(&self, delta: &$t) -> Option<$t> {
                    self.checked_sub(*delta)
                }
            }
        )*
    };
}

int_step!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// A step that overflows to an infinity has no finite result.
macro_rules! float_domain {
    ($($t:ty),* $(,)?) => {
        $(
            impl Domain for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }

            impl Step for $t {
                type Delta = $t;

                fn unit() -> $t {
                    1.0
                }

                fn checked_forward(&self, delta: &$t) -> Option<$t> {
                    Some(self + delta).filter(|v| v.is_finite() || !self.is_finite())
                }

                fn checked_backward(&self, delta: &$t) -> Option<$t> {
                    Some(self - delta).filter(|v| v.is_finite() || !self.is_finite())
                }
            }
        )*
    };
}

float_domain!(f32, f64);

impl Step for NaiveDate {
    type Delta = Days;

    fn unit() -> Days {
        Days::new(1)
    }

    fn checked_forward(&self, delta: &Days) -> Option<NaiveDate> {
        self.checked_add_days(*delta)
    }

    fn checked_backward(&self, delta: &Days) -> Option<NaiveDate> {
        self.checked_sub_days(*delta)
    }
}

impl Step for NaiveDateTime {
    type Delta = TimeDelta;

    fn unit() -> TimeDelta {
        TimeDelta::seconds(1)
    }

    fn checked_forward(&self, delta: &TimeDelta) -> Option<NaiveDateTime> {
        self.checked_add_signed(*delta)
    }

    fn checked_backward(&self, delta: &TimeDelta) -> Option<NaiveDateTime> {
        self.checked_sub_signed(*delta)
    }
}

// Times of day do not wrap: crossing midnight in either direction has no
// result.
impl Step for NaiveTime {
    type Delta = TimeDelta;

    fn unit() -> TimeDelta {
        TimeDelta::seconds(1)
    }

    fn checked_forward(&self, delta: &TimeDelta) -> Option<NaiveTime> {
        match self.overflowing_add_signed(*delta) {
            (time, 0) => Some(time),
            _ => None,
        }
    }

    fn checked_backward(&self, delta: &TimeDelta) -> Option<NaiveTime> {
        match self.overflowing_sub_signed(*delta) {
            (time, 0) => Some(time),
            _ => None,
        }
    }
}

impl<Tz: TimeZone> Domain for DateTime<Tz> {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl<Tz: TimeZone> Step for DateTime<Tz> {
    type Delta = TimeDelta;

    fn unit() -> TimeDelta {
        TimeDelta::seconds(1)
    }

    fn checked_forward(&self, delta: &TimeDelta) -> Option<Self> {
        self.clone().checked_add_signed(*delta)
    }

    fn checked_backward(&self, delta: &TimeDelta) -> Option<Self> {
        self.clone().checked_sub_signed(*delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn integers_stop_at_their_limits() {
        assert_eq!(i32::MAX.checked_forward(&1), None);
        assert_eq!(i32::MIN.checked_backward(&1), None);
        assert_eq!(0u8.checked_backward(&u8::unit()), None);
        assert_eq!((-3i64).checked_forward(&5), Some(2));
    }

    #[test]
    fn floats_use_total_order() {
        assert_eq!(1.5f64.compare(&2.0), Ordering::Less);
        assert_eq!((-0.0f64).compare(&0.0), Ordering::Less);
        assert_eq!(f64::NAN.compare(&f64::INFINITY), Ordering::Greater);
        assert_eq!(2.5f64.checked_forward(&f64::unit()), Some(3.5));
        assert_eq!(f64::MAX.checked_forward(&f64::MAX), None);
    }

    #[test]
    fn dates_step_by_days() {
        let d = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        assert_eq!(
            d.checked_forward(&NaiveDate::unit()),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(NaiveDate::MIN.checked_backward(&Days::new(3)), None);
    }

    #[test]
    fn date_times_step_by_seconds() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let before = NaiveDate::from_ymd_opt(2023, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(dt.checked_backward(&NaiveDateTime::unit()), Some(before));
        assert_eq!(NaiveDateTime::MAX.checked_forward(&TimeDelta::days(1)), None);
    }

    #[test]
    fn times_do_not_cross_midnight() {
        let t = |h, m, s| NaiveTime::from_hms_opt(h, m, s).unwrap();
        assert_eq!(t(0, 0, 0).checked_backward(&NaiveTime::unit()), None);
        assert_eq!(t(23, 59, 59).checked_forward(&NaiveTime::unit()), None);
        assert_eq!(
            t(23, 59, 58).checked_forward(&NaiveTime::unit()),
            Some(t(23, 59, 59))
        );
        assert_eq!(t(0, 0, 1).checked_backward(&NaiveTime::unit()), Some(t(0, 0, 0)));
    }

    #[test]
    fn zoned_timestamps() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let a = offset.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 5, 1, 11, 0, 1).unwrap();
        assert_eq!(a.with_timezone(&Utc).compare(&b), Ordering::Less);
        assert_eq!(
            a.checked_forward(&DateTime::<FixedOffset>::unit())
                .map(|dt| dt.with_timezone(&Utc)),
            Some(b)
        );
        assert_eq!(DateTime::<Utc>::MAX_UTC.checked_forward(&TimeDelta::seconds(1)), None);
    }
}
