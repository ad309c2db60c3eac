use std::time;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone};

/// Absolute difference between two keys of the same type.
///
/// Implementations must be symmetric and never negative, the search relies
/// on comparing two distances measured from the same query.
pub trait Distance {
    type Output: PartialOrd;

    fn distance(&self, other: &Self) -> Self::Output;
}

macro_rules! int_distance {
    ($($int:ty => $out:ty),* $(,)?) => {
        $(
            impl Distance for $int {
                type Output = $out;

                fn distance(&self, other: &Self) -> $out {
                    self.abs_diff(*other)
                }
            }
        )*
    };
}

int_distance! {
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
}

impl Distance for f32 {
    type Output = f32;

    fn distance(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl Distance for f64 {
    type Output = f64;

    fn distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

impl Distance for time::Duration {
    type Output = time::Duration;

    fn distance(&self, other: &Self) -> time::Duration {
        if self >= other {
            *self - *other
        } else {
            *other - *self
        }
    }
}

fn abs_delta(delta: Duration) -> Duration {
    if delta < Duration::zero() {
        -delta
    } else {
        delta
    }
}

impl Distance for NaiveDate {
    type Output = Duration;

    fn distance(&self, other: &Self) -> Duration {
        abs_delta(self.signed_duration_since(*other))
    }
}

impl Distance for NaiveDateTime {
    type Output = Duration;

    fn distance(&self, other: &Self) -> Duration {
        abs_delta(self.signed_duration_since(*other))
    }
}

impl<Tz: TimeZone> Distance for DateTime<Tz> {
    type Output = Duration;

    fn distance(&self, other: &Self) -> Duration {
        abs_delta(self.clone().signed_duration_since(other.clone()))
    }
}
