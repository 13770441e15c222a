use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A whole-unit monetary amount.
///
/// Every amount in this domain (slot values, targets, fines) is an integer
/// multiple of 100, so `Money` wraps a plain `i64` with no fractional scale.
/// Using a newtype instead of a bare integer keeps sums, targets and fines
/// from being mixed up with slot indices or counts.
///
/// # Examples
/// ```
/// use savings_tracker::common::money::Money;
///
/// let amount = Money::new(500);
/// assert_eq!(amount.as_i64(), 500);
/// assert_eq!((amount + Money::new(100)).to_string(), "600");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn new(value: i64) -> Self {
        Money(value)
    }

    pub const fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Subtracts `rhs`, flooring the result at zero.
    pub fn sub_floor_zero(self, rhs: Money) -> Money {
        Money((self.0 - rhs.0).max(0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
