use std::ops::Mul;

use num_traits::{CheckedMul, One, WrappingMul};

use super::power;

/// Raises a number to a non-negative integer power
pub trait Power: Sized {
    fn power(&self, exponent: u64) -> Self;
}

/// Same as [Power], but returns `None` instead of overflowing
pub trait CheckedPower: Sized {
    fn checked_power(&self, exponent: u64) -> Option<Self>;
}

/// Same as [Power], but wraps around at the boundary of the type
pub trait WrappingPower: Sized {
    fn wrapping_power(&self, exponent: u64) -> Self;
}

impl<T> Power for T
where
    T: Clone + One + Mul<Output = T>,
{
    fn power(&self, exponent: u64) -> Self {
        power::power(self, exponent)
    }
}

impl<T> CheckedPower for T
where
    T: Clone + One + CheckedMul,
{
    fn checked_power(&self, exponent: u64) -> Option<Self> {
        power::checked_power(self, exponent)
    }
}

impl<T> WrappingPower for T
where
    T: Clone + One + WrappingMul,
{
    fn wrapping_power(&self, exponent: u64) -> Self {
        power::wrapping_power(self, exponent)
    }
}
