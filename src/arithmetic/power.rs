//! Exponentiation by squaring
//!
//! Every function here halves the exponent on each recursive step, so computing
//! `base^exponent` takes `O(log exponent)` multiplications and the recursion is
//! at most 64 frames deep.

use std::ops::Mul;

use num_traits::{CheckedMul, One, WrappingMul};

/// Computes `base^exponent` by recursive squaring
///
/// * exponent `0` gives `1`
/// * exponent `1` gives `base`
/// * even exponent `e` gives `power(base, e/2)^2`
/// * odd exponent `e` gives `base * power(base, (e-1)/2)^2`
///
/// Overflow behaves the way `*` behaves for `T`. Use [checked_power] or
/// [wrapping_power] when that matters.
///
/// ## Example
/// ```rust
/// use sqpow::arithmetic::power;
/// use sqpow::BigInt;
///
/// assert_eq!(power(&4i64, 4), 256);
/// assert_eq!(power(&BigInt::from(2), 100).to_string(), "1267650600228229401496703205376");
/// ```
pub fn power<T>(base: &T, exponent: u64) -> T
where
    T: Clone + One + Mul<Output = T>,
{
    match exponent {
        0 => T::one(),
        1 => base.clone(),
        e if e % 2 == 0 => {
            let half = power(base, e / 2);
            half.clone() * half
        }
        e => {
            let half = power(base, (e - 1) / 2);
            base.clone() * half.clone() * half
        }
    }
}

/// Computes `base^exponent`, returning `None` if any step overflows `T`
///
/// Intermediate values never exceed the magnitude of the final result, so
/// `None` is returned exactly when `base^exponent` is not representable.
pub fn checked_power<T>(base: &T, exponent: u64) -> Option<T>
where
    T: Clone + One + CheckedMul,
{
    match exponent {
        0 => Some(T::one()),
        1 => Some(base.clone()),
        e if e % 2 == 0 => {
            let half = checked_power(base, e / 2)?;
            half.checked_mul(&half)
        }
        e => {
            let half = checked_power(base, (e - 1) / 2)?;
            base.checked_mul(&half)?.checked_mul(&half)
        }
    }
}

/// Computes `base^exponent` in two's complement, wrapping around on overflow
pub fn wrapping_power<T>(base: &T, exponent: u64) -> T
where
    T: Clone + One + WrappingMul,
{
    match exponent {
        0 => T::one(),
        1 => base.clone(),
        e if e % 2 == 0 => {
            let half = wrapping_power(base, e / 2);
            half.wrapping_mul(&half)
        }
        e => {
            let half = wrapping_power(base, (e - 1) / 2);
            base.wrapping_mul(&half).wrapping_mul(&half)
        }
    }
}

#[cfg(test)]
mod test {
    use std::fmt::Debug;

    use num_traits::{CheckedMul, PrimInt, WrappingMul};

    use super::*;
    use crate::arithmetic::BigInt;

    crate::test_for_all_integers!(zero_exponent_gives_one);
    fn zero_exponent_gives_one<T: PrimInt + Debug>() {
        for b in 0..10u8 {
            let b: T = num_traits::cast(b).unwrap();
            assert_eq!(power(&b, 0), T::one());
        }
    }

    crate::test_for_all_integers!(unit_exponent_gives_base);
    fn unit_exponent_gives_base<T: PrimInt + Debug>() {
        for b in 0..10u8 {
            let b: T = num_traits::cast(b).unwrap();
            assert_eq!(power(&b, 1), b);
        }
    }

    crate::test_for_all_integers!(matches_std_pow_until_overflow);
    fn matches_std_pow_until_overflow<T: PrimInt + CheckedMul + Debug>() {
        for b in 0..=5u8 {
            let b: T = num_traits::cast(b).unwrap();
            for e in 0..70u32 {
                let expected = num_traits::checked_pow(b, e as usize);
                assert_eq!(checked_power(&b, u64::from(e)), expected, "{:?}^{}", b, e);
                if let Some(expected) = expected {
                    assert_eq!(power(&b, u64::from(e)), expected);
                }
            }
        }
    }

    crate::test_for_all_integers!(wrapping_agrees_with_repeated_multiplication);
    fn wrapping_agrees_with_repeated_multiplication<T: PrimInt + WrappingMul + Debug>() {
        let b: T = num_traits::cast(7u8).unwrap();
        let mut expected = T::one();
        for e in 0..200u64 {
            assert_eq!(wrapping_power(&b, e), expected, "7^{}", e);
            expected = expected.wrapping_mul(&b);
        }
    }

    #[test]
    fn formula_examples() {
        assert_eq!(power(&4i32, 4), 256);
        assert_eq!(power(&4i32, 0), 1);
    }

    #[test]
    fn negative_bases() {
        assert_eq!(power(&-2i64, 3), -8);
        assert_eq!(power(&-2i64, 4), 16);
        assert_eq!(checked_power(&-2i64, 63), Some(i64::MIN));
        assert_eq!(checked_power(&-2i64, 64), None);
        assert_eq!(checked_power(&2i64, 63), None);
    }

    #[test]
    fn wrapping_matches_32_bit_int_overflow() {
        assert_eq!(wrapping_power(&4i32, 16), 0);
        assert_eq!(wrapping_power(&3i32, 40), 3i32.wrapping_pow(40));
        assert_eq!(wrapping_power(&-5i32, 33), (-5i32).wrapping_pow(33));
    }

    #[test]
    fn big_int_does_not_overflow() {
        let four = BigInt::from(4);
        let mut expected = BigInt::from(1);
        for _ in 0..100 {
            expected = expected * &four;
        }
        assert_eq!(power(&four, 100), expected);
        assert_eq!(power(&four, 31), BigInt::from(1i64 << 62));
        assert_eq!(power(&four, 32).bit_length(), 65);
    }

    #[test]
    fn large_exponent_of_trivial_bases() {
        assert_eq!(power(&1u64, u64::MAX), 1);
        assert_eq!(power(&0u64, u64::MAX), 0);
        assert_eq!(checked_power(&-1i8, u64::MAX), Some(-1));
        assert_eq!(checked_power(&-1i8, u64::MAX - 1), Some(1));
    }
}
