use std::{fmt, ops};

use num_bigint::BigInt as BN;
use num_traits::{One, Signed};

/// Big integer
///
/// Wraps the `num-bigint` implementation and exposes only the API that power
/// computations need. Values serialize as decimal strings (see `serde_support`).
#[derive(PartialEq, Eq, Clone)]
pub struct BigInt {
    num: BN,
}

impl BigInt {
    fn inner_ref(&self) -> &BN {
        &self.num
    }
    fn inner_mut(&mut self) -> &mut BN {
        &mut self.num
    }
    fn into_inner(self) -> BN {
        self.num
    }

    pub fn abs(&self) -> Self {
        self.num.abs().wrap()
    }

    /// Number of bits in the magnitude
    pub fn bit_length(&self) -> u64 {
        self.num.bits()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.num, f)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.num, f)
    }
}

crate::__bigint_impl_from! { i64 }

crate::__bigint_impl_ops! {
    Mul mul,
}

crate::__bigint_impl_assigns! {
    MulAssign mul_assign,
}

impl One for BigInt {
    fn one() -> Self {
        BN::one().wrap()
    }
}

/// Internal helper trait. Creates short-hand for wrapping num-bigint's BigInt into BigInt.
trait Wrap {
    fn wrap(self) -> BigInt;
}
impl Wrap for BN {
    fn wrap(self) -> BigInt {
        BigInt { num: self }
    }
}
