//! The derived formula printed by the CLI
//!
//! For an input `n` and a base `b` (4 unless told otherwise):
//!
//! ```text
//! power   = b^(n - 2)
//! product = b * power * (n - 1)
//! ```

use std::convert::TryFrom;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::arithmetic::{checked_power, power, wrapping_power, BigInt};
use crate::errors::{Error, Result};

pub const DEFAULT_BASE: i64 = 4;

/// Size budget for [Arithmetic::Big], in bits of the power. The estimate is
/// `exponent * bits(|base|)`, an upper bound on the real size.
pub const MAX_BIG_BITS: u64 = 1 << 20;

/// Integer semantics used to evaluate the formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Arithmetic {
    /// 64-bit signed, overflow is an error (default)
    #[default]
    Checked,
    /// 32-bit signed, wraps around on overflow
    Wrapping,
    /// Arbitrary precision
    Big,
}

/// Result of evaluating the formula for a single `n`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation<T> {
    pub n: i64,
    pub exponent: u64,
    pub power: T,
    pub product: T,
}

impl<T: fmt::Display> fmt::Display for Evaluation<T> {
    /// Two lines: the power, then the product
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.power)?;
        write!(f, "{}", self.product)
    }
}

/// An [Evaluation] in whichever integer type the chosen [Arithmetic] produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Checked(Evaluation<i64>),
    Wrapping(Evaluation<i32>),
    Big(Evaluation<BigInt>),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Checked(e) => fmt::Display::fmt(e, f),
            Report::Wrapping(e) => fmt::Display::fmt(e, f),
            Report::Big(e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Exponent used for `n`, which is `n - 2`
pub fn exponent_for(n: i64) -> Result<u64> {
    n.checked_sub(2)
        .and_then(|e| u64::try_from(e).ok())
        .ok_or(Error::NegativeExponent { n })
}

/// Evaluates the formula for `n` using the given arithmetic
pub fn evaluate(n: i64, base: i64, arithmetic: Arithmetic) -> Result<Report> {
    debug!(n, base, ?arithmetic, "evaluating formula");
    let report = match arithmetic {
        Arithmetic::Checked => Report::Checked(evaluate_checked(n, base)?),
        Arithmetic::Wrapping => Report::Wrapping(evaluate_wrapping(n, base)?),
        Arithmetic::Big => Report::Big(evaluate_big(n, base)?),
    };
    Ok(report)
}

pub fn evaluate_checked(n: i64, base: i64) -> Result<Evaluation<i64>> {
    let exponent = exponent_for(n)?;
    let overflow = |operation| Error::Overflow {
        operation,
        type_name: "i64",
    };

    let power = checked_power(&base, exponent).ok_or_else(|| overflow("power"))?;
    // n >= 2 here, so n - 1 cannot overflow
    let product = base
        .checked_mul(power)
        .and_then(|p| p.checked_mul(n - 1))
        .ok_or_else(|| overflow("product"))?;

    Ok(Evaluation {
        n,
        exponent,
        power,
        product,
    })
}

/// Evaluates in 32-bit two's complement. `n` and `base` themselves must fit in
/// an `i32`; only the multiplications wrap.
pub fn evaluate_wrapping(n: i64, base: i64) -> Result<Evaluation<i32>> {
    let exponent = exponent_for(n)?;
    let narrow = |value: i64, operation| {
        i32::try_from(value).map_err(|_| Error::Overflow {
            operation,
            type_name: "i32",
        })
    };
    let n32 = narrow(n, "n")?;
    let base32 = narrow(base, "base")?;

    let power = wrapping_power(&base32, exponent);
    let product = base32.wrapping_mul(power).wrapping_mul(n32 - 1);

    Ok(Evaluation {
        n,
        exponent,
        power,
        product,
    })
}

pub fn evaluate_big(n: i64, base: i64) -> Result<Evaluation<BigInt>> {
    let exponent = exponent_for(n)?;
    let base = BigInt::from(base);
    // |base| <= 1 never grows
    let base_bits = base.abs().bit_length();
    if base_bits > 1 {
        let estimated_bits = exponent.saturating_mul(base_bits);
        if estimated_bits > MAX_BIG_BITS {
            return Err(Error::ResultTooLarge {
                estimated_bits,
                max_bits: MAX_BIG_BITS,
            });
        }
    }

    let power = power(&base, exponent);
    let mut product = &base * &power;
    product *= BigInt::from(n - 1);
    debug!(bits = power.bit_length(), "computed big power");

    Ok(Evaluation {
        n,
        exponent,
        power,
        product,
    })
}
