//! Integer power by recursive squaring
//!
//! The [arithmetic] module holds the power functions, generic over primitive
//! integers and [BigInt]. [formula] builds the two values the `sqpow` binary
//! prints on top of them.

pub mod arithmetic;
pub use crate::arithmetic::BigInt;

pub mod cli;
pub mod errors;
pub mod formula;
pub mod input;
pub mod telemetry;

mod test_utils;
