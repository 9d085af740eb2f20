mod big_native;
mod macros;
pub mod power;
mod serde_support;
pub mod traits;

pub use big_native::BigInt;
pub use power::{checked_power, power, wrapping_power};
pub use traits::*;
