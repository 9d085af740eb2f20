use thiserror::Error;

/// Errors raised while reading `n` and evaluating the formula.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no integer found on input")]
    MissingInput,

    #[error("expected an integer, found {token:?}")]
    InvalidInput { token: String },

    #[error("n = {n} gives a negative exponent; n must be at least 2")]
    NegativeExponent { n: i64 },

    #[error("{operation} overflowed {type_name}")]
    Overflow {
        operation: &'static str,
        type_name: &'static str,
    },

    #[error("result would need about {estimated_bits} bits, more than the {max_bits} allowed for big arithmetic")]
    ResultTooLarge { estimated_bits: u64, max_bits: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_ARITHMETIC_ERROR: u8 = 3;

impl Error {
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MissingInput | Error::InvalidInput { .. } => EXIT_INPUT_ERROR,
            Error::NegativeExponent { .. }
            | Error::Overflow { .. }
            | Error::ResultTooLarge { .. } => EXIT_ARITHMETIC_ERROR,
            Error::Io(_) | Error::Json(_) => EXIT_ERROR,
        }
    }
}

/// Determine the appropriate process exit code for an error.
///
/// Looks through any `.context(..)` layers for the first [Error] in the chain.
pub fn get_exit_code(e: &anyhow::Error) -> u8 {
    e.chain()
        .find_map(|cause| cause.downcast_ref::<Error>())
        .map(Error::exit_code)
        .unwrap_or(EXIT_ERROR)
}
