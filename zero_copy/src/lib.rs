#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use common::{
    safe_add, Address, Uint256, ADDR_LEN, UINT16_SIZE, UINT256_SIZE, UINT32_SIZE, UINT64_SIZE,
};
pub use sink::ZeroCopySink;
pub use source::ZeroCopySource;
pub use traits::{DeserializeZeroCopy, SerializeZeroCopy};
pub use var_uint::{VarUint, MAX_VAR_UINT_SIZE};

pub mod common;
pub mod owned;
pub mod sink;
pub mod source;
pub mod traits;
pub mod var_uint;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A read needed more bytes than were left in the source.
    EndOfData,
    /// Boolean byte was neither 0 nor 1.
    InvalidBool,
    MalformedUtf8,
    /// Sink growth would exceed what the address space can express.
    TooLarge,
}

impl Error {
    /// True for the recoverable "ran out of input" condition.
    pub fn is_end_of_data(&self) -> bool {
        matches!(self, Error::EndOfData)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EndOfData => write!(f, "unexpected end of data"),
            Error::InvalidBool => write!(f, "invalid boolean byte"),
            Error::MalformedUtf8 => write!(f, "string is not valid UTF-8"),
            Error::TooLarge => write!(f, "buffer too large"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub mod prelude {
    pub use crate::Error as ZeroCopyError;
    pub use crate::common::{Address, Uint256};
    pub use crate::sink::ZeroCopySink;
    pub use crate::source::ZeroCopySource;
    pub use crate::traits::{DeserializeZeroCopy, SerializeZeroCopy};
    pub use crate::var_uint::VarUint;
}
