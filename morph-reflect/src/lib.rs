#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Logs at trace level when the `log` feature is enabled, does nothing otherwise.
#[cfg(feature = "log")]
macro_rules! trace {
    ($($tt:tt)*) => {
        ::log::trace!($($tt)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($tt:tt)*) => {
        {
            if false {
                let _ = ::core::format_args!($($tt)*);
            }
        }
    };
}

mod error;
pub use error::*;

mod peek;
pub use peek::*;

mod poke;
pub use poke::*;

mod compose;
pub use compose::*;
