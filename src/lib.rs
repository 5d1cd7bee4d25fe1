//! The Largeint crate provides fixed-width signed integers of any multiple of
//! 64 bits, such as 256, 1024, or 4096 bits.
//!
//! The main type is [`LargeInt`], which is generic over its width in bits,
//! expressed as a [`typenum`] unsigned type. Aliases are provided for the
//! common widths, from [`I128`] up to [`I4096`].
//!
//! Values behave like the standard signed integers with wrapping arithmetic:
//! they are `Copy`, two's-complement, and every arithmetic result is reduced
//! modulo `2^BITS`. Division truncates towards zero, and keeps its remainder
//! available through [`Quotient`].
//!
//! ```
//! use largeint::I1024;
//!
//! let big: I1024 = "-122435843953723954234958473942043735374349544738992998187456783424737538394220".parse().unwrap();
//! assert_eq!(big * 3_i32 / 3_i32, big);
//! assert!(big < I1024::zero());
//! assert_eq!(format!("{:x}", I1024::from(255_u8)), "ff");
//! ```
//!
//! Text can be read and written in decimal, hexadecimal, and octal, either
//! through the standard [`FromStr`](core::str::FromStr) and formatting traits,
//! or with explicit settings through [`NumberFormat`] and [`Scanner`].
//!



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::arithmetic_side_effects,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cast_possible_wrap,
	clippy::cast_sign_loss,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::integer_division,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod dword;
mod errors;
mod format;
mod int;
mod parse;
mod quotient;
mod scalar;

#[cfg(test)]
#[path = "tests/strategies.rs"]
mod strategies;



//		Packages

pub use dword::{DoubleWord, Dword, Native, Split};
pub use errors::{ConversionError, FormatError};
pub use format::{Align, Base, Formatted, NumberFormat};
pub use int::{LargeInt, WordsFor};
pub use parse::Scanner;
pub use quotient::Quotient;
pub use scalar::Scalar;
pub use typenum;



//		Type aliases

/// A 128-bit signed integer.
pub type I128  = LargeInt<typenum::U128>;

/// A 192-bit signed integer.
pub type I192  = LargeInt<typenum::U192>;

/// A 256-bit signed integer.
pub type I256  = LargeInt<typenum::U256>;

/// A 512-bit signed integer.
pub type I512  = LargeInt<typenum::U512>;

/// A 1024-bit signed integer.
pub type I1024 = LargeInt<typenum::U1024>;

/// A 2048-bit signed integer.
pub type I2048 = LargeInt<typenum::U2048>;

/// A 4096-bit signed integer.
pub type I4096 = LargeInt<typenum::U4096>;
