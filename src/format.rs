//! Writing [`LargeInt`] values as text.
//!
//! The standard formatting traits are implemented, and honour the usual flags
//! for width, fill, alignment, sign, and prefix:
//!
//! ```
//! use largeint::I128;
//!
//! let value = I128::from(-255_i64);
//! assert_eq!(format!("{value}"),       "-255");
//! assert_eq!(format!("{value:>8}"),    "    -255");
//! assert_eq!(format!("{:#x}", -value), "0xff");
//! ```
//!
//! Hexadecimal, octal, and binary output show the two's-complement bit
//! pattern, exactly as they do for the standard integer types.
//!
//! For settings that need to be stored or passed around, [`NumberFormat`]
//! bundles them into a value that also drives the [`Scanner`](crate::Scanner).
//!

#![allow(clippy::arithmetic_side_effects, reason = "Digit positions are bounded by the width")]
#![allow(clippy::indexing_slicing,        reason = "Digits are always below the base")]



//		Modules

#[cfg(test)]
#[path = "tests/format.rs"]
mod tests;



//		Packages

use crate::int::{LargeInt, WordsFor};
use core::{
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	iter,
	ops::Div,
};
use generic_array::{ArrayLength, GenericArray};
use serde::{Deserialize, Serialize};
use typenum::{U64, Unsigned};



//		Constants

/// Lowercase digits, indexed by value.
const DIGITS_LOWER: &[u8; 16] = b"0123456789abcdef";

/// Uppercase digits, indexed by value.
const DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";



//		Enums

//		Align
/// Where the fill characters go when the output is shorter than the width.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Align {
	/// Fill after the number.
	Left,

	/// Fill before the number.
	#[default]
	Right,

	/// Fill between the sign or base prefix and the digits.
	Internal,
}

//		Base
/// The base used for reading and writing literals.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Base {
	/// Base 10.
	#[default]
	Decimal,

	/// Base 16.
	Hex,

	/// Base 8.
	Octal,
}

//󰭅		Base
impl Base {
	//		radix
	/// The numeric base.
	#[must_use]
	pub const fn radix(self) -> u8 {
		match self {
			Self::Decimal => 10,
			Self::Hex     => 16,
			Self::Octal   => 8,
		}
	}
}



//		Structs

//		NumberFormat
/// Formatting and parsing settings for [`LargeInt`] text.
///
/// The defaults write plain decimal, right-aligned with no padding, and skip
/// leading whitespace when reading. Every field can be loaded from
/// configuration, with any missing fields taking their defaults:
///
/// ```
/// use largeint::{Base, NumberFormat};
///
/// let format: NumberFormat = serde_json::from_str(r#"{"base": "hex", "show_base": true}"#).unwrap();
/// assert_eq!(format.base, Base::Hex);
/// assert!(format.skip_whitespace);
/// ```
///
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
#[expect(clippy::struct_excessive_bools, reason = "Independent formatting flags")]
pub struct NumberFormat {
	/// The base to use.
	pub base:               Base,

	/// Whether to write the base prefix, i.e. `0x` for hexadecimal or `0` for
	/// octal. Zero is never given a prefix.
	pub show_base:          bool,

	/// Whether to write a `+` before non-negative decimal numbers.
	pub show_positive_sign: bool,

	/// Whether hexadecimal digits and the `0X` prefix are uppercase.
	pub uppercase:          bool,

	/// The minimum number of characters to write.
	pub width:              usize,

	/// The character used to pad up to the width.
	pub fill:               char,

	/// Where the padding goes.
	pub align:              Align,

	/// Whether to skip leading whitespace when reading.
	pub skip_whitespace:    bool,
}

//󰭅		NumberFormat
impl NumberFormat {
	//		format
	/// Writes a value as text according to these settings.
	///
	/// # Parameters
	///
	/// * `value` - The value to write.
	///
	#[must_use]
	pub fn format<BITS>(&self, value: &LargeInt<BITS>) -> String
	where
		BITS:                              Unsigned + Div<U64>,
		WordsFor<BITS>:                    ArrayLength,
		GenericArray<u64, WordsFor<BITS>>: Copy,
	{
		let prefixed = self.show_base && value.is_non_zero();
		let (sign, prefix, digits) = match self.base {
			Base::Decimal => {
				let sign = if value.is_negative() {
					"-"
				} else if self.show_positive_sign {
					"+"
				} else {
					""
				};
				(sign, "", value.decimal_digits())
			}
			Base::Hex     => {
				let prefix = match (prefixed, self.uppercase) {
					(false, _)    => "",
					(true, false) => "0x",
					(true, true)  => "0X",
				};
				("", prefix, value.radix_digits(4, self.uppercase))
			}
			Base::Octal   => ("", if prefixed { "0" } else { "" }, value.radix_digits(3, false)),
		};

		let padding = self.width.saturating_sub(sign.len() + prefix.len() + digits.len());
		let fill    = iter::repeat_n(self.fill, padding).collect::<String>();
		match self.align {
			Align::Left     => format!("{sign}{prefix}{digits}{fill}"),
			Align::Right    => format!("{fill}{sign}{prefix}{digits}"),
			Align::Internal => format!("{sign}{prefix}{fill}{digits}"),
		}
	}
}

//󰭅		Default
impl Default for NumberFormat {
	//		default
	fn default() -> Self {
		Self {
			base:               Base::Decimal,
			show_base:          false,
			show_positive_sign: false,
			uppercase:          false,
			width:              0,
			fill:               ' ',
			align:              Align::Right,
			skip_whitespace:    true,
		}
	}
}

//		Formatted
/// A [`LargeInt`] paired with a [`NumberFormat`], for use with `{}`.
///
/// This is created by [`LargeInt::display_with()`].
///
pub struct Formatted<'a, BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	/// The value to write.
	value:  &'a LargeInt<BITS>,

	/// The settings to write it with.
	format: &'a NumberFormat,
}

//󰭅		Debug
impl<BITS> Debug for Formatted<'_, BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Formatted")
			.field("value",  self.value)
			.field("format", self.format)
			.finish()
	}
}

//󰭅		Display
impl<BITS> Display for Formatted<'_, BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format.format(self.value))
	}
}

//󰭅		LargeInt
impl<BITS> LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		display_with
	/// Pairs the value with formatting settings, for use with `{}`.
	///
	/// # Parameters
	///
	/// * `format` - The settings to write the value with.
	///
	/// # Examples
	///
	/// ```
	/// use largeint::{Align, I256, NumberFormat};
	///
	/// let format = NumberFormat { width: 6, fill: '0', align: Align::Internal, ..NumberFormat::default() };
	/// assert_eq!(I256::from(-42_i64).display_with(&format).to_string(), "-00042");
	/// ```
	///
	#[must_use]
	pub const fn display_with<'a>(&'a self, format: &'a NumberFormat) -> Formatted<'a, BITS> {
		Formatted { value: self, format }
	}

	//		to_hex_string
	/// The lowercase hexadecimal digits of the bit pattern, without a prefix.
	#[must_use]
	pub fn to_hex_string(&self) -> String {
		self.radix_digits(4, false)
	}

	//		to_octal_string
	/// The octal digits of the bit pattern, without a prefix.
	#[must_use]
	pub fn to_octal_string(&self) -> String {
		self.radix_digits(3, false)
	}

	//		decimal_digits
	/// The decimal digits of the magnitude, without a sign.
	///
	/// The digits are produced least significant first, by repeatedly dividing
	/// by ten and keeping the remainder.
	///
	fn decimal_digits(&self) -> String {
		let (_, mut magnitude) = self.sign_magnitude();
		let mut digits         = Vec::new();
		loop {
			let (quotient, digit) = magnitude.div_rem_unsigned_word(10);
			digits.push(digit_char(digit, false));
			magnitude             = quotient;
			if magnitude.is_zero() {
				break;
			}
		}
		digits.iter().rev().collect()
	}

	//		radix_digits
	/// The digits of the bit pattern for a power-of-two base.
	///
	/// Each digit is a group of `bits` bits, read straight from the words.
	/// Leading zero digits are dropped, but there is always at least one digit.
	///
	fn radix_digits(&self, bits: u32, uppercase: bool) -> String {
		let width      = bits as usize;
		let count      = Self::BITS.div_ceil(width);
		let mut output = String::with_capacity(count);
		for index in (0..count).rev() {
			let digit = self.extract_bits(index * width, bits);
			if digit == 0 && output.is_empty() && index > 0 {
				continue;
			}
			output.push(digit_char(digit, uppercase));
		}
		output
	}
}

//󰭅		Binary
impl<BITS> Binary for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &self.radix_digits(1, false))
	}
}

//󰭅		Display
impl<BITS> Display for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &self.decimal_digits())
	}
}

//󰭅		LowerHex
impl<BITS> LowerHex for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.radix_digits(4, false))
	}
}

//󰭅		Octal
impl<BITS> Octal for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0o", &self.radix_digits(3, false))
	}
}

//󰭅		UpperHex
impl<BITS> UpperHex for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0x", &self.radix_digits(4, true))
	}
}



//		Functions

//		digit_char
/// The character for a digit value below 16.
#[expect(clippy::cast_possible_truncation, reason = "Digits are always below 16")]
fn digit_char(digit: u64, uppercase: bool) -> char {
	let table = if uppercase { DIGITS_UPPER } else { DIGITS_LOWER };
	char::from(table[(digit & 0xF) as usize])
}
