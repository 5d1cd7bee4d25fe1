//! Reading [`LargeInt`] values from text.
//!
//! There are two ways in. [`FromStr`] (and so [`str::parse()`]) takes a whole
//! string and works out the base from the literal itself:
//!
//!   - A leading `-` means a negative decimal number.
//!   - A leading `0x` or `0X` means hexadecimal.
//!   - Any other leading `0` means octal.
//!   - Anything else is decimal.
//!
//! The [`Scanner`] reads literals one at a time from a longer input, with the
//! base and the whitespace handling taken from a [`NumberFormat`], and stops at
//! the first character that cannot continue the literal.
//!
//! In both cases the digits are accumulated as `value * base + digit`, with the
//! usual modular wrap-around, so over-long literals silently keep their low
//! bits rather than failing.
//!

#![allow(clippy::arithmetic_side_effects, reason = "Accumulation wraps modulo 2^BITS")]



//		Modules

#[cfg(test)]
#[path = "tests/parse.rs"]
mod tests;



//		Packages

use crate::{
	errors::FormatError,
	format::{Base, NumberFormat},
	int::{LargeInt, WordsFor},
};
use core::{ops::Div, str::FromStr};
use generic_array::{ArrayLength, GenericArray};
use typenum::{U64, Unsigned};



//		Structs

//		Scanner
/// A cursor that reads successive [`LargeInt`] literals from a string.
///
/// Each call to [`read()`](Scanner::read()) consumes the longest valid literal
/// at the current position, and leaves the cursor on the first character that
/// is not part of it. When no literal is present the read fails with
/// [`FormatError::NoDigits`], and the cursor does not move.
///
/// # Examples
///
/// ```
/// use largeint::{I256, NumberFormat, Scanner};
///
/// let mut scanner = Scanner::new("  -42 17,x");
/// let format      = NumberFormat::default();
/// assert_eq!(scanner.read(&format), Ok(I256::from(-42_i64)));
/// assert_eq!(scanner.read(&format), Ok(I256::from(17_i64)));
/// assert_eq!(scanner.remaining(), ",x");
/// ```
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scanner<'a> {
	/// The full input.
	input:    &'a str,

	/// The byte offset of the cursor.
	position: usize,
}

//󰭅		Scanner
impl<'a> Scanner<'a> {
	//		new
	/// Creates a new [`Scanner`] positioned at the start of the input.
	///
	/// # Parameters
	///
	/// * `input` - The text to read from.
	///
	#[must_use]
	pub const fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	//		is_empty
	/// Determines whether the whole input has been consumed.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.remaining().is_empty()
	}

	//		position
	/// The byte offset of the cursor within the input.
	#[must_use]
	pub const fn position(&self) -> usize {
		self.position
	}

	//		read
	/// Reads the next literal.
	///
	/// Leading whitespace is skipped if the format asks for it. A decimal
	/// literal may have a `+` or `-` sign, and a hexadecimal literal may have a
	/// `0x` or `0X` prefix. A prefix that is not followed by a hex digit is not
	/// part of the literal, so `"0xg"` reads as `0` and stops at the `x`.
	///
	/// # Parameters
	///
	/// * `format` - The base and whitespace handling to use.
	///
	/// # Errors
	///
	/// Returns [`FormatError::NoDigits`] if there is no literal at the cursor,
	/// in which case the cursor is left where it was.
	///
	pub fn read<BITS>(&mut self, format: &NumberFormat) -> Result<LargeInt<BITS>, FormatError>
	where
		BITS:                              Unsigned + Div<U64>,
		WordsFor<BITS>:                    ArrayLength,
		GenericArray<u64, WordsFor<BITS>>: Copy,
	{
		let rest      = self.remaining();
		let trimmed   = if format.skip_whitespace { rest.trim_start() } else { rest };
		let skipped   = rest.len() - trimmed.len();
		let radix     = format.base.radix();
		let mut first = trimmed.chars();
		let mut lead  = 0;
		let mut neg   = false;

		match format.base {
			Base::Decimal => {
				if let Some(c @ ('+' | '-')) = first.next() {
					neg  = c == '-';
					lead = 1;
				}
			}
			Base::Hex     => {
				if first.next() == Some('0')
					&& matches!(first.next(), Some('x' | 'X'))
					&& first.next().is_some_and(|c| c.is_ascii_hexdigit())
				{
					lead = 2;
				}
			}
			Base::Octal   => {}
		}

		let body   = trimmed.get(lead..).unwrap_or_default();
		let digits = body.chars().take_while(|c| c.is_digit(u32::from(radix))).count();
		if digits == 0 {
			return Err(FormatError::NoDigits(self.position + skipped));
		}

		//	All the characters counted are ASCII, so the count is in bytes too
		let value      = accumulate::<BITS>(body.get(..digits).unwrap_or_default(), radix)?;
		self.position += skipped + lead + digits;
		Ok(if neg { -value } else { value })
	}

	//		remaining
	/// The part of the input that has not been consumed yet.
	#[must_use]
	pub fn remaining(&self) -> &'a str {
		self.input.get(self.position..).unwrap_or_default()
	}
}

//󰭅		LargeInt
impl<BITS> LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		from_str_radix
	/// Parses a literal in an explicit base.
	///
	/// The literal may start with `+` or `-`, and has no base prefix. Letters
	/// are accepted in either case.
	///
	/// # Parameters
	///
	/// * `s`     - The literal to parse.
	/// * `radix` - The base, from 2 to 36.
	///
	/// # Errors
	///
	/// Returns [`FormatError::InvalidDigit`] for the first character that is
	/// not a digit in the given base.
	///
	/// # Panics
	///
	/// Panics if `radix` is not in the range 2 to 36.
	///
	pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, FormatError> {
		assert!((2..=36).contains(&radix), "from_str_radix: radix must lie in the range `[2, 36]`");
		let radix = u8::try_from(radix).unwrap_or(36);
		if let Some(digits) = s.strip_prefix('-') {
			return Ok(-accumulate::<BITS>(digits, radix)?);
		}
		accumulate(s.strip_prefix('+').unwrap_or(s), radix)
	}

	//		parse
	/// Parses a literal, working out the base from its prefix.
	///
	/// This is the same as [`str::parse()`]. A leading `-` means a negative
	/// decimal number, a leading `0x` or `0X` means hexadecimal, any other
	/// leading `0` means octal, and anything else is decimal. An empty literal,
	/// or a prefix with no digits after it, gives zero.
	///
	/// # Parameters
	///
	/// * `s` - The literal to parse.
	///
	/// # Errors
	///
	/// Returns [`FormatError::InvalidDigit`] for the first character that is
	/// not a digit in the detected base.
	///
	pub fn parse(s: &str) -> Result<Self, FormatError> {
		s.parse()
	}
}

//󰭅		FromStr
impl<BITS> FromStr for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Err = FormatError;

	//		from_str
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(digits) = s.strip_prefix('-') {
			return Ok(-accumulate::<BITS>(digits, 10)?);
		}
		if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
			return accumulate(digits, 16);
		}
		if let Some(digits) = s.strip_prefix('0') {
			return accumulate(digits, 8);
		}
		accumulate(s, 10)
	}
}



//		Functions

//		accumulate
/// Builds a value from unsigned digits, as `value * radix + digit`.
///
/// An empty string gives zero.
///
fn accumulate<BITS>(digits: &str, radix: u8) -> Result<LargeInt<BITS>, FormatError>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	digits.chars().try_fold(LargeInt::<BITS>::zero(), |value, c| {
		let digit = c.to_digit(u32::from(radix)).ok_or(FormatError::InvalidDigit(c, radix))?;
		Ok(value * radix + digit)
	})
}
