//! Fixed-width multi-word integer type.

//	These lint checks are unnecessary in this module because:
//	  1. We're working with GenericArray where we know the size at compile time.
//	  2. All our indexing is based on the WORDS constant which is tied to the
//	     type's size.
//	  3. Using .get() would add unnecessary runtime checks and make the code
//	     more verbose with .unwrap()s.
#![allow(
	clippy::indexing_slicing,
	clippy::missing_asserts_for_indexing,
	reason = "We always know the size"
)]

//	Carries between words go through the double-width helper.
#![allow(clippy::arithmetic_side_effects, reason = "Fixed-width arithmetic wraps modulo 2^BITS")]
#![allow(clippy::integer_division,        reason = "Word and bit positions are integer quantities")]



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages

use crate::{
	dword::{DoubleWord, Dword},
	errors::ConversionError,
	quotient::Quotient,
};
use bytes::BytesMut;
use core::{
	cmp::Ordering,
	error::Error,
	fmt::{Debug, Formatter, self},
	hash::{Hash, Hasher},
	iter::{Product, Sum},
	marker::PhantomData,
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
};
use generic_array::{ArrayLength, GenericArray};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Error as JsonError;
use std::io::{Error as IoError, ErrorKind as IoErrorKind};
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};
use typenum::{Quot, U64, Unsigned};



//		Type aliases

/// Helper type to calculate the number of 64-bit words needed for a width.
pub type WordsFor<BITS> = Quot<BITS, U64>;



//		Structs

//		LargeInt
/// A fixed-width, two's-complement signed integer made of 64-bit words.
///
/// # Type parameters
///
/// * `BITS` - The number of bits used to represent the integer, as a
///            [`typenum`] unsigned type. It must be a non-zero multiple of 64,
///            which is checked at compile time when the type is used.
///
/// # Arithmetic
///
/// All arithmetic is modular, like the wrapping methods of the standard integer
/// types: any result that does not fit in `BITS` bits wraps modulo `2^BITS`,
/// silently, in both debug and release builds. This includes negating the
/// minimum value, which gives the minimum value back.
///
/// Division is truncating. The quotient rounds towards zero, and the remainder
/// has the sign of the dividend, matching `/` and `%` on the standard integer
/// types. Division or remainder by zero will panic, as with standard integer
/// types. The non-panicking [`checked_div()`](LargeInt::checked_div()),
/// [`checked_rem()`](LargeInt::checked_rem()), and
/// [`checked_div_rem()`](LargeInt::checked_div_rem()) methods are available for
/// callers that need to recover.
///
/// Right shifts are arithmetic, i.e. they replicate the sign bit, and so round
/// towards negative infinity. A zero-filling shift is available through
/// [`logical_shr()`](LargeInt::logical_shr()).
///
/// All operators also accept the native integer types up to 64 bits on either
/// side, e.g. `value * 10_u64` or `3_i32 - value`.
///
/// # Conversion
///
/// [`From`] is implemented for [`i8`], [`i16`], [`i32`], [`i64`], [`u8`],
/// [`u16`], [`u32`], and [`u64`], with sign-extension for the signed types and
/// zero-extension for the unsigned ones. Going the other way, [`TryFrom`]
/// checks the range, and the `as_*()` methods truncate to the
/// least-significant word like an `as` cast would.
///
/// # Internal representation
///
/// The value is stored as an array of `BITS / 64` words in big-endian word
/// order, i.e. the most-significant word first. Bit 63 of the first word is the
/// sign bit. Within the words, bits are numbered from the least-significant
/// end, so that bit 0 is the lowest bit of the last word, which is the
/// numbering used by [`bit()`](LargeInt::bit()) and
/// [`extract_bits()`](LargeInt::extract_bits()).
///
/// ```text
/// Value:     0x1_0000_0000_0000_0002 (as a 128-bit integer)
/// In memory: [0x0000_0000_0000_0001, 0x0000_0000_0000_0002]
///            word 0 (bits 64-127)    word 1 (bits 0-63)
/// ```
///
pub struct LargeInt<BITS>(GenericArray<u64, WordsFor<BITS>>)
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
;

//󰭅		LargeInt
impl<BITS> LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		Public constants
	/// Number of bits in the value.
	pub const BITS:  usize = BITS::USIZE;

	/// Number of 64-bit words used for storage.
	pub const WORDS: usize = <WordsFor<BITS> as Unsigned>::USIZE;

	//		Private constants
	/// Compile-time check that the width is made of whole words.
	const VALID_WIDTH: () = assert!(
		BITS::USIZE > 0 && BITS::USIZE % 64 == 0,
		"LargeInt width must be a non-zero multiple of 64 bits"
	);

	/// Index of the least-significant word.
	const LAST: usize = Self::WORDS - 1;

	//		Constructors

	//		from_words
	/// Creates a [`LargeInt`] from its raw words, most-significant first.
	///
	/// # Parameters
	///
	/// * `words` - The two's-complement words, with the most-significant word
	///             first.
	///
	#[must_use]
	pub fn from_words(words: GenericArray<u64, WordsFor<BITS>>) -> Self {
		let () = Self::VALID_WIDTH;
		Self(words)
	}

	//		from_be_words
	/// Creates a [`LargeInt`] from a slice of words, most-significant first.
	///
	/// # Parameters
	///
	/// * `words` - The two's-complement words, with the most-significant word
	///             first.
	///
	/// # Errors
	///
	/// Returns an error if the slice does not contain exactly
	/// [`WORDS`](Self::WORDS) words.
	///
	pub fn from_be_words(words: &[u64]) -> Result<Self, ConversionError> {
		if words.len() != Self::WORDS {
			return Err(ConversionError::InvalidWordCount { expected: Self::WORDS, actual: words.len() });
		}
		let mut result = Self::zero();
		result.0.copy_from_slice(words);
		Ok(result)
	}

	//		from_be_bytes
	/// Creates a [`LargeInt`] from big-endian bytes.
	///
	/// # Parameters
	///
	/// * `bytes` - The two's-complement bytes, most-significant first. There
	///             must be exactly `BITS / 8` of them.
	///
	/// # Errors
	///
	/// Returns an error if the byte slice is not the correct length.
	///
	pub fn from_be_bytes(bytes: &[u8]) -> Result<Self, ConversionError> {
		let expected = Self::WORDS * 8;
		if bytes.len() != expected {
			return Err(ConversionError::InvalidLength { expected, actual: bytes.len() });
		}

		let mut result = Self::zero();
		for (word, chunk) in result.0.iter_mut().zip(bytes.chunks_exact(8)) {
			let array = <[u8; 8]>::try_from(chunk)
				.map_err(|_| ConversionError::InvalidLength { expected, actual: bytes.len() })?
			;
			*word = u64::from_be_bytes(array);
		}
		Ok(result)
	}

	//		from_json
	/// Deserialises a JSON string into this integer type.
	///
	/// # Parameters
	///
	/// * `json` - The JSON string to deserialise.
	///
	/// # Errors
	///
	/// If the JSON string is invalid, or the number inside the JSON is invalid,
	/// then an error will be returned.
	///
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}

	//		max_value
	/// The maximum value, `2^(BITS-1) - 1`.
	#[must_use]
	pub fn max_value() -> Self {
		!Self::min_value()
	}

	//		min_value
	/// The minimum value, `-2^(BITS-1)`.
	#[must_use]
	pub fn min_value() -> Self {
		let mut result = Self::zero();
		result.0[0]    = 1 << 63_u32;
		result
	}

	//		one
	/// The value of `1` as a [`LargeInt`].
	#[must_use]
	pub fn one() -> Self {
		let mut result         = Self::zero();
		result.0[Self::LAST]   = 1;
		result
	}

	//		zero
	/// The value of `0` as a [`LargeInt`].
	#[must_use]
	pub fn zero() -> Self {
		let () = Self::VALID_WIDTH;
		Self(GenericArray::default())
	}

	//		Public methods

	//		abs
	/// The absolute value.
	///
	/// The minimum value has no positive counterpart, and is returned as-is.
	///
	#[must_use]
	pub fn abs(self) -> Self {
		self.sign_magnitude().1
	}

	//		as_words
	/// The raw two's-complement words, most-significant first.
	#[must_use]
	pub const fn as_words(&self) -> &GenericArray<u64, WordsFor<BITS>> {
		&self.0
	}

	//		bit
	/// Gets the value of a specific bit.
	///
	/// Returns `false` if the position is out of range.
	///
	/// # Parameters
	///
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	///
	#[must_use]
	pub fn bit(self, pos: usize) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		(self.0[Self::LAST - pos / 64] >> (pos % 64)) & 1 == 1
	}

	//		checked_div
	/// Checked division.
	///
	/// Computes `self / rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div(self, rhs: Self) -> Option<Self> {
		self.checked_div_rem(rhs).map(Quotient::into_inner)
	}

	//		checked_div_rem
	/// Checked division with remainder.
	///
	/// Computes `self / rhs` with the remainder attached, returning [`None`] if
	/// `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_div_rem(self, rhs: Self) -> Option<Quotient<BITS>> {
		if rhs.is_zero() {
			return None;
		}
		let (lhs_negative, dividend) = self.sign_magnitude();
		let (rhs_negative, divisor)  =  rhs.sign_magnitude();
		let (quotient, remainder)    = dividend.div_rem_magnitude(divisor);
		Some(Quotient::new(
			quotient.negate_if(lhs_negative != rhs_negative),
			remainder.negate_if(lhs_negative),
		))
	}

	//		checked_rem
	/// Checked remainder.
	///
	/// Computes `self % rhs`, returning [`None`] if `rhs` is zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	#[must_use]
	pub fn checked_rem(self, rhs: Self) -> Option<Self> {
		self.checked_div_rem(rhs).and_then(|quotient| quotient.remainder())
	}

	//		count_ones
	/// Counts the number of ones in the binary representation of the value.
	#[must_use]
	pub fn count_ones(self) -> u32 {
		self.0.iter().map(|word| word.count_ones()).sum()
	}

	//		count_zeros
	/// Counts the number of zeroes in the binary representation of the value.
	#[must_use]
	pub fn count_zeros(self) -> u32 {
		self.0.iter().map(|word| word.count_zeros()).sum()
	}

	//		div_rem
	/// Division that keeps the remainder.
	///
	/// The result dereferences to the quotient, and carries the remainder,
	/// which has the sign of the dividend.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to divide `self` by.
	///
	/// # Panics
	///
	/// Panics if `rhs` is zero.
	///
	#[must_use]
	pub fn div_rem(self, rhs: Self) -> Quotient<BITS> {
		assert!(rhs.is_non_zero(), "Attempt to divide by zero");
		self.checked_div_rem(rhs).unwrap_or_else(|| Quotient::from(Self::zero()))
	}

	//		div_rem_word
	/// Divides by a single signed word, keeping the remainder.
	///
	/// This is the fast path for native divisors: the words are processed
	/// most-significant first, carrying a double-width running remainder.
	///
	/// # Parameters
	///
	/// * `negative`  - Whether the divisor is negative.
	/// * `magnitude` - The absolute value of the divisor.
	///
	/// # Panics
	///
	/// Panics if `magnitude` is zero.
	///
	#[must_use]
	pub fn div_rem_word(self, negative: bool, magnitude: u64) -> Quotient<BITS> {
		assert!(magnitude != 0, "Attempt to divide by zero");
		let (lhs_negative, dividend) = self.sign_magnitude();
		let (quotient, remainder)    = dividend.div_rem_unsigned_word(magnitude);
		Quotient::new(
			quotient.negate_if(lhs_negative != negative),
			Self::from(remainder).negate_if(lhs_negative),
		)
	}

	//		extract_bits
	/// Extracts up to 64 consecutive bits as a word.
	///
	/// The group may span a word boundary. Bits past the width read as zero.
	///
	/// # Parameters
	///
	/// * `start` - The position of the lowest bit of the group, where `0` is
	///             the least-significant bit.
	/// * `len`   - The number of bits to extract. Values above 64 are treated
	///             as 64.
	///
	#[must_use]
	pub fn extract_bits(self, start: usize, len: u32) -> u64 {
		if len == 0 || start >= Self::BITS {
			return 0;
		}
		let index     = Self::LAST - start / 64;
		let offset    = start % 64;
		let mut value = self.0[index] >> offset;
		if offset > 0 && index > 0 {
			value |= self.0[index - 1] << (64 - offset);
		}
		if len < 64 { value & ((1_u64 << len) - 1) } else { value }
	}

	//		into_words
	/// Consumes the value, returning the raw words, most-significant first.
	#[must_use]
	pub fn into_words(self) -> GenericArray<u64, WordsFor<BITS>> {
		self.0
	}

	//		is_negative
	/// Determines if the value is negative, i.e. if the sign bit is set.
	#[must_use]
	pub fn is_negative(self) -> bool {
		self.0[0] >> 63_u32 == 1
	}

	//		is_non_zero
	/// Determines if any bit of the value is set.
	#[must_use]
	pub fn is_non_zero(self) -> bool {
		self.0.iter().any(|&word| word != 0)
	}

	//		is_zero
	/// Determines if the value is zero.
	#[must_use]
	pub fn is_zero(self) -> bool {
		!self.is_non_zero()
	}

	//		leading_zeros
	/// Counts the number of leading zeroes in the binary representation of the
	/// value.
	///
	/// If the value is zero, the result is the number of bits in the value.
	///
	#[must_use]
	pub fn leading_zeros(self) -> usize {
		let mut count = 0;
		for &word in &self.0 {
			count += word.leading_zeros() as usize;
			if word != 0 {
				break;
			}
		}
		count
	}

	//		logical_shr
	/// Logical right shift, filling the vacated high bits with zeroes.
	///
	/// Shifting by [`BITS`](Self::BITS) or more gives zero.
	///
	/// # Parameters
	///
	/// * `rhs` - The number of bits to shift by.
	///
	#[must_use]
	pub fn logical_shr(self, rhs: u32) -> Self {
		self.shift_right(rhs, 0)
	}

	//		post_decrement
	/// Subtracts one in place, returning the value from before the change.
	pub fn post_decrement(&mut self) -> Self {
		let previous = *self;
		*self        = self.wrapping_sub(Self::one());
		previous
	}

	//		post_increment
	/// Adds one in place, returning the value from before the change.
	pub fn post_increment(&mut self) -> Self {
		let previous = *self;
		*self        = self.wrapping_add(Self::one());
		previous
	}

	//		pow
	/// Raises the value to a power, wrapping on overflow.
	///
	/// # Parameters
	///
	/// * `exp` - The exponent.
	///
	#[must_use]
	pub fn pow(self, mut exp: u32) -> Self {
		let mut base   = self;
		let mut result = Self::one();
		while exp > 0 {
			if exp & 1 == 1 {
				result = result.wrapping_mul(base);
			}
			exp >>= 1_u32;
			if exp > 0 {
				base = base.wrapping_mul(base);
			}
		}
		result
	}

	//		pre_decrement
	/// Subtracts one in place, returning the new value.
	pub fn pre_decrement(&mut self) -> Self {
		*self = self.wrapping_sub(Self::one());
		*self
	}

	//		pre_increment
	/// Adds one in place, returning the new value.
	pub fn pre_increment(&mut self) -> Self {
		*self = self.wrapping_add(Self::one());
		*self
	}

	//		set_bit
	/// Sets the value of a specific bit.
	///
	/// Positions out of range are ignored, and return `false`.
	///
	/// # Parameters
	///
	/// * `pos`   - The position of the bit to set, where `0` is the
	///             least-significant bit.
	/// * `value` - The value to set the bit to.
	///
	pub fn set_bit(&mut self, pos: usize, value: bool) -> bool {
		if pos >= Self::BITS {
			return false;
		}
		let index = Self::LAST - pos / 64;
		let mask  = 1_u64 << (pos % 64);
		if value {
			self.0[index] |= mask;
		} else {
			self.0[index] &= !mask;
		}
		true
	}

	//		signum
	/// Returns `-1`, `0`, or `1` according to the sign of the value.
	#[must_use]
	pub fn signum(self) -> Self {
		if self.is_negative() {
			-Self::one()
		} else if self.is_zero() {
			Self::zero()
		} else {
			Self::one()
		}
	}

	//		to_be_bytes
	/// Returns the two's-complement bytes in big-endian order.
	#[must_use]
	pub fn to_be_bytes(&self) -> Vec<u8> {
		self.0.iter().flat_map(|word| word.to_be_bytes()).collect()
	}

	//		to_json
	/// Serialises this integer type to a JSON string.
	///
	/// # Errors
	///
	/// If the value cannot be serialised, an error will be returned.
	///
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}

	//		trailing_zeros
	/// Counts the number of trailing zeroes in the binary representation of
	/// the value.
	///
	/// If the value is zero, the result is the number of bits in the value.
	///
	#[must_use]
	pub fn trailing_zeros(self) -> usize {
		let mut count = 0;
		for &word in self.0.iter().rev() {
			count += word.trailing_zeros() as usize;
			if word != 0 {
				break;
			}
		}
		count
	}

	//		wrapping_add
	/// Wrapping addition.
	///
	/// The words are added from least to most significant, carrying through
	/// a double-width intermediate. The carry out of the top word is dropped.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to add to `self`.
	///
	#[must_use]
	pub fn wrapping_add(self, rhs: Self) -> Self {
		let mut result = Self::zero();
		let mut carry  = 0_u64;
		for k in (0..Self::WORDS).rev() {
			let sum     = Dword::add_carry(self.0[k], rhs.0[k], carry);
			result.0[k] = sum.low();
			carry       = sum.high();
		}
		result
	}

	//		wrapping_mul
	/// Wrapping multiplication.
	///
	/// Both operands are reduced to their magnitudes, multiplied as unsigned
	/// values with one word-by-value product per word of `self`, and the sign
	/// restored at the end.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn wrapping_mul(self, rhs: Self) -> Self {
		let (lhs_negative, lhs) = self.sign_magnitude();
		let (rhs_negative, rhs) =  rhs.sign_magnitude();
		let mut result          = Self::zero();
		for (k, &word) in lhs.0.iter().enumerate() {
			if word != 0 {
				result = result.wrapping_add(rhs.mul_unsigned_word(word).shl_words(Self::LAST - k));
			}
		}
		result.negate_if(lhs_negative != rhs_negative)
	}

	//		wrapping_mul_word
	/// Multiplies by a single signed word, wrapping on overflow.
	///
	/// # Parameters
	///
	/// * `negative`  - Whether the multiplier is negative.
	/// * `magnitude` - The absolute value of the multiplier.
	///
	#[must_use]
	pub fn wrapping_mul_word(self, negative: bool, magnitude: u64) -> Self {
		let (lhs_negative, lhs) = self.sign_magnitude();
		lhs.mul_unsigned_word(magnitude).negate_if(lhs_negative != negative)
	}

	//		wrapping_neg
	/// Two's-complement negation: every word is inverted and then one is added,
	/// carrying up from the least-significant word.
	#[must_use]
	pub fn wrapping_neg(self) -> Self {
		let mut result = Self::zero();
		let mut carry  = 1_u64;
		for k in (0..Self::WORDS).rev() {
			let sum     = Dword::add_carry(!self.0[k], 0, carry);
			result.0[k] = sum.low();
			carry       = sum.high();
		}
		result
	}

	//		wrapping_sub
	/// Wrapping subtraction, as the addition of the negated `rhs`.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to subtract from `self`.
	///
	#[must_use]
	pub fn wrapping_sub(self, rhs: Self) -> Self {
		self.wrapping_add(rhs.wrapping_neg())
	}

	//		Private methods

	//		cmp_unsigned
	/// Compares the raw bit patterns as unsigned numbers.
	fn cmp_unsigned(&self, other: &Self) -> Ordering {
		self.0.iter().cmp(other.0.iter())
	}

	//		div_rem_magnitude
	/// Restoring binary long division of two unsigned magnitudes.
	///
	/// The divisor must be non-zero. Neither magnitude exceeds `2^(BITS-1)`, so
	/// the running remainder never loses its top bit when shifted.
	///
	fn div_rem_magnitude(self, divisor: Self) -> (Self, Self) {
		let mut quotient  = Self::zero();
		let mut remainder = Self::zero();
		for pos in (0..Self::BITS - self.leading_zeros()).rev() {
			remainder                = remainder << 1_u32;
			remainder.0[Self::LAST] |= u64::from(self.bit(pos));
			if remainder.cmp_unsigned(&divisor) != Ordering::Less {
				remainder = remainder.wrapping_sub(divisor);
				_         = quotient.set_bit(pos, true);
			}
		}
		(quotient, remainder)
	}

	//		div_rem_unsigned_word
	/// Divides an unsigned magnitude by a non-zero word.
	pub(crate) fn div_rem_unsigned_word(self, divisor: u64) -> (Self, u64) {
		let mut quotient  = Self::zero();
		let mut remainder = 0_u64;
		for (k, &word) in self.0.iter().enumerate() {
			let (digit, rest) = Dword::from_parts(remainder, word).div_rem(divisor);
			quotient.0[k]     = digit;
			remainder         = rest;
		}
		(quotient, remainder)
	}

	//		mul_unsigned_word
	/// Multiplies an unsigned magnitude by a word, dropping the overflow.
	fn mul_unsigned_word(self, rhs: u64) -> Self {
		let mut result = Self::zero();
		let mut carry  = 0_u64;
		for k in (0..Self::WORDS).rev() {
			let product = Dword::mul_add(self.0[k], rhs, carry);
			result.0[k] = product.low();
			carry       = product.high();
		}
		result
	}

	//		negate_if
	/// Negates the value when the condition holds.
	fn negate_if(self, condition: bool) -> Self {
		if condition { self.wrapping_neg() } else { self }
	}

	//		shift_right
	/// Right shift, filling the vacated high bits from `fill`.
	fn shift_right(self, rhs: u32, fill: u64) -> Self {
		let shift = usize::try_from(rhs).unwrap_or(usize::MAX);
		if shift >= Self::BITS {
			let mut result = Self::zero();
			result.0.iter_mut().for_each(|word| *word = fill);
			return result;
		}

		let words      = shift / 64;
		let bits       = shift % 64;
		let mut result = Self::zero();
		for k in 0..Self::WORDS {
			result.0[k] = if k >= words { self.0[k - words] } else { fill };
		}

		//	Walking up from the least-significant word means each word still
		//	holds its pre-shift bits when its lower neighbour reads them
		if bits > 0 {
			for k in (0..Self::WORDS).rev() {
				let incoming = if k > 0 { result.0[k - 1] } else { fill };
				result.0[k]  = (result.0[k] >> bits) | (incoming << (64 - bits));
			}
		}
		result
	}

	//		shl_words
	/// Shifts whole words towards the most-significant end.
	fn shl_words(self, words: usize) -> Self {
		let mut result = Self::zero();
		for k in 0..Self::WORDS.saturating_sub(words) {
			result.0[k] = self.0[k + words];
		}
		result
	}

	//		sign_magnitude
	/// Splits the value into its sign and its magnitude.
	///
	/// The magnitude is to be read as unsigned, which is what makes it exact
	/// for the minimum value too.
	///
	pub(crate) fn sign_magnitude(self) -> (bool, Self) {
		let negative = self.is_negative();
		(negative, self.negate_if(negative))
	}
}

//󰭅		Add
impl<BITS> Add for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		add
	fn add(self, rhs: Self) -> Self::Output {
		self.wrapping_add(rhs)
	}
}

//󰭅		AddAssign
impl<BITS> AddAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		add_assign
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}

//󰭅		BitAnd
impl<BITS> BitAnd for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		bitand
	fn bitand(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result.0.iter_mut().zip(rhs.0.iter()).for_each(|(word, &other)| *word &= other);
		result
	}
}

//󰭅		BitAndAssign
impl<BITS> BitAndAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		bitand_assign
	fn bitand_assign(&mut self, rhs: Self) {
		*self = *self & rhs;
	}
}

//󰭅		BitOr
impl<BITS> BitOr for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		bitor
	fn bitor(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result.0.iter_mut().zip(rhs.0.iter()).for_each(|(word, &other)| *word |= other);
		result
	}
}

//󰭅		BitOrAssign
impl<BITS> BitOrAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		bitor_assign
	fn bitor_assign(&mut self, rhs: Self) {
		*self = *self | rhs;
	}
}

//󰭅		BitXor
impl<BITS> BitXor for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		bitxor
	fn bitxor(self, rhs: Self) -> Self::Output {
		let mut result = self;
		result.0.iter_mut().zip(rhs.0.iter()).for_each(|(word, &other)| *word ^= other);
		result
	}
}

//󰭅		BitXorAssign
impl<BITS> BitXorAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		bitxor_assign
	fn bitxor_assign(&mut self, rhs: Self) {
		*self = *self ^ rhs;
	}
}

//󰭅		Clone
impl<BITS> Clone for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		clone
	fn clone(&self) -> Self {
		*self
	}
}

//󰭅		Copy
impl<BITS> Copy for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{}

//󰭅		Debug
impl<BITS> Debug for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Standard format - LargeInt::<bits>(value)
		write!(f, "LargeInt::<{}>({})", Self::BITS, self)?;

		//	For alternate formatting (#), show the raw words
		if f.alternate() {
			write!(f, " [")?;
			for (i, word) in self.0.iter().enumerate() {
				if i > 0 {
					write!(f, ", ")?;
				}
				write!(f, "0x{word:016x}")?;
			}
			write!(f, "]")?;
		}

		Ok(())
	}
}

//󰭅		Default
impl<BITS> Default for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		default
	fn default() -> Self {
		Self::zero()
	}
}

//󰭅		Deserialize
impl<'de, BITS> Deserialize<'de> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	If the format is human-readable, accept both numbers and strings
			deserializer.deserialize_any(IntVisitor::<BITS>(PhantomData))
		} else {
			//	For binary formats, expect raw bytes
			deserializer.deserialize_bytes(IntVisitor::<BITS>(PhantomData))
		}
	}
}

//󰭅		Div
impl<BITS> Div for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		div
	fn div(self, rhs: Self) -> Self::Output {
		self.div_rem(rhs).into_inner()
	}
}

//󰭅		DivAssign
impl<BITS> DivAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		div_assign
	fn div_assign(&mut self, rhs: Self) {
		*self = *self / rhs;
	}
}

//󰭅		Eq
impl<BITS> Eq for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{}

//󰭅		FromSql
/// `TEXT` columns are read with the same literal grammar as [`str::parse()`],
/// so `"0x10"` reads as 16 and `"010"` as octal 8. Values written by
/// [`ToSql`] are plain decimal and always read back unchanged.
impl<'a, BITS> FromSql<'a> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		from_sql
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => Ok(Self::from(i16::from_sql(ty, raw)?)),
			&Type::INT4 => Ok(Self::from(i32::from_sql(ty, raw)?)),
			&Type::INT8 => Ok(Self::from(i64::from_sql(ty, raw)?)),
			&Type::TEXT => Ok(
				String::from_utf8(raw.to_vec()).map_err(Box::new)?.parse::<Self>().map_err(Box::new)?
			),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for LargeInt<{}>: {}", Self::BITS, unknown),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}
}

//󰭅		Hash
impl<BITS> Hash for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		hash
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

//󰭅		Mul
impl<BITS> Mul for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		mul
	fn mul(self, rhs: Self) -> Self::Output {
		self.wrapping_mul(rhs)
	}
}

//󰭅		MulAssign
impl<BITS> MulAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		mul_assign
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

//󰭅		Neg
impl<BITS> Neg for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		neg
	fn neg(self) -> Self::Output {
		self.wrapping_neg()
	}
}

//󰭅		Not
impl<BITS> Not for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		not
	fn not(self) -> Self::Output {
		let mut result = self;
		result.0.iter_mut().for_each(|word| *word = !*word);
		result
	}
}

//󰭅		Ord
impl<BITS> Ord for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		cmp
	fn cmp(&self, other: &Self) -> Ordering {
		//	Values of the same sign order the same way as their bit patterns
		match (self.is_negative(), other.is_negative()) {
			(true,  false) => Ordering::Less,
			(false, true)  => Ordering::Greater,
			_              => self.cmp_unsigned(other),
		}
	}
}

//󰭅		PartialEq
impl<BITS> PartialEq for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		eq
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

//󰭅		PartialOrd
impl<BITS> PartialOrd for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		partial_cmp
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		Product
impl<BITS> Product for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::one(), |acc, x| acc * x)
	}
}

//󰭅		Product<&>
impl<'a, BITS> Product<&'a Self> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		product
	fn product<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::one(), |acc, &x| acc * x)
	}
}

//󰭅		Rem
impl<BITS> Rem for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		rem
	fn rem(self, rhs: Self) -> Self::Output {
		assert!(rhs.is_non_zero(), "Attempt to calculate remainder with a divisor of zero");
		self.checked_rem(rhs).unwrap_or_else(Self::zero)
	}
}

//󰭅		RemAssign
impl<BITS> RemAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		rem_assign
	fn rem_assign(&mut self, rhs: Self) {
		*self = *self % rhs;
	}
}

//󰭅		Serialize
impl<BITS> Serialize for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		serialize
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			//	A single word is an i64, which every format can represent
			if Self::BITS == 64 {
				return serializer.serialize_i64(self.as_i64());
			}
			//	Fall back to string for larger numbers
			serializer.serialize_str(&self.to_string())
		} else {
			//	For binary formats, serialise raw bytes
			serializer.serialize_bytes(&self.to_be_bytes())
		}
	}
}

//󰭅		Shl
impl<BITS> Shl<u32> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		shl
	fn shl(self, rhs: u32) -> Self::Output {
		let shift = usize::try_from(rhs).unwrap_or(usize::MAX);
		if shift >= Self::BITS {
			return Self::zero();
		}

		let bits       = shift % 64;
		let mut result = self.shl_words(shift / 64);

		//	Walking down from the most-significant word means each word still
		//	holds its pre-shift bits when its upper neighbour reads them
		if bits > 0 {
			for k in 0..Self::WORDS {
				let incoming = if k < Self::LAST { result.0[k + 1] >> (64 - bits) } else { 0 };
				result.0[k]  = (result.0[k] << bits) | incoming;
			}
		}
		result
	}
}

//󰭅		ShlAssign
impl<BITS> ShlAssign<u32> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		shl_assign
	fn shl_assign(&mut self, rhs: u32) {
		*self = *self << rhs;
	}
}

//󰭅		Shr
impl<BITS> Shr<u32> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		shr
	fn shr(self, rhs: u32) -> Self::Output {
		let fill = if self.is_negative() { u64::MAX } else { 0 };
		self.shift_right(rhs, fill)
	}
}

//󰭅		ShrAssign
impl<BITS> ShrAssign<u32> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		shr_assign
	fn shr_assign(&mut self, rhs: u32) {
		*self = *self >> rhs;
	}
}

//󰭅		Sub
impl<BITS> Sub for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Output = Self;

	//		sub
	fn sub(self, rhs: Self) -> Self::Output {
		self.wrapping_sub(rhs)
	}
}

//󰭅		SubAssign
impl<BITS> SubAssign for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		sub_assign
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}

//󰭅		Sum
impl<BITS> Sum for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::zero(), |acc, x| acc + x)
	}
}

//󰭅		Sum<&>
impl<'a, BITS> Sum<&'a Self> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		sum
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::zero(), |acc, &x| acc + x)
	}
}

//󰭅		ToSql
impl<BITS> ToSql for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		to_sql
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		match ty {
			&Type::INT2 => i16::try_from(*self)?.to_sql(ty, out),
			&Type::INT4 => i32::try_from(*self)?.to_sql(ty, out),
			&Type::INT8 => i64::try_from(*self)?.to_sql(ty, out),
			&Type::TEXT => self.to_string().to_sql(ty, out),
			unknown     => Err(Box::new(IoError::new(
				IoErrorKind::InvalidData,
				format!("Invalid type for LargeInt<{}>: {}", Self::BITS, unknown),
			))),
		}
	}

	//		accepts
	fn accepts(ty: &Type) -> bool {
		matches!(*ty, Type::INT2 | Type::INT4 | Type::INT8 | Type::TEXT)
	}

	to_sql_checked!();
}

//		IntVisitor
/// A visitor for deserialising integers from numbers, strings, or bytes.
struct IntVisitor<BITS>(PhantomData<BITS>);

//󰭅		Visitor
impl<BITS> Visitor<'_> for IntVisitor<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Value = LargeInt<BITS>;

	//		expecting
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer literal or {} big-endian bytes", LargeInt::<BITS>::WORDS * 8)
	}

	//		visit_i64
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::from(v))
	}

	//		visit_u64
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(LargeInt::from(v))
	}

	//		visit_str
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}

	//		visit_bytes
	fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		LargeInt::from_be_bytes(v).map_err(|_| E::invalid_length(v.len(), &self))
	}
}
