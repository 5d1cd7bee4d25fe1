//! Double-width scalar arithmetic used by the multi-word algorithms.
//!
//! Every word-level step of the arithmetic core needs somewhere to hold more
//! than 64 bits: `word + word + carry` needs 65 bits, `word * word + carry`
//! needs 128, and long division by a scalar divides a 128-bit running value by
//! a 64-bit divisor. The [`DoubleWord`] trait describes that intermediate, and
//! there are two implementations of it:
//!
//!   - [`Native`] wraps [`u128`], which is what should be used wherever the
//!     compiler supports it natively.
//!   - [`Split`] composes the value from two [`u64`] halves, and only ever uses
//!     64-bit operations internally.
//!
//! The [`Dword`] alias picks one of the two at build time, using the
//! `split-dword` feature, and is the only name the arithmetic core uses.
//!

#![allow(clippy::arithmetic_side_effects, reason = "Word arithmetic is the whole point here")]



//		Modules

#[cfg(test)]
#[path = "tests/dword.rs"]
mod tests;



//		Type aliases

/// The double-width implementation selected for this build.
#[cfg(not(feature = "split-dword"))]
pub type Dword = Native;

/// The double-width implementation selected for this build.
#[cfg(feature = "split-dword")]
pub type Dword = Split;



//		Constants

/// Mask for the low half of a word.
const HALF_MASK: u64 = 0xFFFF_FFFF;



//		Traits

//		DoubleWord
/// A 128-bit-capable intermediate built from two 64-bit words.
///
/// None of the operations can overflow, provided their documented
/// preconditions are met.
///
pub trait DoubleWord: Copy {
	//		from_parts
	/// Creates a value from its high and low words, i.e. `(high << 64) | low`.
	fn from_parts(high: u64, low: u64) -> Self;

	//		high
	/// The most-significant 64 bits.
	fn high(self) -> u64;

	//		low
	/// The least-significant 64 bits.
	fn low(self) -> u64;

	//		add_carry
	/// Computes `a + b + carry`. The result needs at most 65 bits.
	fn add_carry(a: u64, b: u64, carry: u64) -> Self;

	//		mul_add
	/// Computes `a * b + carry`. The result needs at most 128 bits.
	fn mul_add(a: u64, b: u64, carry: u64) -> Self;

	//		div_rem
	/// Divides by a single word, returning the quotient and remainder words.
	///
	/// # Parameters
	///
	/// * `divisor` - The value to divide by. Must be greater than
	///               [`high()`](DoubleWord::high()), so that the quotient fits
	///               in one word, and therefore also non-zero.
	///
	fn div_rem(self, divisor: u64) -> (u64, u64);
}



//		Structs

//		Native
/// Double-width arithmetic backed by the native [`u128`] type.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Native(u128);

//󰭅		DoubleWord
impl DoubleWord for Native {
	//		from_parts
	fn from_parts(high: u64, low: u64) -> Self {
		Self((u128::from(high) << 64_u32) | u128::from(low))
	}

	//		high
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	fn high(self) -> u64 {
		(self.0 >> 64_u32) as u64
	}

	//		low
	#[expect(clippy::cast_possible_truncation, reason = "Truncation is intended")]
	fn low(self) -> u64 {
		self.0 as u64
	}

	//		add_carry
	fn add_carry(a: u64, b: u64, carry: u64) -> Self {
		Self(u128::from(a) + u128::from(b) + u128::from(carry))
	}

	//		mul_add
	fn mul_add(a: u64, b: u64, carry: u64) -> Self {
		Self(u128::from(a) * u128::from(b) + u128::from(carry))
	}

	//		div_rem
	#[expect(clippy::cast_possible_truncation, reason = "Quotient fits in one word by precondition")]
	#[expect(clippy::integer_division,        reason = "Integer division is intended")]
	fn div_rem(self, divisor: u64) -> (u64, u64) {
		let divisor = u128::from(divisor);
		((self.0 / divisor) as u64, (self.0 % divisor) as u64)
	}
}

//		Split
/// Double-width arithmetic composed of two [`u64`] halves.
///
/// This only uses 64-bit operations, for targets where 128-bit arithmetic is
/// unavailable or slow. Multiplication is built from 32-bit half products, and
/// division is a shift-subtract loop over the 64 quotient bits.
///
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Split {
	/// The most-significant word.
	high: u64,

	/// The least-significant word.
	low:  u64,
}

//󰭅		DoubleWord
impl DoubleWord for Split {
	//		from_parts
	fn from_parts(high: u64, low: u64) -> Self {
		Self { high, low }
	}

	//		high
	fn high(self) -> u64 {
		self.high
	}

	//		low
	fn low(self) -> u64 {
		self.low
	}

	//		add_carry
	fn add_carry(a: u64, b: u64, carry: u64) -> Self {
		let (sum1, c1) = a.overflowing_add(b);
		let (sum2, c2) = sum1.overflowing_add(carry);
		Self { high: u64::from(c1) + u64::from(c2), low: sum2 }
	}

	//		mul_add
	fn mul_add(a: u64, b: u64, carry: u64) -> Self {
		let (a_lo, a_hi) = (a & HALF_MASK, a >> 32_u32);
		let (b_lo, b_hi) = (b & HALF_MASK, b >> 32_u32);

		//	Each half product fits in a word
		let lo_lo = a_lo * b_lo;
		let lo_hi = a_lo * b_hi;
		let hi_lo = a_hi * b_lo;
		let hi_hi = a_hi * b_hi;

		//	At most three 32-bit quantities, so this cannot overflow
		let middle = (lo_lo >> 32_u32) + (lo_hi & HALF_MASK) + (hi_lo & HALF_MASK);
		let low    = (lo_lo & HALF_MASK) | (middle << 32_u32);
		let high   = hi_hi + (lo_hi >> 32_u32) + (hi_lo >> 32_u32) + (middle >> 32_u32);

		let (low, c) = low.overflowing_add(carry);
		Self { high: high + u64::from(c), low }
	}

	//		div_rem
	fn div_rem(self, divisor: u64) -> (u64, u64) {
		let mut rem      = self.high;
		let mut low      = self.low;
		let mut quotient = 0_u64;

		//	The remainder stays below the divisor, so after each shift the true
		//	value (including the bit shifted out) is below twice the divisor and
		//	one wrapping subtraction is enough.
		for _ in 0..64 {
			let overflow = rem >> 63_u32 == 1;
			rem          = (rem << 1_u32) | (low >> 63_u32);
			low        <<= 1_u32;
			quotient   <<= 1_u32;
			if overflow || rem >= divisor {
				rem       = rem.wrapping_sub(divisor);
				quotient |= 1;
			}
		}

		(quotient, rem)
	}
}
