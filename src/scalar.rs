//! Interoperability between [`LargeInt`] and the native integer types.
//!
//! Every native integer type up to 64 bits wide converts into a [`LargeInt`],
//! and can be used on either side of its operators. Multiplication, division,
//! and remainder with the native type on the right take a single-word fast
//! path. Everything else widens the native value first.
//!

#![allow(clippy::arithmetic_side_effects, reason = "Operators delegate to the wrapping implementations")]



//		Modules

#[cfg(test)]
#[path = "tests/scalar.rs"]
mod tests;



//		Packages

use crate::{
	errors::ConversionError,
	int::{LargeInt, WordsFor},
	quotient::Quotient,
};
use core::{
	cmp::Ordering,
	ops::{Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign},
	ops::{Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign},
};
use generic_array::{ArrayLength, GenericArray};
use typenum::{U64, Unsigned};



//		Traits

//		Scalar
/// A native integer that can be used as a single-word operand.
///
/// This is implemented for [`i8`], [`i16`], [`i32`], [`i64`], [`u8`], [`u16`],
/// [`u32`], and [`u64`].
///
pub trait Scalar: Copy {
	//		sign_and_magnitude
	/// Splits the value into whether it is negative, and its absolute value.
	fn sign_and_magnitude(self) -> (bool, u64);
}



//		Macros

/// Implements a widening operator between [`LargeInt`] and a native type, in
/// both directions, plus the compound assignment form.
macro_rules! impl_widening_op {
	($t:ty, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
		//󰭅		Op<native> for LargeInt
		impl<BITS> $op<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = Self;

			fn $method(self, rhs: $t) -> Self::Output {
				<Self as $op>::$method(self, Self::from(rhs))
			}
		}

		//󰭅		Op<LargeInt> for native
		impl<BITS> $op<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = LargeInt<BITS>;

			fn $method(self, rhs: LargeInt<BITS>) -> Self::Output {
				<LargeInt<BITS> as $op>::$method(LargeInt::<BITS>::from(self), rhs)
			}
		}

		//󰭅		OpAssign<native> for LargeInt
		impl<BITS> $op_assign<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn $method_assign(&mut self, rhs: $t) {
				*self = <Self as $op<$t>>::$method(*self, rhs);
			}
		}
	};
}

/// Implements [`Scalar`], conversions, and the mixed-operand operators for a
/// native integer type.
macro_rules! impl_scalar {
	(@sign $t:ty, signed) => {
		//󰭅		Scalar
		impl Scalar for $t {
			#[allow(clippy::useless_conversion, reason = "Not useless for the narrower types")]
			fn sign_and_magnitude(self) -> (bool, u64) {
				let value = i64::from(self);
				(value < 0, value.unsigned_abs())
			}
		}
	};

	(@sign $t:ty, unsigned) => {
		//󰭅		Scalar
		impl Scalar for $t {
			#[allow(clippy::useless_conversion, reason = "Not useless for the narrower types")]
			fn sign_and_magnitude(self) -> (bool, u64) {
				(false, u64::from(self))
			}
		}
	};

	(@narrow $t:ty, signed, $value:ident) => {{
		let word = $value.as_i64();
		if LargeInt::<BITS>::from(word) != $value {
			return Err(ConversionError::ValueTooLarge);
		}
		<$t>::try_from(word).map_err(|_| ConversionError::ValueTooLarge)
	}};

	(@narrow $t:ty, unsigned, $value:ident) => {{
		if $value.is_negative() {
			return Err(ConversionError::ValueIsNegative);
		}
		let word = $value.as_u64();
		if LargeInt::<BITS>::from(word) != $value {
			return Err(ConversionError::ValueTooLarge);
		}
		<$t>::try_from(word).map_err(|_| ConversionError::ValueTooLarge)
	}};

	($t:ty, $signed:tt) => {
		impl_scalar!(@sign $t, $signed);

		//󰭅		From<native>
		impl<BITS> From<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn from(value: $t) -> Self {
				let (negative, magnitude) = value.sign_and_magnitude();
				let mut words             = GenericArray::<u64, WordsFor<BITS>>::default();
				if let Some(last) = words.last_mut() {
					*last = magnitude;
				}
				let result = Self::from_words(words);
				if negative { result.wrapping_neg() } else { result }
			}
		}

		//󰭅		TryFrom<LargeInt>
		impl<BITS> TryFrom<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Error = ConversionError;

			#[allow(clippy::useless_conversion, reason = "Not useless for the narrower types")]
			fn try_from(value: LargeInt<BITS>) -> Result<Self, Self::Error> {
				impl_scalar!(@narrow $t, $signed, value)
			}
		}

		impl_widening_op!($t, Add,    add,    AddAssign,    add_assign);
		impl_widening_op!($t, Sub,    sub,    SubAssign,    sub_assign);
		impl_widening_op!($t, BitAnd, bitand, BitAndAssign, bitand_assign);
		impl_widening_op!($t, BitOr,  bitor,  BitOrAssign,  bitor_assign);
		impl_widening_op!($t, BitXor, bitxor, BitXorAssign, bitxor_assign);

		//󰭅		Mul<native> for LargeInt
		impl<BITS> Mul<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = Self;

			fn mul(self, rhs: $t) -> Self::Output {
				self.mul_scalar(rhs)
			}
		}

		//󰭅		Mul<LargeInt> for native
		impl<BITS> Mul<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = LargeInt<BITS>;

			fn mul(self, rhs: LargeInt<BITS>) -> Self::Output {
				rhs.mul_scalar(self)
			}
		}

		//󰭅		MulAssign<native>
		impl<BITS> MulAssign<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn mul_assign(&mut self, rhs: $t) {
				*self = self.mul_scalar(rhs);
			}
		}

		//󰭅		Div<native> for LargeInt
		impl<BITS> Div<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = Self;

			fn div(self, rhs: $t) -> Self::Output {
				self.div_rem_scalar(rhs).into_inner()
			}
		}

		//󰭅		Div<LargeInt> for native
		impl<BITS> Div<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = LargeInt<BITS>;

			fn div(self, rhs: LargeInt<BITS>) -> Self::Output {
				LargeInt::<BITS>::from(self) / rhs
			}
		}

		//󰭅		DivAssign<native>
		impl<BITS> DivAssign<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn div_assign(&mut self, rhs: $t) {
				*self = *self / rhs;
			}
		}

		//󰭅		Rem<native> for LargeInt
		impl<BITS> Rem<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = Self;

			fn rem(self, rhs: $t) -> Self::Output {
				let (negative, magnitude) = rhs.sign_and_magnitude();
				assert!(magnitude != 0, "Attempt to calculate remainder with a divisor of zero");
				self.div_rem_word(negative, magnitude).remainder().unwrap_or_default()
			}
		}

		//󰭅		Rem<LargeInt> for native
		impl<BITS> Rem<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			type Output = LargeInt<BITS>;

			fn rem(self, rhs: LargeInt<BITS>) -> Self::Output {
				LargeInt::<BITS>::from(self) % rhs
			}
		}

		//󰭅		RemAssign<native>
		impl<BITS> RemAssign<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn rem_assign(&mut self, rhs: $t) {
				*self = *self % rhs;
			}
		}

		//󰭅		PartialEq<native> for LargeInt
		impl<BITS> PartialEq<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn eq(&self, other: &$t) -> bool {
				*self == Self::from(*other)
			}
		}

		//󰭅		PartialEq<LargeInt> for native
		impl<BITS> PartialEq<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn eq(&self, other: &LargeInt<BITS>) -> bool {
				LargeInt::<BITS>::from(*self) == *other
			}
		}

		//󰭅		PartialOrd<native> for LargeInt
		impl<BITS> PartialOrd<$t> for LargeInt<BITS>
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(self.cmp(&Self::from(*other)))
			}
		}

		//󰭅		PartialOrd<LargeInt> for native
		impl<BITS> PartialOrd<LargeInt<BITS>> for $t
		where
			BITS:                              Unsigned + Div<U64>,
			WordsFor<BITS>:                    ArrayLength,
			GenericArray<u64, WordsFor<BITS>>: Copy,
		{
			fn partial_cmp(&self, other: &LargeInt<BITS>) -> Option<Ordering> {
				Some(LargeInt::<BITS>::from(*self).cmp(other))
			}
		}
	};
}

impl_scalar!(i8,  signed);
impl_scalar!(i16, signed);
impl_scalar!(i32, signed);
impl_scalar!(i64, signed);
impl_scalar!(u8,  unsigned);
impl_scalar!(u16, unsigned);
impl_scalar!(u32, unsigned);
impl_scalar!(u64, unsigned);

/// Generates the truncating `as_*()` conversions.
macro_rules! impl_as_native {
	($($name:ident => $t:ty),* $(,)?) => {
		$(
			#[doc = concat!("Truncates the value to [`", stringify!($t), "`], like an `as` cast.")]
			///
			/// Only the least-significant bits are kept.
			///
			#[must_use]
			#[allow(
				clippy::cast_possible_truncation,
				clippy::cast_possible_wrap,
				trivial_numeric_casts,
				reason = "Truncation is intended"
			)]
			pub fn $name(self) -> $t {
				self.low_word() as $t
			}
		)*
	};
}



//		Structs

//󰭅		LargeInt
impl<BITS> LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	impl_as_native! {
		as_i8  => i8,
		as_i16 => i16,
		as_i32 => i32,
		as_i64 => i64,
		as_u8  => u8,
		as_u16 => u16,
		as_u32 => u32,
		as_u64 => u64,
	}

	//		div_rem_scalar
	/// Divides by a native integer, keeping the remainder.
	///
	/// This gives the same results as [`div_rem()`](LargeInt::div_rem()), but
	/// divides by a single word at a time.
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
	pub fn div_rem_scalar<S: Scalar>(self, rhs: S) -> Quotient<BITS> {
		let (negative, magnitude) = rhs.sign_and_magnitude();
		self.div_rem_word(negative, magnitude)
	}

	//		mul_scalar
	/// Multiplies by a native integer, wrapping on overflow.
	///
	/// # Parameters
	///
	/// * `rhs` - The value to multiply `self` by.
	///
	#[must_use]
	pub fn mul_scalar<S: Scalar>(self, rhs: S) -> Self {
		let (negative, magnitude) = rhs.sign_and_magnitude();
		self.wrapping_mul_word(negative, magnitude)
	}

	//		low_word
	/// The least-significant word.
	fn low_word(self) -> u64 {
		self.as_words().last().copied().unwrap_or_default()
	}
}
