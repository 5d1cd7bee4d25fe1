//! The result of a division that keeps its remainder.



//		Modules

#[cfg(test)]
#[path = "tests/quotient.rs"]
mod tests;



//		Packages

use crate::int::{LargeInt, WordsFor};
use core::{
	fmt::{Debug, Display, Formatter, self},
	ops::{Deref, Div},
};
use generic_array::{ArrayLength, GenericArray};
use typenum::{U64, Unsigned};



//		Structs

//		Quotient
/// A division result that remembers the remainder of the division that
/// produced it.
///
/// A [`Quotient`] dereferences to its value, so it can be used wherever a
/// [`LargeInt`] reference is expected, and converts into one with
/// [`into_inner()`](Quotient::into_inner()) or [`From`]. The remainder is only
/// present while the value is still the one the division produced:
/// [`assign()`](Quotient::assign()) replaces the value and forgets it.
///
/// # Examples
///
/// ```
/// use largeint::I256;
///
/// let result = I256::from(-17_i64).div_rem(I256::from(5_i64));
/// assert_eq!(*result,             I256::from(-3_i64));
/// assert_eq!(result.remainder(),  Some(I256::from(-2_i64)));
/// ```
///
pub struct Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	/// The quotient.
	value:     LargeInt<BITS>,

	/// The remainder of the division, if the value has not been replaced.
	remainder: Option<LargeInt<BITS>>,
}

//󰭅		Quotient
impl<BITS> Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		new
	/// Creates a new [`Quotient`] from a division's results.
	pub(crate) const fn new(value: LargeInt<BITS>, remainder: LargeInt<BITS>) -> Self {
		Self { value, remainder: Some(remainder) }
	}

	//		assign
	/// Replaces the value, discarding the captured remainder.
	///
	/// # Parameters
	///
	/// * `value` - The new value.
	///
	pub fn assign(&mut self, value: LargeInt<BITS>) {
		self.value     = value;
		self.remainder = None;
	}

	//		into_inner
	/// Consumes the result, returning the quotient.
	#[must_use]
	pub fn into_inner(self) -> LargeInt<BITS> {
		self.value
	}

	//		into_parts
	/// Consumes the result, returning the quotient and the remainder.
	#[must_use]
	pub fn into_parts(self) -> (LargeInt<BITS>, Option<LargeInt<BITS>>) {
		(self.value, self.remainder)
	}

	//		remainder
	/// The remainder of the division, which has the sign of the dividend.
	///
	/// Returns [`None`] if the value did not come from a division, or has been
	/// replaced since.
	///
	#[must_use]
	pub fn remainder(&self) -> Option<LargeInt<BITS>> {
		self.remainder
	}
}

//󰭅		Clone
impl<BITS> Clone for Quotient<BITS>
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
impl<BITS> Copy for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{}

//󰭅		Debug
impl<BITS> Debug for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_struct("Quotient")
			.field("value",     &self.value)
			.field("remainder", &self.remainder)
			.finish()
	}
}

//󰭅		Deref
impl<BITS> Deref for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	type Target = LargeInt<BITS>;

	//		deref
	fn deref(&self) -> &Self::Target {
		&self.value
	}
}

//󰭅		Display
impl<BITS> Display for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		fmt
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.value, f)
	}
}

//󰭅		Eq
impl<BITS> Eq for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{}

//󰭅		From<LargeInt>
impl<BITS> From<LargeInt<BITS>> for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		from
	fn from(value: LargeInt<BITS>) -> Self {
		Self { value, remainder: None }
	}
}

//󰭅		From<Quotient>
impl<BITS> From<Quotient<BITS>> for LargeInt<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		from
	fn from(quotient: Quotient<BITS>) -> Self {
		quotient.value
	}
}

//󰭅		PartialEq
impl<BITS> PartialEq for Quotient<BITS>
where
	BITS:                              Unsigned + Div<U64>,
	WordsFor<BITS>:                    ArrayLength,
	GenericArray<u64, WordsFor<BITS>>: Copy,
{
	//		eq
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value && self.remainder == other.remainder
	}
}
