//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		FormatError
/// Represents the ways in which a text literal can fail to parse.
///
/// Both variants describe malformed input. Neither corrupts the value being
/// parsed into, which is only produced once the whole literal has been read.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum FormatError {
	/// The literal contains a character that is not a digit in the selected
	/// base.
	#[error("Number could not be parsed: invalid digit {0:?} for base {1}")]
	InvalidDigit(char, u8),

	/// There is no literal at the given byte position of the input.
	#[error("Number could not be parsed: no digits at position {0}")]
	NoDigits(usize),
}

//		ConversionError
/// Represents all possible conversion errors that can occur.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ConversionError {
	/// The incoming text is not a valid literal.
	#[error(transparent)]
	Format(#[from] FormatError),

	/// The incoming byte sequence does not have the expected length.
	#[error("Invalid length: expected {expected} bytes, got {actual}")]
	InvalidLength {
		/// The number of bytes required by the destination type.
		expected: usize,

		/// The number of bytes supplied.
		actual:   usize,
	},

	/// The incoming word sequence does not have the expected length.
	#[error("Invalid word count: expected {expected} words, got {actual}")]
	InvalidWordCount {
		/// The number of words required by the destination type.
		expected: usize,

		/// The number of words supplied.
		actual:   usize,
	},

	/// The value is negative, which is not allowed by the destination type.
	#[error("Value is negative")]
	ValueIsNegative,

	/// The value is too large to be converted to the destination type.
	#[error("Value too large")]
	ValueTooLarge,
}
