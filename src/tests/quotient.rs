//		Packages

use super::*;
use crate::I256;
use claims::{assert_none, assert_some_eq};



//		Tests

mod public_methods {
	use super::*;

	//		assign
	#[test]
	fn assign__clears_remainder() {
		let mut result = I256::from(17_i64).div_rem(I256::from(5_i64));
		assert_some_eq!(result.remainder(), I256::from(2_i64));
		result.assign(I256::from(9_i64));
		assert_eq!(*result, I256::from(9_i64));
		assert_none!(result.remainder());
	}

	//		into_inner
	#[test]
	fn into_inner__normal() {
		let result = I256::from(-17_i64).div_rem(I256::from(5_i64));
		assert_eq!(result.into_inner(), I256::from(-3_i64));
	}

	//		into_parts
	#[test]
	fn into_parts__normal() {
		let result = I256::from(-17_i64).div_rem(I256::from(-5_i64));
		assert_eq!(result.into_parts(), (I256::from(3_i64), Some(I256::from(-2_i64))));
	}
}

mod traits {
	use super::*;

	//		Clone
	#[test]
	fn clone__copies_remainder() {
		let result = I256::from(17_i64).div_rem(I256::from(5_i64));
		let copy   = result;
		assert_eq!(copy, result);
		assert_some_eq!(copy.remainder(), I256::from(2_i64));
	}

	//		Deref
	#[test]
	fn deref__value_methods() {
		let result = I256::from(-17_i64).div_rem(I256::from(5_i64));
		assert!(result.is_negative());
		assert_eq!(*result + I256::one(), I256::from(-2_i64));
	}

	//		Display
	#[test]
	fn display__value() {
		let result = I256::from(-17_i64).div_rem(I256::from(5_i64));
		assert_eq!(result.to_string(), "-3");
	}

	//		From
	#[test]
	fn from__no_remainder() {
		let result = Quotient::from(I256::from(4_i64));
		assert_none!(result.remainder());
		assert_eq!(LargeInt::from(result), I256::from(4_i64));
	}
}
