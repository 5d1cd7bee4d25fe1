//		Packages

use super::*;
use crate::{I128, I256, I1024};
use claims::{assert_err_eq, assert_ok_eq};
use rubedo::sugar::s;
use test_strategy::proptest;



//		Tests

mod conversions {
	use super::*;

	//		as_*
	#[test]
	fn as_native__truncates() {
		let value = I256::from_be_words(&[7, 7, 7, 0x1234_5678_9ABC_DEF0]).unwrap();
		assert_eq!(value.as_u64(), 0x1234_5678_9ABC_DEF0);
		assert_eq!(value.as_u32(), 0x9ABC_DEF0);
		assert_eq!(value.as_u16(), 0xDEF0);
		assert_eq!(value.as_u8(),  0xF0);
		assert_eq!(value.as_i8(),  -16);
		assert_eq!(value.as_i64(), 0x1234_5678_9ABC_DEF0);
	}
	#[test]
	fn as_native__negative() {
		let value = I256::from(-2_i64);
		assert_eq!(value.as_i64(), -2);
		assert_eq!(value.as_i32(), -2);
		assert_eq!(value.as_u64(), u64::MAX - 1);
	}

	//		From
	#[test]
	fn from__sign_extends() {
		assert_eq!(I256::from(-1_i8).as_words().as_slice(),  &[u64::MAX; 4]);
		assert_eq!(I256::from(i64::MIN),                     -(I256::one() << 63_u32));
		assert_eq!(I256::from(u64::MAX).as_words().as_slice(), &[0, 0, 0, u64::MAX]);
		assert_eq!(I256::from(u8::MAX),                      I256::from(255_i64));
	}

	//		TryFrom
	#[test]
	fn try_from__in_range() {
		assert_ok_eq!(i64::try_from(I256::from(i64::MIN)), i64::MIN);
		assert_ok_eq!(u64::try_from(I256::from(u64::MAX)), u64::MAX);
		assert_ok_eq!(i8::try_from(I256::from(-128_i64)),  -128_i8);
		assert_ok_eq!(u16::try_from(I256::from(65_535_i64)), u16::MAX);
	}
	#[test]
	fn try_from__too_large() {
		let err = i64::try_from(I256::from(u64::MAX));
		assert_err_eq!(&err, &ConversionError::ValueTooLarge);
		assert_eq!(err.unwrap_err().to_string(), s!("Value too large"));
		assert_err_eq!(i8::try_from(I256::from(128_i64)),      ConversionError::ValueTooLarge);
		assert_err_eq!(i8::try_from(I256::from(-129_i64)),     ConversionError::ValueTooLarge);
		assert_err_eq!(u64::try_from(I256::one() << 64_u32),   ConversionError::ValueTooLarge);
		assert_err_eq!(i64::try_from(I256::min_value()),       ConversionError::ValueTooLarge);
	}
	#[test]
	fn try_from__negative() {
		let err = u64::try_from(I256::from(-1_i64));
		assert_err_eq!(&err, &ConversionError::ValueIsNegative);
		assert_eq!(err.unwrap_err().to_string(), s!("Value is negative"));
	}
}

mod operators {
	use super::*;

	//		Add, Sub
	#[test]
	fn add_sub__both_sides() {
		let value = I256::from(10_i64);
		assert_eq!(value + 5_u8,   I256::from(15_i64));
		assert_eq!(5_i16 + value,  I256::from(15_i64));
		assert_eq!(value - 15_u32, I256::from(-5_i64));
		assert_eq!(3_i64 - value,  I256::from(-7_i64));
	}
	#[test]
	fn add_sub_assign__normal() {
		let mut value  = I256::from(u64::MAX);
		value         += 1_u64;
		assert_eq!(value, I256::one() << 64_u32);
		value         -= 1_i32;
		assert_eq!(value, I256::from(u64::MAX));
	}

	//		BitAnd, BitOr, BitXor
	#[test]
	fn bitwise__widens_sign() {
		let value = I128::from_be_words(&[u64::MAX, 0xFF]).unwrap();
		assert_eq!(value & -1_i8,   value);
		assert_eq!(value & 0x0F_u8, I128::from(0x0F_u8));
		assert_eq!(0x100_u16 | value, I128::from_be_words(&[u64::MAX, 0x1FF]).unwrap());
		assert_eq!(value ^ -1_i64,  !value);
	}
	#[test]
	fn bitwise_assign__normal() {
		let mut value  = I128::from(0b1100_u8);
		value         &= 0b0110_u8;
		value         |= 0b0001_i32;
		value         ^= 0b1000_u64;
		assert_eq!(value, I128::from(0b1101_u8));
	}

	//		Div
	#[test]
	fn div__scalar_divisor() {
		let dividend = "2324562324354654768987455344234356324354656757858568764654657657587686786786".parse::<I1024>().unwrap();
		let quotient = "533810588728286903307011100850414219654054552889733060530006104339".parse::<I1024>().unwrap();
		assert_eq!(dividend / 4_354_657_576_u64,  quotient);
		assert_eq!(dividend / -4_354_657_576_i64, -quotient);
		assert_eq!(-dividend / 4_354_657_576_u64, -quotient);
	}
	#[test]
	fn div__native_dividend() {
		assert_eq!(100_u8 / I256::from(-7_i64), I256::from(-14_i64));
	}
	#[test]
	#[should_panic(expected = "Attempt to divide by zero")]
	fn div__by_zero() {
		let _ = I256::one() / 0_u8;
	}
	#[test]
	fn div_assign__normal() {
		let mut value  = I256::from(-100_i64);
		value         /= 7_i8;
		assert_eq!(value, I256::from(-14_i64));
	}

	//		div_rem_scalar
	#[test]
	fn div_rem_scalar__large() {
		let dividend = "2324562324354654768987455344234356324354656757858568764654657657587686786786".parse::<I1024>().unwrap();
		let result   = dividend.div_rem_scalar(4_354_657_576_u64);
		assert_eq!(result.remainder(),                      Some(I1024::from(1_613_964_522_i64)));
		assert_eq!(*result * 4_354_657_576_u64 + result.remainder().unwrap(), dividend);

		let result   = (-dividend).div_rem_scalar(4_354_657_576_u64);
		assert_eq!(result.remainder(),                      Some(I1024::from(-1_613_964_522_i64)));
	}
	#[test]
	fn div_rem_scalar__min_by_minus_one() {
		let result = I256::min_value().div_rem_scalar(-1_i32);
		assert_eq!(*result,            I256::min_value());
		assert_eq!(result.remainder(), Some(I256::zero()));
	}

	//		Mul
	#[test]
	fn mul__both_sides() {
		let value = I256::from(-6_i64);
		assert_eq!(value * 7_u8,   I256::from(-42_i64));
		assert_eq!(-7_i8 * value,  I256::from(42_i64));
		assert_eq!(I256::from(u64::MAX) * u64::MAX, I256::from_be_words(&[0, 0, u64::MAX - 1, 1]).unwrap());
	}
	#[test]
	fn mul__wraps() {
		assert_eq!(I256::max_value() * 2_i32, I256::from(-2_i64));
		assert_eq!(I256::min_value() * -1_i8, I256::min_value());
	}
	#[test]
	fn mul_assign__normal() {
		let mut value  = I256::from(21_i64);
		value         *= -2_i16;
		assert_eq!(value, I256::from(-42_i64));
	}

	//		mul_scalar
	#[test]
	fn mul_scalar__i64_min() {
		assert_eq!(I256::one().mul_scalar(i64::MIN), I256::from(i64::MIN));
		assert_eq!(I256::from(-1_i64).mul_scalar(i64::MIN), I256::one() << 63_u32);
	}

	//		PartialEq, PartialOrd
	#[test]
	fn compare__both_sides() {
		let value = I256::from(-5_i64);
		assert!(value == -5_i8);
		assert!(-5_i32 == value);
		assert!(value != 5_u8);
		assert!(value < 0_u64);
		assert!(0_u64 > value);
		assert!(value >= -5_i64);
		assert!(I256::from(u64::MAX) > i64::MAX);
	}

	//		Rem
	#[test]
	fn rem__signs() {
		assert_eq!(I256::from(-17_i64) % 5_u8,  I256::from(-2_i64));
		assert_eq!(I256::from(17_i64)  % -5_i8, I256::from(2_i64));
		assert_eq!(17_u32 % I256::from(-5_i64), I256::from(2_i64));
	}
	#[test]
	#[should_panic(expected = "Attempt to calculate remainder with a divisor of zero")]
	fn rem__by_zero() {
		let _ = I256::one() % 0_i64;
	}
	#[test]
	fn rem_assign__normal() {
		let mut value  = I256::from(100_i64);
		value         %= 7_u16;
		assert_eq!(value, I256::from(2_i64));
	}
}

mod oracle {
	use super::*;

	#[proptest]
	fn div_rem_scalar__matches_i128(a: i128, #[filter(#b != 0)] b: i64) {
		let value  = I128::from_be_words(&[(a >> 64_u32) as u64, a as u64]).unwrap();
		let result = value.div_rem_scalar(b);
		assert_eq!(*result,            value / I128::from(b));
		assert_eq!(result.remainder(), Some(value % I128::from(b)));
	}

	#[proptest]
	fn mul_scalar__matches_widened(words: [u64; 16], b: i64) {
		let value = I1024::from_be_words(&words).unwrap();
		assert_eq!(value * b, value * I1024::from(b));
	}

	#[proptest]
	fn mixed_compare__matches_native(a: i64, b: u64) {
		assert_eq!(I256::from(a) < b,  i128::from(a) < i128::from(b));
		assert_eq!(I256::from(a) == b, i128::from(a) == i128::from(b));
	}
}
