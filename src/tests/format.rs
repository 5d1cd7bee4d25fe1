//		Packages

use super::*;
use crate::{I128, I256, I1024};
use claims::assert_ok_eq;
use rubedo::sugar::s;
use test_strategy::proptest;



//		Functions

fn from_i128(value: i128) -> I128 {
	I128::from_be_words(&[(value >> 64_u32) as u64, value as u64]).unwrap()
}



//		Tests

mod std_traits {
	use super::*;

	//		Binary
	#[test]
	fn binary__normal() {
		assert_eq!(format!("{:b}",  I128::from(5_i64)),  s!("101"));
		assert_eq!(format!("{:#b}", I128::zero()),       s!("0b0"));
		assert_eq!(format!("{:b}",  I128::from(-1_i64)), "1".repeat(128));
	}

	//		Display
	#[test]
	fn display__normal() {
		assert_eq!(I1024::zero().to_string(),                   s!("0"));
		assert_eq!(I1024::from(125_466_776_i64).to_string(),    s!("125466776"));
		assert_eq!(I1024::from(-125_466_776_i64).to_string(),   s!("-125466776"));
		assert_eq!(I128::min_value().to_string(),               i128::MIN.to_string());
	}
	#[test]
	fn display__flags() {
		let value = I256::from(42_i64);
		assert_eq!(format!("{value:+}"),      s!("+42"));
		assert_eq!(format!("{value:>6}"),     s!("    42"));
		assert_eq!(format!("{value:<6}|"),    s!("42    |"));
		assert_eq!(format!("{value:*^7}"),    s!("**42***"));
		assert_eq!(format!("{:06}", -value),  s!("-00042"));
	}

	//		LowerHex
	#[test]
	fn lower_hex__normal() {
		assert_eq!(format!("{:x}",    I256::from(0xBEEF_i64)), s!("beef"));
		assert_eq!(format!("{:#x}",   I256::from(255_i64)),    s!("0xff"));
		assert_eq!(format!("{:#06x}", I256::from(255_i64)),    s!("0x00ff"));
		assert_eq!(format!("{:x}",    I256::zero()),           s!("0"));
	}
	#[test]
	fn lower_hex__negative() {
		assert_eq!(format!("{:x}", I256::from(-1_i64)), "f".repeat(64));
		assert_eq!(format!("{:x}", I128::from(-2_i64)), format!("{:x}", -2_i128));
	}

	//		Octal
	#[test]
	fn octal__normal() {
		assert_eq!(format!("{:o}",  I256::from(8_i64)),   s!("10"));
		assert_eq!(format!("{:#o}", I256::from(511_i64)), s!("0o777"));
	}
	#[test]
	fn octal__negative() {
		//	128 bits is 42 full digits plus a 2-bit top digit
		assert_eq!(format!("{:o}", I128::from(-1_i64)), format!("3{}", "7".repeat(42)));
		assert_eq!(format!("{:o}", I128::min_value()),  format!("{:o}", i128::MIN));
	}

	//		UpperHex
	#[test]
	fn upper_hex__normal() {
		assert_eq!(format!("{:X}",  I256::from(0xBEEF_i64)), s!("BEEF"));
		assert_eq!(format!("{:#X}", I256::from(0xBEEF_i64)), s!("0xBEEF"));
	}
}

mod public_methods {
	use super::*;

	//		display_with
	#[test]
	fn display_with__internal() {
		let format = NumberFormat { width: 6, fill: '0', align: Align::Internal, ..NumberFormat::default() };
		assert_eq!(I256::from(-42_i64).display_with(&format).to_string(), s!("-00042"));
		assert_eq!(format!("[{}]", I256::from(42_i64).display_with(&format)), s!("[000042]"));
	}

	//		to_hex_string
	#[test]
	fn to_hex_string__normal() {
		assert_eq!(I1024::zero().to_hex_string(),             s!("0"));
		assert_eq!(I1024::from(0xABC_i64).to_hex_string(),   s!("abc"));
		assert_eq!((I1024::one() << 64_u32).to_hex_string(), format!("1{}", "0".repeat(16)));
	}

	//		to_octal_string
	#[test]
	fn to_octal_string__normal() {
		assert_eq!(I1024::zero().to_octal_string(),         s!("0"));
		assert_eq!(I1024::from(0o1234_i64).to_octal_string(), s!("1234"));
		assert_eq!((I1024::one() << 64_u32).to_octal_string(), format!("2{}", "0".repeat(21)));
	}
}

mod number_format {
	use super::*;

	//		Default
	#[test]
	fn default__values() {
		let format = NumberFormat::default();
		assert_eq!(format.base,  Base::Decimal);
		assert_eq!(format.align, Align::Right);
		assert_eq!(format.fill,  ' ');
		assert!(format.skip_whitespace);
		assert!(!format.show_base);
	}

	//		Deserialize
	#[test]
	fn deserialize__partial() {
		let format: NumberFormat = serde_json::from_str(r#"{"base": "octal", "width": 8, "align": "internal"}"#).unwrap();
		assert_eq!(format, NumberFormat { base: Base::Octal, width: 8, align: Align::Internal, ..NumberFormat::default() });
	}
	#[test]
	fn deserialize__unknown_base() {
		assert!(serde_json::from_str::<NumberFormat>(r#"{"base": "binary"}"#).is_err());
	}

	//		Serialize
	#[test]
	fn serialize__round_trip() {
		let format = NumberFormat { base: Base::Hex, uppercase: true, fill: '#', ..NumberFormat::default() };
		let json   = serde_json::to_string(&format).unwrap();
		assert_ok_eq!(serde_json::from_str::<NumberFormat>(&json), format);
	}

	//		format
	#[test]
	fn format__decimal() {
		let format = NumberFormat::default();
		assert_eq!(format.format(&I256::from(-125_466_776_i64)), s!("-125466776"));
		assert_eq!(format.format(&I256::zero()),                 s!("0"));
	}
	#[test]
	fn format__positive_sign() {
		let format = NumberFormat { show_positive_sign: true, ..NumberFormat::default() };
		assert_eq!(format.format(&I256::from(5_i64)),  s!("+5"));
		assert_eq!(format.format(&I256::zero()),       s!("+0"));
		assert_eq!(format.format(&I256::from(-5_i64)), s!("-5"));
	}
	#[test]
	fn format__hex() {
		let plain = NumberFormat { base: Base::Hex, ..NumberFormat::default() };
		let upper = NumberFormat { show_base: true, uppercase: true, ..plain };
		let lower = NumberFormat { show_base: true, ..plain };
		assert_eq!(plain.format(&I256::from(0xABC_i64)), s!("abc"));
		assert_eq!(upper.format(&I256::from(0xABC_i64)), s!("0XABC"));
		assert_eq!(lower.format(&I256::from(0xABC_i64)), s!("0xabc"));
		assert_eq!(lower.format(&I256::zero()),          s!("0"));
		assert_eq!(plain.format(&I256::from(-1_i64)),    "f".repeat(64));
	}
	#[test]
	fn format__hex_ignores_positive_sign() {
		let format = NumberFormat { base: Base::Hex, show_positive_sign: true, ..NumberFormat::default() };
		assert_eq!(format.format(&I256::from(10_i64)), s!("a"));
	}
	#[test]
	fn format__octal() {
		let format = NumberFormat { base: Base::Octal, show_base: true, ..NumberFormat::default() };
		assert_eq!(format.format(&I256::from(8_i64)), s!("010"));
		assert_eq!(format.format(&I256::zero()),      s!("0"));
	}
	#[test]
	fn format__alignment() {
		let value  = I256::from(-42_i64);
		let format = NumberFormat { width: 7, fill: '.', ..NumberFormat::default() };
		assert_eq!(format.format(&value), s!("....-42"));
		let format = NumberFormat { align: Align::Left, ..format };
		assert_eq!(format.format(&value), s!("-42...."));
		let format = NumberFormat { align: Align::Internal, ..format };
		assert_eq!(format.format(&value), s!("-....42"));
	}
	#[test]
	fn format__internal_after_prefix() {
		let format = NumberFormat {
			base:      Base::Hex,
			show_base: true,
			width:     8,
			fill:      '0',
			align:     Align::Internal,
			..NumberFormat::default()
		};
		assert_eq!(format.format(&I256::from(0xFF_i64)), s!("0x0000ff"));
	}
	#[test]
	fn format__width_too_small() {
		let format = NumberFormat { width: 2, fill: '*', ..NumberFormat::default() };
		assert_eq!(format.format(&I256::from(12_345_i64)), s!("12345"));
	}
}

mod native_oracle {
	use super::*;

	#[proptest]
	fn display__matches_i128(a: i128) {
		assert_eq!(from_i128(a).to_string(), a.to_string());
	}

	#[proptest]
	fn radix__matches_i128(a: i128) {
		let value = from_i128(a);
		assert_eq!(format!("{value:x}"),  format!("{a:x}"));
		assert_eq!(format!("{value:X}"),  format!("{a:X}"));
		assert_eq!(format!("{value:o}"),  format!("{a:o}"));
		assert_eq!(format!("{value:b}"),  format!("{a:b}"));
	}

	#[proptest]
	fn flags__match_i128(a: i128, #[strategy(0..60_usize)] width: usize) {
		let value = from_i128(a);
		assert_eq!(format!("{value:>width$}"),   format!("{a:>width$}"));
		assert_eq!(format!("{value:+0width$}"),  format!("{a:+0width$}"));
		assert_eq!(format!("{value:#0width$x}"), format!("{a:#0width$x}"));
	}
}
