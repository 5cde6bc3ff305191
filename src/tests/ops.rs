//		Packages

use super::*;
use crate::{Alias, registry::get_type};
use claims::{assert_err_eq, assert_ok_eq};
use proptest::prelude::*;
use rubedo::sugar::s;



//		Tests

mod promotion {
	use super::*;
	
	//		promote																
	#[test]
	fn promote__same_signedness_wider_wins() {
		let int8  = Alias::Int8.fixed_type();
		let int16 = Alias::Int16.fixed_type();
		assert_eq!(promote(&int8,  &int16), int16);
		assert_eq!(promote(&int16, &int8),  int16);
		assert_eq!(promote(&Alias::UInt32.fixed_type(), &Alias::UInt64.fixed_type()), Alias::UInt64.fixed_type());
	}
	#[test]
	fn promote__same_signedness_tie_keeps_left() {
		let fixed   = Alias::Int8.fixed_type();
		let mutable = Alias::MutableInt8.fixed_type();
		assert_eq!(promote(&fixed,   &mutable), fixed);
		assert_eq!(promote(&mutable, &fixed),   mutable);
	}
	#[test]
	fn promote__mixed_unsigned_at_least_as_wide() {
		let int8   = Alias::Int8.fixed_type();
		let uint8  = Alias::UInt8.fixed_type();
		let uint16 = Alias::UInt16.fixed_type();
		assert_eq!(promote(&uint8, &int8),   uint8);
		assert_eq!(promote(&int8,  &uint8),  uint8);
		assert_eq!(promote(&int8,  &uint16), uint16);
		assert_eq!(promote(&uint16, &int8),  uint16);
	}
	#[test]
	fn promote__mixed_signed_wider() {
		let uint8 = Alias::UInt8.fixed_type();
		let int16 = Alias::Int16.fixed_type();
		assert_eq!(promote(&uint8, &int16), int16);
		assert_eq!(promote(&int16, &uint8), int16);
	}
	#[test]
	fn promote__odd_widths() {
		let uint10 = get_type(10, false, false).unwrap();
		let int12  = get_type(12, true,  false).unwrap();
		let int10  = get_type(10, true,  false).unwrap();
		assert_eq!(promote(&uint10, &int12), int12);
		assert_eq!(promote(&int10,  &uint10), uint10);
	}
	
	//		Result types														
	#[test]
	fn result_type__follows_promotion() {
		let sum = Alias::Int8.new(1) + Alias::Int16.new(1);
		assert_eq!(sum.fixed_type(), &Alias::Int16.fixed_type());
		let sum = Alias::UInt8.new(1) + Alias::Int8.new(1);
		assert_eq!(sum.fixed_type(), &Alias::UInt8.fixed_type());
		let sum = Alias::Int8.new(-1) + Alias::UInt8.new(0);
		assert_eq!(sum, 255);
	}
	#[test]
	fn result_type__plain_integer_defers() {
		let value = Alias::Int8.new(100);
		let sum   = &value + 100;
		assert_eq!(sum.fixed_type(), &Alias::Int8.fixed_type());
		assert_eq!(sum, -56);
		let sum: FixedInt = 100 + &value;
		assert_eq!(sum.fixed_type(), &Alias::Int8.fixed_type());
		assert_eq!(sum, -56);
		let sum   = &value + 100_000_u64;
		assert_eq!(sum.fixed_type(), &Alias::Int8.fixed_type());
	}
	#[test]
	fn result_type__mutable_result_is_fresh() {
		let value = Alias::MutableInt8.new(5);
		let sum   = &value + 1;
		assert!(sum.mutable());
		assert!(!sum.is_alias_of(&value));
		assert_eq!(value, 5);
		assert_eq!(sum,   6);
	}
}

mod arithmetic {
	use super::*;
	
	//		Add																	
	#[test]
	fn add__wraps() {
		assert_eq!(Alias::Int8.new(127)  + Alias::Int8.new(1),  -128);
		assert_eq!(Alias::UInt8.new(255) + Alias::UInt8.new(1), 0);
		assert_eq!(Alias::Int8.new(15)   + Alias::Int8.new(10), 25);
		let int10 = get_type(10, true, false).unwrap();
		assert_eq!(int10.new(511) + 1, -512);
	}
	#[test]
	fn add__wide() {
		let ty  = get_type(256, false, false).unwrap();
		let max = ty.new(ty.max_value());
		assert_eq!(&max + 1, 0);
		assert_eq!(&max + &max, ty.max_value() - 1);
	}
	
	//		Sub																	
	#[test]
	fn sub__wraps() {
		assert_eq!(Alias::UInt8.new(0) - 1,                255);
		assert_eq!(Alias::Int8.new(-128) - 1,              127);
		assert_eq!(1 - Alias::UInt8.new(2),                255);
		assert_eq!(BigInt::from(300) - Alias::UInt8.new(0), 44);
	}
	
	//		Mul																	
	#[test]
	fn mul__wraps() {
		assert_eq!(Alias::Int8.new(15)  * Alias::Int8.new(10), -106);
		assert_eq!(Alias::UInt8.new(16) * 16,                  0);
		assert_eq!(3 * Alias::Int8.new(50),                    -106);
	}
	
	//		Div																	
	#[test]
	fn div__floors() {
		assert_eq!(Alias::Int8.new(-7) / 2,  -4);
		assert_eq!(Alias::Int8.new(7)  / -2, -4);
		assert_eq!(Alias::Int8.new(-7) / -2, 3);
		assert_eq!(Alias::Int8.new(7)  / 2,  3);
		assert_eq!(7 / Alias::Int8.new(2),   3);
	}
	#[test]
	fn div__minimum_by_minus_one_wraps() {
		assert_eq!(Alias::Int8.new(-128) / -1, -128);
	}
	#[test]
	fn div__by_zero() {
		let err = Alias::Int8.new(1).try_div(0);
		assert_err_eq!(&err, &FixedIntError::DivisionByZero);
		assert_eq!(err.unwrap_err().to_string(), s!("Division by zero"));
		assert_err_eq!(Alias::Int8.new(1).try_div(Alias::UInt64.new(0)), FixedIntError::DivisionByZero);
	}
	#[test]
	#[should_panic(expected = "Division by zero")]
	fn div__by_zero_operator() {
		_ = Alias::Int8.new(1) / 0;
	}
	
	//		Rem																	
	#[test]
	fn rem__takes_divisor_sign() {
		assert_eq!(Alias::Int8.new(-7) % 2,  1);
		assert_eq!(Alias::Int8.new(7)  % -2, -1);
		assert_eq!(Alias::Int8.new(-7) % -2, -1);
		assert_eq!(7 % Alias::Int8.new(-2),  -1);
	}
	#[test]
	fn rem__by_zero() {
		assert_err_eq!(Alias::UInt8.new(9).try_rem(0), FixedIntError::DivisionByZero);
	}
	#[test]
	#[should_panic(expected = "Division by zero")]
	fn rem__by_zero_operator() {
		_ = 5 % Alias::Int8.new(0);
	}
	
	//		div_mod																
	#[test]
	fn div_mod__floors() {
		let (quotient, remainder) = Alias::Int8.new(-7).div_mod(2).unwrap();
		assert_eq!(quotient,  -4);
		assert_eq!(remainder, 1);
		let (quotient, remainder) = Alias::Int8.new(7).div_mod(-2).unwrap();
		assert_eq!(quotient,  -4);
		assert_eq!(remainder, -1);
	}
	#[test]
	fn div_mod__promotes() {
		let (quotient, remainder) = Alias::UInt8.new(200).div_mod(Alias::Int16.new(-3)).unwrap();
		assert_eq!(quotient,  -67);
		assert_eq!(remainder, -1);
		assert_eq!(quotient.fixed_type(),  &Alias::Int16.fixed_type());
		assert_eq!(remainder.fixed_type(), &Alias::Int16.fixed_type());
		let (quotient, _) = Alias::Int8.new(-128).div_mod(-1).unwrap();
		assert_eq!(quotient, -128);
	}
	#[test]
	fn div_mod__by_zero() {
		let err = Alias::UInt8.new(9).div_mod(0);
		assert_err_eq!(&err, &FixedIntError::DivisionByZero);
		assert_eq!(err.unwrap_err().to_string(), s!("Division by zero"));
	}
	
	//		try_*																
	#[test]
	fn try_methods() {
		let value = Alias::Int8.new(100);
		assert_ok_eq!(value.try_add(100), -56);
		assert_ok_eq!(value.try_sub(-100), -56);
		assert_ok_eq!(value.try_mul(2),   -56);
		assert_ok_eq!(value.try_div(3),   33);
		assert_ok_eq!(value.try_rem(3),   1);
		assert_ok_eq!(value.try_shl(1),   -56);
		assert_ok_eq!(value.try_shr(1),   50);
	}
	
	//		apply																
	#[test]
	fn apply__self_operand() {
		let value = Alias::MutableInt8.new(100);
		assert_ok_eq!(value.apply(BinaryOp::Add, &value), -56);
	}
	#[test]
	fn rapply__typed_lhs() {
		let rhs = Alias::Int8.new(2);
		let out = rhs.rapply(BinaryOp::Sub, Alias::Int16.new(1)).unwrap();
		assert_eq!(out, -1);
		assert_eq!(out.fixed_type(), &Alias::Int16.fixed_type());
		let out = rhs.rapply(BinaryOp::Shl, Alias::UInt8.new(1)).unwrap();
		assert_eq!(out, 4);
		assert_eq!(out.fixed_type(), &Alias::UInt8.fixed_type());
	}
	#[test]
	fn rapply__plain_lhs_shift_right() {
		let out = Alias::Int8.new(13).rapply(BinaryOp::Shr, BigInt::from(1) << 20_u32).unwrap();
		assert_eq!(out, -128);
		assert_eq!(out.fixed_type(), &Alias::Int8.fixed_type());
		assert_ok_eq!(Alias::UInt8.new(8).rapply(BinaryOp::Shr, 0x1234_u16),              0x12);
		assert_ok_eq!(Alias::Int8.new(13).rapply(BinaryOp::Shr, -(BigInt::from(1) << 20_u32)), -128);
		assert_ok_eq!(Alias::Int8.new(21).rapply(BinaryOp::Shr, BigInt::from(1) << 20_u32),  0);
		assert_ok_eq!(Alias::Int8.new(40).rapply(BinaryOp::Shr, -(BigInt::from(1) << 20_u32)), -1);
	}
	#[test]
	fn rapply__plain_lhs_shift_left() {
		assert_ok_eq!(Alias::UInt8.new(4).rapply(BinaryOp::Shl, 0x1234_u16), 0x40);
		assert_ok_eq!(Alias::UInt8.new(8).rapply(BinaryOp::Shl, 0x1234_u16), 0);
	}
}

mod bitwise {
	use super::*;
	
	//		BitAnd, BitOr, BitXor												
	#[test]
	fn logic() {
		assert_eq!(Alias::Int8.new(-1)    & 0x0F,  15);
		assert_eq!(Alias::UInt8.new(0xF0) | 0x0F,  255);
		assert_eq!(Alias::Int8.new(0x55)  ^ -1,    -0x56);
		assert_eq!(0x0F_u8 & Alias::UInt8.new(0xFF), 0x0F);
	}
	#[test]
	fn logic__mixed_signedness() {
		let out = Alias::Int8.new(-1) & Alias::UInt16.new(0xFFFF);
		assert_eq!(out, 0xFFFF);
		assert_eq!(out.fixed_type(), &Alias::UInt16.fixed_type());
	}
	
	//		Not																	
	#[test]
	fn not() {
		assert_eq!(!Alias::UInt8.new(0),  255);
		assert_eq!(!Alias::Int8.new(0),   -1);
		assert_eq!(!Alias::Int8.new(127), -128);
		assert_eq!(!&Alias::UInt16.new(1), 0xFFFE);
	}
	
	//		Shl																	
	#[test]
	fn shl() {
		assert_eq!(Alias::Int8.new(1)  << 7, -128);
		assert_eq!(Alias::UInt8.new(1) << 8, 0);
		assert_eq!(Alias::Int8.new(5)  << 1_000, 0);
		assert_eq!(Alias::Int8.new(5)  << (BigInt::from(1) << 100_u32), 0);
	}
	#[test]
	fn shl__keeps_left_type() {
		let out = Alias::Int8.new(1) << Alias::UInt64.new(3);
		assert_eq!(out, 8);
		assert_eq!(out.fixed_type(), &Alias::Int8.fixed_type());
	}
	#[test]
	fn shl__negative() {
		let err = Alias::Int8.new(1).try_shl(-1);
		assert_err_eq!(&err, &FixedIntError::NegativeShift);
		assert_eq!(err.unwrap_err().to_string(), s!("Negative shift count"));
	}
	
	//		Shr																	
	#[test]
	fn shr() {
		assert_eq!(Alias::UInt8.new(0x80) >> 7,   1);
		assert_eq!(Alias::Int8.new(-128)  >> 7,   -1);
		assert_eq!(Alias::Int8.new(-128)  >> 100, -1);
		assert_eq!(Alias::Int8.new(64)    >> 100, 0);
		assert_eq!(Alias::Int8.new(-7)    >> 1,   -4);
	}
	#[test]
	fn shr__negative() {
		assert_err_eq!(Alias::Int8.new(1).try_shr(Alias::Int8.new(-2)), FixedIntError::NegativeShift);
	}
}

mod unary {
	use super::*;
	
	//		Neg																	
	#[test]
	fn neg() {
		assert_eq!(-Alias::Int8.new(5),    -5);
		assert_eq!(-Alias::Int8.new(-128), -128);
		assert_eq!(-Alias::UInt8.new(1),   255);
		assert_eq!(-&Alias::UInt8.new(0),  0);
	}
	
	//		abs																	
	#[test]
	fn abs() {
		assert_eq!(Alias::Int8.new(-5).abs(),   5);
		assert_eq!(Alias::Int8.new(-128).abs(), -128);
		assert_eq!(Alias::Int8.new(-5).abs().fixed_type(), &Alias::Int8.fixed_type());
	}
	
	//		pos																	
	#[test]
	fn pos() {
		let value = Alias::MutableInt16.new(-5);
		let copy  = value.pos();
		assert_eq!(copy, -5);
		assert_eq!(copy.fixed_type(), value.fixed_type());
		assert!(!copy.is_alias_of(&value));
	}
}

mod power {
	use super::*;
	
	//		pow																	
	#[test]
	fn pow__wraps() {
		assert_ok_eq!(Alias::Int8.new(2).pow(7),     -128);
		assert_ok_eq!(Alias::UInt8.new(3).pow(5),    243);
		assert_ok_eq!(Alias::UInt8.new(3).pow(0),    1);
		assert_ok_eq!(Alias::UInt8.new(2).pow(1_000), 0);
		assert_ok_eq!(Alias::Int8.new(-1).pow(BigInt::from(10).pow(30_u32) + 1), -1);
	}
	#[test]
	fn pow__keeps_base_type() {
		let out = Alias::Int8.new(3).pow(Alias::UInt64.new(2)).unwrap();
		assert_eq!(out, 9);
		assert_eq!(out.fixed_type(), &Alias::Int8.fixed_type());
	}
	#[test]
	fn pow__negative_exponent() {
		let err = Alias::Int8.new(2).pow(-1);
		assert_err_eq!(&err, &FixedIntError::NegativeExponent);
		assert_eq!(err.unwrap_err().to_string(), s!("Negative exponent"));
	}
	
	//		pow_mod																
	#[test]
	fn pow_mod() {
		assert_ok_eq!(Alias::Int8.new(3).pow_mod(4, 5),     1);
		assert_ok_eq!(Alias::UInt8.new(7).pow_mod(3, 1_000), 87);
		assert_ok_eq!(Alias::Int8.new(3).pow_mod(1, -5),    -2);
	}
	#[test]
	fn pow_mod__zero_modulus() {
		assert_err_eq!(Alias::Int8.new(3).pow_mod(2, 0),  FixedIntError::DivisionByZero);
		assert_err_eq!(Alias::Int8.new(3).pow_mod(-2, 5), FixedIntError::NegativeExponent);
	}
	
	//		pow_assign															
	#[test]
	fn pow_assign__mutable() {
		let mut value = Alias::MutableUInt8.new(2);
		let alias     = value.clone();
		value.pow_assign(9).unwrap();
		assert_eq!(alias, 0);
		assert!(value.is_alias_of(&alias));
	}
	#[test]
	fn pow_assign__immutable() {
		let mut value = Alias::Int8.new(2);
		let copy      = value.clone();
		value.pow_assign(3).unwrap();
		assert_eq!(value, 8);
		assert_eq!(copy,  2);
	}
}

mod in_place {
	use super::*;
	
	//		apply_assign														
	#[test]
	fn immutable__rebinds() {
		let mut value = Alias::Int8.new(100);
		let copy      = value.clone();
		value += 100;
		assert_eq!(value, -56);
		assert_eq!(copy,  100);
	}
	#[test]
	fn immutable__takes_promoted_type() {
		let mut value = Alias::Int8.new(1);
		value += Alias::Int16.new(300);
		assert_eq!(value, 301);
		assert_eq!(value.fixed_type(), &Alias::Int16.fixed_type());
	}
	#[test]
	fn mutable__updates_aliases() {
		let mut value = Alias::MutableInt8.new(100);
		let alias     = value.clone();
		value += 100;
		assert_eq!(alias, -56);
		assert_eq!(value, alias);
		assert!(value.is_alias_of(&alias));
	}
	#[test]
	fn mutable__keeps_own_type() {
		let mut value = Alias::MutableInt8.new(1);
		value += Alias::Int16.new(300);
		assert_eq!(value, 45);
		assert_eq!(value.fixed_type(), &Alias::MutableInt8.fixed_type());
	}
	#[test]
	fn mutable__every_operator() {
		let mut value = Alias::MutableUInt8.new(200);
		let alias     = value.clone();
		value -= 201;
		assert_eq!(alias, 255);
		value *= 2;
		assert_eq!(alias, 254);
		value /= 3;
		assert_eq!(alias, 84);
		value %= 50;
		assert_eq!(alias, 34);
		value <<= 3;
		assert_eq!(alias, 16);
		value >>= 2;
		assert_eq!(alias, 4);
		value |= 0xF0;
		assert_eq!(alias, 0xF4);
		value &= 0x3C;
		assert_eq!(alias, 0x34);
		value ^= 0xFF;
		assert_eq!(alias, 0xCB);
	}
	#[test]
	fn mutable__self_operand() {
		let mut value = Alias::MutableInt8.new(100);
		let alias     = value.clone();
		value += alias.clone();
		assert_eq!(alias, -56);
	}
	#[test]
	fn mutable__failure_leaves_value() {
		let mut value = Alias::MutableInt8.new(9);
		assert_err_eq!(value.apply_assign(BinaryOp::FloorDiv, 0), FixedIntError::DivisionByZero);
		assert_err_eq!(value.apply_assign(BinaryOp::Shr, -1),     FixedIntError::NegativeShift);
		assert_eq!(value, 9);
	}
	#[test]
	#[should_panic(expected = "Division by zero")]
	fn mutable__failure_operator() {
		let mut value = Alias::MutableInt8.new(9);
		value %= 0;
	}
}

mod binary_op {
	use super::*;
	
	//		Display																
	#[test]
	fn display() {
		assert_eq!(BinaryOp::FloorDiv.to_string(), s!("//"));
		assert_eq!(BinaryOp::Shr.to_string(),      s!(">>"));
	}
	
	//		is_shift															
	#[test]
	fn is_shift() {
		assert!( BinaryOp::Shl.is_shift());
		assert!( BinaryOp::Shr.is_shift());
		assert!(!BinaryOp::Add.is_shift());
	}
}

mod properties {
	use super::*;
	
	proptest! {
		#[test]
		fn int32__matches_native_wrapping(a in any::<i32>(), b in any::<i32>()) {
			let (x, y) = (Alias::Int32.new(a), Alias::Int32.new(b));
			prop_assert_eq!(&x + &y, a.wrapping_add(b));
			prop_assert_eq!(&x - &y, a.wrapping_sub(b));
			prop_assert_eq!(&x * &y, a.wrapping_mul(b));
			prop_assert_eq!(&x ^ &y, a ^ b);
			prop_assert_eq!(!&x,     !a);
			prop_assert_eq!(-&x,     a.wrapping_neg());
		}
		
		#[test]
		fn uint16__matches_native_wrapping(a in any::<u16>(), b in any::<u16>(), shift in 0_u32..16) {
			let (x, y) = (Alias::UInt16.new(a), Alias::UInt16.new(b));
			prop_assert_eq!(&x + &y,     a.wrapping_add(b));
			prop_assert_eq!(&x - &y,     a.wrapping_sub(b));
			prop_assert_eq!(&x * &y,     a.wrapping_mul(b));
			prop_assert_eq!(&x << shift, a.wrapping_shl(shift));
			prop_assert_eq!(&x >> shift, a >> shift);
			prop_assert_eq!(x.pow(shift).unwrap(), a.wrapping_pow(shift));
		}
		
		#[test]
		fn floor_division__recombines(a in any::<i64>(), b in any::<i64>().prop_filter("non-zero", |b| *b != 0)) {
			let (x, y) = (Alias::Int64.new(a), Alias::Int64.new(b));
			let q      = x.try_div(&y).unwrap();
			let r      = x.try_rem(&y).unwrap();
			prop_assert_eq!(&q * &y + &r, x);
			prop_assert!(r.is_zero() || r.is_negative() == y.is_negative());
		}
		
		#[test]
		fn plain_integer__either_side(a in any::<i8>(), b in any::<i8>()) {
			let x = Alias::Int8.new(a);
			prop_assert_eq!(&x + b, b + &x);
			prop_assert_eq!(&x * b, b * &x);
			prop_assert_eq!(&x & b, b & &x);
		}
	}
}
