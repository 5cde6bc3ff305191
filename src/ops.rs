//! Arithmetic, bitwise, and shift operators for fixed-width values.
//!
//! # Promotion
//!
//! A binary operation between two fixed-width values takes its result type
//! from the usual arithmetic conversions of C:
//!
//!   1. If both operands have the same signedness, the wider type wins, and on
//!      a tie the left operand's type is kept.
//!   2. Otherwise, the unsigned type wins if it is at least as wide as the
//!      signed one, and the signed type wins if it is wider.
//!
//! A plain integer operand has no type of its own and defers entirely to the
//! other side. Shifts are the exception to all of this: their result always
//! has the left operand's type, and the right operand is only a count.
//!
//! The operation itself is carried out on the exact integer values, and only
//! the final result is rectified into the winning type.
//!
//! # Failure
//!
//! The `try_*()` methods and [`FixedInt::apply()`] report failures such as
//! division by zero as errors. The operator traits cannot, so, in the same way
//! as the primitive integer types, they panic instead.
//!

//	All arithmetic here is on arbitrary-precision integers.
#![allow(clippy::arithmetic_side_effects, reason = "Arbitrary-precision arithmetic")]



//		Modules

#[cfg(test)]
#[path = "tests/ops.rs"]
mod tests;



//		Packages

use crate::{
	errors::FixedIntError,
	int::FixedInt,
	registry::FixedIntType,
};
use core::{
	fmt::{Display, Formatter, self},
	ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
	ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr, ShrAssign},
};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};



//		Enums

//		BinaryOp																
/// A binary operation understood by the arithmetic engine.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum BinaryOp {
	/// Addition.
	Add,
	
	/// Subtraction.
	Sub,
	
	/// Multiplication.
	Mul,
	
	/// Division rounding towards negative infinity.
	FloorDiv,
	
	/// Remainder of [`FloorDiv`](BinaryOp::FloorDiv), taking the sign of the
	/// divisor.
	Mod,
	
	/// Bitwise AND, on two's complement bits.
	And,
	
	/// Bitwise OR, on two's complement bits.
	Or,
	
	/// Bitwise XOR, on two's complement bits.
	Xor,
	
	/// Left shift.
	Shl,
	
	/// Arithmetic right shift.
	Shr,
}

//󰭅		BinaryOp																
impl BinaryOp {
	//		is_shift															
	/// Whether this is a shift, which keeps the left operand's type.
	#[must_use]
	pub const fn is_shift(self) -> bool {
		matches!(self, Self::Shl | Self::Shr)
	}
	
	//		symbol																
	/// The conventional operator symbol.
	#[must_use]
	pub const fn symbol(self) -> &'static str {
		match self {
			Self::Add      => "+",
			Self::Sub      => "-",
			Self::Mul      => "*",
			Self::FloorDiv => "//",
			Self::Mod      => "%",
			Self::And      => "&",
			Self::Or       => "|",
			Self::Xor      => "^",
			Self::Shl      => "<<",
			Self::Shr      => ">>",
		}
	}
}

//󰭅		Display																	
impl Display for BinaryOp {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(self.symbol())
	}
}



//		Traits

//		Operand																	
/// Something that can take part in fixed-width arithmetic.
///
/// Fixed-width values supply their type, which then takes part in promotion.
/// Plain integers do not, and take on the type of the other operand.
///
pub trait Operand {
	//		operand_type														
	/// The fixed-width type of the operand, if it has one.
	fn operand_type(&self) -> Option<&FixedIntType>;
	
	//		operand_value														
	/// The exact integer value of the operand.
	fn operand_value(&self) -> BigInt;
}

//󰭅		Operand for &T															
impl<T: Operand + ?Sized> Operand for &T {
	//		operand_type														
	fn operand_type(&self) -> Option<&FixedIntType> {
		(**self).operand_type()
	}
	
	//		operand_value														
	fn operand_value(&self) -> BigInt {
		(**self).operand_value()
	}
}

//󰭅		Operand for BigInt														
impl Operand for BigInt {
	//		operand_type														
	fn operand_type(&self) -> Option<&FixedIntType> {
		None
	}
	
	//		operand_value														
	fn operand_value(&self) -> BigInt {
		self.clone()
	}
}

//󰭅		Operand for FixedInt													
impl Operand for FixedInt {
	//		operand_type														
	fn operand_type(&self) -> Option<&FixedIntType> {
		Some(self.fixed_type())
	}
	
	//		operand_value														
	fn operand_value(&self) -> BigInt {
		self.value()
	}
}



//		Implementations

//󰭅		FixedInt																
impl FixedInt {
	//		Public methods														
	
	//		abs																	
	/// The absolute value, in the same type.
	///
	/// As with two's complement hardware, the absolute value of the minimum of
	/// a signed type is that same minimum.
	///
	#[must_use]
	pub fn abs(&self) -> Self {
		self.fixed_type().new(self.with_value(Signed::abs))
	}
	
	//		apply																
	/// Applies a binary operation with this value on the left.
	///
	/// # Parameters
	///
	/// * `op`  - The operation to apply.
	/// * `rhs` - The right-hand operand.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::DivisionByZero`] for a division or modulo by
	/// zero, and [`FixedIntError::NegativeShift`] for a negative shift count.
	///
	pub fn apply(&self, op: BinaryOp, rhs: impl Operand) -> Result<Self, FixedIntError> {
		let ty  = match rhs.operand_type() {
			Some(other) if !op.is_shift() => promote(self.fixed_type(), other),
			_                             => self.fixed_type().clone(),
		};
		let rhs = rhs.operand_value();
		let raw = self.with_value(|lhs| evaluate(op, lhs, &rhs, ty.width()))?;
		Ok(ty.new(raw))
	}
	
	//		apply_assign														
	/// Applies a binary operation in place.
	///
	/// For a mutable value the result is rectified through the value's own
	/// type, never a promoted one, and written into the shared cell, so every
	/// alias observes it. For an immutable value this binding is replaced by
	/// the result of [`apply()`](Self::apply()), which may have a promoted type,
	/// and other copies keep the old value.
	///
	/// The new value is computed in full before anything is written, so on
	/// error the value is left untouched.
	///
	/// # Errors
	///
	/// As for [`apply()`](Self::apply()).
	///
	pub fn apply_assign(&mut self, op: BinaryOp, rhs: impl Operand) -> Result<(), FixedIntError> {
		if self.mutable() {
			let rhs_value = rhs.operand_value();
			let raw       = self.with_value(|lhs| evaluate(op, lhs, &rhs_value, self.width()))?;
			self.store(&raw)
		} else {
			*self = self.apply(op, rhs)?;
			Ok(())
		}
	}
	
	//		div_mod																
	/// Floor division and floor modulo together, both in the promoted type.
	///
	/// The quotient and remainder satisfy `q * rhs + r == self` before
	/// rectification, as for [`try_div()`](Self::try_div()) and
	/// [`try_rem()`](Self::try_rem()).
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::DivisionByZero`] if `rhs` is zero.
	///
	pub fn div_mod(&self, rhs: impl Operand) -> Result<(Self, Self), FixedIntError> {
		let ty  = rhs.operand_type().map_or_else(|| self.fixed_type().clone(), |other| promote(self.fixed_type(), other));
		let rhs = rhs.operand_value();
		if rhs.is_zero() {
			return Err(FixedIntError::DivisionByZero);
		}
		let (quotient, remainder) = self.with_value(|lhs| lhs.div_mod_floor(&rhs));
		Ok((ty.new(quotient), ty.new(remainder)))
	}
	
	//		pos																	
	/// Unary plus, i.e. a new value of the same type holding the same number.
	#[must_use]
	pub fn pos(&self) -> Self {
		self.detached()
	}
	
	//		pow																	
	/// Raises this value to a power, in this value's type.
	///
	/// Only the low `width` bits of the result are ever needed, so the power is
	/// computed modulo `2^width`, which keeps large exponents cheap.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::NegativeExponent`] if the exponent is negative.
	///
	pub fn pow(&self, exp: impl Operand) -> Result<Self, FixedIntError> {
		let raw = self.raw_pow(&exp.operand_value())?;
		Ok(self.fixed_type().new(raw))
	}
	
	//		pow_assign															
	/// Raises this value to a power in place.
	///
	/// # Errors
	///
	/// As for [`pow()`](Self::pow()).
	///
	pub fn pow_assign(&mut self, exp: impl Operand) -> Result<(), FixedIntError> {
		let raw = self.raw_pow(&exp.operand_value())?;
		if self.mutable() {
			self.store(&raw)
		} else {
			*self = self.fixed_type().new(raw);
			Ok(())
		}
	}
	
	//		pow_mod																
	/// Modular exponentiation, in this value's type.
	///
	/// The result follows the sign of the modulus, and is then rectified into
	/// this value's type.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::NegativeExponent`] if the exponent is negative,
	/// or [`FixedIntError::DivisionByZero`] if the modulus is zero.
	///
	pub fn pow_mod(&self, exp: impl Operand, modulo: impl Operand) -> Result<Self, FixedIntError> {
		let exponent = exp.operand_value();
		let modulus  = modulo.operand_value();
		if exponent.is_negative() {
			return Err(FixedIntError::NegativeExponent);
		}
		if modulus.is_zero() {
			return Err(FixedIntError::DivisionByZero);
		}
		let raw      = self.with_value(|base| base.modpow(&exponent, &modulus));
		Ok(self.fixed_type().new(raw))
	}
	
	//		rapply																
	/// Applies a binary operation with this value on the right.
	///
	/// This is the reflected form, used when the left operand is a plain
	/// integer, and gives the same result type as [`apply()`](Self::apply())
	/// would with the operands swapped.
	///
	/// # Errors
	///
	/// As for [`apply()`](Self::apply()).
	///
	pub fn rapply(&self, op: BinaryOp, lhs: impl Operand) -> Result<Self, FixedIntError> {
		let ty  = match lhs.operand_type() {
			Some(other) if op.is_shift() => other.clone(),
			Some(other)                  => promote(other, self.fixed_type()),
			None                         => self.fixed_type().clone(),
		};
		let lhs = lhs.operand_value();
		let raw = self.with_value(|rhs| evaluate(op, &lhs, rhs, ty.width()))?;
		Ok(ty.new(raw))
	}
	
	//		try_add																
	/// Fallible addition. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Addition itself cannot fail.
	///
	pub fn try_add(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::Add, rhs)
	}
	
	//		try_div																
	/// Fallible floor division. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::DivisionByZero`] if `rhs` is zero.
	///
	pub fn try_div(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::FloorDiv, rhs)
	}
	
	//		try_mul																
	/// Fallible multiplication. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Multiplication itself cannot fail.
	///
	pub fn try_mul(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::Mul, rhs)
	}
	
	//		try_rem																
	/// Fallible floor modulo. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::DivisionByZero`] if `rhs` is zero.
	///
	pub fn try_rem(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::Mod, rhs)
	}
	
	//		try_shl																
	/// Fallible left shift. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::NegativeShift`] if `rhs` is negative.
	///
	pub fn try_shl(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::Shl, rhs)
	}
	
	//		try_shr																
	/// Fallible right shift. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::NegativeShift`] if `rhs` is negative.
	///
	pub fn try_shr(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::Shr, rhs)
	}
	
	//		try_sub																
	/// Fallible subtraction. See [`apply()`](Self::apply()).
	///
	/// # Errors
	///
	/// Subtraction itself cannot fail.
	///
	pub fn try_sub(&self, rhs: impl Operand) -> Result<Self, FixedIntError> {
		self.apply(BinaryOp::Sub, rhs)
	}
	
	//		Private methods														
	
	//		raw_pow																
	/// Computes this value raised to a power, modulo `2^width`.
	fn raw_pow(&self, exponent: &BigInt) -> Result<BigInt, FixedIntError> {
		if exponent.is_negative() {
			return Err(FixedIntError::NegativeExponent);
		}
		let modulus = BigInt::one() << self.width();
		Ok(self.with_value(|base| base.modpow(exponent, &modulus)))
	}
}

//󰭅		Neg																		
impl Neg for FixedInt {
	type Output = Self;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		-&self
	}
}

//󰭅		Neg for &FixedInt														
impl Neg for &FixedInt {
	type Output = FixedInt;
	
	//		neg																	
	fn neg(self) -> Self::Output {
		self.fixed_type().new(self.with_value(|value| -value))
	}
}

//󰭅		Not																		
impl Not for FixedInt {
	type Output = Self;
	
	//		not																	
	fn not(self) -> Self::Output {
		!&self
	}
}

//󰭅		Not for &FixedInt														
impl Not for &FixedInt {
	type Output = FixedInt;
	
	//		not																	
	/// Bitwise inversion, i.e. `-value - 1` before rectification.
	fn not(self) -> Self::Output {
		self.fixed_type().new(self.with_value(|value| !value))
	}
}

//		Operator traits
macro_rules! binary_operator {
	($($trait:ident :: $method:ident, $assign:ident :: $assign_method:ident => $op:ident),* $(,)?) => {$(
		impl<R: Operand> $trait<R> for FixedInt {
			type Output = Self;
			
			fn $method(self, rhs: R) -> Self::Output {
				operate(self.apply(BinaryOp::$op, rhs))
			}
		}
		
		impl<R: Operand> $trait<R> for &FixedInt {
			type Output = FixedInt;
			
			fn $method(self, rhs: R) -> Self::Output {
				operate(self.apply(BinaryOp::$op, rhs))
			}
		}
		
		impl<R: Operand> $assign<R> for FixedInt {
			fn $assign_method(&mut self, rhs: R) {
				operate(self.apply_assign(BinaryOp::$op, rhs));
			}
		}
	)*};
}

binary_operator! {
	Add::add,       AddAssign::add_assign       => Add,
	Sub::sub,       SubAssign::sub_assign       => Sub,
	Mul::mul,       MulAssign::mul_assign       => Mul,
	Div::div,       DivAssign::div_assign       => FloorDiv,
	Rem::rem,       RemAssign::rem_assign       => Mod,
	BitAnd::bitand, BitAndAssign::bitand_assign => And,
	BitOr::bitor,   BitOrAssign::bitor_assign   => Or,
	BitXor::bitxor, BitXorAssign::bitxor_assign => Xor,
	Shl::shl,       ShlAssign::shl_assign       => Shl,
	Shr::shr,       ShrAssign::shr_assign       => Shr,
}

//		Plain integers on the left and right
macro_rules! plain_operand {
	($($t:ty),* $(,)?) => {$(
		impl Operand for $t {
			fn operand_type(&self) -> Option<&FixedIntType> {
				None
			}
			
			fn operand_value(&self) -> BigInt {
				BigInt::from(*self)
			}
		}
		
		reflected_operator!($t;
			Add::add       => Add,
			Sub::sub       => Sub,
			Mul::mul       => Mul,
			Div::div       => FloorDiv,
			Rem::rem       => Mod,
			BitAnd::bitand => And,
			BitOr::bitor   => Or,
			BitXor::bitxor => Xor,
		);
	)*};
}

macro_rules! reflected_operator {
	($t:ty; $($trait:ident :: $method:ident => $op:ident),* $(,)?) => {$(
		impl $trait<FixedInt> for $t {
			type Output = FixedInt;
			
			fn $method(self, rhs: FixedInt) -> Self::Output {
				operate(rhs.rapply(BinaryOp::$op, self))
			}
		}
		
		impl $trait<&FixedInt> for $t {
			type Output = FixedInt;
			
			fn $method(self, rhs: &FixedInt) -> Self::Output {
				operate(rhs.rapply(BinaryOp::$op, self))
			}
		}
	)*};
}

plain_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

reflected_operator!(BigInt;
	Add::add       => Add,
	Sub::sub       => Sub,
	Mul::mul       => Mul,
	Div::div       => FloorDiv,
	Rem::rem       => Mod,
	BitAnd::bitand => And,
	BitOr::bitor   => Or,
	BitXor::bitxor => Xor,
);



//		Functions

//		evaluate																
/// Computes the exact, unrectified result of a binary operation.
///
/// `width` is the width of the result type, and is only used to bound shift
/// counts: shifting left by `width` or more always rectifies to zero, and
/// shifting right by `width` or more leaves only the sign. A plain left
/// operand may be wider than the result type, so a right shift is bounded by
/// its bit length as well.
///
pub(crate) fn evaluate(op: BinaryOp, lhs: &BigInt, rhs: &BigInt, width: u32) -> Result<BigInt, FixedIntError> {
	Ok(match op {
		BinaryOp::Add      => lhs + rhs,
		BinaryOp::Sub      => lhs - rhs,
		BinaryOp::Mul      => lhs * rhs,
		BinaryOp::FloorDiv => {
			if rhs.is_zero() {
				return Err(FixedIntError::DivisionByZero);
			}
			lhs.div_floor(rhs)
		},
		BinaryOp::Mod      => {
			if rhs.is_zero() {
				return Err(FixedIntError::DivisionByZero);
			}
			lhs.mod_floor(rhs)
		},
		BinaryOp::And      => lhs & rhs,
		BinaryOp::Or       => lhs | rhs,
		BinaryOp::Xor      => lhs ^ rhs,
		BinaryOp::Shl      => {
			let count = shift_count(rhs, width)?;
			if count >= width { BigInt::zero() } else { lhs << count }
		},
		BinaryOp::Shr      => {
			let bound = u32::try_from(lhs.bits()).map_or(u32::MAX, |bits| bits.max(width));
			lhs >> shift_count(rhs, bound)?
		},
	})
}

//		operate																	
/// Unwraps the result of an operator, panicking on failure as the primitive
/// integer operators do.
#[expect(clippy::panic, reason = "Needs to emulate Rust standard library behaviour")]
fn operate<T>(result: Result<T, FixedIntError>) -> T {
	result.unwrap_or_else(|err| panic!("{err}"))
}

//		promote																	
/// Selects the result type of a binary operation between two fixed-width
/// types.
///
/// See the [module documentation](self) for the rules.
///
/// # Examples
///
/// ```
/// use fixedint::{get_type, ops::promote};
///
/// let int8   = get_type(8,  true,  false).unwrap();
/// let uint8  = get_type(8,  false, false).unwrap();
/// let int16  = get_type(16, true,  false).unwrap();
/// assert_eq!(promote(&int8,  &uint8), uint8);
/// assert_eq!(promote(&uint8, &int16), int16);
/// ```
///
#[must_use]
pub fn promote(lhs: &FixedIntType, rhs: &FixedIntType) -> FixedIntType {
	let winner = if lhs.signed() == rhs.signed() {
		if lhs.width() >= rhs.width() { lhs } else { rhs }
	} else {
		let (unsigned, signed) = if lhs.signed() { (rhs, lhs) } else { (lhs, rhs) };
		if unsigned.width() >= signed.width() { unsigned } else { signed }
	};
	winner.clone()
}

//		shift_count																
/// Reads a shift count, clamped to the width.
fn shift_count(rhs: &BigInt, width: u32) -> Result<u32, FixedIntError> {
	if rhs.is_negative() {
		return Err(FixedIntError::NegativeShift);
	}
	Ok(rhs.to_u32().map_or(width, |count| count.min(width)))
}
