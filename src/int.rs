//! Fixed-width integer values.



//		Modules																											

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																										

use crate::{
	errors::FixedIntError,
	registry::FixedIntType,
};
use core::{
	cmp::Ordering,
	fmt::{Binary, Debug, Display, Formatter, LowerHex, Octal, UpperHex, self},
	hash::{Hash, Hasher},
};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use parking_lot::RwLock;
use std::sync::Arc;



//		Enums																											

//		Storage																	
/// Where a value's integer content lives.
#[derive(Clone)]
enum Storage {
	/// An immutable value, owned outright.
	Fixed(BigInt),
	
	/// A mutable value, held in a cell shared by all aliases.
	Cell(Arc<RwLock<BigInt>>),
}



//		Structs																											

//		FixedInt																
/// A fixed-width integer value.
///
/// Every value carries its [`FixedIntType`], and its content is always within
/// that type's range: anything that produces a value passes through the
/// type's rectification first, so overflow wraps exactly as it would in a
/// hardware register of that width.
///
/// # Mutability
///
/// Values of an immutable type own their integer. Values of a mutable type
/// keep it in a shared cell instead, and [`Clone`] produces an alias of the
/// same cell, so in-place updates made through one alias are observed by all
/// others. Use [`detached()`](FixedInt::detached()) for an independent copy.
///
/// # Arithmetic
///
/// Operators accept other fixed-width values as well as plain integers on
/// either side. The result type is chosen by C-style promotion rules, see the
/// [`ops`](crate::ops) module. Division and modulo use floor semantics.
///
/// # Equality
///
/// Equality, ordering, and hashing consider only the numeric value, so values
/// of different types compare equal when they hold the same number, and
/// values compare directly against plain integers.
///
#[derive(Clone)]
pub struct FixedInt {
	/// The type of the value.
	ty:      FixedIntType,
	
	/// The integer content.
	storage: Storage,
}

//󰭅		FixedInt																
impl FixedInt {
	//		Constructors														
	
	//		from_rectified														
	/// Wraps an already-rectified integer in the storage its type calls for.
	pub(crate) fn from_rectified(ty: FixedIntType, value: BigInt) -> Self {
		let storage = if ty.mutable() {
			Storage::Cell(Arc::new(RwLock::new(value)))
		} else {
			Storage::Fixed(value)
		};
		Self { ty, storage }
	}
	
	//		Public methods														
	
	//		detached															
	/// Creates an independent copy of this value.
	///
	/// For a mutable value the copy gets its own cell, so later updates to
	/// either one are not seen by the other. For an immutable value this is
	/// the same as [`Clone`].
	///
	#[must_use]
	pub fn detached(&self) -> Self {
		Self::from_rectified(self.ty.clone(), self.value())
	}
	
	//		fixed_type															
	/// The type of this value.
	#[must_use]
	pub const fn fixed_type(&self) -> &FixedIntType {
		&self.ty
	}
	
	//		is_alias_of															
	/// Whether this value shares its cell with another.
	///
	/// Immutable values are never aliases.
	///
	#[must_use]
	pub fn is_alias_of(&self, other: &Self) -> bool {
		match (&self.storage, &other.storage) {
			(Storage::Cell(a), Storage::Cell(b)) => Arc::ptr_eq(a, b),
			_                                    => false,
		}
	}
	
	//		is_negative															
	/// Whether the value is below zero.
	#[must_use]
	pub fn is_negative(&self) -> bool {
		self.with_value(Signed::is_negative)
	}
	
	//		is_zero																
	/// Whether the value is zero.
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.with_value(Zero::is_zero)
	}
	
	//		mutable																
	/// Whether this value can be updated in place.
	#[must_use]
	pub fn mutable(&self) -> bool {
		self.ty.mutable()
	}
	
	//		signed																
	/// Whether this value's type is signed.
	#[must_use]
	pub fn signed(&self) -> bool {
		self.ty.signed()
	}
	
	//		value																
	/// The current integer content.
	#[must_use]
	pub fn value(&self) -> BigInt {
		self.with_value(Clone::clone)
	}
	
	//		width																
	/// The width of this value's type.
	#[must_use]
	pub fn width(&self) -> u32 {
		self.ty.width()
	}
	
	//		Crate methods														
	
	//		store																
	/// Rectifies a raw integer through this value's own type and writes it into
	/// the cell.
	///
	/// Nothing is written for an immutable value.
	///
	pub(crate) fn store(&self, raw: &BigInt) -> Result<(), FixedIntError> {
		match &self.storage {
			Storage::Cell(cell) => {
				let value    = self.ty.rectify(raw);
				*cell.write() = value;
				Ok(())
			},
			Storage::Fixed(_)   => Err(FixedIntError::Immutable),
		}
	}
	
	//		with_value															
	/// Runs a closure against the current integer content without copying it.
	pub(crate) fn with_value<R>(&self, f: impl FnOnce(&BigInt) -> R) -> R {
		match &self.storage {
			Storage::Fixed(value) => f(value),
			Storage::Cell(cell)   => f(&cell.read()),
		}
	}
}

//󰭅		Binary																	
impl Binary for FixedInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.with_value(|value| Binary::fmt(value, f))
	}
}

//󰭅		Debug																	
impl Debug for FixedInt {
	//		fmt																	
	/// Formats as `<TypeName>(<decimal value>)`, e.g. `Int8(-128)`.
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}({self})", self.ty)
	}
}

//󰭅		Display																	
impl Display for FixedInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.with_value(|value| Display::fmt(value, f))
	}
}

//󰭅		Eq																		
impl Eq for FixedInt {}

//󰭅		From: &FixedInt -> BigInt												
impl From<&FixedInt> for BigInt {
	//		from																
	fn from(v: &FixedInt) -> Self {
		v.value()
	}
}

//󰭅		From: FixedInt -> BigInt												
impl From<FixedInt> for BigInt {
	//		from																
	fn from(v: FixedInt) -> Self {
		match v.storage {
			Storage::Fixed(value) => value,
			Storage::Cell(cell)   => cell.read().clone(),
		}
	}
}

//󰭅		Hash																	
impl Hash for FixedInt {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.with_value(|value| value.hash(state));
	}
}

//󰭅		LowerHex																
impl LowerHex for FixedInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.with_value(|value| LowerHex::fmt(value, f))
	}
}

//󰭅		Octal																	
impl Octal for FixedInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.with_value(|value| Octal::fmt(value, f))
	}
}

//󰭅		Ord																		
impl Ord for FixedInt {
	//		cmp																	
	fn cmp(&self, other: &Self) -> Ordering {
		if self.is_alias_of(other) {
			return Ordering::Equal;
		}
		let other = other.value();
		self.with_value(|value| value.cmp(&other))
	}
}

//󰭅		PartialEq																
impl PartialEq for FixedInt {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

//󰭅		PartialEq<BigInt>														
impl PartialEq<BigInt> for FixedInt {
	//		eq																	
	fn eq(&self, other: &BigInt) -> bool {
		self.with_value(|value| value == other)
	}
}

//󰭅		PartialEq<FixedInt> for BigInt											
impl PartialEq<FixedInt> for BigInt {
	//		eq																	
	fn eq(&self, other: &FixedInt) -> bool {
		other == self
	}
}

//󰭅		PartialOrd																
impl PartialOrd for FixedInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

//󰭅		PartialOrd<BigInt>														
impl PartialOrd<BigInt> for FixedInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
		Some(self.with_value(|value| value.cmp(other)))
	}
}

//󰭅		PartialOrd<FixedInt> for BigInt											
impl PartialOrd<FixedInt> for BigInt {
	//		partial_cmp															
	fn partial_cmp(&self, other: &FixedInt) -> Option<Ordering> {
		other.partial_cmp(self).map(Ordering::reverse)
	}
}

//󰭅		ToPrimitive																
impl ToPrimitive for FixedInt {
	//		to_i64																
	fn to_i64(&self) -> Option<i64> {
		self.with_value(ToPrimitive::to_i64)
	}
	
	//		to_i128																
	fn to_i128(&self) -> Option<i128> {
		self.with_value(ToPrimitive::to_i128)
	}
	
	//		to_u64																
	fn to_u64(&self) -> Option<u64> {
		self.with_value(ToPrimitive::to_u64)
	}
	
	//		to_u128																
	fn to_u128(&self) -> Option<u128> {
		self.with_value(ToPrimitive::to_u128)
	}
	
	//		to_f64																
	fn to_f64(&self) -> Option<f64> {
		self.with_value(ToPrimitive::to_f64)
	}
}

//󰭅		UpperHex																
impl UpperHex for FixedInt {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		self.with_value(|value| UpperHex::fmt(value, f))
	}
}

//		Primitive comparisons and conversions
macro_rules! primitive_interop {
	($($t:ty => $to:ident),* $(,)?) => {$(
		//󰭅		PartialEq<primitive>											
		impl PartialEq<$t> for FixedInt {
			fn eq(&self, other: &$t) -> bool {
				self.with_value(|value| *value == BigInt::from(*other))
			}
		}
		
		//󰭅		PartialEq<FixedInt> for primitive								
		impl PartialEq<FixedInt> for $t {
			fn eq(&self, other: &FixedInt) -> bool {
				other == self
			}
		}
		
		//󰭅		PartialOrd<primitive>											
		impl PartialOrd<$t> for FixedInt {
			fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
				Some(self.with_value(|value| value.cmp(&BigInt::from(*other))))
			}
		}
		
		//󰭅		PartialOrd<FixedInt> for primitive								
		impl PartialOrd<FixedInt> for $t {
			fn partial_cmp(&self, other: &FixedInt) -> Option<Ordering> {
				other.partial_cmp(self).map(Ordering::reverse)
			}
		}
		
		//󰭅		TryFrom: &FixedInt -> primitive									
		impl TryFrom<&FixedInt> for $t {
			type Error = FixedIntError;
			
			fn try_from(v: &FixedInt) -> Result<Self, Self::Error> {
				v.with_value(ToPrimitive::$to).ok_or(FixedIntError::OutOfRange)
			}
		}
		
		//󰭅		TryFrom: FixedInt -> primitive									
		impl TryFrom<FixedInt> for $t {
			type Error = FixedIntError;
			
			fn try_from(v: FixedInt) -> Result<Self, Self::Error> {
				Self::try_from(&v)
			}
		}
	)*};
}

primitive_interop! {
	i8    => to_i8,
	i16   => to_i16,
	i32   => to_i32,
	i64   => to_i64,
	i128  => to_i128,
	isize => to_isize,
	u8    => to_u8,
	u16   => to_u16,
	u32   => to_u32,
	u64   => to_u64,
	u128  => to_u128,
	usize => to_usize,
}



//		Functions																										

//		parse_integer															
/// Parses an arbitrary-precision integer from text in the given base.
///
/// Base `0` infers the base from a `0x`, `0o`, or `0b` prefix, defaulting to
/// decimal, in which case leading zeros are rejected as they are ambiguous.
/// For bases 16, 8, and 2 the matching prefix is optional.
///
#[allow(clippy::arithmetic_side_effects, reason = "Arbitrary-precision arithmetic")]
pub(crate) fn parse_integer(text: &str, base: u32) -> Result<BigInt, FixedIntError> {
	if base == 1 || base > 36 {
		return Err(FixedIntError::UnsupportedBase(base));
	}
	
	let trimmed = text.trim();
	if trimmed.is_empty() {
		return Err(FixedIntError::EmptyValue);
	}
	
	//	At most one sign is allowed
	let (is_negative, unsigned) = match trimmed.strip_prefix('-') {
		Some(rest) => (true, rest),
		None       => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
	};
	
	let (radix, digits, prefixed) = match split_prefix(unsigned) {
		Some((prefix_radix, rest)) if base == 0 || base == prefix_radix => (prefix_radix, rest, true),
		_                                                             => (if base == 0 { 10 } else { base }, unsigned, false),
	};
	
	if digits.is_empty() {
		return Err(FixedIntError::EmptyValue);
	}
	
	//	An underscore may follow a prefix, or a digit, but never another
	//	underscore, and may not end the number
	let mut value               = BigInt::zero();
	let mut previous_underscore = !prefixed;
	for c in digits.chars() {
		if c == '_' {
			if previous_underscore {
				return Err(FixedIntError::InvalidDigit(c, radix));
			}
			previous_underscore = true;
			continue;
		}
		let digit           = c.to_digit(radix).ok_or(FixedIntError::InvalidDigit(c, radix))?;
		value               = value * radix + digit;
		previous_underscore = false;
	}
	if previous_underscore {
		return Err(FixedIntError::InvalidDigit('_', radix));
	}
	
	if base == 0 && !prefixed && !value.is_zero() && digits.starts_with('0') {
		return Err(FixedIntError::InvalidDigit('0', radix));
	}
	
	Ok(if is_negative { -value } else { value })
}

//		split_prefix															
/// Splits a base prefix from the front of a number.
#[expect(clippy::option_if_let_else, reason = "Clearer to read as if-let-else")]
fn split_prefix(s: &str) -> Option<(u32, &str)> {
	if        let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
		Some((16, rest))
	} else if let Some(rest) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
		Some((8, rest))
	} else if let Some(rest) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
		Some((2, rest))
	} else {
		None
	}
}
