//! Fixed-length byte encoding of fixed-width values.
//!
//! The encoding carries no header: values are written as two's complement when
//! signed, or as an unsigned magnitude otherwise, sign- or zero-extended to
//! the requested number of bytes. Width and signedness must be known, or
//! inferred from the byte count, when decoding.



//		Modules

#[cfg(test)]
#[path = "tests/codec.rs"]
mod tests;



//		Packages

use crate::{
	errors::FixedIntError,
	int::FixedInt,
};
use core::{
	fmt::{Display, Formatter, self},
	str::FromStr,
};
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};



//		Enums

//		ByteOrder																
/// The order in which the bytes of an encoded value are written.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
	/// Most-significant byte first.
	Big,
	
	/// Least-significant byte first.
	Little,
}

//󰭅		ByteOrder																
impl ByteOrder {
	//		native																
	/// The byte order of the target platform.
	#[must_use]
	pub const fn native() -> Self {
		if cfg!(target_endian = "big") { Self::Big } else { Self::Little }
	}
}

//󰭅		Default																	
impl Default for ByteOrder {
	//		default																
	fn default() -> Self {
		Self::native()
	}
}

//󰭅		Display																	
impl Display for ByteOrder {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Big    => "big",
			Self::Little => "little",
		})
	}
}

//󰭅		FromStr																	
impl FromStr for ByteOrder {
	type Err = FixedIntError;
	
	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"big"    => Ok(Self::Big),
			"little" => Ok(Self::Little),
			"native" => Ok(Self::native()),
			unknown  => Err(FixedIntError::InvalidByteOrder(unknown.to_owned())),
		}
	}
}



//		Implementations

//󰭅		FixedInt																
impl FixedInt {
	//		Public methods														
	
	//		byte_length															
	/// The number of bytes needed to hold the full width.
	#[must_use]
	pub fn byte_length(&self) -> usize {
		usize::try_from(self.width().div_ceil(8)).unwrap_or(usize::MAX)
	}
	
	//		to_bytes															
	/// Encodes the value with its type's own signedness.
	///
	/// # Parameters
	///
	/// * `length` - The number of bytes to produce, defaulting to
	///              [`byte_length()`](Self::byte_length()).
	/// * `order`  - The byte order to write in.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::BytesOverflow`] if the value does not fit in
	/// `length` bytes.
	///
	/// # Examples
	///
	/// ```
	/// use fixedint::{ByteOrder, get_type};
	///
	/// let value = get_type(16, true, false).unwrap().new(-2);
	/// assert_eq!(value.to_bytes(None,    ByteOrder::Big).unwrap(), vec![0xFF, 0xFE]);
	/// assert_eq!(value.to_bytes(Some(4), ByteOrder::Little).unwrap(), vec![0xFE, 0xFF, 0xFF, 0xFF]);
	/// ```
	///
	pub fn to_bytes(&self, length: Option<usize>, order: ByteOrder) -> Result<Vec<u8>, FixedIntError> {
		self.to_bytes_as(length, order, self.signed())
	}
	
	//		to_bytes_as															
	/// Encodes the value with an explicit signedness.
	///
	/// Encoding a negative value as unsigned has no faithful result, and is
	/// rejected rather than reinterpreted.
	///
	/// # Errors
	///
	/// Returns [`FixedIntError::NegativeUnsigned`] if the value is negative and
	/// `signed` is `false`, or [`FixedIntError::BytesOverflow`] if the value
	/// does not fit in `length` bytes.
	///
	pub fn to_bytes_as(&self, length: Option<usize>, order: ByteOrder, signed: bool) -> Result<Vec<u8>, FixedIntError> {
		let length = length.unwrap_or_else(|| self.byte_length());
		let value  = self.value();
		if !signed && value.is_negative() {
			return Err(FixedIntError::NegativeUnsigned);
		}
		if !fits(&value, length, signed) {
			return Err(FixedIntError::BytesOverflow { length });
		}
		
		let fill      = if value.is_negative() { 0xFF } else { 0x00 };
		let mut bytes = if signed { value.to_signed_bytes_le() } else { value.to_bytes_le().1 };
		bytes.resize(length, fill);
		if order == ByteOrder::Big {
			bytes.reverse();
		}
		Ok(bytes)
	}
}



//		Functions

//		decode																	
/// Reads the integer encoded in a byte sequence.
pub(crate) fn decode(bytes: &[u8], order: ByteOrder, signed: bool) -> BigInt {
	match (order, signed) {
		(ByteOrder::Big,    true)  => BigInt::from_signed_bytes_be(bytes),
		(ByteOrder::Little, true)  => BigInt::from_signed_bytes_le(bytes),
		(ByteOrder::Big,    false) => BigInt::from_bytes_be(Sign::Plus, bytes),
		(ByteOrder::Little, false) => BigInt::from_bytes_le(Sign::Plus, bytes),
	}
}

//		fits																	
/// Whether a value can be encoded in `length` bytes.
#[allow(clippy::arithmetic_side_effects, reason = "Arbitrary-precision arithmetic")]
fn fits(value: &BigInt, length: usize, signed: bool) -> bool {
	if value.is_zero() {
		return true;
	}
	let bits = u64::try_from(length).map_or(u64::MAX, |length| length.saturating_mul(8));
	if !signed {
		return value.bits() <= bits;
	}
	//	Two's complement of n bits holds -2^(n-1) to 2^(n-1)-1
	let magnitude = if value.is_negative() { -value - 1_u8 } else { value.clone() };
	bits > 0 && magnitude.bits() < bits
}
