//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		FixedIntError															
/// Represents all possible errors raised by fixed-width integer operations.
///
/// These are precondition violations rather than transient failures, so
/// nothing in the library retries or recovers from them. An operation either
/// succeeds completely or fails without touching any existing value.
///
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum FixedIntError {
	/// The byte length requested is too short to hold the value.
	#[error("Value does not fit in {length} byte(s)")]
	BytesOverflow {
		/// The byte length that was requested.
		length: usize,
	},
	
	/// The right-hand side of a division or modulo operation is zero.
	#[error("Division by zero")]
	DivisionByZero,
	
	/// The incoming value is empty, e.g. an empty string.
	#[error("Empty value")]
	EmptyValue,
	
	/// A bit or slice was written on a value whose type is not mutable.
	#[error("Value is immutable")]
	Immutable,
	
	/// A single-bit index lies outside the value's width.
	#[error("Bit index {index} out of range for width {width}")]
	IndexOutOfRange {
		/// The index as originally supplied.
		index: isize,
		
		/// The width of the value being indexed.
		width: u32,
	},
	
	/// The byte order name is not recognised.
	#[error("Invalid byte order: {0}")]
	InvalidByteOrder(String),
	
	/// The incoming text contains a character that is not a digit in the
	/// requested base.
	#[error("Invalid digit for base {1}: {0}")]
	InvalidDigit(char, u32),
	
	/// A slice step other than one was requested.
	#[error("Invalid slice step: {0}")]
	InvalidSliceStep(isize),
	
	/// The type name does not follow the `[Mutable][U]Int<width>` convention.
	#[error("Invalid type name: {0}")]
	InvalidTypeName(String),
	
	/// A width of zero was requested from the type factory.
	#[error("Invalid width: {0}")]
	InvalidWidth(u32),
	
	/// An exponent was negative, which has no integer result.
	#[error("Negative exponent")]
	NegativeExponent,
	
	/// A shift count was negative.
	#[error("Negative shift count")]
	NegativeShift,
	
	/// A negative value was to be encoded as unsigned bytes.
	#[error("Cannot encode a negative value as unsigned")]
	NegativeUnsigned,
	
	/// The value does not fit in the requested primitive integer type.
	#[error("Value out of range for destination type")]
	OutOfRange,
	
	/// An explicit signedness conflicts with the signedness of the type.
	#[error("Signedness conflict: type is {}, but {} was requested", signed_name(.expected), signed_name(.requested))]
	SignednessConflict {
		/// The signedness of the type.
		expected:  bool,
		
		/// The signedness that was passed in.
		requested: bool,
	},
	
	/// A slice lies outside the value's width, or is empty.
	#[error("Slice {start}..{stop} out of range for width {width}")]
	SliceOutOfRange {
		/// The canonical start of the slice.
		start: isize,
		
		/// The canonical stop of the slice.
		stop:  isize,
		
		/// The width of the value being sliced.
		width: u32,
	},
	
	/// The textual base is not zero or in the range 2 to 36.
	#[error("Unsupported base: {0}")]
	UnsupportedBase(u32),
}



//		Functions

//		signed_name																
/// Names a signedness for error messages.
const fn signed_name(signed: &bool) -> &'static str {
	if *signed { "signed" } else { "unsigned" }
}
